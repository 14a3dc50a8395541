use clap::{ArgAction, Parser};
use std::path::PathBuf;

pub const COPYRIGHT_INFO: &str = "
The person who associated a work with this deed has dedicated the work to the
public domain by waiving all of his or her rights to the work worldwide under
copyright law, including all related and neighboring rights, to the extent
allowed by law.

You can copy, modify, distribute and perform the work, even for commercial
purposes, all without asking permission.

AFFIRMER OFFERS THE WORK AS-IS AND MAKES NO REPRESENTATIONS OR WARRANTIES OF
ANY KIND CONCERNING THE WORK, EXPRESS, IMPLIED, STATUTORY OR OTHERWISE,
INCLUDING WITHOUT LIMITATION WARRANTIES OF TITLE, MERCHANTABILITY, FITNESS FOR
A PARTICULAR PURPOSE, NON INFRINGEMENT, OR THE ABSENCE OF LATENT OR OTHER
DEFECTS, ACCURACY, OR THE PRESENT OR ABSENCE OF ERRORS, WHETHER OR NOT
DISCOVERABLE, ALL TO THE GREATEST EXTENT PERMISSIBLE UNDER APPLICABLE LAW.

For more information, please see
<http://creativecommons.org/publicdomain/zero/1.0/>
";

const EXAMPLES: &str = "\
examples:
    $ tpsp cptm
    # => shows the current state of all CPTM lines

    $ tpsp metro --json
    # => shows the current state of all Metro lines and formats
         the output in JSON";

/// tpsp: transporte público de São Paulo
///
/// tpsp (portuguese for "São Paulo public transportation") is a tiny
/// command-line tool that tells you the current status of CPTM's and Metro
/// lines.
#[derive(Parser, Debug)]
#[command(name = "tpsp")]
#[command(version = concat!("(v", env!("CARGO_PKG_VERSION"), ")"))]
#[command(disable_version_flag = true)]
#[command(after_help = EXAMPLES)]
pub struct CliArgs {
    /// The public transportation service (see --list)
    #[arg(value_name = "SERVICE", required_unless_present_any = ["copyright", "list"])]
    pub service: Option<String>,

    /// Show the output in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Show the program version and exit
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Show the copyright information and exit
    #[arg(long)]
    pub copyright: bool,

    /// List the available services and exit
    #[arg(short, long)]
    pub list: bool,

    /// JSON configuration file (defaults to $TPSP_CONFIG)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print diagnostics to stderr
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colorized table output
    Table,
    /// JSON output
    Json,
}
