use colored::*;
use serde::Serialize;
use serde_json::json;

use crate::cli::cli_args::OutputFormat;
use crate::extractors::validate_records;
use crate::utils::{
    error::{TpspError, TpspResult},
    types::{LineStatus, StatusCategory},
};

const HEADERS: [&str; 2] = ["Linha", "Status"];
const COLUMN_GAP: &str = "  ";

/// Formats line statuses for CLI output
pub struct OutputFormatter;

impl OutputFormatter {
    /// Format records according to the specified format
    pub fn format_result(records: &[LineStatus], format: &OutputFormat) -> TpspResult<String> {
        match format {
            OutputFormat::Table => Self::render_table(records),
            OutputFormat::Json => Self::render_json(records),
        }
    }

    /// Two aligned columns with bold headers and a colour per status category.
    /// Every styled segment carries its own reset.
    pub fn render_table(records: &[LineStatus]) -> TpspResult<String> {
        validate_records(records)?;

        let statuses: Vec<String> = records.iter().map(|r| title_case(&r.status)).collect();

        let line_width = records
            .iter()
            .map(|r| visible_width(&r.line))
            .chain(std::iter::once(visible_width(HEADERS[0])))
            .max()
            .unwrap_or(0);
        let status_width = statuses
            .iter()
            .map(|s| visible_width(s))
            .chain(std::iter::once(visible_width(HEADERS[1])))
            .max()
            .unwrap_or(0);

        let mut output = String::new();

        output.push_str(&pad(&HEADERS[0].bold().to_string(), HEADERS[0], line_width));
        output.push_str(COLUMN_GAP);
        output.push_str(&HEADERS[1].bold().to_string());
        output.push('\n');

        output.push_str(&"-".repeat(line_width));
        output.push_str(COLUMN_GAP);
        output.push_str(&"-".repeat(status_width));

        for (record, status) in records.iter().zip(&statuses) {
            output.push('\n');
            output.push_str(&pad(&record.line, &record.line, line_width));
            output.push_str(COLUMN_GAP);
            output.push_str(&Self::style_status(status, record.category()).to_string());
        }

        Ok(output)
    }

    /// `{"code": 200, "data": [...], "message": "success"}` with sorted keys,
    /// four-space indentation and literal non-ASCII text
    pub fn render_json(records: &[LineStatus]) -> TpspResult<String> {
        validate_records(records)?;

        let payload = json!({
            "code": 200,
            "data": records,
            "message": "success"
        });

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        payload
            .serialize(&mut serializer)
            .map_err(|e| TpspError::Internal(format!("JSON serialization failed: {}", e)))?;

        String::from_utf8(buf).map_err(|e| TpspError::Internal(e.to_string()))
    }

    /// Colour for a status category
    fn style_status(status: &str, category: StatusCategory) -> ColoredString {
        match category {
            StatusCategory::Normal => status.green(),
            StatusCategory::Reduced => status.yellow(),
            StatusCategory::Halted => status.red(),
            StatusCategory::Closed => status.dimmed(),
            StatusCategory::Unknown => status.white(),
        }
    }

    /// Registered providers, one per line
    pub fn format_providers(providers: &[(String, String)]) -> String {
        let width = providers.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

        let mut output = format!("{}\n", "Available services:".bold());
        for (name, description) in providers {
            output.push_str(&format!(
                "  {} {}{}  {}\n",
                "•".green(),
                name.cyan(),
                " ".repeat(width - name.len()),
                description
            ));
        }
        output
    }

    /// Format error message for CLI display
    pub fn format_error(error: &TpspError) -> String {
        format!("{} {}", "Error:".red().bold(), error.to_string().red())
    }
}

/// Capitalise the first letter of every word and lower-case the rest, where a
/// word starts after any non-alphabetic character.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

fn visible_width(s: &str) -> usize {
    s.chars().count()
}

/// Right-pad `rendered` so that `plain` would fill `width` columns
fn pad(rendered: &str, plain: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(plain));
    format!("{}{}", rendered, " ".repeat(fill))
}
