use serde::{Deserialize, Serialize};

/// Canonical record every provider converges to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStatus {
    pub line: String,
    pub status: String,
}

impl LineStatus {
    pub fn new(line: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            status: status.into(),
        }
    }

    /// Category of this record's status text
    pub fn category(&self) -> StatusCategory {
        StatusCategory::classify(&self.status)
    }
}

/// Display classification of a free-text status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Normal,
    Reduced,
    Halted,
    Closed,
    Unknown,
}

impl StatusCategory {
    /// Substring markers, in precedence order
    const MARKERS: [(&'static str, StatusCategory); 4] = [
        ("normal", StatusCategory::Normal),
        ("reduzida", StatusCategory::Reduced),
        ("paralisada", StatusCategory::Halted),
        ("encerrada", StatusCategory::Closed),
    ];

    /// Classify a status string; matching is case-insensitive and the first
    /// marker found wins.
    pub fn classify(status: &str) -> Self {
        let lowered = status.to_lowercase();
        Self::MARKERS
            .iter()
            .find(|(marker, _)| lowered.contains(marker))
            .map(|(_, category)| *category)
            .unwrap_or(StatusCategory::Unknown)
    }
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusCategory::Normal => write!(f, "normal"),
            StatusCategory::Reduced => write!(f, "reduced"),
            StatusCategory::Halted => write!(f, "halted"),
            StatusCategory::Closed => write!(f, "closed"),
            StatusCategory::Unknown => write!(f, "unknown"),
        }
    }
}
