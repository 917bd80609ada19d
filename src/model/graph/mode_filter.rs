use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// restricts which shipment records participate in graph construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeFilter {
    /// every record participates regardless of transport mode
    #[default]
    All,
    /// only records moved by the named transport mode participate
    Mode(String),
}

impl ModeFilter {
    /// builds a filter from an optional mode name, where absence selects
    /// all modes.
    pub fn from_mode(mode: Option<String>) -> ModeFilter {
        match mode {
            Some(m) => ModeFilter::Mode(m),
            None => ModeFilter::All,
        }
    }

    /// true if a record with the given transport mode should be included.
    /// mode names compare exactly, as they appear in the dataset.
    pub fn matches(&self, mode: &str) -> bool {
        match self {
            ModeFilter::All => true,
            ModeFilter::Mode(m) => m == mode,
        }
    }
}

impl Display for ModeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModeFilter::All => write!(f, "all modes"),
            ModeFilter::Mode(m) => write!(f, "{m}"),
        }
    }
}
