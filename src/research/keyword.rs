use std::fmt;

use serde::Serialize;

use super::volume_format::format_thousands;

/// Mock keyword difficulty shown as a colored badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Competition {
    Low,
    Medium,
    High,
}

impl Competition {
    /// All levels, in draw order
    pub const ALL: [Competition; 3] = [Competition::Low, Competition::Medium, Competition::High];

    pub fn label(self) -> &'static str {
        match self {
            Competition::Low => "Low",
            Competition::Medium => "Medium",
            Competition::High => "High",
        }
    }
}

impl fmt::Display for Competition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single synthesized keyword record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordResult {
    /// 1-based position within its batch
    pub id: u32,
    pub phrase: String,
    pub search_volume: u32,
    pub competition_level: Competition,
}

impl KeywordResult {
    /// Search volume with thousands separators (e.g. "10,999")
    pub fn formatted_volume(&self) -> String {
        format_thousands(self.search_volume)
    }
}

/// A query together with the batch generated for it, as printed by
/// headless mode and Ctrl+O
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBatch {
    pub query: String,
    pub results: Vec<KeywordResult>,
}

impl SearchBatch {
    pub fn new(query: impl Into<String>, results: Vec<KeywordResult>) -> Self {
        Self {
            query: query.into(),
            results,
        }
    }

    pub fn to_json(&self) -> Result<String, crate::error::KeyscoutError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::error::KeyscoutError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
#[path = "keyword_tests.rs"]
mod keyword_tests;
