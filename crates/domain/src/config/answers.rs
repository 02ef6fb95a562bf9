use super::errors::ConfigError;
use crate::dns_record::builder::DEFAULT_TTL;
use crate::RecordType;
use serde::{Deserialize, Serialize};

/// Canned answers for the exact and pattern containers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnswersConfig {
    /// Register a PTR answer for every exact A answer.
    #[serde(default = "default_true")]
    pub reverse_ptr: bool,

    #[serde(default = "default_ttl")]
    pub ttl: u32,

    #[serde(default)]
    pub exact: Vec<ExactAnswer>,

    #[serde(default)]
    pub patterns: Vec<PatternAnswer>,
}

impl Default for AnswersConfig {
    fn default() -> Self {
        Self {
            reverse_ptr: true,
            ttl: DEFAULT_TTL,
            exact: vec![],
            patterns: vec![],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ExactAnswer {
    pub name: String,

    #[serde(default = "default_record_type")]
    pub record_type: String,

    pub answer: String,
}

impl ExactAnswer {
    pub fn new(name: &str, record_type: RecordType, answer: &str) -> Self {
        Self {
            name: name.to_string(),
            record_type: record_type.as_str().to_string(),
            answer: answer.to_string(),
        }
    }

    pub fn parsed_type(&self) -> Result<RecordType, ConfigError> {
        parse_answerable_type(&self.record_type, &self.name)
    }
}

/// A wildcard (`*.test.`) or, when prefixed with `~`, a raw regular expression.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PatternAnswer {
    pub pattern: String,

    #[serde(default = "default_record_type")]
    pub record_type: String,

    pub answer: String,
}

impl PatternAnswer {
    pub fn new(pattern: &str, record_type: RecordType, answer: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            record_type: record_type.as_str().to_string(),
            answer: answer.to_string(),
        }
    }

    pub fn parsed_type(&self) -> Result<RecordType, ConfigError> {
        parse_answerable_type(&self.record_type, &self.pattern)
    }
}

impl AnswersConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for entry in &self.exact {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Exact answer has an empty name".to_string(),
                ));
            }
            entry.parsed_type()?;
        }

        for entry in &self.patterns {
            if entry.pattern.trim().is_empty() || entry.pattern.trim() == "~" {
                return Err(ConfigError::Validation(
                    "Pattern answer has an empty pattern".to_string(),
                ));
            }
            entry.parsed_type()?;
        }

        Ok(())
    }
}

fn parse_answerable_type(raw: &str, owner: &str) -> Result<RecordType, ConfigError> {
    let record_type: RecordType = raw
        .parse()
        .map_err(|e: String| ConfigError::Validation(format!("{} ({})", e, owner)))?;
    if !record_type.is_answerable() {
        return Err(ConfigError::Validation(format!(
            "Record type {} cannot carry a canned answer ({})",
            record_type, owner
        )));
    }
    Ok(record_type)
}

fn default_true() -> bool {
    true
}

fn default_ttl() -> u32 {
    DEFAULT_TTL
}

fn default_record_type() -> String {
    "A".to_string()
}
