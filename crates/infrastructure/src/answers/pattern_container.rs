use arc_swap::ArcSwap;
use decoy_dns_application::ports::AnswerProvider;
use decoy_dns_domain::config::PatternAnswer;
use decoy_dns_domain::dns_record::builder::to_fqdn;
use decoy_dns_domain::{DomainError, RecordType};
use fancy_regex::Regex;
use std::sync::Arc;
use tracing::info;

const REGEX_PREFIX: char = '~';

struct PatternRule {
    source: Arc<str>,
    regex: Regex,
    record_type: RecordType,
    answer: Arc<str>,
}

/// Answers for names matching a wildcard or regular expression.
///
/// Rules are tried in configuration order and the first rule that matches
/// both the name and the record type answers. `*.test.` is a wildcard where
/// `*` spans any characters, dots included; `~^db[0-9]+\.lan\.$` is a raw
/// regular expression. Matching is anchored and case-insensitive.
pub struct PatternContainer {
    rules: ArcSwap<Vec<PatternRule>>,
}

impl PatternContainer {
    pub fn new(entries: &[PatternAnswer]) -> Result<Self, DomainError> {
        let rules = compile_rules(entries)?;
        info!(patterns = rules.len(), "Pattern answers compiled");
        Ok(Self {
            rules: ArcSwap::from_pointee(rules),
        })
    }

    pub fn empty() -> Self {
        Self {
            rules: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Replaces every rule. On error the current rules stay in place.
    pub fn reload(&self, entries: &[PatternAnswer]) -> Result<(), DomainError> {
        let rules = compile_rules(entries)?;
        info!(patterns = rules.len(), "Pattern answers reloaded");
        self.rules.store(Arc::new(rules));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rules.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.load().is_empty()
    }
}

impl AnswerProvider for PatternContainer {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn lookup(
        &self,
        key: &str,
        record_type: RecordType,
    ) -> Result<Option<Arc<str>>, DomainError> {
        let rules = self.rules.load();
        let key = to_fqdn(key);
        for rule in rules.iter().filter(|r| r.record_type == record_type) {
            let matched = rule
                .regex
                .is_match(&key)
                .map_err(|e| DomainError::ProviderFault {
                    provider: "pattern",
                    reason: format!("pattern '{}': {}", rule.source, e),
                })?;
            if matched {
                return Ok(Some(Arc::clone(&rule.answer)));
            }
        }
        Ok(None)
    }
}

fn compile_rules(entries: &[PatternAnswer]) -> Result<Vec<PatternRule>, DomainError> {
    entries
        .iter()
        .map(|entry| {
            let record_type = entry
                .parsed_type()
                .map_err(|e| DomainError::ConfigError(e.to_string()))?;
            Ok(PatternRule {
                source: Arc::from(entry.pattern.as_str()),
                regex: compile_pattern(&entry.pattern)?,
                record_type,
                answer: Arc::from(entry.answer.trim()),
            })
        })
        .collect()
}

/// Compiles a configured pattern into an anchored, case-insensitive regex.
pub fn compile_pattern(pattern: &str) -> Result<Regex, DomainError> {
    let pattern = pattern.trim();
    let body = match pattern.strip_prefix(REGEX_PREFIX) {
        Some(raw) => raw.to_string(),
        None => wildcard_to_regex(&to_fqdn(pattern)),
    };

    if body.is_empty() {
        return Err(DomainError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: "empty pattern".to_string(),
        });
    }

    Regex::new(&format!("(?i)^(?:{})$", body)).map_err(|e| DomainError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

fn wildcard_to_regex(wildcard: &str) -> String {
    wildcard
        .split('*')
        .map(|literal| fancy_regex::escape(literal).into_owned())
        .collect::<Vec<_>>()
        .join(".*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_to_regex_escapes_literals() {
        assert_eq!(wildcard_to_regex("*.test."), r".*\.test\.");
        assert_eq!(wildcard_to_regex("a*b"), "a.*b");
    }

    #[test]
    fn test_compile_pattern_anchors_wildcards() {
        let regex = compile_pattern("*.test.").unwrap();
        assert!(regex.is_match("foo.test.").unwrap());
        assert!(regex.is_match("a.b.test.").unwrap());
        assert!(regex.is_match("FOO.TEST.").unwrap());
        assert!(!regex.is_match("foo.test.example.").unwrap());
        assert!(!regex.is_match("footest.").unwrap());
    }

    #[test]
    fn test_compile_pattern_appends_root_to_wildcard() {
        let regex = compile_pattern("*.lan").unwrap();
        assert!(regex.is_match("printer.lan.").unwrap());
    }

    #[test]
    fn test_compile_pattern_rejects_bad_regex() {
        assert!(matches!(
            compile_pattern("~(unclosed"),
            Err(DomainError::InvalidPattern { .. })
        ));
        assert!(compile_pattern("~").is_err());
    }
}
