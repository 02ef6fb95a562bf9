use compact_str::CompactString;
use decoy_dns_application::ports::AnswerProvider;
use decoy_dns_domain::config::SafeBoxConfig;
use decoy_dns_domain::dns_record::builder::to_fqdn;
use decoy_dns_domain::{DomainError, RecordType};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Last-resort provider that sends every A and AAAA query to a harmless
/// local address while enabled.
///
/// Names equal to or below a bypass suffix are never answered here.
pub struct SafeBoxProvider {
    enabled: AtomicBool,
    ipv4: Arc<str>,
    ipv6: Arc<str>,
    bypass: Vec<CompactString>,
}

impl SafeBoxProvider {
    pub fn new(config: &SafeBoxConfig) -> Result<Self, DomainError> {
        let ipv4 = config
            .ipv4_addr()
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;
        let ipv6 = config
            .ipv6_addr()
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;

        Ok(Self {
            enabled: AtomicBool::new(config.enabled),
            ipv4: Arc::from(ipv4.to_string()),
            ipv6: Arc::from(ipv6.to_string()),
            bypass: config
                .bypass
                .iter()
                .map(|suffix| CompactString::from(to_fqdn(suffix.trim()).to_ascii_lowercase()))
                .filter(|suffix| !suffix.is_empty())
                .collect(),
        })
    }

    pub fn disabled() -> Self {
        Self {
            enabled: AtomicBool::new(false),
            ipv4: Arc::from("127.0.0.1"),
            ipv6: Arc::from("::1"),
            bypass: vec![],
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
        info!(enabled, "Safe box toggled");
    }

    fn is_bypassed(&self, key: &str) -> bool {
        let key = to_fqdn(key).to_ascii_lowercase();
        self.bypass.iter().any(|suffix| is_same_or_subdomain(&key, suffix))
    }
}

impl AnswerProvider for SafeBoxProvider {
    fn name(&self) -> &'static str {
        "safe_box"
    }

    fn lookup(
        &self,
        key: &str,
        record_type: RecordType,
    ) -> Result<Option<Arc<str>>, DomainError> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let answer = match record_type {
            RecordType::A => &self.ipv4,
            RecordType::AAAA => &self.ipv6,
            _ => return Ok(None),
        };

        if self.is_bypassed(key) {
            return Ok(None);
        }

        Ok(Some(Arc::clone(answer)))
    }
}

fn is_same_or_subdomain(name: &str, suffix: &str) -> bool {
    if name == suffix {
        return true;
    }
    name.len() > suffix.len()
        && name.ends_with(suffix)
        && name.as_bytes()[name.len() - suffix.len() - 1] == b'.'
}
