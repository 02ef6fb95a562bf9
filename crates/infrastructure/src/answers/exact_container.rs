use arc_swap::ArcSwap;
use compact_str::CompactString;
use decoy_dns_application::ports::AnswerProvider;
use decoy_dns_domain::config::ExactAnswer;
use decoy_dns_domain::dns_record::builder::to_fqdn;
use decoy_dns_domain::{DomainError, RecordType};
use rustc_hash::FxBuildHasher;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, info};

type AnswerTable = HashMap<(CompactString, RecordType), Arc<str>, FxBuildHasher>;

/// Answers for fully-qualified names, keyed by lowercased name and type.
///
/// The table is swapped as a whole on [`reload`](Self::reload), so lookups
/// never see a half-built table.
pub struct ExactAnswerContainer {
    table: ArcSwap<AnswerTable>,
    reverse_ptr: bool,
}

impl ExactAnswerContainer {
    pub fn new(entries: &[ExactAnswer], reverse_ptr: bool) -> Result<Self, DomainError> {
        let table = build_table(entries, reverse_ptr)?;
        info!(entries = table.len(), "Exact answer table loaded");
        Ok(Self {
            table: ArcSwap::from_pointee(table),
            reverse_ptr,
        })
    }

    pub fn empty() -> Self {
        Self {
            table: ArcSwap::from_pointee(AnswerTable::default()),
            reverse_ptr: false,
        }
    }

    /// Replaces every entry. On error the current table stays in place.
    pub fn reload(&self, entries: &[ExactAnswer]) -> Result<(), DomainError> {
        let table = build_table(entries, self.reverse_ptr)?;
        info!(entries = table.len(), "Exact answer table reloaded");
        self.table.store(Arc::new(table));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.table.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.load().is_empty()
    }
}

impl AnswerProvider for ExactAnswerContainer {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn lookup(
        &self,
        key: &str,
        record_type: RecordType,
    ) -> Result<Option<Arc<str>>, DomainError> {
        let table = self.table.load();
        let key = table_key(key);
        Ok(table.get(&(key, record_type)).cloned())
    }
}

fn build_table(entries: &[ExactAnswer], reverse_ptr: bool) -> Result<AnswerTable, DomainError> {
    let mut table = AnswerTable::default();
    let mut reverse = Vec::new();

    for entry in entries {
        let record_type = entry
            .parsed_type()
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;
        let name = table_key(&entry.name);
        if name.is_empty() {
            return Err(DomainError::InvalidDomainName(entry.name.clone()));
        }
        let answer: Arc<str> = Arc::from(entry.answer.trim());

        if reverse_ptr && record_type == RecordType::A {
            if let Ok(ip) = answer.parse::<Ipv4Addr>() {
                reverse.push((reverse_v4_name(ip), name.clone()));
            }
        }

        table.insert((name, record_type), answer);
    }

    for (ptr_name, target) in reverse {
        let slot = table.entry((ptr_name, RecordType::PTR));
        if let std::collections::hash_map::Entry::Vacant(vacant) = slot {
            debug!(ptr = %vacant.key().0, target = %target, "Registered reverse answer");
            vacant.insert(Arc::from(target.as_str()));
        }
    }

    Ok(table)
}

fn table_key(name: &str) -> CompactString {
    CompactString::from(to_fqdn(name.trim()).to_ascii_lowercase())
}

/// `d.c.b.a.in-addr.arpa.` for `a.b.c.d`.
pub fn reverse_v4_name(ip: Ipv4Addr) -> CompactString {
    let [a, b, c, d] = ip.octets();
    compact_str::format_compact!("{}.{}.{}.{}.in-addr.arpa.", d, c, b, a)
}
