use decoy_dns_domain::RecordType;

const REVERSE_V4_SUFFIX: &[u8] = b"in-addr.arpa.";

/// Lookup key and query type the provider chain is consulted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedQuery<'a> {
    pub lookup_key: &'a str,
    pub effective_type: RecordType,
}

/// Derives the provider lookup key from a raw question.
///
/// - PTR questions of the form `<prefix>.<o1>.<o2>.<o3>.<o4>.in-addr.arpa.`
///   are looked up as `<o1>.<o2>.<o3>.<o4>.in-addr.arpa.`, which drops
///   service-discovery labels such as `b._dns-sd._udp`.
/// - ANY questions are looked up as A.
///
/// Never fails: a name that does not have the reverse shape is used as is.
pub struct QueryNormalizer;

impl QueryNormalizer {
    pub fn normalize(name: &str, record_type: RecordType) -> NormalizedQuery<'_> {
        match record_type {
            RecordType::PTR => NormalizedQuery {
                lookup_key: Self::reverse_v4_key(name).unwrap_or(name),
                effective_type: RecordType::PTR,
            },
            RecordType::ANY => NormalizedQuery {
                lookup_key: name,
                effective_type: RecordType::A,
            },
            other => NormalizedQuery {
                lookup_key: name,
                effective_type: other,
            },
        }
    }

    /// Returns the trailing `<o1>.<o2>.<o3>.<o4>.in-addr.arpa.` of `name` when
    /// it is preceded by at least one more label separator.
    ///
    /// Labels are scanned right to left at dot boundaries, so the cost is
    /// linear in the name length whatever the input looks like.
    pub fn reverse_v4_key(name: &str) -> Option<&str> {
        let bytes = name.as_bytes();
        let suffix_start = bytes.len().checked_sub(REVERSE_V4_SUFFIX.len())?;
        if !bytes[suffix_start..].eq_ignore_ascii_case(REVERSE_V4_SUFFIX) {
            return None;
        }

        // "<prefix>.<o1>.<o2>.<o3>.<o4>" followed by "."
        let head = name[..suffix_start].strip_suffix('.')?;

        let mut labels = head.rsplitn(5, '.');
        for _ in 0..4 {
            if !is_octet(labels.next()?) {
                return None;
            }
        }
        let prefix = labels.next()?;

        Some(&name[prefix.len() + 1..])
    }
}

fn is_octet(label: &str) -> bool {
    (1..=3).contains(&label.len())
        && label.bytes().all(|b| b.is_ascii_digit())
        && label.parse::<u16>().is_ok_and(|v| v <= 255)
}
