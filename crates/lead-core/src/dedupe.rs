use std::collections::BTreeSet;

use lead_model::{NormalizedRecord, Role};
use tracing::debug;

/// Records surviving deduplication plus what was removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupeOutcome {
    pub records: Vec<NormalizedRecord>,
    pub dropped_blank_address: usize,
    pub dropped_duplicates: usize,
}

/// Collapses records sharing a dedupe key, keeping the first occurrence.
///
/// `key_roles` must only name assigned roles; roles outside the address key
/// set are ignored. With no key roles the records pass through untouched.
/// When the address is part of the key, records whose line 1 is empty are
/// dropped before comparison.
pub fn dedupe(records: Vec<NormalizedRecord>, key_roles: &[Role]) -> DedupeOutcome {
    let keys: Vec<Role> = key_roles
        .iter()
        .copied()
        .filter(|role| role.is_key_role())
        .collect();
    if keys.is_empty() {
        return DedupeOutcome {
            records,
            ..DedupeOutcome::default()
        };
    }
    let require_address = keys.contains(&Role::Address);

    let mut seen = BTreeSet::new();
    let mut outcome = DedupeOutcome {
        records: Vec::with_capacity(records.len()),
        ..DedupeOutcome::default()
    };
    for record in records {
        if require_address && record.address_line1().unwrap_or_default().is_empty() {
            debug!(row = record.source_row, "dropping record without address");
            outcome.dropped_blank_address += 1;
            continue;
        }
        if seen.insert(record.dedupe_key(&keys)) {
            outcome.records.push(record);
        } else {
            debug!(row = record.source_row, "dropping duplicate record");
            outcome.dropped_duplicates += 1;
        }
    }
    outcome
}
