//! Duplicate elimination over the full identity key.

use std::collections::HashMap;

use layoffs_model::{IdentityKey, NullKeyMode, Record};

/// Group key for one record; `Unique` marks a key that can never match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum GroupKey {
    Shared(IdentityKey),
    Unique(usize),
}

fn group_key(record: &Record, idx: usize, mode: NullKeyMode) -> GroupKey {
    let key = IdentityKey::of(record);
    match mode {
        NullKeyMode::Distinct if key.has_null() => GroupKey::Unique(idx),
        _ => GroupKey::Shared(key),
    }
}

/// Assign each record its 1-based duplicate rank within its identity group.
///
/// Ranks follow source order, so the first occurrence of a key is rank 1.
pub fn rank_duplicates(records: &[Record], mode: NullKeyMode) -> Vec<usize> {
    let mut groups: HashMap<GroupKey, Vec<usize>> = HashMap::new();
    for (idx, record) in records.iter().enumerate() {
        groups
            .entry(group_key(record, idx, mode))
            .or_default()
            .push(idx);
    }
    let mut ranks = vec![0; records.len()];
    for members in groups.values() {
        for (position, &idx) in members.iter().enumerate() {
            ranks[idx] = position + 1;
        }
    }
    ranks
}

/// Keep only rank-1 records, preserving source order.
pub fn dedupe_records(records: Vec<Record>, mode: NullKeyMode) -> Vec<Record> {
    let ranks = rank_duplicates(&records, mode);
    records
        .into_iter()
        .zip(ranks)
        .filter_map(|(record, rank)| (rank == 1).then_some(record))
        .collect()
}
