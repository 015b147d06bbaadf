// src/merge.rs
// Priority-ordered consolidation: sources are folded in caller order and an
// id already present never gets overwritten, so earlier sources win.

use std::collections::hash_map::Entry;

use crate::sources::SourceMap;

/// Fold one source into the accumulator. Returns how many ids were new;
/// the caller reports found-vs-added per source.
pub fn merge_into(merged: &mut SourceMap, entries: SourceMap) -> usize {
    let mut added = 0;
    for (tid, name) in entries {
        if let Entry::Vacant(slot) = merged.entry(tid) {
            slot.insert(name);
            added += 1;
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src(pairs: &[(u64, &str)]) -> SourceMap {
        pairs.iter().map(|(t, n)| (*t, s!(*n))).collect()
    }

    #[test]
    fn earlier_source_wins_on_conflict() {
        let mut merged = SourceMap::new();
        merge_into(&mut merged, src(&[(0x10, "A")]));
        merge_into(&mut merged, src(&[(0x10, "B")]));
        assert_eq!(merged[&0x10], "A");

        let mut merged = SourceMap::new();
        merge_into(&mut merged, src(&[(0x10, "B")]));
        merge_into(&mut merged, src(&[(0x10, "A")]));
        assert_eq!(merged[&0x10], "B");
    }

    #[test]
    fn merging_same_source_twice_is_idempotent() {
        let entries = src(&[(1, "one"), (2, "two")]);

        let mut once = SourceMap::new();
        merge_into(&mut once, entries.clone());

        let mut twice = SourceMap::new();
        merge_into(&mut twice, entries.clone());
        let added = merge_into(&mut twice, entries);

        assert_eq!(added, 0);
        assert_eq!(once, twice);
    }

    #[test]
    fn added_counts_only_new_ids() {
        let mut merged = SourceMap::new();
        assert_eq!(merge_into(&mut merged, src(&[(1, "a"), (2, "b")])), 2);
        assert_eq!(merge_into(&mut merged, src(&[(2, "x"), (3, "c")])), 1);
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn empty_source_is_fine() {
        let mut merged = src(&[(1, "a")]);
        assert_eq!(merge_into(&mut merged, SourceMap::new()), 0);
        assert_eq!(merged.len(), 1);
    }
}
