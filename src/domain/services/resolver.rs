use super::strictness::is_strict;
use crate::domain::entities::{FilterRecord, TriState};
use std::borrow::Borrow;

/// The state a checkbox shows for `key`.
///
/// An explicit preference always wins. Otherwise a strict record reads the
/// key as excluded (it is not on the allow-list) and a non-strict record
/// reads it as unset. `strict_override` lets hierarchical callers supply the
/// strictness of a wider scope.
pub fn resolve_checked<K, Q>(
    record: &FilterRecord<K>,
    key: &Q,
    default: bool,
    strict_override: Option<bool>,
) -> TriState
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    let stored = record.get(key);
    if stored.is_set() {
        return stored;
    }

    if strict_override.unwrap_or_else(|| is_strict(record, default)) {
        TriState::from_bool(!default)
    } else {
        TriState::Unset
    }
}

/// Whether the checkbox for `key` may show (and cycle through) the
/// indeterminate state.
pub fn resolve_indeterminate<K, Q>(record: &FilterRecord<K>, key: &Q, default: bool) -> bool
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    !is_strict(record, default) || resolve_checked(record, key, default, None).is(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_keys_are_unset_in_a_lenient_record() {
        let record = FilterRecord::new().with("a", false);
        assert_eq!(resolve_checked(&record, "b", true, None), TriState::Unset);
        assert!(resolve_indeterminate(&record, "b", true));
    }

    #[test]
    fn explicit_values_win_regardless_of_strictness() {
        let record = FilterRecord::new().with("a", true).with("b", false);
        assert_eq!(resolve_checked(&record, "a", true, None), TriState::Included);
        assert_eq!(resolve_checked(&record, "b", true, None), TriState::Excluded);
        assert_eq!(resolve_checked(&record, "b", true, Some(false)), TriState::Excluded);
    }

    #[test]
    fn strict_records_exclude_unlisted_keys() {
        let record = FilterRecord::new().with("a", true);
        assert_eq!(resolve_checked(&record, "b", true, None), TriState::Excluded);
        assert!(!resolve_indeterminate(&record, "b", true));
        assert!(resolve_indeterminate(&record, "a", true));
    }

    #[test]
    fn override_replaces_the_records_own_strictness() {
        let empty = FilterRecord::<&str>::new();
        assert_eq!(resolve_checked(&empty, "a", true, Some(true)), TriState::Excluded);

        let strict = FilterRecord::new().with("a", true);
        assert_eq!(resolve_checked(&strict, "b", true, Some(false)), TriState::Unset);
    }
}
