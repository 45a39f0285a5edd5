use crate::domain::entities::FilterRecord;

/// How a category's record is currently being used.
///
/// The mode is never stored. The first explicit click in an untouched
/// category decides it, and it stays until the record is empty again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// No explicit preference anywhere: every option is included.
    Untouched,
    /// Some option is pinned to the default: only pinned options count.
    AllowList,
    /// Only exclusions exist: everything not excluded is included.
    DenyList,
}

impl FilterMode {
    pub fn from_flags(is_strict: bool, has_forced: bool) -> Self {
        if is_strict {
            FilterMode::AllowList
        } else if has_forced {
            FilterMode::DenyList
        } else {
            FilterMode::Untouched
        }
    }

    pub fn of<K: Ord>(record: &FilterRecord<K>, default: bool) -> Self {
        Self::from_flags(is_strict(record, default), has_forced_value(record))
    }
}

pub fn count_with_value<K: Ord>(record: &FilterRecord<K>, value: bool) -> usize {
    record.iter().filter(|(_, stored)| *stored == value).count()
}

/// A record is strict once any option explicitly equals the default value.
pub fn is_strict<K: Ord>(record: &FilterRecord<K>, default: bool) -> bool {
    count_with_value(record, default) >= 1
}

pub fn has_forced_value<K: Ord>(record: &FilterRecord<K>) -> bool {
    !record.is_empty()
}
