use super::strictness::{FilterMode, has_forced_value, is_strict};
use crate::domain::entities::{FilterRecord, TriState};

/// Category flags a toggle is interpreted against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionContext {
    pub is_strict: bool,
    pub has_forced: bool,
    pub supports_only_one: bool,
}

impl TransitionContext {
    pub fn for_record<K: Ord>(
        record: &FilterRecord<K>,
        default: bool,
        supports_only_one: bool,
    ) -> Self {
        Self {
            is_strict: is_strict(record, default),
            has_forced: has_forced_value(record),
            supports_only_one,
        }
    }

    pub fn mode(&self) -> FilterMode {
        FilterMode::from_flags(self.is_strict, self.has_forced)
    }
}

/// The value to store for an option after the user clicked it.
///
/// `click` is the raw checkbox output: `Included`/`Excluded` for a direct
/// click, `Unset` for a reset. Once a category is an allow-list every click
/// adds to the allow-list; once it is a deny-list every click adds an
/// exclusion. Only an untouched category stores the click as-is.
pub fn next_value(default: bool, click: TriState, ctx: TransitionContext) -> TriState {
    if ctx.supports_only_one {
        return if click.is_set() {
            TriState::Included
        } else {
            TriState::Unset
        };
    }

    match ctx.mode() {
        FilterMode::AllowList if click.is_set() => TriState::from_bool(default),
        FilterMode::DenyList if click.is_set() => TriState::from_bool(!default),
        FilterMode::AllowList | FilterMode::DenyList => TriState::Unset,
        FilterMode::Untouched => click,
    }
}

/// Applies one toggle to a category and returns the replacement record.
///
/// With `supports_only_one`, selecting an option drops every other key.
pub fn apply_toggle<K: Ord>(
    record: &FilterRecord<K>,
    key: K,
    default: bool,
    click: TriState,
    supports_only_one: bool,
) -> FilterRecord<K>
where
    K: Clone,
{
    let ctx = TransitionContext::for_record(record, default, supports_only_one);
    let value = next_value(default, click, ctx);

    let mut next = if supports_only_one && value.is_set() {
        FilterRecord::new()
    } else {
        record.clone()
    };
    next.set(key, value);
    next
}
