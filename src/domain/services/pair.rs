use super::transition::{TransitionContext, next_value};
use crate::domain::entities::TriState;

/// One side of a pair filter. `flag` is the stored value that isolates this
/// side: for read status, "unread" has flag `true` and "read" has `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairSide {
    pub key: &'static str,
    pub label: &'static str,
    pub flag: bool,
}

pub const READ: PairSide = PairSide {
    key: "read",
    label: "Read",
    flag: false,
};

pub const UNREAD: PairSide = PairSide {
    key: "unread",
    label: "Unread",
    flag: true,
};

pub const PUBLIC: PairSide = PairSide {
    key: "public",
    label: "Public",
    flag: false,
};

pub const PRIVATE: PairSide = PairSide {
    key: "private",
    label: "Private",
    flag: true,
};

impl PairSide {
    pub fn is_shown(self, stored: Option<bool>) -> bool {
        stored != Some(!self.flag)
    }

    pub fn checked(self, stored: Option<bool>) -> TriState {
        match stored {
            None => TriState::Unset,
            Some(_) => TriState::from_bool(self.is_shown(stored)),
        }
    }

    pub fn indeterminate_enabled(self, stored: Option<bool>) -> bool {
        stored.is_none()
    }

    /// Clicking a side while both are shown isolates it; any click while one
    /// side is isolated shows both again.
    pub fn next_value(self, stored: Option<bool>) -> Option<bool> {
        match stored {
            None => Some(self.flag),
            Some(_) => None,
        }
    }
}

pub fn single_checked(stored: Option<bool>) -> TriState {
    stored.into()
}

pub fn single_next_value(default: bool, click: TriState) -> Option<bool> {
    next_value(default, click, TransitionContext::default()).as_bool()
}
