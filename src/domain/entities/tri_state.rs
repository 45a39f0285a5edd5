use crate::domain::errors::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Records never store `Unset`; writing it removes the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum TriState {
    Included,
    Excluded,
    #[default]
    Unset,
}

impl TriState {
    pub fn from_bool(value: bool) -> Self {
        if value {
            TriState::Included
        } else {
            TriState::Excluded
        }
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            TriState::Included => Some(true),
            TriState::Excluded => Some(false),
            TriState::Unset => None,
        }
    }

    pub fn is_set(self) -> bool {
        !matches!(self, TriState::Unset)
    }

    pub fn is(self, value: bool) -> bool {
        self.as_bool() == Some(value)
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        value.map_or(TriState::Unset, TriState::from_bool)
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        value.as_bool()
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriState::Included => write!(f, "include"),
            TriState::Excluded => write!(f, "exclude"),
            TriState::Unset => write!(f, "reset"),
        }
    }
}

impl FromStr for TriState {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "include" | "included" | "true" | "on" => Ok(TriState::Included),
            "exclude" | "excluded" | "false" | "off" => Ok(TriState::Excluded),
            "reset" | "unset" | "null" | "none" => Ok(TriState::Unset),
            _ => Err(FilterError::unknown_option("click", s)),
        }
    }
}
