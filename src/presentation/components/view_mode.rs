use serde::{Deserialize, Serialize};

pub const COMPACT_CARD_MIN_WIDTH: u32 = 650;
pub const COMPACT_LABELS_MIN_WIDTH: u32 = 850;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardViewMode {
    Compact,
    Expanded,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppViewMode {
    SingleColumn,
    #[default]
    MultiColumn,
}

pub fn card_view_mode(card_width: u32) -> CardViewMode {
    if card_width >= COMPACT_CARD_MIN_WIDTH {
        CardViewMode::Compact
    } else {
        CardViewMode::Expanded
    }
}

pub fn enable_compact_labels(card_width: u32, repo_column_width: u32) -> bool {
    card_view_mode(card_width) == CardViewMode::Compact
        && card_width.saturating_sub(repo_column_width) >= COMPACT_LABELS_MIN_WIDTH
}

pub fn app_view_mode(preferred: AppViewMode, big_enough_for_multi_column: bool) -> AppViewMode {
    if big_enough_for_multi_column {
        preferred
    } else {
        AppViewMode::SingleColumn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_mode_switches_at_650() {
        assert_eq!(card_view_mode(649), CardViewMode::Expanded);
        assert_eq!(card_view_mode(650), CardViewMode::Compact);
    }

    #[test]
    fn compact_labels_need_room_after_the_repo_column() {
        assert!(!enable_compact_labels(900, 100));
        assert!(enable_compact_labels(1000, 150));
        assert!(!enable_compact_labels(600, 0));
    }

    #[test]
    fn small_screens_force_single_column() {
        assert_eq!(
            app_view_mode(AppViewMode::MultiColumn, false),
            AppViewMode::SingleColumn
        );
        assert_eq!(
            app_view_mode(AppViewMode::MultiColumn, true),
            AppViewMode::MultiColumn
        );
    }
}
