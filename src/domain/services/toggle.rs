use super::hierarchy::OwnerRepoResolver;
use super::pair::{self, PairSide};
use super::transition::apply_toggle;
use crate::domain::entities::{
    Column, ColumnFilters, EventAction, FilterOption, NotificationReason, OptionCategory,
    StateType, SubjectType, TriState,
};
use crate::domain::errors::FilterError;

pub const DEFAULT_BOOLEAN_VALUE: bool = true;

pub const INBOX_ALL: &str = "all";
pub const INBOX_PARTICIPATING: &str = "participating";
pub const SAVED_FOR_LATER: &str = "saved";
pub const DRAFT: &str = "draft";

pub fn toggle_option(
    column: &Column,
    category: OptionCategory,
    option: &str,
    click: TriState,
) -> Result<ColumnFilters, FilterError> {
    if !category.applies_to(column.column_type) {
        return Err(FilterError::CategoryUnavailable {
            category: category.to_string(),
            column_type: column.column_type.to_string(),
        });
    }

    let mut filters = column.filters.clone();
    let default = DEFAULT_BOOLEAN_VALUE;

    match category {
        OptionCategory::Inbox => {
            filters.notifications.participating = match option {
                INBOX_ALL => None,
                INBOX_PARTICIPATING => Some(true),
                _ => return Err(FilterError::unknown_option(category, option)),
            };
        }
        OptionCategory::SavedForLater => {
            expect_key(category, option, SAVED_FOR_LATER)?;
            filters.saved = pair::single_next_value(default, click);
        }
        OptionCategory::Draft => {
            expect_key(category, option, DRAFT)?;
            filters.draft = pair::single_next_value(default, click);
        }
        OptionCategory::Unread => {
            let side = pair_side(category, option, [pair::READ, pair::UNREAD])?;
            filters.unread = side.next_value(filters.unread);
        }
        OptionCategory::Privacy => {
            let side = pair_side(category, option, [pair::PUBLIC, pair::PRIVATE])?;
            filters.private = side.next_value(filters.private);
        }
        OptionCategory::State => {
            let state = StateType::parse(option)?;
            filters.state = apply_toggle(
                &filters.state,
                state,
                default,
                click,
                column.column_type.state_supports_only_one(),
            );
        }
        OptionCategory::SubjectTypes => {
            let subject_type = SubjectType::parse(option)?;
            if !column.column_type.subject_types().contains(&subject_type) {
                return Err(FilterError::unknown_option(category, option));
            }
            filters.subject_types =
                apply_toggle(&filters.subject_types, subject_type, default, click, false);
        }
        OptionCategory::NotificationReason => {
            let reason = NotificationReason::parse(option)?;
            filters.notifications.reasons =
                apply_toggle(&filters.notifications.reasons, reason, default, click, false);
        }
        OptionCategory::EventAction => {
            let action = EventAction::parse(option)?;
            filters.activity.actions =
                apply_toggle(&filters.activity.actions, action, default, click, false);
        }
        OptionCategory::Repos => {
            let resolver = OwnerRepoResolver::new(&column.filters.owners, default);
            match option.split_once('/') {
                None if !option.is_empty() => {
                    let value = resolver.next_owner_value(click);
                    filters.owners.set_owner(option, value);
                }
                Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => {
                    if resolver.repo(owner, repo).disabled {
                        return Err(FilterError::OptionDisabled {
                            owner: owner.to_string(),
                            repo: repo.to_string(),
                        });
                    }
                    let value = resolver.next_repo_value(owner, click);
                    filters.owners.set_repo(owner, repo, value);
                }
                _ => return Err(FilterError::unknown_option(category, option)),
            }
        }
    }

    Ok(filters)
}

fn expect_key(category: OptionCategory, option: &str, key: &str) -> Result<(), FilterError> {
    if option.eq_ignore_ascii_case(key) {
        Ok(())
    } else {
        Err(FilterError::unknown_option(category, option))
    }
}

fn pair_side(
    category: OptionCategory,
    option: &str,
    sides: [PairSide; 2],
) -> Result<PairSide, FilterError> {
    sides
        .into_iter()
        .find(|side| side.key.eq_ignore_ascii_case(option))
        .ok_or_else(|| FilterError::unknown_option(category, option))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ColumnType;

    #[test]
    fn state_is_exclusive_on_issue_columns_only() {
        let mut issues = Column::new("issues", ColumnType::IssueOrPr);
        issues.filters = toggle_option(&issues, OptionCategory::State, "open", TriState::Included)
            .unwrap();
        let filters =
            toggle_option(&issues, OptionCategory::State, "closed", TriState::Included).unwrap();
        assert_eq!(filters.state.get(&StateType::Open), TriState::Unset);
        assert_eq!(filters.state.get(&StateType::Closed), TriState::Included);

        let mut inbox = Column::new("inbox", ColumnType::Notifications);
        inbox.filters =
            toggle_option(&inbox, OptionCategory::State, "open", TriState::Included).unwrap();
        let filters =
            toggle_option(&inbox, OptionCategory::State, "closed", TriState::Excluded).unwrap();
        assert_eq!(filters.state.len(), 2);
        assert_eq!(filters.state.get(&StateType::Closed), TriState::Included);
    }

    #[test]
    fn categories_are_gated_by_column_type() {
        let column = Column::new("prs", ColumnType::IssueOrPr);
        assert!(matches!(
            toggle_option(&column, OptionCategory::NotificationReason, "mention", TriState::Included),
            Err(FilterError::CategoryUnavailable { .. })
        ));
        assert!(matches!(
            toggle_option(&column, OptionCategory::SubjectTypes, "Release", TriState::Included),
            Err(FilterError::UnknownOption { .. })
        ));
    }

    #[test]
    fn disabled_repo_toggles_are_rejected() {
        let mut column = Column::new("inbox", ColumnType::Notifications);
        column.filters =
            toggle_option(&column, OptionCategory::Repos, "octo", TriState::Excluded).unwrap();

        assert_eq!(
            toggle_option(&column, OptionCategory::Repos, "octo/hello", TriState::Included),
            Err(FilterError::OptionDisabled {
                owner: "octo".to_string(),
                repo: "hello".to_string(),
            })
        );
        assert!(toggle_option(&column, OptionCategory::Repos, "/", TriState::Included).is_err());
    }

    #[test]
    fn inbox_and_pairs_store_optional_booleans() {
        let mut column = Column::new("inbox", ColumnType::Notifications);
        column.filters =
            toggle_option(&column, OptionCategory::Inbox, "participating", TriState::Included)
                .unwrap();
        assert_eq!(column.filters.notifications.participating, Some(true));

        column.filters =
            toggle_option(&column, OptionCategory::Unread, "unread", TriState::Included).unwrap();
        assert_eq!(column.filters.unread, Some(true));

        column.filters =
            toggle_option(&column, OptionCategory::Unread, "read", TriState::Included).unwrap();
        assert_eq!(column.filters.unread, None);

        column.filters =
            toggle_option(&column, OptionCategory::SavedForLater, "saved", TriState::Excluded)
                .unwrap();
        assert_eq!(column.filters.saved, Some(false));
    }
}
