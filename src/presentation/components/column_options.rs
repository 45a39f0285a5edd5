use crate::domain::entities::{
    Column, CountSnapshot, CounterMetadata, EventAction, FilterOption, FilterRecord,
    NotificationReason, OptionCategory, StateType, TriState, sorted_by_label,
};
use crate::domain::services::pair::{self, PairSide};
use crate::domain::services::toggle::{
    DEFAULT_BOOLEAN_VALUE, DRAFT, INBOX_ALL, INBOX_PARTICIPATING, SAVED_FOR_LATER,
};
use crate::domain::services::{
    OwnerRepoResolver, has_forced_value, resolve_checked, resolve_indeterminate,
};
use std::collections::BTreeSet;

pub fn available_categories(column: &Column, counts: &CountSnapshot) -> Vec<OptionCategory> {
    OptionCategory::ALL
        .into_iter()
        .filter(|category| category.applies_to(column.column_type))
        .filter(|category| *category != OptionCategory::Repos || counts.has_owner_or_repo_choice())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionCheckbox {
    pub key: String,
    pub label: String,
    pub tooltip: Option<&'static str>,
    pub color: Option<&'static str>,
    pub checked: TriState,
    pub indeterminate_enabled: bool,
    pub disabled: bool,
    pub circle: bool,
    pub indent: bool,
    pub counts: Option<CounterMetadata>,
}

impl OptionCheckbox {
    fn new(key: impl Into<String>, label: impl Into<String>, checked: TriState) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            tooltip: None,
            color: None,
            checked,
            indeterminate_enabled: true,
            disabled: false,
            circle: false,
            indent: false,
            counts: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub category: OptionCategory,
    pub title: &'static str,
    pub has_changed: bool,
    pub options: Vec<OptionCheckbox>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnOptionsView {
    pub column_id: String,
    pub title: String,
    pub can_clear: bool,
    pub sections: Vec<CategorySection>,
}

impl ColumnOptionsView {
    pub fn build(column: &Column, counts: &CountSnapshot) -> Self {
        let sections = available_categories(column, counts)
            .into_iter()
            .map(|category| build_section(column, counts, category))
            .collect();

        Self {
            column_id: column.id.clone(),
            title: column.display_title().to_string(),
            can_clear: column.has_any_filter(),
            sections,
        }
    }

    pub fn section(&self, category: OptionCategory) -> Option<&CategorySection> {
        self.sections
            .iter()
            .find(|section| section.category == category)
    }
}

fn build_section(column: &Column, counts: &CountSnapshot, category: OptionCategory) -> CategorySection {
    let filters = &column.filters;
    let default = DEFAULT_BOOLEAN_VALUE;

    let (has_changed, options) = match category {
        OptionCategory::Inbox => {
            let participating = filters.notifications.participating == Some(true);
            let radio = |key: &str, label: &str, checked: bool| OptionCheckbox {
                circle: true,
                indeterminate_enabled: false,
                counts: checked.then(|| counts.option(category, key)).flatten(),
                ..OptionCheckbox::new(key, label, TriState::from_bool(checked))
            };
            (
                false,
                vec![
                    radio(INBOX_ALL, "All", !participating),
                    radio(INBOX_PARTICIPATING, "Participating", participating),
                ],
            )
        }
        OptionCategory::SavedForLater => (
            filters.saved.is_some(),
            vec![single(counts, category, SAVED_FOR_LATER, "Saved for later", filters.saved)],
        ),
        OptionCategory::Draft => (
            filters.draft.is_some(),
            vec![single(counts, category, DRAFT, "Draft", filters.draft)],
        ),
        OptionCategory::Unread => (
            filters.unread.is_some(),
            pair_options(counts, category, [pair::UNREAD, pair::READ], filters.unread),
        ),
        OptionCategory::Privacy => (
            filters.private.is_some(),
            pair_options(counts, category, [pair::PUBLIC, pair::PRIVATE], filters.private),
        ),
        OptionCategory::State => (
            has_forced_value(&filters.state),
            record_options(
                counts,
                category,
                &filters.state,
                StateType::all(),
                column.column_type.state_supports_only_one(),
                false,
            ),
        ),
        OptionCategory::SubjectTypes => (
            has_forced_value(&filters.subject_types),
            record_options(
                counts,
                category,
                &filters.subject_types,
                column.column_type.subject_types(),
                false,
                true,
            ),
        ),
        OptionCategory::EventAction => (
            has_forced_value(&filters.activity.actions),
            record_options(
                counts,
                category,
                &filters.activity.actions,
                EventAction::all(),
                false,
                true,
            ),
        ),
        OptionCategory::NotificationReason => (
            has_forced_value(&filters.notifications.reasons),
            record_options(
                counts,
                category,
                &filters.notifications.reasons,
                NotificationReason::all(),
                false,
                true,
            ),
        ),
        OptionCategory::Repos => {
            let resolver = OwnerRepoResolver::new(&filters.owners, default);
            (resolver.has_changed(), repo_options(counts, &resolver))
        }
    };

    CategorySection {
        category,
        title: category.title(),
        has_changed,
        options,
    }
}

fn single(
    counts: &CountSnapshot,
    category: OptionCategory,
    key: &str,
    label: &str,
    stored: Option<bool>,
) -> OptionCheckbox {
    OptionCheckbox {
        counts: counts.option(category, key),
        ..OptionCheckbox::new(key, label, pair::single_checked(stored))
    }
}

fn pair_options(
    counts: &CountSnapshot,
    category: OptionCategory,
    sides: [PairSide; 2],
    stored: Option<bool>,
) -> Vec<OptionCheckbox> {
    sides
        .into_iter()
        .map(|side| OptionCheckbox {
            indeterminate_enabled: side.indeterminate_enabled(stored),
            counts: counts.option(category, side.key),
            ..OptionCheckbox::new(side.key, side.label, side.checked(stored))
        })
        .collect()
}

fn record_options<T: FilterOption>(
    counts: &CountSnapshot,
    category: OptionCategory,
    record: &FilterRecord<T>,
    options: &[T],
    supports_only_one: bool,
    sort_by_label: bool,
) -> Vec<OptionCheckbox> {
    let default = DEFAULT_BOOLEAN_VALUE;
    let options = if sort_by_label {
        sorted_by_label(options)
    } else {
        options.to_vec()
    };

    options
        .into_iter()
        .map(|option| {
            let metadata = option.metadata();
            OptionCheckbox {
                tooltip: metadata.tooltip,
                color: metadata.color,
                indeterminate_enabled: resolve_indeterminate(record, &option, default),
                circle: supports_only_one,
                counts: counts.option(category, option.key()),
                ..OptionCheckbox::new(
                    option.key(),
                    metadata.label,
                    resolve_checked(record, &option, default, None),
                )
            }
        })
        .collect()
}

fn repo_options(counts: &CountSnapshot, resolver: &OwnerRepoResolver<'_>) -> Vec<OptionCheckbox> {
    let mut options = Vec::new();

    for (owner, owner_counts) in &counts.owners {
        let state = resolver.owner(owner);
        options.push(OptionCheckbox {
            indeterminate_enabled: state.indeterminate_enabled,
            counts: Some(owner_counts.metadata),
            ..OptionCheckbox::new(owner.as_str(), owner.as_str(), state.checked)
        });

        let repos: BTreeSet<&String> = owner_counts.repos.keys().collect();
        for repo in repos {
            let state = resolver.repo(owner, repo);
            options.push(OptionCheckbox {
                indeterminate_enabled: state.indeterminate_enabled,
                disabled: state.disabled,
                indent: true,
                counts: owner_counts.repos.get(repo).copied(),
                ..OptionCheckbox::new(format!("{owner}/{repo}"), repo.as_str(), state.checked)
            });
        }
    }

    options
}

pub fn section_summary(section: &CategorySection) -> String {
    let included = section
        .options
        .iter()
        .filter(|option| option.checked != TriState::Excluded && !option.disabled)
        .count();

    match section.category {
        OptionCategory::Inbox => section
            .options
            .iter()
            .find(|option| option.checked == TriState::Included)
            .map(|option| option.label.clone())
            .unwrap_or_default(),
        _ if !section.has_changed => "All".to_string(),
        _ => format!("{}/{}", included, section.options.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ColumnType, SubjectType};

    #[test]
    fn categories_follow_column_type_and_counts() {
        let inbox = Column::new("inbox", ColumnType::Notifications);
        let categories = available_categories(&inbox, &CountSnapshot::default());
        assert_eq!(categories.first(), Some(&OptionCategory::Inbox));
        assert!(categories.contains(&OptionCategory::Privacy));
        assert!(!categories.contains(&OptionCategory::EventAction));
        assert!(!categories.contains(&OptionCategory::Repos));

        let counts = CountSnapshot::default()
            .with_repo("octo", "hello", CounterMetadata::total(1))
            .with_repo("octo", "spoon", CounterMetadata::total(2));
        let activity = Column::new("feed", ColumnType::Activity);
        let categories = available_categories(&activity, &counts);
        assert!(categories.contains(&OptionCategory::EventAction));
        assert_eq!(categories.last(), Some(&OptionCategory::Repos));
    }

    #[test]
    fn single_owner_with_one_repo_hides_repositories() {
        let counts = CountSnapshot::default().with_repo("octo", "hello", CounterMetadata::total(1));
        let column = Column::new("prs", ColumnType::IssueOrPr);
        assert!(!available_categories(&column, &counts).contains(&OptionCategory::Repos));
    }

    #[test]
    fn state_options_are_radios_on_issue_columns() {
        let column = Column::new("prs", ColumnType::IssueOrPr);
        let view = ColumnOptionsView::build(&column, &CountSnapshot::default());
        let state = view.section(OptionCategory::State).unwrap();

        assert!(state.options.iter().all(|option| option.circle));
        assert!(!state.has_changed);

        let subject_types = view.section(OptionCategory::SubjectTypes).unwrap();
        let labels: Vec<&str> = subject_types
            .options
            .iter()
            .map(|option| option.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Issue", "Pull Request"]);
    }

    #[test]
    fn strict_record_excludes_unlisted_options() {
        let mut column = Column::new("feed", ColumnType::Activity);
        column.filters.subject_types = FilterRecord::new().with(SubjectType::Release, true);

        let view = ColumnOptionsView::build(&column, &CountSnapshot::default());
        let section = view.section(OptionCategory::SubjectTypes).unwrap();
        let release = section.options.iter().find(|o| o.key == "Release").unwrap();
        let tag = section.options.iter().find(|o| o.key == "Tag").unwrap();

        assert!(section.has_changed);
        assert_eq!(release.checked, TriState::Included);
        assert_eq!(tag.checked, TriState::Excluded);
        assert!(!tag.indeterminate_enabled);
        assert_eq!(section_summary(section), "1/10");
    }

    #[test]
    fn repos_are_nested_under_owners() {
        let counts = CountSnapshot::default()
            .with_repo("octo", "spoon", CounterMetadata::total(1))
            .with_repo("octo", "hello", CounterMetadata::total(2))
            .with_repo("rust-lang", "rust", CounterMetadata::total(3));
        let mut column = Column::new("inbox", ColumnType::Notifications);
        column.filters.owners.set_owner("octo", TriState::Excluded);

        let view = ColumnOptionsView::build(&column, &counts);
        let repos = view.section(OptionCategory::Repos).unwrap();
        let keys: Vec<&str> = repos.options.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["octo", "octo/hello", "octo/spoon", "rust-lang", "rust-lang/rust"]
        );
        assert!(repos.options[1].disabled);
        assert!(repos.options[1].indent);
        assert!(!repos.options[4].disabled);
        assert_eq!(repos.options[0].counts.and_then(|c| c.total), Some(3));
    }

    #[test]
    fn inbox_marks_the_active_radio() {
        let mut column = Column::new("inbox", ColumnType::Notifications);
        column.filters.notifications.participating = Some(true);

        let view = ColumnOptionsView::build(&column, &CountSnapshot::default());
        let inbox = view.section(OptionCategory::Inbox).unwrap();
        assert_eq!(inbox.options[0].checked, TriState::Excluded);
        assert_eq!(inbox.options[1].checked, TriState::Included);
        assert_eq!(section_summary(inbox), "Participating");
    }
}
