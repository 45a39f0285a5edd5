use super::options::{
    EVENT_SUBJECT_TYPES, ISSUE_OR_PULL_REQUEST_SUBJECT_TYPES, NOTIFICATION_SUBJECT_TYPES,
};
use super::{EventAction, FilterRecord, NotificationReason, StateType, SubjectType, TriState};
use crate::domain::errors::FilterError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Notifications,
    IssueOrPr,
    Activity,
}

impl ColumnType {
    pub fn subject_types(self) -> &'static [SubjectType] {
        match self {
            ColumnType::Notifications => NOTIFICATION_SUBJECT_TYPES,
            ColumnType::IssueOrPr => ISSUE_OR_PULL_REQUEST_SUBJECT_TYPES,
            ColumnType::Activity => EVENT_SUBJECT_TYPES,
        }
    }

    pub fn state_supports_only_one(self) -> bool {
        self == ColumnType::IssueOrPr
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Notifications => write!(f, "notifications"),
            ColumnType::IssueOrPr => write!(f, "issue_or_pr"),
            ColumnType::Activity => write!(f, "activity"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionCategory {
    Inbox,
    SavedForLater,
    Unread,
    State,
    Draft,
    SubjectTypes,
    EventAction,
    NotificationReason,
    Privacy,
    Repos,
}

impl OptionCategory {
    pub const ALL: [OptionCategory; 10] = [
        OptionCategory::Inbox,
        OptionCategory::SavedForLater,
        OptionCategory::Unread,
        OptionCategory::State,
        OptionCategory::Draft,
        OptionCategory::SubjectTypes,
        OptionCategory::EventAction,
        OptionCategory::NotificationReason,
        OptionCategory::Privacy,
        OptionCategory::Repos,
    ];

    pub fn key(self) -> &'static str {
        match self {
            OptionCategory::Inbox => "inbox",
            OptionCategory::SavedForLater => "saved_for_later",
            OptionCategory::Unread => "unread",
            OptionCategory::State => "state",
            OptionCategory::Draft => "draft",
            OptionCategory::SubjectTypes => "subject_types",
            OptionCategory::EventAction => "event_action",
            OptionCategory::NotificationReason => "notification_reason",
            OptionCategory::Privacy => "privacy",
            OptionCategory::Repos => "repos",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            OptionCategory::Inbox => "Inbox",
            OptionCategory::SavedForLater => "Saved for later",
            OptionCategory::Unread => "Read status",
            OptionCategory::State => "State",
            OptionCategory::Draft => "Draft",
            OptionCategory::SubjectTypes => "Subject type",
            OptionCategory::EventAction => "Event action",
            OptionCategory::NotificationReason => "Subscription reason",
            OptionCategory::Privacy => "Privacy",
            OptionCategory::Repos => "Repositories",
        }
    }

    pub fn applies_to(self, column_type: ColumnType) -> bool {
        match self {
            OptionCategory::Inbox
            | OptionCategory::NotificationReason
            | OptionCategory::Privacy => column_type == ColumnType::Notifications,
            OptionCategory::EventAction => column_type == ColumnType::Activity,
            _ => true,
        }
    }
}

impl fmt::Display for OptionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for OptionCategory {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        OptionCategory::ALL
            .iter()
            .copied()
            .find(|category| category.key() == normalized)
            .ok_or_else(|| FilterError::unknown_option("category", s))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    #[serde(default, skip_serializing_if = "FilterRecord::is_empty")]
    pub repos: FilterRecord<String>,
}

impl OwnerFilter {
    fn is_empty(&self) -> bool {
        self.value.is_none() && self.repos.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, OwnerFilter>",
    into = "BTreeMap<String, OwnerFilter>"
)]
pub struct OwnerFilters(BTreeMap<String, OwnerFilter>);

impl OwnerFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn owners(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn owner_record(&self) -> FilterRecord<String> {
        self.0
            .iter()
            .filter_map(|(owner, filter)| filter.value.map(|value| (owner.clone(), value)))
            .collect()
    }

    pub fn repo_record(&self) -> FilterRecord<String> {
        self.0
            .iter()
            .flat_map(|(owner, filter)| {
                filter
                    .repos
                    .iter()
                    .map(move |(repo, value)| (format!("{owner}/{repo}"), value))
            })
            .collect()
    }

    pub fn repos_of(&self, owner: &str) -> Option<&FilterRecord<String>> {
        self.0.get(owner).map(|filter| &filter.repos)
    }

    pub fn owner_value(&self, owner: &str) -> TriState {
        self.0
            .get(owner)
            .and_then(|filter| filter.value)
            .into()
    }

    pub fn set_owner(&mut self, owner: &str, value: TriState) {
        self.0.entry(owner.to_string()).or_default().value = value.as_bool();
        self.prune(owner);
    }

    pub fn set_repo(&mut self, owner: &str, repo: &str, value: TriState) {
        self.0
            .entry(owner.to_string())
            .or_default()
            .repos
            .set(repo.to_string(), value);
        self.prune(owner);
    }

    fn prune(&mut self, owner: &str) {
        if self.0.get(owner).is_some_and(OwnerFilter::is_empty) {
            self.0.remove(owner);
        }
    }
}

impl FromIterator<(String, OwnerFilter)> for OwnerFilters {
    fn from_iter<I: IntoIterator<Item = (String, OwnerFilter)>>(iter: I) -> Self {
        let mut filters = OwnerFilters(iter.into_iter().collect());
        filters.0.retain(|_, filter| !filter.is_empty());
        filters
    }
}

impl From<BTreeMap<String, OwnerFilter>> for OwnerFilters {
    fn from(owners: BTreeMap<String, OwnerFilter>) -> Self {
        owners.into_iter().collect()
    }
}

impl From<OwnerFilters> for BTreeMap<String, OwnerFilter> {
    fn from(filters: OwnerFilters) -> Self {
        filters.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participating: Option<bool>,
    #[serde(default, skip_serializing_if = "FilterRecord::is_empty")]
    pub reasons: FilterRecord<NotificationReason>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFilters {
    #[serde(default, skip_serializing_if = "FilterRecord::is_empty")]
    pub actions: FilterRecord<EventAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unread: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    #[serde(default, skip_serializing_if = "FilterRecord::is_empty")]
    pub state: FilterRecord<StateType>,
    #[serde(default, skip_serializing_if = "FilterRecord::is_empty")]
    pub subject_types: FilterRecord<SubjectType>,
    #[serde(default, skip_serializing_if = "OwnerFilters::is_empty")]
    pub owners: OwnerFilters,
    #[serde(default)]
    pub notifications: NotificationFilters,
    #[serde(default)]
    pub activity: ActivityFilters,
}

impl ColumnFilters {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
    #[serde(default)]
    pub filters: ColumnFilters,
}

impl Column {
    pub fn new(id: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            id: id.into(),
            column_type,
            title: None,
            subtype: None,
            params: BTreeMap::new(),
            filters: ColumnFilters::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_filters(mut self, filters: ColumnFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }

    pub fn has_any_filter(&self) -> bool {
        let filters = &self.filters;

        let common = filters.saved.is_some()
            || filters.unread.is_some()
            || filters.draft.is_some()
            || !filters.state.is_empty()
            || !filters.subject_types.is_empty()
            || !filters.owners.is_empty();

        common
            || match self.column_type {
                ColumnType::Notifications => {
                    filters.private.is_some()
                        || filters.notifications.participating.is_some()
                        || !filters.notifications.reasons.is_empty()
                }
                ColumnType::Activity => !filters.activity.actions.is_empty(),
                ColumnType::IssueOrPr => filters.private.is_some(),
            }
    }
}
