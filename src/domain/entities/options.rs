use crate::domain::errors::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionMetadata {
    pub label: &'static str,
    pub color: Option<&'static str>,
    pub tooltip: Option<&'static str>,
}

impl OptionMetadata {
    const fn new(label: &'static str) -> Self {
        Self {
            label,
            color: None,
            tooltip: None,
        }
    }

    const fn with_color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }

    const fn with_tooltip(mut self, tooltip: &'static str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }
}

pub trait FilterOption: Copy + Ord + fmt::Debug + 'static {
    const CATEGORY: &'static str;

    fn all() -> &'static [Self];

    fn key(self) -> &'static str;

    fn metadata(self) -> OptionMetadata;

    fn parse(value: &str) -> Result<Self, FilterError> {
        Self::all()
            .iter()
            .copied()
            .find(|option| option.key().eq_ignore_ascii_case(value))
            .ok_or_else(|| FilterError::unknown_option(Self::CATEGORY, value))
    }
}

pub fn sorted_by_label<T: FilterOption>(options: &[T]) -> Vec<T> {
    let mut sorted = options.to_vec();
    sorted.sort_by_key(|option| option.metadata().label);
    sorted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateType {
    Open,
    Closed,
    Merged,
}

impl FilterOption for StateType {
    const CATEGORY: &'static str = "state";

    fn all() -> &'static [Self] {
        &[StateType::Open, StateType::Closed, StateType::Merged]
    }

    fn key(self) -> &'static str {
        match self {
            StateType::Open => "open",
            StateType::Closed => "closed",
            StateType::Merged => "merged",
        }
    }

    fn metadata(self) -> OptionMetadata {
        match self {
            StateType::Open => OptionMetadata::new("Open").with_color("green"),
            StateType::Closed => OptionMetadata::new("Closed").with_color("red"),
            StateType::Merged => OptionMetadata::new("Merged").with_color("purple"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SubjectType {
    Branch,
    Commit,
    Issue,
    PullRequest,
    PullRequestReview,
    Release,
    Repository,
    RepositoryInvitation,
    RepositoryVulnerabilityAlert,
    Tag,
    User,
    Wiki,
}

pub const EVENT_SUBJECT_TYPES: &[SubjectType] = &[
    SubjectType::Branch,
    SubjectType::Commit,
    SubjectType::Issue,
    SubjectType::PullRequest,
    SubjectType::PullRequestReview,
    SubjectType::Release,
    SubjectType::Repository,
    SubjectType::Tag,
    SubjectType::User,
    SubjectType::Wiki,
];

pub const ISSUE_OR_PULL_REQUEST_SUBJECT_TYPES: &[SubjectType] =
    &[SubjectType::Issue, SubjectType::PullRequest];

pub const NOTIFICATION_SUBJECT_TYPES: &[SubjectType] = &[
    SubjectType::Commit,
    SubjectType::Issue,
    SubjectType::PullRequest,
    SubjectType::Release,
    SubjectType::RepositoryInvitation,
    SubjectType::RepositoryVulnerabilityAlert,
];

impl FilterOption for SubjectType {
    const CATEGORY: &'static str = "subject_types";

    fn all() -> &'static [Self] {
        &[
            SubjectType::Branch,
            SubjectType::Commit,
            SubjectType::Issue,
            SubjectType::PullRequest,
            SubjectType::PullRequestReview,
            SubjectType::Release,
            SubjectType::Repository,
            SubjectType::RepositoryInvitation,
            SubjectType::RepositoryVulnerabilityAlert,
            SubjectType::Tag,
            SubjectType::User,
            SubjectType::Wiki,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            SubjectType::Branch => "Branch",
            SubjectType::Commit => "Commit",
            SubjectType::Issue => "Issue",
            SubjectType::PullRequest => "PullRequest",
            SubjectType::PullRequestReview => "PullRequestReview",
            SubjectType::Release => "Release",
            SubjectType::Repository => "Repository",
            SubjectType::RepositoryInvitation => "RepositoryInvitation",
            SubjectType::RepositoryVulnerabilityAlert => "RepositoryVulnerabilityAlert",
            SubjectType::Tag => "Tag",
            SubjectType::User => "User",
            SubjectType::Wiki => "Wiki",
        }
    }

    fn metadata(self) -> OptionMetadata {
        match self {
            SubjectType::Branch => OptionMetadata::new("Branch").with_color("pink"),
            SubjectType::Commit => OptionMetadata::new("Commit").with_color("pink"),
            SubjectType::Issue => OptionMetadata::new("Issue").with_color("green"),
            SubjectType::PullRequest => OptionMetadata::new("Pull Request").with_color("green"),
            SubjectType::PullRequestReview => {
                OptionMetadata::new("Pull Request Review").with_color("yellow")
            }
            SubjectType::Release => OptionMetadata::new("Release").with_color("orange"),
            SubjectType::Repository => OptionMetadata::new("Repository").with_color("blue"),
            SubjectType::RepositoryInvitation => {
                OptionMetadata::new("Invitation").with_color("brown")
            }
            SubjectType::RepositoryVulnerabilityAlert => {
                OptionMetadata::new("Security Alert").with_color("red")
            }
            SubjectType::Tag => OptionMetadata::new("Tag").with_color("gray"),
            SubjectType::User => OptionMetadata::new("User").with_color("teal"),
            SubjectType::Wiki => OptionMetadata::new("Wiki").with_color("gray"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationReason {
    Assign,
    Author,
    Comment,
    Invitation,
    Manual,
    Mention,
    ReviewRequested,
    SecurityAlert,
    StateChange,
    Subscribed,
    TeamMention,
}

impl FilterOption for NotificationReason {
    const CATEGORY: &'static str = "notification_reason";

    fn all() -> &'static [Self] {
        &[
            NotificationReason::Assign,
            NotificationReason::Author,
            NotificationReason::Comment,
            NotificationReason::Invitation,
            NotificationReason::Manual,
            NotificationReason::Mention,
            NotificationReason::ReviewRequested,
            NotificationReason::SecurityAlert,
            NotificationReason::StateChange,
            NotificationReason::Subscribed,
            NotificationReason::TeamMention,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            NotificationReason::Assign => "assign",
            NotificationReason::Author => "author",
            NotificationReason::Comment => "comment",
            NotificationReason::Invitation => "invitation",
            NotificationReason::Manual => "manual",
            NotificationReason::Mention => "mention",
            NotificationReason::ReviewRequested => "review_requested",
            NotificationReason::SecurityAlert => "security_alert",
            NotificationReason::StateChange => "state_change",
            NotificationReason::Subscribed => "subscribed",
            NotificationReason::TeamMention => "team_mention",
        }
    }

    fn metadata(self) -> OptionMetadata {
        match self {
            NotificationReason::Assign => OptionMetadata::new("Assigned")
                .with_color("pink")
                .with_tooltip("You were assigned to the Issue"),
            NotificationReason::Author => OptionMetadata::new("Author")
                .with_color("lightRed")
                .with_tooltip("You created the thread"),
            NotificationReason::Comment => OptionMetadata::new("Commented")
                .with_color("blue")
                .with_tooltip("You commented on the thread"),
            NotificationReason::Invitation => OptionMetadata::new("Invited")
                .with_color("brown")
                .with_tooltip("You accepted an invitation to contribute to the repository"),
            NotificationReason::Manual => OptionMetadata::new("Subscribed")
                .with_color("red")
                .with_tooltip("You subscribed to the thread (via an Issue or Pull Request)"),
            NotificationReason::Mention => OptionMetadata::new("Mentioned")
                .with_color("orange")
                .with_tooltip("You were specifically @mentioned in the content"),
            NotificationReason::ReviewRequested => OptionMetadata::new("Review requested")
                .with_color("yellow")
                .with_tooltip("You or a team you're a member of were requested to review a pull request"),
            NotificationReason::SecurityAlert => OptionMetadata::new("Security alert")
                .with_color("red")
                .with_tooltip("GitHub discovered a security vulnerability in your repository"),
            NotificationReason::StateChange => OptionMetadata::new("State changed")
                .with_color("purple")
                .with_tooltip("You changed the thread state (for example, closing an Issue or merging a Pull Request)"),
            NotificationReason::Subscribed => OptionMetadata::new("Watching")
                .with_color("blue")
                .with_tooltip("You're watching the repository"),
            NotificationReason::TeamMention => OptionMetadata::new("Team mentioned")
                .with_color("yellow")
                .with_tooltip("You were on a team that was mentioned"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    Added,
    Closed,
    Commented,
    Created,
    Deleted,
    Forked,
    Merged,
    Opened,
    Pushed,
    Released,
    Reopened,
    Reviewed,
    Starred,
    Updated,
}

impl FilterOption for EventAction {
    const CATEGORY: &'static str = "event_action";

    fn all() -> &'static [Self] {
        &[
            EventAction::Added,
            EventAction::Closed,
            EventAction::Commented,
            EventAction::Created,
            EventAction::Deleted,
            EventAction::Forked,
            EventAction::Merged,
            EventAction::Opened,
            EventAction::Pushed,
            EventAction::Released,
            EventAction::Reopened,
            EventAction::Reviewed,
            EventAction::Starred,
            EventAction::Updated,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            EventAction::Added => "added",
            EventAction::Closed => "closed",
            EventAction::Commented => "commented",
            EventAction::Created => "created",
            EventAction::Deleted => "deleted",
            EventAction::Forked => "forked",
            EventAction::Merged => "merged",
            EventAction::Opened => "opened",
            EventAction::Pushed => "pushed",
            EventAction::Released => "released",
            EventAction::Reopened => "reopened",
            EventAction::Reviewed => "reviewed",
            EventAction::Starred => "starred",
            EventAction::Updated => "updated",
        }
    }

    fn metadata(self) -> OptionMetadata {
        let label = match self {
            EventAction::Added => "Added",
            EventAction::Closed => "Closed",
            EventAction::Commented => "Commented",
            EventAction::Created => "Created",
            EventAction::Deleted => "Deleted",
            EventAction::Forked => "Forked",
            EventAction::Merged => "Merged",
            EventAction::Opened => "Opened",
            EventAction::Pushed => "Pushed",
            EventAction::Released => "Released",
            EventAction::Reopened => "Reopened",
            EventAction::Reviewed => "Reviewed",
            EventAction::Starred => "Starred",
            EventAction::Updated => "Updated",
        };
        OptionMetadata::new(label)
    }
}
