pub mod column;
pub mod column_template;
pub mod counts;
pub mod filter_record;
pub mod notification;
pub mod options;
pub mod tri_state;
pub mod workspace;

pub use column::{
    ActivityFilters, Column, ColumnFilters, ColumnType, NotificationFilters, OptionCategory,
    OwnerFilter, OwnerFilters,
};
pub use column_template::{ColumnTemplate, ColumnTemplateGroup, column_catalog, find_template};
pub use counts::{CountSnapshot, CounterMetadata, OwnerCounts};
pub use filter_record::FilterRecord;
pub use notification::{
    CommitAuthor, CommitDetails, GitHubComment, GitHubCommit, GitHubIssueOrPullRequest,
    GitHubLabel, GitHubRelease, GitHubUser, IssueState, Notification, NotificationRepository,
    NotificationSubject, RepositoryOwner,
};
pub use options::{
    EVENT_SUBJECT_TYPES, EventAction, FilterOption, ISSUE_OR_PULL_REQUEST_SUBJECT_TYPES,
    NOTIFICATION_SUBJECT_TYPES, NotificationReason, OptionMetadata, StateType, SubjectType,
    sorted_by_label,
};
pub use tri_state::TriState;
pub use workspace::Workspace;
