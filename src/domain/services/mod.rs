pub mod hierarchy;
pub mod notification_card;
pub mod pair;
pub mod resolver;
pub mod strictness;
pub mod toggle;
pub mod transition;

pub use hierarchy::{OwnerRepoResolver, OwnerState, RepoState};
pub use notification_card::{CardIcon, CardModel, IssueOrPullRequestKind, SubjectRow};
pub use pair::PairSide;
pub use resolver::{resolve_checked, resolve_indeterminate};
pub use strictness::{FilterMode, count_with_value, has_forced_value, is_strict};
pub use toggle::{DEFAULT_BOOLEAN_VALUE, toggle_option};
pub use transition::{TransitionContext, apply_toggle, next_value};
