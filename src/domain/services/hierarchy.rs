use super::resolver::resolve_checked;
use super::strictness::{FilterMode, has_forced_value, is_strict};
use super::transition::{TransitionContext, next_value};
use crate::domain::entities::{FilterRecord, OwnerFilters, TriState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerState {
    pub checked: TriState,
    pub indeterminate_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoState {
    pub checked: TriState,
    pub indeterminate_enabled: bool,
    pub disabled: bool,
}

/// Resolver and transition for the owner → repository filters.
///
/// Owners form one record; each owner's repositories form another. An owner
/// that resolves to excluded disables all of its repositories.
#[derive(Debug)]
pub struct OwnerRepoResolver<'a> {
    filters: &'a OwnerFilters,
    default: bool,
    owner_record: FilterRecord<String>,
    owner_strict: bool,
    owner_forced: bool,
    repo_strict: bool,
}

impl<'a> OwnerRepoResolver<'a> {
    pub fn new(filters: &'a OwnerFilters, default: bool) -> Self {
        let owner_record = filters.owner_record();
        let repo_record = filters.repo_record();

        Self {
            filters,
            default,
            owner_strict: is_strict(&owner_record, default),
            owner_forced: has_forced_value(&owner_record),
            repo_strict: is_strict(&repo_record, default),
            owner_record,
        }
    }

    pub fn has_changed(&self) -> bool {
        self.owner_forced || has_forced_value(&self.filters.repo_record())
    }

    fn with_repos_of<T>(&self, owner: &str, f: impl FnOnce(&FilterRecord<String>) -> T) -> T {
        match self.filters.repos_of(owner) {
            Some(repos) => f(repos),
            None => f(&FilterRecord::new()),
        }
    }

    fn owner_checked(&self, owner: &str) -> TriState {
        resolve_checked(
            &self.owner_record,
            owner,
            self.default,
            Some(self.owner_strict),
        )
    }

    pub fn owner(&self, owner: &str) -> OwnerState {
        let checked = self.owner_checked(owner);
        let owner_repo_strict = self.with_repos_of(owner, |repos| is_strict(repos, self.default));

        OwnerState {
            checked,
            indeterminate_enabled: !(self.owner_strict || self.repo_strict)
                || owner_repo_strict
                || checked.is(self.default),
        }
    }

    pub fn repo(&self, owner: &str, repo: &str) -> RepoState {
        let owner_checked = self.owner_checked(owner);
        let disabled = owner_checked == TriState::Excluded;

        let (owner_repo_strict, repo_checked) = self.with_repos_of(owner, |repos| {
            let strict = is_strict(repos, self.default);
            (strict, resolve_checked(repos, repo, self.default, Some(strict)))
        });
        let checked = if disabled {
            TriState::Excluded
        } else {
            repo_checked
        };

        RepoState {
            checked,
            indeterminate_enabled: !disabled
                && (!(self.owner_strict || self.repo_strict)
                    || (owner_checked == TriState::Included && !owner_repo_strict)
                    || checked.is(self.default)),
            disabled,
        }
    }

    pub fn next_owner_value(&self, click: TriState) -> TriState {
        let ctx = TransitionContext {
            is_strict: self.owner_strict,
            has_forced: self.owner_forced,
            supports_only_one: false,
        };
        next_value(self.default, click, ctx)
    }

    /// The value to store for a repository click. Callers are expected to
    /// check [`RepoState::disabled`] first and drop the click if set.
    pub fn next_repo_value(&self, owner: &str, click: TriState) -> TriState {
        let ctx = self.with_repos_of(owner, |repos| {
            TransitionContext::for_record(repos, self.default, false)
        });

        match ctx.mode() {
            // A repository allow-list under another owner takes precedence
            // over this owner's exclusions.
            FilterMode::DenyList if self.repo_strict && click != TriState::from_bool(!self.default) => {
                TriState::from_bool(self.default)
            }
            _ => next_value(self.default, click, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(setup: impl FnOnce(&mut OwnerFilters)) -> OwnerFilters {
        let mut filters = OwnerFilters::new();
        setup(&mut filters);
        filters
    }

    #[test]
    fn excluded_owner_disables_its_repos() {
        let filters = filters(|f| {
            f.set_owner("octo", TriState::Excluded);
            f.set_repo("octo", "hello", TriState::Included);
        });
        let resolver = OwnerRepoResolver::new(&filters, true);

        let repo = resolver.repo("octo", "hello");
        assert!(repo.disabled);
        assert_eq!(repo.checked, TriState::Excluded);
        assert!(!repo.indeterminate_enabled);
    }

    #[test]
    fn owner_outside_a_strict_owner_list_disables_its_repos() {
        let filters = filters(|f| f.set_owner("rust-lang", TriState::Included));
        let resolver = OwnerRepoResolver::new(&filters, true);

        assert_eq!(resolver.owner("tokio-rs").checked, TriState::Excluded);
        assert!(resolver.repo("tokio-rs", "tokio").disabled);
        assert!(!resolver.repo("rust-lang", "rust").disabled);
    }

    #[test]
    fn untouched_filters_leave_everything_indeterminate() {
        let filters = OwnerFilters::new();
        let resolver = OwnerRepoResolver::new(&filters, true);

        let owner = resolver.owner("octo");
        assert_eq!(owner.checked, TriState::Unset);
        assert!(owner.indeterminate_enabled);

        let repo = resolver.repo("octo", "hello");
        assert_eq!(repo.checked, TriState::Unset);
        assert!(repo.indeterminate_enabled);
        assert!(!resolver.has_changed());
    }

    #[test]
    fn repo_allow_list_is_scoped_to_its_owner() {
        let filters = filters(|f| f.set_repo("octo", "hello", TriState::Included));
        let resolver = OwnerRepoResolver::new(&filters, true);

        assert_eq!(resolver.repo("octo", "hello").checked, TriState::Included);
        assert_eq!(resolver.repo("octo", "spoon").checked, TriState::Excluded);
        assert_eq!(resolver.repo("other", "thing").checked, TriState::Unset);
        assert_eq!(
            resolver.next_repo_value("octo", TriState::Excluded),
            TriState::Included
        );
    }

    #[test]
    fn owner_transitions_follow_the_owner_record() {
        let deny = filters(|f| f.set_owner("octo", TriState::Excluded));
        let resolver = OwnerRepoResolver::new(&deny, true);
        assert_eq!(resolver.next_owner_value(TriState::Included), TriState::Excluded);

        let untouched = OwnerFilters::new();
        let resolver = OwnerRepoResolver::new(&untouched, true);
        assert_eq!(resolver.next_owner_value(TriState::Excluded), TriState::Excluded);
    }

    #[test]
    fn column_wide_repo_allow_list_beats_owner_exclusions() {
        let filters = filters(|f| {
            f.set_repo("octo", "hello", TriState::Included);
            f.set_repo("other", "thing", TriState::Excluded);
        });
        let resolver = OwnerRepoResolver::new(&filters, true);

        assert_eq!(
            resolver.next_repo_value("other", TriState::Included),
            TriState::Included
        );
        assert_eq!(
            resolver.next_repo_value("other", TriState::Unset),
            TriState::Included
        );
        assert_eq!(
            resolver.next_repo_value("other", TriState::Excluded),
            TriState::Excluded
        );
    }
}
