use super::OptionCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unread: Option<usize>,
}

impl CounterMetadata {
    pub fn total(total: usize) -> Self {
        Self {
            total: Some(total),
            ..Self::default()
        }
    }

    pub fn with_unread(mut self, unread: usize) -> Self {
        self.unread = Some(unread);
        self
    }

    pub fn with_read(mut self, read: usize) -> Self {
        self.read = Some(read);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerCounts {
    #[serde(default)]
    pub metadata: CounterMetadata,
    #[serde(default)]
    pub repos: BTreeMap<String, CounterMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountSnapshot {
    #[serde(default)]
    pub categories: BTreeMap<OptionCategory, BTreeMap<String, CounterMetadata>>,
    #[serde(default)]
    pub owners: BTreeMap<String, OwnerCounts>,
}

impl CountSnapshot {
    pub fn option(&self, category: OptionCategory, key: &str) -> Option<CounterMetadata> {
        self.categories
            .get(&category)
            .and_then(|options| options.get(key))
            .copied()
    }

    pub fn with_option(
        mut self,
        category: OptionCategory,
        key: impl Into<String>,
        metadata: CounterMetadata,
    ) -> Self {
        self.categories
            .entry(category)
            .or_default()
            .insert(key.into(), metadata);
        self
    }

    pub fn with_repo(
        mut self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        metadata: CounterMetadata,
    ) -> Self {
        let owner = self.owners.entry(owner.into()).or_default();
        owner.repos.insert(repo.into(), metadata);
        let total = owner.repos.values().filter_map(|repo| repo.total).sum();
        owner.metadata.total = Some(total);
        self
    }

    // Several owners, or one owner with several repositories.
    pub fn has_owner_or_repo_choice(&self) -> bool {
        match self.owners.len() {
            0 => false,
            1 => self
                .owners
                .values()
                .next()
                .is_some_and(|owner| owner.repos.len() > 1),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_totals_roll_up_to_owner() {
        let counts = CountSnapshot::default()
            .with_repo("rust-lang", "rust", CounterMetadata::total(4))
            .with_repo("rust-lang", "cargo", CounterMetadata::total(2));

        assert_eq!(counts.owners["rust-lang"].metadata.total, Some(6));
        assert!(counts.has_owner_or_repo_choice());
    }

    #[test]
    fn single_repo_is_not_a_choice() {
        let counts =
            CountSnapshot::default().with_repo("rust-lang", "rust", CounterMetadata::total(4));
        assert!(!counts.has_owner_or_repo_choice());
        assert!(!CountSnapshot::default().has_owner_or_repo_choice());
    }
}
