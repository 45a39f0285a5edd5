use crate::domain::entities::OptionCategory;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionCategoryState {
    available: Vec<OptionCategory>,
    opened: BTreeSet<OptionCategory>,
    only_one_open: bool,
    force_open_all: bool,
}

impl OptionCategoryState {
    pub fn new(available: Vec<OptionCategory>) -> Self {
        Self {
            available,
            opened: BTreeSet::new(),
            only_one_open: true,
            force_open_all: false,
        }
    }

    pub fn force_open_all(available: Vec<OptionCategory>) -> Self {
        let opened = available.iter().copied().collect();
        Self {
            available,
            opened,
            only_one_open: false,
            force_open_all: true,
        }
    }

    pub fn available(&self) -> &[OptionCategory] {
        &self.available
    }

    pub fn is_open(&self, category: OptionCategory) -> bool {
        self.force_open_all || self.opened.contains(&category)
    }

    pub fn all_is_open(&self) -> bool {
        self.available.iter().all(|category| self.is_open(*category))
    }

    pub fn allows_only_one_open(&self) -> bool {
        self.only_one_open
    }

    pub fn can_toggle(&self) -> bool {
        !self.force_open_all
    }

    pub fn toggle(&mut self, category: OptionCategory) {
        if !self.can_toggle() || !self.available.contains(&category) {
            return;
        }

        if self.only_one_open {
            self.opened.retain(|opened| *opened == category);
        }

        if !self.opened.remove(&category) {
            self.opened.insert(category);
        } else if self.opened.is_empty() {
            self.only_one_open = true;
        }
    }

    pub fn toggle_all(&mut self) {
        if !self.can_toggle() {
            return;
        }

        if self.all_is_open() {
            self.opened.clear();
            self.only_one_open = true;
        } else {
            self.opened = self.available.iter().copied().collect();
            self.only_one_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> OptionCategoryState {
        OptionCategoryState::new(vec![
            OptionCategory::Unread,
            OptionCategory::State,
            OptionCategory::SubjectTypes,
        ])
    }

    #[test]
    fn opening_one_closes_the_other() {
        let mut state = state();
        state.toggle(OptionCategory::Unread);
        state.toggle(OptionCategory::State);

        assert!(!state.is_open(OptionCategory::Unread));
        assert!(state.is_open(OptionCategory::State));
    }

    #[test]
    fn expand_all_then_collapse_restores_single_mode() {
        let mut state = state();
        state.toggle_all();
        assert!(state.all_is_open());
        assert!(!state.allows_only_one_open());

        state.toggle(OptionCategory::State);
        assert!(state.is_open(OptionCategory::Unread));
        assert!(!state.is_open(OptionCategory::State));

        state.toggle_all();
        assert!(state.all_is_open());
        state.toggle_all();
        assert!(!state.is_open(OptionCategory::Unread));
        assert!(state.allows_only_one_open());
    }

    #[test]
    fn closing_the_last_section_re_enables_single_mode() {
        let mut state = state();
        state.toggle_all();
        for category in [
            OptionCategory::Unread,
            OptionCategory::State,
            OptionCategory::SubjectTypes,
        ] {
            state.toggle(category);
        }
        assert!(state.allows_only_one_open());
    }

    #[test]
    fn forced_open_ignores_toggles() {
        let mut state = OptionCategoryState::force_open_all(vec![OptionCategory::Repos]);
        state.toggle(OptionCategory::Repos);
        state.toggle_all();
        assert!(state.is_open(OptionCategory::Repos));
        assert!(state.all_is_open());
    }
}
