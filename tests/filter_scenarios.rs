use column_filters::domain::entities::{
    Column, ColumnType, FilterRecord, OptionCategory, OwnerFilters, StateType, TriState,
};
use column_filters::domain::services::{
    FilterMode, OwnerRepoResolver, apply_toggle, has_forced_value, is_strict, resolve_checked,
    resolve_indeterminate, toggle_option,
};

const DEFAULT: bool = true;

fn click(
    record: &FilterRecord<&'static str>,
    key: &'static str,
    value: TriState,
) -> FilterRecord<&'static str> {
    apply_toggle(record, key, DEFAULT, value, false)
}

#[test]
fn first_inclusion_starts_an_allow_list() {
    let empty = FilterRecord::new();
    assert_eq!(resolve_checked(&empty, "b", DEFAULT, None), TriState::Unset);

    let record = click(&empty, "a", TriState::Included);

    assert_eq!(record, FilterRecord::new().with("a", true));
    assert_eq!(resolve_checked(&record, "a", DEFAULT, None), TriState::Included);
    // Other keys fall outside the allow-list.
    assert_eq!(resolve_checked(&record, "b", DEFAULT, None), TriState::Excluded);
    assert!(!resolve_indeterminate(&record, "b", DEFAULT));
}

#[test]
fn untouched_key_in_a_lenient_record_is_unset() {
    let record = FilterRecord::new().with("a", false);
    assert!(!is_strict(&record, DEFAULT));
    assert_eq!(resolve_checked(&record, "b", DEFAULT, None), TriState::Unset);

    let empty = FilterRecord::<&str>::new();
    assert_eq!(resolve_checked(&empty, "b", DEFAULT, None), TriState::Unset);
}

#[test]
fn second_inclusion_joins_the_allow_list() {
    let record = FilterRecord::new().with("a", true);
    let record = click(&record, "b", TriState::Included);

    assert_eq!(record, FilterRecord::new().with("a", true).with("b", true));
    assert_eq!(resolve_checked(&record, "b", DEFAULT, None), TriState::Included);
    assert!(resolve_indeterminate(&record, "b", DEFAULT));
}

#[test]
fn exclusions_lock_in_a_deny_list() {
    let record = click(&FilterRecord::new(), "a", TriState::Excluded);
    assert_eq!(record, FilterRecord::new().with("a", false));
    assert!(has_forced_value(&record));
    assert!(!is_strict(&record, DEFAULT));
    assert_eq!(FilterMode::of(&record, DEFAULT), FilterMode::DenyList);

    let record = click(&record, "b", TriState::Included);
    assert_eq!(record, FilterRecord::new().with("a", false).with("b", false));
}

#[test]
fn allow_list_mode_sticks_until_the_record_empties() {
    let record = FilterRecord::new().with("a", true);
    let record = click(&record, "b", TriState::Excluded);
    assert_eq!(record.get("b"), TriState::Included);
    assert!(is_strict(&record, DEFAULT));

    let record = click(&record, "a", TriState::Unset);
    let record = click(&record, "b", TriState::Unset);
    assert!(record.is_empty());
    assert_eq!(FilterMode::of(&record, DEFAULT), FilterMode::Untouched);

    let record = click(&record, "c", TriState::Excluded);
    assert_eq!(record.get("c"), TriState::Excluded);
}

#[test]
fn only_one_state_replaces_the_previous_one() {
    let record = FilterRecord::new().with(StateType::Open, true);
    let record = apply_toggle(&record, StateType::Closed, DEFAULT, TriState::Included, true);
    assert_eq!(record, FilterRecord::new().with(StateType::Closed, true));

    let record = apply_toggle(&record, StateType::Closed, DEFAULT, TriState::Unset, true);
    assert!(record.is_empty());
}

#[test]
fn explicit_values_win_over_strictness() {
    let record = FilterRecord::new().with("a", true).with("b", false);
    for strict in [None, Some(true), Some(false)] {
        assert_eq!(resolve_checked(&record, "a", DEFAULT, strict), TriState::Included);
        assert_eq!(resolve_checked(&record, "b", DEFAULT, strict), TriState::Excluded);
    }
}

#[test]
fn excluded_owner_gates_every_repo() {
    let mut owners = OwnerFilters::new();
    owners.set_owner("octo", TriState::Excluded);
    owners.set_repo("octo", "hello", TriState::Included);
    owners.set_repo("octo", "spoon", TriState::Excluded);

    let resolver = OwnerRepoResolver::new(&owners, DEFAULT);
    for repo in ["hello", "spoon", "unknown"] {
        let state = resolver.repo("octo", repo);
        assert!(state.disabled);
        assert_eq!(state.checked, TriState::Excluded);
    }
}

#[test]
fn column_toggles_round_out_has_any_filter() {
    let mut column = Column::new("prs", ColumnType::IssueOrPr);
    assert!(!column.has_any_filter());

    column.filters =
        toggle_option(&column, OptionCategory::Draft, "draft", TriState::Excluded).unwrap();
    assert!(column.has_any_filter());

    column.filters.clear();
    assert!(!column.has_any_filter());
}

#[test]
fn toggle_never_mutates_the_column() {
    let column = Column::new("inbox", ColumnType::Notifications);
    let before = column.clone();
    let filters =
        toggle_option(&column, OptionCategory::Repos, "octo", TriState::Included).unwrap();

    assert_eq!(column, before);
    assert_eq!(filters.owners.owner_value("octo"), TriState::Included);
}
