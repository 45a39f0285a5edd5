use super::{Column, ColumnFilters, ColumnType, FilterRecord, SubjectType};
use crate::domain::errors::FilterError;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTemplate {
    pub name: &'static str,
    pub menu_title: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub column_type: ColumnType,
    pub subtype: Option<&'static str>,
    pub params: &'static [&'static str],
    pub private_supported: bool,
    pub default_subject_types: &'static [SubjectType],
}

impl ColumnTemplate {
    pub fn default_filters(&self) -> ColumnFilters {
        ColumnFilters {
            subject_types: self
                .default_subject_types
                .iter()
                .map(|subject_type| (*subject_type, true))
                .collect::<FilterRecord<SubjectType>>(),
            ..ColumnFilters::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTemplateGroup {
    pub title: &'static str,
    pub icon: &'static str,
    pub column_type: ColumnType,
    pub templates: Vec<ColumnTemplate>,
}

pub fn column_catalog() -> Vec<ColumnTemplateGroup> {
    vec![
        ColumnTemplateGroup {
            title: "Notifications",
            icon: "bell",
            column_type: ColumnType::Notifications,
            templates: vec![
                ColumnTemplate {
                    name: "notifications/all",
                    menu_title: "Notifications",
                    title: "All notifications",
                    icon: "bell",
                    column_type: ColumnType::Notifications,
                    subtype: None,
                    params: &["all"],
                    private_supported: true,
                    default_subject_types: &[],
                },
                ColumnTemplate {
                    name: "notifications/repo",
                    menu_title: "Repository",
                    title: "Repository notifications",
                    icon: "bell",
                    column_type: ColumnType::Notifications,
                    subtype: Some("REPO_NOTIFICATIONS"),
                    params: &["all", "owner", "repo"],
                    private_supported: true,
                    default_subject_types: &[],
                },
            ],
        },
        ColumnTemplateGroup {
            title: "Issues & Pull Requests",
            icon: "issue-opened",
            column_type: ColumnType::IssueOrPr,
            templates: vec![
                ColumnTemplate {
                    name: "issue_or_pr/issues",
                    menu_title: "Issues",
                    title: "Issues",
                    icon: "issue-opened",
                    column_type: ColumnType::IssueOrPr,
                    subtype: Some("ISSUES"),
                    params: &["owner", "repo"],
                    private_supported: true,
                    default_subject_types: &[],
                },
                ColumnTemplate {
                    name: "issue_or_pr/pulls",
                    menu_title: "Pull Requests",
                    title: "Pull Requests",
                    icon: "git-pull-request",
                    column_type: ColumnType::IssueOrPr,
                    subtype: Some("PULLS"),
                    params: &["owner", "repo"],
                    private_supported: true,
                    default_subject_types: &[],
                },
            ],
        },
        ColumnTemplateGroup {
            title: "Activities",
            icon: "note",
            column_type: ColumnType::Activity,
            templates: vec![
                ColumnTemplate {
                    name: "activity/dashboard",
                    menu_title: "Dashboard",
                    title: "User dashboard",
                    icon: "home",
                    column_type: ColumnType::Activity,
                    subtype: Some("USER_RECEIVED_EVENTS"),
                    params: &["username"],
                    private_supported: false,
                    default_subject_types: &[
                        SubjectType::Release,
                        SubjectType::Repository,
                        SubjectType::Tag,
                        SubjectType::User,
                    ],
                },
                ColumnTemplate {
                    name: "activity/user",
                    menu_title: "User",
                    title: "User activity",
                    icon: "person",
                    column_type: ColumnType::Activity,
                    subtype: Some("USER_EVENTS"),
                    params: &["username"],
                    private_supported: false,
                    default_subject_types: &[],
                },
                ColumnTemplate {
                    name: "activity/repo",
                    menu_title: "Repository",
                    title: "Repository activity",
                    icon: "repo",
                    column_type: ColumnType::Activity,
                    subtype: Some("REPO_EVENTS"),
                    params: &["owner", "repo"],
                    private_supported: false,
                    default_subject_types: &[],
                },
                ColumnTemplate {
                    name: "activity/org",
                    menu_title: "Organization",
                    title: "Organization activity",
                    icon: "organization",
                    column_type: ColumnType::Activity,
                    subtype: Some("ORG_PUBLIC_EVENTS"),
                    params: &["org"],
                    private_supported: false,
                    default_subject_types: &[],
                },
            ],
        },
    ]
}

pub fn find_template(name: &str) -> Result<ColumnTemplate, FilterError> {
    column_catalog()
        .into_iter()
        .flat_map(|group| group.templates)
        .find(|template| template.name == name)
        .ok_or_else(|| FilterError::UnknownTemplate(name.to_string()))
}

impl Column {
    // Extra params beyond the template's list are ignored.
    pub fn from_template(id: impl Into<String>, template: &ColumnTemplate, params: &[String]) -> Self {
        let params: BTreeMap<String, String> = template
            .params
            .iter()
            .zip(params)
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();

        Column {
            title: Some(template.title.to_string()),
            subtype: template.subtype.map(str::to_string),
            params,
            filters: template.default_filters(),
            ..Column::new(id, template.column_type)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TriState;

    #[test]
    fn dashboard_template_starts_with_an_allow_list() {
        let template = find_template("activity/dashboard").unwrap();
        let column = Column::from_template("home", &template, &["octocat".to_string()]);

        assert_eq!(column.column_type, ColumnType::Activity);
        assert_eq!(column.params.get("username").map(String::as_str), Some("octocat"));
        assert_eq!(
            column.filters.subject_types.get(&SubjectType::Release),
            TriState::Included
        );
        assert_eq!(
            column.filters.subject_types.get(&SubjectType::PullRequest),
            TriState::Unset
        );
        assert!(column.has_any_filter());
    }

    #[test]
    fn unknown_template_is_an_error() {
        assert_eq!(
            find_template("gists"),
            Err(FilterError::UnknownTemplate("gists".to_string()))
        );
    }
}
