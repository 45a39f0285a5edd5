use crate::domain::entities::{
    GitHubComment, GitHubLabel, GitHubUser, IssueState, Notification, SubjectType,
};
use chrono::{DateTime, Utc};

const GITHUB_URL: &str = "https://github.com";
const GITHUB_API_REPOS_URL: &str = "https://api.github.com/repos/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardCommit {
    pub message: String,
    pub author_name: String,
    pub author_email: String,
    pub author_username: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueOrPullRequestKind {
    Issue,
    PullRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardIssueOrPullRequest {
    pub kind: IssueOrPullRequestKind,
    pub id: Option<u64>,
    pub number: Option<u64>,
    pub title: String,
    pub state: Option<IssueState>,
    pub merged: bool,
    pub draft: bool,
    pub comments: Option<u64>,
    pub created_at: Option<DateTime<Utc>>,
    pub labels: Vec<GitHubLabel>,
    pub url: Option<String>,
    pub author: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRelease {
    pub name: String,
    pub tag_name: String,
    pub body: String,
    pub url: Option<String>,
    pub author: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRow {
    pub body: String,
    pub url: Option<String>,
    pub truncate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardIcon {
    pub name: &'static str,
    pub color: Option<&'static str>,
    pub tooltip: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub id: String,
    pub repo_full_name: String,
    pub repo_owner: Option<String>,
    pub repo_name: Option<String>,
    pub repo_url: Option<String>,
    pub repo_avatar_url: Option<String>,
    pub is_read: bool,
    pub is_saved: bool,
    pub is_private: bool,
    pub private_and_cant_see: bool,
    pub updated_at: DateTime<Utc>,
    pub icon: CardIcon,
    pub subject_row: Option<SubjectRow>,
    pub commit: Option<CardCommit>,
    pub issue_or_pull_request: Option<CardIssueOrPullRequest>,
    pub release: Option<CardRelease>,
    pub comment: Option<GitHubComment>,
    pub actor: Option<GitHubUser>,
    pub is_bot: bool,
}

impl CardModel {
    pub fn from_notification(notification: &Notification) -> Self {
        let subject = &notification.subject;
        let repo = &notification.repository;

        let repo_full_name = if repo.full_name.is_empty() {
            repo.name.clone()
        } else {
            repo.full_name.clone()
        };
        let (repo_owner, repo_name) = split_owner_and_repo(&repo_full_name);

        let subject_url = subject
            .url
            .clone()
            .or_else(|| subject.latest_comment_url.clone());

        let commit = notification
            .commit
            .as_ref()
            .map(|commit| CardCommit {
                message: commit.commit.message.clone(),
                author_name: commit.commit.author.name.clone(),
                author_email: commit.commit.author.email.clone(),
                author_username: commit
                    .author
                    .as_ref()
                    .map(|author| author.login.clone())
                    .filter(|login| !login.is_empty()),
                url: commit.url.clone().or_else(|| commit.commit.url.clone()),
            })
            .or_else(|| {
                (subject.subject_type == SubjectType::Commit).then(|| CardCommit {
                    message: subject.title.clone(),
                    author_name: String::new(),
                    author_email: String::new(),
                    author_username: None,
                    url: subject.url.clone(),
                })
            });

        let issue_or_pull_request = enhanced_issue_or_pull_request(notification)
            .or_else(|| {
                let kind = match subject.subject_type {
                    SubjectType::Issue => IssueOrPullRequestKind::Issue,
                    SubjectType::PullRequest => IssueOrPullRequestKind::PullRequest,
                    _ => return None,
                };
                Some(CardIssueOrPullRequest {
                    kind,
                    id: None,
                    number: subject_url.as_deref().and_then(issue_or_pull_request_number),
                    title: subject.title.clone(),
                    state: None,
                    merged: false,
                    draft: false,
                    comments: None,
                    created_at: None,
                    labels: Vec::new(),
                    url: subject_url.clone(),
                    author: GitHubUser::default(),
                })
            });

        let release = notification
            .release
            .as_ref()
            .map(|release| CardRelease {
                name: release.name.clone().unwrap_or_default(),
                tag_name: release.tag_name.clone(),
                body: release.body.clone(),
                url: release.url.clone(),
                author: release.author.clone(),
            })
            .or_else(|| {
                (subject.subject_type == SubjectType::Release).then(|| CardRelease {
                    name: subject.title.clone(),
                    tag_name: String::new(),
                    body: String::new(),
                    url: subject_url.clone(),
                    author: GitHubUser::default(),
                })
            });

        let is_repo_invitation = subject.subject_type == SubjectType::RepositoryInvitation;
        let is_vulnerability_alert =
            subject.subject_type == SubjectType::RepositoryVulnerabilityAlert;

        let has_rich_row =
            commit.is_some() || issue_or_pull_request.is_some() || release.is_some();
        let subject_row = (!has_rich_row && !subject.title.is_empty()).then(|| {
            let url = match (&repo_owner, &repo_name) {
                (Some(owner), Some(name)) if is_repo_invitation => {
                    Some(format!("{GITHUB_URL}/{owner}/{name}/invitations"))
                }
                (Some(owner), Some(name)) if is_vulnerability_alert => {
                    Some(format!("{GITHUB_URL}/{owner}/{name}/network/alerts"))
                }
                _ => subject
                    .latest_comment_url
                    .as_deref()
                    .or(subject.url.as_deref())
                    .map(html_url_from_api_url),
            };
            SubjectRow {
                body: subject.title.clone(),
                url,
                truncate: !is_vulnerability_alert,
            }
        });

        let actor = notification
            .comment
            .as_ref()
            .map(|comment| comment.user.clone())
            .or_else(|| commit_author(notification))
            .or_else(|| release.as_ref().map(|release| release.author.clone()))
            .or_else(|| {
                issue_or_pull_request
                    .as_ref()
                    .map(|item| item.author.clone())
            })
            .filter(|user| !user.login.is_empty());
        let is_bot = actor
            .as_ref()
            .is_some_and(|user| user.login.contains("[bot]"));

        let is_private = repo.private;
        let repo_url = repo.html_url.clone().or_else(|| match (&repo_owner, &repo_name) {
            (Some(owner), Some(name)) => Some(format!("{GITHUB_URL}/{owner}/{name}")),
            _ => None,
        });

        Self {
            id: notification.id.clone(),
            repo_avatar_url: repo_owner
                .as_ref()
                .map(|owner| format!("{GITHUB_URL}/{owner}.png")),
            repo_full_name,
            repo_owner,
            repo_name,
            repo_url,
            is_read: !notification.unread,
            is_saved: notification.saved == Some(true),
            is_private,
            private_and_cant_see: is_private && notification.enhanced != Some(true),
            updated_at: notification.updated_at,
            icon: card_icon(subject.subject_type, issue_or_pull_request.as_ref()),
            subject_row,
            commit,
            issue_or_pull_request,
            release,
            comment: notification.comment.clone(),
            actor,
            is_bot,
        }
    }

    pub fn row_count(&self) -> usize {
        [
            self.subject_row.is_some(),
            self.commit.is_some(),
            self.issue_or_pull_request.is_some(),
            self.release.is_some(),
            self.comment.is_some(),
            self.private_and_cant_see,
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    // Releases always take more than one line.
    pub fn is_single_row(&self) -> bool {
        self.row_count() <= 1 && self.release.is_none()
    }
}

fn enhanced_issue_or_pull_request(notification: &Notification) -> Option<CardIssueOrPullRequest> {
    let (kind, item) = match (&notification.issue, &notification.pull_request) {
        (Some(issue), _) => (IssueOrPullRequestKind::Issue, issue),
        (None, Some(pull_request)) => (IssueOrPullRequestKind::PullRequest, pull_request),
        (None, None) => return None,
    };

    let number = item.number.or_else(|| {
        item.html_url
            .as_deref()
            .or(item.url.as_deref())
            .and_then(issue_or_pull_request_number)
    });

    Some(CardIssueOrPullRequest {
        kind,
        id: item.id,
        number,
        title: item.title.clone(),
        state: item.state,
        merged: item.merged == Some(true),
        draft: item.draft == Some(true),
        comments: item.comments,
        created_at: item.created_at,
        labels: item.labels.clone(),
        url: item.url.clone(),
        author: item.user.clone(),
    })
}

fn commit_author(notification: &Notification) -> Option<GitHubUser> {
    notification
        .commit
        .as_ref()
        .and_then(|commit| commit.author.clone())
}

fn card_icon(subject_type: SubjectType, item: Option<&CardIssueOrPullRequest>) -> CardIcon {
    let icon = |name, color| CardIcon {
        name,
        color: Some(color),
        tooltip: None,
    };

    match (subject_type, item) {
        (SubjectType::PullRequest, Some(pr)) if pr.merged => icon("git-merge", "purple"),
        (SubjectType::PullRequest, Some(pr)) if pr.state == Some(IssueState::Closed) => {
            icon("git-pull-request", "red")
        }
        (SubjectType::PullRequest, Some(pr)) if pr.draft => icon("git-pull-request", "gray"),
        (SubjectType::PullRequest, _) => icon("git-pull-request", "green"),
        (SubjectType::Issue, Some(issue)) if issue.state == Some(IssueState::Closed) => {
            icon("issue-closed", "red")
        }
        (SubjectType::Issue, _) => icon("issue-opened", "green"),
        (SubjectType::Commit, _) => icon("git-commit", "pink"),
        (SubjectType::Release, _) => icon("rocket", "orange"),
        (SubjectType::RepositoryInvitation, _) => icon("mail", "brown"),
        (SubjectType::RepositoryVulnerabilityAlert, _) => CardIcon {
            name: "alert",
            color: Some("red"),
            tooltip: Some("Security vulnerability alert"),
        },
        _ => CardIcon {
            name: "bell",
            color: None,
            tooltip: None,
        },
    }
}

pub fn split_owner_and_repo(full_name: &str) -> (Option<String>, Option<String>) {
    let mut parts = full_name.splitn(2, '/');
    let owner = parts.next().filter(|part| !part.is_empty());
    let repo = parts.next().filter(|part| !part.is_empty());
    (owner.map(str::to_string), repo.map(str::to_string))
}

pub fn issue_or_pull_request_number(url: &str) -> Option<u64> {
    let segments: Vec<&str> = url.split(['/', '?', '#']).collect();
    segments
        .windows(2)
        .find(|pair| matches!(pair[0], "issues" | "pulls" | "pull"))
        .and_then(|pair| pair[1].parse().ok())
}

pub fn html_url_from_api_url(url: &str) -> String {
    let Some(path) = url.strip_prefix(GITHUB_API_REPOS_URL) else {
        return url.to_string();
    };

    let segments: Vec<&str> = path
        .split('/')
        .map(|segment| match segment {
            "pulls" => "pull",
            "commits" => "commit",
            other => other,
        })
        .collect();
    format!("{GITHUB_URL}/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        GitHubCommit, NotificationReason, NotificationRepository, NotificationSubject,
    };

    fn notification(subject_type: SubjectType, title: &str, url: Option<&str>) -> Notification {
        Notification {
            id: "1".to_string(),
            repository: NotificationRepository {
                id: 10,
                name: "hello".to_string(),
                full_name: "octo/hello".to_string(),
                html_url: None,
                private: false,
                owner: None,
            },
            subject: NotificationSubject {
                title: title.to_string(),
                subject_type,
                url: url.map(str::to_string),
                latest_comment_url: None,
            },
            reason: NotificationReason::Subscribed,
            unread: true,
            updated_at: DateTime::parse_from_rfc3339("2019-05-01T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            saved: None,
            enhanced: None,
            comment: None,
            commit: None,
            issue: None,
            pull_request: None,
            release: None,
        }
    }

    #[test]
    fn synthesizes_pull_request_from_subject() {
        let card = CardModel::from_notification(&notification(
            SubjectType::PullRequest,
            "Fix it",
            Some("https://api.github.com/repos/octo/hello/pulls/42"),
        ));

        let pr = card.issue_or_pull_request.unwrap();
        assert_eq!(pr.kind, IssueOrPullRequestKind::PullRequest);
        assert_eq!(pr.number, Some(42));
        assert_eq!(pr.title, "Fix it");
        assert!(card.subject_row.is_none());
        assert_eq!(card.repo_owner.as_deref(), Some("octo"));
        assert_eq!(card.repo_url.as_deref(), Some("https://github.com/octo/hello"));
        assert!(!card.is_read);
        assert_eq!(card.icon.name, "git-pull-request");
    }

    #[test]
    fn invitations_link_to_the_invitation_page() {
        let card = CardModel::from_notification(&notification(
            SubjectType::RepositoryInvitation,
            "Invitation to join octo/hello",
            None,
        ));

        let row = card.subject_row.unwrap();
        assert_eq!(
            row.url.as_deref(),
            Some("https://github.com/octo/hello/invitations")
        );
        assert!(row.truncate);
    }

    #[test]
    fn vulnerability_alerts_show_the_full_title() {
        let card = CardModel::from_notification(&notification(
            SubjectType::RepositoryVulnerabilityAlert,
            "Potential security vulnerability found in the lodash dependency",
            None,
        ));

        assert!(card.is_single_row());
        let row = card.subject_row.as_ref().unwrap();
        assert!(!row.truncate);
        assert_eq!(
            row.url.as_deref(),
            Some("https://github.com/octo/hello/network/alerts")
        );
    }

    #[test]
    fn commit_author_is_the_actor_and_bots_are_flagged() {
        let mut item = notification(SubjectType::Commit, "Bump deps", None);
        item.commit = Some(GitHubCommit {
            author: Some(GitHubUser {
                login: "dependabot[bot]".to_string(),
                ..GitHubUser::default()
            }),
            ..GitHubCommit::default()
        });

        let card = CardModel::from_notification(&item);
        assert_eq!(card.actor.map(|user| user.login).as_deref(), Some("dependabot[bot]"));
        assert!(card.is_bot);
        assert!(card.commit.is_some());
    }

    #[test]
    fn private_without_details_cannot_be_seen() {
        let mut item = notification(SubjectType::Issue, "Secret", None);
        item.repository.private = true;
        let card = CardModel::from_notification(&item);
        assert!(card.private_and_cant_see);
        assert_eq!(card.row_count(), 2);

        item.enhanced = Some(true);
        assert!(!CardModel::from_notification(&item).private_and_cant_see);
    }

    #[test]
    fn converts_api_urls() {
        assert_eq!(
            html_url_from_api_url("https://api.github.com/repos/octo/hello/commits/abc"),
            "https://github.com/octo/hello/commit/abc"
        );
        assert_eq!(
            html_url_from_api_url("https://github.com/octo/hello"),
            "https://github.com/octo/hello"
        );
        assert_eq!(issue_or_pull_request_number("https://github.com/o/r/issues/7#x"), Some(7));
        assert_eq!(issue_or_pull_request_number("https://github.com/o/r"), None);
    }
}
