use crate::application::dto::{ColumnSummaryDto, TemplateDto};
use crate::domain::entities::{ColumnTemplateGroup, TriState};
use crate::domain::services::CardModel;
use crate::presentation::components::{
    CardViewMode, ColumnOptionsView, OptionCategoryState, OptionCheckbox, section_summary,
};

fn checkbox_glyph(option: &OptionCheckbox) -> &'static str {
    match (option.circle, option.checked) {
        (true, TriState::Included) => "(*)",
        (true, _) => "( )",
        (false, TriState::Included) => "[x]",
        (false, TriState::Excluded) => "[ ]",
        (false, TriState::Unset) => "[-]",
    }
}

fn counts_suffix(option: &OptionCheckbox) -> String {
    let Some(counts) = option.counts else {
        return String::new();
    };

    match (counts.total, counts.unread) {
        (Some(total), Some(unread)) if unread > 0 => format!("  {unread}/{total}"),
        (Some(total), _) => format!("  {total}"),
        (None, Some(unread)) => format!("  {unread}"),
        (None, None) => String::new(),
    }
}

pub fn options_view(view: &ColumnOptionsView, categories: &OptionCategoryState) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", view.title, view.column_id));

    for section in &view.sections {
        let open = categories.is_open(section.category);
        let marker = if section.has_changed { "*" } else { " " };
        out.push_str(&format!(
            "{} {}{} [{}]  {}\n",
            if open { "v" } else { ">" },
            section.title,
            marker,
            section.category,
            section_summary(section)
        ));

        if !open {
            continue;
        }

        for option in &section.options {
            let indent = if option.indent { "      " } else { "    " };
            let mut flags = Vec::new();
            if option.disabled {
                flags.push("disabled");
            }
            if !option.indeterminate_enabled && !option.circle {
                flags.push("no-reset");
            }
            let flags = if flags.is_empty() {
                String::new()
            } else {
                format!("  ({})", flags.join(", "))
            };

            out.push_str(&format!(
                "{indent}{} {} <{}>{}{}\n",
                checkbox_glyph(option),
                option.label,
                option.key,
                counts_suffix(option),
                flags
            ));
        }
    }

    if view.can_clear {
        out.push_str(&format!(
            "\nUse `clear {}` to reset all filters.\n",
            view.column_id
        ));
    }

    out
}

pub fn column_list(columns: &[ColumnSummaryDto]) -> String {
    if columns.is_empty() {
        return "No columns. Add one with `add <id> <template>`.\n".to_string();
    }

    let width = columns.iter().map(|column| column.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for column in columns {
        out.push_str(&format!(
            "{:width$}  {:13}  {}{}\n",
            column.id,
            column.column_type,
            column.title,
            if column.filtered { "  (filtered)" } else { "" },
        ));
    }
    out
}

pub fn catalog(groups: &[ColumnTemplateGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        out.push_str(&format!("{}\n", group.title));
        for template in &group.templates {
            let template = TemplateDto::from(template);
            let params = template
                .params
                .iter()
                .map(|param| format!("<{param}>"))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&format!(
                "  {:22} {:18} {}\n",
                template.name, template.menu_title, params
            ));
        }
    }
    out
}

pub fn card(card: &CardModel, mode: CardViewMode) -> String {
    let mut out = String::new();
    let status = match (card.is_read, card.is_saved) {
        (false, true) => "*+",
        (false, false) => "* ",
        (true, true) => " +",
        (true, false) => "  ",
    };
    let actor = card
        .actor
        .as_ref()
        .map(|user| {
            if card.is_bot {
                format!(" by {} (bot)", user.login)
            } else {
                format!(" by {}", user.login)
            }
        })
        .unwrap_or_default();

    out.push_str(&format!(
        "{status} [{}] {}{}",
        card.icon.name, card.repo_full_name, actor
    ));
    let separator = match mode {
        CardViewMode::Compact if card.is_single_row() => "  ",
        _ => "\n     ",
    };

    if let Some(item) = &card.issue_or_pull_request {
        let number = item.number.map(|n| format!("#{n} ")).unwrap_or_default();
        out.push_str(&format!("{separator}{number}{}", item.title));
    }
    if let Some(commit) = &card.commit {
        let headline = commit.message.lines().next().unwrap_or("");
        out.push_str(&format!("{separator}{headline}"));
    }
    if let Some(release) = &card.release {
        out.push_str(&format!("{separator}{}", release.name));
    }
    if let Some(row) = &card.subject_row {
        out.push_str(&format!("{separator}{}", row.body));
    }
    if let Some(comment) = &card.comment {
        out.push_str(&format!("{separator}{}: {}", comment.user.login, comment.body));
    }
    if card.private_and_cant_see {
        out.push_str(separator);
        out.push_str("(private; details not loaded)");
    }

    out.push('\n');
    out
}
