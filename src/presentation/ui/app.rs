use super::cli::Command;
use super::render;
use crate::application::UseCaseContainer;
use crate::application::dto::ColumnSummaryDto;
use crate::domain::entities::{Notification, column_catalog};
use crate::domain::services::CardModel;
use crate::presentation::components::{
    ColumnOptionsView, OptionCategoryState, available_categories, card_view_mode,
};
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::sync::Arc;

pub struct App {
    use_cases: Arc<UseCaseContainer>,
}

impl App {
    pub fn new(use_cases: Arc<UseCaseContainer>) -> Self {
        Self { use_cases }
    }

    pub fn run(&self, command: Command, out: &mut impl Write) -> Result<()> {
        match command {
            Command::List => {
                let columns = self.use_cases.list_columns.execute()?;
                let summaries: Vec<ColumnSummaryDto> =
                    columns.iter().map(ColumnSummaryDto::from).collect();
                write!(out, "{}", render::column_list(&summaries))?;
            }
            Command::Show { column, all } => {
                self.show(&column, all, out)?;
            }
            Command::Toggle {
                column,
                category,
                option,
                click,
            } => {
                self.use_cases
                    .toggle_option
                    .execute(&column, category, &option, click)?;
                self.show(&column, false, out)?;
            }
            Command::Clear { column } => {
                self.use_cases.clear_filters.execute(&column)?;
                writeln!(out, "Cleared filters of {column}")?;
            }
            Command::Add {
                id,
                template,
                params,
            } => {
                let column = self
                    .use_cases
                    .add_column
                    .execute(&id, &template, &params)?;
                writeln!(out, "Added {} ({})", column.display_title(), column.id)?;
            }
            Command::Remove { column } => {
                self.use_cases.remove_column.execute(&column)?;
                writeln!(out, "Removed {column}")?;
            }
            Command::Catalog => {
                write!(out, "{}", render::catalog(&column_catalog()))?;
            }
            Command::Cards { file, width } => {
                let content = fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read {}", file.display()))?;
                let notifications: Vec<Notification> =
                    serde_json::from_str(&content).context("Failed to parse notifications")?;
                tracing::debug!("Rendering {} notifications", notifications.len());

                let mode = card_view_mode(width);
                for notification in &notifications {
                    let card = CardModel::from_notification(notification);
                    write!(out, "{}", render::card(&card, mode))?;
                }
            }
        }

        Ok(())
    }

    fn show(&self, column_id: &str, all: bool, out: &mut impl Write) -> Result<()> {
        let column = self.use_cases.get_column.execute(column_id)?;
        let counts = self.use_cases.get_counts.execute(column_id)?;

        let view = ColumnOptionsView::build(&column, &counts);
        let available = available_categories(&column, &counts);
        let categories = if all {
            OptionCategoryState::force_open_all(available)
        } else {
            let mut categories = OptionCategoryState::new(available);
            let changed: Vec<_> = view
                .sections
                .iter()
                .filter(|section| section.has_changed)
                .map(|section| section.category)
                .collect();
            if changed.len() > 1 {
                categories.toggle_all();
                for category in categories.available().to_vec() {
                    if !changed.contains(&category) {
                        categories.toggle(category);
                    }
                }
            } else if let Some(category) = changed.first() {
                categories.toggle(*category);
            }
            categories
        };

        write!(out, "{}", render::options_view(&view, &categories))?;
        Ok(())
    }
}
