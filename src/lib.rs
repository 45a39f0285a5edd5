pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use application::UseCaseContainer;
use domain::repositories::{ColumnRepository, FilterCountSource};
use infrastructure::JsonColumnRepository;
use presentation::ui::{App, Cli};
use std::io;
use std::sync::Arc;

pub use presentation::services::init_logging;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let path = cli
        .workspace
        .unwrap_or_else(JsonColumnRepository::default_path);
    tracing::debug!("Using workspace {}", path.display());

    let repository = Arc::new(JsonColumnRepository::new(path));
    let columns: Arc<dyn ColumnRepository> = repository.clone();
    let counts: Arc<dyn FilterCountSource> = repository;
    let use_cases = Arc::new(UseCaseContainer::new(columns, counts));

    let app = App::new(use_cases);
    let stdout = io::stdout();
    app.run(cli.command, &mut stdout.lock())
}
