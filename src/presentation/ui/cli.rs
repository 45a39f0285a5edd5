use crate::domain::entities::{OptionCategory, TriState};
use crate::infrastructure::workspace_repository::WORKSPACE_ENV;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "column-filters")]
#[command(about = "Inspect and edit the filters of dashboard columns", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace file holding the columns
    #[arg(long, env = WORKSPACE_ENV, global = true)]
    pub workspace: Option<PathBuf>,

    /// Log more (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "List the columns of the workspace")]
    List,

    #[command(about = "Show the options panel of a column")]
    Show {
        column: String,

        /// Expand every section instead of only changed ones
        #[arg(long)]
        all: bool,
    },

    #[command(about = "Click one filter option")]
    Toggle {
        column: String,

        /// e.g. state, subject_types, repos
        category: OptionCategory,

        /// Option key; `owner` or `owner/repo` for repos
        option: String,

        /// Value the checkbox asks for
        #[arg(long, default_value = "include")]
        click: TriState,
    },

    #[command(about = "Reset every filter of a column")]
    Clear { column: String },

    #[command(about = "Add a column from the catalog")]
    Add {
        id: String,

        /// Template name, see `catalog`
        template: String,

        /// Template parameters in order (username, owner, repo, ...)
        params: Vec<String>,
    },

    #[command(about = "Remove a column")]
    Remove { column: String },

    #[command(about = "List the column templates")]
    Catalog,

    #[command(about = "Render notification cards from a JSON file")]
    Cards {
        file: PathBuf,

        /// Card width used to pick the layout
        #[arg(long, default_value_t = 800)]
        width: u32,
    },
}
