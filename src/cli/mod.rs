//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the kaizen binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::pagination::{PaginationParams, DEFAULT_PAGE_SIZE};

/// AgileZen command-line interface.
#[derive(Parser, Debug)]
#[command(name = "kaizen", about = "Manage AgileZen projects Kanban style", version)]
pub struct Cli {
    /// AgileZen API key (overrides the configuration file).
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Configuration file (defaults to <config dir>/kaizen/config.yaml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Log every API call to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all projects you have access to.
    Projects {
        /// Include the phases of each project.
        #[arg(long)]
        phases: bool,

        /// Include the members of each project.
        #[arg(long)]
        members: bool,

        /// Include the metrics of each project.
        #[arg(long)]
        metrics: bool,
    },

    /// List the phases of a project.
    Phases {
        /// Project id (defaults to the configured project).
        #[arg(long)]
        project: Option<u64>,

        /// Include the stories of each phase.
        #[arg(long)]
        stories: bool,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List the stories of a project.
    Stories {
        /// Project id (defaults to the configured project).
        #[arg(long)]
        project: Option<u64>,

        /// Include the tasks of each story.
        #[arg(long)]
        tasks: bool,

        /// Include the tags of each story.
        #[arg(long)]
        tags: bool,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Add a phase to a project.
    AddPhase {
        /// Project id (defaults to the configured project).
        #[arg(long)]
        project: Option<u64>,

        /// Name of the new phase.
        name: String,

        /// Description of the new phase.
        description: String,

        /// Zero-based index into the list of phases.
        #[arg(long)]
        index: Option<u32>,

        /// Work-in-progress limit.
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Move a story to the next phase.
    BumpPhase {
        /// Project id (defaults to the configured project).
        #[arg(long)]
        project: Option<u64>,

        /// Id of the story to move.
        story: u64,
    },

    /// List the stories in the configured "todo" phase.
    Todo {
        /// Project id (defaults to the configured project).
        #[arg(long)]
        project: Option<u64>,
    },

    /// Move the top story of the "todo" phase to the "working" phase and
    /// assign it to the configured user.
    PopNext {
        /// Project id (defaults to the configured project).
        #[arg(long)]
        project: Option<u64>,
    },

    /// Move a story to the configured "done" phase.
    Done {
        /// Project id (defaults to the configured project).
        #[arg(long)]
        project: Option<u64>,

        /// Id of the story to move.
        story: u64,
    },
}

/// Pagination flags shared by list commands.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Page number (1-indexed).
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Number of items per page.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub size: u32,
}

impl From<PageArgs> for PaginationParams {
    fn from(args: PageArgs) -> Self {
        PaginationParams::for_page(args.page, args.size)
    }
}

/// Names of the enrichments whose flag is set.
pub fn enrichments(flags: &[(&'static str, bool)]) -> Vec<&'static str> {
    flags
        .iter()
        .filter(|(_, enabled)| *enabled)
        .map(|(name, _)| *name)
        .collect()
}
