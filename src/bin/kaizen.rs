//! AgileZen CLI binary.
//!
//! A command-line interface for managing AgileZen projects.

use std::process::ExitCode;

use clap::Parser;
use kaizen::cli::{enrichments, Cli, Command};
use kaizen::{
    Config, Page, Phase, PhaseFields, PhaseRow, PrettyPrint, Project, ProjectRow, Story,
    StoryRow, ZenApi,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tabled::{Table, Tabled};
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let client = match config.client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set KAIZEN_API_KEY, pass --api-key or add api_key to the config file");
            return ExitCode::FAILURE;
        }
    };

    match run(&ZenApi::new(client), &config, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> kaizen::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?.unwrap_or_default(),
    };
    if let Some(key) = &cli.api_key {
        config.api_key = Some(key.clone());
    }
    Ok(config)
}

async fn run(api: &ZenApi, config: &Config, cli: Cli) -> kaizen::Result<()> {
    let json = cli.json;
    match cli.command {
        Command::Projects {
            phases,
            members,
            metrics,
        } => {
            let names = enrichments(&[
                ("phases", phases),
                ("members", members),
                ("metrics", metrics),
            ]);
            let result = api.list_projects(&names).await?;
            output_page::<Project, ProjectRow>(result, json)
        }
        Command::Phases {
            project,
            stories,
            page,
        } => {
            let project = config.project(project)?;
            let result = api.list_phases(project, stories, page.into()).await?;
            output_page::<Phase, PhaseRow>(result, json)
        }
        Command::Stories {
            project,
            tasks,
            tags,
            page,
        } => {
            let project = config.project(project)?;
            let names = enrichments(&[("tasks", tasks), ("tags", tags)]);
            let result = api.list_stories(project, &names, page.into()).await?;
            output_page::<Story, StoryRow>(result, json)
        }
        Command::AddPhase {
            project,
            name,
            description,
            index,
            limit,
        } => {
            let project = config.project(project)?;
            let fields = PhaseFields {
                index,
                limit,
                ..PhaseFields::new(name, description)
            };
            let result = api.add_phase(project, &fields).await?;
            output_single::<Phase>(result, json)
        }
        Command::BumpPhase { project, story } => {
            let project = config.project(project)?;
            let result = api.move_story_to_next_phase(project, story).await?;
            output_single::<Story>(result, json)
        }
        Command::Todo { project } => {
            let project = config.project(project)?;
            let result = api.list_phase_stories(project, &config.phases.todo).await?;
            output_page::<Story, StoryRow>(result, json)
        }
        Command::PopNext { project } => {
            let project = config.project(project)?;
            let result = api
                .pop_next(
                    project,
                    &config.phases.todo,
                    &config.phases.working,
                    config.user.as_deref(),
                )
                .await?;
            output_single::<Story>(result, json)
        }
        Command::Done { project, story } => {
            let project = config.project(project)?;
            let result = api
                .move_story_to_phase(project, story, &config.phases.done)
                .await?;
            output_single::<Story>(result, json)
        }
    }
}

fn output_single<T>(value: Value, json: bool) -> kaizen::Result<()>
where
    T: DeserializeOwned + PrettyPrint,
{
    match serde_json::from_value::<T>(value.clone()) {
        Ok(item) if !json => println!("{}", item.pretty_print()),
        _ => println!("{}", serde_json::to_string_pretty(&value)?),
    }
    Ok(())
}

fn output_page<T, R>(value: Value, json: bool) -> kaizen::Result<()>
where
    T: DeserializeOwned,
    R: Tabled + for<'a> From<&'a T>,
{
    let page = match serde_json::from_value::<Page<T>>(value.clone()) {
        Ok(page) if !json => page,
        _ => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            return Ok(());
        }
    };

    let rows: Vec<R> = page.iter().map(R::from).collect();
    println!("{}", Table::new(rows));
    match page.total_pages {
        Some(total) => println!("\nPage {}/{} ({} per page)", page.page, total, page.page_size),
        None if page.has_more() => println!("\nPage {} (more available)", page.page),
        None => println!("\nPage {} (end)", page.page),
    }
    Ok(())
}
