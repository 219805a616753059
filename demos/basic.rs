//! Basic example demonstrating the AgileZen API client.
//!
//! Run with:
//! ```
//! KAIZEN_API_KEY=your-key cargo run --example basic
//! ```

use kaizen::{ApiRequest, Page, Phase, Project, RootRequest, ZenApi, ZenClient};

#[tokio::main]
async fn main() -> kaizen::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating AgileZen client...");
    let client = ZenClient::from_env()?;
    println!("Connected to: {}", client.base_url());
    let root = RootRequest::new(client.clone());

    // List projects with their phases
    println!("\n--- Listing Projects ---");
    let projects: Page<Project> = root
        .clone()
        .projects(None)
        .with_enrichments(["phases"])
        .send_as()
        .await?;
    println!("Found {} projects", projects.len());

    for project in &projects {
        println!("  - {} ({})", project.name, project.id);
    }

    // Walk the phases of the first project
    if let Some(first_project) = projects.items.first() {
        println!("\n--- Phases of {} ---", first_project.name);
        let phases: Page<Phase> = root
            .projects(Some(first_project.id))
            .phases(None)?
            .paginate(1, 100)
            .send_as()
            .await?;

        for phase in &phases {
            println!("  {}. {}", phase.index.unwrap_or_default(), phase.name);
        }

        // Stories of the first phase, through the higher-level API
        if let Some(first_phase) = phases.items.first() {
            let api = ZenApi::new(client);
            let stories = api
                .list_phase_stories(first_project.id, &first_phase.name)
                .await?;
            println!("\n--- Stories in {} ---", first_phase.name);
            println!("{}", serde_json::to_string_pretty(&stories)?);
        }
    }

    Ok(())
}
