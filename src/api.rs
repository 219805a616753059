//! Higher-level operations built on the request chain.
//!
//! [`ZenApi`] bundles the calls the CLI exposes: listings with the usual
//! enrichments and the workflow helpers that move a story between phases.

use serde_json::Value;

use crate::client::ZenClient;
use crate::error::{KaizenError, Result};
use crate::models::{Phase, PhaseFields, Story, StoryUpdate};
use crate::pagination::{Page, PaginationParams, DEFAULT_PAGE_SIZE};
use crate::resources::RootRequest;
use crate::traits::ApiRequest;

/// Convenience operations over the AgileZen API.
///
/// # Example
///
/// ```no_run
/// use kaizen::{ZenApi, ZenClient};
///
/// # async fn example() -> kaizen::Result<()> {
/// let api = ZenApi::new(ZenClient::from_env()?);
/// let moved = api.move_story_to_next_phase(12, 345).await?;
/// println!("{moved}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ZenApi {
    client: ZenClient,
}

impl ZenApi {
    pub fn new(client: ZenClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ZenClient {
        &self.client
    }

    /// A fresh request chain.
    pub fn root(&self) -> RootRequest {
        RootRequest::new(self.client.clone())
    }

    /// List the projects the API key has access to.
    ///
    /// `enrichments` may name `phases`, `members` or `metrics`.
    #[tracing::instrument(skip(self))]
    pub async fn list_projects(&self, enrichments: &[&str]) -> Result<Value> {
        let mut request = self.root().projects(None);
        if !enrichments.is_empty() {
            request = request.with_enrichments(enrichments);
        }
        request.send().await
    }

    /// List the phases of a project, optionally with their stories.
    #[tracing::instrument(skip(self))]
    pub async fn list_phases(
        &self,
        project_id: u64,
        with_stories: bool,
        page: PaginationParams,
    ) -> Result<Value> {
        let mut request = self.root().projects(Some(project_id)).phases(None)?;
        if with_stories {
            request = request.with_enrichments(["stories"]);
        }
        request.paginate(page.page, page.page_size).send().await
    }

    /// List the stories of a project.
    ///
    /// `enrichments` may name `tasks` or `tags`.
    #[tracing::instrument(skip(self))]
    pub async fn list_stories(
        &self,
        project_id: u64,
        enrichments: &[&str],
        page: PaginationParams,
    ) -> Result<Value> {
        let mut request = self.root().projects(Some(project_id)).stories(None)?;
        if !enrichments.is_empty() {
            request = request.with_enrichments(enrichments);
        }
        request.paginate(page.page, page.page_size).send().await
    }

    /// Add a phase to a project.
    #[tracing::instrument(skip(self))]
    pub async fn add_phase(&self, project_id: u64, fields: &PhaseFields) -> Result<Value> {
        self.root()
            .projects(Some(project_id))
            .phases(None)?
            .add(fields)?
            .send()
            .await
    }

    /// Ordered phases of a project, read from the first page only.
    ///
    /// Boards are expected to hold fewer phases than a page; a full page
    /// is logged since later phases would be missing.
    pub async fn phases(&self, project_id: u64) -> Result<Vec<Phase>> {
        let page: Page<Phase> = self
            .root()
            .projects(Some(project_id))
            .phases(None)?
            .paginate(1, DEFAULT_PAGE_SIZE)
            .send_as()
            .await?;

        if page.is_full() || page.has_more() {
            tracing::warn!(
                project_id,
                page_size = page.page_size,
                "phase list fills a whole page, later phases are ignored"
            );
        }
        Ok(page.items)
    }

    /// Stories sitting in the phase called `phase_name`.
    #[tracing::instrument(skip(self))]
    pub async fn list_phase_stories(&self, project_id: u64, phase_name: &str) -> Result<Value> {
        let phases = self.phases(project_id).await?;
        let phase_id = phase_id_by_name(&phases, phase_name)?;
        self.root()
            .projects(Some(project_id))
            .phases(Some(phase_id))?
            .stories()?
            .send()
            .await
    }

    /// Move a story to the phase following its current one.
    ///
    /// # Errors
    ///
    /// Returns [`KaizenError::LastPhase`] when the story already is in the
    /// last phase and [`KaizenError::UnknownPhase`] when its phase is not
    /// in the project's phase list.
    #[tracing::instrument(skip(self))]
    pub async fn move_story_to_next_phase(&self, project_id: u64, story_id: u64) -> Result<Value> {
        let story = self.story(project_id, story_id).await?;
        let current = story
            .phase_name()
            .ok_or_else(|| KaizenError::UnknownPhase(String::new()))?;

        let phases = self.phases(project_id).await?;
        let next = next_phase_id(&phases, current)?;
        tracing::info!(story_id, from = current, to = next, "moving story to next phase");

        self.update_story(project_id, story_id, &StoryUpdate::move_to(next))
            .await
    }

    /// Move a story to the phase called `phase_name`.
    #[tracing::instrument(skip(self))]
    pub async fn move_story_to_phase(
        &self,
        project_id: u64,
        story_id: u64,
        phase_name: &str,
    ) -> Result<Value> {
        let phases = self.phases(project_id).await?;
        let phase_id = phase_id_by_name(&phases, phase_name)?;
        self.update_story(project_id, story_id, &StoryUpdate::move_to(phase_id))
            .await
    }

    /// Take the top story of the `todo` phase and move it to `working`,
    /// assigning it to `owner` when one is given.
    ///
    /// # Errors
    ///
    /// Returns [`KaizenError::EmptyPhase`] when `todo` holds no story and
    /// [`KaizenError::UnknownPhase`] when either phase is not on the board.
    #[tracing::instrument(skip(self))]
    pub async fn pop_next(
        &self,
        project_id: u64,
        todo: &str,
        working: &str,
        owner: Option<&str>,
    ) -> Result<Value> {
        let phases = self.phases(project_id).await?;
        let todo_id = phase_id_by_name(&phases, todo)?;
        let working_id = phase_id_by_name(&phases, working)?;

        let top: Page<Story> = self
            .root()
            .projects(Some(project_id))
            .phases(Some(todo_id))?
            .stories()?
            .paginate(1, 1)
            .send_as()
            .await?;
        let story = top
            .items
            .into_iter()
            .next()
            .ok_or_else(|| KaizenError::EmptyPhase(todo.to_string()))?;
        tracing::info!(story_id = story.id, from = todo, to = working, "popping next story");

        let mut update = StoryUpdate::move_to(working_id);
        update.fields.owner = owner.map(str::to_string);
        self.update_story(project_id, story.id, &update).await
    }

    async fn story(&self, project_id: u64, story_id: u64) -> Result<Story> {
        self.root()
            .projects(Some(project_id))
            .stories(Some(story_id))?
            .send_as()
            .await
    }

    async fn update_story(
        &self,
        project_id: u64,
        story_id: u64,
        update: &StoryUpdate,
    ) -> Result<Value> {
        self.root()
            .projects(Some(project_id))
            .stories(Some(story_id))?
            .update(update)?
            .send()
            .await
    }
}

/// Id of the phase following `current` in `phases`.
///
/// # Errors
///
/// Returns [`KaizenError::LastPhase`] if `current` is the last phase and
/// [`KaizenError::UnknownPhase`] if it is not in the list.
pub fn next_phase_id(phases: &[Phase], current: &str) -> Result<u64> {
    if phases.last().is_some_and(|last| last.name == current) {
        return Err(KaizenError::LastPhase(current.to_string()));
    }
    phases
        .iter()
        .position(|phase| phase.name == current)
        .and_then(|idx| phases.get(idx + 1))
        .map(|next| next.id)
        .ok_or_else(|| KaizenError::UnknownPhase(current.to_string()))
}

/// Id of the phase called `name`.
///
/// # Errors
///
/// Returns [`KaizenError::UnknownPhase`] if no phase has that name.
pub fn phase_id_by_name(phases: &[Phase], name: &str) -> Result<u64> {
    phases
        .iter()
        .find(|phase| phase.name == name)
        .map(|phase| phase.id)
        .ok_or_else(|| KaizenError::UnknownPhase(name.to_string()))
}
