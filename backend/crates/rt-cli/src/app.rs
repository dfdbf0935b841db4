//! Command execution against the backend, gated by the session's role.
//!
//! Every mutating command checks its capability locally before any request
//! is sent. Every list command prints only what the role may see.

use crate::error::{CliError, Result as CliErrorResult};
use crate::{
    Client, Session, commands::Commands, document_commands::DocumentCommands,
    milestone_commands::MilestoneCommands, project_commands::ProjectCommands,
    token_commands::TokenCommands,
};

use rt_auth::{AccessError, Actor, Capability, Claims, decode};
use rt_core::{
    Document, FromJsonRecord, Milestone, OwnedRecord, Project, ProjectStatus, decode_records,
};

use std::str::FromStr;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use log::{debug, info};
use serde::Serialize;
use serde_json::{Value, json};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct App {
    base_url: String,
    timeout: Duration,
    session: Session,
}

impl App {
    pub fn new(base_url: &str, timeout: Duration, session: Session) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn actor(&self) -> &Actor {
        self.session.actor()
    }

    /// Client carrying the current credential, if any.
    fn client(&self) -> CliErrorResult<Client> {
        Ok(Client::with_timeout(
            &self.base_url,
            self.actor().bearer(),
            self.timeout,
        )?)
    }

    #[track_caller]
    fn require_login(&self) -> CliErrorResult<&Claims> {
        self.actor()
            .claims()
            .ok_or_else(|| CliError::from(AccessError::unauthenticated()))
    }

    #[track_caller]
    fn require(&self, capability: Capability) -> CliErrorResult<()> {
        self.actor().require(capability)?;
        Ok(())
    }

    pub async fn execute(&mut self, command: Commands) -> CliErrorResult<Value> {
        match command {
            Commands::Login { username, password } => {
                let password = password_or_env(password)?;
                self.login(&username, &password).await
            }
            Commands::Register {
                full_name,
                username,
                password,
            } => {
                let password = password_or_env(password)?;
                self.register(&full_name, &username, &password).await
            }
            Commands::Logout => self.logout(),
            Commands::Whoami => self.whoami(),
            Commands::Capabilities => self.capabilities(),
            Commands::Token { action } => match action {
                TokenCommands::Decode { credential } => self.decode_token(credential.as_deref()),
            },
            Commands::Project { action } => match action {
                ProjectCommands::List => self.list_projects().await,
                ProjectCommands::Get { id } => self.get_project(&id).await,
                ProjectCommands::Create {
                    title,
                    description,
                    start_date,
                    end_date,
                } => {
                    self.create_project(&title, description.as_deref(), &start_date, &end_date)
                        .await
                }
                ProjectCommands::Status { id, status } => {
                    self.update_project_status(&id, &status).await
                }
                ProjectCommands::Delete { id } => self.delete_project(&id).await,
            },
            Commands::Milestone { action } => match action {
                MilestoneCommands::List { project_id } => {
                    self.list_milestones(project_id.as_deref()).await
                }
                MilestoneCommands::Create {
                    project_id,
                    title,
                    description,
                    due_date,
                } => {
                    self.create_milestone(
                        &project_id,
                        &title,
                        description.as_deref(),
                        due_date.as_deref(),
                    )
                    .await
                }
                MilestoneCommands::Complete { id } => self.complete_milestone(&id).await,
                MilestoneCommands::Delete { id } => self.delete_milestone(&id).await,
            },
            Commands::Document { action } => match action {
                DocumentCommands::List { project_id } => {
                    self.list_documents(project_id.as_deref()).await
                }
                DocumentCommands::Add {
                    project_id,
                    title,
                    description,
                    url,
                } => {
                    self.add_document(&project_id, &title, description.as_deref(), &url)
                        .await
                }
                DocumentCommands::Delete { id } => self.delete_document(&id).await,
            },
        }
    }

    // =========================================================================
    // Session
    // =========================================================================

    pub async fn login(&mut self, username: &str, password: &str) -> CliErrorResult<Value> {
        let client = Client::with_timeout(&self.base_url, None, self.timeout)?;
        let credential = client.login(username, password).await?;
        let claims = self.session.login(&credential)?;

        Ok(json!({
            "claims": claims,
            "capabilities": self.actor().capabilities(),
        }))
    }

    /// Create an account. The session is left untouched.
    pub async fn register(
        &self,
        full_name: &str,
        username: &str,
        password: &str,
    ) -> CliErrorResult<Value> {
        if full_name.trim().is_empty() || username.trim().is_empty() {
            return Err(CliError::invalid_argument(
                "full name and username must not be blank",
            ));
        }

        let client = Client::with_timeout(&self.base_url, None, self.timeout)?;
        client.signup(full_name, username, password).await?;

        info!("Registered account {username}");
        Ok(json!({ "registered": true, "username": username }))
    }

    pub fn logout(&mut self) -> CliErrorResult<Value> {
        let removed = self.session.logout()?;
        Ok(json!({ "loggedOut": true, "sessionRemoved": removed }))
    }

    pub fn whoami(&self) -> CliErrorResult<Value> {
        let claims = self.require_login()?;

        Ok(json!({
            "claims": claims,
            "capabilities": self.actor().capabilities(),
        }))
    }

    pub fn capabilities(&self) -> CliErrorResult<Value> {
        Ok(json!({
            "role": self.actor().role(),
            "capabilities": self.actor().capabilities(),
        }))
    }

    /// Decodes `credential`, or the session's own credential when omitted.
    pub fn decode_token(&self, credential: Option<&str>) -> CliErrorResult<Value> {
        let credential = match credential {
            Some(credential) => credential,
            None => self
                .actor()
                .credential()
                .ok_or_else(|| CliError::from(AccessError::unauthenticated()))?,
        };

        let claims = decode(credential)?;
        let expired = claims.is_expired(Utc::now());

        Ok(json!({ "claims": claims, "expired": expired }))
    }

    // =========================================================================
    // Projects
    // =========================================================================

    pub async fn list_projects(&self) -> CliErrorResult<Value> {
        self.require_login()?;
        let body = self.client()?.list_projects().await?;
        let projects = self.visible::<Project>(&body)?;
        Ok(serde_json::to_value(projects)?)
    }

    pub async fn get_project(&self, id: &str) -> CliErrorResult<Value> {
        self.require_login()?;
        let body = self.client()?.get_project(id).await?;
        let project = Project::from_json(&body)?;

        if self.actor().visible(std::slice::from_ref(&project)).is_empty() {
            return Err(CliError::not_found(Project::KIND, id));
        }

        Ok(serde_json::to_value(project)?)
    }

    pub async fn create_project(
        &self,
        title: &str,
        description: Option<&str>,
        start_date: &str,
        end_date: &str,
    ) -> CliErrorResult<Value> {
        self.require(Capability::CreateProject)?;

        if title.trim().is_empty() {
            return Err(CliError::invalid_argument("project title must not be blank"));
        }
        let start = parse_date("start date", start_date)?;
        let end = parse_date("end date", end_date)?;
        if end < start {
            return Err(CliError::invalid_argument(format!(
                "end date {end_date} is before start date {start_date}"
            )));
        }

        let body = self
            .client()?
            .create_project(title, description, start_date, end_date)
            .await?;

        info!("Created project '{title}'");
        Ok(normalized::<Project>(
            body,
            json!({ "created": true, "title": title }),
        ))
    }

    pub async fn update_project_status(&self, id: &str, status: &str) -> CliErrorResult<Value> {
        self.require(Capability::UpdateProjectStatus)?;
        let status = ProjectStatus::from_str(status).map_err(|_| {
            let choices = ProjectStatus::SELECTABLE.map(|s| s.as_str().to_string());
            CliError::invalid_argument(format!(
                "unknown project status '{status}' (expected one of {})",
                choices.join(", ")
            ))
        })?;

        let body = self
            .client()?
            .update_project_status(id, status.as_str())
            .await?;

        info!("Project {id} moved to {status}");
        Ok(normalized::<Project>(
            body,
            json!({ "id": id, "status": status }),
        ))
    }

    pub async fn delete_project(&self, id: &str) -> CliErrorResult<Value> {
        self.require(Capability::DeleteProject)?;
        self.client()?.delete_project(id).await?;

        info!("Deleted project {id}");
        Ok(json!({ "deleted": true, "id": id }))
    }

    // =========================================================================
    // Milestones
    // =========================================================================

    pub async fn list_milestones(&self, project_id: Option<&str>) -> CliErrorResult<Value> {
        self.require_login()?;
        let body = self.client()?.list_milestones().await?;
        let mut milestones = self.visible::<Milestone>(&body)?;

        if let Some(project_id) = project_id {
            milestones.retain(|m| m.project_id.as_deref() == Some(project_id));
        }

        Ok(serde_json::to_value(milestones)?)
    }

    pub async fn create_milestone(
        &self,
        project_id: &str,
        title: &str,
        description: Option<&str>,
        due_date: Option<&str>,
    ) -> CliErrorResult<Value> {
        self.require(Capability::CreateMilestone)?;
        let user_id = self.acting_user_id()?;

        if let Some(due_date) = due_date {
            parse_date("due date", due_date)?;
        }

        let body = self
            .client()?
            .create_milestone(project_id, &user_id, title, description, due_date)
            .await?;

        info!("Created milestone '{title}' in project {project_id}");
        Ok(normalized::<Milestone>(
            body,
            json!({ "created": true, "projectId": project_id, "title": title }),
        ))
    }

    pub async fn complete_milestone(&self, id: &str) -> CliErrorResult<Value> {
        self.require(Capability::CompleteMilestone)?;
        let body = self.client()?.complete_milestone(id).await?;

        info!("Completed milestone {id}");
        Ok(normalized::<Milestone>(
            body,
            json!({ "id": id, "isCompleted": true }),
        ))
    }

    pub async fn delete_milestone(&self, id: &str) -> CliErrorResult<Value> {
        self.require(Capability::DeleteMilestone)?;
        self.client()?.delete_milestone(id).await?;

        info!("Deleted milestone {id}");
        Ok(json!({ "deleted": true, "id": id }))
    }

    // =========================================================================
    // Documents
    // =========================================================================

    pub async fn list_documents(&self, project_id: Option<&str>) -> CliErrorResult<Value> {
        self.require_login()?;
        let body = self.client()?.list_documents().await?;
        let mut documents = self.visible::<Document>(&body)?;

        if let Some(project_id) = project_id {
            documents.retain(|d| d.project_id.as_deref() == Some(project_id));
        }

        Ok(serde_json::to_value(documents)?)
    }

    pub async fn add_document(
        &self,
        project_id: &str,
        title: &str,
        description: Option<&str>,
        url_or_path: &str,
    ) -> CliErrorResult<Value> {
        self.require(Capability::UploadDocument)?;
        let user_id = self.acting_user_id()?;

        let body = self
            .client()?
            .upload_document(project_id, &user_id, title, description, url_or_path)
            .await?;

        info!("Added document '{title}' to project {project_id}");
        Ok(normalized::<Document>(
            body,
            json!({ "created": true, "projectId": project_id, "title": title }),
        ))
    }

    pub async fn delete_document(&self, id: &str) -> CliErrorResult<Value> {
        self.require(Capability::DeleteDocument)?;
        self.client()?.delete_document(id).await?;

        info!("Deleted document {id}");
        Ok(json!({ "deleted": true, "id": id }))
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn acting_user_id(&self) -> CliErrorResult<String> {
        self.actor()
            .acting_user_id()
            .map(String::from)
            .ok_or_else(|| CliError::from(AccessError::unauthenticated()))
    }

    /// Normalize a fetched list and keep what this actor may see.
    fn visible<R>(&self, body: &Value) -> CliErrorResult<Vec<R>>
    where
        R: FromJsonRecord + OwnedRecord + Clone,
    {
        let records = decode_records::<R>(body)?;
        let visible = self.actor().visible(&records);

        debug!(
            "{} of {} {} records visible",
            visible.len(),
            records.len(),
            R::KIND
        );
        Ok(visible)
    }
}

fn password_or_env(password: Option<String>) -> CliErrorResult<String> {
    match password {
        Some(password) => Ok(password),
        None => std::env::var("RT_PASSWORD")
            .map_err(|_| CliError::invalid_argument("--password or RT_PASSWORD is required")),
    }
}

fn parse_date(label: &str, raw: &str) -> CliErrorResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| CliError::invalid_argument(format!("{label} '{raw}' is not YYYY-MM-DD")))
}

/// The backend's record when it returns one, else `fallback`.
fn normalized<R: FromJsonRecord + Serialize>(body: Value, fallback: Value) -> Value {
    R::from_json(&body)
        .ok()
        .and_then(|record| serde_json::to_value(record).ok())
        .unwrap_or(fallback)
}
