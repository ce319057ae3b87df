use crate::client::ForecastClient;
use crate::errors::ApiClientError;
use crate::models::{
    Client, ClientsEnvelope, CurrentUser, PeopleEnvelope, Person, PersonEnvelope, Project,
    ProjectEnvelope, ProjectsEnvelope, WhoAmIEnvelope,
};

impl ForecastClient {
    /// Lists every person on the account.
    pub async fn people(&self) -> Result<Vec<Person>, ApiClientError> {
        let envelope: PeopleEnvelope = self.get("people").await?;
        Ok(envelope.people)
    }

    pub async fn person(&self, id: u64) -> Result<Person, ApiClientError> {
        let envelope: PersonEnvelope = self.get(&format!("people/{}", id)).await?;
        Ok(envelope.person)
    }

    pub async fn projects(&self) -> Result<Vec<Project>, ApiClientError> {
        let envelope: ProjectsEnvelope = self.get("projects").await?;
        Ok(envelope.projects)
    }

    pub async fn project(&self, id: u64) -> Result<Project, ApiClientError> {
        let envelope: ProjectEnvelope = self.get(&format!("projects/{}", id)).await?;
        Ok(envelope.project)
    }

    pub async fn clients(&self) -> Result<Vec<Client>, ApiClientError> {
        let envelope: ClientsEnvelope = self.get("clients").await?;
        Ok(envelope.clients)
    }

    /// The user the access token belongs to.
    pub async fn whoami(&self) -> Result<CurrentUser, ApiClientError> {
        let envelope: WhoAmIEnvelope = self.get("whoami").await?;
        Ok(envelope.current_user)
    }
}
