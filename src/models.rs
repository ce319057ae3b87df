//! Structural mirrors of the Forecast JSON schema.
//!
//! Fields the service may omit or send as `null` are `Option`s; unknown
//! fields are ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub login: Option<String>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub subscribed: bool,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub updated_at: Option<String>,
    pub updated_by_id: Option<u64>,
    pub harvest_user_id: Option<u64>,
    /// Seconds per week.
    pub weekly_capacity: Option<u64>,
    pub working_days: Option<WorkingDays>,
    #[serde(default)]
    pub color_blind: bool,
    pub personal_feed_token_id: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDays {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub color: Option<String>,
    pub code: Option<String>,
    pub notes: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub harvest_id: Option<u64>,
    #[serde(default)]
    pub archived: bool,
    pub updated_at: Option<String>,
    pub updated_by_id: Option<u64>,
    pub client_id: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A customer organisation, as Forecast calls it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u64,
    pub name: String,
    pub harvest_id: Option<u64>,
    #[serde(default)]
    pub archived: bool,
    pub updated_at: Option<String>,
    pub updated_by_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: u64,
    #[serde(default)]
    pub account_ids: Vec<u64>,
}

// Response envelopes.

#[derive(Debug, Deserialize)]
pub(crate) struct PeopleEnvelope {
    pub people: Vec<Person>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PersonEnvelope {
    pub person: Person,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectsEnvelope {
    pub projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectEnvelope {
    pub project: Project,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClientsEnvelope {
    pub clients: Vec<Client>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WhoAmIEnvelope {
    pub current_user: CurrentUser,
}
