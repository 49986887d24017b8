use serde_json::{json, Value};

use crate::config::Config;
use crate::constants::{CREATE_ISSUE_MUTATION, TEAM_QUERY};
use crate::error::LinearResult;
use crate::logging::{log_debug, log_error, log_info};
use crate::models::graphql::{IssueCreateData, TeamData};
use crate::models::{NewIssue, Team, Variables};

use super::LinearClient;

/// Creates issues in a single team, addressing labels, users, states and
/// projects by name.
///
/// Nothing is cached: every [`Linear::create_issue`] fetches the team again.
#[derive(Clone)]
pub struct Linear {
    client: LinearClient,
    team: String,
}

/// Ids resolved from a [`NewIssue`] against a team.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct ResolvedIds<'a> {
    pub label_id: Option<&'a str>,
    pub assignee_id: Option<&'a str>,
    pub state_id: Option<&'a str>,
    pub project_id: Option<&'a str>,
}

impl Linear {
    pub fn new(api_key: impl Into<String>, team: impl Into<String>) -> Self {
        Self::with_client(LinearClient::new(api_key), team)
    }

    pub fn with_client(client: LinearClient, team: impl Into<String>) -> Self {
        Self {
            client,
            team: team.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_client(
            LinearClient::with_endpoint(config.api_key.clone(), config.api_url.clone()),
            config.team_id.clone(),
        )
    }

    pub fn client(&self) -> &LinearClient {
        &self.client
    }

    pub fn team_id(&self) -> &str {
        &self.team
    }

    /// Fetch the team with its labels, members, workflow states and projects.
    pub async fn team(&self) -> LinearResult<Team> {
        let mut variables = Variables::new();
        variables.insert("team".to_string(), json!(self.team));

        let data: TeamData = self.client.request_as(TEAM_QUERY, Some(variables)).await?;
        Ok(data.team)
    }

    /// Create an issue. Names that match nothing in the team are left unset.
    pub async fn create_issue(&self, issue: &NewIssue) -> LinearResult<()> {
        let team = self.team().await?;
        let ids = resolve_ids(&team, issue);

        if let (Some(name), Some(project_id)) = (issue.project.as_deref(), ids.project_id) {
            // The mutation has no project input, so this id goes nowhere.
            log_debug(&format!("Project '{}' resolved to {} and not sent", name, project_id));
        }

        let variables = create_issue_variables(&team, issue, &ids);
        let data = self.client.request(CREATE_ISSUE_MUTATION, Some(variables)).await?;

        // The issue exists at this point; an unexpected payload only gets logged.
        match serde_json::from_value::<IssueCreateData>(data) {
            Ok(created) => log_debug(&format!(
                "Issue '{}' created in team {} (lastSyncId {:?})",
                issue.title, team.id, created.issue_create.last_sync_id
            )),
            Err(e) => log_error(&format!(
                "Issue '{}' created in team {} but the payload was unreadable: {}",
                issue.title, team.id, e
            )),
        }

        Ok(())
    }
}

pub(crate) fn resolve_ids<'a>(team: &'a Team, issue: &NewIssue) -> ResolvedIds<'a> {
    ResolvedIds {
        label_id: lookup("label", issue.label.as_deref(), |name| team.label_id(name)),
        assignee_id: lookup("assignee", issue.assignee.as_deref(), |name| team.user_id(name)),
        state_id: lookup("state", issue.state.as_deref(), |name| team.state_id(name)),
        project_id: lookup("project", issue.project.as_deref(), |name| team.project_id(name)),
    }
}

fn lookup<'a, F>(kind: &str, name: Option<&str>, find: F) -> Option<&'a str>
where
    F: FnOnce(&str) -> Option<&'a str>,
{
    // An empty name is treated the same as no name at all.
    let name = name.filter(|name| !name.is_empty())?;
    let id = find(name);
    if id.is_none() {
        log_info(&format!("No {} named '{}', leaving it unset", kind, name));
    }
    id
}

pub(crate) fn create_issue_variables(team: &Team, issue: &NewIssue, ids: &ResolvedIds<'_>) -> Variables {
    let mut variables = Variables::new();
    variables.insert("teamId".to_string(), json!(team.id));
    variables.insert("title".to_string(), json!(issue.title));

    if let Some(description) = &issue.description {
        variables.insert("description".to_string(), json!(description));
    }

    let label_ids: Vec<&str> = ids.label_id.into_iter().collect();
    variables.insert("labelIds".to_string(), json!(label_ids));
    variables.insert("assigneeId".to_string(), ids.assignee_id.map_or(Value::Null, |id| json!(id)));
    variables.insert("stateId".to_string(), ids.state_id.map_or(Value::Null, |id| json!(id)));

    variables
}
