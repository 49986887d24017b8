use serde::{Deserialize, Serialize};

/// An issue to create. Every optional field is a name, not an id.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct NewIssue {
    pub title: String,
    pub description: Option<String>,
    pub label: Option<String>,
    /// Display name of the user to assign.
    pub assignee: Option<String>,
    pub state: Option<String>,
    pub project: Option<String>,
}

impl NewIssue {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }
}
