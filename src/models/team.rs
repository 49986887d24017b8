use serde::{Deserialize, Serialize};

/// A team together with everything needed to turn names into ids.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub issue_labels: Vec<Label>,
    pub organization: Organization,
    pub states: Vec<WorkflowState>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Organization {
    pub users: Vec<User>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Label {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct User {
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WorkflowState {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Project {
    pub id: String,
    pub name: String,
}

/// Anything that can be looked up by a human readable name.
pub trait Named {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

macro_rules! impl_named {
    ($ty:ty, $field:ident) => {
        impl Named for $ty {
            fn id(&self) -> &str {
                &self.id
            }

            fn name(&self) -> &str {
                &self.$field
            }
        }
    };
}

impl_named!(Label, name);
impl_named!(User, display_name);
impl_named!(WorkflowState, name);
impl_named!(Project, name);

/// Id of the first item whose name equals `name`, ignoring case.
pub fn find_id<'a, T: Named>(items: &'a [T], name: &str) -> Option<&'a str> {
    let wanted = name.to_lowercase();
    items
        .iter()
        .find(|item| item.name().to_lowercase() == wanted)
        .map(|item| item.id())
}

impl Team {
    pub fn label_id(&self, name: &str) -> Option<&str> {
        find_id(&self.issue_labels, name)
    }

    pub fn user_id(&self, display_name: &str) -> Option<&str> {
        find_id(&self.organization.users, display_name)
    }

    pub fn state_id(&self, name: &str) -> Option<&str> {
        find_id(&self.states, name)
    }

    pub fn project_id(&self, name: &str) -> Option<&str> {
        find_id(&self.projects, name)
    }
}
