pub mod graphql;
pub mod issue;
pub mod team;

// Re-export commonly used types
pub use graphql::{ErrorLocation, GraphQLError, GraphQLRequest, GraphQLResponse, PathSegment, Variables};
pub use issue::NewIssue;
pub use team::{Label, Named, Organization, Project, Team, User, WorkflowState};
