pub const LINEAR_API_URL: &str = "https://api.linear.app/graphql";

// Environment variables read by `Config::from_env`
pub const API_KEY_ENV: &str = "LINEAR_API_KEY";
pub const TEAM_ID_ENV: &str = "LINEAR_TEAM_ID";
pub const API_URL_ENV: &str = "LINEAR_API_URL";

pub const TEAM_QUERY: &str = r#"
    query getTeam($team: String!) {
        team(id: $team) {
            id
            issueLabels {
                id
                name
            }
            organization {
                users {
                    id
                    displayName
                }
            }
            states {
                id
                name
            }
            projects {
                id
                name
            }
        }
    }
"#;

// The input has no project field.
pub const CREATE_ISSUE_MUTATION: &str = r#"
    mutation createIssue(
        $teamId: String!,
        $title: String!,
        $description: String,
        $labelIds: [String!]!,
        $assigneeId: String,
        $stateId: String
    ) {
        issueCreate(
            input: {
                teamId: $teamId
                title: $title
                description: $description
                assigneeId: $assigneeId
                stateId: $stateId
                labelIds: $labelIds
            }
        ) {
            lastSyncId
        }
    }
"#;
