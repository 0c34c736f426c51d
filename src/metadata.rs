use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_description")]
    pub description: String,
}

fn default_name() -> String {
    "New Project".to_string()
}

fn default_description() -> String {
    "No description".to_string()
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: default_description(),
        }
    }
}
