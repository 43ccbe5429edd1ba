use serde::{Deserialize, Serialize};

fn default_initial_text() -> String {
    "Hello world".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Text placed in the input before the user types anything
    #[serde(default = "default_initial_text")]
    pub initial_text: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_text: default_initial_text(),
        }
    }
}
