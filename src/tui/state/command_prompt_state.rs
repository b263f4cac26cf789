//! Remote command prompt state.

#[derive(Debug, Clone)]
pub(crate) struct CommandPromptState {
    /// Hostnames the command will run on, in hostname order.
    pub(crate) targets: Vec<String>,
    pub(crate) command: String,
    pub(crate) error: Option<String>,
}

impl CommandPromptState {
    pub(crate) fn new(targets: Vec<String>) -> Self {
        Self {
            targets,
            command: String::new(),
            error: None,
        }
    }
}
