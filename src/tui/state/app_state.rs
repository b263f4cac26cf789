//! Core TUI state and initialization.

use super::command_prompt_state::CommandPromptState;
use super::editor_state::EditorState;
use crate::process::{ActionOutcome, ActionRunner};
use crate::registry::{RecordId, ServerRecord, ServerStore, ValidationError, parse_tags};
use crate::search::{SearchIndex, search};
use crate::session::SessionState;
use crate::{log_debug, log_error, log_info};
use std::{collections::BTreeSet, io, path::PathBuf};

pub(crate) const DEFAULT_PAGE_SIZE: usize = 10;

/// A subprocess action waiting for the event loop to release the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    Login { identity: String, hostname: String },
    RemoteCommand { identity: String, hostnames: Vec<String>, command: String },
    InitCredentials,
}

/// Main application state.
///
/// Owns the registry, its search index, the session and the action runner.
/// `visible` always holds the result of the current keyword query.
pub struct AppState {
    pub(crate) store: ServerStore,
    pub(crate) index: SearchIndex,
    pub(crate) session: SessionState,
    pub(crate) runner: ActionRunner,
    pub(crate) server_config_path: PathBuf,
    pub(crate) visible: Vec<RecordId>,
    pub(crate) selected_row: usize,
    pub(crate) scroll_offset: usize,
    pub(crate) page_size: usize,
    /// Checked hostnames; keyed by hostname so marks survive re-queries.
    pub(crate) checked: BTreeSet<String>,
    pub(crate) editor: Option<EditorState>,
    pub(crate) command_prompt: Option<CommandPromptState>,
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) status_message: Option<String>,
    pub(crate) should_exit: bool,
}

impl AppState {
    pub fn new(store: ServerStore, session: SessionState, runner: ActionRunner, server_config_path: PathBuf) -> Self {
        log_debug!("Initializing launcher with {} servers", store.len());
        let index = SearchIndex::build(&store);
        let mut app = Self {
            store,
            index,
            session,
            runner,
            server_config_path,
            visible: Vec::new(),
            selected_row: 0,
            scroll_offset: 0,
            page_size: DEFAULT_PAGE_SIZE,
            checked: BTreeSet::new(),
            editor: None,
            command_prompt: None,
            pending_action: None,
            status_message: None,
            should_exit: false,
        };
        app.refresh_results();
        app
    }

    /// Re-run the current keyword query, keeping the selected record when it
    /// is still in the result list.
    pub(crate) fn refresh_results(&mut self) {
        let previous = self.selected_record_id();
        self.visible = search(&self.index, &self.store, self.session.keyword());
        self.selected_row = previous
            .and_then(|id| self.visible.iter().position(|visible_id| *visible_id == id))
            .unwrap_or(0);
        self.clamp_selection();
    }

    pub(crate) fn rebuild_index(&mut self) {
        self.index = SearchIndex::build(&self.store);
        log_debug!("Rebuilt search index ({} keys)", self.index.key_count());
    }

    fn clamp_selection(&mut self) {
        if self.visible.is_empty() {
            self.selected_row = 0;
            self.scroll_offset = 0;
        } else if self.selected_row >= self.visible.len() {
            self.selected_row = self.visible.len() - 1;
        }
    }

    pub(crate) fn selected_record_id(&self) -> Option<RecordId> {
        self.visible.get(self.selected_row).copied()
    }

    pub(crate) fn selected_record(&self) -> Option<&ServerRecord> {
        self.selected_record_id().and_then(|id| self.store.record(id))
    }

    pub(crate) fn visible_records(&self) -> impl Iterator<Item = &ServerRecord> {
        self.visible.iter().filter_map(|id| self.store.record(*id))
    }

    pub(crate) fn is_checked(&self, hostname: &str) -> bool {
        self.checked.contains(hostname)
    }

    pub(crate) fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Keep the selected row inside a viewport of `viewport_height` rows.
    pub(crate) fn update_scroll(&mut self, viewport_height: usize) {
        let viewport_height = viewport_height.max(1);
        self.page_size = viewport_height;
        if self.selected_row < self.scroll_offset {
            self.scroll_offset = self.selected_row;
        } else if self.selected_row >= self.scroll_offset + viewport_height {
            self.scroll_offset = self.selected_row + 1 - viewport_height;
        }
        let max_offset = self.visible.len().saturating_sub(viewport_height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    /// Create or update a record from form text, persist it and re-query.
    ///
    /// Validation failures leave everything untouched. A failed write keeps
    /// the in-memory change and is reported through the status line.
    pub(crate) fn submit_edit(&mut self, hostname: &str, alias: &str, tags_text: &str) -> Result<RecordId, ValidationError> {
        let id = self.store.upsert(hostname, Some(alias), parse_tags(tags_text))?;
        let hostname = self.store.record(id).map(|record| record.hostname().to_string()).unwrap_or_default();

        match self.store.save(&self.server_config_path) {
            Ok(()) => {
                log_info!("Saved server {}", hostname);
                self.set_status(format!("Saved {}", hostname));
            }
            Err(err) => {
                log_error!("Failed to save server registry: {}", err);
                self.set_status(format!("Save failed: {}", err));
            }
        }

        self.rebuild_index();
        self.refresh_results();
        if let Some(row) = self.visible.iter().position(|visible_id| *visible_id == id) {
            self.selected_row = row;
        }
        Ok(id)
    }

    pub(crate) fn take_pending_action(&mut self) -> Option<PendingAction> {
        self.pending_action.take()
    }

    /// Run an action through the runner and report the result on the status
    /// line. Callers are responsible for releasing the terminal first.
    pub(crate) fn execute_action(&mut self, action: PendingAction) {
        let result = match &action {
            PendingAction::Login { identity, hostname } => self
                .runner
                .login(identity, hostname)
                .map(|outcome| describe_outcome(&format!("rlogin {}", hostname), outcome)),
            PendingAction::RemoteCommand {
                identity,
                hostnames,
                command,
            } => self.runner.remote_command(identity, hostnames.as_slice(), command).map(|outcomes| {
                let failed = outcomes
                    .iter()
                    .filter(|outcome| matches!(outcome, ActionOutcome::Exited(code) if *code != Some(0)))
                    .count();
                if failed == 0 {
                    format!("Ran command on {} server(s)", hostnames.len())
                } else {
                    format!("Ran command on {} server(s), {} failed", hostnames.len(), failed)
                }
            }),
            PendingAction::InitCredentials => self.runner.init_credentials().map(|outcome| describe_outcome("kinit", outcome)),
        };

        match result {
            Ok(message) => self.set_status(message),
            Err(err) => self.report_action_error(&action, &err),
        }
    }

    fn report_action_error(&mut self, action: &PendingAction, err: &io::Error) {
        log_error!("Action {:?} failed: {}", action, err);
        self.set_status(format!("Command failed: {}", err));
    }
}

fn describe_outcome(label: &str, outcome: ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Skipped => format!("{} (test mode, not executed)", label),
        ActionOutcome::Exited(Some(0)) => format!("{} finished", label),
        ActionOutcome::Exited(Some(code)) => format!("{} exited with status {}", label, code),
        ActionOutcome::Exited(None) => format!("{} was terminated by a signal", label),
    }
}

#[cfg(test)]
impl AppState {
    /// Two-server registry, two identities, dry-run runner and a registry
    /// path under the temp directory unique to this instance.
    pub(crate) fn new_for_tests() -> Self {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

        let store = ServerStore::parse(
            std::path::Path::new("servers.json"),
            r#"[
                {"hostname": "web01.example.com", "tags": ["web", "prod"]},
                {"hostname": "db01.example.com", "alias": "primarydb", "tags": ["db"]}
            ]"#,
        )
        .expect("test registry should parse");
        let session = SessionState::new(vec!["admin".to_string(), "ops".to_string()]).expect("test identities");
        let path = std::env::temp_dir().join(format!(
            "gwkit-tui-{}-{}.json",
            std::process::id(),
            NEXT_ID.fetch_add(1, Ordering::SeqCst)
        ));
        Self::new(store, session, ActionRunner::new(true), path)
    }
}

pub(crate) type SessionManager = AppState;

#[cfg(test)]
#[path = "../../test/tui/state/app_state.rs"]
mod tests;
