//! Editor controller: the single owner of session state.
//!
//! Views never mutate anything directly. They send intents (`submit`,
//! `navigate`, `export`) and read the projections (`display`, `transcript`,
//! `history`). The controller is the only place the version history grows.

use tracing::{debug, warn};

use crate::error::VellumError;
use crate::export::ExportFile;
use crate::extract::extract_svg;
use crate::gateway::ModelGateway;
use crate::history::VersionHistory;
use crate::sanitize::sanitize_svg;
use crate::transcript::ConversationLog;
use crate::types::{Turn, Version};

/// User-facing message appended when a submission fails.
pub const FAILURE_MESSAGE: &str = "Failed to generate graphic. Please try again.";

fn status_message(version_number: usize) -> String {
    format!(
        "Version {version_number} created. Click the arrows in the top-left to navigate between versions."
    )
}

/// Result of a submission intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input, or a request already in flight. Nothing happened.
    Rejected,
    /// A new version was committed at `index`.
    Committed { index: usize },
    /// The backend failed or replied without an SVG; a failure turn was
    /// appended and no version was created.
    Failed,
}

/// What the display surface should render right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    /// A request is in flight; show a loading indicator.
    Loading,
    /// The sanitized artifact at the cursor, with 1-based position info.
    Artifact {
        svg: String,
        index: usize,
        total: usize,
    },
    /// Nothing generated yet; show the placeholder prompt.
    Empty,
}

enum Phase {
    Idle,
    AwaitingResponse(Pending),
}

/// Everything needed to commit a version once the reply arrives.
struct Pending {
    context: Vec<Turn>,
    description: String,
}

pub struct EditorController {
    gateway: Box<dyn ModelGateway>,
    log: ConversationLog,
    history: VersionHistory,
    phase: Phase,
}

impl EditorController {
    pub fn new(gateway: Box<dyn ModelGateway>) -> Self {
        Self {
            gateway,
            log: ConversationLog::new(),
            history: VersionHistory::new(),
            phase: Phase::Idle,
        }
    }

    /// Submit a request end to end: validate, call the gateway, extract,
    /// commit. All failures are absorbed into the conversation log; the
    /// controller is always `Idle` again when this returns.
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        let Some(context) = self.begin(text) else {
            return SubmitOutcome::Rejected;
        };
        let reply = self.gateway.send(&context).await;
        self.resolve(reply)
    }

    /// First half of a submission: validation, busy guard, user turn,
    /// outbound context. Returns the context to send, or `None` when the
    /// submission is rejected (no turn appended, no call to make).
    ///
    /// Event-driven hosts that own the gateway call themselves pair this
    /// with [`resolve`](Self::resolve); [`submit`](Self::submit) does both.
    pub fn begin(&mut self, text: &str) -> Option<Vec<Turn>> {
        if matches!(self.phase, Phase::AwaitingResponse(_)) {
            debug!("submission ignored: request already in flight");
            return None;
        }
        if text.trim().is_empty() {
            debug!("submission ignored: empty input");
            return None;
        }

        let user_turn = Turn::user(text);
        self.log.push(user_turn.clone());

        // Context is capped to one prior artifact turn plus the new request.
        // The artifact comes from the *selected* version, so refining after
        // navigating back continues from the version on screen.
        let context = match self.history.current() {
            Some(version) => vec![Turn::assistant(version.artifact.clone()), user_turn],
            None => vec![user_turn],
        };

        self.phase = Phase::AwaitingResponse(Pending {
            context: context.clone(),
            description: text.to_string(),
        });
        Some(context)
    }

    /// Second half of a submission: runs extraction on a successful reply,
    /// commits the version or records the failure, and returns to `Idle`.
    pub fn resolve(&mut self, reply: Result<String, VellumError>) -> SubmitOutcome {
        let pending = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::AwaitingResponse(pending) => pending,
            Phase::Idle => {
                warn!("resolve called with no request in flight");
                return SubmitOutcome::Rejected;
            }
        };

        let reply = match reply {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "gateway call failed");
                self.log.push(Turn::assistant(FAILURE_MESSAGE));
                return SubmitOutcome::Failed;
            }
        };

        match extract_svg(&reply) {
            Some(svg) => {
                let version = Version::new(svg, pending.description, pending.context);
                let index = self.history.commit(version);
                self.log.push(Turn::assistant(status_message(index + 1)));
                debug!(index, "version committed");
                SubmitOutcome::Committed { index }
            }
            None => {
                warn!(reply_len = reply.len(), "reply carried no SVG document");
                self.log.push(Turn::assistant(FAILURE_MESSAGE));
                SubmitOutcome::Failed
            }
        }
    }

    /// Move the cursor to `index`; rejected when out of range.
    pub fn navigate(&mut self, index: usize) -> bool {
        self.history.select(index)
    }

    /// Step to the previous version; no-op at the oldest.
    pub fn back(&mut self) {
        self.history.back();
    }

    /// Step to the next version; no-op at the newest.
    pub fn forward(&mut self) {
        self.history.forward();
    }

    /// Export the artifact at the cursor; `None` when nothing is selected.
    pub fn export(&self) -> Option<ExportFile> {
        let index = self.history.current_index()?;
        let version = self.history.current()?;
        Some(ExportFile::for_version(index, &version.artifact))
    }

    // Read-only projections.

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::AwaitingResponse(_))
    }

    pub fn transcript(&self) -> &[Turn] {
        self.log.turns()
    }

    pub fn history(&self) -> &VersionHistory {
        &self.history
    }

    /// The raw artifact at the cursor (verbatim as generated).
    pub fn current_artifact(&self) -> Option<&str> {
        self.history.current().map(|v| v.artifact.as_str())
    }

    /// What the display surface should render: loading while a request is
    /// in flight, otherwise the sanitized artifact at the cursor, otherwise
    /// the placeholder.
    pub fn display(&self) -> DisplayState {
        if self.is_busy() {
            return DisplayState::Loading;
        }
        match (self.history.current_index(), self.history.current()) {
            (Some(index), Some(version)) => DisplayState::Artifact {
                svg: sanitize_svg(&version.artifact),
                index,
                total: self.history.len(),
            },
            _ => DisplayState::Empty,
        }
    }
}
