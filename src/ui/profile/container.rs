//! Stateful container: owns the load state and the one-shot fetch.

use std::sync::Arc;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use crate::lifetime::{ComponentLifetime, TeardownToken};
use crate::source::UserSource;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::mvi::Reducer;
use crate::ui::theme::{MUTED_TEXT, STATUS_ERROR};

use super::card::ProfileCard;
use super::intent::ProfileIntent;
use super::reducer::ProfileReducer;
use super::state::ProfileState;

/// Text shown until the fetch resolves.
pub const PLACEHOLDER: &str = "Loading…";

/// Prefix of the error line shown in the Failed state.
pub const FAILURE_PREFIX: &str = "Failed to load profile: ";

/// Reason recorded when the fetch task dies without reporting back.
pub const TASK_LOST: &str = "fetch task ended without a result";

/// Bridges a [`UserSource`] to the [`ProfileCard`] presenter.
///
/// The fetch result never touches `state` directly: the spawned task
/// queues a [`ProfileIntent`], and the owner applies it via
/// [`apply_pending`](Self::apply_pending) or
/// [`wait_for_update`](Self::wait_for_update) on its own thread.
pub struct ProfileContainer {
    state: ProfileState,
    source: Arc<dyn UserSource>,
    /// Moved into the fetch task on activation, so the channel closes
    /// once that task is gone.
    intent_tx: Option<mpsc::Sender<ProfileIntent>>,
    intent_rx: mpsc::Receiver<ProfileIntent>,
    lifetime: ComponentLifetime,
    activated: bool,
}

impl ProfileContainer {
    pub fn new(source: Arc<dyn UserSource>) -> Self {
        // One fetch, one result.
        let (intent_tx, intent_rx) = mpsc::channel(1);
        Self {
            state: ProfileState::default(),
            source,
            intent_tx: Some(intent_tx),
            intent_rx,
            lifetime: ComponentLifetime::new(TeardownToken::new()),
            activated: false,
        }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn is_torn_down(&self) -> bool {
        self.lifetime.is_torn_down()
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Start the fetch. Only the first call per lifetime does anything.
    ///
    /// Must be called from within a tokio runtime. Returns whether a fetch
    /// was started.
    pub fn activate(&mut self) -> bool {
        if self.activated || self.is_torn_down() {
            return false;
        }
        let Some(tx) = self.intent_tx.take() else {
            return false;
        };
        self.activated = true;

        let source = Arc::clone(&self.source);
        let token = self.lifetime.token();
        let locator = source.describe();
        tracing::info!("fetching current user from {}", locator);

        let task = tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = token.cancelled() => None,
                result = source.fetch_current_user() => Some(result),
            };

            let Some(result) = outcome else {
                tracing::debug!("fetch from {} cancelled by teardown", locator);
                return;
            };

            let intent = match result {
                Ok(record) => {
                    tracing::info!("loaded profile for {}", record.name);
                    ProfileIntent::Loaded { record }
                }
                Err(err) => {
                    tracing::warn!(transport = err.is_transport(), "profile fetch failed: {}", err);
                    ProfileIntent::Failed {
                        reason: err.to_string(),
                    }
                }
            };

            if token.is_cancelled() {
                tracing::debug!("discarding late result from {}", locator);
                return;
            }
            let _ = tx.send(intent).await;
        });

        self.lifetime.attach(task);
        true
    }

    /// Apply every queued intent without blocking. Returns whether the
    /// state changed, i.e. whether a redraw is needed.
    pub fn apply_pending(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.intent_rx.try_recv() {
                Ok(intent) => changed |= self.dispatch(intent),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    changed |= self.on_task_lost();
                    break;
                }
            }
        }
        changed
    }

    /// Wait for the next queued intent and apply it.
    ///
    /// Returns `false` without waiting if the container was never
    /// activated, has been torn down, or already reached a final state.
    /// A fetch task that dies without reporting moves the state to Failed.
    pub async fn wait_for_update(&mut self) -> bool {
        if !self.activated || self.is_torn_down() || self.state.is_terminal() {
            return false;
        }
        match self.intent_rx.recv().await {
            Some(intent) => self.dispatch(intent),
            None => self.on_task_lost(),
        }
    }

    /// Rows needed to show the current state at `width` columns.
    pub fn preferred_height(&self, width: u16) -> u16 {
        match &self.state {
            ProfileState::Loading => 1,
            ProfileState::Loaded { record } => ProfileCard::new(record).size_hint().1,
            ProfileState::Failed { reason } => {
                let text = format!("{}{}", FAILURE_PREFIX, reason);
                u16::try_from(wrapped_rows(&text, usize::from(width))).unwrap_or(u16::MAX)
            }
        }
    }

    /// End this component's lifetime. In-flight work is cancelled and any
    /// result it would have produced is dropped.
    pub fn teardown(&mut self) {
        self.lifetime.teardown();
        self.intent_rx.close();
    }

    /// The sender was dropped without a result: the task panicked or was
    /// aborted outside of teardown.
    fn on_task_lost(&mut self) -> bool {
        if !self.activated || !self.state.is_loading() {
            return false;
        }
        tracing::warn!("{}", TASK_LOST);
        self.dispatch(ProfileIntent::Failed {
            reason: TASK_LOST.to_string(),
        })
    }

    fn dispatch(&mut self, intent: ProfileIntent) -> bool {
        if self.is_torn_down() {
            return false;
        }
        let next = ProfileReducer::reduce(self.state.clone(), intent);
        let changed = next != self.state;
        self.state = next;
        changed
    }
}

impl Widget for &ProfileContainer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.state {
            ProfileState::Loading => {
                let placeholder = Paragraph::new(Line::from(Span::styled(
                    PLACEHOLDER,
                    Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
                )))
                .alignment(Alignment::Center);
                let row = centered_rect_by_size(area.width, 1, area);
                placeholder.render(row, buf);
            }
            ProfileState::Loaded { record } => {
                let card = ProfileCard::new(record);
                let (width, height) = card.size_hint();
                (&card).render(centered_rect_by_size(width, height, area), buf);
            }
            ProfileState::Failed { reason } => {
                let message = Paragraph::new(Line::from(vec![
                    Span::styled(
                        FAILURE_PREFIX,
                        Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(reason.as_str(), Style::default().fg(MUTED_TEXT)),
                ]))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
                let height = self.preferred_height(area.width);
                message.render(centered_rect_by_size(area.width, height, area), buf);
            }
        }
    }
}

/// Greedy word-wrap row count; words wider than a row start a fresh row
/// and are split across as many rows as they need.
fn wrapped_rows(text: &str, width: usize) -> usize {
    let width = width.max(1);
    let mut rows = 0;
    let mut current = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if len > width {
            if current > 0 {
                rows += 1;
            }
            rows += len / width;
            current = len % width;
        } else if current == 0 {
            current = len;
        } else if current + 1 + len <= width {
            current += 1 + len;
        } else {
            rows += 1;
            current = len;
        }
    }
    if current > 0 {
        rows += 1;
    }
    rows.max(1)
}
