//! Scoped lifetime for work started by a UI component.
//!
//! A component that spawns background work holds a [`ComponentLifetime`].
//! Tearing it down flips the shared [`TeardownToken`] and aborts the task,
//! so a continuation that resolves afterwards sees the token and drops its
//! result instead of reporting back.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// Cloneable cancellation flag shared between a component and its tasks.
#[derive(Clone, Default)]
pub struct TeardownToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl TeardownToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Returns `true` only for the call that performed the cancellation.
    pub fn cancel(&self) -> bool {
        if self.cancelled.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.notify.notify_waiters();
        true
    }

    pub async fn cancelled(&self) {
        // Register with Notify before reading the flag; a cancel() landing
        // between the check and the await would otherwise be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

/// Owns the task spawned on behalf of a component.
pub struct ComponentLifetime {
    token: TeardownToken,
    task: Option<JoinHandle<()>>,
}

impl ComponentLifetime {
    pub fn new(token: TeardownToken) -> Self {
        Self { token, task: None }
    }

    pub fn token(&self) -> TeardownToken {
        self.token.clone()
    }

    pub fn attach(&mut self, task: JoinHandle<()>) {
        if let Some(previous) = self.task.replace(task) {
            previous.abort();
        }
    }

    /// Whether the attached task is still running.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn is_torn_down(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancel the token and abort the task. Idempotent.
    pub fn teardown(&mut self) {
        if self.token.cancel() {
            tracing::debug!("component torn down");
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for ComponentLifetime {
    fn drop(&mut self) {
        self.teardown();
    }
}
