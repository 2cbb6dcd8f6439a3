//! Fixed-interval status polling.
//!
//! Mirrors the browser behavior this client replaces: one status check every
//! two seconds, stopping only when the engine reports a terminal status.

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::models::{GenerationStatus, StatusPayload};
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

/// Interval between status checks.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PollState {
    #[default]
    NotStarted,
    Polling,
    Completed,
    Failed,
}

#[derive(Debug, Clone)]
pub struct PollOptions {
    pub interval: Duration,
    /// Optional bound on the number of status checks. `None` polls until the
    /// engine reports a terminal status, however long that takes.
    pub max_attempts: Option<u32>,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: POLL_INTERVAL,
            max_attempts: None,
        }
    }
}

pub struct StatusPoller<'a> {
    client: &'a ApiClient,
    options: PollOptions,
    state: PollState,
}

impl<'a> StatusPoller<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self::with_options(client, PollOptions::default())
    }

    pub fn with_options(client: &'a ApiClient, options: PollOptions) -> Self {
        Self {
            client,
            options,
            state: PollState::NotStarted,
        }
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    /// Poll until the session reaches a terminal status.
    pub async fn run(&mut self, session_id: &str) -> Result<StatusPayload, ClientError> {
        self.run_with(session_id, |_| {}).await
    }

    /// Poll until terminal, invoking `on_update` after every successful check.
    ///
    /// Transient transport or decode failures are logged and polling
    /// continues; only a terminal status, or the optional attempt cap, stops
    /// the loop.
    pub async fn run_with<F>(
        &mut self,
        session_id: &str,
        mut on_update: F,
    ) -> Result<StatusPayload, ClientError>
    where
        F: FnMut(&StatusPayload),
    {
        self.state = PollState::Polling;

        let mut ticker = interval(self.options.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick fires immediately; consume it so the initial check
        // happens one full interval after submission.
        ticker.tick().await;

        let mut attempts: u32 = 0;
        loop {
            ticker.tick().await;
            attempts += 1;

            match self.client.status(session_id).await {
                Ok(payload) => {
                    on_update(&payload);
                    match payload.status {
                        GenerationStatus::Completed => {
                            self.state = PollState::Completed;
                            return Ok(payload);
                        }
                        GenerationStatus::Failed => {
                            self.state = PollState::Failed;
                            return Ok(payload);
                        }
                        _ => {}
                    }
                }
                Err(err) => {
                    tracing::warn!(session_id, error = %err, "Status check failed; continuing to poll");
                }
            }

            if let Some(max) = self.options.max_attempts {
                if attempts >= max {
                    return Err(ClientError::PollTimeout(max));
                }
            }
        }
    }
}
