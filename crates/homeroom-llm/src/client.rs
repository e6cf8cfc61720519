use std::time::Duration;

use homeroom_core::{CompletionReply, CompletionRequest, Message};

use crate::error::Result;
use crate::transport::CompletionTransport;

/// Total attempts per request: one initial try plus two retries.
pub const MAX_ATTEMPTS: u32 = 3;

/// Linear backoff: wait `2 * completed_attempts` seconds before the next
/// try, i.e. 2s before attempt 2 and 4s before attempt 3.
pub fn backoff_delay(completed_attempts: u32) -> Duration {
    Duration::from_secs(2 * u64::from(completed_attempts))
}

/// Completion client with a bounded retry loop around a single-attempt
/// transport.
///
/// Retries only transient failures (server overload, timeout, connection
/// errors); auth and parse failures surface immediately. The caller's
/// transcript is never touched here — a reply is appended only after this
/// returns `Ok`.
pub struct ResilientClient<T: CompletionTransport> {
    transport: T,
}

impl<T: CompletionTransport> ResilientClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Request the assistant's next utterance for the given instruction and
    /// conversation turns.
    pub async fn complete(
        &self,
        system_instruction: impl Into<String>,
        turns: Vec<Message>,
    ) -> Result<CompletionReply> {
        let request = CompletionRequest::new(self.transport.model())
            .with_system_instruction(system_instruction)
            .with_turns(turns);

        let mut attempt = 1;
        loop {
            match self.transport.send(&request).await {
                Ok(reply) => {
                    if attempt > 1 {
                        log::info!("completion succeeded on attempt {attempt}");
                    }
                    return Ok(reply);
                }
                Err(err) if err.is_retryable() && attempt < MAX_ATTEMPTS => {
                    let delay = backoff_delay(attempt);
                    log::warn!(
                        "completion attempt {attempt}/{MAX_ATTEMPTS} failed ({err}), retrying in {}s",
                        delay.as_secs()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    log::error!("completion failed on attempt {attempt}: {err}");
                    return Err(err);
                }
            }
        }
    }
}
