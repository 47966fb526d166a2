/// Contact submission boundary
use super::{ContactAck, ContactSubmission, Inbox};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Latency of the simulated submission call
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Delivers contact form messages.
///
/// Implementations decide where a message goes. A failed delivery is
/// reported as an error and carries no distinction of cause to the form.
#[async_trait]
pub trait ContactSender: Send + Sync {
    /// Deliver one submission
    async fn send(&self, submission: ContactSubmission) -> Result<ContactAck>;
}

/// Local stand-in for a messaging endpoint.
///
/// Waits a fixed latency, then acknowledges. Never fails.
#[derive(Debug, Clone)]
pub struct SimulatedSender {
    latency: Duration,
    inbox: Option<Arc<Inbox>>,
}

impl SimulatedSender {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            inbox: None,
        }
    }

    /// Keep a copy of every delivered submission in `inbox`
    pub fn with_inbox(mut self, inbox: Arc<Inbox>) -> Self {
        self.inbox = Some(inbox);
        self
    }
}

impl Default for SimulatedSender {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl ContactSender for SimulatedSender {
    async fn send(&self, submission: ContactSubmission) -> Result<ContactAck> {
        tokio::time::sleep(self.latency).await;

        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            subject = %submission.subject,
            "Contact form submitted"
        );

        if let Some(inbox) = &self.inbox {
            inbox.record(submission);
        }

        Ok(ContactAck::delivered())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::SUCCESS_MESSAGE;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_send_waits_latency() {
        let sender = SimulatedSender::default();
        let start = Instant::now();

        let ack = sender
            .send(ContactSubmission::new("Jane", "jane@x.com", "Hi", "Hello"))
            .await
            .unwrap();

        assert!(start.elapsed() >= DEFAULT_LATENCY);
        assert!(ack.success);
        assert_eq!(ack.message, SUCCESS_MESSAGE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_send_records_in_inbox() {
        let inbox = Arc::new(Inbox::new(10));
        let sender = SimulatedSender::new(Duration::from_millis(5)).with_inbox(Arc::clone(&inbox));

        sender
            .send(ContactSubmission::new("Jane", "jane@x.com", "Hi", "Hello"))
            .await
            .unwrap();

        let stored = inbox.list();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].email, "jane@x.com");
        assert!(!stored[0].read);
    }
}
