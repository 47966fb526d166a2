/// Shared application state
use crate::config::ServerConfig;
use folio_core::{record, ContactSender, Inbox, PortfolioRecord, SimulatedSender};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub record: &'static PortfolioRecord,
    pub sender: Arc<dyn ContactSender>,
    pub inbox: Arc<Inbox>,
}

impl AppState {
    pub fn new(
        record: &'static PortfolioRecord,
        sender: Arc<dyn ContactSender>,
        inbox: Arc<Inbox>,
    ) -> Self {
        Self {
            record,
            sender,
            inbox,
        }
    }

    /// State backed by the static record and the simulated sender
    pub fn from_config(config: &ServerConfig) -> Self {
        let inbox = Arc::new(Inbox::new(config.contact.inbox_capacity));
        let sender = SimulatedSender::new(config.contact.latency()).with_inbox(Arc::clone(&inbox));

        Self::new(record::portfolio(), Arc::new(sender), inbox)
    }
}
