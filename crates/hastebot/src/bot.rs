//! Event handling: dispatch then send decorated replies.

use crate::dispatcher::Dispatcher;
use crate::reply::decorate;
use signal_client::{IncomingEvent, SignalClient};
use tracing::{error, info};

pub struct Bot {
    dispatcher: Dispatcher,
    signal: SignalClient,
    debug: bool,
}

impl Bot {
    pub fn new(dispatcher: Dispatcher, signal: SignalClient, debug: bool) -> Self {
        Self {
            dispatcher,
            signal,
            debug,
        }
    }

    /// Handle one event to completion. Returns the number of replies sent.
    pub async fn handle(&self, event: &IncomingEvent) -> usize {
        if self.debug {
            info!("self_account_id: {}", event.self_account_id);
            info!("conversation_id: {}", event.conversation_id);
            info!("sender_id: {}", event.sender_id);
            info!("segments: {:?}", event.segments);
        }

        let mut sent = 0;
        for reply in self.dispatcher.dispatch(event).await {
            match self
                .signal
                .send_rich(&reply.conversation_id, &decorate(&reply.payload))
                .await
            {
                Ok(()) => sent += 1,
                Err(e) => error!("Failed to send reply: {}", e),
            }
        }
        sent
    }
}
