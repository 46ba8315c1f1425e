//! Message receiver with polling.

use crate::client::SignalClient;
use crate::types::*;
use std::time::Duration;
use tokio::time::sleep;
use tokio_stream::Stream;
use tracing::{debug, error, info};

/// Polls the Signal API and yields chat events.
///
/// Receive failures are retried forever after a fixed delay.
pub struct MessageReceiver {
    client: SignalClient,
    poll_interval: Duration,
    reconnect_delay: Duration,
}

impl MessageReceiver {
    pub fn new(client: SignalClient, poll_interval: Duration, reconnect_delay: Duration) -> Self {
        Self {
            client,
            poll_interval,
            reconnect_delay,
        }
    }

    /// Start receiving events as an async stream.
    pub fn stream(self) -> impl Stream<Item = IncomingEvent> {
        async_stream::stream! {
            let mut failing = false;
            loop {
                match self.client.receive().await {
                    Ok(messages) => {
                        if failing {
                            info!("Signal API reachable again");
                            failing = false;
                        }
                        for msg in messages {
                            if let Some(event) = IncomingEvent::from_incoming(&msg) {
                                debug!(
                                    "Event in {} from {} ({} segments)",
                                    event.conversation_id,
                                    event.sender_id,
                                    event.segments.len()
                                );
                                yield event;
                            }
                        }
                    }
                    Err(e) => {
                        error!(
                            "Receive error: {} - retrying in {:?}",
                            e, self.reconnect_delay
                        );
                        failing = true;
                        sleep(self.reconnect_delay).await;
                        continue;
                    }
                }

                sleep(self.poll_interval).await;
            }
        }
    }
}
