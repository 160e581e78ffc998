//! SSE broadcaster for real-time artist updates
//!
//! The broadcast channel is the connection registry: a connection joins by
//! subscribing and leaves when its receiver is dropped (client close or
//! transport error). Fan-out is best-effort: no acknowledgment, no retry,
//! no delivery guarantee, single-process scope only.

use fanboard_common::events::SseMessage;
use tokio::sync::broadcast;
use tracing::{debug, info};

/// Fan-out channel for artist update notifications
#[derive(Clone)]
pub struct SseBroadcaster {
    tx: broadcast::Sender<SseMessage>,
}

impl SseBroadcaster {
    /// Create a new SSE broadcaster
    ///
    /// `capacity` is the number of undelivered events buffered per receiver;
    /// a receiver that falls further behind drops the oldest events.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        info!("SSE broadcaster initialized with capacity {}", capacity);
        Self { tx }
    }

    /// Broadcast an event to all connected clients, ignoring if none are
    /// connected
    pub fn broadcast_lossy(&self, message: SseMessage) {
        match self.tx.send(message) {
            Ok(count) => debug!("Broadcast event to {} clients", count),
            Err(_) => debug!("Broadcast event dropped (no clients connected)"),
        }
    }

    /// Register a new connection and return its receiver
    pub fn subscribe(&self) -> broadcast::Receiver<SseMessage> {
        self.tx.subscribe()
    }

    /// Get current number of connected clients
    pub fn client_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
