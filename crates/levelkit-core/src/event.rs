//! Event system for probe-session observers
//!
//! Provides:
//! - Probe event types mirroring the execution engine's event contract
//! - Event dispatcher for publishing events to subscribers
//!
//! The probe session drives its own transitions through direct method calls;
//! this dispatcher exists for observers (consoles, UIs) that want to follow a
//! run without being wired into the integration layer. Note that the session
//! republishes `End` after every absorbed sample, so subscribers must not
//! read `End` as "grid complete".

use crate::data::ProbedSample;
use tokio::sync::broadcast;

/// Probe event types
#[derive(Debug, Clone)]
pub enum ProbeEvent {
    /// A probe move is about to start
    Start,
    /// A probe move completed and reported a contact position
    Update(ProbedSample),
    /// A sample was absorbed (emitted once per update, not once per grid)
    End,
}

impl std::fmt::Display for ProbeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeEvent::Start => write!(f, "Probe start"),
            ProbeEvent::Update(sample) => write!(f, "Probe update: {}", sample),
            ProbeEvent::End => write!(f, "Probe end"),
        }
    }
}

/// Event dispatcher for publishing probe events to subscribers
#[derive(Clone)]
pub struct EventDispatcher {
    /// Broadcast sender channel for probe events.
    tx: broadcast::Sender<ProbeEvent>,
}

impl EventDispatcher {
    /// Create a new event dispatcher
    ///
    /// # Arguments
    /// * `buffer_size` - Size of the broadcast buffer (default 100)
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size);
        Self { tx }
    }

    /// Create a new event dispatcher with default buffer size
    pub fn default_with_buffer() -> Self {
        Self::new(100)
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<ProbeEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to all subscribers
    ///
    /// Publishing with no subscribers is not an error; the event is dropped.
    pub fn publish(&self, event: ProbeEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::default_with_buffer()
    }
}
