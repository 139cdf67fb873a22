use serde::Serialize;
use tokio::sync::broadcast;

/// Events emitted by the estimation endpoints to SSE subscribers.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum Event {
    /// An estimate was computed.
    EstimateReady {
        net_effective_tib: f64,
        /// Percent of usable raw capacity.
        capacity_utilization: f64,
        overall_reduction: f64,
        warnings: u32,
    },

    /// Validation blocked an estimate; carries the rendered errors.
    EstimateRejected { errors: Vec<String> },

    /// The pipeline itself failed (e.g. empty dataset).
    EstimateFailed { message: String },
}

impl Event {
    /// Returns the SSE event type name for this event variant.
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::EstimateReady { .. } => "estimate_ready",
            Self::EstimateRejected { .. } => "estimate_rejected",
            Self::EstimateFailed { .. } => "estimate_failed",
        }
    }
}

/// The central event broadcast hub.
///
/// Handlers publish here via `publish()`; the SSE endpoint subscribes via
/// `subscribe()` and forwards events to the browser.
#[derive(Debug, Clone)]
pub struct EventHub {
    sender: broadcast::Sender<Event>,
}

impl EventHub {
    /// Create a new EventHub with the given channel capacity.
    ///
    /// Subscribers falling behind by more than `capacity` events receive a
    /// `Lagged` error and miss intermediate events.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// Returns Ok(subscriber_count), or Err when nobody is listening (events
    /// are fire-and-forget).
    pub fn publish(&self, event: Event) -> Result<usize, broadcast::error::SendError<Event>> {
        self.sender.send(event)
    }

    /// Subscribe to the event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }
}
