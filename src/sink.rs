//! Avatar animation sink abstraction.
//!
//! The animation runtime exposes a named numeric input (the mouth-shape
//! control); the engine only ever writes viseme IDs to it. Updates are
//! fire-and-forget: there is no acknowledgment, and a new frame may land
//! before the previous one has had any visible effect.

use crate::viseme::Viseme;
use tokio::sync::mpsc;

/// A named numeric input on an externally running animation runtime.
///
/// Implementations must be cheap and non-blocking; the scheduler calls
/// [`set_viseme`](Self::set_viseme) from its timing context and expects it
/// to return immediately. If the runtime requires a specific thread,
/// the implementation marshals the value there (see [`ChannelSink`]).
pub trait AvatarSink: Send + Sync {
    /// Deliver one viseme update to the animation runtime.
    fn set_viseme(&self, viseme: Viseme);
}

/// Sink adapter that forwards viseme updates over an unbounded channel.
///
/// The animation side drains the receiver on whatever thread owns the
/// renderer, which keeps all deliveries on one consistent execution
/// context regardless of where the scheduler runs.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Viseme>,
}

impl ChannelSink {
    /// Create the sink plus the receiver the animation thread drains.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Viseme>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl AvatarSink for ChannelSink {
    fn set_viseme(&self, viseme: Viseme) {
        // A closed receiver means the animation runtime shut down;
        // dropping the update is the contract, not an error.
        let _ = self.tx.send(viseme);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_channel_sink_forwards_in_order() {
        let (sink, mut rx) = ChannelSink::new();
        sink.set_viseme(Viseme::Open);
        sink.set_viseme(Viseme::Bilabial);
        assert_eq!(rx.try_recv().unwrap(), Viseme::Open);
        assert_eq!(rx.try_recv().unwrap(), Viseme::Bilabial);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_closed_receiver_is_a_no_op() {
        let (sink, rx) = ChannelSink::new();
        drop(rx);
        sink.set_viseme(Viseme::Neutral);
    }
}
