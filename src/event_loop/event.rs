//! Event Module
//!
//! An event is one requested cache operation plus a one-shot completion
//! channel that only the event loop resolves.

use tokio::sync::oneshot;

use crate::error::{CacheError, Result};

// == Event Kind ==
/// The operation an event asks for. `Set` carries the value to store.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind<V> {
    Get,
    Set(V),
    Delete,
}

impl<V> EventKind<V> {
    /// Lowercase operation name, as used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Get => "get",
            EventKind::Set(_) => "set",
            EventKind::Delete => "delete",
        }
    }
}

// == Event Result ==
/// Success payload delivered to the producer.
#[derive(Debug, Clone, PartialEq)]
pub struct EventResult<V> {
    /// For gets, whether the key was found; always true for sets and deletes
    pub ok: bool,
    /// The value found by a get
    pub value: Option<V>,
}

impl<V> EventResult<V> {
    /// Result of a lookup.
    pub fn found(value: Option<V>) -> Self {
        Self {
            ok: value.is_some(),
            value,
        }
    }

    /// Result of a successful set or delete.
    pub fn done() -> Self {
        Self {
            ok: true,
            value: None,
        }
    }
}

/// What the loop writes to a completion channel: success or failure, never both.
pub type Outcome<V> = Result<EventResult<V>>;

// == Event ==
/// One requested operation against the cache.
///
/// Events are built through `Event::get`, `Event::set` and `Event::delete`,
/// each of which also returns the `Completion` the producer waits on.
#[derive(Debug)]
pub struct Event<K, V> {
    kind: EventKind<V>,
    key: K,
    responder: oneshot::Sender<Outcome<V>>,
}

impl<K, V> Event<K, V> {
    /// Creates a lookup event.
    pub fn get(key: K) -> (Self, Completion<V>) {
        Self::new(EventKind::Get, key)
    }

    /// Creates a store event.
    pub fn set(key: K, value: V) -> (Self, Completion<V>) {
        Self::new(EventKind::Set(value), key)
    }

    /// Creates a removal event.
    pub fn delete(key: K) -> (Self, Completion<V>) {
        Self::new(EventKind::Delete, key)
    }

    fn new(kind: EventKind<V>, key: K) -> (Self, Completion<V>) {
        let (responder, receiver) = oneshot::channel();
        let event = Self {
            kind,
            key,
            responder,
        };
        (event, Completion { receiver })
    }

    #[cfg(test)]
    pub(crate) fn kind(&self) -> &EventKind<V> {
        &self.kind
    }

    #[cfg(test)]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    /// Splits the event for dispatch.
    pub(crate) fn into_parts(self) -> (EventKind<V>, K, Responder<V>) {
        (self.kind, self.key, Responder(self.responder))
    }

    /// Resolves the event with an error without dispatching it.
    pub(crate) fn fail(self, err: CacheError) {
        Responder(self.responder).complete(Err(err));
    }
}

// == Responder ==
/// The loop's half of the completion channel. Consumed by `complete`, so an
/// event can only ever be resolved once.
#[derive(Debug)]
pub(crate) struct Responder<V>(oneshot::Sender<Outcome<V>>);

impl<V> Responder<V> {
    pub(crate) fn complete(self, outcome: Outcome<V>) {
        // A producer that stopped waiting has dropped its receiver
        let _ = self.0.send(outcome);
    }
}

// == Completion ==
/// The producer's half of the completion channel.
#[derive(Debug)]
pub struct Completion<V> {
    receiver: oneshot::Receiver<Outcome<V>>,
}

impl<V> Completion<V> {
    /// Waits for the loop to resolve the event.
    ///
    /// An event dropped without being resolved (the loop is gone) yields
    /// `CacheError::LoopStopped`.
    pub async fn wait(self) -> Result<EventResult<V>> {
        match self.receiver.await {
            Ok(outcome) => outcome,
            Err(_) => Err(CacheError::LoopStopped),
        }
    }

    /// Returns the outcome if the event has already been resolved.
    #[cfg(test)]
    pub(crate) fn try_outcome(&mut self) -> Option<Outcome<V>> {
        use oneshot::error::TryRecvError;

        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(CacheError::LoopStopped)),
        }
    }
}
