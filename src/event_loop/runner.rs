//! Event Loop Runner
//!
//! The single writer: every cache operation passes through one task that
//! drains a bounded FIFO queue and resolves each event before taking the next.

use tokio::sync::mpsc::{
    self,
    error::{SendError, TrySendError},
};
use tracing::{debug, info, warn};

use crate::cache::Cache;
use crate::error::{CacheError, Result};
use crate::event_loop::{Event, EventKind, EventResult};

/// The quit channel holds a single pending stop signal.
const QUIT_CHANNEL_CAPACITY: usize = 1;

/// Creates a loop around `cache` whose queue holds `queue_capacity` pending events.
///
/// The returned handle is how producers reach the loop; the loop itself does
/// nothing until `EventLoop::run` is awaited.
///
/// # Panics
/// If `queue_capacity` is 0.
pub fn channel<C: Cache>(
    cache: C,
    queue_capacity: usize,
) -> (LoopHandle<C::Key, C::Value>, EventLoop<C>) {
    let (events_tx, events_rx) = mpsc::channel(queue_capacity);
    let (quit_tx, quit_rx) = mpsc::channel(QUIT_CHANNEL_CAPACITY);

    let handle = LoopHandle {
        events: events_tx,
        quit: quit_tx,
    };
    let event_loop = EventLoop {
        cache,
        events: events_rx,
        quit: quit_rx,
    };

    (handle, event_loop)
}

// == Loop Handle ==
/// Producer side of the loop. Cheap to clone; one per concurrent caller is fine.
#[derive(Debug)]
pub struct LoopHandle<K, V> {
    events: mpsc::Sender<Event<K, V>>,
    quit: mpsc::Sender<()>,
}

impl<K, V> Clone for LoopHandle<K, V> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
            quit: self.quit.clone(),
        }
    }
}

impl<K, V> LoopHandle<K, V> {
    /// Enqueues an event, waiting while the queue is full.
    ///
    /// If the loop has stopped the event is resolved with
    /// `CacheError::LoopStopped` and the same error is returned.
    pub async fn send(&self, event: Event<K, V>) -> Result<()> {
        if let Err(SendError(event)) = self.events.send(event).await {
            event.fail(CacheError::LoopStopped);
            return Err(CacheError::LoopStopped);
        }
        Ok(())
    }

    /// Asks the loop to stop. Returns immediately.
    ///
    /// The event being processed, if any, completes; events still queued
    /// when the loop sees the signal are failed with `CacheError::LoopStopped`.
    pub fn stop(&self) {
        match self.quit.try_send(()) {
            Ok(()) => info!("Event loop stop requested"),
            Err(TrySendError::Full(())) => debug!("Event loop stop already pending"),
            Err(TrySendError::Closed(())) => debug!("Event loop already stopped"),
        }
    }

    /// Returns true once the loop no longer accepts events.
    pub fn is_stopped(&self) -> bool {
        self.events.is_closed()
    }

    /// Maximum number of events the queue holds.
    pub fn queue_capacity(&self) -> usize {
        self.events.max_capacity()
    }

    // == Request Helpers ==
    /// Sends a get and waits for its result.
    pub async fn get(&self, key: K) -> Result<EventResult<V>> {
        let (event, completion) = Event::get(key);
        self.send(event).await?;
        completion.wait().await
    }

    /// Sends a set and waits for its result.
    pub async fn set(&self, key: K, value: V) -> Result<EventResult<V>> {
        let (event, completion) = Event::set(key, value);
        self.send(event).await?;
        completion.wait().await
    }

    /// Sends a delete and waits for its result.
    pub async fn delete(&self, key: K) -> Result<EventResult<V>> {
        let (event, completion) = Event::delete(key);
        self.send(event).await?;
        completion.wait().await
    }
}

// == Event Loop ==
/// What one turn of the loop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Processed,
    Stop,
}

/// Consumer side of the loop; owns the cache.
#[derive(Debug)]
pub struct EventLoop<C: Cache> {
    cache: C,
    events: mpsc::Receiver<Event<C::Key, C::Value>>,
    quit: mpsc::Receiver<()>,
}

impl<C: Cache> EventLoop<C> {
    /// Processes events until stopped, then hands the cache back.
    ///
    /// The loop stops on `LoopHandle::stop`, or once every handle has been
    /// dropped and the queue is empty.
    pub async fn run(mut self) -> C {
        info!("Event loop running");

        while self.step().await == Step::Processed {}

        self.shutdown();
        self.cache
    }

    /// Returns the cache this loop drives.
    #[cfg(test)]
    pub(crate) fn cache(&self) -> &C {
        &self.cache
    }

    /// Waits on the queue and the quit channel, whichever is ready first.
    async fn step(&mut self) -> Step {
        tokio::select! {
            event = self.events.recv() => match event {
                Some(event) => {
                    self.handle_event(event);
                    Step::Processed
                }
                None => {
                    debug!("All loop handles dropped");
                    Step::Stop
                }
            },
            Some(()) = self.quit.recv() => {
                info!("Event loop received stop signal");
                Step::Stop
            }
        }
    }

    /// Runs one event against the cache and resolves it.
    fn handle_event(&mut self, event: Event<C::Key, C::Value>) {
        let (kind, key, responder) = event.into_parts();
        let operation = kind.name();

        let outcome = match kind {
            EventKind::Get => Ok(EventResult::found(self.cache.get(&key))),
            EventKind::Set(value) => self.cache.set(key, value).map(|()| EventResult::done()),
            EventKind::Delete => self.cache.delete(&key).map(|()| EventResult::done()),
        };

        match &outcome {
            Ok(result) => debug!("Processed {} event (ok={})", operation, result.ok),
            Err(err) => debug!("Processed {} event with error: {}", operation, err),
        }

        responder.complete(outcome);
    }

    /// Closes the queue and fails whatever is still in it.
    fn shutdown(&mut self) {
        self.events.close();
        self.quit.close();

        let mut abandoned = 0;
        while let Ok(event) = self.events.try_recv() {
            event.fail(CacheError::LoopStopped);
            abandoned += 1;
        }

        if abandoned > 0 {
            warn!("Event loop stopped with {} queued events; failed them", abandoned);
        }
        info!("Event loop stopped");
    }
}
