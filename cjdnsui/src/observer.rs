//! Topic based notification of observers.
//!
//! An [`Observable`] holds an append-only list of callbacks, each registered
//! against a topic. Notifying an event invokes, in registration order, every
//! callback registered against that event's topic.
//!
//! Payloads are enums with one variant per topic, the [`Event`] trait maps a
//! payload to its topic. Topics are scoped to the component defining them:
//! only subscribe to the `Observable` owned by the component whose topics you use.
//!
//! # Example
//!
//! ```
//! use cjdnsui::observer::{Event, Observable};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Topic { Saved }
//!
//! #[derive(Debug)]
//! enum Message { Saved(u32) }
//!
//! impl Event for Message {
//!     type Topic = Topic;
//!     fn topic(&self) -> Topic {
//!         match self { Self::Saved(_) => Topic::Saved }
//!     }
//! }
//!
//! let mut observable = Observable::<Message>::new();
//! observable.add_observer(Topic::Saved, |message: &Message| {
//!     println!("{message:?}");
//!     Ok(())
//! });
//! assert_eq!(observable.notify_observers(&Message::Saved(1)).unwrap(), 1);
//! ```

use log::{debug, trace};

/// The error a callback may report.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

type Callback<E> = Box<dyn FnMut(&E) -> Result<(), BoxError>>;

/// A payload which can be passed to observers.
pub trait Event {
    /// The tag partitioning observers of this event.
    type Topic: Copy + Eq + std::fmt::Debug;

    /// The topic this payload is delivered under.
    fn topic(&self) -> Self::Topic;
}

/// A callback reported failure whilst being notified.
#[derive(Debug, thiserror::Error)]
#[error("Observer {index} of topic {topic:?} failed")]
pub struct NotifyError<T> where T: std::fmt::Debug {
    /// The topic being notified.
    pub topic: T,
    /// Position of the failing observer within the registration list.
    pub index: usize,
    /// What the observer reported.
    #[source]
    pub source: BoxError
}

struct Observer<E> where E: Event {
    topic: E::Topic,
    callback: Callback<E>
}

/// Registry of callbacks partitioned by topic.
///
/// There is no way to remove a callback once added.
pub struct Observable<E> where E: Event {
    observers: Vec<Observer<E>>
}

impl<E> Observable<E> where E: Event {
    /// Create an `Observable` with no observers.
    #[must_use]
    pub const fn new() -> Self {
        Self { observers: Vec::new() }
    }

    /// Register callback to be run whenever an event with topic is notified.
    ///
    /// The same callback may be added more than once, it will then be called more than once.
    pub fn add_observer(&mut self, topic: E::Topic, callback: impl FnMut(&E) -> Result<(), BoxError> + 'static) {
        debug!("Adding observer {} for topic {topic:?}", self.observers.len());
        self.observers.push(Observer { topic, callback: Box::new(callback) });
    }

    /// Pass event to every observer of its topic, stopping at the first failure.
    ///
    /// Observers registered after the failing one are not called.
    /// Returns the number of observers called.
    ///
    /// # Errors
    ///
    /// [`NotifyError`] from the first observer to fail.
    pub fn notify_observers(&mut self, event: &E) -> Result<usize, NotifyError<E::Topic>> {
        let topic = event.topic();
        let mut called = 0;
        for (index, observer) in self.observers.iter_mut().enumerate().filter(|(_, o)| o.topic == topic) {
            trace!("Notifying observer {index} of topic {topic:?}");
            called += 1;
            (observer.callback)(event).map_err(|source| NotifyError { topic, index, source })?;
        }
        Ok(called)
    }

    /// Pass event to every observer of its topic, regardless of failures.
    ///
    /// Returns the failures in registration order, empty if every observer succeeded.
    pub fn notify_all_observers(&mut self, event: &E) -> Vec<NotifyError<E::Topic>> {
        let topic = event.topic();
        self.observers.iter_mut()
            .enumerate()
            .filter(|(_, o)| o.topic == topic)
            .filter_map(|(index, observer)| {
                trace!("Notifying observer {index} of topic {topic:?}");
                (observer.callback)(event).err().map(|source| NotifyError { topic, index, source })
            })
            .collect()
    }

    /// The number of observers across all topics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether there are no observers at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// The number of observers of topic.
    #[must_use]
    pub fn observer_count(&self, topic: E::Topic) -> usize {
        self.observers.iter().filter(|o| o.topic == topic).count()
    }
}

impl<E> Default for Observable<E> where E: Event {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Observable<E> where E: Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
         .field("topics", &self.observers.iter().map(|o| o.topic).collect::<Vec<_>>())
         .finish_non_exhaustive()
    }
}
