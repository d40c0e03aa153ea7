//! Run notification.
//!
//! Runners never write output themselves. Every executed unit produces events
//! on a [`RunNotifier`], which fans them out to its [`RunListener`]s:
//!
//! - `started`, an optional `failure`, then `finished` for every executed unit
//! - only `ignored` for units that are ignored
//!
//! Listeners may record events ([`RecordingListener`]) or forward them to
//! another thread ([`ChannelListener`]), which is how the harness feeds its
//! formatter.

use std::sync::{Arc, Mutex, PoisonError};

use crate::{description::Description, outcome::Failure};

pub trait RunListener {
    fn test_started(&mut self, description: &Description) {
        let _ = description;
    }

    fn test_finished(&mut self, description: &Description) {
        let _ = description;
    }

    fn test_failure(&mut self, failure: &Failure) {
        let _ = failure;
    }

    fn test_ignored(&mut self, description: &Description, reason: Option<&str>) {
        let _ = (description, reason);
    }
}

#[derive(Default)]
pub struct RunNotifier {
    listeners: Vec<Box<dyn RunListener>>,
}

impl RunNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listener(mut self, listener: impl RunListener + 'static) -> Self {
        self.add_listener(listener);
        self
    }

    pub fn add_listener(&mut self, listener: impl RunListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn fire_test_started(&mut self, description: &Description) {
        for listener in self.listeners.iter_mut() {
            listener.test_started(description);
        }
    }

    pub fn fire_test_finished(&mut self, description: &Description) {
        for listener in self.listeners.iter_mut() {
            listener.test_finished(description);
        }
    }

    pub fn fire_test_failure(&mut self, failure: &Failure) {
        for listener in self.listeners.iter_mut() {
            listener.test_failure(failure);
        }
    }

    pub fn fire_test_ignored(&mut self, description: &Description, reason: Option<&str>) {
        for listener in self.listeners.iter_mut() {
            listener.test_ignored(description, reason);
        }
    }
}

impl std::fmt::Debug for RunNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// An owned copy of a single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    Started(Description),
    Finished(Description),
    Failure(Failure),
    Ignored {
        description: Description,
        reason: Option<String>,
    },
}

impl RunEvent {
    pub fn description(&self) -> &Description {
        match self {
            RunEvent::Started(description)
            | RunEvent::Finished(description)
            | RunEvent::Ignored { description, .. } => description,
            RunEvent::Failure(failure) => &failure.description,
        }
    }
}

/// Records every event into a shared buffer.
///
/// Clones share the buffer, so keep one clone around to read the events
/// after handing the other to a notifier.
#[derive(Debug, Default, Clone)]
pub struct RecordingListener(Arc<Mutex<Vec<RunEvent>>>);

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: RunEvent) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    pub fn events(&self) -> Vec<RunEvent> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn take(&self) -> Vec<RunEvent> {
        std::mem::take(&mut *self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl RunListener for RecordingListener {
    fn test_started(&mut self, description: &Description) {
        self.push(RunEvent::Started(description.clone()));
    }

    fn test_finished(&mut self, description: &Description) {
        self.push(RunEvent::Finished(description.clone()));
    }

    fn test_failure(&mut self, failure: &Failure) {
        self.push(RunEvent::Failure(failure.clone()));
    }

    fn test_ignored(&mut self, description: &Description, reason: Option<&str>) {
        self.push(RunEvent::Ignored {
            description: description.clone(),
            reason: reason.map(str::to_string),
        });
    }
}

/// Forwards every event into a channel.
///
/// Events sent after the receiver is gone are dropped silently, nobody is
/// listening anymore.
#[derive(Debug, Clone)]
pub struct ChannelListener(crossbeam_channel::Sender<RunEvent>);

impl ChannelListener {
    pub fn new(sender: crossbeam_channel::Sender<RunEvent>) -> Self {
        Self(sender)
    }
}

impl RunListener for ChannelListener {
    fn test_started(&mut self, description: &Description) {
        let _ = self.0.send(RunEvent::Started(description.clone()));
    }

    fn test_finished(&mut self, description: &Description) {
        let _ = self.0.send(RunEvent::Finished(description.clone()));
    }

    fn test_failure(&mut self, failure: &Failure) {
        let _ = self.0.send(RunEvent::Failure(failure.clone()));
    }

    fn test_ignored(&mut self, description: &Description, reason: Option<&str>) {
        let _ = self.0.send(RunEvent::Ignored {
            description: description.clone(),
            reason: reason.map(str::to_string),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listener_sees_every_event() {
        let first = RecordingListener::new();
        let second = RecordingListener::new();
        let mut notifier = RunNotifier::new()
            .with_listener(first.clone())
            .with_listener(second.clone());

        let description = Description::test("Class", "method", "method");
        notifier.fire_test_started(&description);
        notifier.fire_test_finished(&description);

        let expected = vec![
            RunEvent::Started(description.clone()),
            RunEvent::Finished(description),
        ];
        assert_eq!(first.events(), expected);
        assert_eq!(second.events(), expected);
    }

    #[test]
    fn channel_listener_forwards_in_order() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut notifier = RunNotifier::new().with_listener(ChannelListener::new(tx));

        let description = Description::test("Class", "method", "method");
        notifier.fire_test_ignored(&description, Some("flaky"));
        drop(notifier);

        let events: Vec<_> = rx.iter().collect();
        assert_eq!(
            events,
            [RunEvent::Ignored {
                description,
                reason: Some("flaky".into())
            }]
        );
    }
}
