use crate::notifier::{RecordingListener, RunEvent, RunNotifier};

/// A notifier that records into the returned listener.
pub fn recording_notifier() -> (RunNotifier, RecordingListener) {
    let listener = RecordingListener::new();
    let notifier = RunNotifier::new().with_listener(listener.clone());
    (notifier, listener)
}

/// Render events as short lines like `started testWithParams 1`.
pub fn event_names(events: &[RunEvent]) -> Vec<String> {
    events
        .iter()
        .map(|event| {
            let name = event.description().display_name();
            match event {
                RunEvent::Started(_) => format!("started {name}"),
                RunEvent::Finished(_) => format!("finished {name}"),
                RunEvent::Failure(failure) => format!("failure {name}: {}", failure.message()),
                RunEvent::Ignored { .. } => format!("ignored {name}"),
            }
        })
        .collect()
}
