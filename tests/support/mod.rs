use paramtest::{
    error::{ConfigError, InitializationError},
    notifier::{RecordingListener, RunEvent, RunNotifier},
};

pub fn recording_notifier() -> (RunNotifier, RecordingListener) {
    let listener = RecordingListener::new();
    (RunNotifier::new().with_listener(listener.clone()), listener)
}

/// Render events as `started <name>`, `failure <name>: <message>` and so on.
pub fn event_lines(events: &[RunEvent]) -> Vec<String> {
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

pub fn first_cause(err: &InitializationError) -> String {
    err.causes()
        .first()
        .map(ConfigError::to_string)
        .unwrap_or_default()
}
