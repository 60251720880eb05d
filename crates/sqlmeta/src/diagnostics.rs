use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Callback receiving a human-readable line for every resolution.
pub type LogReceived = Arc<dyn Fn(&str) + Send + Sync>;

const TARGET: &str = "sqlmeta::resolve";

/// Reports resolution outcomes to the `log` facade and the optional callback.
#[derive(Clone, Default)]
pub(crate) struct Diagnostics {
    sink: Option<LogReceived>,
}

impl Diagnostics {
    pub(crate) fn new(sink: Option<LogReceived>) -> Self {
        Self { sink }
    }

    pub(crate) fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// The message is only built when someone listens. A panicking callback is
    /// contained here and never reaches the resolving caller.
    pub(crate) fn emit(&self, message: impl FnOnce() -> String) {
        let trace = log::log_enabled!(target: TARGET, log::Level::Trace);
        if !trace && self.sink.is_none() {
            return;
        }

        let message = message();
        log::trace!(target: TARGET, "{message}");

        if let Some(sink) = &self.sink {
            if panic::catch_unwind(AssertUnwindSafe(|| sink(&message))).is_err() {
                log::warn!(target: TARGET, "log callback panicked; dropped message: {message}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn forwards_to_sink() {
        let received = Arc::new(Mutex::new(vec![]));
        let sink = received.clone();
        let diagnostics = Diagnostics::new(Some(Arc::new(move |msg: &str| {
            sink.lock().unwrap().push(msg.to_string())
        })));

        diagnostics.emit(|| "Resolved table name 'a a' for 'A'".to_string());
        assert_eq!(
            *received.lock().unwrap(),
            ["Resolved table name 'a a' for 'A'"]
        );
    }

    #[test]
    fn panicking_sink_is_contained() {
        let diagnostics = Diagnostics::new(Some(Arc::new(|_: &str| panic!("sink failure"))));
        diagnostics.emit(|| "message".to_string());
    }

    #[test]
    fn no_listener_skips_formatting() {
        let diagnostics = Diagnostics::default();
        assert!(!diagnostics.has_sink());
        if !log::log_enabled!(target: TARGET, log::Level::Trace) {
            diagnostics.emit(|| unreachable!("message built without a listener"));
        }
    }
}
