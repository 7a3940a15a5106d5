//! Named, timed observations around a single operation.
//!
//! An [`Observation`] notifies every handler in an [`ObservationRegistry`]
//! when the wrapped operation starts and when it stops. It never changes
//! the operation's result. With an empty registry it does nothing.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How an observed operation finished.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Error => "error",
        }
    }
}

/// Receives start/stop notifications for observations.
pub trait ObservationHandler: Send + Sync {
    fn on_start(&self, _name: &str) {}

    fn on_stop(&self, name: &str, elapsed: Duration, outcome: Outcome);
}

/// Handler that reports each observation as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObservationHandler;

impl ObservationHandler for LoggingObservationHandler {
    fn on_start(&self, name: &str) {
        ::tracing::trace!(observation = name, "observation started");
    }

    fn on_stop(&self, name: &str, elapsed: Duration, outcome: Outcome) {
        ::tracing::info!(
            observation = name,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            outcome = outcome.as_str(),
            "observation stopped"
        );
    }
}

/// Set of handlers shared by all observations created against it.
#[derive(Clone, Default)]
pub struct ObservationRegistry {
    handlers: Vec<Arc<dyn ObservationHandler>>,
}

impl ObservationRegistry {
    /// Registry with no handlers; observations are free.
    pub fn noop() -> Self {
        Self::default()
    }

    /// Registry that logs every observation.
    pub fn logging() -> Self {
        Self::noop().with_handler(Arc::new(LoggingObservationHandler))
    }

    pub fn with_handler(mut self, handler: Arc<dyn ObservationHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn is_noop(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for ObservationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservationRegistry")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// A not-yet-started observation.
pub struct Observation<'r> {
    name: &'static str,
    registry: &'r ObservationRegistry,
}

impl<'r> Observation<'r> {
    pub fn new(name: &'static str, registry: &'r ObservationRegistry) -> Self {
        Self { name, registry }
    }

    /// Time `fut`, always reporting [`Outcome::Success`].
    pub async fn observe<F, T>(self, fut: F) -> T
    where
        F: Future<Output = T>,
    {
        self.run(fut, |_| Outcome::Success).await
    }

    /// Time a fallible `fut`, reporting [`Outcome::Error`] for `Err`.
    pub async fn observe_result<F, T, E>(self, fut: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
    {
        self.run(fut, |r: &Result<T, E>| if r.is_ok() { Outcome::Success } else { Outcome::Error })
            .await
    }

    async fn run<F, T>(self, fut: F, classify: impl FnOnce(&T) -> Outcome) -> T
    where
        F: Future<Output = T>,
    {
        if self.registry.is_noop() {
            return fut.await;
        }

        for h in &self.registry.handlers {
            h.on_start(self.name);
        }
        let started = Instant::now();
        let out = fut.await;
        let elapsed = started.elapsed();
        let outcome = classify(&out);
        for h in &self.registry.handlers {
            h.on_stop(self.name, elapsed, outcome);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        events: Mutex<Vec<String>>,
    }

    impl ObservationHandler for Recording {
        fn on_start(&self, name: &str) {
            self.events.lock().unwrap().push(format!("start:{name}"));
        }

        fn on_stop(&self, name: &str, _elapsed: Duration, outcome: Outcome) {
            self.events
                .lock()
                .unwrap()
                .push(format!("stop:{name}:{}", outcome.as_str()));
        }
    }

    #[tokio::test]
    async fn observe_returns_inner_value_and_notifies_handlers() {
        let rec = Arc::new(Recording::default());
        let registry = ObservationRegistry::noop().with_handler(rec.clone());

        let v = Observation::new("by-name", &registry).observe(async { 42 }).await;

        assert_eq!(v, 42);
        assert_eq!(*rec.events.lock().unwrap(), ["start:by-name", "stop:by-name:success"]);
    }

    #[tokio::test]
    async fn observe_result_reports_errors() {
        let rec = Arc::new(Recording::default());
        let registry = ObservationRegistry::noop().with_handler(rec.clone());

        let r: Result<(), &str> = Observation::new("by-name", &registry)
            .observe_result(async { Err("boom") })
            .await;

        assert_eq!(r, Err("boom"));
        assert_eq!(rec.events.lock().unwrap().last().unwrap(), "stop:by-name:error");
    }

    #[tokio::test]
    async fn noop_registry_passes_through() {
        let registry = ObservationRegistry::noop();
        let v = Observation::new("by-name", &registry).observe(async { "ok" }).await;
        assert_eq!(v, "ok");
    }
}
