// ABOUTME: Trace - a named span wrapping one unit of work such as an agent run.
// ABOUTME: Reports completion or failure explicitly when the work ends.

use std::fmt::Display;
use std::future::Future;
use std::time::Instant;

use tracing::{Instrument, Span, error, info, info_span};
use uuid::Uuid;

/// A named, uniquely identified span.
pub struct Trace {
    name: String,
    trace_id: String,
    span: Span,
}

impl Trace {
    /// Open a trace called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let trace_id = Uuid::new_v4().to_string();
        let span = info_span!("trace", name = %name, trace_id = %trace_id);
        Self {
            name,
            trace_id,
            span,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Run `work` inside the trace and log how it ended.
    ///
    /// The result is returned unchanged; failures are logged at error level
    /// before being handed back to the caller.
    pub async fn run<F, T, E>(self, work: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        let started = Instant::now();
        let result = work.instrument(self.span.clone()).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        self.span.in_scope(|| match &result {
            Ok(_) => info!(elapsed_ms, "Trace completed"),
            Err(e) => error!(elapsed_ms, error = %e, "Trace failed"),
        });

        result
    }
}
