//! Final output of an invocation.
//!
//! [`emit`] is the only place that decides the output channel and exit code:
//! a success body goes to stdout as JSON with exit code 0; any [`Error`] goes
//! to stderr as a JSON object with exit code [`EXIT_FAILURE`].

use serde_json::{json, Value};
use std::io::{self, Write};

use crate::constants::EXIT_FAILURE;
use crate::error::{Error, Result};

/// Destination for the two output channels.
pub trait Renderer {
    /// Writes a success body.
    fn render_success(&mut self, body: &Value) -> io::Result<()>;

    /// Writes a failure report.
    fn render_error(&mut self, error: &Error) -> io::Result<()>;
}

/// Renders to the process's stdout and stderr.
pub struct StdioRenderer;

impl Renderer for StdioRenderer {
    fn render_success(&mut self, body: &Value) -> io::Result<()> {
        let mut out = io::stdout().lock();
        write_json(&mut out, body)
    }

    fn render_error(&mut self, error: &Error) -> io::Result<()> {
        let mut err = io::stderr().lock();
        write_json(&mut err, &error_document(error))
    }
}

/// Writes the outcome through `renderer` and returns the exit code.
pub fn emit(outcome: Result<Value>, renderer: &mut impl Renderer) -> u8 {
    match outcome {
        Ok(body) => match renderer.render_success(&body) {
            Ok(()) => 0,
            // Nothing useful can be reported if stdout is gone (e.g. a closed pipe).
            Err(_) => EXIT_FAILURE,
        },
        Err(error) => {
            tracing::debug!(kind = error.kind(), "command failed");
            renderer.render_error(&error).ok();
            EXIT_FAILURE
        }
    }
}

/// The JSON shape of a failure on stderr.
pub fn error_document(error: &Error) -> Value {
    let mut doc = json!({
        "error": error.to_string(),
        "kind": error.kind(),
    });
    if let Some(status) = error.status_code() {
        doc["status_code"] = json!(status);
    }
    doc
}

fn write_json(w: &mut impl Write, value: &Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)?;
    w.flush()
}
