/// Output formatting: compact or pretty JSON to stdout, timing to stderr.
use serde::Serialize;

/// Output context passed to all command handlers.
pub struct OutputCtx {
    /// When true, pretty-print the output JSON.
    pub indent: bool,
    /// When true, print request timing spans to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(indent: bool, debug: bool) -> Self {
        Self { indent, debug }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

/// Write a serializable value to stdout, compact or pretty per the context.
pub fn write_value<T: Serialize + ?Sized>(value: &T, ctx: &OutputCtx) {
    match render(value, ctx.indent) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

/// Serialize a value to a JSON string, pretty when `indent` is set.
fn render<T: Serialize + ?Sized>(value: &T, indent: bool) -> serde_json::Result<String> {
    if indent {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}
