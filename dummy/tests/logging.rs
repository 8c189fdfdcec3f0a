//! Tracing output for lookup misses, captured through an in-memory writer.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use dummy::{NOT_FOUND, logging, lookup_int, lookup_string};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        let buf = self.0.lock().expect("lock");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("lock").extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(directive: &str, f: F) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = logging::subscriber(EnvFilter::new(directive), move || writer.clone());
    tracing::subscriber::with_default(subscriber, f);
    captured.contents()
}

#[test]
fn lookup_miss_emits_trace_event() {
    let out = capture("dummy=trace", || {
        assert_eq!(lookup_string("missing"), NOT_FOUND);
        assert_eq!(lookup_int(7), NOT_FOUND);
    });
    assert!(out.contains("string lookup miss"), "output: {out}");
    assert!(out.contains("int lookup miss"), "output: {out}");
    assert!(out.contains("missing"), "output: {out}");
}

#[test]
fn lookup_hit_emits_nothing() {
    let out = capture("dummy=trace", || {
        assert_eq!(lookup_string("one"), 1);
        assert_eq!(lookup_int(42), 4200);
    });
    assert!(out.is_empty(), "output: {out}");
}

#[test]
fn trace_events_are_filtered_at_warn() {
    let out = capture("warn", || {
        assert_eq!(lookup_string("missing"), NOT_FOUND);
    });
    assert!(out.is_empty(), "output: {out}");
}

#[test]
fn second_init_returns_error() {
    logging::init().expect("first init");
    assert!(logging::init().is_err());
}
