//! Log sink: the browser console in WASM, `tracing` everywhere else.
//!
//! Host builds only emit through whatever `tracing` subscriber is installed.
//! Tests install one with [`init_test_logging`]; without it host logging is a no-op.

#[cfg(target_arch = "wasm32")]
pub fn debug(msg: &str) { gloo::console::debug!(msg); }

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) { gloo::console::warn!(msg); }

#[cfg(not(target_arch = "wasm32"))]
pub fn debug(msg: &str) { tracing::debug!("{}", msg); }

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(msg: &str) { tracing::warn!("{}", msg); }

/// Routes `tracing` output to the test harness. `RUST_LOG` overrides the
/// default `bet_tracker=debug` filter. Safe to call from every test.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bet_tracker=debug"));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use crate::store::{MemoryBackend, Store};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_malformed_load_logs_warning() {
        let out = capture(|| {
            let store = Store::open(MemoryBackend::with_raw("[{\"title\": "));
            assert!(store.is_empty());
        });
        assert!(out.contains("WARN"), "got {:?}", out);
        assert!(out.contains("discarding stored bets"), "got {:?}", out);
    }

    #[test]
    fn test_open_logs_loaded_count() {
        let out = capture(|| {
            Store::open(MemoryBackend::with_raw("[]"));
        });
        assert!(out.contains("loaded 0 bets"), "got {:?}", out);
    }
}
