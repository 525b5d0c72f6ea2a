pub mod shared_sink {
    use std::io;
    use std::sync::{Arc, Mutex};

    use brrtconsole::console::ConsoleSink;

    /// Console sink whose transcript survives moving the dispatcher onto a
    /// coroutine: the test keeps one handle, the dispatcher gets a clone.
    #[derive(Clone, Default)]
    pub struct SharedSink {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl SharedSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl ConsoleSink for SharedSink {
        fn write_line(&mut self, line: &str) -> io::Result<()> {
            self.lines.lock().unwrap().push(line.to_string());
            Ok(())
        }
    }
}

pub mod stack {
    /// Mirror of the dispatcher's stack-size configuration for tests that
    /// spawn coroutines, honoring `BRRTCON_STACK_SIZE`.
    pub fn set_stack_size() {
        let size = std::env::var("BRRTCON_STACK_SIZE")
            .ok()
            .and_then(|v| {
                if let Some(hex) = v.strip_prefix("0x") {
                    usize::from_str_radix(hex, 16).ok()
                } else {
                    v.parse().ok()
                }
            })
            .unwrap_or(0x4000);
        may::config().set_stack_size(size);
    }
}
