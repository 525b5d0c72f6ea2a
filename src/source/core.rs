use may::sync::mpsc;

/// One poll result from a [`LineSource`].
///
/// The terminator itself never reaches the dispatcher; the source strips it
/// and reports only whether the line completed cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A complete line, line ending stripped.
    Line(String),
    /// The source's buffer filled before the line ended. The payload is the
    /// truncated fragment; the true end of line has not been reached yet.
    Overflow(String),
}

/// Asynchronous "get next line" capability consumed by the dispatch loop.
///
/// `next_line` is the dispatcher's single suspension point: implementations
/// block the calling coroutine until an outcome is available. Returning
/// `None` signals end of stream and stops the loop.
pub trait LineSource {
    /// Block until the next outcome, or `None` once the stream is closed.
    fn next_line(&mut self) -> Option<ReadOutcome>;
}

/// Create a connected [`LineFeeder`] / [`ChannelLineSource`] pair.
///
/// The feeder side is cheap to clone and can be handed to any producer
/// coroutine; the source side goes to the dispatcher. The stream closes when
/// every feeder clone has been dropped.
#[must_use]
pub fn channel() -> (LineFeeder, ChannelLineSource) {
    let (tx, rx) = mpsc::channel();
    (LineFeeder { tx }, ChannelLineSource { rx })
}

/// Producer handle for a [`ChannelLineSource`].
#[derive(Clone)]
pub struct LineFeeder {
    tx: mpsc::Sender<ReadOutcome>,
}

impl LineFeeder {
    /// Feed a complete line. Returns `false` if the source side is gone.
    pub fn feed_line(&self, line: impl Into<String>) -> bool {
        self.send(ReadOutcome::Line(line.into()))
    }

    /// Feed an overflow fragment. Returns `false` if the source side is gone.
    pub fn feed_overflow(&self, fragment: impl Into<String>) -> bool {
        self.send(ReadOutcome::Overflow(fragment.into()))
    }

    /// Feed a raw outcome. Returns `false` if the source side is gone.
    pub fn send(&self, outcome: ReadOutcome) -> bool {
        self.tx.send(outcome).is_ok()
    }
}

/// Channel-backed [`LineSource`].
///
/// Receiving suspends the dispatcher coroutine until a producer feeds the
/// next outcome, which preserves strict arrival order across producers on
/// the same feeder.
pub struct ChannelLineSource {
    rx: mpsc::Receiver<ReadOutcome>,
}

impl LineSource for ChannelLineSource {
    fn next_line(&mut self) -> Option<ReadOutcome> {
        self.rx.recv().ok()
    }
}
