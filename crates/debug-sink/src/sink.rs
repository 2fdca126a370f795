//! crates/debug-sink/src/sink.rs
//! Streaming sink rendering status snapshots into an `io::Write` target.

mod guard;

pub use guard::LineModeGuard;

use std::borrow::Borrow;
use std::io::{self, Write};

use debug::{DebugRegistry, RecordStatus};

use crate::line_mode::LineMode;

/// Streaming sink that renders [`RecordStatus`] snapshots into an
/// [`io::Write`] target.
///
/// The sink owns the underlying writer and a [`LineMode`] deciding whether
/// each rendered status line ends with a newline. Rendering goes through
/// the snapshot's [`Display`](std::fmt::Display) implementation, so every
/// consumer of status output shares one line format.
///
/// # Examples
///
/// Collect the status of an explicit registry into a buffer:
///
/// ```
/// use debug::{DebugRecord, DebugRegistry, MODE_TERM};
/// use debug_sink::StatusSink;
///
/// static LDP_SESSIONS: DebugRecord = DebugRecord::new("debug ldp sessions", "LDP sessions");
///
/// let registry = DebugRegistry::new();
/// registry.install(&LDP_SESSIONS);
/// LDP_SESSIONS.mode_on(MODE_TERM);
///
/// let mut sink = StatusSink::new(Vec::new());
/// sink.write_registry(&registry)?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(
///     output,
///     "LDP sessions debugging is on (current session only)\n"
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct StatusSink<W> {
    writer: W,
    line_mode: LineMode,
}

impl<W> StatusSink<W> {
    /// Creates a sink that appends a newline after each status line.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self { writer, line_mode }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Temporarily overrides the [`LineMode`], restoring the previous mode
    /// when the returned guard drops.
    ///
    /// # Examples
    ///
    /// ```
    /// use debug_sink::{LineMode, StatusSink};
    ///
    /// let mut sink = StatusSink::new(Vec::<u8>::new());
    /// {
    ///     let guard = sink.scoped_line_mode(LineMode::WithoutNewline);
    ///     assert_eq!(guard.line_mode(), LineMode::WithoutNewline);
    /// }
    /// assert_eq!(sink.line_mode(), LineMode::WithNewline);
    /// ```
    pub fn scoped_line_mode(&mut self, line_mode: LineMode) -> LineModeGuard<'_, W> {
        let previous = self.line_mode;
        self.line_mode = line_mode;
        LineModeGuard::new(self, previous)
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for StatusSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> StatusSink<W>
where
    W: Write,
{
    /// Writes a single status line using the sink's current [`LineMode`].
    ///
    /// Borrowed or owned [`RecordStatus`] values are accepted via
    /// [`Borrow`], so call sites can forward snapshots without cloning.
    pub fn write<S>(&mut self, status: S) -> io::Result<()>
    where
        S: Borrow<RecordStatus>,
    {
        self.write_with_mode(status, self.line_mode)
    }

    /// Writes `status` using an explicit [`LineMode`] without mutating the
    /// sink.
    ///
    /// Useful when most lines follow the configured mode but a final
    /// summary line must be emitted without its terminator.
    pub fn write_with_mode<S>(&mut self, status: S, line_mode: LineMode) -> io::Result<()>
    where
        S: Borrow<RecordStatus>,
    {
        if line_mode.append_newline() {
            writeln!(self.writer, "{}", status.borrow())
        } else {
            write!(self.writer, "{}", status.borrow())
        }
    }

    /// Writes each status from the iterator to the underlying writer.
    pub fn write_all<I, S>(&mut self, statuses: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Borrow<RecordStatus>,
    {
        for status in statuses {
            self.write(status)?;
        }
        Ok(())
    }

    /// Writes one status line for every record in `registry`, in
    /// registration order.
    pub fn write_registry(&mut self, registry: &DebugRegistry) -> io::Result<()> {
        self.write_all(registry.statuses())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
