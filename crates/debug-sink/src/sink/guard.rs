use super::StatusSink;
use crate::line_mode::LineMode;

/// RAII guard that temporarily overrides a [`StatusSink`]'s [`LineMode`].
///
/// Instances are created by [`StatusSink::scoped_line_mode`]. While the
/// guard is alive, writes issued through it use the scoped line mode;
/// dropping the guard restores the previous mode. The guard implements
/// [`Deref`](std::ops::Deref) and [`DerefMut`](std::ops::DerefMut) so
/// callers can invoke sink methods without extra boilerplate.
#[must_use = "dropping the guard immediately restores the previous line mode"]
pub struct LineModeGuard<'a, W> {
    sink: Option<&'a mut StatusSink<W>>,
    previous: LineMode,
}

impl<'a, W> LineModeGuard<'a, W> {
    pub(crate) const fn new(sink: &'a mut StatusSink<W>, previous: LineMode) -> Self {
        Self {
            sink: Some(sink),
            previous,
        }
    }

    /// Returns the [`LineMode`] that will be restored when the guard
    /// drops.
    #[must_use]
    pub const fn previous_line_mode(&self) -> LineMode {
        self.previous
    }

    /// Consumes the guard without restoring the previous [`LineMode`],
    /// making the temporary override the sink's new baseline. Returns the
    /// underlying [`StatusSink`] for further writes.
    pub fn into_inner(mut self) -> &'a mut StatusSink<W> {
        self.sink
            .take()
            .expect("line mode guard must own a status sink")
    }
}

impl<W> Drop for LineModeGuard<'_, W> {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.set_line_mode(self.previous);
        }
    }
}

impl<W> std::ops::Deref for LineModeGuard<'_, W> {
    type Target = StatusSink<W>;

    fn deref(&self) -> &Self::Target {
        self.sink
            .as_deref()
            .expect("line mode guard remains active while borrowed")
    }
}

impl<W> std::ops::DerefMut for LineModeGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.sink
            .as_deref_mut()
            .expect("line mode guard remains active while borrowed")
    }
}
