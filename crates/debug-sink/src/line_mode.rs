/// Controls whether a [`StatusSink`](crate::StatusSink) appends a trailing
/// newline when writing status lines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each rendered status line.
    WithNewline,
    /// Emit the rendered status line without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode appends a trailing newline.
    ///
    /// Exposing the behaviour as a method avoids requiring callers to
    /// pattern-match on the enum when mirroring the sink's newline policy
    /// across multiple destinations.
    ///
    /// # Examples
    ///
    /// ```
    /// use debug_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl Default for LineMode {
    fn default() -> Self {
        Self::WithNewline
    }
}

impl From<bool> for LineMode {
    /// Converts a boolean newline flag into a [`LineMode`].
    ///
    /// `true` maps to [`LineMode::WithNewline`], `false` to
    /// [`LineMode::WithoutNewline`].
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    /// Converts a [`LineMode`] back into its boolean newline flag via
    /// [`LineMode::append_newline`].
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}
