//! crates/debug/src/context.rs
//! Execution contexts and their mapping to mode bits.

use crate::flags::{MODE_ALL, MODE_TERM};

/// The execution context a toggle command was issued from.
///
/// The host's command interpreter decides which context applies; this crate
/// only maps the context to the mode bits the toggle should carry. A toggle
/// issued while editing the saved configuration persists, whereas the same
/// toggle issued interactively lasts only for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum DebugContext {
    /// Commands applied while editing the saved configuration.
    Configuration,
    /// Commands issued interactively against the running process.
    Interactive,
}

impl DebugContext {
    /// The mode bits a toggle issued from this context should apply.
    ///
    /// [`Configuration`](Self::Configuration) maps to both mode bits; every
    /// other context, including any added later, maps to the session-only
    /// bit. Defaulting to the non-persistent choice means an unrecognized
    /// context can never silently write into the saved configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use debug::{DebugContext, MODE_ALL, MODE_TERM};
    ///
    /// assert_eq!(DebugContext::Configuration.mode_mask(), MODE_ALL);
    /// assert_eq!(DebugContext::Interactive.mode_mask(), MODE_TERM);
    /// ```
    #[must_use]
    pub const fn mode_mask(self) -> u32 {
        match self {
            Self::Configuration => MODE_ALL,
            _ => MODE_TERM,
        }
    }
}
