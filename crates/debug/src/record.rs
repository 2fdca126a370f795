//! crates/debug/src/record.rs
//! Debug record type and its masked flag operations.

use crate::flags::{FlagWord, MODE_ALL, MODE_CONF, MODE_TERM, OPT_ALL};
use crate::status::RecordStatus;

/// One named debug toggle.
///
/// A record owns a [`FlagWord`] plus two strings fixed at construction:
/// `conf`, the line emitted when the host regenerates its persisted
/// configuration, and `desc`, the human-readable description used by status
/// output. Both typically point at static data in the defining module.
///
/// Records are created once, as `static` items, by the module that defines
/// a diagnostic category, and registered with the
/// [`DebugRegistry`](crate::DebugRegistry) during startup. They live for
/// the whole process.
///
/// All flag operations are atomic and safe to call from any thread without
/// external locking. Mode operations address only the mode byte and option
/// operations only the option bytes; out-of-range bits in a supplied mask
/// are discarded rather than rejected, so a wrong mask can never corrupt
/// the other range.
///
/// # Examples
///
/// ```
/// use debug::{DebugRecord, MODE_CONF, MODE_TERM};
///
/// static RIP_EVENTS: DebugRecord = DebugRecord::new("debug rip events", "RIP events");
///
/// RIP_EVENTS.mode_on(MODE_TERM);
/// assert!(RIP_EVENTS.mode_check(MODE_TERM));
/// assert!(!RIP_EVENTS.mode_check(MODE_CONF));
/// assert!(RIP_EVENTS.enabled());
///
/// RIP_EVENTS.clear();
/// assert!(!RIP_EVENTS.enabled());
/// ```
#[derive(Debug)]
pub struct DebugRecord {
    flags: FlagWord,
    conf: &'static str,
    desc: &'static str,
}

impl DebugRecord {
    /// Creates a record with every flag cleared.
    #[must_use]
    pub const fn new(conf: &'static str, desc: &'static str) -> Self {
        Self {
            flags: FlagWord::new(),
            conf,
            desc,
        }
    }

    /// True when the record has at least one of the mode bits in `mode` set.
    ///
    /// `mode` is masked to the mode byte before checking.
    #[must_use]
    pub fn mode_check(&self, mode: u32) -> bool {
        self.flags.check(mode & MODE_ALL)
    }

    /// Sets or clears the mode bits in `mode`.
    ///
    /// `mode` is masked to the mode byte; option bits it may carry are
    /// ignored.
    pub fn mode_set(&self, mode: u32, on: bool) {
        self.flags.set(mode & MODE_ALL, on);
    }

    /// Sets the mode bits in `mode`.
    pub fn mode_on(&self, mode: u32) {
        self.mode_set(mode, true);
    }

    /// Clears the mode bits in `mode`.
    pub fn mode_off(&self, mode: u32) {
        self.mode_set(mode, false);
    }

    /// True when the record has at least one of the option bits in `opt`
    /// set.
    ///
    /// `opt` is masked to the option bytes before checking.
    #[must_use]
    pub fn opt_check(&self, opt: u32) -> bool {
        self.flags.check(opt & OPT_ALL)
    }

    /// Sets or clears the option bits in `opt`.
    ///
    /// `opt` is masked to the option bytes; mode bits it may carry are
    /// ignored.
    pub fn opt_set(&self, opt: u32, on: bool) {
        self.flags.set(opt & OPT_ALL, on);
    }

    /// Sets the option bits in `opt`.
    pub fn opt_on(&self, opt: u32) {
        self.opt_set(opt, true);
    }

    /// Clears the option bits in `opt`.
    pub fn opt_off(&self, opt: u32) {
        self.opt_set(opt, false);
    }

    /// True when the record has at least one bit of `mask` set, with no
    /// range masking applied.
    ///
    /// Escape hatch for callers holding a combined, correctly pre-masked
    /// mode/option value.
    #[must_use]
    pub fn flags_check(&self, mask: u32) -> bool {
        self.flags.check(mask)
    }

    /// Sets or clears the bits in `mask`, with no range masking applied.
    ///
    /// Still an atomic read-modify-write, never a plain store.
    pub fn flags_set(&self, mask: u32, on: bool) {
        self.flags.set(mask, on);
    }

    /// Clears every mode and option bit in one atomic store.
    pub fn clear(&self) {
        self.flags.reset();
    }

    /// Sets every mode and option bit.
    pub fn enable_all(&self) {
        self.flags.set_all();
    }

    /// True when any mode bit is set.
    ///
    /// This is the hot-path gate diagnostic call sites consult before
    /// formatting output.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.mode_check(MODE_ALL)
    }

    /// The configuration line emitted for this record when persisted.
    #[must_use]
    pub const fn conf(&self) -> &'static str {
        self.conf
    }

    /// The human-readable description of this record.
    #[must_use]
    pub const fn desc(&self) -> &'static str {
        self.desc
    }

    /// Captures the record's current state from a single atomic load.
    ///
    /// The snapshot is internally consistent for this record; no
    /// consistency across records is implied.
    #[must_use]
    pub fn status(&self) -> RecordStatus {
        let word = self.flags.load();
        RecordStatus {
            description: self.desc.to_owned(),
            session: word & MODE_TERM != 0,
            persistent: word & MODE_CONF != 0,
            options: word & OPT_ALL,
        }
    }
}
