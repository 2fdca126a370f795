//! crates/debug/src/registry.rs
//! Record registry and the process-wide registration surface.

use std::io::{self, Write};
use std::sync::{OnceLock, RwLock};

use crate::flags::MODE_CONF;
use crate::record::DebugRecord;
use crate::status::RecordStatus;

/// Ordered collection of installed debug records.
///
/// Insertion order is registration order, which fixes the order of status
/// and configuration output. The registry holds non-owning references; each
/// record is owned by its defining module and lives for the whole process.
///
/// Membership is appended during single-threaded startup and treated as
/// immutable afterwards. The interior lock keeps the type `Sync` without
/// unsafe code; once registration ends it is taken only for reads and is
/// uncontended.
///
/// Most hosts use the process-wide instance through [`debug_init`],
/// [`debug_install`], and [`debug_status_write`]; an explicit registry
/// value exists for embedding and tests.
///
/// # Examples
///
/// ```
/// use debug::{DebugRecord, DebugRegistry, MODE_TERM};
///
/// static VRF_EVENTS: DebugRecord = DebugRecord::new("debug vrf", "VRF events");
///
/// let registry = DebugRegistry::new();
/// registry.install(&VRF_EVENTS);
/// VRF_EVENTS.mode_on(MODE_TERM);
///
/// let mut out = Vec::new();
/// registry.write_status(&mut out)?;
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("VRF events debugging is on (current session only)"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct DebugRegistry {
    records: RwLock<Vec<&'static DebugRecord>>,
}

impl DebugRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Appends `record` to the registry.
    ///
    /// # Panics
    ///
    /// Panics if `record` was already installed. Installation happens only
    /// during single-threaded startup, so the assertion fires before the
    /// process takes load.
    pub fn install(&self, record: &'static DebugRecord) {
        let mut records = self.records.write().expect("debug registry lock poisoned");
        assert!(
            !records
                .iter()
                .any(|installed| std::ptr::eq(*installed, record)),
            "debug record \"{}\" installed twice",
            record.desc(),
        );
        records.push(record);
    }

    /// Number of installed records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .read()
            .expect("debug registry lock poisoned")
            .len()
    }

    /// True when no record has been installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invokes `visitor` with every installed record, in registration
    /// order.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&'static DebugRecord),
    {
        let records = self.records.read().expect("debug registry lock poisoned");
        for record in records.iter() {
            visitor(record);
        }
    }

    /// Captures a status snapshot of every record, in registration order.
    ///
    /// Each snapshot is consistent for its record; flags may keep moving
    /// between records while the pass runs.
    #[must_use]
    pub fn statuses(&self) -> Vec<RecordStatus> {
        let records = self.records.read().expect("debug registry lock poisoned");
        records.iter().map(|record| record.status()).collect()
    }

    /// Writes one status line per record to `sink`, in registration order.
    ///
    /// Mutates nothing; safe to run concurrently with flag toggling.
    pub fn write_status<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        let records = self.records.read().expect("debug registry lock poisoned");
        for record in records.iter() {
            writeln!(sink, "  {}", record.status())?;
        }
        Ok(())
    }

    /// Writes the configuration line of every record whose
    /// saved-configuration mode bit is set to `sink`, in registration
    /// order.
    ///
    /// This is the rendering half of configuration regeneration; where the
    /// lines end up is the caller's concern.
    pub fn write_config<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        let records = self.records.read().expect("debug registry lock poisoned");
        for record in records.iter() {
            if record.mode_check(MODE_CONF) {
                writeln!(sink, "{}", record.conf())?;
            }
        }
        Ok(())
    }
}

static REGISTRY: OnceLock<DebugRegistry> = OnceLock::new();

/// Initializes the process-wide registry.
///
/// Idempotent. Must run before any [`debug_install`]; the host calls it
/// once early in startup, before subsystems register their records.
pub fn debug_init() {
    REGISTRY.get_or_init(DebugRegistry::new);
}

/// Installs `record` into the process-wide registry.
///
/// Each record is installed exactly once, during startup.
///
/// # Panics
///
/// Panics if [`debug_init`] has not run, or if `record` was already
/// installed.
pub fn debug_install(record: &'static DebugRecord) {
    REGISTRY
        .get()
        .expect("debug_init must run before debug_install")
        .install(record);
}

/// Invokes `visitor` with every record in the process-wide registry, in
/// registration order.
///
/// Before [`debug_init`] runs the registry reads as empty.
pub fn debug_for_each<F>(visitor: F)
where
    F: FnMut(&'static DebugRecord),
{
    if let Some(registry) = REGISTRY.get() {
        registry.for_each(visitor);
    }
}

/// Writes the status of every record in the process-wide registry to
/// `sink`.
///
/// Before [`debug_init`] runs the registry reads as empty.
pub fn debug_status_write<W: Write>(sink: &mut W) -> io::Result<()> {
    match REGISTRY.get() {
        Some(registry) => registry.write_status(sink),
        None => Ok(()),
    }
}

/// Writes the configuration lines of every persisted record in the
/// process-wide registry to `sink`.
///
/// Before [`debug_init`] runs the registry reads as empty.
pub fn debug_config_write<W: Write>(sink: &mut W) -> io::Result<()> {
    match REGISTRY.get() {
        Some(registry) => registry.write_config(sink),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{MODE_ALL, MODE_TERM};

    static ALPHA: DebugRecord = DebugRecord::new("debug alpha", "alpha");
    static BETA: DebugRecord = DebugRecord::new("debug beta", "beta");
    static GAMMA: DebugRecord = DebugRecord::new("debug gamma", "gamma");
    static DUPLICATE: DebugRecord = DebugRecord::new("debug duplicate", "duplicate");

    #[test]
    fn install_preserves_registration_order() {
        let registry = DebugRegistry::new();
        registry.install(&ALPHA);
        registry.install(&BETA);
        registry.install(&GAMMA);

        let mut seen = Vec::new();
        registry.for_each(|record| seen.push(record.desc()));
        assert_eq!(seen, ["alpha", "beta", "gamma"]);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    #[should_panic(expected = "installed twice")]
    fn duplicate_install_panics() {
        let registry = DebugRegistry::new();
        registry.install(&DUPLICATE);
        registry.install(&DUPLICATE);
    }

    #[test]
    fn statuses_snapshot_every_record_in_order() {
        static ONE: DebugRecord = DebugRecord::new("debug one", "one");
        static TWO: DebugRecord = DebugRecord::new("debug two", "two");

        let registry = DebugRegistry::new();
        registry.install(&ONE);
        registry.install(&TWO);
        ONE.mode_on(MODE_TERM);

        let statuses = registry.statuses();
        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].description, "one");
        assert!(statuses[0].session);
        assert_eq!(statuses[1].description, "two");
        assert!(!statuses[1].is_active());
    }

    #[test]
    fn write_status_emits_one_line_per_record() {
        static RED: DebugRecord = DebugRecord::new("debug red", "red");
        static BLUE: DebugRecord = DebugRecord::new("debug blue", "blue");

        let registry = DebugRegistry::new();
        registry.install(&RED);
        registry.install(&BLUE);
        RED.mode_on(MODE_ALL);

        let mut out = Vec::new();
        registry.write_status(&mut out).expect("status write");
        let text = String::from_utf8(out).expect("utf-8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("red debugging is on (current session and saved configuration)"));
        assert!(lines[1].contains("blue debugging is off"));
    }

    #[test]
    fn write_config_emits_only_persisted_records() {
        static KEPT: DebugRecord = DebugRecord::new("debug kept", "kept");
        static SESSION: DebugRecord = DebugRecord::new("debug session", "session");
        static IDLE: DebugRecord = DebugRecord::new("debug idle", "idle");

        let registry = DebugRegistry::new();
        registry.install(&KEPT);
        registry.install(&SESSION);
        registry.install(&IDLE);
        KEPT.mode_on(MODE_ALL);
        SESSION.mode_on(MODE_TERM);

        let mut out = Vec::new();
        registry.write_config(&mut out).expect("config write");
        assert_eq!(String::from_utf8(out).expect("utf-8"), "debug kept\n");
    }

    #[test]
    fn empty_registry_writes_nothing() {
        let registry = DebugRegistry::new();
        let mut out = Vec::new();
        registry.write_status(&mut out).expect("status write");
        registry.write_config(&mut out).expect("config write");
        assert!(out.is_empty());
        assert!(registry.is_empty());
    }
}
