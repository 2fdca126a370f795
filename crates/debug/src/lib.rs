#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `debug` is a concurrency-safe registry of runtime debug toggles for a
//! long-lived daemon. Each [`DebugRecord`] controls whether one category of
//! diagnostic output is active and whether that activation should survive
//! into the saved configuration or only last for the current run. Records
//! are plain `static` items owned by the subsystems that define them;
//! worker threads consult them on hot paths while a command-handling thread
//! toggles them, all without external locking.
//!
//! # Design
//!
//! A record's state is one [`FlagWord`]: a 32-bit atomic whose high byte
//! holds the persistence mode ([`MODE_TERM`], [`MODE_CONF`]) and whose low
//! three bytes hold option bits owned by the defining module. Every
//! mutation is a single atomic fetch-or / fetch-and / store, so concurrent
//! writers to disjoint bits never lose updates and readers never observe a
//! torn word. Mode and option operations pre-mask their argument to their
//! own range, which keeps generic bit fiddling from ever corrupting
//! persistence semantics.
//!
//! The [`DebugRegistry`] collects every installed record in registration
//! order for bulk status output. Hosts normally use the process-wide
//! surface — [`debug_init`] once at startup, [`debug_install`] once per
//! record, [`debug_status_write`] / [`debug_config_write`] on demand — but
//! an explicit registry value can be embedded instead.
//!
//! [`DebugContext`] maps the execution context of a toggle command to the
//! mode bits it should apply: configuration-context commands persist,
//! everything else is session-only.
//!
//! # Invariants
//!
//! - Mode operations touch only the mode byte; option operations touch
//!   only the option bytes. The atomic word is private, so no caller can
//!   bypass the masked operations.
//! - Every mutation is one atomic instruction; no operation blocks,
//!   suspends, or fails.
//! - Registry membership grows only during single-threaded startup and is
//!   immutable once concurrent operation begins.
//! - Toggles published by one thread are visible to any thread that
//!   subsequently checks (release stores, acquire loads). No ordering is
//!   promised between operations on different records.
//!
//! # Errors
//!
//! Flag operations are total. The rendering passes return
//! [`std::io::Error`] values originating from the supplied sink, and
//! nothing else. Startup-phase misuse (installing a record twice, or
//! before [`debug_init`]) is a fatal assertion rather than an error value.
//!
//! # Examples
//!
//! A subsystem defines a record, the host registers it, a command handler
//! toggles it, and diagnostic call sites gate on it:
//!
//! ```
//! use debug::{DebugContext, DebugRecord, DebugRegistry};
//!
//! static RIP_EVENTS: DebugRecord = DebugRecord::new("debug rip events", "RIP events");
//!
//! let registry = DebugRegistry::new();
//! registry.install(&RIP_EVENTS);
//!
//! // An interactive "debug rip events" command:
//! RIP_EVENTS.mode_on(DebugContext::Interactive.mode_mask());
//! assert!(RIP_EVENTS.enabled());
//!
//! // A hot-path call site:
//! if RIP_EVENTS.enabled() {
//!     // format and emit the diagnostic
//! }
//!
//! // "show debugging":
//! let mut out = Vec::new();
//! registry.write_status(&mut out)?;
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("RIP events debugging is on (current session only)"));
//!
//! // Session-only toggles never reach the saved configuration:
//! let mut conf = Vec::new();
//! registry.write_config(&mut conf)?;
//! assert!(conf.is_empty());
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # See also
//!
//! - `debug-sink` for sink adapters that render [`RecordStatus`]
//!   snapshots to arbitrary writers.

mod context;
mod flags;
mod record;
mod registry;
mod status;
#[cfg(feature = "tracing")]
mod tracing_macros;

pub use context::DebugContext;
pub use flags::{FlagWord, MODE_ALL, MODE_CONF, MODE_NONE, MODE_TERM, OPT_ALL, OPT_NONE};
pub use record::DebugRecord;
pub use registry::{
    DebugRegistry, debug_config_write, debug_for_each, debug_init, debug_install,
    debug_status_write,
};
pub use status::RecordStatus;
