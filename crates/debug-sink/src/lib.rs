#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `debug-sink` provides the output side of the debug toggle registry: a
//! [`StatusSink`] that streams [`RecordStatus`](debug::RecordStatus)
//! snapshots into any [`io::Write`](std::io::Write) implementor, with
//! newline handling controlled by a [`LineMode`]. The sink is what a
//! "show debugging" handler hands its terminal writer to, and what tests
//! point at an in-memory buffer.
//!
//! # Design
//!
//! Status rendering is owned by the core crate's snapshot type; this crate
//! only decides where the bytes go and how lines terminate. A
//! [`LineModeGuard`] offers scoped newline overrides that restore the
//! previous mode on drop.
//!
//! # Examples
//!
//! Dump a registry into an in-memory buffer and inspect the output:
//!
//! ```
//! use debug::{DebugRecord, DebugRegistry, MODE_TERM};
//! use debug_sink::StatusSink;
//!
//! static PIM_JOINS: DebugRecord = DebugRecord::new("debug pim joins", "PIM joins");
//! static IGMP_GROUPS: DebugRecord = DebugRecord::new("debug igmp groups", "IGMP groups");
//!
//! let registry = DebugRegistry::new();
//! registry.install(&PIM_JOINS);
//! registry.install(&IGMP_GROUPS);
//! PIM_JOINS.mode_on(MODE_TERM);
//!
//! let mut sink = StatusSink::new(Vec::new());
//! sink.write_registry(&registry)?;
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! let mut lines = output.lines();
//! assert_eq!(
//!     lines.next(),
//!     Some("PIM joins debugging is on (current session only)")
//! );
//! assert_eq!(lines.next(), Some("IGMP groups debugging is off"));
//! # Ok::<(), std::io::Error>(())
//! ```

mod line_mode;
mod sink;

pub use line_mode::LineMode;
pub use sink::{LineModeGuard, StatusSink};
