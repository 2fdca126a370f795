//! Integration tests for status line output through the sink.

use debug::{DebugRecord, DebugRegistry, MODE_ALL, MODE_CONF, MODE_TERM};
use debug_sink::{LineMode, StatusSink};

/// Verifies a registry dump renders one line per record, in registration
/// order, with the four mode states spelled out.
#[test]
fn registry_dump_renders_in_registration_order() {
    static BOTH: DebugRecord = DebugRecord::new("debug both", "both");
    static SESSION: DebugRecord = DebugRecord::new("debug session", "session");
    static SAVED: DebugRecord = DebugRecord::new("debug saved", "saved");
    static OFF: DebugRecord = DebugRecord::new("debug off", "off");

    let registry = DebugRegistry::new();
    registry.install(&BOTH);
    registry.install(&SESSION);
    registry.install(&SAVED);
    registry.install(&OFF);

    BOTH.mode_on(MODE_ALL);
    SESSION.mode_on(MODE_TERM);
    SAVED.mode_on(MODE_CONF);

    let mut sink = StatusSink::new(Vec::new());
    sink.write_registry(&registry).expect("registry write");

    let output = String::from_utf8(sink.into_inner()).expect("utf-8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        [
            "both debugging is on (current session and saved configuration)",
            "session debugging is on (current session only)",
            "saved debugging is on (saved configuration only)",
            "off debugging is off",
        ]
    );
}

/// Verifies option bits show up in the rendered line.
#[test]
fn option_bits_appear_in_output() {
    static DETAILED: DebugRecord = DebugRecord::new("debug detailed", "detailed");

    let registry = DebugRegistry::new();
    registry.install(&DETAILED);
    DETAILED.mode_on(MODE_TERM);
    DETAILED.opt_on(0x05);

    let mut sink = StatusSink::new(Vec::new());
    sink.write_registry(&registry).expect("registry write");

    let output = String::from_utf8(sink.into_inner()).expect("utf-8");
    assert_eq!(
        output,
        "detailed debugging is on (current session only), options 0x000005\n"
    );
}

/// Verifies the scoped line mode override applies while the guard lives
/// and is undone afterwards.
#[test]
fn scoped_line_mode_round_trips() {
    static QUIET: DebugRecord = DebugRecord::new("debug quiet", "quiet");

    let mut sink = StatusSink::new(Vec::new());
    {
        let mut guard = sink.scoped_line_mode(LineMode::WithoutNewline);
        guard.write(QUIET.status()).expect("write succeeds");
    }
    sink.write(QUIET.status()).expect("write succeeds");

    let output = String::from_utf8(sink.into_inner()).expect("utf-8");
    assert_eq!(output, "quiet debugging is offquiet debugging is off\n");
}

/// Verifies the sink observes flags as they move: the same registry dump
/// reflects a toggle flipped between passes.
#[test]
fn consecutive_dumps_track_toggle_changes() {
    static FLAPPING: DebugRecord = DebugRecord::new("debug flapping", "flapping");

    let registry = DebugRegistry::new();
    registry.install(&FLAPPING);

    let mut sink = StatusSink::new(Vec::new());
    sink.write_registry(&registry).expect("first pass");

    FLAPPING.mode_on(MODE_TERM);
    sink.write_registry(&registry).expect("second pass");

    FLAPPING.clear();
    sink.write_registry(&registry).expect("third pass");

    let output = String::from_utf8(sink.into_inner()).expect("utf-8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        [
            "flapping debugging is off",
            "flapping debugging is on (current session only)",
            "flapping debugging is off",
        ]
    );
}
