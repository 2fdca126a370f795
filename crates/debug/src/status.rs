//! crates/debug/src/status.rs
//! Status snapshots and their line rendering.

use std::fmt;

/// Point-in-time state of one debug record.
///
/// Captured from a single atomic load by
/// [`DebugRecord::status`](crate::DebugRecord::status), so the mode and
/// option fields are mutually consistent for that record. The snapshot is
/// the unit consumed by status sinks and, with the `serde` feature, the
/// payload exported to management frontends.
///
/// [`Display`](fmt::Display) renders the canonical status line,
/// distinguishing all four mode states and appending the option bits when
/// any are set. Every status pass in the workspace shares this one
/// rendering path.
///
/// # Examples
///
/// ```
/// use debug::{DebugRecord, MODE_TERM};
///
/// static OSPF_SPF: DebugRecord = DebugRecord::new("debug ospf spf", "OSPF SPF");
///
/// assert_eq!(OSPF_SPF.status().to_string(), "OSPF SPF debugging is off");
///
/// OSPF_SPF.mode_on(MODE_TERM);
/// assert_eq!(
///     OSPF_SPF.status().to_string(),
///     "OSPF SPF debugging is on (current session only)"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordStatus {
    /// Human-readable description of the record.
    pub description: String,
    /// Whether the session-only mode bit was set at capture time.
    pub session: bool,
    /// Whether the saved-configuration mode bit was set at capture time.
    pub persistent: bool,
    /// Option bits (low three bytes) at capture time.
    pub options: u32,
}

impl RecordStatus {
    /// True when either mode bit was set at capture time.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.session || self.persistent
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.session, self.persistent) {
            (false, false) => write!(f, "{} debugging is off", self.description)?,
            (true, false) => write!(
                f,
                "{} debugging is on (current session only)",
                self.description
            )?,
            (false, true) => write!(
                f,
                "{} debugging is on (saved configuration only)",
                self.description
            )?,
            (true, true) => write!(
                f,
                "{} debugging is on (current session and saved configuration)",
                self.description
            )?,
        }
        if self.options != 0 {
            write!(f, ", options 0x{:06x}", self.options)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(session: bool, persistent: bool, options: u32) -> RecordStatus {
        RecordStatus {
            description: "BGP updates".to_owned(),
            session,
            persistent,
            options,
        }
    }

    #[test]
    fn renders_off() {
        assert_eq!(
            status(false, false, 0).to_string(),
            "BGP updates debugging is off"
        );
    }

    #[test]
    fn renders_session_only() {
        assert_eq!(
            status(true, false, 0).to_string(),
            "BGP updates debugging is on (current session only)"
        );
    }

    #[test]
    fn renders_saved_configuration_only() {
        assert_eq!(
            status(false, true, 0).to_string(),
            "BGP updates debugging is on (saved configuration only)"
        );
    }

    #[test]
    fn renders_both_modes() {
        assert_eq!(
            status(true, true, 0).to_string(),
            "BGP updates debugging is on (current session and saved configuration)"
        );
    }

    #[test]
    fn four_mode_states_render_distinctly() {
        let lines = [
            status(false, false, 0).to_string(),
            status(true, false, 0).to_string(),
            status(false, true, 0).to_string(),
            status(true, true, 0).to_string(),
        ];
        for (i, a) in lines.iter().enumerate() {
            for b in &lines[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn appends_options_when_set() {
        assert_eq!(
            status(false, true, 0x01).to_string(),
            "BGP updates debugging is on (saved configuration only), options 0x000001"
        );
    }

    #[test]
    fn omits_options_when_clear() {
        assert!(!status(true, true, 0).to_string().contains("options"));
    }

    #[test]
    fn is_active_tracks_either_mode() {
        assert!(!status(false, false, 0xFF).is_active());
        assert!(status(true, false, 0).is_active());
        assert!(status(false, true, 0).is_active());
        assert!(status(true, true, 0).is_active());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let original = status(true, false, 0x20);
        let json = serde_json::to_string(&original).expect("serialize status");
        let restored: RecordStatus = serde_json::from_str(&json).expect("deserialize status");
        assert_eq!(original, restored);
    }
}
