//! Text shown in the time slot before and between solves.

use serde::{Deserialize, Serialize};

/// How the active puzzle's timer is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerInput {
    /// Space bar (or touch) start/stop.
    #[default]
    Keyboard,
    /// External stackmat timer.
    Stackmat,
    /// Times typed in by hand.
    Entry,
}

/// Summary of the most recent solve, as far as the time slot cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LatestSolve {
    /// Raw solve time in milliseconds, without penalties.
    pub time_ms: u64,
    /// Two-second penalty.
    pub plus2: bool,
    /// Did not finish.
    pub dnf: bool,
    /// Memorization time in milliseconds, if recorded.
    pub memo_ms: Option<u64>,
}

/// What the time slot should display for a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveText {
    /// Formatted time, with a `+` suffix for +2 solves.
    pub time: String,
    /// Whether to style the time as a DNF.
    pub dnf: bool,
}

impl LatestSolve {
    /// Display text with the +2 penalty applied.
    #[must_use]
    pub fn text(&self) -> SolveText {
        let (time, suffix) = if self.plus2 {
            (self.time_ms + 2000, "+")
        } else {
            (self.time_ms, "")
        };
        SolveText {
            time: format!("{}{suffix}", format_time(time)),
            dnf: self.dnf,
        }
    }

    /// Formatted memorization time, if any.
    #[must_use]
    pub fn memo_text(&self) -> Option<String> {
        self.memo_ms.map(format_time)
    }
}

/// Text shown in the entry field before anything is typed.
pub const ENTRY_PLACEHOLDER: &str = "0.00";

/// Format milliseconds as `s.cc`, `m:ss.cc` or `h:mm:ss.cc`.
///
/// Centiseconds are truncated, never rounded up.
#[must_use]
pub fn format_time(ms: u64) -> String {
    let centis = (ms / 10) % 100;
    let total_seconds = ms / 1000;
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3600;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}.{centis:02}")
    } else if minutes > 0 {
        format!("{minutes}:{seconds:02}.{centis:02}")
    } else {
        format!("{seconds}.{centis:02}")
    }
}

/// Prompt shown when there is no time to display yet.
#[must_use]
pub fn no_times_label(touch_device: bool, input: TimerInput) -> &'static str {
    if touch_device {
        "Tap Screen"
    } else if input == TimerInput::Stackmat {
        "Stackmat"
    } else {
        "Hit Space"
    }
}
