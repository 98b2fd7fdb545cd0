//! Edge debouncing
//!
//! Mechanical switches ring for a few milliseconds on every press. The
//! gate enforces a minimum quiet interval per input line: an edge is
//! accepted only if enough time has passed since the last accepted edge
//! on the same line. Rejected edges are absorbed silently; bounce is
//! noise, not an error.

/// Debounce configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig {
    /// Minimum quiet interval between accepted edges, in microseconds
    pub quiet_interval_us: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl DebounceConfig {
    /// Standard window for mechanical push buttons (200 ms)
    pub const STANDARD: Self = Self {
        quiet_interval_us: 200_000,
    };

    /// Short window for pre-filtered or simulated inputs (200 us)
    pub const SHORT: Self = Self {
        quiet_interval_us: 200,
    };
}

/// An edge that passed the quiet-interval filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Accepted {
    /// Line the edge arrived on
    pub line: usize,
    /// Timestamp recorded for the edge, in microseconds
    pub at_us: u64,
}

/// Per-line quiet-interval filter
///
/// One record per monitored line; lines never share a timer. The only
/// state is the timestamp of the last accepted edge, `None` until a
/// line sees its first edge (which is therefore always accepted).
pub struct DebounceGate<const LINES: usize> {
    config: DebounceConfig,
    last_accepted_us: [Option<u64>; LINES],
}

impl<const LINES: usize> DebounceGate<LINES> {
    /// Create a gate with all lines idle
    pub const fn new(config: DebounceConfig) -> Self {
        Self {
            config,
            last_accepted_us: [None; LINES],
        }
    }

    /// Filter one raw edge.
    ///
    /// Accepts the edge iff `now_us - last_accepted >= quiet_interval`
    /// for this line; on acceptance the line's timestamp is set to
    /// `now_us` unconditionally. Rejected edges and out-of-range line
    /// indices return `None` and leave all state untouched.
    pub fn on_edge(&mut self, line: usize, now_us: u64) -> Option<Accepted> {
        if line >= LINES {
            return None;
        }
        if let Some(last) = self.last_accepted_us[line] {
            if now_us.saturating_sub(last) < self.config.quiet_interval_us {
                return None;
            }
        }
        self.last_accepted_us[line] = Some(now_us);
        Some(Accepted { line, at_us: now_us })
    }

    /// Timestamp of the last accepted edge on `line`, if any
    pub fn last_accepted_us(&self, line: usize) -> Option<u64> {
        self.last_accepted_us.get(line).copied().flatten()
    }

    /// The configured quiet interval
    pub fn config(&self) -> DebounceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const QUIET: u64 = DebounceConfig::STANDARD.quiet_interval_us;

    #[test]
    fn test_first_edge_accepted_at_time_zero() {
        let mut gate: DebounceGate<2> = DebounceGate::new(DebounceConfig::STANDARD);
        let accepted = gate.on_edge(0, 0).unwrap();
        assert_eq!(accepted, Accepted { line: 0, at_us: 0 });
        assert_eq!(gate.last_accepted_us(0), Some(0));
    }

    #[test]
    fn test_edge_inside_quiet_window_rejected() {
        let mut gate: DebounceGate<2> = DebounceGate::new(DebounceConfig::STANDARD);
        assert!(gate.on_edge(0, 0).is_some());
        assert!(gate.on_edge(0, 50_000).is_none());
        assert!(gate.on_edge(0, QUIET - 1).is_none());
    }

    #[test]
    fn test_edge_at_window_boundary_accepted() {
        let mut gate: DebounceGate<2> = DebounceGate::new(DebounceConfig::STANDARD);
        assert!(gate.on_edge(0, 1_000).is_some());
        assert!(gate.on_edge(0, 1_000 + QUIET).is_some());
    }

    #[test]
    fn test_rejection_leaves_timestamp_unchanged() {
        let mut gate: DebounceGate<2> = DebounceGate::new(DebounceConfig::STANDARD);
        assert!(gate.on_edge(0, 1_000).is_some());
        assert!(gate.on_edge(0, 2_000).is_none());
        assert_eq!(gate.last_accepted_us(0), Some(1_000));

        // Window still measured from the first accepted edge
        assert!(gate.on_edge(0, 1_000 + QUIET).is_some());
    }

    #[test]
    fn test_lines_tracked_independently() {
        let mut gate: DebounceGate<2> = DebounceGate::new(DebounceConfig::STANDARD);
        assert!(gate.on_edge(0, 0).is_some());
        // Line 1 has never fired; its window is not affected by line 0
        assert!(gate.on_edge(1, 10_000).is_some());
        // But line 0 is still inside its own window
        assert!(gate.on_edge(0, 10_000).is_none());
    }

    #[test]
    fn test_out_of_range_line_ignored() {
        let mut gate: DebounceGate<2> = DebounceGate::new(DebounceConfig::STANDARD);
        assert!(gate.on_edge(2, 0).is_none());
        assert!(gate.on_edge(usize::MAX, 0).is_none());
        assert_eq!(gate.last_accepted_us(0), None);
        assert_eq!(gate.last_accepted_us(1), None);
    }

    #[test]
    fn test_short_preset_window() {
        let mut gate: DebounceGate<1> = DebounceGate::new(DebounceConfig::SHORT);
        assert!(gate.on_edge(0, 0).is_some());
        assert!(gate.on_edge(0, 199).is_none());
        assert!(gate.on_edge(0, 200).is_some());
    }

    proptest! {
        #[test]
        fn edges_inside_quiet_window_always_rejected(
            t1 in 0u64..1_000_000_000,
            dt in 0u64..QUIET,
        ) {
            let mut gate: DebounceGate<1> = DebounceGate::new(DebounceConfig::STANDARD);
            prop_assert!(gate.on_edge(0, t1).is_some());
            prop_assert!(gate.on_edge(0, t1 + dt).is_none());
            prop_assert_eq!(gate.last_accepted_us(0), Some(t1));
        }

        #[test]
        fn edges_past_quiet_window_always_accepted(
            t1 in 0u64..1_000_000_000,
            dt in QUIET..10 * QUIET,
        ) {
            let mut gate: DebounceGate<1> = DebounceGate::new(DebounceConfig::STANDARD);
            prop_assert!(gate.on_edge(0, t1).is_some());
            prop_assert!(gate.on_edge(0, t1 + dt).is_some());
            prop_assert_eq!(gate.last_accepted_us(0), Some(t1 + dt));
        }
    }
}
