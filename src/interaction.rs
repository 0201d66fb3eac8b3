//! Hover and landmark-popup state for the elevation chart.
//!
//! Pure state machine with no browser access: timers are requested through
//! [`TimerCommand`]s that the chart component turns into real timeouts.

use crate::course::CourseDataset;
use std::time::Duration;

/// Grace period between leaving a landmark marker (or its popup) and the
/// popup closing. Long enough to cross the gap from marker up to popup.
pub const LANDMARK_CLOSE_DELAY: Duration = Duration::from_millis(300);

/// The point under the pointer while scrubbing along the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverPoint {
    /// Pointer offset from the chart's left edge, in rendered pixels
    pub x_px: f64,
    pub distance_km: f64,
    pub elevation_m: f64,
}

impl HoverPoint {
    /// Inverse-map a pointer offset inside a chart `rendered_width` pixels
    /// wide. Offsets past either edge pin to the start or finish.
    ///
    /// Returns `None` while the chart has no width (not laid out yet).
    pub fn from_pointer(
        offset_x: f64,
        rendered_width: f64,
        dataset: &CourseDataset,
    ) -> Option<Self> {
        if !(rendered_width > 0.0) {
            return None;
        }
        let x_px = if offset_x.is_nan() {
            0.0
        } else {
            offset_x.clamp(0.0, rendered_width)
        };
        let total = dataset.total_distance_km();
        let distance_km = (x_px / rendered_width * total).clamp(0.0, total);
        Some(Self {
            x_px,
            distance_km,
            elevation_m: dataset.elevation_at(distance_km),
        })
    }
}

/// Identifies one scheduled close. A timer that fires with a ticket that is
/// no longer current does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTicket(u64);

/// What the host must do with its close timer after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Leave any running timer alone
    Keep,
    /// Cancel any running timer, then call
    /// [`ChartInteraction::close_elapsed`] with `ticket` after `delay`
    Start { ticket: CloseTicket, delay: Duration },
    /// Cancel any running timer
    Cancel,
}

/// Outcome of a landmark marker gaining the pointer or focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandmarkEntry {
    pub timer: TimerCommand,
    /// The landmark's popup was not already showing
    pub newly_shown: bool,
}

/// Landmarks are referred to by their index in the dataset's landmark list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    Idle,
    Hovering(HoverPoint),
    LandmarkFocused(usize),
    LandmarkClosing { landmark: usize, ticket: CloseTicket },
}

/// Interaction state owned by one chart instance.
///
/// The lightbox is orthogonal to the hover machine: opening or closing it
/// never changes [`InteractionState`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInteraction {
    state: InteractionState,
    next_ticket: u64,
    lightbox: Option<String>,
}

impl Default for ChartInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartInteraction {
    pub fn new() -> Self {
        Self {
            state: InteractionState::Idle,
            next_ticket: 0,
            lightbox: None,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Crosshair position; only set while scrubbing with no popup open
    pub fn hover_point(&self) -> Option<HoverPoint> {
        match self.state {
            InteractionState::Hovering(p) => Some(p),
            _ => None,
        }
    }

    /// Landmark whose popup is showing, including during the close delay
    pub fn active_landmark(&self) -> Option<usize> {
        match self.state {
            InteractionState::LandmarkFocused(i) => Some(i),
            InteractionState::LandmarkClosing { landmark, .. } => Some(landmark),
            _ => None,
        }
    }

    pub fn lightbox(&self) -> Option<&str> {
        self.lightbox.as_deref()
    }

    /// Pointer or touch moved over the chart. Ignored while a popup is up,
    /// since the crosshair and the popup never show together.
    pub fn pointer_moved(&mut self, point: HoverPoint) {
        if matches!(
            self.state,
            InteractionState::Idle | InteractionState::Hovering(_)
        ) {
            self.state = InteractionState::Hovering(point);
        }
    }

    /// Pointer left the chart or the touch ended.
    pub fn pointer_left(&mut self) {
        if let InteractionState::Hovering(_) = self.state {
            self.state = InteractionState::Idle;
        }
    }

    /// Mouse entered, or keyboard focus reached, landmark `index`'s marker.
    pub fn landmark_entered(&mut self, index: usize) -> LandmarkEntry {
        let was_closing = matches!(self.state, InteractionState::LandmarkClosing { .. });
        let newly_shown = self.active_landmark() != Some(index);
        self.state = InteractionState::LandmarkFocused(index);
        let timer = if was_closing {
            TimerCommand::Cancel
        } else {
            TimerCommand::Keep
        };
        LandmarkEntry { timer, newly_shown }
    }

    /// Mouse left, or focus moved off, the marker or the popup.
    /// Starts (or restarts) the close delay.
    pub fn landmark_left(&mut self) -> TimerCommand {
        let landmark = match self.state {
            InteractionState::LandmarkFocused(i) => i,
            InteractionState::LandmarkClosing { landmark, .. } => landmark,
            _ => return TimerCommand::Keep,
        };
        let ticket = CloseTicket(self.next_ticket);
        self.next_ticket += 1;
        self.state = InteractionState::LandmarkClosing { landmark, ticket };
        TimerCommand::Start {
            ticket,
            delay: LANDMARK_CLOSE_DELAY,
        }
    }

    /// Pointer reached the popup itself before the close delay ran out.
    pub fn popup_entered(&mut self) -> TimerCommand {
        match self.state {
            InteractionState::LandmarkClosing { landmark, .. } => {
                self.state = InteractionState::LandmarkFocused(landmark);
                TimerCommand::Cancel
            }
            _ => TimerCommand::Keep,
        }
    }

    pub fn popup_left(&mut self) -> TimerCommand {
        self.landmark_left()
    }

    /// The close delay for `ticket` ran out. Returns whether the popup closed.
    pub fn close_elapsed(&mut self, ticket: CloseTicket) -> bool {
        match self.state {
            InteractionState::LandmarkClosing { ticket: current, .. } if current == ticket => {
                self.state = InteractionState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn open_lightbox(&mut self, image: impl Into<String>) {
        self.lightbox = Some(image.into());
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    /// Back to a fresh state, for a new dataset or teardown.
    pub fn reset(&mut self) -> TimerCommand {
        let was_closing = matches!(self.state, InteractionState::LandmarkClosing { .. });
        self.state = InteractionState::Idle;
        self.lightbox = None;
        if was_closing {
            TimerCommand::Cancel
        } else {
            TimerCommand::Keep
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::{ElevationSample, TerrainKind, TerrainSegment};

    fn dataset() -> CourseDataset {
        CourseDataset::new(
            2.0,
            vec![
                ElevationSample::new(0.0, 1300.0),
                ElevationSample::new(1.0, 1350.0),
                ElevationSample::new(2.0, 1400.0),
            ],
            vec![TerrainSegment {
                start_km: 0.0,
                end_km: 2.0,
                kind: TerrainKind::Runnable,
            }],
            vec![],
            "#F57A2A",
        )
        .unwrap()
    }

    fn hover(distance_km: f64) -> HoverPoint {
        HoverPoint {
            x_px: distance_km * 100.0,
            distance_km,
            elevation_m: 1300.0,
        }
    }

    /// Drives a [`ChartInteraction`] against a virtual millisecond clock,
    /// applying timer commands the way the chart component does, and
    /// records every state the machine passes through.
    struct Harness {
        chart: ChartInteraction,
        now_ms: u64,
        timer: Option<(CloseTicket, u64)>,
        history: Vec<InteractionState>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                chart: ChartInteraction::new(),
                now_ms: 0,
                timer: None,
                history: vec![InteractionState::Idle],
            }
        }

        fn apply(&mut self, cmd: TimerCommand) {
            match cmd {
                TimerCommand::Keep => {}
                TimerCommand::Cancel => self.timer = None,
                TimerCommand::Start { ticket, delay } => {
                    self.timer = Some((ticket, self.now_ms + delay.as_millis() as u64));
                }
            }
            self.history.push(self.chart.state());
        }

        fn advance_to(&mut self, ms: u64) {
            if let Some((ticket, due)) = self.timer {
                if due <= ms {
                    self.now_ms = due;
                    self.timer = None;
                    self.chart.close_elapsed(ticket);
                    self.history.push(self.chart.state());
                }
            }
            self.now_ms = ms;
        }

        fn enter(&mut self, at_ms: u64, index: usize) {
            self.advance_to(at_ms);
            let entry = self.chart.landmark_entered(index);
            self.apply(entry.timer);
        }

        fn leave(&mut self, at_ms: u64) {
            self.advance_to(at_ms);
            let cmd = self.chart.landmark_left();
            self.apply(cmd);
        }

        fn enter_popup(&mut self, at_ms: u64) {
            self.advance_to(at_ms);
            let cmd = self.chart.popup_entered();
            self.apply(cmd);
        }

        fn passed_through_idle_after_start(&self) -> bool {
            self.history[1..]
                .iter()
                .any(|s| *s == InteractionState::Idle)
        }
    }

    // --- HoverPoint ---

    #[test]
    fn test_hover_point_inverse_maps_pointer() {
        let ds = dataset();
        let p = HoverPoint::from_pointer(150.0, 200.0, &ds).unwrap();
        assert!((p.distance_km - 1.5).abs() < 1e-10);
        assert!((p.elevation_m - 1375.0).abs() < 1e-10);
        assert_eq!(p.x_px, 150.0);
    }

    #[test]
    fn test_hover_point_clamps_outside_chart() {
        let ds = dataset();
        let left = HoverPoint::from_pointer(-40.0, 200.0, &ds).unwrap();
        assert_eq!(left.distance_km, 0.0);
        assert_eq!(left.x_px, 0.0);
        assert_eq!(left.elevation_m, 1300.0);

        let right = HoverPoint::from_pointer(999.0, 200.0, &ds).unwrap();
        assert_eq!(right.distance_km, 2.0);
        assert_eq!(right.x_px, 200.0);
        assert_eq!(right.elevation_m, 1400.0);
    }

    #[test]
    fn test_hover_point_needs_laid_out_chart() {
        let ds = dataset();
        assert!(HoverPoint::from_pointer(10.0, 0.0, &ds).is_none());
        assert!(HoverPoint::from_pointer(10.0, f64::NAN, &ds).is_none());
    }

    // --- hover transitions ---

    #[test]
    fn test_pointer_move_and_leave() {
        let mut chart = ChartInteraction::new();
        chart.pointer_moved(hover(0.5));
        assert_eq!(chart.hover_point(), Some(hover(0.5)));
        chart.pointer_moved(hover(1.0));
        assert_eq!(chart.hover_point(), Some(hover(1.0)));
        chart.pointer_left();
        assert_eq!(chart.state(), InteractionState::Idle);
    }

    #[test]
    fn test_landmark_focus_clears_and_blocks_hover() {
        let mut chart = ChartInteraction::new();
        chart.pointer_moved(hover(0.5));
        assert_eq!(chart.landmark_entered(1).timer, TimerCommand::Keep);
        assert_eq!(chart.hover_point(), None);
        assert_eq!(chart.active_landmark(), Some(1));

        chart.pointer_moved(hover(1.2));
        assert_eq!(chart.state(), InteractionState::LandmarkFocused(1));

        // Also blocked while the popup is closing
        chart.landmark_left();
        chart.pointer_moved(hover(1.2));
        assert_eq!(chart.hover_point(), None);
        assert_eq!(chart.active_landmark(), Some(1));
    }

    #[test]
    fn test_pointer_leave_does_not_close_popup() {
        let mut chart = ChartInteraction::new();
        chart.landmark_entered(0);
        chart.pointer_left();
        assert_eq!(chart.state(), InteractionState::LandmarkFocused(0));
    }

    // --- landmark close delay ---

    #[test]
    fn test_leave_starts_close_timer() {
        let mut chart = ChartInteraction::new();
        chart.landmark_entered(2);
        match chart.landmark_left() {
            TimerCommand::Start { ticket, delay } => {
                assert_eq!(delay, Duration::from_millis(300));
                assert_eq!(
                    chart.state(),
                    InteractionState::LandmarkClosing {
                        landmark: 2,
                        ticket
                    }
                );
                assert!(chart.close_elapsed(ticket));
                assert_eq!(chart.state(), InteractionState::Idle);
            }
            other => panic!("expected a timer start, got {:?}", other),
        }
    }

    #[test]
    fn test_leave_when_nothing_focused_is_a_no_op() {
        let mut chart = ChartInteraction::new();
        assert_eq!(chart.landmark_left(), TimerCommand::Keep);
        assert_eq!(chart.popup_entered(), TimerCommand::Keep);
        assert_eq!(chart.state(), InteractionState::Idle);
    }

    #[test]
    fn test_reenter_within_delay_never_flickers() {
        let mut h = Harness::new();
        h.enter(0, 1);
        h.leave(0);
        h.enter(150, 1);
        h.advance_to(1_000);
        assert_eq!(h.chart.state(), InteractionState::LandmarkFocused(1));
        assert!(!h.passed_through_idle_after_start());
        assert!(h.timer.is_none());
    }

    #[test]
    fn test_marker_to_popup_keeps_popup_open() {
        let mut h = Harness::new();
        h.enter(0, 0);
        h.leave(100);
        h.enter_popup(250);
        h.advance_to(2_000);
        assert_eq!(h.chart.state(), InteractionState::LandmarkFocused(0));
        assert!(!h.passed_through_idle_after_start());
    }

    #[test]
    fn test_leaving_popup_closes_after_delay() {
        let mut h = Harness::new();
        h.enter(0, 3);
        h.leave(10);
        h.enter_popup(100);
        let cmd = h.chart.popup_left();
        h.apply(cmd);
        h.advance_to(399);
        assert_eq!(h.chart.active_landmark(), Some(3));
        h.advance_to(400);
        assert_eq!(h.chart.state(), InteractionState::Idle);
    }

    #[test]
    fn test_popup_closes_when_not_reentered() {
        let mut h = Harness::new();
        h.enter(0, 0);
        h.leave(50);
        h.advance_to(349);
        assert_eq!(h.chart.active_landmark(), Some(0));
        h.advance_to(350);
        assert_eq!(h.chart.state(), InteractionState::Idle);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut chart = ChartInteraction::new();
        chart.landmark_entered(0);
        let TimerCommand::Start { ticket: stale, .. } = chart.landmark_left() else {
            panic!("expected a timer start");
        };
        chart.landmark_entered(0);
        let TimerCommand::Start { ticket: fresh, .. } = chart.landmark_left() else {
            panic!("expected a timer start");
        };
        assert_ne!(stale, fresh);
        // A timer the host failed to cancel fires late
        assert!(!chart.close_elapsed(stale));
        assert_eq!(chart.active_landmark(), Some(0));
        assert!(chart.close_elapsed(fresh));
    }

    #[test]
    fn test_switching_landmarks_cancels_pending_close() {
        let mut chart = ChartInteraction::new();
        chart.landmark_entered(0);
        chart.landmark_left();
        assert_eq!(chart.landmark_entered(1).timer, TimerCommand::Cancel);
        assert_eq!(chart.state(), InteractionState::LandmarkFocused(1));
    }

    // --- landmark viewed ---

    #[test]
    fn test_first_focus_is_newly_shown() {
        let mut chart = ChartInteraction::new();
        assert!(chart.landmark_entered(0).newly_shown);

        let mut chart = ChartInteraction::new();
        chart.pointer_moved(hover(0.4));
        assert!(chart.landmark_entered(2).newly_shown);
    }

    #[test]
    fn test_reentering_open_or_closing_landmark_is_not_newly_shown() {
        let mut chart = ChartInteraction::new();
        chart.landmark_entered(1);
        assert!(!chart.landmark_entered(1).newly_shown);

        chart.landmark_left();
        let entry = chart.landmark_entered(1);
        assert!(!entry.newly_shown);
        assert_eq!(entry.timer, TimerCommand::Cancel);
    }

    #[test]
    fn test_switching_landmarks_is_newly_shown() {
        let mut chart = ChartInteraction::new();
        chart.landmark_entered(0);
        assert!(chart.landmark_entered(1).newly_shown);

        chart.landmark_left();
        assert!(chart.landmark_entered(0).newly_shown);
    }

    #[test]
    fn test_focus_after_close_is_newly_shown_again() {
        let mut h = Harness::new();
        h.enter(0, 2);
        h.leave(10);
        h.advance_to(500);
        assert_eq!(h.chart.state(), InteractionState::Idle);
        assert!(h.chart.landmark_entered(2).newly_shown);
    }

    // --- lightbox & reset ---

    #[test]
    fn test_lightbox_is_independent_of_hover_state() {
        let mut chart = ChartInteraction::new();
        chart.landmark_entered(1);
        chart.open_lightbox("https://example.com/peak.jpg");
        assert_eq!(chart.lightbox(), Some("https://example.com/peak.jpg"));
        assert_eq!(chart.state(), InteractionState::LandmarkFocused(1));

        chart.landmark_left();
        assert!(chart.lightbox().is_some());
        chart.close_lightbox();
        assert!(chart.lightbox().is_none());
        assert_eq!(chart.active_landmark(), Some(1));
    }

    #[test]
    fn test_reset_cancels_timer_and_clears_everything() {
        let mut chart = ChartInteraction::new();
        chart.landmark_entered(2);
        let TimerCommand::Start { ticket, .. } = chart.landmark_left() else {
            panic!("expected a timer start");
        };
        chart.open_lightbox("img");
        assert_eq!(chart.reset(), TimerCommand::Cancel);
        assert_eq!(chart.state(), InteractionState::Idle);
        assert!(chart.lightbox().is_none());
        // A timer from before the reset can't resurrect anything
        assert!(!chart.close_elapsed(ticket));

        chart.pointer_moved(hover(1.0));
        assert_eq!(chart.reset(), TimerCommand::Keep);
        assert_eq!(chart.hover_point(), None);
    }
}
