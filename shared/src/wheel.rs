use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::animator::SpinAnimation;
use crate::config::WheelConfig;
use crate::entrants::Roster;
use crate::error::WheelError;
use crate::palette::segment_color;
use crate::picker::{plan_spin, SpinPlan};
use crate::resolver::resolve_index;

/// Snapshot of the wheel that hosts render from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelState {
    pub current_rotation: f64,
    pub is_spinning: bool,
    pub last_winner_index: Option<usize>,
}

/// Delivered once per completed spin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub winner_index: usize,
    pub winner_name: String,
    pub final_angle: f64,
}

impl SpinOutcome {
    /// Color of the winning segment. Duplicate names keep their own colors.
    pub fn color(&self) -> &'static str {
        segment_color(self.winner_index)
    }
}

pub type WinnerListener = Box<dyn FnMut(&SpinOutcome)>;

struct InFlight {
    plan: SpinPlan,
    animation: SpinAnimation,
}

/// Owns the rotation angle and the spin lifecycle of one wheel. The angle is
/// only ever written here, and at most one spin is in flight: requests made
/// while spinning are rejected.
pub struct Wheel {
    roster: Roster,
    config: WheelConfig,
    rotation: f64,
    in_flight: Option<InFlight>,
    last_winner_index: Option<usize>,
    listener: Option<WinnerListener>,
}

impl Wheel {
    pub fn new(roster: Roster, config: WheelConfig) -> Self {
        Self {
            roster,
            config,
            rotation: 0.0,
            in_flight: None,
            last_winner_index: None,
            listener: None,
        }
    }

    pub fn with_listener(mut self, listener: impl FnMut(&SpinOutcome) + 'static) -> Self {
        self.set_listener(listener);
        self
    }

    /// Replaces the single winner listener slot.
    pub fn set_listener(&mut self, listener: impl FnMut(&SpinOutcome) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn last_winner_index(&self) -> Option<usize> {
        self.last_winner_index
    }

    pub fn state(&self) -> WheelState {
        WheelState {
            current_rotation: self.rotation,
            is_spinning: self.is_spinning(),
            last_winner_index: self.last_winner_index,
        }
    }

    pub fn set_roster(&mut self, roster: Roster) -> Result<(), WheelError> {
        if self.is_spinning() {
            return Err(WheelError::RosterLocked);
        }
        if roster != self.roster {
            log::info!("Roster updated: {} entrants", roster.len());
            self.last_winner_index = None;
        }
        self.roster = roster;
        Ok(())
    }

    pub fn request_spin<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now_ms: f64,
    ) -> Result<SpinPlan, WheelError> {
        if self.is_spinning() {
            log::debug!("Spin requested while another is in flight, ignoring");
            return Err(WheelError::SpinInProgress);
        }

        let plan = plan_spin(
            rng,
            self.roster.len(),
            self.rotation,
            self.config.min_spins,
            self.config.max_spins,
        );
        let animation =
            SpinAnimation::new(plan.start_angle, plan.target_angle, now_ms, self.config.spin_duration_ms);

        log::info!("Spin started with {} entrants", self.roster.len());
        self.last_winner_index = None;
        self.in_flight = Some(InFlight { plan, animation });
        Ok(plan)
    }

    /// Frame path: samples the eased angle and completes the spin once the
    /// animation window has elapsed. Returns the angle to draw.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let Some(in_flight) = &self.in_flight else {
            return self.rotation;
        };

        let angle = in_flight.animation.angle_at(now_ms);
        // never step backwards, even if the clock does
        self.rotation = self.rotation.max(angle);
        if in_flight.animation.is_complete(now_ms) {
            self.complete();
        }
        self.rotation
    }

    /// Deadline path: completes an in-flight spin regardless of whether any
    /// frames were delivered. A no-op once the spin has already resolved.
    pub fn finish(&mut self) -> Option<SpinOutcome> {
        if self.in_flight.is_none() {
            return None;
        }
        log::debug!("Spin completed by deadline");
        self.complete()
    }

    fn complete(&mut self) -> Option<SpinOutcome> {
        let InFlight { plan, animation } = self.in_flight.take()?;
        self.rotation = animation.target_angle();

        let resolved = resolve_index(self.rotation, self.roster.len());
        if resolved != plan.winner_index {
            log::error!(
                "Resolved index {} differs from planned {} at angle {}",
                resolved,
                plan.winner_index,
                self.rotation
            );
        }

        let winner_name = self.roster.name(resolved).unwrap_or_default().to_string();
        let outcome = SpinOutcome { winner_index: resolved, winner_name, final_angle: self.rotation };
        self.last_winner_index = Some(resolved);

        log::info!("Winner: {} (segment {})", outcome.winner_name, outcome.winner_index);
        if let Some(listener) = self.listener.as_mut() {
            listener(&outcome);
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn names(list: &[&str]) -> Roster {
        Roster::new(list.iter().map(|s| s.to_string()).collect())
    }

    fn recording_wheel(roster: Roster) -> (Wheel, Rc<RefCell<Vec<SpinOutcome>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let wheel = Wheel::new(roster, WheelConfig::default())
            .with_listener(move |outcome| sink.borrow_mut().push(outcome.clone()));
        (wheel, seen)
    }

    #[test]
    fn test_frames_complete_spin_once() {
        let (mut wheel, seen) = recording_wheel(names(&["A", "B", "C"]));
        let mut rng = StdRng::seed_from_u64(3);
        let plan = wheel.request_spin(&mut rng, 0.0).unwrap();
        assert!(wheel.is_spinning());

        let mut now = 0.0;
        while now <= 4_100.0 {
            wheel.tick(now);
            now += 16.0;
        }
        assert!(!wheel.is_spinning());
        assert_eq!(wheel.finish(), None);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].winner_index, plan.winner_index);
        assert_eq!(seen[0].final_angle, plan.target_angle);
        assert_eq!(wheel.rotation(), plan.target_angle);
        assert_eq!(wheel.last_winner_index(), Some(plan.winner_index));
    }

    #[test]
    fn test_throttled_frames_fall_back_to_deadline() {
        let (mut wheel, seen) = recording_wheel(names(&["A", "B", "C", "D"]));
        let mut rng = StdRng::seed_from_u64(11);
        let plan = wheel.request_spin(&mut rng, 0.0).unwrap();

        // one frame, then the tab is backgrounded
        wheel.tick(16.0);
        let outcome = wheel.finish().unwrap();
        assert_eq!(outcome.winner_index, plan.winner_index);
        assert_eq!(outcome.winner_name, ["A", "B", "C", "D"][plan.winner_index]);

        // late frames delivered after the deadline do not resolve again
        wheel.tick(5_000.0);
        wheel.tick(9_000.0);
        assert_eq!(wheel.finish(), None);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(wheel.rotation(), plan.target_angle);
    }

    #[test]
    fn test_no_frames_at_all() {
        let (mut wheel, seen) = recording_wheel(names(&["Solo", "Duo"]));
        let mut rng = StdRng::seed_from_u64(5);
        wheel.request_spin(&mut rng, 0.0).unwrap();
        assert!(wheel.finish().is_some());
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_rejects_spin_while_spinning() {
        let (mut wheel, seen) = recording_wheel(names(&["A", "B"]));
        let mut rng = StdRng::seed_from_u64(9);
        let first = wheel.request_spin(&mut rng, 0.0).unwrap();
        let mid = wheel.tick(2_000.0);

        assert_eq!(wheel.request_spin(&mut rng, 2_000.0), Err(WheelError::SpinInProgress));
        // the rejected request leaves the trajectory untouched
        assert_eq!(wheel.tick(2_000.0), mid);

        wheel.tick(4_000.0);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].winner_index, first.winner_index);

        let second = wheel.request_spin(&mut rng, 5_000.0).unwrap();
        assert_eq!(second.start_angle, first.target_angle);
        wheel.tick(9_000.0);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_rotation_never_decreases_across_spins() {
        let (mut wheel, _) = recording_wheel(names(&["A", "B", "C", "D", "E"]));
        let mut rng = StdRng::seed_from_u64(21);
        let mut previous = wheel.rotation();
        for round in 0..20 {
            let start = round as f64 * 10_000.0;
            wheel.request_spin(&mut rng, start).unwrap();
            let mut now = start;
            while wheel.is_spinning() {
                let angle = wheel.tick(now);
                assert!(angle >= previous);
                previous = angle;
                now += 33.0;
            }
        }
    }

    #[test]
    fn test_roster_locked_while_spinning() {
        let (mut wheel, seen) = recording_wheel(names(&["A", "B"]));
        let mut rng = StdRng::seed_from_u64(2);
        wheel.request_spin(&mut rng, 0.0).unwrap();
        assert_eq!(wheel.set_roster(names(&["X"])), Err(WheelError::RosterLocked));
        wheel.finish();
        assert!(["A", "B"].contains(&seen.borrow()[0].winner_name.as_str()));

        wheel.set_roster(names(&["X"])).unwrap();
        assert_eq!(wheel.roster().names(), ["X"]);
        assert_eq!(wheel.last_winner_index(), None);
    }

    #[test]
    fn test_empty_roster_still_resolves() {
        let (mut wheel, seen) = recording_wheel(Roster::new(Vec::new()));
        assert_eq!(wheel.roster().len(), 1);
        let mut rng = StdRng::seed_from_u64(4);
        wheel.request_spin(&mut rng, 0.0).unwrap();
        wheel.tick(4_000.0);
        assert_eq!(seen.borrow()[0].winner_index, 0);
        assert_eq!(seen.borrow()[0].winner_name, crate::constants::PLACEHOLDER_NAME);
    }

    #[test]
    fn test_state_snapshot() {
        let mut wheel = Wheel::new(names(&["A", "B", "C"]), WheelConfig::default());
        assert_eq!(
            wheel.state(),
            WheelState { current_rotation: 0.0, is_spinning: false, last_winner_index: None }
        );
        let mut rng = StdRng::seed_from_u64(8);
        wheel.request_spin(&mut rng, 0.0).unwrap();
        assert!(wheel.state().is_spinning);
        let outcome = wheel.finish().unwrap();
        assert_eq!(wheel.state().last_winner_index, Some(outcome.winner_index));
    }

    #[test]
    fn test_duplicate_names_are_separate_segments() {
        let (mut wheel, seen) = recording_wheel(names(&["A", "B", "A"]));
        let mut rng = StdRng::seed_from_u64(13);
        let mut now = 0.0;
        while !seen.borrow().iter().any(|o| o.winner_index == 2) {
            wheel.request_spin(&mut rng, now).unwrap();
            wheel.finish();
            now += 5_000.0;
            assert!(now < 500_000.0, "segment 2 never won");
        }

        let last = seen.borrow().last().cloned().unwrap();
        assert_eq!(last.winner_name, "A");
        assert_eq!(last.color(), segment_color(2));
        assert_ne!(last.color(), segment_color(0));
        let arcs = crate::renderer::layout(wheel.roster(), last.final_angle);
        assert_eq!(arcs[2].color, last.color());
    }

    #[test]
    fn test_duplicate_names_share_one_ledger_record() {
        let (mut wheel, seen) = recording_wheel(names(&["A", "A"]));
        let mut rng = StdRng::seed_from_u64(17);
        for round in 0..40 {
            wheel.request_spin(&mut rng, round as f64 * 5_000.0).unwrap();
            wheel.finish();
        }

        let seen = seen.borrow();
        assert_eq!(seen.len(), 40);
        assert!(seen.iter().any(|o| o.winner_index == 0));
        assert!(seen.iter().any(|o| o.winner_index == 1));

        let mut ledger = crate::ledger::ScoreLedger::default();
        for outcome in seen.iter() {
            assert_eq!(outcome.winner_name, "A");
            ledger.record_win(&outcome.winner_name);
        }
        let records = ledger.all_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].win_count, 40);
        assert_eq!(records[0].points, 200);
    }
}
