//=========================================================================
// Routine Scheduler
//=========================================================================
//
// Tracks the phase of each registered routine and turns an elapsed time
// into the ordered list of firings that became due.
//
// Ordering: chronological; routines due at the same instant fire in
// registration order. Long gaps are caught up, never skipped.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{Routine, RoutineFiring};
use crate::error::{GameError, Result};

//=== RoutineSlot =========================================================

#[derive(Debug, Clone)]
struct RoutineSlot {
    routine: Routine,
    until_due: Duration,
    since_last: Duration,
}

impl RoutineSlot {
    fn new(routine: Routine) -> Self {
        Self {
            routine,
            until_due: routine.interval,
            since_last: Duration::ZERO,
        }
    }

    fn pass(&mut self, time: Duration) {
        self.until_due -= time;
        self.since_last += time;
    }
}

//=== RoutineScheduler ====================================================

#[derive(Debug, Clone, Default)]
pub struct RoutineScheduler {
    slots: Vec<RoutineSlot>,
    running: bool,
}

impl RoutineScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Registration -----------------------------------------------------

    /// Registers a routine; its first firing is one interval from now.
    pub fn add_routine(&mut self, routine: Routine) -> Result<()> {
        if routine.interval.is_zero() {
            return Err(GameError::InvalidRoutineInterval);
        }
        debug!("Registering {:?} routine every {:?}", routine.kind, routine.interval);
        self.slots.push(RoutineSlot::new(routine));
        Ok(())
    }

    pub fn routines(&self) -> impl Iterator<Item = &Routine> {
        self.slots.iter().map(|slot| &slot.routine)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    //--- Lifecycle --------------------------------------------------------

    /// Starts (or resumes) time accounting. Phases survive a stop/start.
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Puts every routine back at the start of its interval.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            *slot = RoutineSlot::new(slot.routine);
        }
    }

    //--- Time -------------------------------------------------------------

    /// Advances the clock and returns every firing that became due.
    ///
    /// A stopped scheduler ignores the elapsed time entirely.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<RoutineFiring> {
        let mut firings = Vec::new();
        if !self.running {
            return firings;
        }

        let mut budget = elapsed;
        loop {
            let next = self
                .slots
                .iter()
                .enumerate()
                .min_by_key(|(index, slot)| (slot.until_due, *index))
                .map(|(index, slot)| (index, slot.until_due));

            let Some((index, due)) = next else { break };
            if due > budget {
                break;
            }

            for slot in &mut self.slots {
                slot.pass(due);
            }
            budget -= due;

            let slot = &mut self.slots[index];
            firings.push(RoutineFiring {
                kind: slot.routine.kind,
                elapsed: slot.since_last,
            });
            slot.since_last = Duration::ZERO;
            slot.until_due = slot.routine.interval;
        }

        for slot in &mut self.slots {
            slot.pass(budget);
        }

        firings
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::routine::RoutineKind;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn kinds(firings: &[RoutineFiring]) -> Vec<RoutineKind> {
        firings.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn zero_interval_is_rejected() {
        let mut scheduler = RoutineScheduler::new();
        let err = scheduler
            .add_routine(Routine::new(RoutineKind::Spawner, Duration::ZERO))
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidRoutineInterval));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn stopped_scheduler_does_not_fire() {
        let mut scheduler = RoutineScheduler::new();
        scheduler.add_routine(Routine::ticker(ms(100))).unwrap();
        assert!(!scheduler.is_running());
        assert!(scheduler.advance(ms(1000)).is_empty());

        scheduler.start();
        assert!(scheduler.is_running());
        assert_eq!(scheduler.advance(ms(100)).len(), 1);

        scheduler.stop();
        assert!(!scheduler.is_running());
    }

    #[test]
    fn fires_once_per_interval_across_small_steps() {
        let mut scheduler = RoutineScheduler::new();
        scheduler.add_routine(Routine::ticker(ms(1000))).unwrap();
        scheduler.start();

        let mut total = 0;
        for _ in 0..60 {
            total += scheduler.advance(ms(50)).len();
        }
        assert_eq!(total, 3);
    }

    #[test]
    fn catch_up_emits_every_missed_firing() {
        let mut scheduler = RoutineScheduler::new();
        scheduler.add_routine(Routine::ticker(ms(100))).unwrap();
        scheduler.start();

        let firings = scheduler.advance(ms(450));
        assert_eq!(firings.len(), 4);
        assert!(firings.iter().all(|f| f.elapsed == ms(100)));

        // Remaining 50ms carried over
        assert_eq!(scheduler.advance(ms(50)).len(), 1);
    }

    #[test]
    fn simultaneous_firings_keep_registration_order() {
        let mut scheduler = RoutineScheduler::new();
        scheduler
            .add_routine(Routine::new(RoutineKind::Reloader, ms(1000)))
            .unwrap();
        scheduler
            .add_routine(Routine::new(RoutineKind::Spawner, ms(1000)))
            .unwrap();
        scheduler.add_routine(Routine::ticker(ms(1000))).unwrap();
        scheduler.start();

        let firings = scheduler.advance(ms(1000));
        assert_eq!(
            kinds(&firings),
            vec![RoutineKind::Reloader, RoutineKind::Spawner, RoutineKind::Ticker]
        );
    }

    #[test]
    fn firings_are_chronological() {
        let mut scheduler = RoutineScheduler::new();
        scheduler.add_routine(Routine::ticker(ms(300))).unwrap();
        scheduler
            .add_routine(Routine::new(RoutineKind::Reloader, ms(200)))
            .unwrap();
        scheduler.start();

        let firings = scheduler.advance(ms(600));
        assert_eq!(
            kinds(&firings),
            vec![
                RoutineKind::Reloader, // 200
                RoutineKind::Ticker,   // 300
                RoutineKind::Reloader, // 400
                RoutineKind::Ticker,   // 600
                RoutineKind::Reloader, // 600
            ]
        );
    }

    #[test]
    fn pause_preserves_phase() {
        let mut scheduler = RoutineScheduler::new();
        scheduler.add_routine(Routine::ticker(ms(1000))).unwrap();
        scheduler.start();
        scheduler.advance(ms(700));

        scheduler.stop();
        scheduler.advance(ms(5000));
        scheduler.start();

        let firings = scheduler.advance(ms(300));
        assert_eq!(firings.len(), 1);
        assert_eq!(firings[0].elapsed, ms(1000));
    }

    #[test]
    fn reset_restarts_intervals() {
        let mut scheduler = RoutineScheduler::new();
        scheduler.add_routine(Routine::ticker(ms(1000))).unwrap();
        scheduler.start();
        scheduler.advance(ms(900));
        scheduler.reset();
        assert!(scheduler.advance(ms(900)).is_empty());
        assert_eq!(scheduler.advance(ms(100)).len(), 1);
    }
}
