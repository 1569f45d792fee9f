//=========================================================================
// Game Views
//=========================================================================
//
// Presentation models attached to an engine. A view observes behavior
// events and turns the current session into a `Hud`; drawing it is the
// host's business.
//
// Variants:
//   TimeView           → chronometer counting up (Death to the King)
//   TimeDecreasingView → remaining time with low-time warning
//   TutorialView       → current tutorial message
//
//=========================================================================

//=== Module Declarations =================================================

mod hud;

//=== Public API ==========================================================

pub use hud::{format_clock, FeedbackLog, Hud};

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::behavior::{BehaviorEvent, SessionRef};
use crate::core::information::GameInformation;

//=== GameViewKind ========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameViewKind {
    Time,
    TimeDecreasing,
    Tutorial,
}

//=== GameView Trait ======================================================

pub trait GameView: Send {
    fn kind(&self) -> GameViewKind;

    /// Observes an event drained from the behavior.
    fn on_event(&mut self, event: &BehaviorEvent);

    fn hud(&self, session: SessionRef<'_>) -> Hud;
}

/// Fields every view fills the same way.
fn base_hud(info: &GameInformation, feedback: &FeedbackLog) -> Hud {
    Hud {
        score: info.score.score,
        ammunition: info.weapon.current_ammunition(),
        ammunition_limit: info.weapon.ammunition_limit(),
        visible_targets: info.targets().len(),
        feedback: feedback.lines(),
        ..Hud::default()
    }
}

fn clock_of(session: SessionRef<'_>) -> Option<Duration> {
    match session {
        SessionRef::Timed(timed) => Some(timed.current_time),
        SessionRef::Tutorial(_) => None,
    }
}

//=== TimeView ============================================================

#[derive(Debug, Default)]
pub struct TimeView {
    feedback: FeedbackLog,
}

impl TimeView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameView for TimeView {
    fn kind(&self) -> GameViewKind {
        GameViewKind::Time
    }

    fn on_event(&mut self, event: &BehaviorEvent) {
        self.feedback.record(event);
    }

    fn hud(&self, session: SessionRef<'_>) -> Hud {
        let mut hud = base_hud(session.info(), &self.feedback);
        hud.clock = clock_of(session).map(format_clock);
        hud
    }
}

//=== TimeDecreasingView ==================================================

#[derive(Debug)]
pub struct TimeDecreasingView {
    feedback: FeedbackLog,
    warning_threshold: Duration,
}

impl TimeDecreasingView {
    pub const DEFAULT_WARNING_THRESHOLD: Duration = Duration::from_secs(10);

    pub fn new() -> Self {
        Self {
            feedback: FeedbackLog::default(),
            warning_threshold: Self::DEFAULT_WARNING_THRESHOLD,
        }
    }

    pub fn with_warning_threshold(mut self, threshold: Duration) -> Self {
        self.warning_threshold = threshold;
        self
    }
}

impl Default for TimeDecreasingView {
    fn default() -> Self {
        Self::new()
    }
}

impl GameView for TimeDecreasingView {
    fn kind(&self) -> GameViewKind {
        GameViewKind::TimeDecreasing
    }

    fn on_event(&mut self, event: &BehaviorEvent) {
        self.feedback.record(event);
    }

    fn hud(&self, session: SessionRef<'_>) -> Hud {
        let mut hud = base_hud(session.info(), &self.feedback);
        if let Some(remaining) = clock_of(session) {
            hud.clock = Some(format_clock(remaining));
            hud.warning = remaining <= self.warning_threshold;
        }
        hud
    }
}

//=== TutorialView ========================================================

#[derive(Debug, Default)]
pub struct TutorialView {
    feedback: FeedbackLog,
}

impl TutorialView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameView for TutorialView {
    fn kind(&self) -> GameViewKind {
        GameViewKind::Tutorial
    }

    fn on_event(&mut self, event: &BehaviorEvent) {
        self.feedback.record(event);
    }

    fn hud(&self, session: SessionRef<'_>) -> Hud {
        let mut hud = base_hud(session.info(), &self.feedback);
        if let SessionRef::Tutorial(tutorial) = session {
            hud.message = Some(tutorial.step.message().to_string());
        }
        hud
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::information::{TimedInformation, TutorialInformation, TutorialStep};
    use crate::core::mode::GameMode;
    use crate::core::weapon::WeaponFactory;

    fn timed(remaining: Duration) -> TimedInformation {
        let mut timed = TimedInformation::new(
            GameMode::sprint(),
            WeaponFactory::create_basic_weapon(),
            Duration::from_secs(30),
        );
        timed.current_time = remaining;
        timed
    }

    #[test]
    fn decreasing_view_warns_when_low() {
        let view = TimeDecreasingView::new();

        let plenty = timed(Duration::from_secs(25));
        let hud = view.hud(SessionRef::Timed(&plenty));
        assert_eq!(hud.clock.as_deref(), Some("00:25"));
        assert!(!hud.warning);

        let low = timed(Duration::from_secs(9));
        assert!(view.hud(SessionRef::Timed(&low)).warning);
    }

    #[test]
    fn warning_threshold_is_configurable() {
        let view = TimeDecreasingView::new().with_warning_threshold(Duration::from_secs(20));
        let state = timed(Duration::from_secs(15));
        assert!(view.hud(SessionRef::Timed(&state)).warning);

        let state = timed(Duration::from_secs(21));
        assert!(!view.hud(SessionRef::Timed(&state)).warning);
    }

    #[test]
    fn time_view_never_warns() {
        let view = TimeView::new();
        let low = timed(Duration::from_secs(1));
        let hud = view.hud(SessionRef::Timed(&low));
        assert!(!hud.warning);
        assert_eq!(hud.ammunition, 8);
    }

    #[test]
    fn tutorial_view_shows_step_message() {
        let view = TutorialView::new();
        let mut tutorial =
            TutorialInformation::new(GameMode::tutorial(), WeaponFactory::create_basic_weapon());
        tutorial.step = TutorialStep::Ammo;

        let hud = view.hud(SessionRef::Tutorial(&tutorial));
        assert_eq!(hud.message.as_deref(), Some(TutorialStep::Ammo.message()));
        assert!(hud.clock.is_none());
    }

    #[test]
    fn views_collect_feedback() {
        let mut view = TimeView::new();
        view.on_event(&BehaviorEvent::OutOfAmmo);
        let state = timed(Duration::from_secs(3));
        assert_eq!(view.hud(SessionRef::Timed(&state)).feedback, vec!["Out of ammo"]);
    }
}
