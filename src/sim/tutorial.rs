//! Onboarding tutorial
//!
//! Three stages, advanced by the player's first move and first shot. Each stage has a
//! popup message that fades out when the stage is completed and back in with the next
//! stage's text.

use crate::consts::POPUP_FADE_RATE;

/// Tutorial progress. Only ever advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TutorialStage {
    LearningToMove,
    LearningToShoot,
    FinishedLearning,
}

impl TutorialStage {
    pub fn message(self) -> &'static str {
        match self {
            TutorialStage::LearningToMove => "'W', 'S', 'A' or 'D' to move around.",
            TutorialStage::LearningToShoot => "'LEFT MOUSE CLICK' to shoot.",
            TutorialStage::FinishedLearning => "",
        }
    }
}

/// Fade transition reported by [`Popup::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeEvent {
    FadedIn,
    FadedOut,
}

/// Fading text message
#[derive(Debug, Clone)]
pub struct Popup {
    pub text: &'static str,
    pub alpha: f32,
    /// Alpha change per second; zero when idle
    dalpha: f32,
}

impl Popup {
    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            alpha: 0.0,
            dalpha: 0.0,
        }
    }

    pub fn fade_in(&mut self) {
        self.dalpha = POPUP_FADE_RATE;
    }

    pub fn fade_out(&mut self) {
        self.dalpha = -POPUP_FADE_RATE;
    }

    pub fn is_fading(&self) -> bool {
        self.dalpha != 0.0
    }

    /// Advance the fade. Returns the transition when a bound is reached.
    pub fn update(&mut self, dt: f32) -> Option<FadeEvent> {
        self.alpha += self.dalpha * dt;

        if self.dalpha < 0.0 && self.alpha <= 0.0 {
            self.dalpha = 0.0;
            self.alpha = 0.0;
            Some(FadeEvent::FadedOut)
        } else if self.dalpha > 0.0 && self.alpha >= 1.0 {
            self.dalpha = 0.0;
            self.alpha = 1.0;
            Some(FadeEvent::FadedIn)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tutorial {
    stage: TutorialStage,
    pub popup: Popup,
}

impl Default for Tutorial {
    fn default() -> Self {
        Self::new()
    }
}

impl Tutorial {
    pub fn new() -> Self {
        let stage = TutorialStage::LearningToMove;
        let mut popup = Popup::new(stage.message());
        popup.fade_in();
        Self { stage, popup }
    }

    pub fn stage(&self) -> TutorialStage {
        self.stage
    }

    pub fn is_finished(&self) -> bool {
        self.stage == TutorialStage::FinishedLearning
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(FadeEvent::FadedOut) = self.popup.update(dt) {
            self.popup.text = self.stage.message();
            self.popup.fade_in();
        }
    }

    pub fn player_moved(&mut self) {
        if self.stage == TutorialStage::LearningToMove {
            self.advance(TutorialStage::LearningToShoot);
        }
    }

    pub fn player_shot(&mut self) {
        if self.stage == TutorialStage::LearningToShoot {
            self.advance(TutorialStage::FinishedLearning);
        }
    }

    fn advance(&mut self, next: TutorialStage) {
        log::debug!("Tutorial: {:?} -> {:?}", self.stage, next);
        self.popup.fade_out();
        self.stage = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_fade_reports_once() {
        let mut popup = Popup::new("hi");
        popup.fade_in();
        assert_eq!(popup.update(0.5), None);
        assert_eq!(popup.update(0.6), Some(FadeEvent::FadedIn));
        assert_eq!(popup.alpha, 1.0);
        assert!(!popup.is_fading());
        // Idle afterwards
        assert_eq!(popup.update(1.0), None);

        popup.fade_out();
        assert_eq!(popup.update(2.0), Some(FadeEvent::FadedOut));
        assert_eq!(popup.alpha, 0.0);
        assert_eq!(popup.update(1.0), None);
    }

    #[test]
    fn test_stages_only_advance() {
        let mut tutorial = Tutorial::new();
        assert_eq!(tutorial.stage(), TutorialStage::LearningToMove);

        // Shooting before moving is ignored
        tutorial.player_shot();
        assert_eq!(tutorial.stage(), TutorialStage::LearningToMove);

        tutorial.player_moved();
        tutorial.player_moved();
        assert_eq!(tutorial.stage(), TutorialStage::LearningToShoot);

        tutorial.player_shot();
        assert_eq!(tutorial.stage(), TutorialStage::FinishedLearning);

        for _ in 0..3 {
            tutorial.player_moved();
            tutorial.player_shot();
        }
        assert!(tutorial.is_finished());
    }

    #[test]
    fn test_message_swaps_after_fade_out() {
        let mut tutorial = Tutorial::new();
        tutorial.update(1.0);
        assert_eq!(tutorial.popup.alpha, 1.0);

        tutorial.player_moved();
        // Old text stays up while fading out
        tutorial.update(0.5);
        assert_eq!(tutorial.popup.text, TutorialStage::LearningToMove.message());

        tutorial.update(0.6);
        assert_eq!(tutorial.popup.text, TutorialStage::LearningToShoot.message());
        assert!(tutorial.popup.is_fading());
        assert_eq!(tutorial.popup.alpha, 0.0);
    }
}
