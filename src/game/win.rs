//! End-of-round screen.

use super::Transition;
use crate::geometry::{Rect, Vec2, Viewport};
use crate::input::PointerState;
use crate::widgets::{Button, ButtonStyle};

pub const CONGRATS: &str = "Congratulations!";

#[derive(Clone, Debug, PartialEq)]
pub struct WinScreen {
    pub score: f64,
    /// Replay restarts the same kind of round.
    pub tutorial: bool,
    pub congrats_pos: Vec2,
    pub score_pos: Vec2,
    pub menu: Button,
    pub replay: Button,
}

impl WinScreen {
    pub fn new(score: f64, tutorial: bool, vp: &Viewport) -> Self {
        let mut win = Self {
            score,
            tutorial,
            congrats_pos: Vec2::default(),
            score_pos: Vec2::default(),
            menu: Button::new(Rect::default(), "Menu", ButtonStyle::Neutral),
            replay: Button::new(Rect::default(), "Replay", ButtonStyle::Confirm),
        };
        win.relayout(vp);
        win
    }

    pub fn relayout(&mut self, vp: &Viewport) {
        self.congrats_pos = vp.frac(0.5, 0.2);
        self.score_pos = vp.frac(0.5, 0.4);
        let cx = vp.width / 2.0;
        let cy = vp.height * 0.8;
        self.menu.rect = Rect::new(cx - vp.sx(210.0), cy - vp.sy(50.0), cx - vp.sx(10.0), cy + vp.sy(50.0));
        self.replay.rect = Rect::new(cx + vp.sx(10.0), cy - vp.sy(50.0), cx + vp.sx(210.0), cy + vp.sy(50.0));
    }

    pub fn score_text(&self) -> String {
        format!("Score: {:.2}", self.score)
    }

    pub fn update(&mut self, p: &PointerState) -> Option<Transition> {
        if self.menu.update(p) {
            return Some(Transition::ToMenu);
        }
        if self.replay.update(p) {
            return Some(Transition::StartRound {
                tutorial: self.tutorial,
            });
        }
        None
    }
}
