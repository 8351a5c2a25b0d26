//! Title screen: Start, Tutorial, Quit.

use super::Transition;
use crate::geometry::{Rect, Vec2, Viewport};
use crate::input::PointerState;
use crate::widgets::{Button, ButtonStyle};

pub const TITLE: &str = "Fallacy Quest";

#[derive(Clone, Debug, PartialEq)]
pub struct MenuScreen {
    pub title_pos: Vec2,
    pub start: Button,
    pub tutorial: Button,
    pub quit: Button,
}

fn menu_button(vp: &Viewport, fy: f64) -> Rect {
    Rect::centered(vp.frac(0.5, fy), vp.sx(100.0), vp.sy(50.0))
}

impl MenuScreen {
    pub fn new(vp: &Viewport) -> Self {
        let mut menu = Self {
            title_pos: Vec2::default(),
            start: Button::new(Rect::default(), "Start", ButtonStyle::Neutral),
            tutorial: Button::new(Rect::default(), "Tutorial", ButtonStyle::Neutral),
            quit: Button::new(Rect::default(), "Quit", ButtonStyle::Neutral),
        };
        menu.relayout(vp);
        menu
    }

    pub fn relayout(&mut self, vp: &Viewport) {
        self.title_pos = vp.frac(0.5, 2.5 / 11.0);
        self.start.rect = menu_button(vp, 5.0 / 11.0);
        self.tutorial.rect = menu_button(vp, 7.0 / 11.0);
        self.quit.rect = menu_button(vp, 9.0 / 11.0);
    }

    pub fn update(&mut self, p: &PointerState) -> Option<Transition> {
        if self.start.update(p) {
            return Some(Transition::StartRound { tutorial: false });
        }
        if self.tutorial.update(p) {
            return Some(Transition::StartRound { tutorial: true });
        }
        if self.quit.update(p) {
            return Some(Transition::Quit);
        }
        None
    }

    pub fn buttons(&self) -> [&Button; 3] {
        [&self.start, &self.tutorial, &self.quit]
    }
}
