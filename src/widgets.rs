//! Immediate-mode style widgets driven by a per-frame [`PointerState`].

use crate::geometry::{Rect, Vec2, Viewport};
use crate::input::PointerState;
use crate::layout::PassageLayout;

/// Visual role of a button; the renderer maps it to colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Menu / navigation (sandy brown).
    Neutral,
    /// Check / Replay (green).
    Confirm,
    /// Skip (red).
    Danger,
    /// Continue / Next (blue).
    Proceed,
    /// Transparent; used once a question is solved.
    Inert,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub style: ButtonStyle,
    pub enabled: bool,
    /// Pressed on this button and not yet released.
    pub held: bool,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>, style: ButtonStyle) -> Self {
        Self {
            rect,
            label: label.into(),
            style,
            enabled: true,
            held: false,
        }
    }

    /// Advance one frame. Returns `true` when the button was clicked: pressed
    /// on it and released while still over it.
    pub fn update(&mut self, p: &PointerState) -> bool {
        if !self.enabled {
            self.held = false;
            return false;
        }
        if p.just_pressed && self.rect.contains(p.pos) {
            self.held = true;
        }
        if self.held && !p.down {
            self.held = false;
            return p.just_released && self.rect.contains(p.pos);
        }
        false
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadioOption {
    pub key: &'static str,
    pub label: String,
    pub hit: Button,
}

/// Vertical column of mutually exclusive options.
#[derive(Clone, Debug, PartialEq)]
pub struct RadioGroup {
    pub options: Vec<RadioOption>,
    pub selected: Option<usize>,
    pub center: Vec2,
    pub radius: f64,
    pub spacing: f64,
}

impl RadioGroup {
    pub const SPACING: f64 = 30.0;
    pub const RADIUS: f64 = 10.0;

    pub fn new(options: impl IntoIterator<Item = (&'static str, String)>) -> Self {
        let options = options
            .into_iter()
            .map(|(key, label)| RadioOption {
                key,
                label,
                hit: Button::new(Rect::default(), "", ButtonStyle::Inert),
            })
            .collect();
        Self {
            options,
            selected: None,
            center: Vec2::default(),
            radius: Self::RADIUS,
            spacing: Self::SPACING,
        }
    }

    /// Position the column so its middle option sits on `center`.
    pub fn layout(&mut self, vp: &Viewport, center: Vec2) {
        self.center = center;
        self.radius = vp.sy(Self::RADIUS);
        self.spacing = vp.sy(Self::SPACING);
        let mid = (self.options.len() as f64 - 1.0) / 2.0;
        for (i, opt) in self.options.iter_mut().enumerate() {
            let c = Vec2::new(center.x, center.y + self.spacing * (i as f64 - mid));
            opt.hit.rect = Rect::centered(c, vp.sx(Self::RADIUS), vp.sy(Self::RADIUS));
        }
    }

    pub fn option_center(&self, i: usize) -> Vec2 {
        self.options[i].hit.rect.center()
    }

    /// Returns `true` when the selection changed this frame.
    pub fn update(&mut self, p: &PointerState) -> bool {
        let mut clicked = None;
        for (i, opt) in self.options.iter_mut().enumerate() {
            if opt.hit.update(p) && self.selected != Some(i) {
                clicked = Some(i);
            }
        }
        if clicked.is_some() {
            self.selected = clicked;
            return true;
        }
        false
    }

    pub fn selected_key(&self) -> Option<&'static str> {
        self.selected.map(|i| self.options[i].key)
    }
}

/// Clickable passage phrases with a toggled selection per phrase.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhrasePicker {
    pub layout: PassageLayout,
    pub selected: Vec<bool>,
}

impl PhrasePicker {
    pub fn new(phrase_count: usize) -> Self {
        Self {
            layout: PassageLayout::default(),
            selected: vec![false; phrase_count],
        }
    }

    /// Replace the layout (on resize) keeping the selection.
    pub fn set_layout(&mut self, layout: PassageLayout) {
        self.layout = layout;
    }

    /// Toggle the phrase under a fresh press. Returns the toggled index.
    pub fn update(&mut self, p: &PointerState) -> Option<usize> {
        if !p.just_pressed {
            return None;
        }
        let idx = self.layout.hit(p.pos)?;
        let slot = self.selected.get_mut(idx)?;
        *slot = !*slot;
        Some(idx)
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.then_some(i))
            .collect()
    }

    pub fn is_selected(&self, i: usize) -> bool {
        self.selected.get(i).copied().unwrap_or(false)
    }
}
