//! Word-wrapping layout for clickable passage phrases.
//!
//! Phrases are atomic: a phrase is never split, it either fits on the current
//! line or starts a new one. Lines are centred horizontally and the whole block
//! is centred vertically on the requested point.

use crate::geometry::{Rect, Vec2};

/// Extra vertical room per line, relative to the tallest phrase on it.
pub const LINE_SPACING: f64 = 1.5;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextSize {
    pub width: f64,
    pub height: f64,
}

/// Measures rendered text. The canvas implements this with `measureText`.
pub trait TextMeasure {
    fn measure(&self, text: &str, font_px: f64) -> TextSize;
}

/// Monospace approximation: every char advances `advance * font_px`.
#[derive(Clone, Copy, Debug)]
pub struct FixedAdvance {
    pub advance: f64,
    pub line_height: f64,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self {
            advance: 0.55,
            line_height: 1.0,
        }
    }
}

impl TextMeasure for FixedAdvance {
    fn measure(&self, text: &str, font_px: f64) -> TextSize {
        TextSize {
            width: text.chars().count() as f64 * self.advance * font_px,
            height: self.line_height * font_px,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlacedPhrase {
    /// Index into the passage's phrase list.
    pub index: usize,
    pub line: usize,
    /// Drawn text (forced-break marker stripped).
    pub text: String,
    pub rect: Rect,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PassageLayout {
    pub phrases: Vec<PlacedPhrase>,
    pub line_count: usize,
    pub font_px: f64,
}

impl PassageLayout {
    /// Index of the phrase under `p`, if any.
    pub fn hit(&self, p: Vec2) -> Option<usize> {
        self.phrases
            .iter()
            .find(|ph| ph.rect.contains(p))
            .map(|ph| ph.index)
    }
}

struct Pending {
    index: usize,
    text: String,
    size: TextSize,
}

/// Lay `phrases` out in lines no wider than `max_width`, centred on `center`.
pub fn layout_passage(
    phrases: &[&str],
    measure: &dyn TextMeasure,
    font_px: f64,
    max_width: f64,
    center: Vec2,
) -> PassageLayout {
    let space = measure.measure(" ", font_px).width;

    let mut lines: Vec<Vec<Pending>> = vec![Vec::new()];
    let mut line_x = 0.0;
    for (index, raw) in phrases.iter().enumerate() {
        let (text, forced) = match raw.strip_prefix('\n') {
            Some(rest) => (rest, true),
            None => (*raw, false),
        };
        let size = measure.measure(text, font_px);
        let line_empty = lines.last().is_none_or(|l| l.is_empty());
        if !line_empty && (forced || line_x + space + size.width >= max_width) {
            lines.push(Vec::new());
            line_x = 0.0;
        }
        if let Some(line) = lines.last_mut() {
            if !line.is_empty() {
                line_x += space;
            }
            line_x += size.width;
            line.push(Pending {
                index,
                text: text.to_string(),
                size,
            });
        }
    }
    lines.retain(|l| !l.is_empty());

    let line_heights: Vec<f64> = lines
        .iter()
        .map(|l| l.iter().map(|p| p.size.height).fold(0.0, f64::max) * LINE_SPACING)
        .collect();
    let total_height: f64 = line_heights.iter().sum();

    let mut placed = Vec::with_capacity(phrases.len());
    let mut top = center.y - total_height / 2.0;
    for (line_no, (line, line_h)) in lines.into_iter().zip(line_heights).enumerate() {
        let width: f64 =
            line.iter().map(|p| p.size.width).sum::<f64>() + space * (line.len() - 1) as f64;
        let mut x = center.x - width / 2.0;
        for p in line {
            let y = top + (line_h - p.size.height) / 2.0;
            placed.push(PlacedPhrase {
                index: p.index,
                line: line_no,
                text: p.text,
                rect: Rect::new(x, y, x + p.size.width, y + p.size.height),
            });
            x += p.size.width + space;
        }
        top += line_h;
    }

    PassageLayout {
        line_count: placed.last().map_or(0, |p| p.line + 1),
        phrases: placed,
        font_px,
    }
}
