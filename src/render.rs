//! Canvas 2d drawing for every screen, plus the canvas-backed text measurer.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use crate::game::{CONGRATS, Game, MenuScreen, QuestionScreen, Screen, TITLE, WinScreen};
use crate::geometry::{Rect, Vec2, Viewport};
use crate::layout::{FixedAdvance, TextMeasure, TextSize};
use crate::widgets::{Button, ButtonStyle, PhrasePicker, RadioGroup};

const BACKGROUND: &str = "#b22222"; // firebrick
const TEXT: &str = "#ffffff";
const FONT_FAMILY: &str = "'Fira Code', monospace";

const TITLE_FONT: f64 = 60.0;
const BUTTON_FONT: f64 = 36.0;
const HUD_FONT: f64 = 36.0;
const SMALL_FONT: f64 = 22.0;

fn font(px: f64) -> String {
    format!("{px:.0}px {FONT_FAMILY}")
}

/// `measureText` on the live context; falls back to a monospace estimate.
pub struct CanvasMeasure<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasMeasure<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl TextMeasure for CanvasMeasure<'_> {
    fn measure(&self, text: &str, font_px: f64) -> TextSize {
        self.ctx.set_font(&font(font_px));
        match self.ctx.measure_text(text) {
            Ok(m) => TextSize {
                width: m.width(),
                height: font_px,
            },
            Err(_) => FixedAdvance::default().measure(text, font_px),
        }
    }
}

/// (fill, pressed fill) for a button style.
fn button_colors(style: ButtonStyle) -> Option<(&'static str, &'static str)> {
    match style {
        ButtonStyle::Neutral => Some(("#f4a460", "#bc8f8f")),
        ButtonStyle::Confirm => Some(("#008000", "#006400")),
        ButtonStyle::Danger => Some(("#ff0000", "#8b0000")),
        ButtonStyle::Proceed => Some(("#0000ff", "#00008b")),
        ButtonStyle::Inert => None,
    }
}

pub fn draw(ctx: &CanvasRenderingContext2d, game: &Game) {
    let vp = game.viewport();
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, vp.width, vp.height);
    let pointer = game.pointer().pos;
    match game.screen() {
        Screen::Menu(m) => draw_menu(ctx, &vp, m),
        Screen::Question(q) => draw_question(ctx, &vp, q, pointer),
        Screen::Win(w) => draw_win(ctx, &vp, w),
        Screen::Exited => draw_exited(ctx, &vp),
    }
}

fn text_centered(ctx: &CanvasRenderingContext2d, text: &str, pos: Vec2, px: f64, color: &str) {
    ctx.set_font(&font(px));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(color);
    ctx.fill_text(text, pos.x, pos.y).ok();
}

fn draw_button(ctx: &CanvasRenderingContext2d, vp: &Viewport, b: &Button, text_color: &str) {
    if let Some((fill, pressed)) = button_colors(b.style) {
        ctx.set_fill_style_str(if b.held { pressed } else { fill });
        ctx.fill_rect(b.rect.min.x, b.rect.min.y, b.rect.width(), b.rect.height());
    }
    if !b.label.is_empty() {
        text_centered(ctx, &b.label, b.rect.center(), vp.font_px(BUTTON_FONT), text_color);
    }
}

fn draw_menu(ctx: &CanvasRenderingContext2d, vp: &Viewport, m: &MenuScreen) {
    text_centered(ctx, TITLE, m.title_pos, vp.font_px(TITLE_FONT), TEXT);
    for b in m.buttons() {
        draw_button(ctx, vp, b, TEXT);
    }
}

fn draw_win(ctx: &CanvasRenderingContext2d, vp: &Viewport, w: &WinScreen) {
    text_centered(ctx, CONGRATS, w.congrats_pos, vp.font_px(TITLE_FONT), TEXT);
    text_centered(ctx, &w.score_text(), w.score_pos, vp.font_px(TITLE_FONT), TEXT);
    draw_button(ctx, vp, &w.menu, TEXT);
    draw_button(ctx, vp, &w.replay, TEXT);
}

fn draw_exited(ctx: &CanvasRenderingContext2d, vp: &Viewport) {
    ctx.set_fill_style_str("#181818");
    ctx.fill_rect(0.0, 0.0, vp.width, vp.height);
    text_centered(ctx, "Thanks for playing!", vp.center(), vp.font_px(BUTTON_FONT), "#888888");
}

fn draw_question(ctx: &CanvasRenderingContext2d, vp: &Viewport, q: &QuestionScreen, pointer: Vec2) {
    draw_radio(ctx, vp, &q.radio);

    draw_button(ctx, vp, &q.check, TEXT);
    draw_button(ctx, vp, &q.skip, TEXT);
    text_centered(ctx, &q.session.progress_text(), q.progress_pos, vp.font_px(HUD_FONT), TEXT);
    text_centered(ctx, &q.session.score_text(), q.score_pos, vp.font_px(HUD_FONT), TEXT);

    draw_button(ctx, vp, &q.back, TEXT);
    ctx.set_fill_style_str("#000000");
    ctx.begin_path();
    ctx.move_to(q.back_icon[0].x, q.back_icon[0].y);
    ctx.line_to(q.back_icon[1].x, q.back_icon[1].y);
    ctx.line_to(q.back_icon[2].x, q.back_icon[2].y);
    ctx.close_path();
    ctx.fill();

    draw_passage(ctx, &q.picker, pointer);

    if let Some(caption) = q.caption() {
        text_centered(ctx, caption, q.caption_pos, vp.font_px(SMALL_FONT), "#000000");
    }
    if q.show_next() {
        draw_button(ctx, vp, &q.next, "#00ff00");
    }
}

fn circle(ctx: &CanvasRenderingContext2d, c: Vec2, r: f64) {
    ctx.begin_path();
    ctx.arc(c.x, c.y, r, 0.0, TAU).ok();
}

fn draw_radio(ctx: &CanvasRenderingContext2d, vp: &Viewport, g: &RadioGroup) {
    let label_px = vp.font_px(SMALL_FONT);
    for (i, opt) in g.options.iter().enumerate() {
        let c = g.option_center(i);
        let fill = if g.selected == Some(i) {
            Some("#0000ff")
        } else if opt.hit.held {
            Some("#d3d3d3")
        } else {
            None
        };
        if let Some(color) = fill {
            ctx.set_fill_style_str(color);
            circle(ctx, c, g.radius);
            ctx.fill();
        }
        ctx.set_stroke_style_str("#808080");
        ctx.set_line_width(3.0);
        circle(ctx, c, g.radius);
        ctx.stroke();

        ctx.set_font(&font(label_px));
        ctx.set_text_align("left");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str(TEXT);
        ctx.fill_text(&opt.label, c.x + vp.sx(RadioGroup::RADIUS + 10.0), c.y).ok();
    }
}

fn draw_passage(ctx: &CanvasRenderingContext2d, picker: &PhrasePicker, pointer: Vec2) {
    ctx.set_font(&font(picker.layout.font_px));
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    for ph in &picker.layout.phrases {
        ctx.set_fill_style_str(TEXT);
        ctx.fill_text(&ph.text, ph.rect.min.x, ph.rect.center().y).ok();

        let selected = picker.is_selected(ph.index);
        let hovered = ph.rect.contains(pointer);
        let edge = match (selected, hovered) {
            (true, true) => Some("#00008b"),
            (false, true) => Some("#0000ff"),
            (true, false) => Some("#add8e6"),
            (false, false) => None,
        };
        if let Some(color) = edge {
            stroke_rect(ctx, ph.rect, color);
        }
    }
}

fn stroke_rect(ctx: &CanvasRenderingContext2d, r: Rect, color: &str) {
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(3.0);
    ctx.stroke_rect(r.min.x, r.min.y, r.width(), r.height());
}
