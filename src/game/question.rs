//! Question screen: passage, choices, Check/Skip, HUD and the tutorial overlay.

use log::{debug, error, info};

use super::{Dealer, Transition};
use crate::content::TUTORIAL_STEPS;
use crate::geometry::{Rect, Vec2, Viewport};
use crate::input::PointerState;
use crate::layout::{TextMeasure, layout_passage};
use crate::quiz::{Advance, CheckOutcome, Question, Session};
use crate::widgets::{Button, ButtonStyle, PhrasePicker, RadioGroup};

pub const PASSAGE_FONT: f64 = 32.0;
/// Passage lines wrap at this fraction of the surface width.
pub const PASSAGE_WIDTH_FRAC: f64 = 0.6;

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionScreen {
    pub tutorial: bool,
    pub session: Session,
    pub question: Question,
    pub radio: RadioGroup,
    pub picker: PhrasePicker,
    pub check: Button,
    pub skip: Button,
    pub back: Button,
    /// Tutorial "Next ->" button.
    pub next: Button,
    pub tutorial_step: usize,
    pub last_check: Option<CheckOutcome>,
    pub progress_pos: Vec2,
    pub score_pos: Vec2,
    pub caption_pos: Vec2,
    /// Back arrow triangle.
    pub back_icon: [Vec2; 3],
    viewport: Viewport,
}

impl QuestionScreen {
    pub fn new(
        tutorial: bool,
        total: u32,
        dealer: &mut Dealer,
        vp: &Viewport,
        measure: &dyn TextMeasure,
    ) -> Result<Self, crate::error::QuizError> {
        let question = dealer.next_question(tutorial)?;
        let mut screen = Self {
            tutorial,
            session: Session::new(total),
            radio: RadioGroup::new(Vec::new()),
            picker: PhrasePicker::default(),
            check: Button::new(Rect::default(), "Check", ButtonStyle::Confirm),
            skip: Button::new(Rect::default(), "Skip", ButtonStyle::Danger),
            back: Button::new(Rect::default(), "", ButtonStyle::Neutral),
            next: Button::new(Rect::default(), "Next ->", ButtonStyle::Proceed),
            tutorial_step: 0,
            last_check: None,
            progress_pos: Vec2::default(),
            score_pos: Vec2::default(),
            caption_pos: Vec2::default(),
            back_icon: [Vec2::default(); 3],
            viewport: *vp,
            question: question.clone(),
        };
        screen.load(question, measure);
        Ok(screen)
    }

    fn load(&mut self, question: Question, measure: &dyn TextMeasure) {
        debug!(
            "question {}: {} ({} phrases)",
            self.session.progress_text(),
            question.passage.kind,
            question.passage.phrases.len()
        );
        self.radio = RadioGroup::new(question.choices.iter().map(|k| (k.key, k.label())));
        self.picker = PhrasePicker::new(question.passage.phrases.len());
        self.question = question;
        self.check = Button::new(Rect::default(), "Check", ButtonStyle::Confirm);
        self.skip = Button::new(Rect::default(), "Skip", ButtonStyle::Danger);
        self.last_check = None;
        let vp = self.viewport;
        self.relayout(&vp, measure);
    }

    pub fn relayout(&mut self, vp: &Viewport, measure: &dyn TextMeasure) {
        self.viewport = *vp;
        let cx = vp.width / 2.0;
        let row = vp.height * 0.75;
        self.check.rect = Rect::new(cx - vp.sx(210.0), row - vp.sy(50.0), cx - vp.sx(10.0), row + vp.sy(50.0));
        self.skip.rect = Rect::new(cx + vp.sx(10.0), row - vp.sy(50.0), cx + vp.sx(210.0), row + vp.sy(50.0));
        self.back.rect = Rect::new(0.0, 0.0, vp.sx(100.0), vp.sy(100.0));
        self.back_icon = [
            Vec2::new(vp.sx(10.0), vp.sy(50.0)),
            Vec2::new(vp.sx(90.0), vp.sy(10.0)),
            Vec2::new(vp.sx(90.0), vp.sy(90.0)),
        ];
        self.next.rect = Rect::centered(vp.frac(0.5, 6.5 / 17.0), vp.sx(60.0), vp.sy(25.0));
        self.caption_pos = vp.frac(0.5, 5.5 / 17.0);
        self.progress_pos = vp.frac(0.5, 1.0 / 11.0);
        self.score_pos = vp.frac(0.5, 8.0 / 9.0);
        self.radio.layout(vp, vp.frac(1.0 / 3.0, 0.2));

        let font_px = vp.font_px(PASSAGE_FONT);
        self.picker.set_layout(layout_passage(
            self.question.passage.phrases,
            measure,
            font_px,
            vp.width * PASSAGE_WIDTH_FRAC,
            vp.center(),
        ));
    }

    /// Caption for the current tutorial step; `None` once the script is done.
    pub fn caption(&self) -> Option<&'static str> {
        if !self.tutorial {
            return None;
        }
        TUTORIAL_STEPS.get(self.tutorial_step).map(String::as_str)
    }

    pub fn show_next(&self) -> bool {
        self.tutorial && self.tutorial_step < TUTORIAL_STEPS.len()
    }

    pub fn update(
        &mut self,
        p: &PointerState,
        dt_secs: f64,
        dealer: &mut Dealer,
        measure: &dyn TextMeasure,
    ) -> Option<Transition> {
        self.session.tick(dt_secs);
        self.radio.update(p);
        self.picker.update(p);
        if self.show_next() && self.next.update(p) {
            self.tutorial_step += 1;
        }
        if self.check.update(p) {
            self.on_check();
        }
        if self.skip.update(p) {
            return self.on_skip(dealer, measure);
        }
        if self.back.update(p) {
            info!("back to menu from question {}", self.session.progress_text());
            return Some(Transition::ToMenu);
        }
        None
    }

    fn on_check(&mut self) {
        let correct = self
            .question
            .is_correct(self.radio.selected_key(), &self.picker.selected_indices());
        let outcome = self.session.check(correct);
        match outcome {
            CheckOutcome::Correct { points } => {
                info!("correct, {points:.2} points pending");
                self.check.label = "Correct!".into();
                self.check.style = ButtonStyle::Inert;
                self.check.enabled = false;
                self.skip.label = "Continue".into();
                self.skip.style = ButtonStyle::Proceed;
            }
            CheckOutcome::Incorrect { score_lost } => {
                info!("incorrect, lost {score_lost:.2}");
            }
            CheckOutcome::AlreadySolved => {}
        }
        self.last_check = Some(outcome);
    }

    fn on_skip(&mut self, dealer: &mut Dealer, measure: &dyn TextMeasure) -> Option<Transition> {
        let solved = self.session.is_solved();
        match self.session.advance() {
            Advance::Finished { score } => {
                info!("round finished with score {score:.2}");
                Some(Transition::Finished {
                    score,
                    tutorial: self.tutorial,
                })
            }
            Advance::Next { question } => {
                debug!("{} to question {question}", if solved { "continue" } else { "skip" });
                match dealer.next_question(self.tutorial) {
                    Ok(q) => {
                        self.load(q, measure);
                        None
                    }
                    Err(e) => {
                        error!("cannot load next question: {e}");
                        Some(Transition::ToMenu)
                    }
                }
            }
        }
    }
}
