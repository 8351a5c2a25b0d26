//! Screen state machine: menu, question (with the tutorial overlay) and the
//! win screen. Pure game logic; drawing lives in `render`.

mod menu;
mod question;
mod win;

pub use menu::{MenuScreen, TITLE};
pub use question::{PASSAGE_FONT, PASSAGE_WIDTH_FRAC, QuestionScreen};
pub use win::{CONGRATS, WinScreen};

use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::content::{self, TUTORIAL_PASSAGE};
use crate::error::QuizError;
use crate::geometry::Viewport;
use crate::input::PointerState;
use crate::layout::TextMeasure;
use crate::quiz::{Question, QuestionDeck};

/// Requests a screen makes of the state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    StartRound { tutorial: bool },
    Finished { score: f64, tutorial: bool },
    ToMenu,
    Quit,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Menu(MenuScreen),
    Question(Box<QuestionScreen>),
    Win(WinScreen),
    /// Quit pressed; the frame loop stops.
    Exited,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Menu(_) => "menu",
            Screen::Question(q) if q.tutorial => "tutorial",
            Screen::Question(_) => "question",
            Screen::Win(_) => "win",
            Screen::Exited => "exited",
        }
    }
}

/// Owns the RNG and passage deck used to build questions.
#[derive(Clone, Debug)]
pub struct Dealer {
    rng: StdRng,
    deck: QuestionDeck,
}

impl Dealer {
    pub fn new(rng: StdRng, allow_repeats: bool) -> Self {
        Self {
            rng,
            deck: QuestionDeck::new(content::passages(), allow_repeats),
        }
    }

    /// Tutorial rounds always use the fixed tutorial passage.
    pub fn next_question(&mut self, tutorial: bool) -> Result<Question, QuizError> {
        let passage = if tutorial {
            TUTORIAL_PASSAGE
        } else {
            self.deck.draw(&mut self.rng)?
        };
        Question::generate(&mut self.rng, passage)
    }
}

pub struct Game {
    screen: Screen,
    viewport: Viewport,
    dealer: Dealer,
    questions_per_round: u32,
    pointer: PointerState,
}

impl Game {
    pub fn new(cfg: &GameConfig, viewport: Viewport) -> Self {
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(cfg, viewport, rng)
    }

    pub fn with_rng(cfg: &GameConfig, viewport: Viewport, rng: StdRng) -> Self {
        Self {
            screen: Screen::Menu(MenuScreen::new(&viewport)),
            viewport,
            dealer: Dealer::new(rng, cfg.allow_repeats),
            questions_per_round: cfg.questions_per_round.max(1),
            pointer: PointerState::default(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Pointer state of the last frame, for hover highlights.
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn is_exited(&self) -> bool {
        matches!(self.screen, Screen::Exited)
    }

    /// Advance one frame of input and time.
    pub fn frame(&mut self, p: PointerState, dt_secs: f64, measure: &dyn TextMeasure) {
        self.pointer = p;
        let transition = match &mut self.screen {
            Screen::Menu(m) => m.update(&p),
            Screen::Question(q) => q.update(&p, dt_secs, &mut self.dealer, measure),
            Screen::Win(w) => w.update(&p),
            Screen::Exited => None,
        };
        if let Some(t) = transition {
            self.apply(t, measure);
        }
    }

    pub fn resize(&mut self, viewport: Viewport, measure: &dyn TextMeasure) {
        self.viewport = viewport;
        match &mut self.screen {
            Screen::Menu(m) => m.relayout(&viewport),
            Screen::Question(q) => q.relayout(&viewport, measure),
            Screen::Win(w) => w.relayout(&viewport),
            Screen::Exited => {}
        }
    }

    fn apply(&mut self, t: Transition, measure: &dyn TextMeasure) {
        let from = self.screen.name();
        self.screen = match t {
            Transition::StartRound { tutorial } => {
                let total = if tutorial { 1 } else { self.questions_per_round };
                match QuestionScreen::new(tutorial, total, &mut self.dealer, &self.viewport, measure) {
                    Ok(q) => Screen::Question(Box::new(q)),
                    Err(e) => {
                        error!("cannot start round: {e}");
                        Screen::Menu(MenuScreen::new(&self.viewport))
                    }
                }
            }
            Transition::Finished { score, tutorial } => {
                Screen::Win(WinScreen::new(score, tutorial, &self.viewport))
            }
            Transition::ToMenu => Screen::Menu(MenuScreen::new(&self.viewport)),
            Transition::Quit => Screen::Exited,
        };
        info!("screen {from} -> {}", self.screen.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rect, Vec2};
    use crate::layout::FixedAdvance;

    fn game(questions: u32) -> Game {
        let cfg = GameConfig {
            questions_per_round: questions,
            ..GameConfig::default()
        };
        Game::with_rng(&cfg, Viewport::default(), StdRng::seed_from_u64(17))
    }

    fn click(g: &mut Game, rect: Rect) {
        let m = FixedAdvance::default();
        let c = rect.center();
        g.frame(PointerState::pressed(c), 0.0, &m);
        g.frame(PointerState::released(c), 0.0, &m);
    }

    fn question(g: &Game) -> &QuestionScreen {
        match g.screen() {
            Screen::Question(q) => &**q,
            other => panic!("expected question, got {}", other.name()),
        }
    }

    fn answer_correctly(g: &mut Game) {
        let (choice, phrases) = {
            let q = question(g);
            let kind = q.question.passage.kind;
            let i = q.radio.options.iter().position(|o| o.key == kind).unwrap();
            let rects: Vec<Rect> = q
                .picker
                .layout
                .phrases
                .iter()
                .filter(|ph| q.question.passage.is_answer(ph.index))
                .map(|ph| ph.rect)
                .collect();
            (q.radio.options[i].hit.rect, rects)
        };
        click(g, choice);
        for r in phrases {
            click(g, r);
        }
        let check = question(g).check.rect;
        click(g, check);
    }

    #[test]
    fn menu_start_opens_a_question() {
        let mut g = game(3);
        assert_eq!(g.screen().name(), "menu");
        let start = match g.screen() {
            Screen::Menu(m) => m.start.rect,
            _ => unreachable!(),
        };
        click(&mut g, start);
        let q = question(&g);
        assert!(!q.tutorial);
        assert_eq!(q.session.total(), 3);
        assert_eq!(q.radio.options.len(), 4);
    }

    #[test]
    fn full_round_reaches_win_screen_and_replays() {
        let mut g = game(2);
        g.apply(Transition::StartRound { tutorial: false }, &FixedAdvance::default());
        answer_correctly(&mut g);
        assert!(question(&g).session.is_solved());
        assert_eq!(question(&g).skip.label, "Continue");
        let r = question(&g).skip.rect;
        click(&mut g, r);
        assert_eq!(question(&g).session.question(), 2);
        let r = question(&g).skip.rect;
        click(&mut g, r);
        let replay = match g.screen() {
            Screen::Win(w) => {
                // 10 for the instant answer, then a quarter lost to the skip
                assert!((w.score - 7.5).abs() < 1e-9);
                assert!(!w.tutorial);
                w.replay.rect
            }
            other => panic!("expected win, got {}", other.name()),
        };
        click(&mut g, replay);
        assert_eq!(question(&g).session.question(), 1);
        assert_eq!(question(&g).session.score(), 0.0);
    }

    #[test]
    fn wrong_check_keeps_question_open() {
        let mut g = game(5);
        g.apply(Transition::StartRound { tutorial: false }, &FixedAdvance::default());
        let check = question(&g).check.rect;
        click(&mut g, check);
        let q = question(&g);
        assert!(matches!(q.last_check, Some(crate::quiz::CheckOutcome::Incorrect { .. })));
        assert_eq!(q.check.label, "Check");
        assert_eq!(q.session.question(), 1);
    }

    #[test]
    fn tutorial_round_walks_captions_and_has_one_question() {
        let mut g = game(10);
        g.apply(Transition::StartRound { tutorial: true }, &FixedAdvance::default());
        assert_eq!(g.screen().name(), "tutorial");
        let q = question(&g);
        assert_eq!(q.session.total(), 1);
        assert_eq!(q.question.passage, TUTORIAL_PASSAGE);
        assert_eq!(q.caption(), Some("Welcome to Fallacy Quest!"));
        let next = q.next.rect;
        for _ in 0..content::TUTORIAL_STEPS.len() {
            click(&mut g, next);
        }
        assert!(question(&g).caption().is_none());
        assert!(!question(&g).show_next());
        answer_correctly(&mut g);
        let r = question(&g).skip.rect;
        click(&mut g, r);
        match g.screen() {
            Screen::Win(w) => assert!(w.tutorial),
            other => panic!("expected win, got {}", other.name()),
        }
    }

    #[test]
    fn back_button_returns_to_menu() {
        let mut g = game(5);
        g.apply(Transition::StartRound { tutorial: false }, &FixedAdvance::default());
        let r = question(&g).back.rect;
        click(&mut g, r);
        assert_eq!(g.screen().name(), "menu");
    }

    #[test]
    fn quit_exits_and_ignores_input() {
        let mut g = game(5);
        let quit = match g.screen() {
            Screen::Menu(m) => m.quit.rect,
            _ => unreachable!(),
        };
        click(&mut g, quit);
        assert!(g.is_exited());
        g.frame(PointerState::pressed(Vec2::new(1.0, 1.0)), 0.1, &FixedAdvance::default());
        assert!(g.is_exited());
    }

    #[test]
    fn resize_relayouts_and_keeps_selection() {
        let mut g = game(5);
        let m = FixedAdvance::default();
        g.apply(Transition::StartRound { tutorial: false }, &m);
        let first = question(&g).picker.layout.phrases[0].rect;
        click(&mut g, first);
        assert_eq!(question(&g).picker.selected_indices(), vec![0]);
        g.resize(Viewport::new(512.0, 384.0), &m);
        let q = question(&g);
        assert_eq!(q.picker.selected_indices(), vec![0]);
        assert!(q.picker.layout.phrases[0].rect.width() < first.width());
        assert!(q.check.rect.max.x <= 256.0);
    }
}
