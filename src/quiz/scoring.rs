//! Score and combo bookkeeping for one round.
//!
//! Points for a correct check decay with the time spent on the question:
//!   possible_gain * (4 / (timer + 5) + 0.2)
//! and possible_gain itself grows with combo and score. Wrong checks shave 1/16
//! off both possible_gain and score; skipping an unsolved question costs 1/4.

pub const BASE_GAIN: f64 = 10.0;
pub const WRONG_CHECK_DIVISOR: f64 = 16.0;
pub const SKIP_DIVISOR: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CheckOutcome {
    Correct { points: f64 },
    Incorrect { score_lost: f64 },
    /// Already solved; the check is ignored.
    AlreadySolved,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Advance {
    Next { question: u32 },
    Finished { score: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    score: f64,
    combo: u32,
    question: u32,
    total: u32,
    timer: f64,
    possible_gain: f64,
    pending: Option<f64>,
}

/// Reward for a correct answer after `timer` seconds.
pub fn points_for(possible_gain: f64, timer: f64) -> f64 {
    (possible_gain * (4.0 / (timer + 5.0) + 0.2)).max(0.0)
}

impl Session {
    pub fn new(total: u32) -> Self {
        let mut s = Self {
            score: 0.0,
            combo: 0,
            question: 1,
            total: total.max(1),
            timer: 0.0,
            possible_gain: BASE_GAIN,
            pending: None,
        };
        s.begin_question();
        s
    }

    fn begin_question(&mut self) {
        self.timer = 0.0;
        self.possible_gain = BASE_GAIN + self.combo as f64 * self.score / 2.0;
        self.pending = None;
    }

    pub fn tick(&mut self, dt_secs: f64) {
        if dt_secs.is_finite() && dt_secs > 0.0 {
            self.timer += dt_secs;
        }
    }

    pub fn check(&mut self, correct: bool) -> CheckOutcome {
        if self.pending.is_some() {
            return CheckOutcome::AlreadySolved;
        }
        if correct {
            let points = points_for(self.possible_gain, self.timer);
            self.pending = Some(points);
            CheckOutcome::Correct { points }
        } else {
            self.combo = 0;
            self.possible_gain -= self.possible_gain / WRONG_CHECK_DIVISOR;
            let before = self.score;
            self.score = (self.score - self.score / WRONG_CHECK_DIVISOR).max(0.0);
            CheckOutcome::Incorrect {
                score_lost: before - self.score,
            }
        }
    }

    /// Skip or continue to the next question.
    pub fn advance(&mut self) -> Advance {
        match self.pending.take() {
            Some(points) => {
                self.combo += 1;
                self.score += points;
            }
            None => {
                self.combo = 0;
                self.score = (self.score - self.score / SKIP_DIVISOR).max(0.0);
            }
        }
        self.question += 1;
        if self.question > self.total {
            return Advance::Finished { score: self.score };
        }
        self.begin_question();
        Advance::Next {
            question: self.question,
        }
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn question(&self) -> u32 {
        self.question
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn timer(&self) -> f64 {
        self.timer
    }

    pub fn possible_gain(&self) -> f64 {
        self.possible_gain
    }

    pub fn is_solved(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_points(&self) -> Option<f64> {
        self.pending
    }

    /// `"3/10"`
    pub fn progress_text(&self) -> String {
        format!("{}/{}", self.question.min(self.total), self.total)
    }

    /// `"Score: 12.34"`
    pub fn score_text(&self) -> String {
        format!("Score: {:.2}", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn instant_correct_answer_scores_full_gain() {
        let mut s = Session::new(10);
        // 10 * (4/5 + 0.2) = 10
        assert_eq!(s.check(true), CheckOutcome::Correct { points: 10.0 });
        assert_eq!(s.advance(), Advance::Next { question: 2 });
        assert!(close(s.score(), 10.0));
        assert_eq!(s.combo(), 1);
        // gain grows with combo and score: 10 + 1 * 10 / 2
        assert!(close(s.possible_gain(), 15.0));
    }

    #[test]
    fn points_decay_with_time() {
        let mut s = Session::new(10);
        s.tick(15.0);
        // 10 * (4/20 + 0.2) = 4
        match s.check(true) {
            CheckOutcome::Correct { points } => assert!(close(points, 4.0)),
            other => panic!("unexpected {other:?}"),
        }
        assert!(points_for(10.0, 1e9) > 1.99);
    }

    #[test]
    fn wrong_check_shaves_sixteenth_and_resets_combo() {
        let mut s = Session::new(10);
        s.check(true);
        s.advance();
        assert_eq!(s.combo(), 1);
        let outcome = s.check(false);
        assert!(matches!(outcome, CheckOutcome::Incorrect { score_lost } if close(score_lost, 10.0 / 16.0)));
        assert!(close(s.score(), 10.0 * 15.0 / 16.0));
        assert!(close(s.possible_gain(), 15.0 * 15.0 / 16.0));
        assert_eq!(s.combo(), 0);
    }

    #[test]
    fn skipping_unsolved_costs_a_quarter() {
        let mut s = Session::new(10);
        s.check(true);
        s.advance();
        s.check(false);
        let before = s.score();
        s.advance();
        assert!(close(s.score(), before * 0.75));
        assert_eq!(s.combo(), 0);
    }

    #[test]
    fn score_never_negative() {
        let mut s = Session::new(3);
        s.check(false);
        s.advance();
        assert_eq!(s.score(), 0.0);
        s.check(false);
        assert_eq!(s.score(), 0.0);
    }

    #[test]
    fn second_check_after_solving_is_ignored() {
        let mut s = Session::new(2);
        s.check(true);
        s.tick(100.0);
        assert_eq!(s.check(true), CheckOutcome::AlreadySolved);
        assert_eq!(s.check(false), CheckOutcome::AlreadySolved);
        assert_eq!(s.pending_points(), Some(10.0));
    }

    #[test]
    fn round_finishes_after_total_questions() {
        let mut s = Session::new(2);
        assert_eq!(s.progress_text(), "1/2");
        assert!(matches!(s.advance(), Advance::Next { question: 2 }));
        assert_eq!(s.progress_text(), "2/2");
        s.check(true);
        assert_eq!(s.advance(), Advance::Finished { score: 10.0 });
    }

    #[test]
    fn new_question_resets_timer() {
        let mut s = Session::new(5);
        s.tick(3.5);
        s.tick(-1.0);
        s.tick(f64::NAN);
        assert!(close(s.timer(), 3.5));
        s.advance();
        assert_eq!(s.timer(), 0.0);
        assert_eq!(s.score_text(), "Score: 0.00");
    }
}
