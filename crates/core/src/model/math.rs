use rand::Rng;
use std::fmt;
use thiserror::Error;

use crate::model::level::MathLevel;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MathError {
    #[error("please enter a valid number: {raw:?}")]
    InvalidNumericInput { raw: String },

    #[error("division by zero")]
    DivisionByZero,
}

//
// ─── OPERATOR ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Glyph shown in the prompt.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Evaluate `left op right`, or `None` for a zero divisor. Quotients are
    /// rounded to two decimals, ties to even.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn checked_apply(self, left: i64, right: i64) -> Option<f64> {
        let value = match self {
            Operator::Add => (left + right) as f64,
            Operator::Subtract => (left - right) as f64,
            Operator::Multiply => (left * right) as f64,
            Operator::Divide => {
                if right == 0 {
                    return None;
                }
                round_to_cents(left as f64 / right as f64)
            }
        };
        Some(value)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

//
// ─── LEVEL RULES ───────────────────────────────────────────────────────────────
//

/// Operand ranges and operators for one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRules {
    pub left: (i64, i64),
    pub right: (i64, i64),
    pub operators: &'static [Operator],
}

impl MathLevel {
    #[must_use]
    pub fn rules(self) -> LevelRules {
        match self {
            MathLevel::Basic => LevelRules {
                left: (1, 20),
                right: (1, 20),
                operators: &[Operator::Add, Operator::Subtract],
            },
            MathLevel::Advanced => LevelRules {
                left: (10, 50),
                right: (2, 10),
                operators: &[Operator::Add, Operator::Subtract, Operator::Multiply],
            },
            MathLevel::Expert => LevelRules {
                left: (20, 100),
                right: (2, 20),
                operators: &[
                    Operator::Add,
                    Operator::Subtract,
                    Operator::Multiply,
                    Operator::Divide,
                ],
            },
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// An arithmetic prompt and the answer that scores it.
#[derive(Debug, Clone, PartialEq)]
pub struct MathQuestion {
    left: i64,
    right: i64,
    operator: Operator,
    prompt_text: String,
    expected_answer: f64,
}

impl MathQuestion {
    /// Build a question from explicit operands.
    ///
    /// # Errors
    ///
    /// Returns `MathError::DivisionByZero` for `x / 0`.
    pub fn new(left: i64, operator: Operator, right: i64) -> Result<Self, MathError> {
        let expected_answer = operator
            .checked_apply(left, right)
            .ok_or(MathError::DivisionByZero)?;
        Ok(Self::from_parts(left, operator, right, expected_answer))
    }

    fn from_parts(left: i64, operator: Operator, right: i64, expected_answer: f64) -> Self {
        Self {
            left,
            right,
            operator,
            prompt_text: format!("{left} {operator} {right} = ?"),
            expected_answer,
        }
    }

    #[must_use]
    pub fn left(&self) -> i64 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> i64 {
        self.right
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    #[must_use]
    pub fn expected_answer(&self) -> f64 {
        self.expected_answer
    }

    /// Exact comparison against the stored answer.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn accepts(&self, answer: f64) -> bool {
        answer == self.expected_answer
    }
}

/// Draw a fresh question for `level`.
///
/// A zero divisor is drawn again. Every level's divisor range starts above
/// zero, so the first draw always stands.
pub fn generate_question<R: Rng + ?Sized>(level: MathLevel, rng: &mut R) -> MathQuestion {
    let rules = level.rules();
    loop {
        let left = rng.random_range(rules.left.0..=rules.left.1);
        let right = rng.random_range(rules.right.0..=rules.right.1);
        let operator = rules.operators[rng.random_range(0..rules.operators.len())];

        if let Some(expected_answer) = operator.checked_apply(left, right) {
            return MathQuestion::from_parts(left, operator, right, expected_answer);
        }
    }
}

/// Parse free-form learner input as a number.
///
/// # Errors
///
/// Returns `MathError::InvalidNumericInput` if the trimmed text is not a
/// finite decimal number.
pub fn parse_answer(raw: &str) -> Result<f64, MathError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| MathError::InvalidNumericInput {
            raw: raw.to_string(),
        })
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct,
    TryAgain,
}

/// A running math challenge: one open question and a score.
#[derive(Debug, Clone, PartialEq)]
pub struct MathSession {
    level: MathLevel,
    score: u32,
    current: MathQuestion,
}

impl MathSession {
    #[must_use]
    pub fn new<R: Rng + ?Sized>(level: MathLevel, rng: &mut R) -> Self {
        Self::with_question(level, generate_question(level, rng))
    }

    /// Start a session with a known first question.
    #[must_use]
    pub fn with_question(level: MathLevel, question: MathQuestion) -> Self {
        Self {
            level,
            score: 0,
            current: question,
        }
    }

    #[must_use]
    pub fn level(&self) -> MathLevel {
        self.level
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn current(&self) -> &MathQuestion {
        &self.current
    }

    /// Reset the score and draw a new question at `level`.
    pub fn new_game<R: Rng + ?Sized>(&mut self, level: MathLevel, rng: &mut R) {
        *self = Self::new(level, rng);
    }

    /// Check an answer. A correct answer scores and replaces the question.
    ///
    /// # Errors
    ///
    /// Returns `MathError::InvalidNumericInput` for text that is not a
    /// number; the session is left untouched.
    pub fn submit_answer<R: Rng + ?Sized>(
        &mut self,
        raw: &str,
        rng: &mut R,
    ) -> Result<SubmitOutcome, MathError> {
        let answer = parse_answer(raw)?;
        if !self.current.accepts(answer) {
            return Ok(SubmitOutcome::TryAgain);
        }

        self.score = self.score.saturating_add(1);
        self.current = generate_question(self.level, rng);
        Ok(SubmitOutcome::Correct)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Level;
    use crate::random::fixed_source;

    #[test]
    fn generated_operands_stay_in_level_ranges() {
        let mut rng = fixed_source().rng();
        for level in MathLevel::ALL {
            let rules = level.rules();
            for _ in 0..500 {
                let q = generate_question(*level, &mut rng);
                assert!((rules.left.0..=rules.left.1).contains(&q.left()));
                assert!((rules.right.0..=rules.right.1).contains(&q.right()));
                assert!(rules.operators.contains(&q.operator()));
                assert_ne!(q.right(), 0);
            }
        }
    }

    #[test]
    fn expert_division_has_at_most_two_decimals() {
        let mut rng = fixed_source().rng();
        let mut seen_division = false;
        for _ in 0..2_000 {
            let q = generate_question(MathLevel::Expert, &mut rng);
            if q.operator() != Operator::Divide {
                continue;
            }
            seen_division = true;
            let text = q.expected_answer().to_string();
            let decimals = text.split_once('.').map_or(0, |(_, frac)| frac.len());
            assert!(decimals <= 2, "{} has too many decimals", q.prompt_text());
        }
        assert!(seen_division);
    }

    #[test]
    fn basic_level_only_adds_and_subtracts() {
        let mut rng = fixed_source().rng();
        for _ in 0..200 {
            let q = generate_question(MathLevel::Basic, &mut rng);
            assert!(matches!(q.operator(), Operator::Add | Operator::Subtract));
        }
    }

    #[test]
    fn prompt_uses_ascii_operator_glyphs() {
        let q = MathQuestion::new(7, Operator::Add, 5).unwrap();
        assert_eq!(q.prompt_text(), "7 + 5 = ?");
        assert!((q.expected_answer() - 12.0).abs() < f64::EPSILON);

        let q = MathQuestion::new(22, Operator::Divide, 7).unwrap();
        assert_eq!(q.prompt_text(), "22 / 7 = ?");
        assert!(q.accepts(3.14));
    }

    #[test]
    fn divisor_ranges_exclude_zero() {
        for level in MathLevel::ALL {
            assert!(level.rules().right.0 > 0, "{level} allows a zero divisor");
        }
    }

    #[test]
    fn division_ties_round_to_even() {
        assert!(MathQuestion::new(21, Operator::Divide, 8).unwrap().accepts(2.62));
        assert!(MathQuestion::new(19, Operator::Divide, 8).unwrap().accepts(2.38));
        assert!(MathQuestion::new(25, Operator::Divide, 8).unwrap().accepts(3.12));
        assert!(MathQuestion::new(27, Operator::Divide, 8).unwrap().accepts(3.38));
    }

    #[test]
    fn rounded_quotients_are_accepted_through_the_session() {
        let mut rng = fixed_source().rng();
        for (left, right, answer, wrong) in [(21, 8, "2.62", "2.63"), (19, 8, "2.38", "2.37")] {
            let question = MathQuestion::new(left, Operator::Divide, right).unwrap();
            let mut session = MathSession::with_question(MathLevel::Expert, question);

            assert_eq!(
                session.submit_answer(wrong, &mut rng).unwrap(),
                SubmitOutcome::TryAgain,
                "{left}/{right}"
            );
            assert_eq!(
                session.submit_answer(answer, &mut rng).unwrap(),
                SubmitOutcome::Correct,
                "{left}/{right}"
            );
            assert_eq!(session.score(), 1);
        }
    }

    #[test]
    fn explicit_division_by_zero_is_rejected() {
        assert_eq!(Operator::Divide.checked_apply(4, 0), None);
        assert_eq!(Operator::Add.checked_apply(4, 0), Some(4.0));
        assert_eq!(
            MathQuestion::new(1, Operator::Divide, 0).unwrap_err(),
            MathError::DivisionByZero
        );
    }

    #[test]
    fn correct_answer_scores_and_draws_new_question() {
        let mut rng = fixed_source().rng();
        let question = MathQuestion::new(7, Operator::Add, 5).unwrap();
        let mut session = MathSession::with_question(MathLevel::Basic, question.clone());

        assert_eq!(
            session.submit_answer("11", &mut rng).unwrap(),
            SubmitOutcome::TryAgain
        );
        assert_eq!(session.score(), 0);
        assert_eq!(session.current(), &question);

        assert_eq!(
            session.submit_answer("12", &mut rng).unwrap(),
            SubmitOutcome::Correct
        );
        assert_eq!(session.score(), 1);
        assert_eq!(session.level(), MathLevel::Basic);
    }

    #[test]
    fn non_numeric_input_leaves_session_untouched() {
        let mut rng = fixed_source().rng();
        let question = MathQuestion::new(7, Operator::Add, 5).unwrap();
        let mut session = MathSession::with_question(MathLevel::Basic, question);
        let before = session.clone();

        for raw in ["abc", "", "  ", "NaN", "inf", "12abc"] {
            let err = session.submit_answer(raw, &mut rng).unwrap_err();
            assert!(matches!(err, MathError::InvalidNumericInput { .. }), "{raw:?}");
            assert_eq!(session, before);
        }
    }

    #[test]
    fn answers_accept_surrounding_whitespace_and_decimals() {
        let mut rng = fixed_source().rng();
        let question = MathQuestion::new(7, Operator::Add, 5).unwrap();
        let mut session = MathSession::with_question(MathLevel::Basic, question);
        assert_eq!(
            session.submit_answer(" 12.0 ", &mut rng).unwrap(),
            SubmitOutcome::Correct
        );
    }

    #[test]
    fn new_game_resets_score() {
        let mut rng = fixed_source().rng();
        let question = MathQuestion::new(7, Operator::Add, 5).unwrap();
        let mut session = MathSession::with_question(MathLevel::Basic, question);
        session.submit_answer("12", &mut rng).unwrap();

        session.new_game(MathLevel::Expert, &mut rng);
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), MathLevel::Expert);
    }
}
