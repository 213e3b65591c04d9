//! Step-by-step quiz session.

use crate::error::CommerceError;
use crate::finder::{
    recommend, Budget, ComfortPreference, PartialAnswers, Priority, Recommendation, SleepPosition,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The quiz questions, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionId {
    SleepPosition,
    Priority,
    Firmness,
    Budget,
}

impl QuestionId {
    /// Every question, in the order they are asked.
    pub const ALL: [QuestionId; 4] = [
        QuestionId::SleepPosition,
        QuestionId::Priority,
        QuestionId::Firmness,
        QuestionId::Budget,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::SleepPosition => SleepPosition::QUESTION,
            QuestionId::Priority => Priority::QUESTION,
            QuestionId::Firmness => ComfortPreference::QUESTION,
            QuestionId::Budget => Budget::QUESTION,
        }
    }

    /// Small heading shown above the question.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionId::SleepPosition => "FIND YOUR PERFECT MATCH",
            QuestionId::Priority => "SLEEP PRIORITY",
            QuestionId::Firmness => "COMFORT FEEL",
            QuestionId::Budget => "BUDGET RANGE",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            QuestionId::SleepPosition => "What is your preferred sleep position?",
            QuestionId::Priority => "What matters most in your new mattress?",
            QuestionId::Firmness => "What firmness level do you prefer?",
            QuestionId::Budget => "What is your budget range?",
        }
    }

    /// Option labels, in display order.
    pub fn options(&self) -> Vec<&'static str> {
        match self {
            QuestionId::SleepPosition => SleepPosition::ALL.iter().map(|o| o.label()).collect(),
            QuestionId::Priority => Priority::ALL.iter().map(|o| o.label()).collect(),
            QuestionId::Firmness => ComfortPreference::ALL.iter().map(|o| o.label()).collect(),
            QuestionId::Budget => Budget::ALL.iter().map(|o| o.label()).collect(),
        }
    }

    /// Step number (1-indexed).
    pub fn number(&self) -> usize {
        match self {
            QuestionId::SleepPosition => 1,
            QuestionId::Priority => 2,
            QuestionId::Firmness => 3,
            QuestionId::Budget => 4,
        }
    }
}

/// What happened after an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizProgress {
    /// Move on to this question.
    Next(QuestionId),
    /// All questions answered.
    Finished(Recommendation),
}

/// A visitor's pass through the quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedSession")]
pub struct QuizSession {
    step: usize,
    answers: PartialAnswers,
    recommendation: Option<Recommendation>,
}

/// Wire form of [`QuizSession`], checked on load.
#[derive(Deserialize)]
struct SavedSession {
    #[serde(default)]
    step: usize,
    #[serde(default)]
    answers: PartialAnswers,
    #[serde(default)]
    recommendation: Option<Recommendation>,
}

impl TryFrom<SavedSession> for QuizSession {
    type Error = CommerceError;

    fn try_from(saved: SavedSession) -> Result<Self, Self::Error> {
        if saved.step >= QuestionId::ALL.len() {
            return Err(CommerceError::InvalidState(format!(
                "quiz step {} out of range (0-{})",
                saved.step,
                QuestionId::ALL.len() - 1
            )));
        }
        if saved.recommendation.is_some() && !saved.answers.is_complete() {
            return Err(CommerceError::InvalidState(
                "finished quiz is missing answers".to_string(),
            ));
        }
        Ok(Self {
            step: saved.step,
            answers: saved.answers,
            recommendation: saved.recommendation,
        })
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based index of the current question.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn current_question(&self) -> QuestionId {
        QuestionId::ALL[self.step]
    }

    /// Progress through the quiz, counting the current question as reached.
    pub fn progress_percent(&self) -> u8 {
        let total = QuestionId::ALL.len();
        (((self.step + 1) * 100 + total / 2) / total) as u8
    }

    pub fn answers(&self) -> &PartialAnswers {
        &self.answers
    }

    /// Label of the answer already given for the current question, if any.
    pub fn selected_option(&self) -> Option<&'static str> {
        match self.current_question() {
            QuestionId::SleepPosition => self.answers.sleep_position.map(|o| o.label()),
            QuestionId::Priority => self.answers.priority.map(|o| o.label()),
            QuestionId::Firmness => self.answers.firmness.map(|o| o.label()),
            QuestionId::Budget => self.answers.budget.map(|o| o.label()),
        }
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.recommendation.is_some()
    }

    /// Answer the current question with an option label or key.
    ///
    /// Answering the last question computes the recommendation.
    pub fn answer(&mut self, option: &str) -> Result<QuizProgress, CommerceError> {
        if self.is_finished() {
            return Err(CommerceError::QuizAlreadyComplete);
        }

        let question = self.current_question();
        match question {
            QuestionId::SleepPosition => {
                self.answers.sleep_position = Some(SleepPosition::parse(option)?)
            }
            QuestionId::Priority => self.answers.priority = Some(Priority::parse(option)?),
            QuestionId::Firmness => self.answers.firmness = Some(ComfortPreference::parse(option)?),
            QuestionId::Budget => self.answers.budget = Some(Budget::parse(option)?),
        }
        debug!(question = question.as_str(), answer = option, "quiz answer");

        if self.step + 1 < QuestionId::ALL.len() {
            self.step += 1;
            return Ok(QuizProgress::Next(self.current_question()));
        }

        let answers = self.answers.complete()?;
        let recommendation = recommend(&answers);
        self.recommendation = Some(recommendation.clone());
        Ok(QuizProgress::Finished(recommendation))
    }

    /// Go back one question, keeping earlier answers.
    ///
    /// Returns false on the first question or once the quiz is finished.
    pub fn back(&mut self) -> bool {
        if self.step == 0 || self.is_finished() {
            return false;
        }
        self.step -= 1;
        true
    }

    /// Start over.
    pub fn retake(&mut self) {
        *self = Self::new();
    }
}
