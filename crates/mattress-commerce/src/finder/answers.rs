//! Quiz answer types.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Generates a quiz option enum with its short key and on-screen label.
///
/// Parsing accepts either form, ignoring case and surrounding whitespace.
macro_rules! define_option {
    ($(#[$meta:meta])* $name:ident, $question:literal {
        $($variant:ident => ($key:literal, $label:literal)),+ $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every option, in the order the quiz shows them.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Question id this option answers.
            pub const QUESTION: &'static str = $question;

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn from_str(s: &str) -> Option<Self> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|o| o.as_str().eq_ignore_ascii_case(s) || o.label().eq_ignore_ascii_case(s))
            }

            pub fn parse(s: &str) -> Result<Self, CommerceError> {
                Self::from_str(s).ok_or_else(|| CommerceError::UnknownQuizOption {
                    question: $question.to_string(),
                    answer: s.to_string(),
                })
            }
        }
    };
}

define_option!(
    /// Preferred sleep position.
    SleepPosition, "sleepPosition" {
        Side => ("side", "Side Sleeper"),
        Back => ("back", "Back Sleeper"),
        Stomach => ("stomach", "Stomach Sleeper"),
        Combination => ("combination", "Combination Sleeper"),
    }
);

define_option!(
    /// What matters most in the new mattress.
    Priority, "priority" {
        PainRelief => ("pain-relief", "Back / neck pain relief (orthopedic support)"),
        Everyday => ("everyday", "Everyday comfort for the whole family"),
        Plush => ("plush", "Soft, plush 'cloud-like' feel"),
        Hotel => ("hotel", "Hotel-style bouncy feel"),
    }
);

define_option!(
    /// Preferred comfort feel.
    ComfortPreference, "firmness" {
        SoftPlush => ("soft-plush", "Soft & Plush"),
        Medium => ("medium", "Medium"),
        Firm => ("firm", "Firm"),
        ExtraFirm => ("extra-firm", "Extra Firm"),
    }
);

define_option!(
    /// Budget bracket.
    Budget, "budget" {
        BudgetFriendly => ("budget-friendly", "Budget-Friendly"),
        MidRange => ("mid-range", "Mid-Range"),
        Premium => ("premium", "Premium"),
        Luxury => ("luxury", "Luxury"),
    }
);

impl SleepPosition {
    pub fn is_back_or_stomach(&self) -> bool {
        matches!(self, SleepPosition::Back | SleepPosition::Stomach)
    }

    pub fn is_side_or_combination(&self) -> bool {
        matches!(self, SleepPosition::Side | SleepPosition::Combination)
    }
}

impl ComfortPreference {
    pub fn is_firm(&self) -> bool {
        matches!(self, ComfortPreference::Firm | ComfortPreference::ExtraFirm)
    }
}

impl Budget {
    /// Budget-Friendly or Mid-Range.
    pub fn is_value(&self) -> bool {
        matches!(self, Budget::BudgetFriendly | Budget::MidRange)
    }
}

/// A completed set of quiz answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswers {
    pub sleep_position: SleepPosition,
    pub priority: Priority,
    pub firmness: ComfortPreference,
    pub budget: Budget,
}

impl QuizAnswers {
    pub fn new(
        sleep_position: SleepPosition,
        priority: Priority,
        firmness: ComfortPreference,
        budget: Budget,
    ) -> Self {
        Self {
            sleep_position,
            priority,
            firmness,
            budget,
        }
    }

    /// Parse answers from their keys or labels.
    pub fn parse(
        sleep_position: &str,
        priority: &str,
        firmness: &str,
        budget: &str,
    ) -> Result<Self, CommerceError> {
        Ok(Self::new(
            SleepPosition::parse(sleep_position)?,
            Priority::parse(priority)?,
            ComfortPreference::parse(firmness)?,
            Budget::parse(budget)?,
        ))
    }

    /// Every possible answer combination.
    pub fn all_combinations() -> impl Iterator<Item = QuizAnswers> {
        SleepPosition::ALL.iter().flat_map(|&sleep| {
            Priority::ALL.iter().flat_map(move |&priority| {
                ComfortPreference::ALL.iter().flat_map(move |&firmness| {
                    Budget::ALL
                        .iter()
                        .map(move |&budget| QuizAnswers::new(sleep, priority, firmness, budget))
                })
            })
        })
    }
}

/// Answers collected so far; every field is optional until the quiz ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialAnswers {
    pub sleep_position: Option<SleepPosition>,
    pub priority: Option<Priority>,
    pub firmness: Option<ComfortPreference>,
    pub budget: Option<Budget>,
}

impl PartialAnswers {
    /// Question ids still unanswered.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.sleep_position.is_none() {
            missing.push(SleepPosition::QUESTION);
        }
        if self.priority.is_none() {
            missing.push(Priority::QUESTION);
        }
        if self.firmness.is_none() {
            missing.push(ComfortPreference::QUESTION);
        }
        if self.budget.is_none() {
            missing.push(Budget::QUESTION);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Convert to complete answers, naming what is missing otherwise.
    pub fn complete(&self) -> Result<QuizAnswers, CommerceError> {
        match (self.sleep_position, self.priority, self.firmness, self.budget) {
            (Some(sleep), Some(priority), Some(firmness), Some(budget)) => {
                Ok(QuizAnswers::new(sleep, priority, firmness, budget))
            }
            _ => Err(CommerceError::QuizIncomplete(self.missing().join(", "))),
        }
    }
}

impl From<QuizAnswers> for PartialAnswers {
    fn from(answers: QuizAnswers) -> Self {
        Self {
            sleep_position: Some(answers.sleep_position),
            priority: Some(answers.priority),
            firmness: Some(answers.firmness),
            budget: Some(answers.budget),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_and_key() {
        assert_eq!(SleepPosition::from_str("Side Sleeper"), Some(SleepPosition::Side));
        assert_eq!(SleepPosition::from_str("side"), Some(SleepPosition::Side));
        assert_eq!(
            Priority::from_str("soft, plush 'cloud-like' feel"),
            Some(Priority::Plush)
        );
        assert_eq!(ComfortPreference::from_str("Extra Firm"), Some(ComfortPreference::ExtraFirm));
        assert_eq!(Budget::from_str(" Budget-Friendly "), Some(Budget::BudgetFriendly));
    }

    #[test]
    fn test_unknown_option_names_question() {
        let err = Budget::parse("cheap").unwrap_err();
        assert_eq!(
            err,
            CommerceError::UnknownQuizOption {
                question: "budget".to_string(),
                answer: "cheap".to_string(),
            }
        );
    }

    #[test]
    fn test_all_combinations() {
        let all: Vec<QuizAnswers> = QuizAnswers::all_combinations().collect();
        assert_eq!(all.len(), 256);
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 256);
    }

    #[test]
    fn test_partial_answers_missing() {
        let mut partial = PartialAnswers::default();
        assert_eq!(partial.missing().len(), 4);
        partial.priority = Some(Priority::Hotel);
        partial.budget = Some(Budget::Luxury);
        assert_eq!(partial.missing(), vec!["sleepPosition", "firmness"]);
        assert!(matches!(partial.complete(), Err(CommerceError::QuizIncomplete(_))));
    }

    #[test]
    fn test_partial_answers_complete() {
        let answers = QuizAnswers::new(
            SleepPosition::Back,
            Priority::Everyday,
            ComfortPreference::Medium,
            Budget::Premium,
        );
        let partial = PartialAnswers::from(answers);
        assert!(partial.is_complete());
        assert_eq!(partial.complete().unwrap(), answers);
    }

    #[test]
    fn test_answers_serialize_as_keys() {
        let answers = QuizAnswers::parse("combination", "hotel", "medium", "mid-range").unwrap();
        let json = serde_json::to_value(answers).unwrap();
        assert_eq!(json["sleepPosition"], "combination");
        assert_eq!(json["priority"], "hotel");
        assert_eq!(json["budget"], "mid-range");
    }
}
