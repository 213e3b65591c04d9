//! Mattress finder quiz.
//!
//! Four questions map to one of four archetypes, each with a collection and
//! two suggested models.

mod answers;
mod rules;
mod session;

pub use answers::{Budget, ComfortPreference, PartialAnswers, Priority, QuizAnswers, SleepPosition};
pub use rules::{archetype_for, recommend, Archetype, Recommendation};
pub use session::{QuestionId, QuizProgress, QuizSession};
