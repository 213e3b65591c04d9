//! Recommendation rules.
//!
//! Rules are checked in order and the first one that applies decides the
//! archetype. When none applies the everyday rule is used.

use crate::catalog::Category;
use crate::finder::{Budget, ComfortPreference, Priority, QuizAnswers, SleepPosition};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The four recommendation outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Archetype {
    Ortho,
    Plush,
    Spring,
    Everyday,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::Ortho,
        Archetype::Plush,
        Archetype::Spring,
        Archetype::Everyday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Ortho => "ORTHO",
            Archetype::Plush => "PLUSH",
            Archetype::Spring => "SPRING",
            Archetype::Everyday => "EVERYDAY",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Archetype::Ortho => "🌿",
            Archetype::Plush => "☁️",
            Archetype::Spring => "⚡",
            Archetype::Everyday => "🏠",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Archetype::Ortho => "Orthopedic Support",
            Archetype::Plush => "Plush Cloud Comfort",
            Archetype::Spring => "Responsive & Bouncy",
            Archetype::Everyday => "Everyday Comfort",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Archetype::Ortho => "Based on your needs, we recommend our orthopedic support mattresses that provide firm support and spine alignment for pain relief.",
            Archetype::Plush => "Based on your preferences, we recommend our plush foam mattresses that offer soft, cloud-like comfort with excellent pressure relief.",
            Archetype::Spring => "Based on your preferences, we recommend our spring mattresses that provide responsive, bouncy support with hotel-quality comfort.",
            Archetype::Everyday => "Based on your needs, we recommend our balanced mattresses that offer reliable comfort for everyday family use.",
        }
    }
}

/// Outcome of a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Which rule decided the outcome.
    pub archetype: Archetype,
    pub emoji: String,
    pub title: String,
    /// Collection heading, e.g. "Foam Mattresses".
    pub category: String,
    /// Collection to open from the result screen.
    pub collection: Category,
    pub description: String,
    /// Suggested model names, best match first.
    pub models: Vec<String>,
}

/// Collection and model pair chosen by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Suggestion {
    collection: Category,
    models: [&'static str; 2],
}

const fn suggest(collection: Category, first: &'static str, second: &'static str) -> Suggestion {
    Suggestion {
        collection,
        models: [first, second],
    }
}

/// One entry of the ordered rule table.
struct Rule {
    archetype: Archetype,
    applies: fn(&QuizAnswers) -> bool,
    suggest: fn(&QuizAnswers) -> Suggestion,
}

static RULES: [Rule; 3] = [
    Rule {
        archetype: Archetype::Ortho,
        applies: ortho_applies,
        suggest: ortho_models,
    },
    Rule {
        archetype: Archetype::Plush,
        applies: plush_applies,
        suggest: plush_models,
    },
    Rule {
        archetype: Archetype::Spring,
        applies: spring_applies,
        suggest: spring_models,
    },
];

static EVERYDAY: Rule = Rule {
    archetype: Archetype::Everyday,
    applies: everyday_applies,
    suggest: everyday_models,
};

fn ortho_applies(a: &QuizAnswers) -> bool {
    a.priority == Priority::PainRelief
        || (a.sleep_position.is_back_or_stomach() && a.firmness.is_firm())
}

fn ortho_models(a: &QuizAnswers) -> Suggestion {
    if a.budget.is_value() {
        suggest(Category::Coir, "SKY ORTHO", "SKY PRIME")
    } else if a.firmness.is_firm() {
        suggest(Category::Coir, "SKY ORTHO", "SKY NIMBUS")
    } else {
        suggest(Category::Coir, "SKY STAR", "SKY NIMBUS")
    }
}

fn plush_applies(a: &QuizAnswers) -> bool {
    a.priority == Priority::Plush
        || (a.sleep_position.is_side_or_combination()
            && a.firmness == ComfortPreference::SoftPlush)
}

fn plush_models(a: &QuizAnswers) -> Suggestion {
    match a.budget {
        Budget::BudgetFriendly => suggest(Category::Foam, "SKY PETAL", "SKY ECO BOND"),
        Budget::MidRange => suggest(Category::Foam, "SKY DAISY", "SKY ROSE"),
        Budget::Premium => suggest(Category::Foam, "SKY IRIS", "SKY SOFT"),
        Budget::Luxury => suggest(Category::Foam, "SKY LATEX BLISS", "SKY NIMBUS"),
    }
}

fn spring_applies(a: &QuizAnswers) -> bool {
    a.priority == Priority::Hotel
        || (a.firmness == ComfortPreference::Medium
            && a.sleep_position == SleepPosition::Combination)
}

fn spring_models(a: &QuizAnswers) -> Suggestion {
    match a.budget {
        Budget::BudgetFriendly => suggest(Category::Spring, "SKY SAPPHIRE", "SKY EMERALD"),
        Budget::MidRange => suggest(Category::Spring, "SKY RUBY", "SKY OPAL"),
        Budget::Premium => suggest(Category::Spring, "SKY LUXURY", "SKY PARADISE"),
        Budget::Luxury => suggest(Category::Spring, "SKY ECSTASY", "SKY HOTEL SERIES"),
    }
}

fn everyday_applies(_: &QuizAnswers) -> bool {
    true
}

fn everyday_models(a: &QuizAnswers) -> Suggestion {
    match a.budget {
        Budget::BudgetFriendly => suggest(Category::Coir, "SKY LITE", "SKY ECO"),
        Budget::MidRange => suggest(Category::Coir, "SKY PRIME", "SKY SAPPHIRE"),
        Budget::Premium => suggest(Category::Spring, "SKY STAR", "SKY LUXURY"),
        Budget::Luxury => suggest(Category::Spring, "SKY NIMBUS", "SKY ECSTASY"),
    }
}

/// Pick the archetype for a set of answers.
pub fn archetype_for(answers: &QuizAnswers) -> Archetype {
    select_rule(answers).archetype
}

fn select_rule(answers: &QuizAnswers) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| (rule.applies)(answers))
        .unwrap_or(&EVERYDAY)
}

/// Recommend mattresses for a completed quiz.
pub fn recommend(answers: &QuizAnswers) -> Recommendation {
    let rule = select_rule(answers);
    debug_assert!((rule.applies)(answers));
    let suggestion = (rule.suggest)(answers);
    let archetype = rule.archetype;

    debug!(
        archetype = archetype.as_str(),
        sleep_position = answers.sleep_position.as_str(),
        priority = answers.priority.as_str(),
        firmness = answers.firmness.as_str(),
        budget = answers.budget.as_str(),
        "quiz recommendation"
    );

    Recommendation {
        archetype,
        emoji: archetype.emoji().to_string(),
        title: archetype.title().to_string(),
        category: suggestion.collection.collection_title().to_string(),
        collection: suggestion.collection,
        description: archetype.description().to_string(),
        models: suggestion.models.iter().map(|m| m.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(
        sleep: SleepPosition,
        priority: Priority,
        firmness: ComfortPreference,
        budget: Budget,
    ) -> QuizAnswers {
        QuizAnswers::new(sleep, priority, firmness, budget)
    }

    #[test]
    fn test_every_combination_yields_two_models() {
        for a in QuizAnswers::all_combinations() {
            let rec = recommend(&a);
            assert_eq!(rec.models.len(), 2, "{:?}", a);
            assert!(Archetype::ALL.contains(&rec.archetype));
        }
    }

    #[test]
    fn test_ortho_beats_plush() {
        // Pain relief priority with a side sleeper wanting soft: both ORTHO and PLUSH apply.
        let a = answers(
            SleepPosition::Side,
            Priority::PainRelief,
            ComfortPreference::SoftPlush,
            Budget::Luxury,
        );
        assert!(plush_applies(&a));
        let rec = recommend(&a);
        assert_eq!(rec.archetype, Archetype::Ortho);
        assert_eq!(rec.models, vec!["SKY STAR", "SKY NIMBUS"]);
        assert_eq!(rec.category, "Coir Mattresses");
    }

    #[test]
    fn test_ortho_by_position_and_firmness() {
        let a = answers(
            SleepPosition::Stomach,
            Priority::Plush,
            ComfortPreference::ExtraFirm,
            Budget::Premium,
        );
        let rec = recommend(&a);
        assert_eq!(rec.archetype, Archetype::Ortho);
        assert_eq!(rec.models, vec!["SKY ORTHO", "SKY NIMBUS"]);
    }

    #[test]
    fn test_ortho_value_budget() {
        let a = answers(
            SleepPosition::Back,
            Priority::PainRelief,
            ComfortPreference::Medium,
            Budget::MidRange,
        );
        assert_eq!(recommend(&a).models, vec!["SKY ORTHO", "SKY PRIME"]);
    }

    #[test]
    fn test_plush_by_priority() {
        let a = answers(
            SleepPosition::Back,
            Priority::Plush,
            ComfortPreference::Medium,
            Budget::BudgetFriendly,
        );
        let rec = recommend(&a);
        assert_eq!(rec.archetype, Archetype::Plush);
        assert_eq!(rec.category, "Foam Mattresses");
        assert_eq!(rec.models, vec!["SKY PETAL", "SKY ECO BOND"]);
        assert_eq!(rec.emoji, "☁️");
    }

    #[test]
    fn test_plush_by_position_and_feel() {
        let a = answers(
            SleepPosition::Combination,
            Priority::Everyday,
            ComfortPreference::SoftPlush,
            Budget::Premium,
        );
        let rec = recommend(&a);
        assert_eq!(rec.archetype, Archetype::Plush);
        assert_eq!(rec.models, vec!["SKY IRIS", "SKY SOFT"]);
    }

    #[test]
    fn test_spring_by_combination_medium() {
        let a = answers(
            SleepPosition::Combination,
            Priority::Everyday,
            ComfortPreference::Medium,
            Budget::Luxury,
        );
        let rec = recommend(&a);
        assert_eq!(rec.archetype, Archetype::Spring);
        assert_eq!(rec.title, "Responsive & Bouncy");
        assert_eq!(rec.models, vec!["SKY ECSTASY", "SKY HOTEL SERIES"]);
        assert_eq!(rec.collection, Category::Spring);
    }

    #[test]
    fn test_everyday_category_follows_budget() {
        let base = answers(
            SleepPosition::Side,
            Priority::Everyday,
            ComfortPreference::Firm,
            Budget::BudgetFriendly,
        );
        let rec = recommend(&base);
        assert_eq!(rec.archetype, Archetype::Everyday);
        assert_eq!(rec.category, "Coir Mattresses");
        assert_eq!(rec.models, vec!["SKY LITE", "SKY ECO"]);

        let premium = QuizAnswers { budget: Budget::Premium, ..base };
        let rec = recommend(&premium);
        assert_eq!(rec.category, "Spring Mattresses");
        assert_eq!(rec.models, vec!["SKY STAR", "SKY LUXURY"]);
    }

    #[test]
    fn test_display_strings_depend_only_on_archetype() {
        for a in QuizAnswers::all_combinations() {
            let rec = recommend(&a);
            assert_eq!(rec.title, rec.archetype.title());
            assert_eq!(rec.description, rec.archetype.description());
            assert_eq!(rec.emoji, rec.archetype.emoji());
        }
    }

    #[test]
    fn test_archetype_for_matches_recommend() {
        for a in QuizAnswers::all_combinations() {
            assert_eq!(archetype_for(&a), recommend(&a).archetype);
        }
    }
}
