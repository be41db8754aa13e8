//! Style-preference quiz: fixed questionnaire plus the rule-based scorer.

pub mod catalog;
pub mod scorer;

pub use catalog::{profile, public_questions, PublicOption, PublicQuestion, StyleProfile, QUESTIONS};
pub use scorer::{score, tally, QuizAnswer, RankedStyle};
