//! The built-in quiz run when no quiz file is given.

use crate::question::Question;
use crate::quiz::Quiz;

/// Build the two-question sample quiz.
pub fn sample_quiz() -> Quiz {
    let mut quiz = Quiz::new("Sample Quiz");

    quiz.add_question(Question::multiple_choice(
        "What is the capital of France?",
        ["Paris", "London", "Rome", "Berlin"],
        "Paris",
    ));
    quiz.add_question(Question::true_false("The Earth is flat.", "False"));

    quiz
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::validate_quiz;

    #[test]
    fn sample_has_one_of_each_kind() {
        let quiz = sample_quiz();
        assert_eq!(quiz.len(), 2);
        assert!(matches!(quiz.questions()[0], Question::MultipleChoice { .. }));
        assert!(matches!(quiz.questions()[1], Question::TrueFalse { .. }));
    }

    #[test]
    fn sample_is_consistent() {
        assert!(validate_quiz(&sample_quiz()).is_empty());
    }
}
