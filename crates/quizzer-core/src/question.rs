//! Question kinds and answer checking.
//!
//! The set of question kinds is closed, so `Question` is a sum type and
//! rendering and checking dispatch with `match`.

use std::fmt;

use crate::error::QuizError;

/// Highest number of options a multiple-choice question can label.
pub const MAX_OPTIONS: usize = 26;

/// A single quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    /// Options are labelled A, B, C, ... in order; the user answers with a letter.
    MultipleChoice {
        prompt: String,
        options: Vec<String>,
        /// Text of the correct option.
        answer: String,
    },
    /// The user answers with the word "true" or "false".
    TrueFalse { prompt: String, answer: String },
}

impl Question {
    /// Create a multiple-choice question. The answer is not checked against
    /// the options here; see [`crate::parser::validate_quiz`].
    pub fn multiple_choice<P, O, A>(prompt: P, options: O, answer: A) -> Self
    where
        P: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
        A: Into<String>,
    {
        Question::MultipleChoice {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }

    /// Create a true/false question.
    pub fn true_false(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Question::TrueFalse {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Question::MultipleChoice { prompt, .. } | Question::TrueFalse { prompt, .. } => prompt,
        }
    }

    /// The canonical correct answer.
    pub fn answer(&self) -> &str {
        match self {
            Question::MultipleChoice { answer, .. } | Question::TrueFalse { answer, .. } => answer,
        }
    }

    /// Short human-readable name of the question kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Question::MultipleChoice { .. } => "multiple choice",
            Question::TrueFalse { .. } => "true/false",
        }
    }

    /// Render the question as shown to the user. Every line, including the
    /// last, ends with a newline.
    pub fn render(&self) -> String {
        match self {
            Question::MultipleChoice {
                prompt, options, ..
            } => {
                let mut out = format!("{prompt}\n");
                for (i, option) in options.iter().enumerate() {
                    out.push_str(&format!("{}. {option}\n", option_letter(i)));
                }
                out
            }
            Question::TrueFalse { prompt, .. } => format!("{prompt} (True/False)\n"),
        }
    }

    /// Check a candidate answer.
    ///
    /// Returns `Ok(false)` for a wrong answer. Multiple-choice questions
    /// return an invalid-input error when the candidate is empty or its
    /// first letter is outside the option range. True/false questions never
    /// error.
    pub fn check_answer(&self, candidate: &str) -> Result<bool, QuizError> {
        match self {
            Question::MultipleChoice {
                options, answer, ..
            } => {
                let index = selection_index(candidate, options.len())?;
                Ok(eq_ignore_case(&options[index], answer))
            }
            Question::TrueFalse { answer, .. } => Ok(eq_ignore_case(candidate, answer)),
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Letter label for the option at `index` (0 → 'A'). Options past 'Z'
/// cannot be labelled and get '?'.
pub fn option_letter(index: usize) -> char {
    if index < MAX_OPTIONS {
        char::from(b'A' + index as u8)
    } else {
        '?'
    }
}

/// Map the first character of `candidate` to an option index. Only the
/// lettered options (at most 26) can be selected.
fn selection_index(candidate: &str, option_count: usize) -> Result<usize, QuizError> {
    let option_count = option_count.min(MAX_OPTIONS);
    let first = candidate.chars().next().ok_or(QuizError::EmptySelection)?;
    let selection = first.to_uppercase().next().unwrap_or(first);

    (selection as u32)
        .checked_sub('A' as u32)
        .map(|i| i as usize)
        .filter(|&i| i < option_count)
        .ok_or(QuizError::SelectionOutOfRange {
            selection,
            last: option_letter(option_count.saturating_sub(1)),
        })
}

pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capital_of_france() -> Question {
        Question::multiple_choice(
            "What is the capital of France?",
            ["Paris", "London", "Rome", "Berlin"],
            "Paris",
        )
    }

    fn flat_earth() -> Question {
        Question::true_false("The Earth is flat.", "False")
    }

    #[test]
    fn multiple_choice_render() {
        assert_eq!(
            capital_of_france().render(),
            "What is the capital of France?\nA. Paris\nB. London\nC. Rome\nD. Berlin\n"
        );
    }

    #[test]
    fn true_false_render() {
        assert_eq!(flat_earth().render(), "The Earth is flat. (True/False)\n");
    }

    #[test]
    fn render_is_idempotent_and_matches_display() {
        for q in [capital_of_france(), flat_earth()] {
            assert_eq!(q.render(), q.render());
            assert_eq!(q.to_string(), q.render());
        }
    }

    #[test]
    fn multiple_choice_letters() {
        let q = capital_of_france();
        assert!(q.check_answer("A").unwrap());
        assert!(q.check_answer("a").unwrap());
        assert!(!q.check_answer("B").unwrap());
        assert!(!q.check_answer("d").unwrap());
    }

    #[test]
    fn multiple_choice_uses_only_first_character() {
        let q = capital_of_france();
        assert!(q.check_answer("Apple").unwrap());
        assert!(!q.check_answer("Berlin").unwrap());
    }

    #[test]
    fn multiple_choice_compares_option_text_case_insensitively() {
        let q = Question::multiple_choice("Pick", ["yes", "no"], "YES");
        assert!(q.check_answer("A").unwrap());
    }

    #[test]
    fn multiple_choice_every_letter_agrees_with_options() {
        let q = capital_of_france();
        let Question::MultipleChoice {
            options, answer, ..
        } = &q
        else {
            unreachable!()
        };
        for (i, option) in options.iter().enumerate() {
            let letter = option_letter(i).to_string();
            assert_eq!(
                q.check_answer(&letter).unwrap(),
                option.eq_ignore_ascii_case(answer)
            );
        }
    }

    #[test]
    fn multiple_choice_empty_input_is_invalid() {
        let err = capital_of_france().check_answer("").unwrap_err();
        assert!(matches!(err, QuizError::EmptySelection));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn multiple_choice_out_of_range_is_invalid() {
        let err = capital_of_france().check_answer("E").unwrap_err();
        assert!(matches!(
            err,
            QuizError::SelectionOutOfRange {
                selection: 'E',
                last: 'D'
            }
        ));
    }

    #[test]
    fn multiple_choice_below_a_is_invalid() {
        for candidate in ["1", "@", " "] {
            let err = capital_of_france().check_answer(candidate).unwrap_err();
            assert!(err.is_invalid_input(), "{candidate:?} should be invalid");
        }
    }

    #[test]
    fn true_false_is_case_insensitive() {
        let q = flat_earth();
        assert!(q.check_answer("false").unwrap());
        assert!(q.check_answer("FALSE").unwrap());
        assert!(!q.check_answer("True").unwrap());
    }

    #[test]
    fn true_false_never_errors() {
        let q = flat_earth();
        for candidate in ["", "maybe", "A", "no"] {
            assert!(!q.check_answer(candidate).unwrap());
        }
    }

    #[test]
    fn check_answer_is_idempotent() {
        let q = capital_of_france();
        assert_eq!(q.check_answer("A").unwrap(), q.check_answer("A").unwrap());
    }

    #[test]
    fn option_letters() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
        assert_eq!(option_letter(25), 'Z');
        assert_eq!(option_letter(26), '?');
        assert_eq!(option_letter(usize::MAX), '?');
    }

    #[test]
    fn options_past_z_are_not_selectable() {
        let options: Vec<String> = (0..28).map(|i| format!("option {i}")).collect();
        let q = Question::multiple_choice("Pick", options, "option 26");
        assert!(q.render().contains("?. option 26\n"));
        assert!(!q.render().contains('['));
        assert!(!q.check_answer("Z").unwrap());
        let err = q.check_answer("[").unwrap_err();
        assert!(matches!(
            err,
            QuizError::SelectionOutOfRange {
                selection: '[',
                last: 'Z'
            }
        ));
    }

    #[test]
    fn accessors() {
        let q = flat_earth();
        assert_eq!(q.prompt(), "The Earth is flat.");
        assert_eq!(q.answer(), "False");
        assert_eq!(q.kind(), "true/false");
        assert_eq!(capital_of_france().kind(), "multiple choice");
    }
}
