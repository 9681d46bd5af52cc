//! Resolution of a raw answer record into its text form.

use super::Answer;

/// The text form of a single reference answer, resolved in the priority
/// order the dataset defines: a free-form answer beats extractive spans,
/// which beat a yes/no verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerText {
    FreeForm(String),
    Extractive(String),
    YesNo(bool),
    Unanswerable,
}

impl AnswerText {
    /// Resolve a raw answer record. Returns `None` when the record carries
    /// no answer information at all.
    pub fn from_answer(answer: &Answer) -> Option<AnswerText> {
        if !answer.free_form_answer.is_empty() {
            return Some(AnswerText::FreeForm(answer.free_form_answer.clone()));
        }
        if !answer.extractive_spans.is_empty() {
            return Some(AnswerText::Extractive(answer.extractive_spans.join(" ")));
        }
        if let Some(yes_no) = answer.yes_no {
            return Some(AnswerText::YesNo(yes_no));
        }
        if answer.unanswerable {
            return Some(AnswerText::Unanswerable);
        }
        None
    }

    /// Rendered answer text, `None` for an unanswerable reference.
    pub fn answerable_text(&self) -> Option<String> {
        match self {
            AnswerText::FreeForm(text) | AnswerText::Extractive(text) => Some(text.clone()),
            AnswerText::YesNo(true) => Some("Yes".to_string()),
            AnswerText::YesNo(false) => Some("No".to_string()),
            AnswerText::Unanswerable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn answer(
        free_form: &str,
        spans: &[&str],
        yes_no: Option<bool>,
        unanswerable: bool,
    ) -> Answer {
        Answer {
            free_form_answer: free_form.to_string(),
            extractive_spans: spans.iter().map(|s| s.to_string()).collect(),
            yes_no,
            unanswerable,
        }
    }

    #[rstest]
    #[case::free_form_wins(
        answer("a free form answer", &["span"], Some(true), true),
        Some("a free form answer".to_string())
    )]
    #[case::spans_join(
        answer("", &["first span", "second span"], None, false),
        Some("first span second span".to_string())
    )]
    #[case::yes(answer("", &[], Some(true), false), Some("Yes".to_string()))]
    #[case::no(answer("", &[], Some(false), false), Some("No".to_string()))]
    #[case::unanswerable(answer("", &[], None, true), None)]
    fn resolves_in_priority_order(#[case] answer: Answer, #[case] expected: Option<String>) {
        let text = AnswerText::from_answer(&answer).and_then(|text| text.answerable_text());
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_record_resolves_to_none() {
        assert_eq!(AnswerText::from_answer(&Answer::default()), None);
    }
}
