use core::fmt;

use serde::{Deserialize, Serialize};

/// A single labelled answer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    pub label: String,
    pub value: String,
}

impl Answer {
    /// Construct a new answer, falling back to `Part {n}:` if `label` is not
    /// specified.
    pub fn new(label: Option<&str>, n: usize, value: impl fmt::Display) -> Self {
        let label = match label {
            Some(label) => label.to_owned(),
            None => format!("Part {}:", n + 1),
        };

        Self {
            label,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}.", self.label, self.value)
    }
}

/// The output of a solution which can be presented as answers.
pub trait Answers {
    /// Convert into answers, using labels by position.
    fn answers(&self, labels: &[&str]) -> Vec<Answer>;
}

impl<A, B> Answers for (A, B)
where
    A: fmt::Display,
    B: fmt::Display,
{
    fn answers(&self, labels: &[&str]) -> Vec<Answer> {
        vec![
            Answer::new(labels.first().copied(), 0, &self.0),
            Answer::new(labels.get(1).copied(), 1, &self.1),
        ]
    }
}
