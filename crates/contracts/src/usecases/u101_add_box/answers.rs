use serde::{Deserialize, Serialize};

/// Количество вопросов в мастере добавления коробки
pub const QUESTION_COUNT: u8 = 6;

/// Номер вопроса мастера, всегда в диапазоне 1..=6
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuestionStep(u8);

impl QuestionStep {
    pub const FIRST: QuestionStep = QuestionStep(1);
    pub const LAST: QuestionStep = QuestionStep(QUESTION_COUNT);

    pub fn new(number: u8) -> Option<Self> {
        (1..=QUESTION_COUNT)
            .contains(&number)
            .then_some(QuestionStep(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based slot in [`BoxAnswers`]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Steps 1 (flavor) and 4 (purchase location) hold abbreviations
    /// that are checked against the backend lookup table.
    pub fn is_abbreviation_bearing(self) -> bool {
        matches!(self.0, 1 | 4)
    }

    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    pub fn all() -> impl Iterator<Item = QuestionStep> {
        (1..=QUESTION_COUNT).map(QuestionStep)
    }

    /// Field id in the form markup (`q1`..`q6`)
    pub fn field_id(self) -> String {
        format!("q{}", self.0)
    }

    /// Panel id in the form markup (`question1`..`question6`)
    pub fn panel_id(self) -> String {
        format!("question{}", self.0)
    }
}

impl std::fmt::Display for QuestionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ответы на шесть вопросов мастера.
///
/// 1. flavor (аббревиатура)
/// 2. purchase date
/// 3. price
/// 4. purchase location (аббревиатура)
/// 5. start date
/// 6. finish date
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxAnswers {
    pub q1: String,
    pub q2: String,
    pub q3: String,
    pub q4: String,
    pub q5: String,
    pub q6: String,
}

impl BoxAnswers {
    pub fn from_values<S: Into<String>>(values: [S; QUESTION_COUNT as usize]) -> Self {
        let [q1, q2, q3, q4, q5, q6]: [String; QUESTION_COUNT as usize] = values.map(Into::into);
        Self { q1, q2, q3, q4, q5, q6 }
    }

    pub fn get(&self, step: QuestionStep) -> &str {
        match step.number() {
            1 => &self.q1,
            2 => &self.q2,
            3 => &self.q3,
            4 => &self.q4,
            5 => &self.q5,
            _ => &self.q6,
        }
    }

    pub fn set(&mut self, step: QuestionStep, value: impl Into<String>) {
        let slot = match step.number() {
            1 => &mut self.q1,
            2 => &mut self.q2,
            3 => &mut self.q3,
            4 => &mut self.q4,
            5 => &mut self.q5,
            _ => &mut self.q6,
        };
        *slot = value.into();
    }
}
