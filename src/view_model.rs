use crate::model::{Difficulty, Worksheet};

#[derive(Clone, PartialEq, Debug)]
pub struct QuestionCard {
    pub difficulty: Difficulty,
    pub text: String,
}

impl QuestionCard {
    pub fn badge(&self) -> String {
        format!("{} {}", self.difficulty.icon(), self.difficulty.label())
    }

    pub fn css_class(&self) -> String {
        format!("question-card {}", self.difficulty.key())
    }
}

/// Cards in easy, medium, hard order; tiers with no question are left out.
pub fn question_cards(worksheet: &Worksheet) -> Vec<QuestionCard> {
    Difficulty::ORDERED
        .iter()
        .filter_map(|&difficulty| {
            let text = worksheet.questions.get(difficulty)?;
            if text.trim().is_empty() {
                return None;
            }
            Some(QuestionCard {
                difficulty,
                text: text.to_string(),
            })
        })
        .collect()
}

/// Small caption under the results, e.g. "math · grade 5-10".
pub fn worksheet_caption(worksheet: &Worksheet) -> Option<String> {
    let parts: Vec<String> = [
        worksheet.subject.clone(),
        worksheet.grade_level.as_ref().map(|g| format!("grade {}", g)),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}
