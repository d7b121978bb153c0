use serde::{Deserialize, Serialize};

use crate::config::GRADE;

// --- Fixed choice sets -------------------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum MoodChoice {
    Happy,
    Excited,
    Calm,
    Focused,
    Tired,
    Confused,
}

impl MoodChoice {
    pub const ALL: [MoodChoice; 6] = [
        MoodChoice::Happy,
        MoodChoice::Excited,
        MoodChoice::Calm,
        MoodChoice::Focused,
        MoodChoice::Tired,
        MoodChoice::Confused,
    ];

    /// Token sent to the backend as the mood.
    pub fn token(self) -> &'static str {
        match self {
            MoodChoice::Happy => "happy",
            MoodChoice::Excited => "excited",
            MoodChoice::Calm => "calm",
            MoodChoice::Focused => "focused",
            MoodChoice::Tired => "tired",
            MoodChoice::Confused => "confused",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MoodChoice::Happy => "😊",
            MoodChoice::Excited => "🤩",
            MoodChoice::Calm => "😌",
            MoodChoice::Focused => "🧐",
            MoodChoice::Tired => "😴",
            MoodChoice::Confused => "😕",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Math,
    Science,
}

impl Subject {
    pub const ALL: [Subject; 2] = [Subject::Math, Subject::Science];

    pub fn token(self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Science => "science",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Subject::Math => "🔢 Math",
            Subject::Science => "🔬 Science",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Display order of the question cards.
    pub const ORDERED: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn key(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Difficulty::Easy => "🟢",
            Difficulty::Medium => "🟡",
            Difficulty::Hard => "🔴",
        }
    }
}

// --- Wire types --------------------------------------------------------------

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Questions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard: Option<String>,
}

impl Questions {
    pub fn get(&self, difficulty: Difficulty) -> Option<&str> {
        match difficulty {
            Difficulty::Easy => self.easy.as_deref(),
            Difficulty::Medium => self.medium.as_deref(),
            Difficulty::Hard => self.hard.as_deref(),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Worksheet {
    pub worksheet_id: String,
    #[serde(default)]
    pub motivation: Option<String>,
    #[serde(rename = "motivationEmoji", default)]
    pub motivation_emoji: Option<String>,
    #[serde(default)]
    pub questions: Questions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_analysis: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct GenerateRequest {
    pub mood: String,
    pub subject: Subject,
    pub grade: String,
}

impl GenerateRequest {
    pub fn new(mood: impl Into<String>, subject: Subject) -> Self {
        Self {
            mood: mood.into(),
            subject,
            grade: GRADE.to_string(),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct PdfRequest {
    pub worksheet_id: String,
    pub mood: String,
    pub subject: Option<Subject>,
    pub motivation: Option<String>,
    #[serde(rename = "motivationEmoji")]
    pub motivation_emoji: Option<String>,
    pub questions: Questions,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn worksheet_decodes_with_missing_tier_and_extras() {
        let body = json!({
            "worksheet_id": "b9e1",
            "motivation": "You can do it!",
            "motivationEmoji": "🚀",
            "questions": { "easy": "Q1", "hard": "Q3" },
            "mood_analysis": { "learning_mood": "happy", "confidence": 0.8 },
            "subject": "math",
            "grade_level": "5-10",
            "timestamp": "2025-01-01T10:00:00"
        });
        let ws: Worksheet = serde_json::from_value(body).unwrap();
        assert_eq!(ws.motivation_emoji.as_deref(), Some("🚀"));
        assert_eq!(ws.questions.get(Difficulty::Easy), Some("Q1"));
        assert_eq!(ws.questions.get(Difficulty::Medium), None);
        assert!(ws.mood_analysis.is_some());
    }

    #[test]
    fn generate_request_uses_wire_names() {
        let req = GenerateRequest::new("sleepy but ok", Subject::Science);
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(
            v,
            json!({ "mood": "sleepy but ok", "subject": "science", "grade": "5-10" })
        );
    }

    #[test]
    fn pdf_request_renames_emoji_and_skips_absent_tiers() {
        let req = PdfRequest {
            worksheet_id: "42".into(),
            mood: "happy".into(),
            subject: Some(Subject::Math),
            motivation: Some("Go!".into()),
            motivation_emoji: Some("🎉".into()),
            questions: Questions {
                easy: Some("Q1".into()),
                medium: None,
                hard: None,
            },
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["motivationEmoji"], "🎉");
        assert_eq!(v["subject"], "math");
        assert_eq!(v["questions"], json!({ "easy": "Q1" }));
    }

    #[test]
    fn only_healthy_counts() {
        let ok: HealthStatus = serde_json::from_str(r#"{"status":"healthy"}"#).unwrap();
        let bad: HealthStatus = serde_json::from_str(r#"{"status":"unhealthy"}"#).unwrap();
        assert!(ok.is_healthy());
        assert!(!bad.is_healthy());
    }

    #[test]
    fn tokens_match_backend_vocabulary() {
        assert_eq!(MoodChoice::Tired.token(), "tired");
        assert_eq!(Subject::Math.token(), "math");
        assert_eq!(
            serde_json::to_value(MoodChoice::Excited).unwrap(),
            json!("excited")
        );
    }
}
