use std::rc::Rc;

use yew::Reducible;

use crate::error::{ClientError, Result};
use crate::model::{GenerateRequest, MoodChoice, PdfRequest, Subject, Worksheet};
use crate::toast::Toasts;

pub const GENERATION_FAILED: &str = "Oops! Something went wrong. Please try again! 🔄";
pub const PDF_FAILED: &str = "Sorry, PDF generation failed. Please try again! 📄";
pub const PDF_SAVED: &str = "PDF downloaded successfully! 📄";

/// The mood comes from exactly one source: the last emoji clicked or the
/// last text typed, whichever happened most recently.
#[derive(Clone, PartialEq, Debug)]
pub enum Mood {
    Preset(MoodChoice),
    Typed(String),
}

impl Mood {
    pub fn value(&self) -> &str {
        match self {
            Mood::Preset(choice) => choice.token(),
            Mood::Typed(text) => text,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Selection {
    mood: Option<Mood>,
    subject: Option<Subject>,
}

impl Selection {
    pub fn select_mood(&mut self, choice: MoodChoice) {
        self.mood = Some(Mood::Preset(choice));
    }

    pub fn record_mood_text(&mut self, text: impl Into<String>) {
        self.mood = Some(Mood::Typed(text.into()));
    }

    pub fn select_subject(&mut self, subject: Subject) {
        self.subject = Some(subject);
    }

    pub fn mood(&self) -> Option<&Mood> {
        self.mood.as_ref()
    }

    pub fn subject(&self) -> Option<Subject> {
        self.subject
    }

    /// Emoji that should render highlighted, if any.
    pub fn selected_emoji(&self) -> Option<MoodChoice> {
        match self.mood {
            Some(Mood::Preset(choice)) => Some(choice),
            _ => None,
        }
    }

    /// Current contents of the free-text mood field.
    pub fn typed_text(&self) -> &str {
        match &self.mood {
            Some(Mood::Typed(text)) => text,
            _ => "",
        }
    }

    pub fn mood_value(&self) -> &str {
        self.mood.as_ref().map(Mood::value).unwrap_or("")
    }

    /// Checks mood first, then subject, and builds the generation request.
    pub fn generate_request(&self) -> Result<GenerateRequest> {
        let mood = self.mood_value();
        if mood.trim().is_empty() {
            return Err(ClientError::MissingMood);
        }
        let subject = self.subject.ok_or(ClientError::MissingSubject)?;
        Ok(GenerateRequest::new(mood, subject))
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct AppState {
    pub selection: Selection,
    pub worksheet: Option<Worksheet>,
    pub loading: bool,
    pub results_visible: bool,
    pub pdf_busy: bool,
    pub notice: Option<String>,
    pub toasts: Toasts,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Action {
    SelectMood(MoodChoice),
    TypeMood(String),
    SelectSubject(Subject),
    /// A precondition failed before any request was made.
    Prompt(ClientError),
    DismissNotice,
    GenerationStarted,
    GenerationSucceeded(Worksheet),
    GenerationFailed(ClientError),
    PdfStarted,
    PdfSaved { filename: String },
    PdfFailed(ClientError),
    ToastElapsed(u32),
}

impl AppState {
    /// Snapshot of the current worksheet joined with the current selection.
    pub fn pdf_request(&self) -> Result<PdfRequest> {
        let worksheet = self.worksheet.as_ref().ok_or(ClientError::NoWorksheet)?;
        Ok(PdfRequest {
            worksheet_id: worksheet.worksheet_id.clone(),
            mood: self.selection.mood_value().to_string(),
            subject: self.selection.subject(),
            motivation: worksheet.motivation.clone(),
            motivation_emoji: worksheet.motivation_emoji.clone(),
            questions: worksheet.questions.clone(),
        })
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SelectMood(choice) => self.selection.select_mood(choice),
            Action::TypeMood(text) => self.selection.record_mood_text(text),
            Action::SelectSubject(subject) => self.selection.select_subject(subject),
            Action::Prompt(err) => self.notice = Some(err.to_string()),
            Action::DismissNotice => self.notice = None,
            Action::GenerationStarted => {
                self.notice = None;
                self.loading = true;
                self.results_visible = false;
            }
            Action::GenerationSucceeded(worksheet) => {
                self.loading = false;
                self.worksheet = Some(worksheet);
                self.results_visible = true;
            }
            Action::GenerationFailed(err) => {
                self.loading = false;
                self.notice = Some(failure_notice(GENERATION_FAILED, &err));
            }
            Action::PdfStarted => {
                self.notice = None;
                self.pdf_busy = true;
            }
            Action::PdfSaved { .. } => {
                self.pdf_busy = false;
                self.toasts.push(PDF_SAVED);
            }
            Action::PdfFailed(err) => {
                self.pdf_busy = false;
                self.notice = Some(failure_notice(PDF_FAILED, &err));
            }
            Action::ToastElapsed(id) => self.toasts.elapse(id),
        }
    }
}

fn failure_notice(headline: &str, err: &ClientError) -> String {
    format!("{} ({})", headline, err)
}

impl Reducible for AppState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Questions;

    fn worksheet() -> Worksheet {
        Worksheet {
            worksheet_id: "ws-1".into(),
            motivation: Some("Keep going!".into()),
            motivation_emoji: Some("💪".into()),
            questions: Questions {
                easy: Some("Q1".into()),
                medium: Some("Q2".into()),
                hard: None,
            },
            mood_analysis: None,
            subject: None,
            grade_level: None,
            timestamp: None,
        }
    }

    #[test]
    fn emoji_selection_clears_typed_text() {
        let mut sel = Selection::default();
        sel.record_mood_text("a bit sleepy");
        assert_eq!(sel.typed_text(), "a bit sleepy");

        sel.select_mood(MoodChoice::Happy);
        assert_eq!(sel.typed_text(), "");
        assert_eq!(sel.selected_emoji(), Some(MoodChoice::Happy));
        assert_eq!(sel.mood_value(), "happy");
    }

    #[test]
    fn typing_clears_emoji_highlight() {
        let mut sel = Selection::default();
        sel.select_mood(MoodChoice::Calm);
        sel.record_mood_text("nervous");
        assert_eq!(sel.selected_emoji(), None);
        assert_eq!(sel.mood_value(), "nervous");
    }

    #[test]
    fn new_emoji_replaces_previous_one() {
        let mut sel = Selection::default();
        sel.select_mood(MoodChoice::Calm);
        sel.select_mood(MoodChoice::Tired);
        assert_eq!(sel.selected_emoji(), Some(MoodChoice::Tired));
    }

    #[test]
    fn mood_is_checked_before_subject() {
        let sel = Selection::default();
        assert_eq!(sel.generate_request(), Err(ClientError::MissingMood));

        let mut sel = Selection::default();
        sel.record_mood_text("   ");
        sel.select_subject(Subject::Math);
        assert_eq!(sel.generate_request(), Err(ClientError::MissingMood));

        let mut sel = Selection::default();
        sel.select_mood(MoodChoice::Excited);
        assert_eq!(sel.generate_request(), Err(ClientError::MissingSubject));
    }

    #[test]
    fn complete_selection_builds_request() {
        let mut sel = Selection::default();
        sel.record_mood_text("curious");
        sel.select_subject(Subject::Science);
        let req = sel.generate_request().unwrap();
        assert_eq!(req, GenerateRequest::new("curious", Subject::Science));
        assert_eq!(req.grade, "5-10");
    }

    #[test]
    fn pdf_request_needs_a_worksheet() {
        let state = AppState::default();
        assert_eq!(state.pdf_request(), Err(ClientError::NoWorksheet));
    }

    #[test]
    fn pdf_request_joins_worksheet_and_selection() {
        let mut state = AppState::default();
        state.apply(Action::SelectMood(MoodChoice::Focused));
        state.apply(Action::SelectSubject(Subject::Math));
        state.apply(Action::GenerationSucceeded(worksheet()));

        let req = state.pdf_request().unwrap();
        assert_eq!(req.worksheet_id, "ws-1");
        assert_eq!(req.mood, "focused");
        assert_eq!(req.subject, Some(Subject::Math));
        assert_eq!(req.motivation_emoji.as_deref(), Some("💪"));
        assert_eq!(req.questions.medium.as_deref(), Some("Q2"));
    }

    #[test]
    fn generation_lifecycle_resets_loading() {
        let mut state = AppState::default();
        state.apply(Action::GenerationStarted);
        assert!(state.loading);
        assert!(!state.results_visible);

        state.apply(Action::GenerationFailed(ClientError::Network("offline".into())));
        assert!(!state.loading);
        assert!(!state.results_visible);
        assert!(state.notice.as_deref().unwrap().starts_with(GENERATION_FAILED));

        state.apply(Action::GenerationStarted);
        assert_eq!(state.notice, None);
        state.apply(Action::GenerationSucceeded(worksheet()));
        assert!(!state.loading);
        assert!(state.results_visible);
    }

    #[test]
    fn pdf_saved_pushes_toast_and_clears_busy() {
        let mut state = AppState::default();
        state.apply(Action::PdfStarted);
        assert!(state.pdf_busy);
        state.apply(Action::PdfSaved {
            filename: "x.pdf".into(),
        });
        assert!(!state.pdf_busy);
        let toast = state.toasts.iter().next().unwrap();
        assert_eq!(toast.message, PDF_SAVED);

        let id = toast.id;
        state.apply(Action::ToastElapsed(id));
        state.apply(Action::ToastElapsed(id));
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn notice_can_be_dismissed() {
        let mut state = AppState::default();
        state.apply(Action::Prompt(ClientError::MissingSubject));
        assert_eq!(
            state.notice.as_deref(),
            Some("Please choose a subject to get started! 📚")
        );
        state.apply(Action::DismissNotice);
        assert_eq!(state.notice, None);
    }

    #[test]
    fn reducer_returns_new_state() {
        let state = Rc::new(AppState::default());
        let next = state.clone().reduce(Action::SelectSubject(Subject::Science));
        assert_eq!(next.selection.subject(), Some(Subject::Science));
        assert_eq!(state.selection.subject(), None);
    }
}
