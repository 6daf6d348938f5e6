//! Readiness of the data the post-login redirect depends on.

/// Loaded-data summary for the current identity. Reset on every identity change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Readiness {
    pub categories: usize,
    pub questions: usize,
    /// `None` until the first questionnaire-submission fetch completes.
    pub questionnaire_submissions: Option<usize>,
    /// `None` until the first NeuroMapa-submission fetch completes.
    pub neuromapa_submissions: Option<usize>,
}

/// One completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessUpdate {
    Categories(usize),
    Questions(usize),
    QuestionnaireSubmissions(usize),
    NeuromapaSubmissions(usize),
}

impl Readiness {
    /// Category and question lists are both non-empty.
    pub fn reference_ready(&self) -> bool {
        self.categories > 0 && self.questions > 0
    }

    pub fn has_any_submission(&self) -> bool {
        self.questionnaire_submissions.unwrap_or(0) > 0
            || self.neuromapa_submissions.unwrap_or(0) > 0
    }

    /// Both submission collections have completed a fetch.
    pub fn submissions_loaded(&self) -> bool {
        self.questionnaire_submissions.is_some() && self.neuromapa_submissions.is_some()
    }

    pub fn apply(&mut self, update: ReadinessUpdate) {
        match update {
            ReadinessUpdate::Categories(n) => self.categories = n,
            ReadinessUpdate::Questions(n) => self.questions = n,
            ReadinessUpdate::QuestionnaireSubmissions(n) => self.questionnaire_submissions = Some(n),
            ReadinessUpdate::NeuromapaSubmissions(n) => self.neuromapa_submissions = Some(n),
        }
    }
}
