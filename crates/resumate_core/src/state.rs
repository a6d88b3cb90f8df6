use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::view_model::{
    DownloadRowView, SavedDownload, StepIndicator, StepStatus, WizardViewModel,
    DOWNLOAD_FAILED_ALERT,
};

/// Token handed out per optimization submission.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Upload,
    JobDescription,
    Results,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Upload, Step::JobDescription, Step::Results];

    pub fn label(self) -> &'static str {
        match self {
            Step::Upload => "Upload Resume",
            Step::JobDescription => "Job Description",
            Step::Results => "Download Results",
        }
    }
}

/// A user-selected resume, described by what the platform declared about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizationResult {
    pub resume_file_name: String,
    pub resume_download_url: String,
    pub cover_letter_file_name: String,
    pub cover_letter_download_url: String,
}

impl OptimizationResult {
    /// Returns `(url, file_name)` for one of the generated documents.
    pub fn locator(&self, document: Document) -> (&str, &str) {
        match document {
            Document::Resume => (&self.resume_download_url, &self.resume_file_name),
            Document::CoverLetter => (
                &self.cover_letter_download_url,
                &self.cover_letter_file_name,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Document {
    Resume,
    CoverLetter,
}

impl Document {
    pub const ALL: [Document; 2] = [Document::Resume, Document::CoverLetter];

    pub fn label(self) -> &'static str {
        match self {
            Document::Resume => "Optimized Resume",
            Document::CoverLetter => "Cover Letter",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Progress {
    #[default]
    Upload,
    JobDescription {
        file: CandidateFile,
        description: Option<String>,
    },
    Results {
        file: CandidateFile,
        description: String,
        result: OptimizationResult,
        request_id: RequestId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct DownloadSlot {
    in_flight: u32,
    saved: Option<SavedDownload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardState {
    progress: Progress,
    draft: String,
    in_flight: Option<RequestId>,
    last_request_id: RequestId,
    error: Option<String>,
    inline_error: Option<String>,
    alert: Option<String>,
    downloads: BTreeMap<Document, DownloadSlot>,
    dirty: bool,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        match self.progress {
            Progress::Upload => Step::Upload,
            Progress::JobDescription { .. } => Step::JobDescription,
            Progress::Results { .. } => Step::Results,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn alert_raised(&self) -> bool {
        self.alert.is_some()
    }

    pub fn file(&self) -> Option<&CandidateFile> {
        match &self.progress {
            Progress::Upload => None,
            Progress::JobDescription { file, .. } | Progress::Results { file, .. } => Some(file),
        }
    }

    pub fn job_description(&self) -> Option<&str> {
        match &self.progress {
            Progress::Upload => None,
            Progress::JobDescription { description, .. } => description.as_deref(),
            Progress::Results { description, .. } => Some(description),
        }
    }

    pub fn result(&self) -> Option<&OptimizationResult> {
        match &self.progress {
            Progress::Results { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn inline_error(&self) -> Option<&str> {
        self.inline_error.as_deref()
    }

    pub fn view(&self) -> WizardViewModel {
        let step = self.step();
        let steps = Step::ALL
            .iter()
            .map(|&candidate| StepIndicator {
                step: candidate,
                label: candidate.label(),
                status: self.step_status(candidate, step),
            })
            .collect();

        let downloads = match &self.progress {
            Progress::Results { result, .. } => Document::ALL
                .iter()
                .map(|&document| {
                    let (url, file_name) = result.locator(document);
                    let slot = self.downloads.get(&document).cloned().unwrap_or_default();
                    DownloadRowView {
                        document,
                        file_name: file_name.to_owned(),
                        url: url.to_owned(),
                        in_flight: slot.in_flight,
                        saved: slot.saved,
                    }
                })
                .collect(),
            _ => Vec::new(),
        };

        WizardViewModel {
            step,
            steps,
            file: self.file().cloned(),
            draft: self.draft.clone(),
            draft_chars: self.draft.chars().count(),
            can_submit: crate::can_submit(&self.draft),
            loading: self.is_loading(),
            error: self.error.clone(),
            inline_error: self.inline_error.clone(),
            alert: self.alert.clone(),
            result: self.result().cloned(),
            downloads,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn step_status(&self, candidate: Step, current: Step) -> StepStatus {
        if candidate == current {
            return StepStatus::Current;
        }
        let completed = match candidate {
            Step::Upload => self.file().is_some(),
            Step::JobDescription => self.job_description().is_some(),
            Step::Results => self.result().is_some(),
        };
        if completed {
            StepStatus::Completed
        } else {
            StepStatus::Pending
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn clear_errors(&mut self) {
        if self.error.take().is_some() | self.inline_error.take().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn set_inline_error(&mut self, message: impl Into<String>) {
        self.inline_error = Some(message.into());
        self.mark_dirty();
    }

    pub(crate) fn dismiss_error(&mut self) {
        if self.error.take().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn dismiss_alert(&mut self) {
        if self.alert.take().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn accept_file(&mut self, file: CandidateFile) {
        self.progress = Progress::JobDescription {
            file,
            description: None,
        };
        self.mark_dirty();
    }

    pub(crate) fn draft(&self) -> &str {
        &self.draft
    }

    pub(crate) fn set_draft(&mut self, draft: String) {
        if self.draft != draft {
            self.draft = draft;
            self.mark_dirty();
        }
    }

    /// Stores the validated description and takes the single in-flight slot.
    ///
    /// Returns `None` when the wizard is not waiting for a description or a
    /// request already holds the slot.
    pub(crate) fn begin_request(&mut self, validated: String) -> Option<RequestId> {
        if self.in_flight.is_some() {
            return None;
        }
        let Progress::JobDescription { description, .. } = &mut self.progress else {
            return None;
        };
        *description = Some(validated);
        self.last_request_id += 1;
        self.in_flight = Some(self.last_request_id);
        self.mark_dirty();
        self.in_flight
    }

    /// Applies a successful response if it answers the in-flight request.
    pub(crate) fn complete_request(
        &mut self,
        request_id: RequestId,
        result: OptimizationResult,
    ) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        let progress = std::mem::take(&mut self.progress);
        self.progress = match progress {
            Progress::JobDescription {
                file,
                description: Some(description),
            } => Progress::Results {
                file,
                description,
                result,
                request_id,
            },
            other => other,
        };
        self.downloads.clear();
        self.mark_dirty();
        true
    }

    /// Applies a failure if it answers the in-flight request.
    pub(crate) fn fail_request(&mut self, request_id: RequestId, message: String) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        self.error = Some(message);
        self.mark_dirty();
        true
    }

    /// The request token and record backing the results step.
    pub(crate) fn results(&self) -> Option<(RequestId, &OptimizationResult)> {
        match &self.progress {
            Progress::Results {
                request_id, result, ..
            } => Some((*request_id, result)),
            _ => None,
        }
    }

    pub(crate) fn download_started(&mut self, document: Document) {
        self.downloads.entry(document).or_default().in_flight += 1;
        self.mark_dirty();
    }

    pub(crate) fn download_saved(
        &mut self,
        request_id: RequestId,
        document: Document,
        saved: SavedDownload,
    ) -> bool {
        if !self.is_current_results(request_id) {
            return false;
        }
        let slot = self.downloads.entry(document).or_default();
        slot.in_flight = slot.in_flight.saturating_sub(1);
        slot.saved = Some(saved);
        self.mark_dirty();
        true
    }

    pub(crate) fn download_failed(&mut self, request_id: RequestId, document: Document) -> bool {
        if !self.is_current_results(request_id) {
            return false;
        }
        let slot = self.downloads.entry(document).or_default();
        slot.in_flight = slot.in_flight.saturating_sub(1);
        self.alert = Some(DOWNLOAD_FAILED_ALERT.to_owned());
        self.mark_dirty();
        true
    }

    /// Back to the upload step with nothing held. Request ids keep counting so
    /// late responses from before the restart stay stale.
    pub(crate) fn restart(&mut self) {
        *self = Self {
            last_request_id: self.last_request_id,
            dirty: true,
            ..Self::default()
        };
    }

    fn is_current_results(&self, request_id: RequestId) -> bool {
        matches!(self.results(), Some((current, _)) if current == request_id)
    }
}
