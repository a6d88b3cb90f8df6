use crate::{CandidateFile, Document, OptimizationResult, Step};

pub const DOWNLOAD_FAILED_ALERT: &str = "Download failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Current,
    Completed,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepIndicator {
    pub step: Step,
    pub label: &'static str,
    pub status: StepStatus,
}

/// Where a finished download landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDownload {
    pub location: String,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRowView {
    pub document: Document,
    pub file_name: String,
    pub url: String,
    pub in_flight: u32,
    pub saved: Option<SavedDownload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardViewModel {
    pub step: Step,
    pub steps: Vec<StepIndicator>,
    pub file: Option<CandidateFile>,
    pub draft: String,
    pub draft_chars: usize,
    pub can_submit: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub inline_error: Option<String>,
    pub alert: Option<String>,
    pub result: Option<OptimizationResult>,
    pub downloads: Vec<DownloadRowView>,
    pub dirty: bool,
}
