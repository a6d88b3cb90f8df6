//! Resumate core: pure wizard state machine, input validation and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{CandidateFile, Document, OptimizationResult, RequestId, Step, WizardState};
pub use update::update;
pub use validate::{
    can_submit, validate_file, validate_job_description, DescriptionRejection, FileRejection,
    ALLOWED_MIME_TYPES, DOCX_MIME_TYPE, MAX_FILE_BYTES, MIN_DESCRIPTION_CHARS, PDF_MIME_TYPE,
};
pub use view_model::{
    DownloadRowView, SavedDownload, StepIndicator, StepStatus, WizardViewModel,
    DOWNLOAD_FAILED_ALERT,
};
