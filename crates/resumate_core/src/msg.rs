#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a resume file in the upload step.
    FileChosen(crate::CandidateFile),
    /// The platform could not inspect the file the user pointed at.
    FileUnreadable { reason: String },
    /// User edited the job description draft.
    JobDescriptionEdited(String),
    /// User asked to optimize with the current draft.
    JobDescriptionSubmitted,
    /// Remote optimization finished successfully.
    OptimizationSucceeded {
        request_id: crate::RequestId,
        result: crate::OptimizationResult,
    },
    /// Remote optimization failed; `message` is user-facing.
    OptimizationFailed {
        request_id: crate::RequestId,
        message: String,
    },
    /// User asked for a single document.
    DownloadRequested(crate::Document),
    /// User asked for both documents.
    DownloadAllRequested,
    /// A document was written to disk.
    DownloadSaved {
        request_id: crate::RequestId,
        document: crate::Document,
        location: String,
        byte_len: u64,
    },
    /// A document could not be fetched or written; the engine logs the cause.
    DownloadFailed {
        request_id: crate::RequestId,
        document: crate::Document,
    },
    /// User closed the error banner.
    ErrorDismissed,
    /// User acknowledged the blocking alert.
    AlertDismissed,
    /// User clicked Start Over.
    RestartClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}

impl Msg {
    /// Messages that originate from the user rather than the engine.
    pub fn is_user_input(&self) -> bool {
        !matches!(
            self,
            Msg::OptimizationSucceeded { .. }
                | Msg::OptimizationFailed { .. }
                | Msg::DownloadSaved { .. }
                | Msg::DownloadFailed { .. }
                | Msg::NoOp
        )
    }
}
