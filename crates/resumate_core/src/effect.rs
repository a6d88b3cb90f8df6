use crate::{CandidateFile, Document, RequestId};

/// Side effects requested by `update`; executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubmitOptimization {
        request_id: RequestId,
        file: CandidateFile,
        job_description: String,
    },
    DownloadDocument {
        request_id: RequestId,
        document: Document,
        url: String,
        file_name: String,
    },
}
