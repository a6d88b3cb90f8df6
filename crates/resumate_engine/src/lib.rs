//! Resumate engine: remote optimization client, document downloads and the
//! background thread that runs them.
mod client;
mod download;
mod engine;
mod filename;
mod persist;
mod types;

pub use client::{ClientSettings, OptimizeClient, ReqwestOptimizeClient, OPTIMIZE_PATH};
pub use download::{DocumentDownloader, DownloadSettings, ReqwestDownloader};
pub use engine::{EngineHandle, EngineSettings, EngineStartError};
pub use filename::sanitize_file_name;
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use types::{
    ClientError, DocumentKind, DownloadError, EngineEvent, OptimizeRequest, OptimizeResponse,
    RequestId, SavedDocument, GENERIC_FAILURE_MESSAGE, REJECTED_FALLBACK_MESSAGE,
};
