use std::path::PathBuf;

use clap::Parser;
use resumate_engine::{ClientError, ClientSettings, DownloadSettings, EngineSettings};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Tailor a resume and cover letter to a job description.
#[derive(Debug, Clone, Parser)]
#[command(name = "resumate", version)]
pub struct Args {
    /// Base URL of the optimization service.
    #[arg(long, env = "RESUMATE_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Directory that downloaded documents are written to.
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Log file; the terminal itself is reserved for the wizard.
    #[arg(long, default_value = "./resumate.log")]
    pub log_file: PathBuf,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn engine_settings(&self) -> Result<EngineSettings, ClientError> {
        Ok(EngineSettings {
            client: ClientSettings::new(&self.api_url)?,
            download: DownloadSettings::new(self.output_dir.clone()),
        })
    }
}
