use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use resumate_logging::{app_debug, app_info, app_warn};
use thiserror::Error;

use crate::{
    ClientError, ClientSettings, DocumentDownloader, DocumentKind, DownloadError,
    DownloadSettings, EngineEvent, OptimizeClient, OptimizeRequest, ReqwestDownloader,
    ReqwestOptimizeClient, RequestId,
};

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub client: ClientSettings,
    pub download: DownloadSettings,
}

#[derive(Debug, Error)]
pub enum EngineStartError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Download(#[from] DownloadError),
}

enum EngineCommand {
    Optimize {
        request_id: RequestId,
        request: OptimizeRequest,
    },
    Download {
        request_id: RequestId,
        document: DocumentKind,
        url: String,
        file_name: String,
    },
}

/// Sends work to the engine thread. Every command runs as its own task, so
/// downloads never wait on each other.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn spawn(
        settings: EngineSettings,
    ) -> Result<(Self, mpsc::Receiver<EngineEvent>), EngineStartError> {
        let client = Arc::new(ReqwestOptimizeClient::new(settings.client)?);
        let downloader = Arc::new(ReqwestDownloader::new(settings.download)?);
        Self::spawn_with(client, downloader)
    }

    /// Starts the engine thread around the given collaborators.
    pub fn spawn_with(
        client: Arc<dyn OptimizeClient>,
        downloader: Arc<dyn DocumentDownloader>,
    ) -> Result<(Self, mpsc::Receiver<EngineEvent>), EngineStartError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("resumate-engine".to_owned())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let downloader = downloader.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(client.as_ref(), downloader.as_ref(), command, event_tx)
                            .await;
                    });
                }
                app_debug!("engine command channel closed; shutting down");
            })?;

        Ok((Self { cmd_tx }, event_rx))
    }

    pub fn optimize(&self, request_id: RequestId, request: OptimizeRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Optimize {
            request_id,
            request,
        });
    }

    pub fn download(
        &self,
        request_id: RequestId,
        document: DocumentKind,
        url: impl Into<String>,
        file_name: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::Download {
            request_id,
            document,
            url: url.into(),
            file_name: file_name.into(),
        });
    }
}

async fn handle_command(
    client: &dyn OptimizeClient,
    downloader: &dyn DocumentDownloader,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Optimize {
            request_id,
            request,
        } => {
            let result = client.optimize(&request).await;
            match &result {
                Ok(response) => app_info!(
                    "request {} optimized: {} / {}",
                    request_id,
                    response.resume_file_name,
                    response.cover_letter_file_name
                ),
                Err(err) => app_warn!("request {} failed: {}", request_id, err),
            }
            EngineEvent::OptimizeCompleted { request_id, result }
        }
        EngineCommand::Download {
            request_id,
            document,
            url,
            file_name,
        } => {
            let result = downloader.download(&url, &file_name).await;
            if let Err(err) = &result {
                app_warn!("download of {} from {} failed: {}", file_name, url, err);
            }
            EngineEvent::DownloadCompleted {
                request_id,
                document,
                result,
            }
        }
    };
    let _ = event_tx.send(event);
}
