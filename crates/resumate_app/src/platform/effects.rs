use std::sync::mpsc;
use std::thread;

use resumate_core::{Document, Effect, Msg, OptimizationResult};
use resumate_engine::{
    DocumentKind, EngineEvent, EngineHandle, EngineSettings, EngineStartError, OptimizeRequest,
    OptimizeResponse,
};
use resumate_logging::{app_debug, app_info};

use super::app::Inbox;

/// Executes core effects on the engine and feeds engine events back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: EngineSettings, inbox: mpsc::Sender<Inbox>) -> Result<Self, EngineStartError> {
        let (engine, events) = EngineHandle::spawn(settings)?;
        spawn_event_loop(events, inbox);
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitOptimization {
                    request_id,
                    file,
                    job_description,
                } => {
                    app_info!(
                        "SubmitOptimization request_id={} file={} size={}",
                        request_id,
                        file.file_name,
                        file.size
                    );
                    self.engine.optimize(
                        request_id,
                        OptimizeRequest {
                            file_path: file.path,
                            file_name: file.file_name,
                            mime_type: file.mime_type,
                            job_description,
                        },
                    );
                }
                Effect::DownloadDocument {
                    request_id,
                    document,
                    url,
                    file_name,
                } => {
                    app_info!("DownloadDocument {:?} url={}", document, url);
                    self.engine
                        .download(request_id, map_document(document), url, file_name);
                }
            }
        }
    }
}

fn spawn_event_loop(events: mpsc::Receiver<EngineEvent>, inbox: mpsc::Sender<Inbox>) {
    thread::spawn(move || {
        for event in events {
            if inbox.send(Inbox::Core(map_event(event))).is_err() {
                break;
            }
        }
        app_debug!("engine event loop finished");
    });
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::OptimizeCompleted { request_id, result } => match result {
            Ok(response) => Msg::OptimizationSucceeded {
                request_id,
                result: map_response(response),
            },
            Err(err) => Msg::OptimizationFailed {
                request_id,
                message: err.user_message(),
            },
        },
        EngineEvent::DownloadCompleted {
            request_id,
            document,
            result,
        } => match result {
            Ok(saved) => Msg::DownloadSaved {
                request_id,
                document: map_kind(document),
                location: saved.path.display().to_string(),
                byte_len: saved.byte_len,
            },
            Err(_) => Msg::DownloadFailed {
                request_id,
                document: map_kind(document),
            },
        },
    }
}

fn map_response(response: OptimizeResponse) -> OptimizationResult {
    OptimizationResult {
        resume_file_name: response.resume_file_name,
        resume_download_url: response.resume_download_url,
        cover_letter_file_name: response.cover_letter_file_name,
        cover_letter_download_url: response.cover_letter_download_url,
    }
}

fn map_document(document: Document) -> DocumentKind {
    match document {
        Document::Resume => DocumentKind::Resume,
        Document::CoverLetter => DocumentKind::CoverLetter,
    }
}

fn map_kind(kind: DocumentKind) -> Document {
    match kind {
        DocumentKind::Resume => Document::Resume,
        DocumentKind::CoverLetter => Document::CoverLetter,
    }
}
