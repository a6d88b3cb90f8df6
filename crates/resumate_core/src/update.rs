use crate::{
    validate_file, validate_job_description, Document, Effect, Msg, SavedDownload, Step,
    WizardState,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: WizardState, msg: Msg) -> (WizardState, Vec<Effect>) {
    // A raised alert blocks every user interaction until acknowledged.
    if state.alert_raised() && msg.is_user_input() && msg != Msg::AlertDismissed {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::FileChosen(file) => {
            if state.step() != Step::Upload {
                return (state, Vec::new());
            }
            state.clear_errors();
            match validate_file(&file) {
                Ok(()) => state.accept_file(file),
                Err(rejection) => state.set_inline_error(rejection.to_string()),
            }
            Vec::new()
        }
        Msg::FileUnreadable { reason } => {
            if state.step() == Step::Upload {
                state.clear_errors();
                state.set_inline_error(reason);
            }
            Vec::new()
        }
        Msg::JobDescriptionEdited(draft) => {
            if state.step() == Step::JobDescription && !state.is_loading() {
                state.set_draft(draft);
            }
            Vec::new()
        }
        Msg::JobDescriptionSubmitted => {
            if state.step() != Step::JobDescription || state.is_loading() {
                return (state, Vec::new());
            }
            state.clear_errors();
            match validate_job_description(state.draft()) {
                Ok(job_description) => {
                    let file = state.file().cloned();
                    match (state.begin_request(job_description.clone()), file) {
                        (Some(request_id), Some(file)) => vec![Effect::SubmitOptimization {
                            request_id,
                            file,
                            job_description,
                        }],
                        _ => Vec::new(),
                    }
                }
                Err(rejection) => {
                    state.set_inline_error(rejection.to_string());
                    Vec::new()
                }
            }
        }
        Msg::OptimizationSucceeded { request_id, result } => {
            state.complete_request(request_id, result);
            Vec::new()
        }
        Msg::OptimizationFailed {
            request_id,
            message,
        } => {
            state.fail_request(request_id, message);
            Vec::new()
        }
        Msg::DownloadRequested(document) => download_effects(&mut state, &[document]),
        Msg::DownloadAllRequested => download_effects(&mut state, &Document::ALL),
        Msg::DownloadSaved {
            request_id,
            document,
            location,
            byte_len,
        } => {
            state.download_saved(request_id, document, SavedDownload { location, byte_len });
            Vec::new()
        }
        Msg::DownloadFailed {
            request_id,
            document,
        } => {
            state.download_failed(request_id, document);
            Vec::new()
        }
        Msg::ErrorDismissed => {
            state.dismiss_error();
            Vec::new()
        }
        Msg::AlertDismissed => {
            state.dismiss_alert();
            Vec::new()
        }
        Msg::RestartClicked => {
            state.restart();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// One independent download per requested document; earlier ones are never awaited.
fn download_effects(state: &mut WizardState, documents: &[Document]) -> Vec<Effect> {
    let Some((request_id, result)) = state.results() else {
        return Vec::new();
    };
    let effects: Vec<Effect> = documents
        .iter()
        .map(|&document| {
            let (url, file_name) = result.locator(document);
            Effect::DownloadDocument {
                request_id,
                document,
                url: url.to_owned(),
                file_name: file_name.to_owned(),
            }
        })
        .collect();
    for &document in documents {
        state.download_started(document);
    }
    effects
}
