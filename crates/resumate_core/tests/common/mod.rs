#![allow(dead_code)]

use std::sync::Once;

use resumate_core::{
    update, CandidateFile, Effect, Msg, OptimizationResult, RequestId, WizardState, PDF_MIME_TYPE,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(resumate_logging::initialize_for_tests);
}

pub fn pdf(size: u64) -> CandidateFile {
    file("resume.pdf", PDF_MIME_TYPE, size)
}

pub fn file(name: &str, mime_type: &str, size: u64) -> CandidateFile {
    CandidateFile {
        path: format!("/tmp/{name}").into(),
        file_name: name.to_string(),
        mime_type: mime_type.to_string(),
        size,
    }
}

pub fn description(chars: usize) -> String {
    "a".repeat(chars)
}

pub fn sample_result() -> OptimizationResult {
    OptimizationResult {
        resume_file_name: "r.docx".to_string(),
        resume_download_url: "https://x/r".to_string(),
        cover_letter_file_name: "c.docx".to_string(),
        cover_letter_download_url: "https://x/c".to_string(),
    }
}

/// Upload a valid file, type a description and submit it.
pub fn submit(description: &str) -> (WizardState, Vec<Effect>) {
    let (state, _) = update(WizardState::new(), Msg::FileChosen(pdf(2 * 1024 * 1024)));
    let (state, _) = update(state, Msg::JobDescriptionEdited(description.to_string()));
    update(state, Msg::JobDescriptionSubmitted)
}

pub fn request_id_of(effects: &[Effect]) -> RequestId {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::SubmitOptimization { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("submit effect")
}

/// Drive the wizard all the way to the results step.
pub fn at_results() -> (WizardState, RequestId) {
    let (state, effects) = submit(&description(150));
    let request_id = request_id_of(&effects);
    let (state, _) = update(
        state,
        Msg::OptimizationSucceeded {
            request_id,
            result: sample_result(),
        },
    );
    (state, request_id)
}
