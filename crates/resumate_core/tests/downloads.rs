mod common;

use common::*;
use pretty_assertions::assert_eq;
use resumate_core::{
    update, Document, Effect, Msg, SavedDownload, Step, DOWNLOAD_FAILED_ALERT,
};

fn download_count(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|effect| matches!(effect, Effect::DownloadDocument { .. }))
        .count()
}

#[test]
fn single_download_targets_one_document() {
    init_logging();
    let (state, request_id) = at_results();

    let (state, effects) = update(state, Msg::DownloadRequested(Document::CoverLetter));
    assert_eq!(
        effects,
        vec![Effect::DownloadDocument {
            request_id,
            document: Document::CoverLetter,
            url: "https://x/c".to_string(),
            file_name: "c.docx".to_string(),
        }]
    );
    let view = state.view();
    assert_eq!(view.downloads[1].in_flight, 1);
    assert_eq!(view.downloads[0].in_flight, 0);
}

#[test]
fn combined_download_emits_resume_then_cover_letter() {
    init_logging();
    let (state, request_id) = at_results();

    let (_, effects) = update(state, Msg::DownloadAllRequested);
    assert_eq!(
        effects,
        vec![
            Effect::DownloadDocument {
                request_id,
                document: Document::Resume,
                url: "https://x/r".to_string(),
                file_name: "r.docx".to_string(),
            },
            Effect::DownloadDocument {
                request_id,
                document: Document::CoverLetter,
                url: "https://x/c".to_string(),
                file_name: "c.docx".to_string(),
            },
        ]
    );
}

#[test]
fn combined_download_twice_yields_four_independent_attempts() {
    init_logging();
    let (state, request_id) = at_results();

    let (state, first) = update(state, Msg::DownloadAllRequested);
    let (state, second) = update(state, Msg::DownloadAllRequested);
    assert_eq!(download_count(&first) + download_count(&second), 4);
    assert!(state.view().downloads.iter().all(|row| row.in_flight == 2));

    // One failure raises the alert but leaves the other three attempts alone.
    let (state, effects) = update(
        state,
        Msg::DownloadFailed {
            request_id,
            document: Document::Resume,
        },
    );
    assert!(effects.is_empty());
    let (state, _) = update(state, Msg::AlertDismissed);
    let (state, _) = update(
        state,
        Msg::DownloadSaved {
            request_id,
            document: Document::Resume,
            location: "out/r.docx".to_string(),
            byte_len: 2_048,
        },
    );
    let (state, _) = update(
        state,
        Msg::DownloadSaved {
            request_id,
            document: Document::CoverLetter,
            location: "out/c.docx".to_string(),
            byte_len: 1_024,
        },
    );

    let view = state.view();
    assert_eq!(view.downloads[0].in_flight, 0);
    assert_eq!(
        view.downloads[0].saved,
        Some(SavedDownload {
            location: "out/r.docx".to_string(),
            byte_len: 2_048,
        })
    );
    assert_eq!(view.downloads[1].in_flight, 1);
    assert_eq!(
        view.downloads[1].saved.as_ref().map(|saved| saved.byte_len),
        Some(1_024)
    );
    assert_eq!(view.alert, None);
}

#[test]
fn failed_download_raises_alert_without_leaving_results() {
    init_logging();
    let (state, request_id) = at_results();
    let (state, _) = update(state, Msg::DownloadRequested(Document::Resume));

    let (state, _) = update(
        state,
        Msg::DownloadFailed {
            request_id,
            document: Document::Resume,
        },
    );

    assert_eq!(state.step(), Step::Results);
    assert_eq!(state.result(), Some(&sample_result()));
    assert_eq!(state.view().alert.as_deref(), Some(DOWNLOAD_FAILED_ALERT));
}

#[test]
fn alert_blocks_user_input_until_dismissed() {
    init_logging();
    let (state, request_id) = at_results();
    let (state, _) = update(
        state,
        Msg::DownloadFailed {
            request_id,
            document: Document::Resume,
        },
    );

    let (state, effects) = update(state, Msg::DownloadAllRequested);
    assert!(effects.is_empty());
    let (state, _) = update(state, Msg::RestartClicked);
    assert_eq!(state.step(), Step::Results);

    // Engine events still land while the alert is up.
    let (state, _) = update(
        state,
        Msg::DownloadSaved {
            request_id,
            document: Document::CoverLetter,
            location: "c.docx".to_string(),
            byte_len: 512,
        },
    );
    assert_eq!(
        state.view().downloads[1]
            .saved
            .as_ref()
            .map(|saved| saved.location.as_str()),
        Some("c.docx")
    );

    let (state, _) = update(state, Msg::AlertDismissed);
    let (_, effects) = update(state, Msg::DownloadRequested(Document::Resume));
    assert_eq!(download_count(&effects), 1);
}

#[test]
fn download_events_from_before_restart_are_dropped() {
    init_logging();
    let (state, request_id) = at_results();
    let (state, _) = update(state, Msg::DownloadAllRequested);
    let (state, _) = update(state, Msg::RestartClicked);

    let (state, _) = update(
        state,
        Msg::DownloadFailed {
            request_id,
            document: Document::Resume,
        },
    );
    let view = state.view();
    assert_eq!(view.alert, None);
    assert!(view.downloads.is_empty());
    assert_eq!(view.step, Step::Upload);
}
