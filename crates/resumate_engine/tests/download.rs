use std::fs;
use std::time::Duration;

use pretty_assertions::assert_eq;
use resumate_engine::{DocumentDownloader, DownloadError, DownloadSettings, ReqwestDownloader};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

fn downloader(dir: &TempDir) -> ReqwestDownloader {
    ReqwestDownloader::new(DownloadSettings::new(dir.path().to_path_buf())).unwrap()
}

#[tokio::test]
async fn document_is_saved_under_its_file_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/download/Optimized_Resume_1.docx"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"PK\x03\x04docx".to_vec(), DOCX_MIME))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let url = format!("{}/download/Optimized_Resume_1.docx", server.uri());
    let saved = downloader(&dir)
        .download(&url, "Optimized_Resume_1.docx")
        .await
        .expect("download ok");

    assert_eq!(saved.path, dir.path().join("Optimized_Resume_1.docx"));
    assert_eq!(saved.byte_len, 8);
    assert_eq!(fs::read(&saved.path).unwrap(), b"PK\x03\x04docx");
}

#[tokio::test(flavor = "current_thread")]
async fn save_completes_on_a_single_threaded_runtime() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![7u8; 64 * 1024], DOCX_MIME))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let saved = downloader(&dir)
        .download(&format!("{}/r", server.uri()), "resume.docx")
        .await
        .unwrap();

    assert_eq!(saved.byte_len, 64 * 1024);
    assert_eq!(fs::metadata(&saved.path).unwrap().len(), 64 * 1024);
}

#[tokio::test]
async fn hostile_file_name_stays_inside_output_dir() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/c"))
        .respond_with(ResponseTemplate::new(200).set_body_string("letter"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    let downloader =
        ReqwestDownloader::new(DownloadSettings::new(out.clone())).unwrap();
    let saved = downloader
        .download(&format!("{}/c", server.uri()), "../../escape.docx")
        .await
        .unwrap();

    assert_eq!(saved.path, out.join("escape.docx"));
    assert!(!dir.path().join("escape.docx").exists());
}

#[tokio::test]
async fn expired_locator_is_a_failure_and_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/download/gone.docx"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({ "detail": "File not found" })),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let err = downloader(&dir)
        .download(&format!("{}/download/gone.docx", server.uri()), "gone.docx")
        .await
        .unwrap_err();

    assert_eq!(err, DownloadError::HttpStatus(404));
    assert!(!dir.path().join("gone.docx").exists());
}

#[tokio::test]
async fn invalid_locator_is_rejected() {
    let dir = TempDir::new().unwrap();
    let err = downloader(&dir)
        .download("not a url", "r.docx")
        .await
        .unwrap_err();
    assert!(matches!(err, DownloadError::InvalidUrl(_)));
}

#[tokio::test]
async fn oversized_document_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(ResponseTemplate::new(200).set_body_string("01234567890"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let settings = DownloadSettings {
        max_bytes: 10,
        ..DownloadSettings::new(dir.path().to_path_buf())
    };
    let err = ReqwestDownloader::new(settings)
        .unwrap()
        .download(&format!("{}/large", server.uri()), "large.docx")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DownloadError::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn slow_download_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let settings = DownloadSettings {
        request_timeout: Duration::from_millis(50),
        ..DownloadSettings::new(dir.path().to_path_buf())
    };
    let err = ReqwestDownloader::new(settings)
        .unwrap()
        .download(&format!("{}/slow", server.uri()), "slow.docx")
        .await
        .unwrap_err();

    assert_eq!(err, DownloadError::Timeout);
}
