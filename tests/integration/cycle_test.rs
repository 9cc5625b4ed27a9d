#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use upwatch::application::services::orchestrator::{
    ALL_UP_MESSAGE, NO_CONFIG_MESSAGE, RunOrchestrator,
};
use upwatch::domain::entities::run_result::NotificationStatus;
use upwatch::domain::ports::notifier::{NotificationError, Notifier};
use upwatch::infrastructure::persistence::log_file::LogFileSink;
use upwatch::infrastructure::probing::http::HttpProber;
use upwatch::infrastructure::sites::json_file::JsonSiteFile;

// ---------------------------------------------------------------------------
// Fixture loader
// ---------------------------------------------------------------------------

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

// ---------------------------------------------------------------------------
// Local HTTP endpoints
// ---------------------------------------------------------------------------

async fn serve_status(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });
    format!("http://{addr}/")
}

async fn serve_hangup() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            drop(socket);
        }
    });
    format!("http://{addr}/")
}

fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/")
}

// ---------------------------------------------------------------------------
// TrackingNotifier
// ---------------------------------------------------------------------------

struct TrackingNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

impl TrackingNotifier {
    const fn new() -> Self {
        Self {
            sent: Mutex::new(vec![]),
        }
    }

    fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().expect("lock").clone()
    }
}

#[async_trait]
impl Notifier for TrackingNotifier {
    async fn send(&self, recipient: &str, message: &str) -> Result<(), NotificationError> {
        self.sent
            .lock()
            .expect("lock")
            .push((recipient.to_string(), message.to_string()));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn write_sites(dir: &Path, urls: &[String]) -> JsonSiteFile {
    let path = dir.join("config.json");
    let document = serde_json::json!({
        "RECIPIENT_EMAIL": "ops@example.com",
        "WEBSITE_URLS": urls,
    });
    std::fs::write(&path, document.to_string()).expect("write sites");
    JsonSiteFile::new(path)
}

fn log_sink(dir: &Path) -> LogFileSink {
    LogFileSink::new(dir.join("log.txt").to_str().expect("utf-8 path"))
}

fn prober() -> HttpProber {
    HttpProber::new(Some(Duration::from_secs(5)), "upwatch-test", false).expect("prober")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cycle_all_up_logs_without_notifying() {
    let dir = tempfile::tempdir().expect("tempdir");
    let urls = vec![serve_status("200 OK").await, serve_status("200 OK").await];
    let sites = write_sites(dir.path(), &urls);
    let run_log = log_sink(dir.path());
    let prober = prober();
    let notifier = TrackingNotifier::new();

    let orchestrator = RunOrchestrator::new(&prober, &notifier, &run_log);
    let result = orchestrator.run_from(&sites, false).await.expect("run");

    assert!(result.success);
    assert_eq!(result.message, ALL_UP_MESSAGE);
    assert_eq!(result.notification, NotificationStatus::NotRequested);
    assert!(notifier.sent().is_empty());

    let log = std::fs::read_to_string(run_log.path()).expect("read log");
    assert!(log.contains("All sites up and running - "));
    assert!(log.ends_with(&urls.join(",")));
    assert!(!log.ends_with('\n'));
}

#[tokio::test]
async fn cycle_all_up_with_sendmail_notifies() {
    let dir = tempfile::tempdir().expect("tempdir");
    let urls = vec![serve_status("200 OK").await];
    let sites = write_sites(dir.path(), &urls);
    let run_log = log_sink(dir.path());
    let prober = prober();
    let notifier = TrackingNotifier::new();

    let orchestrator = RunOrchestrator::new(&prober, &notifier, &run_log);
    let result = orchestrator.run_from(&sites, true).await.expect("run");

    assert!(result.success);
    assert_eq!(result.notification, NotificationStatus::Sent);

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "ops@example.com");
    assert!(sent[0].1.contains("All sites up and running"));
}

#[tokio::test]
async fn cycle_with_down_sites_logs_and_notifies() {
    let dir = tempfile::tempdir().expect("tempdir");
    let up = serve_status("200 OK").await;
    let failing = serve_status("503 Service Unavailable").await;
    let refused = closed_port_url();
    let sites = write_sites(dir.path(), &[up, failing.clone(), refused.clone()]);
    let run_log = log_sink(dir.path());
    let prober = prober();
    let notifier = TrackingNotifier::new();

    let orchestrator = RunOrchestrator::new(&prober, &notifier, &run_log);
    let result = orchestrator.run_from(&sites, false).await.expect("run");

    assert!(!result.success);
    let expected_tail = format!("Not all sites up. Sites down are - {failing},{refused}");
    assert!(result.message.ends_with(&expected_tail));
    assert_eq!(result.notification, NotificationStatus::Sent);

    let verdict = result.verdict.expect("verdict");
    assert_eq!(verdict.down_endpoints().len(), 2);
    assert_eq!(verdict.outcomes()[1].status_code(), Some(503));
    assert_eq!(verdict.outcomes()[2].status_code(), None);

    let log = std::fs::read_to_string(run_log.path()).expect("read log");
    assert_eq!(log, format!("{}\n", verdict.summary_message()));

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].1, verdict.summary_message());
}

#[tokio::test]
async fn dropped_connection_and_dns_failure_are_down_sites() {
    let dir = tempfile::tempdir().expect("tempdir");
    let hangup = serve_hangup().await;
    let unresolvable = "http://nonexistent.invalid/".to_string();
    let up = serve_status("200 OK").await;
    let sites = write_sites(dir.path(), &[hangup.clone(), unresolvable.clone(), up]);
    let run_log = log_sink(dir.path());
    let prober = prober();
    let notifier = TrackingNotifier::new();

    let orchestrator = RunOrchestrator::new(&prober, &notifier, &run_log);
    let result = orchestrator
        .run_from(&sites, false)
        .await
        .expect("connection failures must not abort the cycle");

    assert!(!result.success);
    let expected_tail = format!("Not all sites up. Sites down are - {hangup},{unresolvable}");
    assert!(result.message.ends_with(&expected_tail));

    let verdict = result.verdict.expect("verdict");
    assert_eq!(verdict.outcomes().len(), 3);
    assert!(verdict.outcomes()[2].reachable());
    for outcome in &verdict.outcomes()[..2] {
        assert_eq!(outcome.message(), "Failed to connect to the website");
    }

    let log = std::fs::read_to_string(run_log.path()).expect("read log");
    assert_eq!(log, format!("{}\n", verdict.summary_message()));
    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test]
async fn consecutive_cycles_append_to_log() {
    let dir = tempfile::tempdir().expect("tempdir");
    let urls = vec![closed_port_url()];
    let sites = write_sites(dir.path(), &urls);
    let run_log = log_sink(dir.path());
    let prober = prober();
    let notifier = TrackingNotifier::new();

    let orchestrator = RunOrchestrator::new(&prober, &notifier, &run_log);
    orchestrator.run_from(&sites, false).await.expect("first run");
    orchestrator.run_from(&sites, false).await.expect("second run");

    let log = std::fs::read_to_string(run_log.path()).expect("read log");
    assert_eq!(log.lines().count(), 2);
    assert_eq!(notifier.sent().len(), 2);
}

#[tokio::test]
async fn missing_sites_file_does_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sites = JsonSiteFile::new(dir.path().join("absent.json"));
    let run_log = log_sink(dir.path());
    let prober = prober();
    let notifier = TrackingNotifier::new();

    let orchestrator = RunOrchestrator::new(&prober, &notifier, &run_log);
    let result = orchestrator.run_from(&sites, true).await.expect("run");

    assert!(!result.success);
    assert_eq!(result.message, NO_CONFIG_MESSAGE);
    assert!(result.verdict.is_none());
    assert!(!run_log.path().exists());
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn malformed_sites_documents_are_treated_as_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let run_log = log_sink(dir.path());
    let prober = prober();
    let notifier = TrackingNotifier::new();
    let orchestrator = RunOrchestrator::new(&prober, &notifier, &run_log);

    for name in ["sites_missing_recipient.json", "sites_truncated.json"] {
        let sites = JsonSiteFile::new(fixture_path(name));
        let result = orchestrator.run_from(&sites, false).await.expect("run");
        assert!(!result.success, "{name}");
        assert_eq!(result.message, NO_CONFIG_MESSAGE, "{name}");
    }

    assert!(!run_log.path().exists());
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn invalid_url_aborts_the_cycle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sites = write_sites(dir.path(), &["not a url".to_string()]);
    let run_log = log_sink(dir.path());
    let prober = prober();
    let notifier = TrackingNotifier::new();

    let orchestrator = RunOrchestrator::new(&prober, &notifier, &run_log);
    let result = orchestrator.run_from(&sites, false).await;

    assert!(result.is_err());
    assert!(!run_log.path().exists());
    assert!(notifier.sent().is_empty());
}
