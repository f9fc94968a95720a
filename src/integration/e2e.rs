//! End-to-end integration tests

use std::path::Path;
use wiremock::MockServer;

use crate::config::MergeConfig;
use crate::error::MergeError;
use crate::integration::fixtures::{serve, serve_status, PRIMARY, SPECIAL, TARGET};
use crate::playlist::parse_groups;
use crate::run::run;

const LIME: &str = "Lime (VPN 🇷🇺)";

fn config(server: &MockServer, output: &Path) -> MergeConfig {
    MergeConfig {
        source_urls: vec![
            format!("{}/primary.m3u", server.uri()),
            format!("{}/special.m3u", server.uri()),
        ],
        target_url: format!("{}/target.m3u", server.uri()),
        output_file: output.to_path_buf(),
        special_group: None,
        special_source: None,
        timeout_secs: Some(5),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_merge_primary_only() {
    let server = MockServer::start().await;
    serve(&server, "/target.m3u", TARGET).await;
    serve(&server, "/primary.m3u", PRIMARY).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.m3u");

    let (path, report) = run(&config(&server, &output)).await.unwrap();
    assert_eq!(path, output);
    assert_eq!(report.replaced, vec!["News", LIME]);
    assert!(report.warnings.is_empty());

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "#EXTM3U url-tvg=\"http://epg.example/epg.xml\"
#--- My playlist ---
#EXTINF:-1 group-title=\"News\",New News
http://new.example/news
#EXTINF:-1 group-title=\"Sports\",Old Sports
#EXTVLCOPT:http-user-agent=Player/1.0
http://old.example/sports
#EXTINF:-1 group-title=\"Lime (VPN 🇷🇺)\",Primary Lime
http://new.example/lime
"
    );
}

#[tokio::test]
async fn test_merge_with_special_group() {
    let server = MockServer::start().await;
    serve(&server, "/target.m3u", TARGET).await;
    serve(&server, "/primary.m3u", PRIMARY).await;
    serve(&server, "/special.m3u", SPECIAL).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.m3u");
    let config = MergeConfig {
        special_group: Some(LIME.to_string()),
        special_source: Some(format!("{}/special.m3u", server.uri())),
        ..config(&server, &output)
    };

    let (_, report) = run(&config).await.unwrap();
    assert!(report.special_replaced);

    let groups = parse_groups(&std::fs::read_to_string(&output).unwrap());
    assert_eq!(
        groups.names().collect::<Vec<_>>(),
        vec!["News", "Sports", LIME]
    );
    assert_eq!(
        groups.get(LIME).unwrap(),
        &[
            "#EXTINF:-1 group-title=\"Lime (VPN 🇷🇺)\",Special Lime",
            "http://special.example/lime",
        ]
    );
    assert!(!groups.contains("Movies"));
    assert!(!groups.contains("Kids"));
}

#[tokio::test]
async fn test_special_group_missing_is_not_fatal() {
    let server = MockServer::start().await;
    serve(&server, "/target.m3u", TARGET).await;
    serve(&server, "/primary.m3u", PRIMARY).await;
    serve(&server, "/special.m3u", SPECIAL).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.m3u");
    let config = MergeConfig {
        special_group: Some("VPN".to_string()),
        special_source: Some(format!("{}/special.m3u", server.uri())),
        ..config(&server, &output)
    };

    let (_, report) = run(&config).await.unwrap();
    assert!(!report.special_replaced);
    assert_eq!(report.warnings.len(), 1);

    let groups = parse_groups(&std::fs::read_to_string(&output).unwrap());
    assert!(!groups.contains("VPN"));
    assert_eq!(groups.len(), 3);
}

#[tokio::test]
async fn test_empty_special_group_skips_special_source() {
    let server = MockServer::start().await;
    serve(&server, "/target.m3u", TARGET).await;
    serve(&server, "/primary.m3u", PRIMARY).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.m3u");
    // The special source is not served; fetching it would fail the run.
    let config = MergeConfig {
        special_group: Some(String::new()),
        special_source: Some(format!("{}/unreachable.m3u", server.uri())),
        ..config(&server, &output)
    };

    let (_, report) = run(&config).await.unwrap();
    assert!(!report.special_replaced);
    assert!(report.warnings.is_empty());
    assert_eq!(report.replaced, vec!["News", LIME]);
    assert!(output.exists());
}

#[tokio::test]
async fn test_empty_special_source_skips_special_step() {
    let server = MockServer::start().await;
    serve(&server, "/target.m3u", TARGET).await;
    serve(&server, "/primary.m3u", PRIMARY).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.m3u");
    let config = MergeConfig {
        special_group: Some(LIME.to_string()),
        special_source: Some(String::new()),
        ..config(&server, &output)
    };

    let (_, report) = run(&config).await.unwrap();
    assert!(!report.special_replaced);
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn test_cr_only_target_is_merged() {
    let server = MockServer::start().await;
    serve(&server, "/target.m3u", &TARGET.replace('\n', "\r")).await;
    serve(&server, "/primary.m3u", PRIMARY).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.m3u");

    let (_, report) = run(&config(&server, &output)).await.unwrap();
    assert_eq!(report.replaced, vec!["News", LIME]);

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("#EXTM3U url-tvg=\"http://epg.example/epg.xml\"\n#--- My playlist ---\n"));
    assert_eq!(
        parse_groups(&written).names().collect::<Vec<_>>(),
        vec!["News", "Sports", LIME]
    );
}

#[tokio::test]
async fn test_failed_source_writes_nothing() {
    let server = MockServer::start().await;
    serve(&server, "/target.m3u", TARGET).await;
    serve_status(&server, "/primary.m3u", 500).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.m3u");
    let config = config(&server, &output);

    let err = run(&config).await.unwrap_err();
    match err {
        MergeError::RetrievalStatus { url, status } => {
            assert_eq!(url, config.source_urls[0]);
            assert_eq!(status.as_u16(), 500);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!output.exists());
}

#[tokio::test]
async fn test_missing_target_fails() {
    let server = MockServer::start().await;
    serve(&server, "/primary.m3u", PRIMARY).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.m3u");

    // Unmatched requests get a 404 from the mock server.
    let err = run(&config(&server, &output)).await.unwrap_err();
    assert_eq!(err.url(), Some(format!("{}/target.m3u", server.uri()).as_str()));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_invalid_config_fails_before_fetching() {
    let dir = tempfile::tempdir().unwrap();
    let config = MergeConfig {
        source_urls: vec![],
        output_file: dir.path().join("out.m3u"),
        ..Default::default()
    };
    assert!(matches!(run(&config).await, Err(MergeError::Config(_))));
}
