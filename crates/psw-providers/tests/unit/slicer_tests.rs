//! Slicer subprocess tests

use crate::test_utils::sh_command;
use psw_domain::ports::providers::PcapSlicer;
use psw_domain::value_objects::{RenderKind, SliceRequest};
use psw_providers::SubprocessPcapSlicer;
use std::time::{Duration, Instant};

const RECORDING_SLICER: &str = r#"
printf '%s\n' "$1" "$2" "$3" "$4" > "$5"
echo done
"#;

#[tokio::test]
async fn test_slice_passes_positional_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let slicer = SubprocessPcapSlicer::new(
        sh_command(dir.path(), "slicer.sh", RECORDING_SLICER),
        Duration::from_secs(10),
    );
    let destination = dir.path().join("out");
    let request = SliceRequest::new("/tmp/pcap/web/a.cap", 77, RenderKind::Hex);

    let output = slicer.slice(&request, &destination).await.unwrap();

    assert!(output.succeeded());
    assert_eq!(output.stdout, b"done\n");
    let written = std::fs::read_to_string(&destination).unwrap();
    assert_eq!(
        written,
        "/tmp/pcap/web/a.cap.ap\n77\nhex\n/tmp/pcap/web/a.cap\n"
    );
}

#[tokio::test]
async fn test_failed_slice_reports_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let slicer = SubprocessPcapSlicer::new(
        sh_command(dir.path(), "fail.sh", "exit 3\n"),
        Duration::from_secs(10),
    );
    let request = SliceRequest::new("/x.cap", 1, RenderKind::Pcap);

    let output = slicer.slice(&request, &dir.path().join("out")).await.unwrap();
    assert_eq!(output.exit_code, Some(3));
    assert!(!output.succeeded());
}

#[tokio::test]
async fn test_slow_slicer_is_killed_at_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let slicer = SubprocessPcapSlicer::new(
        sh_command(dir.path(), "slow.sh", "sleep 30\n"),
        Duration::from_millis(200),
    );
    let request = SliceRequest::new("/x.cap", 1, RenderKind::Str);

    let started = Instant::now();
    let err = slicer
        .slice(&request, &dir.path().join("out"))
        .await
        .unwrap_err();
    assert!(err.is_timeout());
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn test_locate_reads_span_from_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let script = r#"
[ "$3" = "loc" ] || exit 2
[ "$5" = "/dev/stdout" ] || exit 2
echo "$2 250"
"#;
    let slicer =
        SubprocessPcapSlicer::new(sh_command(dir.path(), "loc.sh", script), Duration::from_secs(10));

    let span = slicer
        .locate(std::path::Path::new("/tmp/pcap/web/a.cap"), 120)
        .await
        .unwrap()
        .unwrap();
    assert_eq!((span.start, span.end), (120, 250));
}

#[tokio::test]
async fn test_locate_with_garbage_output_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let slicer = SubprocessPcapSlicer::new(
        sh_command(dir.path(), "loc.sh", "echo nothing\n"),
        Duration::from_secs(10),
    );
    let span = slicer
        .locate(std::path::Path::new("/a.cap"), 1)
        .await
        .unwrap();
    assert!(span.is_none());
}

#[tokio::test]
async fn test_locate_failure_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let slicer = SubprocessPcapSlicer::new(
        sh_command(dir.path(), "loc.sh", "exit 1\n"),
        Duration::from_secs(10),
    );
    assert!(slicer.locate(std::path::Path::new("/a.cap"), 1).await.is_err());
}
