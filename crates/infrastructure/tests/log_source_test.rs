use dnslog_domain::DomainError;
use dnslog_infrastructure::input::LogSource;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tokio::io::AsyncBufReadExt;

#[test]
fn test_no_arguments_means_stdin() {
    assert_eq!(LogSource::from_args(&[]), vec![LogSource::Stdin]);
}

#[test]
fn test_dash_means_stdin() {
    let args = vec![
        PathBuf::from("a.log"),
        PathBuf::from("-"),
        PathBuf::from("b.log"),
    ];

    assert_eq!(
        LogSource::from_args(&args),
        vec![
            LogSource::File(PathBuf::from("a.log")),
            LogSource::Stdin,
            LogSource::File(PathBuf::from("b.log")),
        ]
    );
}

#[test]
fn test_display() {
    assert_eq!(LogSource::Stdin.to_string(), "<stdin>");
    assert_eq!(
        LogSource::File(PathBuf::from("/var/log/dnscache/current")).to_string(),
        "/var/log/dnscache/current"
    );
    assert_eq!(LogSource::Stdin.path(), None);
}

#[tokio::test]
async fn test_open_file_reads_lines() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "first").unwrap();
    writeln!(file, "second").unwrap();
    file.flush().unwrap();

    let source = LogSource::File(file.path().to_path_buf());
    let reader = source.open().await.unwrap();

    let mut lines = reader.lines();
    assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("first"));
    assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("second"));
    assert_eq!(lines.next_line().await.unwrap(), None);
}

#[tokio::test]
async fn test_open_missing_file_fails() {
    let source = LogSource::File(PathBuf::from("/nonexistent/dnslog/current"));

    match source.open().await {
        Err(DomainError::IoError(msg)) => assert!(msg.contains("/nonexistent/dnslog/current")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("open should fail"),
    }
}
