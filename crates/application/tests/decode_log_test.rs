use dnslog_application::ports::TimestampConverter;
use dnslog_application::services::LineDecoder;
use dnslog_application::use_cases::{DecodeLogUseCase, DecodeStats};
use dnslog_domain::{DecodePolicy, DomainError};
use std::sync::Arc;
use tokio::io::BufWriter;

mod helpers;
use helpers::{line, raw, FakeTimestampConverter};

fn use_case(converter: Arc<FakeTimestampConverter>, policy: DecodePolicy) -> DecodeLogUseCase {
    DecodeLogUseCase::new(
        converter as Arc<dyn TimestampConverter>,
        Arc::new(LineDecoder::new().unwrap()),
        policy,
    )
}

fn input(lines: &[String]) -> Vec<u8> {
    lines.iter().map(|l| format!("{}\n", l)).collect::<String>().into_bytes()
}

#[tokio::test]
async fn test_decodes_lines_in_order() {
    let converter = Arc::new(FakeTimestampConverter::new());
    let use_case = use_case(converter.clone(), DecodePolicy::Lenient);
    let data = input(&[
        raw("7f000001:9d61:be69 - 0001 www.example.com"),
        raw("starting"),
        raw("drop 662478551 timed out"),
        "not a log line".to_string(),
    ]);

    let mut output = Vec::new();
    let stats = use_case.execute(&data[..], &mut output).await.unwrap();

    let expected = input(&[
        line("dropped query (no authority) from 127.0.0.1:40289 (id 48745): a www.example.com"),
        line("starting"),
        line("drop #662478551 timed out"),
        "not a log line".to_string(),
    ]);
    assert_eq!(String::from_utf8(output).unwrap(), String::from_utf8(expected).unwrap());
    assert_eq!(
        stats,
        DecodeStats {
            lines: 4,
            fixed: 1,
            events: 1,
            unknown_events: 1,
            passed_through: 1,
            failed: 0,
        }
    );
    assert_eq!(converter.calls(), 4);
}

#[tokio::test]
async fn test_lenient_policy_echoes_malformed_lines() {
    let converter = Arc::new(FakeTimestampConverter::new());
    let use_case = use_case(converter, DecodePolicy::Lenient);
    let data = input(&[raw("lame nothex example.com."), raw("sent 1 2")]);

    let mut output = Vec::new();
    let stats = use_case.execute(&data[..], &mut output).await.unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        format!("{}\n{}\n", line("lame nothex example.com."), line("sent #1 2"))
    );
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.events, 1);
}

#[tokio::test]
async fn test_strict_policy_stops_on_malformed_line() {
    let converter = Arc::new(FakeTimestampConverter::new());
    let use_case = use_case(converter, DecodePolicy::Strict);
    let data = input(&[raw("sent 1 2"), raw("lame nothex example.com."), raw("sent 3 4")]);

    let mut output = Vec::new();
    let result = use_case.execute(&data[..], &mut output).await;

    assert!(matches!(result, Err(DomainError::InvalidHex { .. })));
    assert_eq!(
        String::from_utf8(output).unwrap(),
        format!("{}\n", line("sent #1 2"))
    );
}

#[tokio::test]
async fn test_converter_failure_is_fatal() {
    let converter = Arc::new(FakeTimestampConverter::failing_after(1));
    let use_case = use_case(converter, DecodePolicy::Lenient);
    let data = input(&[raw("sent 1 2"), raw("sent 3 4")]);

    let mut output = Vec::new();
    let result = use_case.execute(&data[..], &mut output).await;

    assert!(matches!(result, Err(DomainError::TimestampConverter(_))));
    assert_eq!(
        String::from_utf8(output).unwrap(),
        format!("{}\n", line("sent #1 2"))
    );
}

#[tokio::test]
async fn test_converter_failure_flushes_buffered_output() {
    let converter = Arc::new(FakeTimestampConverter::failing_after(2));
    let use_case = use_case(converter, DecodePolicy::Lenient);
    let data = input(&[raw("sent 1 2"), raw("sent 3 4"), raw("sent 5 6")]);

    let mut output = BufWriter::new(Vec::new());
    let result = use_case.execute(&data[..], &mut output).await;

    assert!(matches!(result, Err(DomainError::TimestampConverter(_))));
    assert_eq!(
        String::from_utf8(output.into_inner()).unwrap(),
        format!("{}\n{}\n", line("sent #1 2"), line("sent #3 4"))
    );
}

#[tokio::test]
async fn test_strict_failure_flushes_buffered_output() {
    let converter = Arc::new(FakeTimestampConverter::new());
    let use_case = use_case(converter, DecodePolicy::Strict);
    let data = input(&[raw("sent 1 2"), raw("lame nothex example.com.")]);

    let mut output = BufWriter::new(Vec::new());
    let result = use_case.execute(&data[..], &mut output).await;

    assert!(matches!(result, Err(DomainError::InvalidHex { .. })));
    assert_eq!(
        String::from_utf8(output.into_inner()).unwrap(),
        format!("{}\n", line("sent #1 2"))
    );
}

#[tokio::test]
async fn test_last_line_without_newline_and_crlf() {
    let converter = Arc::new(FakeTimestampConverter::new());
    let use_case = use_case(converter, DecodePolicy::Lenient);
    let data = format!("{}\r\n{}", raw("sent 1 2"), raw("sent 3 4")).into_bytes();

    let mut output = Vec::new();
    let stats = use_case.execute(&data[..], &mut output).await.unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        format!("{}\n{}\n", line("sent #1 2"), line("sent #3 4"))
    );
    assert_eq!(stats.lines, 2);
}

#[tokio::test]
async fn test_empty_input() {
    let converter = Arc::new(FakeTimestampConverter::new());
    let use_case = use_case(converter.clone(), DecodePolicy::Lenient);

    let mut output = Vec::new();
    let stats = use_case.execute(&b""[..], &mut output).await.unwrap();

    assert!(output.is_empty());
    assert_eq!(stats, DecodeStats::default());
    assert_eq!(converter.calls(), 0);
}

#[test]
fn test_stats_merge() {
    let mut total = DecodeStats {
        lines: 2,
        fixed: 1,
        events: 1,
        ..DecodeStats::default()
    };
    total.merge(DecodeStats {
        lines: 3,
        passed_through: 2,
        failed: 1,
        ..DecodeStats::default()
    });

    assert_eq!(total.lines, 5);
    assert_eq!(total.fixed, 1);
    assert_eq!(total.passed_through, 2);
    assert_eq!(total.failed, 1);
}
