use dnslog_domain::{EventKind, EventRecord};

#[test]
fn test_event_record_splits_words() {
    let record = EventRecord::new("2024-01-02 03:04:05.123", "drop", " 662478551  timed out");

    assert_eq!(record.words, vec!["662478551", "timed", "out"]);
    assert_eq!(record.kind(), Some(EventKind::Drop));
}

#[test]
fn test_unknown_event_has_no_kind() {
    let record = EventRecord::new("2024-01-02 03:04:05.123", "starting", "");

    assert!(record.words.is_empty());
    assert_eq!(record.kind(), None);
}

#[test]
fn test_event_names_round_trip() {
    for name in [
        "cached", "drop", "lame", "nodata", "nxdomain", "query", "rr", "sent", "stats", "tx",
        "tcpopen", "tcpclose",
    ] {
        let kind = EventKind::from_name(name).unwrap();
        assert_eq!(kind.as_str(), name);
        assert_eq!(kind.to_string(), name);
    }
}

#[test]
fn test_event_names_are_case_sensitive() {
    assert_eq!(EventKind::from_name("Query"), None);
}
