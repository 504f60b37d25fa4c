use std::fmt;

/// dnscache events that have a decoding recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Cached,
    Drop,
    Lame,
    Nodata,
    Nxdomain,
    Query,
    Rr,
    Sent,
    Stats,
    Tx,
    TcpOpen,
    TcpClose,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Cached => "cached",
            EventKind::Drop => "drop",
            EventKind::Lame => "lame",
            EventKind::Nodata => "nodata",
            EventKind::Nxdomain => "nxdomain",
            EventKind::Query => "query",
            EventKind::Rr => "rr",
            EventKind::Sent => "sent",
            EventKind::Stats => "stats",
            EventKind::Tx => "tx",
            EventKind::TcpOpen => "tcpopen",
            EventKind::TcpClose => "tcpclose",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "cached" => Some(EventKind::Cached),
            "drop" => Some(EventKind::Drop),
            "lame" => Some(EventKind::Lame),
            "nodata" => Some(EventKind::Nodata),
            "nxdomain" => Some(EventKind::Nxdomain),
            "query" => Some(EventKind::Query),
            "rr" => Some(EventKind::Rr),
            "sent" => Some(EventKind::Sent),
            "stats" => Some(EventKind::Stats),
            "tx" => Some(EventKind::Tx),
            "tcpopen" => Some(EventKind::TcpOpen),
            "tcpclose" => Some(EventKind::TcpClose),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dnscache line: an event name followed by whitespace-separated words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord<'a> {
    pub timestamp: &'a str,
    pub event_name: &'a str,
    pub words: Vec<&'a str>,
}

impl<'a> EventRecord<'a> {
    pub fn new(timestamp: &'a str, event_name: &'a str, rest: &'a str) -> Self {
        Self {
            timestamp,
            event_name,
            words: rest.split_whitespace().collect(),
        }
    }

    /// The recipe this event is decoded with, if any.
    pub fn kind(&self) -> Option<EventKind> {
        EventKind::from_name(self.event_name)
    }
}
