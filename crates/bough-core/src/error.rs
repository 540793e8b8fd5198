use std::fmt;

/// Machine-readable error codes shared by every bough crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    StopwordsUnreadable,
    UnknownLinkage,
    InvalidVertex,
    InvalidWeight,
    GraphParseError,
    NormalisationUndefined,
    MissingStartMarker,
    MissingEndMarker,
    InputReadFailed,
    InternalUnexpected,
    CapacityExceeded,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1001",
            Self::StopwordsUnreadable => "E1002",
            Self::UnknownLinkage => "E1003",
            Self::InvalidVertex => "E2001",
            Self::InvalidWeight => "E2002",
            Self::GraphParseError => "E2003",
            Self::NormalisationUndefined => "E2004",
            Self::MissingStartMarker => "E3001",
            Self::MissingEndMarker => "E3002",
            Self::InputReadFailed => "E5001",
            Self::InternalUnexpected => "E9001",
            Self::CapacityExceeded => "E9002",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::StopwordsUnreadable => "Stopword list could not be read",
            Self::UnknownLinkage => "Unknown linkage method",
            Self::InvalidVertex => "Vertex index out of range",
            Self::InvalidWeight => "Edge weight must be finite and non-negative",
            Self::GraphParseError => "Malformed edge-list file",
            Self::NormalisationUndefined => "Normalised betweenness needs at least 3 vertices",
            Self::MissingStartMarker => "Start-of-text marker not found",
            Self::MissingEndMarker => "End-of-text marker not found",
            Self::InputReadFailed => "Input file could not be read",
            Self::InternalUnexpected => "Internal unexpected error",
            Self::CapacityExceeded => "Working set too large to allocate",
        }
    }

    /// Optional remediation hint that can be surfaced to operators and agents.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in bough.toml and retry."),
            Self::StopwordsUnreadable => {
                Some("Point `words.stopwords` at a readable file, one word per line.")
            }
            Self::UnknownLinkage => Some("Use `single` or `complete`."),
            Self::InvalidVertex => Some("Vertices are numbered 0..vertex_count-1."),
            Self::InvalidWeight => Some("Negative weights are not supported by Dijkstra."),
            Self::GraphParseError => {
                Some("First line is the vertex count; each further line is `from to weight`.")
            }
            Self::NormalisationUndefined => Some("Use raw betweenness for graphs this small."),
            Self::MissingStartMarker | Self::MissingEndMarker => Some(
                "Input must contain `*** START OF` and `*** END OF` lines, or set `words.require_markers = false`.",
            ),
            Self::InputReadFailed => Some("Check the path and read permissions."),
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
            Self::CapacityExceeded => Some("Cluster a smaller graph."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
