use std::fmt;

/// The outcome of resolving a region identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    FixedUrl(String),
    /// No link is configured for the region and there is no fallback.
    NoAction,
}

impl Destination {
    pub fn url(&self) -> Option<&str> {
        match self {
            Destination::FixedUrl(url) => Some(url),
            Destination::NoAction => None,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::FixedUrl(url) => write!(f, "{url}"),
            Destination::NoAction => write!(f, "no action"),
        }
    }
}
