use std::fmt;

/// Delivery container a transcoded stream is packaged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    Mp4,
    WebM,
    Hls,
    Dash,
}

impl Container {
    /// Look up a container by its exact label token. Case-sensitive.
    pub fn from_token(token: &str) -> Option<Container> {
        match token {
            "MP4" => Some(Container::Mp4),
            "WebM" => Some(Container::WebM),
            "HLS" => Some(Container::Hls),
            "DASH" => Some(Container::Dash),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Container::Mp4 => "MP4",
            Container::WebM => "WebM",
            Container::Hls => "HLS",
            Container::Dash => "DASH",
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
