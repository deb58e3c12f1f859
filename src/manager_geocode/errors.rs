use std::fmt;

#[derive(Debug)]
pub enum GeocodeError {
    Request(String),
    Document(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeocodeError::Request(e) => write!(f, "GeocodeError::Request: {}", e),
            GeocodeError::Document(e) => write!(f, "GeocodeError::Document: {}", e),
        }
    }
}
impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        GeocodeError::Request(e.to_string())
    }
}
impl From<serde_json::Error> for GeocodeError {
    fn from(e: serde_json::Error) -> Self {
        GeocodeError::Document(e.to_string())
    }
}
