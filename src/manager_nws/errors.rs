use std::fmt;

#[derive(Debug)]
pub enum NWSError {
    NWS(String),
    Document(String),
}

impl fmt::Display for NWSError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NWSError::NWS(e) => write!(f, "NWSError::NWS: {}", e),
            NWSError::Document(e) => write!(f, "NWSError::Document: {}", e),
        }
    }
}
impl From<reqwest::Error> for NWSError {
    fn from(e: reqwest::Error) -> Self {
        NWSError::NWS(e.to_string())
    }
}
impl From<serde_json::Error> for NWSError {
    fn from(e: serde_json::Error) -> Self {
        NWSError::Document(e.to_string())
    }
}
