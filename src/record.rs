//! Record type persisted by the driver.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A stored record: one integer score
///
/// Serialized with the field name `Score`, e.g. `{"Score": 42}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Score")]
    pub score: i64,
}

impl Record {
    pub fn new(score: i64) -> Self {
        Self { score }
    }

    /// Decode a record from stored bytes
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_field_name_is_verbatim() {
        let json = serde_json::to_string(&Record::new(42)).unwrap();
        assert_eq!(json, r#"{"Score":42}"#);
    }

    #[test]
    fn test_from_slice() {
        let record = Record::from_slice(b"{\n  \"Score\": -3\n}").unwrap();
        assert_eq!(record.score, -3);
    }

    #[test]
    fn test_missing_score_is_serialization_error() {
        let err = Record::from_slice(br#"{"score": 1}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Serialization);
    }

    #[test]
    fn test_non_integer_score_is_serialization_error() {
        let err = Record::from_slice(br#"{"Score": "high"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Serialization);
    }
}
