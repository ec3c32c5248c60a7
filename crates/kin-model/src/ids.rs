use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of an app (a remote record collection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AppId(pub u64);

impl AppId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for AppId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for AppId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        id_repr::deserialize(deserializer).map(AppId)
    }
}

/// Identifier of a single record within an app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        id_repr::deserialize(deserializer).map(RecordId)
    }
}

/// The wire format is inconsistent about ids: requests take numbers while
/// responses return decimal strings. Accept both on the way in.
mod id_repr {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Num(u64),
        Str(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Repr::deserialize(deserializer)? {
            Repr::Num(n) => Ok(n),
            Repr::Str(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_id_serializes_as_bare_number() {
        let json = serde_json::to_string(&AppId::new(123)).unwrap();
        assert_eq!(json, "123");
    }

    #[test]
    fn ids_deserialize_from_number_or_string() {
        let from_num: AppId = serde_json::from_str("123").unwrap();
        let from_str: AppId = serde_json::from_str("\"123\"").unwrap();
        assert_eq!(from_num, from_str);

        let id: RecordId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(id, RecordId::new(42));
    }

    #[test]
    fn non_numeric_string_id_is_rejected() {
        let parsed: Result<RecordId, _> = serde_json::from_str("\"abc\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn record_id_display() {
        assert_eq!(RecordId::new(42).to_string(), "42");
    }
}
