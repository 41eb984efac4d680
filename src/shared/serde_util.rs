//! Custom serde helpers for provider wire formats.

/// Deserializes a provider timestamp into `DateTime<Utc>`.
///
/// Providers send either an RFC 3339 string or Unix epoch milliseconds.
pub mod flexible_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Millis(millis) => DateTime::<Utc>::from_timestamp_millis(millis)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", millis))),
            Raw::Text(s) => DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| serde::de::Error::custom(format!("Invalid timestamp {:?}: {}", s, e))),
        }
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(with = "super::flexible_timestamp")]
        t: DateTime<Utc>,
    }

    #[test]
    fn test_rfc3339_and_millis_agree() {
        let a: Holder = serde_json::from_str(r#"{"t": "2024-01-01T00:00:00Z"}"#).unwrap();
        let b: Holder = serde_json::from_str(r#"{"t": 1704067200000}"#).unwrap();
        assert_eq!(a.t, b.t);
    }

    #[test]
    fn test_garbage_timestamp_fails() {
        assert!(serde_json::from_str::<Holder>(r#"{"t": "yesterday"}"#).is_err());
    }
}
