//! Serde adapters for the server's loose wire encodings.
//!
//! The remote API encodes booleans as the strings `"0"`/`"1"` (attendance
//! marks, access-right flags) and sometimes sends empty strings where a
//! date is absent. These modules normalize both directions so the rest of
//! the workspace only ever sees `bool` and `Option<NaiveDate>`.

/// `"0"`/`"1"` string booleans, tolerant of bare ints and real booleans.
pub mod bit_string {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
        Str(String),
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "1" } else { "0" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Bool(b) => b,
            Raw::Int(n) => n != 0,
            Raw::Str(s) => matches!(s.trim(), "1" | "true"),
        })
    }
}

/// Optional `YYYY-MM-DD` dates where the server may send `""` or omit the
/// field entirely.
pub mod opt_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Flagged {
        #[serde(with = "super::bit_string")]
        marked: bool,
        #[serde(with = "super::opt_date", default)]
        date: Option<NaiveDate>,
    }

    #[test]
    fn bit_string_accepts_all_server_spellings() {
        for (raw, expected) in [
            (r#"{"marked":"1"}"#, true),
            (r#"{"marked":"0"}"#, false),
            (r#"{"marked":1}"#, true),
            (r#"{"marked":true}"#, true),
            (r#"{"marked":" 1 "}"#, true),
        ] {
            let parsed: Flagged = serde_json::from_str(raw).unwrap();
            assert_eq!(parsed.marked, expected, "raw: {raw}");
        }
    }

    #[test]
    fn bit_string_serializes_as_string() {
        let json = serde_json::to_string(&Flagged {
            marked: true,
            date: None,
        })
        .unwrap();
        assert!(json.contains(r#""marked":"1""#));
    }

    #[test]
    fn empty_string_date_is_none() {
        let parsed: Flagged = serde_json::from_str(r#"{"marked":"0","date":""}"#).unwrap();
        assert!(parsed.date.is_none());

        let parsed: Flagged = serde_json::from_str(r#"{"marked":"0","date":"1990-03-14"}"#).unwrap();
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(1990, 3, 14));
    }
}
