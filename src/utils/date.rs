use chrono::Utc;

// timestamps are persisted as epoch milliseconds so both SQL dialects store them alike
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub mod serializer {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;

    pub fn serialize<S: Serializer>(millis: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        let time = DateTime::<Utc>::from_timestamp_millis(*millis)
            .ok_or_else(|| <S::Error as serde::ser::Error>::custom(format!("timestamp out of range {}", millis)))?;
        time.to_rfc3339_opts(SecondsFormat::Millis, true).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = DateTime::parse_from_rfc3339(&str_time).map_err(D::Error::custom)?;
        Ok(time.timestamp_millis())
    }
}
