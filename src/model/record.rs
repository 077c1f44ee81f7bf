use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One attendance entry. The field names are the persisted JSON contract:
/// `fecha` is an ISO date, `hora_registro` is `HH:MM:SS`.
///
/// Records have no id of their own; a record's identity is its position in
/// the stored sequence, so any insert or delete shifts every later record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub nombre: String,
    pub fecha: NaiveDate,
    #[serde(with = "hora_hms")]
    pub hora_registro: NaiveTime,
    pub asistio: bool,
}

/// `HH:MM:SS` adapter; chrono's own `NaiveTime` form carries fractional
/// seconds, which must never reach the file.
mod hora_hms {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%H:%M:%S";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(de::Error::custom)
    }
}
