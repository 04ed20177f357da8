use super::DecodeError;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

/// One user action from a session log file.
///
/// Field names follow the log format (camelCase); everything is optional
/// because non-play actions (login, home page, logout) legitimately omit the
/// song fields. `userId` appears as either a JSON string or a number in the
/// wild, so it is normalized to a string here.
#[derive(Clone, Debug, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PlayEvent {
    pub ts: Option<i64>,
    pub page: Option<String>,
    #[serde(rename = "userId", deserialize_with = "string_or_number")]
    pub user_id: Option<String>,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub level: Option<String>,
    pub song: Option<String>,
    pub artist: Option<String>,
    pub length: Option<f64>,
    #[serde(rename = "sessionId")]
    pub session_id: Option<i64>,
    pub location: Option<String>,
    #[serde(rename = "userAgent")]
    pub user_agent: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(i64),
    }

    let value: Option<StringOrNumber> = Option::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    }))
}

/// Read a session log file containing one JSON record per line.
///
/// Records come back in file order. Blank lines are skipped; a line that is
/// not valid JSON fails the whole file with its 1-based line number.
pub fn read_event_file(path: &Path) -> Result<Vec<PlayEvent>, DecodeError> {
    let content = fs::read_to_string(path)?;
    let mut events = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let event = serde_json::from_str(line).map_err(|e| DecodeError::Malformed {
            line: Some(index + 1),
            reason: e.to_string(),
        })?;
        events.push(event);
    }
    Ok(events)
}
