//! Validation of the `{ "ok": .., "data": .. }` wrapper every endpoint
//! answers with.

use serde_json::Value;
use tracing::debug;

use super::error::FetchError;
use crate::model::{SongDetail, SongSummary};

/// Whole response must be well formed; individual malformed entries are
/// dropped.
pub fn parse_catalog(body: &[u8]) -> Result<Vec<SongSummary>, FetchError> {
    let Value::Array(entries) = open(body)? else {
        return Err(FetchError::InvalidResponseShape(
            "`data` is not an array".to_string(),
        ));
    };

    let total = entries.len();
    let songs: Vec<SongSummary> = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match SongSummary::try_from(entry) {
            Ok(song) => Some(song),
            Err(err) => {
                debug!(index, "Skipping catalog entry: {}", err);
                None
            }
        })
        .collect();

    if songs.len() != total {
        debug!("Kept {} of {} catalog entries", songs.len(), total);
    }

    Ok(songs)
}

pub fn parse_detail(body: &[u8]) -> Result<SongDetail, FetchError> {
    match open(body)? {
        Value::Object(fields) if !fields.is_empty() => Ok(SongDetail::new(fields)),
        Value::Object(_) => Err(FetchError::InvalidResponseShape(
            "`data` is an empty record".to_string(),
        )),
        _ => Err(FetchError::InvalidResponseShape(
            "`data` is not an object".to_string(),
        )),
    }
}

fn open(body: &[u8]) -> Result<Value, FetchError> {
    let root: Value = serde_json::from_slice(body)
        .map_err(|e| FetchError::InvalidResponseShape(format!("body is not JSON: {e}")))?;

    let Value::Object(mut envelope) = root else {
        return Err(FetchError::InvalidResponseShape(
            "body is not an object".to_string(),
        ));
    };

    if !envelope.get("ok").is_some_and(is_truthy) {
        return Err(FetchError::InvalidResponseShape(
            "request was not successful".to_string(),
        ));
    }

    envelope
        .remove("data")
        .ok_or_else(|| FetchError::InvalidResponseShape("missing `data`".to_string()))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
