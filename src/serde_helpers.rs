//! Serde helpers for query encoding and the response envelope.
//!
//! When the `tracing` feature is enabled, this module also logs warnings for envelope fields
//! that [`Page`](crate::types::Page) does not model, helping detect API changes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
#[cfg(feature = "tracing")]
use serde_json::Value;
use serde_with::formats::Separator;

use crate::types::response::Record;

/// Separator used by `include` and `filter`.
pub struct SemicolonSeparator;

impl Separator for SemicolonSeparator {
    fn separator() -> &'static str {
        ";"
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Record>),
    One(Record),
}

/// Accepts `data` as an array of objects, a single object, or `null`.
pub fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::Many(records)) => records,
        Some(OneOrMany::One(record)) => vec![record],
    })
}

/// Decode a response body, logging unknown fields and the path of any failure.
///
/// Unknown fields trigger warnings but do not cause decoding to fail.
#[cfg(feature = "tracing")]
pub fn deserialize_with_warnings<T: DeserializeOwned>(body: &[u8]) -> crate::Result<T> {
    use std::any::type_name;

    let value: Value = serde_json::from_slice(body)?;

    tracing::trace!(
        type_name = %type_name::<T>(),
        json = %value,
        "deserializing JSON"
    );

    let mut unknown_paths: Vec<String> = Vec::new();

    let result: T = serde_ignored::deserialize(&value, |path| {
        unknown_paths.push(path.to_string());
    })
    .inspect_err(|_| {
        let path_result: Result<T, _> = serde_path_to_error::deserialize(&value);
        if let Err(path_err) = path_result {
            let path = path_err.path().to_string();

            tracing::error!(
                type_name = %type_name::<T>(),
                path = %path,
                value = %display_at(&value, &path),
                error = %path_err.inner(),
                "deserialization failed"
            );
        }
    })?;

    for path in unknown_paths {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            value = %display_at(&value, &path),
            "unknown field in API response"
        );
    }

    Ok(result)
}

/// Pass-through decoding when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub fn deserialize_with_warnings<T: DeserializeOwned>(body: &[u8]) -> crate::Result<T> {
    Ok(serde_json::from_slice(body)?)
}

/// Render the value at a `serde_ignored` / `serde_path_to_error` path, e.g. `pagination.links`
/// or `data[3].id`, truncated for log output.
#[cfg(feature = "tracing")]
fn display_at(value: &Value, path: &str) -> String {
    const MAX_LEN: usize = 200;

    let mut current = Some(value);
    for segment in path.split(['.', '[', ']']) {
        if segment.is_empty() || segment == "?" {
            continue;
        }
        current = match current {
            Some(Value::Object(map)) => map.get(segment),
            Some(Value::Array(items)) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
    }

    match current {
        None => "<missing>".to_owned(),
        Some(found) => {
            let rendered = found.to_string();
            if rendered.chars().count() > MAX_LEN {
                let truncated: String = rendered.chars().take(MAX_LEN).collect();
                format!("{truncated}...")
            } else {
                rendered
            }
        }
    }
}
