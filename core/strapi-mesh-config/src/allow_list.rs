//! Pure edits on the [`AllowList`] union and migration of older persisted
//! shapes.
//!
//! Three generations of the data-type value exist in host state:
//!
//! 1. `{ allowedContentTypes: [..] | "a,b", displayField?, imageField? }`
//! 2. `{ contentTypes: "[{\"single\":..,\"plural\":..}]", displayField?, imageField? }`
//! 3. `{ contentTypes: [ContentTypeConfig] }`
//!
//! plus the tagged form written by this crate. [`migrate_custom`] turns any of
//! them into an [`AllowList`]; the editors only ever operate on the result.

use crate::error::{ConfigError, ConfigResult};
use serde::Deserialize;
use serde_json::{Map, Value};
use strapi_mesh_types::{AllowList, ContentTypeConfig};

const FLAT: &str = "flat";
const PER_COLLECTION: &str = "per-collection";

/// Splits comma-separated collection keys, trimming and dropping empties.
pub fn parse_keys(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect()
}

/// Replaces the flat key list.
pub fn set_flat_keys(list: &AllowList, input: &str) -> ConfigResult<AllowList> {
    let (display_field, image_field) = flat_fields(list)?;
    Ok(AllowList::Flat {
        allowed_content_types: parse_keys(input),
        display_field,
        image_field,
    })
}

/// Sets the display field shared by every flat key. Blank clears it.
pub fn set_display_field(list: &AllowList, value: &str) -> ConfigResult<AllowList> {
    let (_, image_field) = flat_fields(list)?;
    Ok(AllowList::Flat {
        allowed_content_types: flat_keys(list),
        display_field: non_blank(value),
        image_field,
    })
}

/// Sets the image field shared by every flat key. Blank clears it.
pub fn set_image_field(list: &AllowList, value: &str) -> ConfigResult<AllowList> {
    let (display_field, _) = flat_fields(list)?;
    Ok(AllowList::Flat {
        allowed_content_types: flat_keys(list),
        display_field,
        image_field: non_blank(value),
    })
}

/// Appends a per-collection record.
pub fn add_collection(list: &AllowList, config: ContentTypeConfig) -> ConfigResult<AllowList> {
    let mut content_types = per_collection(list)?;
    content_types.push(config);
    Ok(AllowList::PerCollection { content_types })
}

/// Replaces the record at `index`.
pub fn update_collection(
    list: &AllowList,
    index: usize,
    config: ContentTypeConfig,
) -> ConfigResult<AllowList> {
    let mut content_types = per_collection(list)?;
    let len = content_types.len();
    let slot = content_types
        .get_mut(index)
        .ok_or(ConfigError::IndexOutOfRange { index, len })?;
    *slot = config;
    Ok(AllowList::PerCollection { content_types })
}

/// Removes the record at `index`.
pub fn remove_collection(list: &AllowList, index: usize) -> ConfigResult<AllowList> {
    let mut content_types = per_collection(list)?;
    if index >= content_types.len() {
        return Err(ConfigError::IndexOutOfRange {
            index,
            len: content_types.len(),
        });
    }
    content_types.remove(index);
    Ok(AllowList::PerCollection { content_types })
}

#[derive(Deserialize)]
struct EncodedContentType {
    single: String,
    plural: String,
}

/// Decodes the JSON-string list `[{"single":"hero","plural":"heroes"}]` into
/// per-collection records. A blank string decodes to an empty list.
pub fn decode_encoded(encoded: &str) -> ConfigResult<Vec<ContentTypeConfig>> {
    if encoded.trim().is_empty() {
        return Ok(Vec::new());
    }

    let items: Vec<EncodedContentType> = serde_json::from_str(encoded)
        .map_err(|e| ConfigError::InvalidEncodedList(e.to_string()))?;

    Ok(items
        .into_iter()
        .map(|item| ContentTypeConfig::new("", item.single, item.plural))
        .collect())
}

/// Adapts a raw persisted `custom` value of any generation.
///
/// `null` and `{}` yield the default (empty, allow everything). A value
/// carrying both `allowedContentTypes` and `contentTypes` is rejected.
pub fn migrate_custom(raw: &Value) -> ConfigResult<AllowList> {
    let map = match raw {
        Value::Null => return Ok(AllowList::default()),
        Value::Object(map) => map,
        other => return Err(ConfigError::UnknownShape(json_type(other).to_string())),
    };

    if map.contains_key("kind") {
        return Ok(serde_json::from_value(raw.clone())?);
    }

    let display_field = string_field(map, "displayField");
    let image_field = string_field(map, "imageField");

    match (map.get("allowedContentTypes"), map.get("contentTypes")) {
        (Some(_), Some(_)) => Err(ConfigError::AmbiguousShape),
        (Some(keys), None) => {
            let allowed_content_types = match keys {
                Value::Array(items) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::trim)
                    .filter(|key| !key.is_empty())
                    .map(str::to_string)
                    .collect(),
                Value::String(csv) => parse_keys(csv),
                Value::Null => Vec::new(),
                other => {
                    return Err(ConfigError::UnknownShape(format!(
                        "allowedContentTypes is {}",
                        json_type(other)
                    )));
                }
            };
            Ok(AllowList::Flat {
                allowed_content_types,
                display_field,
                image_field,
            })
        }
        (None, Some(Value::String(encoded))) => {
            let content_types = decode_encoded(encoded)?
                .into_iter()
                .map(|mut config| {
                    config.display_field = display_field.clone();
                    config.image_field = image_field.clone();
                    config
                })
                .collect();
            Ok(AllowList::PerCollection { content_types })
        }
        (None, Some(records @ Value::Array(_))) => Ok(AllowList::PerCollection {
            content_types: serde_json::from_value(records.clone())?,
        }),
        (None, Some(other)) => Err(ConfigError::UnknownShape(format!(
            "contentTypes is {}",
            json_type(other)
        ))),
        (None, None) => {
            let known = ["displayField", "imageField"];
            match map.keys().find(|key| !known.contains(&key.as_str())) {
                Some(key) => Err(ConfigError::UnknownShape(format!("unexpected key {key}"))),
                None => Ok(AllowList::Flat {
                    allowed_content_types: Vec::new(),
                    display_field,
                    image_field,
                }),
            }
        }
    }
}

/// Flat edits are accepted on a flat list, or on an empty per-collection list
/// which they replace.
fn flat_fields(list: &AllowList) -> ConfigResult<(Option<String>, Option<String>)> {
    match list {
        AllowList::Flat {
            display_field,
            image_field,
            ..
        } => Ok((display_field.clone(), image_field.clone())),
        AllowList::PerCollection { content_types } if content_types.is_empty() => Ok((None, None)),
        AllowList::PerCollection { .. } => Err(ConfigError::ShapeMismatch {
            expected: FLAT,
            actual: PER_COLLECTION,
        }),
    }
}

fn flat_keys(list: &AllowList) -> Vec<String> {
    match list {
        AllowList::Flat {
            allowed_content_types,
            ..
        } => allowed_content_types.clone(),
        AllowList::PerCollection { .. } => Vec::new(),
    }
}

/// Per-collection edits are accepted on a per-collection list, or on a flat
/// list with nothing configured.
fn per_collection(list: &AllowList) -> ConfigResult<Vec<ContentTypeConfig>> {
    match list {
        AllowList::PerCollection { content_types } => Ok(content_types.clone()),
        AllowList::Flat {
            allowed_content_types,
            display_field,
            image_field,
        } if allowed_content_types.is_empty()
            && display_field.is_none()
            && image_field.is_none() =>
        {
            Ok(Vec::new())
        }
        AllowList::Flat { .. } => Err(ConfigError::ShapeMismatch {
            expected: PER_COLLECTION,
            actual: FLAT,
        }),
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).and_then(non_blank)
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
