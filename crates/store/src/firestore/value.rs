//! Firestore document value codec.
//!
//! The REST API wraps every field in a typed envelope (`stringValue`,
//! `integerValue`, ...). This module converts between those envelopes and
//! plain JSON so the rest of the crate can use serde types directly.
//! Note that `integerValue` is a JSON *string* on the wire.

use serde_json::{Map, Value, json};

use crate::error::{StoreError, StoreResult};

/// Wrap a plain JSON object into a Firestore document body (`{"fields": ..}`).
pub fn to_document(value: &Value) -> StoreResult<Value> {
    let Value::Object(map) = value else {
        return Err(StoreError::decode("document body must be a JSON object"));
    };
    let mut fields = Map::new();
    for (key, field) in map {
        fields.insert(key.clone(), encode(field)?);
    }
    Ok(json!({ "fields": fields }))
}

/// Unwrap a Firestore document into `(id, plain JSON object)`.
///
/// The id is the last segment of the document's resource name.
pub fn from_document(doc: &Value) -> StoreResult<(String, Value)> {
    let name = doc
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::decode("document has no name"))?;
    let id = name
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| StoreError::decode("document name has no id segment"))?
        .to_string();

    let mut plain = Map::new();
    if let Some(Value::Object(fields)) = doc.get("fields") {
        for (key, envelope) in fields {
            plain.insert(key.clone(), decode(envelope)?);
        }
    }
    Ok((id, Value::Object(plain)))
}

fn encode(value: &Value) -> StoreResult<Value> {
    let encoded = match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                json!({ "integerValue": i.to_string() })
            } else if let Some(u) = n.as_u64() {
                json!({ "integerValue": u.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Result<Vec<Value>, StoreError> = items.iter().map(encode).collect();
            json!({ "arrayValue": { "values": values? } })
        }
        Value::Object(map) => {
            let mut fields = Map::new();
            for (key, field) in map {
                fields.insert(key.clone(), encode(field)?);
            }
            json!({ "mapValue": { "fields": fields } })
        }
    };
    Ok(encoded)
}

fn decode(envelope: &Value) -> StoreResult<Value> {
    let Value::Object(map) = envelope else {
        return Err(StoreError::decode("field envelope must be an object"));
    };
    let (kind, inner) = map
        .iter()
        .next()
        .ok_or_else(|| StoreError::decode("empty field envelope"))?;

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => Ok(inner.clone()),
        "stringValue" | "timestampValue" | "referenceValue" => Ok(inner.clone()),
        "integerValue" => {
            let raw = inner
                .as_str()
                .map(str::to_string)
                .or_else(|| inner.as_i64().map(|i| i.to_string()))
                .ok_or_else(|| StoreError::decode("integerValue is not a string"))?;
            let parsed: i64 = raw
                .parse()
                .map_err(|_| StoreError::decode(format!("bad integerValue: {raw}")))?;
            Ok(json!(parsed))
        }
        "doubleValue" => Ok(inner.clone()),
        "arrayValue" => {
            let items = inner
                .get("values")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(decode).collect::<Result<Vec<_>, _>>())
                .transpose()?
                .unwrap_or_default();
            Ok(Value::Array(items))
        }
        "mapValue" => {
            let mut plain = Map::new();
            if let Some(Value::Object(fields)) = inner.get("fields") {
                for (key, field) in fields {
                    plain.insert(key.clone(), decode(field)?);
                }
            }
            Ok(Value::Object(plain))
        }
        other => Err(StoreError::decode(format!("unsupported field type: {other}"))),
    }
}
