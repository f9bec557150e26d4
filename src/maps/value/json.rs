use base64::engine::general_purpose::STANDARD;
use base64::engine::Engine as _;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::maps::error::MapsResult;
use crate::maps::value::{Mapping, Value};

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(flag) => Value::Boolean(flag),
            JsonValue::Number(number) => match number.as_i64() {
                Some(integer) => Value::Integer(integer),
                // u64 beyond i64::MAX and every fractional number.
                None => Value::Double(number.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(text) => Value::String(text),
            JsonValue::Array(values) => Value::Array(values.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Boolean(flag) => JsonValue::Bool(flag),
            Value::Integer(integer) => JsonValue::Number(Number::from(integer)),
            Value::Double(double) => match Number::from_f64(double) {
                Some(number) => JsonValue::Number(number),
                None => {
                    log::debug!("non-finite double {double} rendered as JSON null");
                    JsonValue::Null
                }
            },
            Value::String(text) => JsonValue::String(text),
            Value::Timestamp(timestamp) => JsonValue::String(format_timestamp(&timestamp)),
            Value::Bytes(bytes) => JsonValue::String(STANDARD.encode(bytes)),
            Value::Array(values) => {
                JsonValue::Array(values.into_iter().map(JsonValue::from).collect())
            }
            Value::Map(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, JsonValue::from(value)))
                    .collect::<JsonMap<String, JsonValue>>(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(flag) => serializer.serialize_bool(*flag),
            Value::Integer(integer) => serializer.serialize_i64(*integer),
            Value::Double(double) if double.is_finite() => serializer.serialize_f64(*double),
            Value::Double(_) => serializer.serialize_unit(),
            Value::String(text) => serializer.serialize_str(text),
            Value::Timestamp(timestamp) => serializer.serialize_str(&format_timestamp(timestamp)),
            Value::Bytes(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            Value::Array(values) => serializer.collect_seq(values),
            Value::Map(map) => serializer.collect_map(map),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonValue::deserialize(deserializer).map(Value::from)
    }
}

/// Parses JSON text into a [`Value`].
pub fn json_eval(input: &str) -> MapsResult<Value> {
    let parsed: JsonValue = serde_json::from_str(input)?;
    Ok(Value::from(parsed))
}

/// Renders a [`Value`] as compact JSON text.
pub fn stringify(value: &Value) -> MapsResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Decodes a typed structure out of a [`Value`].
///
/// ```
/// use map_utils::maps::{from_value, json_eval};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Server {
///     port: u16,
/// }
///
/// let value = json_eval(r#"{"port": 8080}"#)?;
/// let server: Server = from_value(value)?;
/// assert_eq!(server.port, 8080);
/// # Ok::<_, map_utils::maps::MapsError>(())
/// ```
pub fn from_value<T: DeserializeOwned>(value: Value) -> MapsResult<T> {
    Ok(serde_json::from_value(JsonValue::from(value))?)
}

/// Encodes a serialisable structure as a [`Value`].
pub fn to_value<T: ?Sized + Serialize>(value: &T) -> MapsResult<Value> {
    Ok(Value::from(serde_json::to_value(value)?))
}

/// Builds a [`Mapping`] from a JSON object, or `None` for any other JSON kind.
pub fn mapping_from_json(value: JsonValue) -> Option<Mapping> {
    match Value::from(value) {
        Value::Map(map) => Some(map),
        _ => None,
    }
}
