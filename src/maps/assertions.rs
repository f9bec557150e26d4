use crate::maps::value::Value;

/// Returns `true` when `value` is terminal for a deep merge.
///
/// Absent values (`None`) and every kind other than [`Value::Map`] are
/// terminal. Only a present map is eligible for recursive merging.
pub fn is_known_type(value: Option<&Value>) -> bool {
    !matches!(value, Some(Value::Map(_)))
}

/// Counterpart of [`is_known_type`] for a present value.
pub fn is_mapping(value: &Value) -> bool {
    !is_known_type(Some(value))
}
