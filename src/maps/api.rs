use crate::maps::assertions::is_known_type;
use crate::maps::error::{invalid_argument, MapsResult};
use crate::maps::value::{Mapping, Value, ValueType};

/// Calls `callback(value, key, map)` once for every entry of `map`.
pub fn for_each<F>(map: &Mapping, mut callback: F)
where
    F: FnMut(&Value, &str, &Mapping),
{
    for (key, value) in map {
        callback(value, key, map);
    }
}

/// Collects the values of `map` in iteration order.
pub fn to_array(map: &Mapping) -> Vec<Value> {
    map.values().cloned().collect()
}

/// Copies every entry of `src` into `dest`, replacing existing entries.
///
/// Only the top level is combined: a nested map in `src` replaces the
/// destination entry wholesale.
pub fn merge<'a>(src: &Mapping, dest: &'a mut Mapping) -> &'a mut Mapping {
    for (key, value) in src {
        dest.insert(key.clone(), value.clone());
    }
    dest
}

/// Copies the entries of `src` whose keys `dest` does not have yet.
pub fn merge_missing(src: &Mapping, dest: &mut Mapping) {
    for (key, value) in src {
        if !dest.contains_key(key) {
            dest.insert(key.clone(), value.clone());
        }
    }
}

/// Merges `src` into `dest` recursively.
///
/// When both sides hold a map under the same key the two maps are merged key
/// by key. In every other case, including a key missing from `dest`, the
/// source value replaces the destination entry. Keys only present in `dest`
/// are kept.
///
/// ```
/// use map_utils::maps::{mapping_from_json, merge_deep};
/// use serde_json::json;
///
/// let src = mapping_from_json(json!({"a": {"aa": "aa"}})).unwrap();
/// let mut dest = mapping_from_json(json!({"a": {"bb": "bb"}})).unwrap();
/// merge_deep(&src, &mut dest);
///
/// let expected = mapping_from_json(json!({"a": {"aa": "aa", "bb": "bb"}})).unwrap();
/// assert_eq!(dest, expected);
/// ```
pub fn merge_deep<'a>(src: &Mapping, dest: &'a mut Mapping) -> &'a mut Mapping {
    for (key, source_value) in src {
        if is_known_type(dest.get(key)) || is_known_type(Some(source_value)) {
            log::trace!("merge_deep: overwriting `{key}`");
            dest.insert(key.clone(), source_value.clone());
            continue;
        }
        if let (Some(Value::Map(dest_child)), Value::Map(source_child)) =
            (dest.get_mut(key), source_value)
        {
            log::trace!("merge_deep: descending into `{key}`");
            merge_deep(source_child, dest_child);
        }
    }
    dest
}

/// Returns the values of `map` that are maps holding a truthy `key` entry.
///
/// With `value_type` set, the entry must also be of that type.
pub fn objects_with_key(map: &Mapping, key: &str, value_type: Option<ValueType>) -> Vec<Value> {
    map.values()
        .filter(|child| match child.get(key) {
            Some(entry) => {
                entry.is_truthy() && value_type.map_or(true, |ty| entry.value_type() == ty)
            }
            None => false,
        })
        .cloned()
        .collect()
}

/// Number of entries in `map`; `None` counts as empty.
pub fn get_length(map: Option<&Mapping>) -> usize {
    map.map_or(0, Mapping::len)
}

fn expect_map<'a>(name: &str, value: &'a Value) -> MapsResult<&'a Mapping> {
    value.as_map().ok_or_else(|| {
        log::debug!("rejected `{name}` of type {}", value.value_type());
        invalid_argument(format!(
            "`{name}` must be a map, got {}",
            value.value_type()
        ))
    })
}

fn expect_map_mut<'a>(name: &str, value: &'a mut Value) -> MapsResult<&'a mut Mapping> {
    let value_type = value.value_type();
    value.as_map_mut().ok_or_else(|| {
        log::debug!("rejected `{name}` of type {value_type}");
        invalid_argument(format!("`{name}` must be a map, got {value_type}"))
    })
}

/// [`merge`] for dynamically-typed arguments; both must be maps.
pub fn merge_values(src: &Value, dest: &mut Value) -> MapsResult<()> {
    let src = expect_map("src", src)?;
    merge(src, expect_map_mut("dest", dest)?);
    Ok(())
}

/// [`merge_missing`] for dynamically-typed arguments; both must be maps.
pub fn merge_missing_values(src: &Value, dest: &mut Value) -> MapsResult<()> {
    let src = expect_map("src", src)?;
    merge_missing(src, expect_map_mut("dest", dest)?);
    Ok(())
}

/// [`merge_deep`] for dynamically-typed arguments; both must be maps.
///
/// On error `dest` is left untouched.
pub fn merge_deep_values(src: &Value, dest: &mut Value) -> MapsResult<()> {
    let src = expect_map("src", src)?;
    merge_deep(src, expect_map_mut("dest", dest)?);
    Ok(())
}

/// Number of entries of a map value. Absent values, `null` and non-map
/// kinds count as empty.
pub fn value_length(value: Option<&Value>) -> usize {
    get_length(value.and_then(Value::as_map))
}
