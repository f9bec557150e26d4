//! # Maps module
//!
//! Stateless helpers over string-keyed [`Mapping`]s of dynamically-typed [`Value`]s.
//!
//! ## Features
//!
//! - Iteration and collection (`for_each`, `to_array`, `get_length`)
//! - Shallow merges (`merge`, `merge_missing`)
//! - Recursive merge of nested maps with source-wins conflicts (`merge_deep`)
//! - Key-based filtering of child maps (`objects_with_key`)
//! - `Value`-level entry points that reject non-map arguments with [`MapsError`]
//! - JSON interop through `serde` / `serde_json`
//!
//! ## Deep merge semantics
//!
//! Only [`Value::Map`] is merged recursively. Every other kind, and any key the
//! destination does not have, is terminal: the source value replaces the
//! destination entry. See [`is_known_type`].
//!
//! ```
//! use map_utils::maps::{merge_deep_values, Value};
//! use serde_json::json;
//!
//! let src = Value::from(json!({"server": {"port": 8080}, "tags": ["a"]}));
//! let mut dest = Value::from(json!({"server": {"host": "localhost"}, "tags": ["b", "c"]}));
//! merge_deep_values(&src, &mut dest)?;
//!
//! assert_eq!(
//!     dest,
//!     Value::from(json!({"server": {"host": "localhost", "port": 8080}, "tags": ["a"]}))
//! );
//! # Ok::<_, map_utils::maps::MapsError>(())
//! ```

mod api;
pub mod assertions;
pub mod error;
pub mod value;

pub use api::{
    for_each, get_length, merge, merge_deep, merge_deep_values, merge_missing,
    merge_missing_values, merge_values, objects_with_key, to_array, value_length,
};
pub use assertions::{is_known_type, is_mapping};
pub use error::{MapsError, MapsErrorCode, MapsResult};
pub use value::{
    from_value, json_eval, mapping_from_json, stringify, to_value, Mapping, Value, ValueType,
};
