mod json;
mod value;

pub use json::{from_value, json_eval, mapping_from_json, stringify, to_value};
pub use value::{Mapping, Value, ValueType};
