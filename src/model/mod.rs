//! Value model for JSON comparison.
//!
//! Documents are plain `serde_json::Value` trees (with `preserve_order`, so
//! object members keep their document order). This module adds the runtime
//! type classification, exact equality and path helpers the engine relies on.

pub mod path;
mod value;

pub use path::{display_path, join_index, join_key};
pub use value::{
    count_fields, display_value, find_deeper_than, numbers_equal, values_equal, RuntimeType,
    ValueKind,
};
