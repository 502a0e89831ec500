//! PLC4X value types for Rust
//!
//! The closed catalog of value types exchanged with PLCs, a process-wide
//! registry resolving them from their wire codes, and helpers to read and
//! write the type tag inside a frame.

mod error;
pub mod tag;
pub mod types;

pub use error::Error;
pub use tag::{decode_tag, parse_value_type, put_tag, TagConfig, TagWidth};
pub use types::{NativeKind, PlcValueType, ValueTypeRegistry};
