//! Serialization helpers and a rectangle data holder.
//!
//! Deserialization happens in two steps: the text is parsed into a plain
//! [`serde_json::Value`] record, and that record is then bound to whichever
//! concrete type the caller asks for. The type supplies the behavior; the
//! text only supplies the fields.
//!
//! ```
//! use kata_codec::{Rectangle, deserialize, serialize};
//!
//! let text = serialize(&Rectangle::new(3.0, 4.0))?;
//! assert_eq!(text, r#"{"width":3.0,"height":4.0}"#);
//!
//! let rect: Rectangle = deserialize(&text)?;
//! assert!((rect.area() - 12.0).abs() < f32::EPSILON);
//! # Ok::<(), kata_codec::CodecError>(())
//! ```

/// Serialize, parse and bind functions.
pub mod codec;
/// Error types for encoding and decoding.
pub mod error;
/// Rectangle data holder.
pub mod rectangle;

pub use codec::{bind, deserialize, parse, serialize};
pub use error::CodecError;
pub use rectangle::Rectangle;
