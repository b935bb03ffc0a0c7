//! Error system for the nirviz parser.
//!
//! Every failure is a single [`ParseError`] carrying an [`ErrorCode`] for
//! documentation and searchability, an optional position in the artifact,
//! and optional help text.
//!
//! # Example
//!
//! ```
//! # use nirviz_parser::error::{ErrorCode, Location, ParseError};
//!
//! let err = ParseError::new(ErrorCode::E200, "unknown node type `Conv3d`")
//!     .with_location(Location::new(12, 5))
//!     .with_help("supported types include Linear, Affine, LIF and Output");
//! assert_eq!(err.code(), ErrorCode::E200);
//! ```

mod error_code;
mod parse_error;

pub(crate) use parse_error::Result;

pub use error_code::ErrorCode;
pub use parse_error::{Location, ParseError};
