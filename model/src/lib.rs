//! Benchmark script output model for pseubench.
//!
//! This crate defines the documents a benchmark script writes to stdout and the
//! canonical way they are turned into JSON:
//!
//! - [`Property`], [`Benchmark`] and [`ScriptOutput`], the three-level entity tree
//! - [`JsonView`], the field-name to value view every entity exposes
//! - [`to_json_string`], which applies the null-omission rule and renders compact JSON
//!
//! # Design Principles
//!
//! - **Shapes are not enforced** - Fields stay public so faults can build broken documents.
//! - **Absent equals empty** - Empty, null and falsy fields are omitted at every level.
//! - **Total serialization** - Rendering a document never fails.
//!
//! # Example
//!
//! ```
//! use model::{to_json_string, Property, ResultInterpretation};
//!
//! let property = Property::success(vec![1.5], "ms", ResultInterpretation::LessIsBetter);
//! assert_eq!(
//!     to_json_string(&property),
//!     r#"{"resultInterpretation":"LESS_IS_BETTER","results":[1.5],"unit":"ms"}"#
//! );
//! ```

mod serialize;
mod types;
mod view;

pub use serialize::{prune_empty, to_json_string, to_value};
pub use types::{Benchmark, Property, ResultInterpretation, ScriptOutput};
pub use view::JsonView;
