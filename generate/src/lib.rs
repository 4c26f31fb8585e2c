//! Random benchmark script output for pseubench.
//!
//! This crate builds syntactically plausible [`model::ScriptOutput`] documents:
//!
//! - [`Dictionary`] word lists for names, units and error messages
//! - One [`Generator`] per entity type, composed top-down
//! - [`GenerationLimits`] bounding how large a document gets
//!
//! # Design Principles
//!
//! - **Caller-owned randomness** - Generators take any [`rand::Rng`]; seeding is the caller's choice.
//! - **Independent coin flips** - Error and success branches are chosen separately at each level.
//! - **No deduplication** - Colliding names collapse the way a JSON object would.
//!
//! # Example
//!
//! ```
//! use generate::{generate_script_output, Dictionary, GenerationLimits};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let output = generate_script_output(Dictionary::embedded(), GenerationLimits::default(), &mut rng);
//! assert!(output.is_error() != output.benchmarks.is_some());
//! ```

mod dictionary;
mod error;
mod generator;
mod limits;

pub use dictionary::Dictionary;
pub use error::{DictionaryError, DictionaryResult};
pub use generator::{
    generate_script_output, BenchmarkGenerator, Generator, InterpretationGenerator,
    PropertyGenerator, ScriptOutputGenerator, StringGenerator, DEFAULT_WORDS,
    ERROR_PROBABILITY, ERROR_WORDS, NAME_WORDS, RESULT_SCALE_MAX,
};
pub use limits::GenerationLimits;
