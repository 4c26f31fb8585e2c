//! Fault injection catalog for pseubench.
//!
//! Each [`Fault`] imitates one way a benchmark script can break its output
//! contract: malformed JSON, documents that are neither results nor errors, an
//! empty object, a random non-zero exit, or being killed by the OS.
//!
//! A fault is first planned ([`Fault::plan`]) and then executed once
//! ([`FaultPlan::execute`]). Mechanisms never report errors of their own and
//! nothing is retried.
//!
//! # Example
//!
//! ```
//! use faults::{Fault, Termination};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let plan = Fault::NoBenchmarkAndNoError.plan(&mut StdRng::seed_from_u64(0));
//! assert_eq!(plan.stdout.as_deref(), Some("{}"));
//! assert_eq!(plan.termination, Termination::Exit(0));
//! ```

mod catalog;
mod execute;

pub use catalog::{
    missing_required_field, no_results_and_no_error, Fault, FaultPlan, Termination,
    EMPTY_OBJECT, INVALID_JSON, MAX_EXIT_CODE, MIN_EXIT_CODE, TEST_BENCHMARK, TEST_PROPERTY,
};
pub use execute::{terminate_abruptly, INVALID_ADDRESS};
