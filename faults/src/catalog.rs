//! The fault mechanisms and what each one does.

use std::fmt;

use model::{to_json_string, Benchmark, Property, ResultInterpretation, ScriptOutput};
use rand::Rng;

/// Text written by [`Fault::InvalidSyntax`]: a key with no value.
pub const INVALID_JSON: &str = r#"{ "TestBenchmark": }"#;

/// Text written by [`Fault::NoBenchmarkAndNoError`].
pub const EMPTY_OBJECT: &str = "{}";

/// Benchmark name used by the single-property documents.
pub const TEST_BENCHMARK: &str = "TestBenchmark";

/// Property name used by the single-property documents.
pub const TEST_PROPERTY: &str = "TestProperty";

/// Smallest exit code [`Fault::RandomNonZeroExit`] uses.
pub const MIN_EXIT_CODE: u8 = 1;

/// Largest exit code [`Fault::RandomNonZeroExit`] uses.
pub const MAX_EXIT_CODE: u8 = 254;

/// One way of breaking the benchmark script contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Fault {
    /// Writes to an invalid address so the OS kills the process.
    AbruptTermination,
    /// Writes text that is not JSON.
    InvalidSyntax,
    /// Writes a property with no interpretation and no results.
    MissingRequiredField,
    /// Writes an empty object.
    NoBenchmarkAndNoError,
    /// Writes a property with an interpretation but neither results nor error.
    NoResultsAndNoError,
    /// Exits with a random non-zero code and writes nothing.
    RandomNonZeroExit,
}

/// How the process ends after a fault's payload is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Normal exit with this code.
    Exit(u8),
    /// Killed by the operating system.
    Crash,
}

/// The planned effect of one fault: what goes to stdout and how the process ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultPlan {
    pub fault: Fault,
    pub stdout: Option<String>,
    pub termination: Termination,
}

impl Fault {
    /// Every mechanism in the catalog.
    pub const ALL: [Self; 6] = [
        Self::AbruptTermination,
        Self::InvalidSyntax,
        Self::MissingRequiredField,
        Self::NoBenchmarkAndNoError,
        Self::NoResultsAndNoError,
        Self::RandomNonZeroExit,
    ];

    /// Picks one mechanism uniformly.
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Stable kebab-case name, matching the command-line spelling.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AbruptTermination => "abrupt-termination",
            Self::InvalidSyntax => "invalid-syntax",
            Self::MissingRequiredField => "missing-required-field",
            Self::NoBenchmarkAndNoError => "no-benchmark-and-no-error",
            Self::NoResultsAndNoError => "no-results-and-no-error",
            Self::RandomNonZeroExit => "random-non-zero-exit",
        }
    }

    /// Decides what this mechanism writes and how it ends the process.
    pub fn plan<R: Rng + ?Sized>(self, rng: &mut R) -> FaultPlan {
        let (stdout, termination) = match self {
            Self::AbruptTermination => (None, Termination::Crash),
            Self::InvalidSyntax => (Some(INVALID_JSON.to_string()), Termination::Exit(0)),
            Self::MissingRequiredField => (
                Some(to_json_string(&missing_required_field())),
                Termination::Exit(0),
            ),
            Self::NoBenchmarkAndNoError => (Some(EMPTY_OBJECT.to_string()), Termination::Exit(0)),
            Self::NoResultsAndNoError => (
                Some(to_json_string(&no_results_and_no_error())),
                Termination::Exit(0),
            ),
            Self::RandomNonZeroExit => (
                None,
                Termination::Exit(rng.gen_range(MIN_EXIT_CODE..=MAX_EXIT_CODE)),
            ),
        };
        FaultPlan {
            fault: self,
            stdout,
            termination,
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A property with a unit and an error but no interpretation and no results.
///
/// The property sits under a `TestBenchmark`/`TestProperty` wrapper so the
/// document is well-typed at the benchmark level and only the property
/// breaks the contract. Older generators wrote a `"benchmarks"` array here
/// instead; that shape is not reproduced.
pub fn missing_required_field() -> ScriptOutput {
    let property = Property {
        results: None,
        unit: Some("cats".to_string()),
        result_interpretation: None,
        error: Some("Hey".to_string()),
    };
    single_property(property)
}

/// A result property whose results were removed after construction.
///
/// Wrapped the same way as [`missing_required_field`], not in a
/// `"benchmarks"` array.
pub fn no_results_and_no_error() -> ScriptOutput {
    let mut property = Property::success(Vec::new(), "cats", ResultInterpretation::LessIsBetter);
    property.results = None;
    single_property(property)
}

fn single_property(property: Property) -> ScriptOutput {
    ScriptOutput::default().benchmark(
        TEST_BENCHMARK,
        Benchmark::default().property(TEST_PROPERTY, property),
    )
}
