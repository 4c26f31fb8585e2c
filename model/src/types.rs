//! Entity types for benchmark script output.

use std::collections::BTreeMap;
use std::fmt;

/// How a property's results are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultInterpretation {
    /// Lower values are better (e.g. latency).
    LessIsBetter,
    /// Higher values are better (e.g. throughput).
    MoreIsBetter,
    /// Neither direction is better.
    Neutral,
}

impl ResultInterpretation {
    /// All interpretations, in declaration order.
    pub const ALL: [Self; 3] = [Self::LessIsBetter, Self::MoreIsBetter, Self::Neutral];

    /// Returns the literal name written to JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LessIsBetter => "LESS_IS_BETTER",
            Self::MoreIsBetter => "MORE_IS_BETTER",
            Self::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for ResultInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single measured metric, or the reason it could not be measured.
///
/// A well-formed property is either an error property (only `error` set) or a
/// result property (`results`, `unit` and `result_interpretation` set, `error`
/// unset). Nothing here enforces that: fault injection relies on being able to
/// build properties that are neither.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Property {
    pub results: Option<Vec<f64>>,
    pub unit: Option<String>,
    pub result_interpretation: Option<ResultInterpretation>,
    pub error: Option<String>,
}

impl Property {
    /// Creates a result property.
    #[must_use]
    pub fn success(
        results: Vec<f64>,
        unit: impl Into<String>,
        interpretation: ResultInterpretation,
    ) -> Self {
        Self {
            results: Some(results),
            unit: Some(unit.into()),
            result_interpretation: Some(interpretation),
            error: None,
        }
    }

    /// Creates an error property.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Returns true if this property carries a non-empty error.
    pub fn is_error(&self) -> bool {
        self.error.as_deref().is_some_and(|error| !error.is_empty())
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let results = self.results.as_deref().unwrap_or_default();
        write!(
            f,
            "{results:?}, {}, {}, {}",
            self.unit.as_deref().unwrap_or("-"),
            self.result_interpretation
                .map_or("-", ResultInterpretation::as_str),
            self.error.as_deref().unwrap_or("-"),
        )
    }
}

/// A named group of properties.
///
/// Property names are unique; inserting an existing name replaces the old entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Benchmark {
    pub properties: BTreeMap<String, Property>,
}

impl Benchmark {
    /// Creates a benchmark from its properties.
    #[must_use]
    pub const fn new(properties: BTreeMap<String, Property>) -> Self {
        Self { properties }
    }

    /// Adds a property to the benchmark.
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, property: Property) -> Self {
        self.properties.insert(name.into(), property);
        self
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, (name, property)) in self.properties.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {property}")?;
        }
        f.write_str("]")
    }
}

/// The root document: a set of benchmarks or a top-level error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptOutput {
    pub benchmarks: Option<BTreeMap<String, Benchmark>>,
    pub error: Option<String>,
}

impl ScriptOutput {
    /// Creates a successful document.
    #[must_use]
    pub const fn success(benchmarks: BTreeMap<String, Benchmark>) -> Self {
        Self {
            benchmarks: Some(benchmarks),
            error: None,
        }
    }

    /// Creates a document reporting a top-level error.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            benchmarks: None,
            error: Some(error.into()),
        }
    }

    /// Adds a benchmark, replacing any benchmark with the same name.
    #[must_use]
    pub fn benchmark(mut self, name: impl Into<String>, benchmark: Benchmark) -> Self {
        self.benchmarks
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), benchmark);
        self
    }

    /// Returns true if this document carries a non-empty top-level error.
    pub fn is_error(&self) -> bool {
        self.error.as_deref().is_some_and(|error| !error.is_empty())
    }
}

impl fmt::Display for ScriptOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self
            .benchmarks
            .iter()
            .flat_map(BTreeMap::keys)
            .map(String::as_str)
            .collect();
        write!(
            f,
            "{}, {}",
            names.join(", "),
            self.error.as_deref().unwrap_or("-")
        )
    }
}
