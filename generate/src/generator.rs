//! Per-entity random generators.
//!
//! Each generator is a small stateless value holding its size bound. The
//! random source is passed to [`Generator::create`] so callers decide how it
//! is seeded. Composite generators build their children with fresh child
//! generators, one per entry.
//!
//! The error/success choice is an independent coin flip at every level: a
//! success document can hold benchmarks whose properties are all errors.
//! Names are single dictionary words and can repeat; a repeated name replaces
//! the earlier entry in its mapping.

use std::collections::BTreeMap;

use model::{Benchmark, Property, ResultInterpretation, ScriptOutput};
use rand::Rng;

use crate::{Dictionary, GenerationLimits};

/// Words in a general-purpose phrase.
pub const DEFAULT_WORDS: usize = 3;

/// Words in a unit or an entity name.
pub const NAME_WORDS: usize = 1;

/// Words in an error message.
pub const ERROR_WORDS: usize = 20;

/// Probability that a property or document takes its error branch.
pub const ERROR_PROBABILITY: f64 = 0.5;

/// Results are a unit float scaled by an integer drawn from `0..=RESULT_SCALE_MAX`.
pub const RESULT_SCALE_MAX: u64 = 1 << 32;

/// Creates random instances of `T`.
pub trait Generator<T> {
    /// Creates one instance.
    fn create<R: Rng + ?Sized>(&self, rng: &mut R) -> T;
}

/// Builds phrases of dictionary words joined by single spaces.
#[derive(Debug, Clone, Copy)]
pub struct StringGenerator<'a> {
    dictionary: &'a Dictionary,
    words: usize,
}

impl<'a> StringGenerator<'a> {
    /// Creates a generator for phrases of `words` words.
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, words: usize) -> Self {
        Self { dictionary, words }
    }

    /// Three-word phrases.
    #[must_use]
    pub const fn phrase(dictionary: &'a Dictionary) -> Self {
        Self::new(dictionary, DEFAULT_WORDS)
    }

    /// Single words, used for names and units.
    #[must_use]
    pub const fn name(dictionary: &'a Dictionary) -> Self {
        Self::new(dictionary, NAME_WORDS)
    }

    /// Twenty-word error messages.
    #[must_use]
    pub const fn error_message(dictionary: &'a Dictionary) -> Self {
        Self::new(dictionary, ERROR_WORDS)
    }
}

impl Generator<String> for StringGenerator<'_> {
    fn create<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let words: Vec<&str> = (0..self.words)
            .map(|_| self.dictionary.choose(rng))
            .collect();
        words.join(" ")
    }
}

/// Picks one of the three interpretations uniformly.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterpretationGenerator;

impl Generator<ResultInterpretation> for InterpretationGenerator {
    fn create<R: Rng + ?Sized>(&self, rng: &mut R) -> ResultInterpretation {
        ResultInterpretation::ALL[rng.gen_range(0..ResultInterpretation::ALL.len())]
    }
}

/// Builds error properties and result properties with equal probability.
#[derive(Debug, Clone, Copy)]
pub struct PropertyGenerator<'a> {
    dictionary: &'a Dictionary,
    max_results: usize,
}

impl<'a> PropertyGenerator<'a> {
    /// Creates a generator producing at most `max_results` results.
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, max_results: usize) -> Self {
        Self {
            dictionary,
            max_results,
        }
    }
}

impl Generator<Property> for PropertyGenerator<'_> {
    fn create<R: Rng + ?Sized>(&self, rng: &mut R) -> Property {
        if rng.gen_bool(ERROR_PROBABILITY) {
            return Property::failure(StringGenerator::error_message(self.dictionary).create(rng));
        }

        let count = rng.gen_range(1..=self.max_results.max(1));
        let results = (0..count)
            .map(|_| rng.gen::<f64>() * rng.gen_range(0..=RESULT_SCALE_MAX) as f64)
            .collect();
        let unit = StringGenerator::name(self.dictionary).create(rng);
        let interpretation = InterpretationGenerator.create(rng);
        Property::success(results, unit, interpretation)
    }
}

/// Builds benchmarks with one to `max_properties` named properties.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkGenerator<'a> {
    dictionary: &'a Dictionary,
    max_properties: usize,
    max_results: usize,
}

impl<'a> BenchmarkGenerator<'a> {
    /// Creates a generator whose properties also hold at most `max_properties` results.
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, max_properties: usize) -> Self {
        Self {
            dictionary,
            max_properties,
            max_results: max_properties,
        }
    }

    /// Overrides the result bound of nested properties.
    #[must_use]
    pub const fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

impl Generator<Benchmark> for BenchmarkGenerator<'_> {
    fn create<R: Rng + ?Sized>(&self, rng: &mut R) -> Benchmark {
        let names = StringGenerator::name(self.dictionary);
        let properties = PropertyGenerator::new(self.dictionary, self.max_results);
        let count = rng.gen_range(1..=self.max_properties.max(1));
        let mut benchmark = Benchmark::default();
        for _ in 0..count {
            let name = names.create(rng);
            benchmark = benchmark.property(name, properties.create(rng));
        }
        benchmark
    }
}

/// Builds error documents and success documents with equal probability.
#[derive(Debug, Clone, Copy)]
pub struct ScriptOutputGenerator<'a> {
    dictionary: &'a Dictionary,
    limits: GenerationLimits,
}

impl<'a> ScriptOutputGenerator<'a> {
    /// Creates a generator using `max_benchmarks` as the bound at every level.
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, max_benchmarks: usize) -> Self {
        Self::from_limits(dictionary, GenerationLimits::uniform(max_benchmarks))
    }

    /// Creates a generator with separate bounds per level.
    #[must_use]
    pub const fn from_limits(dictionary: &'a Dictionary, limits: GenerationLimits) -> Self {
        Self {
            dictionary,
            limits: limits.clamped(),
        }
    }
}

impl Generator<ScriptOutput> for ScriptOutputGenerator<'_> {
    fn create<R: Rng + ?Sized>(&self, rng: &mut R) -> ScriptOutput {
        if rng.gen_bool(ERROR_PROBABILITY) {
            return ScriptOutput::failure(
                StringGenerator::error_message(self.dictionary).create(rng),
            );
        }

        let names = StringGenerator::name(self.dictionary);
        let benchmarks = BenchmarkGenerator::new(self.dictionary, self.limits.max_properties)
            .max_results(self.limits.max_results);
        let count = rng.gen_range(1..=self.limits.max_benchmarks);
        let mut entries = BTreeMap::new();
        for _ in 0..count {
            let name = names.create(rng);
            entries.insert(name, benchmarks.create(rng));
        }
        ScriptOutput::success(entries)
    }
}

/// Generates one random document within `limits`.
pub fn generate_script_output<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    limits: GenerationLimits,
    rng: &mut R,
) -> ScriptOutput {
    let output = ScriptOutputGenerator::from_limits(dictionary, limits).create(rng);
    tracing::debug!(
        error = output.is_error(),
        benchmarks = output.benchmarks.as_ref().map_or(0, BTreeMap::len),
        "generated script output"
    );
    output
}
