//! Size bounds for generated documents.

/// Upper bounds on how much a generated document contains.
///
/// Every bound is inclusive and at least 1 is always drawn, so a success
/// branch never produces an empty mapping or result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationLimits {
    /// Maximum number of benchmarks in a success document.
    pub max_benchmarks: usize,

    /// Maximum number of properties in a benchmark.
    pub max_properties: usize,

    /// Maximum number of results in a result property.
    pub max_results: usize,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self::uniform(2)
    }
}

impl GenerationLimits {
    /// Uses the same bound for benchmarks, properties and results.
    #[must_use]
    pub const fn uniform(max: usize) -> Self {
        Self {
            max_benchmarks: max,
            max_properties: max,
            max_results: max,
        }
    }

    /// Creates limits producing small documents for tests.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_benchmarks: 3,
            max_properties: 3,
            max_results: 4,
        }
    }

    /// Returns a copy with every bound raised to at least 1.
    #[must_use]
    pub const fn clamped(self) -> Self {
        Self {
            max_benchmarks: at_least_one(self.max_benchmarks),
            max_properties: at_least_one(self.max_properties),
            max_results: at_least_one(self.max_results),
        }
    }
}

const fn at_least_one(value: usize) -> usize {
    if value == 0 {
        1
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_are_two() {
        let limits = GenerationLimits::default();
        assert_eq!(limits.max_benchmarks, 2);
        assert_eq!(limits.max_properties, 2);
        assert_eq!(limits.max_results, 2);
    }

    #[test]
    fn uniform_limits() {
        assert_eq!(
            GenerationLimits::uniform(7),
            GenerationLimits {
                max_benchmarks: 7,
                max_properties: 7,
                max_results: 7,
            }
        );
    }

    #[test]
    fn clamped_raises_zero() {
        let limits = GenerationLimits {
            max_benchmarks: 0,
            max_properties: 5,
            max_results: 0,
        }
        .clamped();
        assert_eq!(limits.max_benchmarks, 1);
        assert_eq!(limits.max_properties, 5);
        assert_eq!(limits.max_results, 1);
    }

    #[test]
    fn limits_const_constructible() {
        const LIMITS: GenerationLimits = GenerationLimits::for_testing();
        assert_eq!(LIMITS.max_results, 4);
    }
}
