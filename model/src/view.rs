//! Field-name views of the entity types.

use serde_json::{Map, Value};

use crate::{Benchmark, Property, ResultInterpretation, ScriptOutput};

/// An entity that can describe itself as a JSON object.
///
/// The view is raw: absent fields show up as `null`. Omission of empty fields
/// happens afterwards in [`crate::prune_empty`].
pub trait JsonView {
    /// Builds the field-name to value mapping for this entity.
    fn json_view(&self) -> Map<String, Value>;
}

impl JsonView for Property {
    fn json_view(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            "results".to_string(),
            self.results
                .as_ref()
                .map_or(Value::Null, |results| Value::from(results.clone())),
        );
        map.insert("unit".to_string(), optional_string(self.unit.as_deref()));
        map.insert(
            "resultInterpretation".to_string(),
            optional_string(self.result_interpretation.map(ResultInterpretation::as_str)),
        );
        map.insert("error".to_string(), optional_string(self.error.as_deref()));
        map
    }
}

impl JsonView for Benchmark {
    fn json_view(&self) -> Map<String, Value> {
        self.properties
            .iter()
            .map(|(name, property)| (name.clone(), Value::Object(property.json_view())))
            .collect()
    }
}

impl JsonView for ScriptOutput {
    fn json_view(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("error".to_string(), optional_string(self.error.as_deref()));
        // Benchmarks share the top level with `error`; a benchmark named "error" wins.
        for (name, benchmark) in self.benchmarks.iter().flatten() {
            map.insert(name.clone(), Value::Object(benchmark.json_view()));
        }
        map
    }
}

fn optional_string(value: Option<&str>) -> Value {
    value.map_or(Value::Null, Value::from)
}
