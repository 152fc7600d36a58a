//! Parallel generation of independent component requests.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;
use uigen_core::validate_attribute_bag;
use uigen_kit::{Generator, Registry};

/// One request of a batch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchInput {
    /// Caller-chosen identifier echoed in the result.
    pub id: String,
    /// Registered component name.
    pub component: String,
    /// Raw attribute bag.
    pub props: Option<JsonValue>,
    /// Inner content.
    pub children: Option<String>,
    /// Extra classes.
    pub class_name: Option<String>,
}

/// Result for a single request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    /// Identifier matching the input.
    pub id: String,
    /// Generated markup (present on success).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Error message (present on failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Counters for a batch run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStats {
    /// Number of requests submitted.
    pub total: u32,
    /// Requests that produced markup.
    pub succeeded: u32,
    /// Requests that failed.
    pub failed: u32,
    /// Wall-clock time in milliseconds.
    pub processing_time_ms: f64,
}

/// Options for batch processing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOptions {
    /// Maximum worker threads. Defaults to the number of CPU cores.
    pub max_threads: Option<u32>,
    /// Keep going after a failure. Defaults to true.
    pub continue_on_error: Option<bool>,
}

/// Arguments of the `generate_batch` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchArgs {
    /// Requests in result order.
    pub items: Vec<BatchInput>,
    /// Processing options.
    pub options: Option<BatchOptions>,
}

/// Results in input order plus statistics.
#[derive(Debug, Clone, Serialize)]
pub struct BatchProcessingResult {
    /// Per-request results.
    pub results: Vec<BatchResult>,
    /// Processing statistics.
    pub stats: BatchStats,
}

/// Generates every input against a shared, read-only registry.
///
/// With `continue_on_error` (the default) all inputs run in parallel and
/// results keep input order. Otherwise inputs run in order and processing
/// stops after the first failure, so `results` may be shorter than `inputs`.
pub fn generate_batch(
    registry: &Registry,
    inputs: Vec<BatchInput>,
    options: Option<BatchOptions>,
) -> BatchProcessingResult {
    let start = Instant::now();
    let opts = options.unwrap_or_default();
    let continue_on_error = opts.continue_on_error.unwrap_or(true);
    let generator = Generator::new(registry);

    let pool = opts.max_threads.and_then(|max_threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads as usize)
            .build()
            .map_err(|err| log::warn!("Falling back to the global thread pool: {err}"))
            .ok()
    });

    let total = inputs.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);

    let process_input = |input: BatchInput| -> BatchResult {
        let outcome = validate_attribute_bag(input.props.as_ref()).and_then(|attrs| {
            generator.generate(
                &input.component,
                Some(&attrs),
                input.children.as_deref(),
                input.class_name.as_deref(),
            )
        });
        match outcome {
            Ok(code) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    code: Some(code),
                    error: None,
                }
            }
            Err(e) => {
                failed.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    code: None,
                    error: Some(e.to_string()),
                }
            }
        }
    };

    let results: Vec<BatchResult> = if continue_on_error {
        let run = || inputs.into_par_iter().map(process_input).collect::<Vec<_>>();
        match pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    } else {
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            let result = process_input(input);
            let stop = result.error.is_some();
            results.push(result);
            if stop {
                break;
            }
        }
        results
    };

    let elapsed = start.elapsed();
    log::debug!("Batch of {} requests finished in {:?}", total, elapsed);

    BatchProcessingResult {
        results,
        stats: BatchStats {
            total,
            succeeded: succeeded.load(Ordering::Relaxed),
            failed: failed.load(Ordering::Relaxed),
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(id: &str, component: &str) -> BatchInput {
        BatchInput {
            id: id.to_string(),
            component: component.to_string(),
            props: None,
            children: None,
            class_name: None,
        }
    }

    #[test]
    fn results_keep_input_order() {
        let registry = Registry::with_defaults();
        let inputs: Vec<BatchInput> = ["Button", "Badge", "Chip", "Card", "Alert", "Table"]
            .iter()
            .enumerate()
            .map(|(i, name)| input(&i.to_string(), name))
            .collect();
        let out = generate_batch(&registry, inputs, None);

        let ids: Vec<&str> = out.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4", "5"]);
        assert_eq!(out.results[3].code.as_deref(), Some("<Card />"));
        assert_eq!(out.stats.total, 6);
        assert_eq!(out.stats.succeeded, 6);
        assert_eq!(out.stats.failed, 0);
    }

    #[test]
    fn failures_are_reported_per_item() {
        let registry = Registry::with_defaults();
        let mut bad_props = input("b", "Button");
        bad_props.props = Some(json!([1, 2]));
        let inputs = vec![input("a", "Missing"), bad_props, input("c", "Badge")];
        let out = generate_batch(
            &registry,
            inputs,
            Some(BatchOptions {
                max_threads: Some(2),
                continue_on_error: None,
            }),
        );

        assert_eq!(
            out.results[0].error.as_deref(),
            Some("Component \"Missing\" not found in registry")
        );
        assert_eq!(out.results[1].error.as_deref(), Some("Props must be an object"));
        assert_eq!(out.results[2].code.as_deref(), Some("<Badge />"));
        assert_eq!(out.stats.succeeded, 1);
        assert_eq!(out.stats.failed, 2);
    }

    #[test]
    fn stop_on_first_error() {
        let registry = Registry::with_defaults();
        let inputs = vec![input("a", "Button"), input("b", "Nope"), input("c", "Badge")];
        let out = generate_batch(
            &registry,
            inputs,
            Some(BatchOptions {
                max_threads: None,
                continue_on_error: Some(false),
            }),
        );

        assert_eq!(out.results.len(), 2);
        assert_eq!(out.stats.total, 3);
        assert_eq!(out.stats.succeeded, 1);
        assert_eq!(out.stats.failed, 1);
    }

    #[test]
    fn batch_args_deserialize() {
        let args: BatchArgs = serde_json::from_value(json!({
            "items": [{"id": "x", "component": "Chip", "className": "m-2"}],
            "options": {"maxThreads": 1, "continueOnError": false}
        }))
        .unwrap();
        assert_eq!(args.items[0].class_name.as_deref(), Some("m-2"));
        let options = args.options.unwrap();
        assert_eq!(options.max_threads, Some(1));
        assert_eq!(options.continue_on_error, Some(false));
    }
}
