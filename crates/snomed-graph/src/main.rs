//! Converts an unpacked RF2 release into a persisted graph file.
//!
//! Environment:
//! - `SNOMED_DATA_PATH`: release directory (required)
//! - `SNOMED_LANG`: secondary language code, empty for English only (default `fr`)
//! - `SNOMED_GRAPH_OUT`: output file (default `snomed_graph.json`)

use snomed_graph::{GraphConfig, SnomedGraph};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LANGUAGE: &str = "fr";
const DEFAULT_OUTPUT: &str = "snomed_graph.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let data_path = std::env::var("SNOMED_DATA_PATH")
        .map_err(|_| "SNOMED_DATA_PATH must point to an unpacked RF2 release")?;
    let language =
        std::env::var("SNOMED_LANG").unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string());
    let output =
        std::env::var("SNOMED_GRAPH_OUT").unwrap_or_else(|_| DEFAULT_OUTPUT.to_string());

    let config = GraphConfig::with_secondary_language(&language);
    tracing::info!(
        "Building graph from {} (secondary language: {})",
        data_path,
        config.secondary_language.as_deref().unwrap_or("none")
    );

    let graph = SnomedGraph::from_rf2(&data_path, config)?;
    tracing::info!("Graph has {}", graph);

    graph.save(&output)?;
    tracing::info!("Graph written to {}", output);

    Ok(())
}
