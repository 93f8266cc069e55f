use flow::prelude::*;

use log::info;

use super::Result;

pub(crate) fn generate(config: GenerateConfig) -> Result<()> {
    info!(
        "Generating {} networks with {} nodes and {} edges",
        config.graph_count, config.network.node_count, config.network.edge_count
    );

    for path in generate_networks(&config)? {
        println!("Generated {}", path.display());
    }

    Ok(())
}
