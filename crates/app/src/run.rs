use std::{fs::File, io::BufReader, path::Path};

use flow::prelude::*;

use log::info;

use super::Result;

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
enum Task {
    Generate(GenerateConfig),
    Verify(VerifyConfig),
}

#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum Tasks {
    Many(Vec<Task>),
    One(Task),
}

/// Runs all tasks of a configuration file in order.
///
/// The file holds a single task or a list of tasks, for example
///
/// ```json
/// [
///   { "generate": { "network": { "node_count": 100, "edge_count": 500, "max_capacity": 1000,
///                                "source_connections": 5, "sink_connections": 5 },
///                   "graph_count": 3, "file_prefix": "networks/flow_network", "seed": 42 } },
///   { "verify": { "input_dir": "networks", "executables": ["target/release/maxflow"] } }
/// ]
/// ```
///
/// Returns whether all verify tasks found only correct values.
pub(crate) fn run(config: &Path) -> Result<bool> {
    let tasks: Tasks = serde_json::from_reader(BufReader::new(File::open(config)?))?;
    let tasks = match tasks {
        Tasks::Many(tasks) => tasks,
        Tasks::One(task) => vec![task],
    };

    info!("Running {} tasks from {}", tasks.len(), config.display());

    let mut all_correct = true;
    for task in tasks {
        match task {
            Task::Generate(config) => super::generate::generate(config)?,
            Task::Verify(config) => all_correct &= super::verify::verify(config)?,
        }
    }

    Ok(all_correct)
}
