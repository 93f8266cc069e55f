use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::prelude::*;

/// Parameters for generating a batch of annotated DIMACS files.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct GenerateConfig {
    #[cfg_attr(feature = "clap", command(flatten))]
    pub network: RandomNetworkConfig,

    /// Number of networks to generate.
    #[cfg_attr(feature = "clap", arg(long, default_value_t = 1))]
    #[cfg_attr(feature = "serde", serde(default = "default_graph_count"))]
    pub graph_count: usize,

    /// Files are written to `<file_prefix>_<suffix>.max`.
    #[cfg_attr(feature = "clap", arg(long))]
    pub file_prefix: PathBuf,

    /// First suffix of the generated file names.
    #[cfg_attr(feature = "clap", arg(long, default_value_t = 1))]
    #[cfg_attr(feature = "serde", serde(default = "default_start_suffix"))]
    pub start_suffix: usize,

    /// Last available suffix, defaults to `start_suffix + graph_count - 1`.
    #[cfg_attr(feature = "clap", arg(long))]
    #[cfg_attr(feature = "serde", serde(default))]
    pub end_suffix: Option<usize>,

    /// Seeds the random number generator, generation is not reproducible
    /// without it.
    #[cfg_attr(feature = "clap", arg(long))]
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,

    /// Algorithm that computes the recorded maximum flow value.
    #[cfg_attr(feature = "clap", arg(long, value_enum, default_value_t = MaxFlowAlgorithm::Dinic))]
    #[cfg_attr(feature = "serde", serde(default))]
    pub algorithm: MaxFlowAlgorithm,
}

#[cfg(feature = "serde")]
fn default_graph_count() -> usize {
    1
}

#[cfg(feature = "serde")]
fn default_start_suffix() -> usize {
    1
}

impl GenerateConfig {
    pub fn new(
        network: RandomNetworkConfig,
        graph_count: usize,
        file_prefix: impl Into<PathBuf>,
    ) -> Self {
        Self {
            network,
            graph_count,
            file_prefix: file_prefix.into(),
            start_suffix: 1,
            end_suffix: None,
            seed: None,
            algorithm: MaxFlowAlgorithm::default(),
        }
    }

    pub fn suffixes(mut self, start_suffix: usize, end_suffix: usize) -> Self {
        self.start_suffix = start_suffix;
        self.end_suffix = Some(end_suffix);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn algorithm(mut self, algorithm: MaxFlowAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Returns the suffixes used for the generated files.
    pub fn validate(&self) -> Result<std::ops::RangeInclusive<usize>, Error> {
        self.network.validate()?;

        let start = self.start_suffix;
        let end = match self.end_suffix {
            Some(end) => end,
            None => start
                .checked_add(self.graph_count.saturating_sub(1))
                .ok_or_else(|| Error::InvalidParameters {
                    reason: format!(
                        "{} suffixes starting at {start} exceed the suffix range",
                        self.graph_count
                    ),
                })?,
        };

        // `None` stands for a range one larger than `usize::MAX`.
        let available = match end.checked_sub(start) {
            Some(width) => width.checked_add(1),
            None => Some(0),
        };

        if available.map_or(false, |available| available < self.graph_count) {
            return Err(Error::InvalidParameters {
                reason: format!(
                    "the suffix range [{start}, {end}] is smaller than the number \
                     of graphs to generate ({})",
                    self.graph_count
                ),
            });
        }

        Ok(start..=end)
    }
}

/// Returns `<prefix>_<suffix>.max`.
pub fn dimacs_file_name(prefix: &Path, suffix: usize) -> PathBuf {
    let mut name = prefix.as_os_str().to_owned();
    name.push(format!("_{suffix}.max"));
    PathBuf::from(name)
}

/// Generates `graph_count` random networks, computes their maximum flow and
/// writes each one to its own DIMACS file.
///
/// All parameters are checked before the first file is written. Returns the
/// paths of the written files in generation order.
pub fn generate_networks(config: &GenerateConfig) -> Result<Vec<PathBuf>, Error> {
    let suffixes = config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut paths = Vec::with_capacity(config.graph_count);

    for suffix in suffixes.take(config.graph_count) {
        let start = Instant::now();
        let network: FlowNetwork<usize> = random_flow_network(config.network, &mut rng)?;
        let value = max_flow(&network, config.algorithm);

        let path = dimacs_file_name(&config.file_prefix, suffix);
        write_dimacs_file(&network, value, &path)?;
        info!("Generated {} in {:?}", path.display(), start.elapsed());

        paths.push(path);
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(prefix: &Path) -> GenerateConfig {
        GenerateConfig::new(
            RandomNetworkConfig::new(20, 60, 100, 4, 5),
            3,
            prefix.join("flow_network"),
        )
    }

    #[test]
    fn writes_annotated_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path()).suffixes(17, 19).seed(7);

        let paths = generate_networks(&config).unwrap();

        let expected = (17..=19)
            .map(|s| dir.path().join(format!("flow_network_{s}.max")))
            .collect::<Vec<_>>();
        assert_eq!(paths, expected);

        for path in paths {
            let dimacs = Dimacs::<u32>::try_from(InputPath(&path)).unwrap();
            let network = dimacs.network;

            assert_eq!(network.node_count(), 20);
            assert_eq!(network.edge_count(), 60);
            assert_eq!(dimacs.max_flow, Some(EdmondsKarp.max_flow(&network)));
            assert_eq!(ground_truth(&path).unwrap(), dimacs.max_flow);
        }
    }

    #[test]
    fn default_end_suffix_covers_graph_count() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path()).seed(1);

        assert_eq!(config.validate().unwrap(), 1..=3);
        assert_eq!(generate_networks(&config).unwrap().len(), 3);
    }

    #[test]
    fn extra_suffixes_are_unused() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path()).suffixes(5, 10).seed(3);

        let paths = generate_networks(&config).unwrap();

        assert_eq!(paths.last(), Some(&dir.path().join("flow_network_7.max")));
        assert!(!dir.path().join("flow_network_8.max").exists());
    }

    #[test]
    fn same_seed_same_files() {
        let dir = tempfile::tempdir().unwrap();
        let network = RandomNetworkConfig::new(20, 60, 100, 4, 5);
        let first = GenerateConfig::new(network, 3, dir.path().join("a")).seed(99);
        let second = GenerateConfig::new(network, 3, dir.path().join("b")).seed(99);
        let (first, second) = (generate_networks(&first), generate_networks(&second));

        for (a, b) in first.unwrap().iter().zip(second.unwrap().iter()) {
            assert_eq!(std::fs::read(a).unwrap(), std::fs::read(b).unwrap());
        }
    }

    #[test]
    fn too_small_suffix_range_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path()).suffixes(17, 18);

        let err = generate_networks(&config).unwrap_err();

        assert!(matches!(err, Error::InvalidParameters { .. }));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn invalid_network_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path());
        config.network.source_connections = 0;

        assert!(matches!(
            generate_networks(&config),
            Err(Error::InvalidParameters { .. })
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn suffix_range_at_the_end_of_usize() {
        let config = config(Path::new("out"));

        assert_eq!(
            config.clone().suffixes(usize::MAX - 2, usize::MAX).validate().unwrap(),
            usize::MAX - 2..=usize::MAX
        );
        assert_eq!(
            config.clone().suffixes(0, usize::MAX).validate().unwrap(),
            0..=usize::MAX
        );
        assert!(matches!(
            config.clone().suffixes(usize::MAX, usize::MAX).validate(),
            Err(Error::InvalidParameters { .. })
        ));

        let mut open_ended = config;
        open_ended.start_suffix = usize::MAX - 1;
        assert!(matches!(
            open_ended.validate(),
            Err(Error::InvalidParameters { .. })
        ));
    }

    #[test]
    fn file_name_appends_suffix() {
        assert_eq!(
            dimacs_file_name(Path::new("out/flow_network"), 17),
            PathBuf::from("out/flow_network_17.max")
        );
    }
}
