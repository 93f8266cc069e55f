use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use log::{info, warn};

use flow_builder::prelude::*;

mod report;
mod solver;

pub use report::{Outcome, SkipReason, SolverReport, Verification};
pub use solver::{
    short_program_path, Executable, Invocation, Solver, SolverOutput, DURATION_PREFIX,
    MAX_FLOW_PREFIX,
};

/// Parameters for checking solver executables against annotated files.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct VerifyConfig {
    /// Directory that contains the `.max` files.
    #[cfg_attr(feature = "clap", arg(long))]
    pub input_dir: PathBuf,

    /// Solver executables, processed in the given order.
    #[cfg_attr(feature = "clap", arg(required = true))]
    pub executables: Vec<PathBuf>,
}

impl VerifyConfig {
    pub fn new(input_dir: impl Into<PathBuf>, executables: Vec<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            executables,
        }
    }
}

/// Returns all files in `dir` whose name ends with `.max`, sorted by path.
///
/// Symbolic links count if they point to a file.
pub fn max_files(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_name().to_string_lossy().ends_with(".max") && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Checks the result of `solver` on a single annotated file.
///
/// Nothing that goes wrong here is an error: a file that cannot be verified
/// yields [`Outcome::Skipped`] with the reason.
pub fn check_file<S: Solver + ?Sized>(solver: &S, file: &Path) -> Outcome {
    let expected = match ground_truth(file) {
        Ok(Some(expected)) => expected,
        Ok(None) => return Outcome::Skipped(SkipReason::MissingGroundTruth),
        Err(Error::IoError { source }) => {
            return Outcome::Skipped(SkipReason::Io(source.to_string()))
        }
        Err(e) => return Outcome::Skipped(SkipReason::InvalidGroundTruth(e.to_string())),
    };

    let invocation = match solver.invoke(file) {
        Ok(invocation) => invocation,
        Err(e) => return Outcome::Skipped(SkipReason::Io(e.to_string())),
    };

    if !invocation.success() {
        return Outcome::Skipped(SkipReason::SolverExecutionFailure {
            code: invocation.exit_code,
            stderr: invocation.stderr,
        });
    }

    let output = SolverOutput::parse(&invocation.stdout);
    match output.max_flow {
        Some(computed) => Outcome::Verified(Verification {
            expected,
            computed,
            duration: output.duration,
        }),
        None => Outcome::Skipped(SkipReason::UnparsableSolverOutput),
    }
}

/// Checks `solver` on every file, in order.
pub fn verify_solver<S: Solver + ?Sized>(solver: &S, files: &[PathBuf]) -> SolverReport {
    let start = Instant::now();
    let mut report = SolverReport::new(solver.name());

    for file in files {
        let outcome = check_file(solver, file);
        match &outcome {
            Outcome::Verified(v) if v.is_correct() => {
                info!("{}: {} is correct", file.display(), v.computed)
            }
            Outcome::Verified(v) => warn!(
                "{}: expected {} but {} computed {}",
                file.display(),
                v.expected,
                report.program,
                v.computed
            ),
            Outcome::Skipped(reason) => warn!("Skipping {}: {:?}", file.display(), reason),
        }
        report.push(file, outcome);
    }

    info!(
        "Checked {} files with {} in {:?}",
        files.len(),
        report.program,
        start.elapsed()
    );

    report
}

/// Checks every configured executable against all `.max` files in the input
/// directory.
///
/// `on_report` is called with each report as soon as its executable has
/// processed all files.
pub fn verify_solvers<F>(
    config: &VerifyConfig,
    mut on_report: F,
) -> Result<Vec<SolverReport>, Error>
where
    F: FnMut(&SolverReport),
{
    let files = max_files(&config.input_dir)?;
    info!(
        "Found {} .max files in {}",
        files.len(),
        config.input_dir.display()
    );

    let mut reports = Vec::with_capacity(config.executables.len());
    for program in &config.executables {
        let report = verify_solver(&Executable::new(program), &files);
        on_report(&report);
        reports.push(report);
    }

    Ok(reports)
}
