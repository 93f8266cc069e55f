use std::{
    fmt,
    path::{Path, PathBuf},
};

/// The comparison of a solver's result with the recorded maximum flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verification {
    pub expected: u64,
    pub computed: u64,
    pub duration: Option<String>,
}

impl Verification {
    pub fn is_correct(&self) -> bool {
        self.expected == self.computed
    }
}

/// Why a file could not be verified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The file has no `c Maximum flow:` comment.
    MissingGroundTruth,
    /// The `c Maximum flow:` comment does not hold an unsigned integer.
    InvalidGroundTruth(String),
    /// The solver terminated with a non-zero exit code or by a signal.
    SolverExecutionFailure { code: Option<i32>, stderr: String },
    /// The solver output has no parsable `Maximaler Fluss:` line.
    UnparsableSolverOutput,
    /// The file could not be read or the solver could not be started.
    Io(String),
}

/// Result of checking a single file with a single solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Verified(Verification),
    Skipped(SkipReason),
}

/// All outcomes of one solver, in file order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverReport {
    pub program: String,
    pub outcomes: Vec<(PathBuf, Outcome)>,
}

impl SolverReport {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, file: impl Into<PathBuf>, outcome: Outcome) {
        self.outcomes.push((file.into(), outcome));
    }

    /// Files where the solver computed the recorded value.
    pub fn correct(&self) -> impl Iterator<Item = (&Path, &Verification)> + '_ {
        self.verified().filter(|(_, v)| v.is_correct())
    }

    /// Files where the solver computed a different value.
    pub fn mismatches(&self) -> impl Iterator<Item = (&Path, &Verification)> + '_ {
        self.verified().filter(|(_, v)| !v.is_correct())
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&Path, &SkipReason)> + '_ {
        self.outcomes.iter().filter_map(|(file, outcome)| match outcome {
            Outcome::Skipped(reason) => Some((file.as_path(), reason)),
            Outcome::Verified(_) => None,
        })
    }

    /// Returns `true` if no file produced a wrong value. Skipped files do not
    /// count.
    pub fn all_correct(&self) -> bool {
        self.mismatches().next().is_none()
    }

    fn verified(&self) -> impl Iterator<Item = (&Path, &Verification)> + '_ {
        self.outcomes.iter().filter_map(|(file, outcome)| match outcome {
            Outcome::Verified(verification) => Some((file.as_path(), verification)),
            Outcome::Skipped(_) => None,
        })
    }
}

impl fmt::Display for SolverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let program = &self.program;

        writeln!(f, "Running {program}...")?;

        for (file, outcome) in &self.outcomes {
            let file = file.display();
            match outcome {
                Outcome::Verified(v) if v.is_correct() => writeln!(
                    f,
                    "{file}: computation time: {} by {program}",
                    v.duration.as_deref().unwrap_or("unknown")
                )?,
                Outcome::Verified(_) => {}
                Outcome::Skipped(SkipReason::MissingGroundTruth) => {
                    writeln!(f, "No maximum flow value found in {file}")?
                }
                Outcome::Skipped(SkipReason::InvalidGroundTruth(reason)) => {
                    writeln!(f, "Invalid maximum flow value in {file}: {reason}")?
                }
                Outcome::Skipped(SkipReason::SolverExecutionFailure { code, stderr }) => {
                    write!(f, "Error running the program on {file}")?;
                    match code {
                        Some(code) => writeln!(f, " (exit code {code})")?,
                        None => writeln!(f, " (terminated by signal)")?,
                    }
                    if !stderr.trim().is_empty() {
                        writeln!(f, "{}", stderr.trim_end())?;
                    }
                }
                Outcome::Skipped(SkipReason::UnparsableSolverOutput) => {
                    writeln!(f, "No computed maximum flow found in the output for {file}")?
                }
                Outcome::Skipped(SkipReason::Io(reason)) => {
                    writeln!(f, "Could not check {file}: {reason}")?
                }
            }
        }

        writeln!(f)?;
        if self.all_correct() {
            write!(f, "All files have correct maximum flow values for {program}.")
        } else {
            write!(f, "Files with incorrect maximum flow values for {program}:")?;
            for (file, v) in self.mismatches() {
                write!(
                    f,
                    "\n - {}: correct value: {}, calculated value: {}",
                    file.display(),
                    v.expected,
                    v.computed
                )?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verified(expected: u64, computed: u64, duration: &str) -> Outcome {
        Outcome::Verified(Verification {
            expected,
            computed,
            duration: Some(duration.to_string()),
        })
    }

    #[test]
    fn all_correct_report() {
        let mut report = SolverReport::new("build/maxflow");
        report.push("a.max", verified(42, 42, "0.003"));
        report.push("b.max", verified(7, 7, "0.001"));

        assert!(report.all_correct());
        assert_eq!(report.correct().count(), 2);
        assert_eq!(
            report.to_string(),
            "Running build/maxflow...\n\
             a.max: computation time: 0.003 by build/maxflow\n\
             b.max: computation time: 0.001 by build/maxflow\n\
             \n\
             All files have correct maximum flow values for build/maxflow."
        );
    }

    #[test]
    fn mismatches_are_listed() {
        let mut report = SolverReport::new("maxflow");
        report.push("a.max", verified(42, 40, "0.003"));
        report.push("b.max", verified(7, 7, "0.001"));

        assert!(!report.all_correct());
        assert_eq!(
            report.to_string(),
            "Running maxflow...\n\
             b.max: computation time: 0.001 by maxflow\n\
             \n\
             Files with incorrect maximum flow values for maxflow:\n \
             - a.max: correct value: 42, calculated value: 40"
        );
    }

    #[test]
    fn skipped_files_are_neither_correct_nor_mismatched() {
        let mut report = SolverReport::new("maxflow");
        report.push("a.max", Outcome::Skipped(SkipReason::MissingGroundTruth));
        report.push(
            "b.max",
            Outcome::Skipped(SkipReason::SolverExecutionFailure {
                code: Some(1),
                stderr: "bad input\n".to_string(),
            }),
        );
        report.push("c.max", Outcome::Skipped(SkipReason::UnparsableSolverOutput));

        assert!(report.all_correct());
        assert_eq!(report.correct().count(), 0);
        assert_eq!(report.skipped().count(), 3);
        assert_eq!(
            report.to_string(),
            "Running maxflow...\n\
             No maximum flow value found in a.max\n\
             Error running the program on b.max (exit code 1)\n\
             bad input\n\
             No computed maximum flow found in the output for c.max\n\
             \n\
             All files have correct maximum flow values for maxflow."
        );
    }
}
