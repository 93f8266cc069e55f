use std::{
    fmt,
    io,
    path::{Path, PathBuf},
    process::Command,
    time::Duration,
};

/// Prefix of the stdout line carrying the computed flow value.
pub const MAX_FLOW_PREFIX: &str = "Maximaler Fluss:";

/// Prefix of the stdout line carrying the computation time.
pub const DURATION_PREFIX: &str = "Berechnungsdauer:";

/// What a solver run produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    pub stdout: String,
    pub stderr: String,
    /// `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl Invocation {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Something that computes the maximum flow of a DIMACS file and reports it
/// on stdout.
pub trait Solver {
    /// Name used in reports.
    fn name(&self) -> String;

    /// Runs the solver on the given file and waits for it to finish.
    fn invoke(&self, path: &Path) -> io::Result<Invocation>;
}

/// A solver executable that is called as `<program> <file>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Executable {
    program: PathBuf,
}

impl Executable {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Solver for Executable {
    fn name(&self) -> String {
        short_program_path(&self.program)
    }

    fn invoke(&self, path: &Path) -> io::Result<Invocation> {
        let output = Command::new(&self.program).arg(path).output()?;

        Ok(Invocation {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}

/// Returns the last four components of `program`, joined by `/`.
pub fn short_program_path(program: &Path) -> String {
    let program = program.to_string_lossy();
    let components = program.split('/').collect::<Vec<_>>();
    let skip = components.len().saturating_sub(4);
    components[skip..].join("/")
}

/// The values a solver reported on stdout.
///
/// The `Display` implementation renders the two output lines a solver is
/// expected to print.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolverOutput {
    pub max_flow: Option<u64>,
    pub duration: Option<String>,
}

impl SolverOutput {
    /// Output of a solver that computed `max_flow` in `elapsed`.
    pub fn new(max_flow: u64, elapsed: Duration) -> Self {
        Self {
            max_flow: Some(max_flow),
            duration: Some(format!("{:.6} Sekunden", elapsed.as_secs_f64())),
        }
    }

    /// Scans solver stdout for the flow and duration lines.
    ///
    /// The value is the text between the first and the second colon of a
    /// line, trimmed. If a line occurs more than once, the last one wins. Flow
    /// lines with a value that is not an unsigned integer are ignored.
    pub fn parse(stdout: &str) -> Self {
        let mut output = SolverOutput::default();

        for line in stdout.lines() {
            if line.starts_with(MAX_FLOW_PREFIX) {
                if let Some(value) = field(line).and_then(|value| value.parse().ok()) {
                    output.max_flow = Some(value);
                }
            } else if line.starts_with(DURATION_PREFIX) {
                output.duration = field(line).map(str::to_string);
            }
        }

        output
    }
}

fn field(line: &str) -> Option<&str> {
    line.split(':').nth(1).map(str::trim)
}

impl fmt::Display for SolverOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(max_flow) = self.max_flow {
            writeln!(f, "{MAX_FLOW_PREFIX} {max_flow}")?;
        }
        if let Some(duration) = &self.duration {
            writeln!(f, "{DURATION_PREFIX} {duration}")?;
        }
        Ok(())
    }
}
