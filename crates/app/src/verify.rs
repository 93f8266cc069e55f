use flow::prelude::*;

use super::Result;

/// Prints each executable's report as soon as it is complete and returns
/// whether every verified file was correct.
pub(crate) fn verify(config: VerifyConfig) -> Result<bool> {
    let reports = verify_solvers(&config, |report| println!("\n{report}"))?;

    Ok(reports.iter().all(SolverReport::all_correct))
}
