use crate::cli::CheckArgs;
use crate::error::{CliError, Result};
use crate::output;
use crate::utils::structure;
use rnadesign::workflows::validate::diagnose_structure;
use std::io::{self, Write};
use tracing::info;

pub fn run(args: CheckArgs) -> Result<()> {
    let pattern = structure::resolve(&args.source)?;
    let report = diagnose_structure(&pattern);
    info!(
        "Checked structure of length {}: {} pair(s), {} issue(s).",
        report.length,
        report.base_pairs.len(),
        report.issues.len()
    );

    let mut writer = io::stdout().lock();
    output::write_diagnostics(&mut writer, &report)?;
    writer.flush()?;

    if report.is_valid() {
        Ok(())
    } else {
        Err(CliError::InvalidStructure {
            issues: report.issues.len(),
        })
    }
}
