use crate::cli::InfoArgs;
use crate::error::Result;
use crate::output;
use crate::utils::structure;
use rnadesign::workflows;
use std::io::{self, Write};
use tracing::{info, warn};

pub fn run(args: InfoArgs) -> Result<()> {
    let pattern = structure::resolve(&args.source)?;
    let sequence = args.sequence.trim();

    info!("Analyzing sequence of length {}.", sequence.chars().count());
    let report = workflows::get_structure_info(sequence, &pattern)?;
    if !report.is_fully_complementary() {
        warn!(
            "{} pair(s) are not Watson-Crick complements.",
            report.noncanonical_pairs.len()
        );
    }

    let mut writer = io::stdout().lock();
    output::write_info(&mut writer, &report, args.format)?;
    writer.flush()?;
    Ok(())
}
