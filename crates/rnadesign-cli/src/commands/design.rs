use crate::cli::DesignArgs;
use crate::config::PartialDesignConfig;
use crate::error::Result;
use crate::output;
use crate::utils::{progress::CliProgressHandler, structure};
use rnadesign::{
    core::models::structure::StructureSpec, engine::progress::ProgressReporter, workflows,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{info, warn};

pub fn run(args: DesignArgs) -> Result<()> {
    let pattern = structure::resolve(&args.source)?;
    let length = args.length.unwrap_or_else(|| pattern.chars().count());
    let spec = StructureSpec::new(length, pattern);

    let partial_config = match &args.config {
        Some(path) => PartialDesignConfig::from_file(path)?,
        None => PartialDesignConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    let reporter = if config.num_designs > 1 {
        let progress_handler = CliProgressHandler::new();
        ProgressReporter::with_callback(progress_handler.get_callback())
    } else {
        ProgressReporter::new()
    };

    info!("Invoking the design workflow...");
    let batch = workflows::design::run(&spec, &config, &reporter)?;

    let designs = if args.rank {
        batch.ranked()
    } else {
        batch.designs.iter().collect()
    };
    if designs.is_empty() {
        warn!("Workflow completed but produced no designs.");
        return Ok(());
    }

    match &args.output {
        Some(path) => {
            info!("Writing {} design(s) to {:?}", designs.len(), path);
            let mut writer = BufWriter::new(File::create(path)?);
            output::write_designs(&mut writer, &designs, &spec.structure_pattern, args.format)?;
            writer.flush()?;
            eprintln!(
                "✓ {} design(s) written to: {}",
                designs.len(),
                path.display()
            );
        }
        None => {
            let mut writer = io::stdout().lock();
            output::write_designs(&mut writer, &designs, &spec.structure_pattern, args.format)?;
            writer.flush()?;
        }
    }

    if let Some(best) = batch.best() {
        info!(
            "Most stable design #{} (pair energy {:.2} kcal/mol).",
            best.index + 1,
            best.pair_energy
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::error::CliError;
    use clap::Parser;
    use rnadesign::engine::error::EngineError;
    use tempfile::tempdir;

    fn design_args(argv: &[&str]) -> DesignArgs {
        let mut full = vec!["rnadesign", "design"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Design(args) => args,
            _ => panic!("Expected 'design' subcommand"),
        }
    }

    #[test]
    fn writes_ranked_csv_to_the_output_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("designs.csv");
        let out_str = out.to_str().unwrap();
        let args = design_args(&[
            "-s", "((((...))))", "--seed", "11", "-k", "5", "--rank", "-f", "csv", "-o", out_str,
        ]);
        run(args).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        let rows: Vec<_> = content.lines().skip(1).collect();
        assert_eq!(rows.len(), 5);
        let energies: Vec<f64> = rows
            .iter()
            .map(|row| row.rsplit(',').next().unwrap().parse().unwrap())
            .collect();
        assert!(energies.windows(2).all(|w| w[0] <= w[1]));
        for row in rows {
            assert!(row.contains(",((((...)))),"));
        }
    }

    #[test]
    fn mismatched_length_is_rejected() {
        let args = design_args(&["-s", "((...))", "-n", "9"]);
        assert!(matches!(
            run(args),
            Err(CliError::Design(EngineError::InvalidLength(_)))
        ));
    }

    #[test]
    fn malformed_structure_is_rejected() {
        let args = design_args(&["-s", "((...)"]);
        assert!(matches!(
            run(args),
            Err(CliError::Design(EngineError::MalformedStructure(_)))
        ));
    }
}
