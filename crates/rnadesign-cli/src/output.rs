use crate::cli::OutputFormat;
use crate::error::Result;
use rnadesign::core::analysis::StructureInfo;
use rnadesign::core::parser::{StructureDiagnostics, StructureIssue};
use rnadesign::engine::state::ScoredDesign;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct DesignRow<'a> {
    index: usize,
    sequence: String,
    structure: &'a str,
    gc_content: f64,
    pair_energy: f64,
}

#[derive(Serialize)]
struct InfoRow<'a> {
    sequence: &'a str,
    structure: &'a str,
    length: usize,
    gc_content: f64,
    pair_count: usize,
    pair_energy: f64,
    noncanonical_pairs: usize,
}

/// Writes designs either as FASTA-style records followed by the structure line, or as CSV.
pub fn write_designs<W: Write>(
    mut writer: W,
    designs: &[&ScoredDesign],
    structure: &str,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for design in designs {
                writeln!(
                    writer,
                    ">design_{} gc={:.3} energy={:.2}",
                    design.index + 1,
                    design.gc_content,
                    design.pair_energy
                )?;
                writeln!(writer, "{}", design.sequence)?;
                writeln!(writer, "{}", structure)?;
            }
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for design in designs {
                csv_writer.serialize(DesignRow {
                    index: design.index + 1,
                    sequence: design.sequence.to_string(),
                    structure,
                    gc_content: design.gc_content,
                    pair_energy: design.pair_energy,
                })?;
            }
            csv_writer.flush()?;
        }
    }
    Ok(())
}

pub fn write_info<W: Write>(mut writer: W, info: &StructureInfo, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(writer, "Sequence:       {}", info.sequence)?;
            writeln!(writer, "Structure:      {}", info.structure)?;
            writeln!(writer, "Length:         {}", info.length)?;
            writeln!(writer, "GC content:     {:.3}", info.gc_content)?;
            writeln!(writer, "Base pairs:     {}", info.pair_count)?;
            writeln!(writer, "Pair energy:    {:.2} kcal/mol", info.pair_energy)?;
            if !info.is_fully_complementary() {
                writeln!(writer, "Non-canonical pairs:")?;
                for (i, j) in &info.noncanonical_pairs {
                    writeln!(writer, "  ({}, {})", i, j)?;
                }
            }
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            csv_writer.serialize(InfoRow {
                sequence: &info.sequence,
                structure: &info.structure,
                length: info.length,
                gc_content: info.gc_content,
                pair_count: info.pair_count,
                pair_energy: info.pair_energy,
                noncanonical_pairs: info.noncanonical_pairs.len(),
            })?;
            csv_writer.flush()?;
        }
    }
    Ok(())
}

pub fn write_diagnostics<W: Write>(mut writer: W, report: &StructureDiagnostics) -> Result<()> {
    writeln!(writer, "Length:            {}", report.length)?;
    writeln!(writer, "Unpaired (dots):   {}", report.unpaired)?;
    writeln!(writer, "Opening brackets:  {}", report.opening)?;
    writeln!(writer, "Closing brackets:  {}", report.closing)?;
    writeln!(writer, "Base pairs:        {}", report.base_pairs.len())?;
    writeln!(writer, "Paired:            {:.1}%", report.paired_fraction() * 100.0)?;
    writeln!(writer, "Stems:             {}", report.loops.stems)?;
    writeln!(writer, "Hairpin loops:     {}", report.loops.hairpin_loops)?;
    writeln!(writer, "Bulges:            {}", report.loops.bulges)?;
    writeln!(writer, "Internal loops:    {}", report.loops.internal_loops)?;
    writeln!(writer, "Multiloops:        {}", report.loops.multiloops)?;
    writeln!(writer, "External loops:    {}", report.loops.external_loops)?;

    if report.is_valid() {
        writeln!(writer, "Valid structure.")?;
        return Ok(());
    }

    writeln!(writer, "Issues found:")?;
    for issue in &report.issues {
        match issue {
            StructureIssue::InvalidCharacter { symbol, position } => {
                writeln!(writer, "  - Invalid character '{}' at position {}", symbol, position)?
            }
            StructureIssue::UnmatchedClosing { position } => {
                writeln!(writer, "  - Unmatched closing bracket at position {}", position)?
            }
            StructureIssue::UnmatchedOpening { positions } => writeln!(
                writer,
                "  - Unmatched opening bracket(s) at position(s) {:?}",
                positions
            )?,
        }
    }
    Ok(())
}
