// mod.rs - Report and table formatters

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::composition::{CompositionSummary, CompositionTable};
use crate::core::sites::SiteSummary;

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent)
            .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
    }
    Ok(())
}

/// Print the fixed console report for the site/composition analysis
pub fn print_site_report(sites: &SiteSummary, composition: &CompositionSummary) {
    println!("Singleton variable sites: {}", sites.singletons);
    println!("Parsimony informative sites: {}", sites.parsimony_informative);
    println!("A content: {:.1}%", composition.a);
    println!("T content: {:.1}%", composition.t);
    println!("C content: {:.1}%", composition.c);
    println!("G content: {:.1}%", composition.g);
    println!("A+T content: {:.1}%", composition.at);
    println!("G+C content: {:.1}%", composition.gc);
}

/// Write per-record raw counts as a JSON object keyed by record identifier
pub fn write_json(file_path: &str, table: &CompositionTable) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, table)
        .map_err(|e| format!("Failed to serialize JSON to '{}': {}", file_path, e))?;

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    Ok(())
}

/// Write per-record percentages as a TSV table.
///
/// Column order is Thymine, Cytosine, Adenine, Guanine, each normalized by
/// the record's own total symbol count and rounded to one decimal place.
pub fn write_tsv(file_path: &str, table: &CompositionTable) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "Sample\tThymine\tCytosine\tAdenine\tGuanine")
        .map_err(|e| format!("Write error: {}", e))?;

    for (sample, counts) in &table.rows {
        writeln!(
            writer,
            "{}\t{:.1}\t{:.1}\t{:.1}\t{:.1}",
            sample,
            counts.percent_t(),
            counts.percent_c(),
            counts.percent_a(),
            counts.percent_g()
        )
        .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    Ok(())
}

/// Write the composition table in the requested format.
///
/// An unrecognized format prints a message and writes nothing; it is not a
/// fatal error. A recognized format with no output path is a no-op (nothing
/// is persisted and nothing is printed).
pub fn write_table(
    file_path: Option<&str>,
    format: &str,
    table: &CompositionTable,
) -> Result<(), String> {
    match format.to_lowercase().as_str() {
        "json" => {
            if let Some(path) = file_path {
                write_json(path, table)?;
                println!("Results saved to {}.", path);
            }
            Ok(())
        }
        "tsv" => {
            if let Some(path) = file_path {
                write_tsv(path, table)?;
                println!("Results saved to {}.", path);
            }
            Ok(())
        }
        _ => {
            println!("Invalid output type. Please choose 'json' or 'tsv'.");
            Ok(())
        }
    }
}
