// main.rs - alnstat CLI entry point

use alnstat::cli::validation::has_fasta_extension;
use alnstat::cli::{validate_input, SiteArgs};
use alnstat::core::{alignment_composition, count_variable_sites};
use alnstat::data::Alignment;
use alnstat::output::print_site_report;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let args: SiteArgs = argh::from_env();

    let path = validate_input(&args.fasta)?;
    if !has_fasta_extension(&path) {
        eprintln!("⚠️ Warning: '{}' has no conventional FASTA extension", args.fasta);
    }

    let alignment = Alignment::from_fasta(&path)?;

    let sites = count_variable_sites(&alignment);
    let composition = alignment_composition(&alignment)?;

    print_site_report(&sites, &composition);
    Ok(())
}
