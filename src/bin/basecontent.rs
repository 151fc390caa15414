// basecontent.rs - ATCG base content calculator CLI

use alnstat::cli::validation::has_fasta_extension;
use alnstat::cli::{validate_input, Config, ContentArgs};
use alnstat::core::per_record_composition;
use alnstat::data::Alignment;
use alnstat::output::write_table;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: ContentArgs = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        println!("{}", Config::generate_sample());
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let input = args.input.as_ref().ok_or("--input is required")?;
    let path = validate_input(input)?;
    if !has_fasta_extension(&path) {
        eprintln!("⚠️ Warning: '{}' has no conventional FASTA extension", input);
    }

    let alignment = Alignment::from_fasta(&path)?;
    let table = per_record_composition(&alignment);

    write_table(args.output.as_deref(), &args.output_type, &table)
}
