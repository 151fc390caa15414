// args.rs - Command line arguments for both binaries

use argh::FromArgs;

#[derive(FromArgs)]
/// alnstat - Singleton/parsimony-informative site counter for FASTA alignments
pub struct SiteArgs {
    /// path to the FASTA alignment file
    #[argh(positional)]
    pub fasta: String,
}

#[derive(FromArgs, Debug)]
/// basecontent - ATCG base content calculator for FASTA files
pub struct ContentArgs {
    /// input FASTA file path
    #[argh(option, short = 'i')]
    pub input: Option<String>,

    /// output type: json or tsv (default: tsv)
    #[argh(option, short = 't', long = "type", default = "String::from(\"tsv\")")]
    pub output_type: String,

    /// output file path (omit to skip writing)
    #[argh(option, short = 'o')]
    pub output: Option<String>,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
