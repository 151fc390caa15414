// lib.rs - alnstat library root

//! # alnstat - Alignment variability and base composition statistics
//!
//! This library backs two small command-line tools for DNA multiple-sequence
//! alignments in FASTA format:
//!
//! - **alnstat**: counts singleton and parsimony-informative sites across the
//!   alignment columns and reports overall nucleotide composition.
//! - **basecontent**: tallies per-sequence nucleotide composition and exports
//!   it as a JSON or TSV table.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use alnstat::prelude::*;
//!
//! // Load an alignment (sequences are upper-cased on load)
//! let alignment = Alignment::from_fasta(std::path::Path::new("aln.fasta"))?;
//!
//! // Classify variable columns
//! let sites = count_variable_sites(&alignment);
//! println!("{} singletons", sites.singletons);
//!
//! // Alignment-wide composition
//! let composition = alignment_composition(&alignment)?;
//! println!("GC: {:.1}%", composition.gc);
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_input, Config, ContentArgs, SiteArgs};
    pub use crate::core::{alignment_composition, count_variable_sites, per_record_composition};
    pub use crate::core::{BaseCounts, CompositionSummary, CompositionTable, SiteSummary};
    pub use crate::data::{Alignment, Record};
    pub use crate::output::{print_site_report, write_table};
}

// Re-export main types at the root level for convenience
pub use crate::core::{BaseCounts, CompositionSummary, CompositionTable, SiteSummary};
pub use crate::data::{Alignment, Record};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("alnstat v{} - FASTA alignment statistics", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_carries_the_crate_version() {
        assert!(get_info().contains(VERSION));
    }
}
