// mod.rs - Core logic module

pub mod composition;
pub mod sites;

// Re-export main types for convenience
pub use composition::{
    alignment_composition, per_record_composition, BaseCounts, CompositionSummary,
    CompositionTable,
};
pub use sites::{count_variable_sites, SiteSummary};
