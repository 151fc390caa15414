// composition.rs - Nucleotide composition tallies

use serde::Serialize;
use serde::Serializer;

use crate::data::Alignment;

/// Raw A/T/C/G occurrence counts plus the total number of symbols seen.
///
/// Symbols outside A/T/C/G (gaps, ambiguity codes) contribute to `total`
/// only, so they dilute every percentage without getting a column of their
/// own. Serializes as `{"A": .., "T": .., "C": .., "G": ..}` raw counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BaseCounts {
    #[serde(rename = "A")]
    pub a: u64,
    #[serde(rename = "T")]
    pub t: u64,
    #[serde(rename = "C")]
    pub c: u64,
    #[serde(rename = "G")]
    pub g: u64,
    #[serde(skip)]
    pub total: u64,
}

impl BaseCounts {
    /// Tally one sequence (expected upper-case)
    pub fn tally(seq: &[u8]) -> Self {
        let mut counts = Self::default();
        counts.accumulate(seq);
        counts
    }

    /// Add one sequence's symbols to the running counts
    pub fn accumulate(&mut self, seq: &[u8]) {
        for &symbol in seq {
            match symbol {
                b'A' => self.a += 1,
                b'T' => self.t += 1,
                b'C' => self.c += 1,
                b'G' => self.g += 1,
                _ => {}
            }
            self.total += 1;
        }
    }

    pub fn percent_a(&self) -> f64 {
        self.percent(self.a)
    }

    pub fn percent_t(&self) -> f64 {
        self.percent(self.t)
    }

    pub fn percent_c(&self) -> f64 {
        self.percent(self.c)
    }

    pub fn percent_g(&self) -> f64 {
        self.percent(self.g)
    }

    fn percent(&self, count: u64) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 / self.total as f64 * 100.0
    }
}

/// Composition percentages for a whole alignment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositionSummary {
    pub a: f64,
    pub t: f64,
    pub c: f64,
    pub g: f64,
    pub at: f64,
    pub gc: f64,
}

/// Compute alignment-wide base percentages.
///
/// All sequences are pooled into one tally. AT and GC content are the plain
/// average of the two member percentages. An alignment with no symbols at all
/// cannot be normalized and is reported as an error.
pub fn alignment_composition(alignment: &Alignment) -> Result<CompositionSummary, String> {
    let mut counts = BaseCounts::default();
    for record in &alignment.records {
        counts.accumulate(&record.seq);
    }

    if counts.total == 0 {
        return Err("Alignment contains no bases; cannot compute composition".to_string());
    }

    let (a, t, c, g) = (
        counts.percent_a(),
        counts.percent_t(),
        counts.percent_c(),
        counts.percent_g(),
    );

    Ok(CompositionSummary {
        a,
        t,
        c,
        g,
        at: (a + t) / 2.0,
        gc: (g + c) / 2.0,
    })
}

/// Per-record counts keyed by record identifier, in input order.
///
/// Serializes as a JSON object; insertion order is preserved, so the export
/// lists records in the order they appeared in the FASTA file.
#[derive(Debug, Clone, Default)]
pub struct CompositionTable {
    pub rows: Vec<(String, BaseCounts)>,
}

impl Serialize for CompositionTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.rows.iter().map(|(id, counts)| (id, counts)))
    }
}

/// Tally each record independently
pub fn per_record_composition(alignment: &Alignment) -> CompositionTable {
    CompositionTable {
        rows: alignment
            .records
            .iter()
            .map(|record| (record.id.clone(), BaseCounts::tally(&record.seq)))
            .collect(),
    }
}
