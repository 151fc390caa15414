// alignment.rs - FASTA records and alignment container

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use bio::io::fasta;

/// A single FASTA record: header text plus upper-cased sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub seq: Vec<u8>,
}

/// An ordered set of records read from one FASTA file.
///
/// Sequences are assumed, but never checked, to share the same length;
/// column-wise operations are bounded by the shortest sequence.
#[derive(Debug, Clone, Default)]
pub struct Alignment {
    pub records: Vec<Record>,
}

impl Alignment {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Load all records from a FASTA file.
    ///
    /// Wrapped sequence lines are concatenated and the result is upper-cased.
    /// The record identifier is the whole header line after `>`, trimmed, so
    /// a description after the first whitespace stays part of the name.
    pub fn from_fasta(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open FASTA file {}: {}", path.display(), e))?;

        let reader = fasta::Reader::new(BufReader::new(file));

        let mut records = Vec::new();
        for record_result in reader.records() {
            let record = record_result
                .map_err(|e| format!("Invalid FASTA record in {}: {}", path.display(), e))?;

            let id = match record.desc() {
                Some(desc) => format!("{} {}", record.id(), desc),
                None => record.id().to_string(),
            };
            let seq = record.seq().to_ascii_uppercase();

            records.push(Record { id, seq });
        }

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of columns available across all records, i.e. the length of the
    /// shortest sequence. Zero for an empty alignment.
    pub fn column_count(&self) -> usize {
        self.records
            .iter()
            .map(|record| record.seq.len())
            .min()
            .unwrap_or(0)
    }
}
