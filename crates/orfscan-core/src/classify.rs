use serde::{Deserialize, Serialize};

/// Verdict on the alphabet of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Dna,
    Rna,
    Invalid,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Dna => write!(f, "DNA"),
            Classification::Rna => write!(f, "RNA"),
            Classification::Invalid => write!(f, "invalid"),
        }
    }
}

/// Classify a sequence by alphabet membership alone.
///
/// `U` anywhere wins, checked before the DNA alphabet since the two overlap
/// on A, G and C. An empty sequence classifies as DNA: no disqualifying
/// character exists.
pub fn classify(seq: &str) -> Classification {
    if seq.contains('U') {
        Classification::Rna
    } else if seq.chars().any(|c| !matches!(c, 'A' | 'T' | 'G' | 'C')) {
        Classification::Invalid
    } else {
        Classification::Dna
    }
}
