use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A nucleotide sequence loaded from a single source.
///
/// Residues are stored exactly as read. Classification is defined over the
/// literal characters, so the constructor never case-normalizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sequence {
    pub id: Uuid,
    pub name: String,
    pub residues: String,
}

impl Sequence {
    pub fn new(name: impl Into<String>, residues: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            residues: residues.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}
