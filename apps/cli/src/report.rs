//! Flat, JSON-friendly report types for the `--json` output.

use serde::{Deserialize, Serialize};

use orfscan_core::{Classification, Orf, Sequence};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrfDto {
    pub start: usize,
    pub end: usize,
    pub sequence: String,
}

impl From<&Orf> for OrfDto {
    fn from(orf: &Orf) -> Self {
        OrfDto {
            start: orf.start,
            end: orf.end,
            sequence: orf.sequence.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDto {
    pub id: String,
    pub name: String,
    pub sequence: String,
    pub classification: Classification,
    pub length: usize,
    pub first_orf: Option<OrfDto>,
    pub orfs: Vec<OrfDto>,
}

impl ReportDto {
    pub fn new(
        seq: &Sequence,
        classification: Classification,
        first_orf: Option<&Orf>,
        orfs: &[Orf],
    ) -> Self {
        ReportDto {
            id: seq.id.to_string(),
            name: seq.name.clone(),
            sequence: seq.residues.clone(),
            classification,
            length: seq.len(),
            first_orf: first_orf.map(OrfDto::from),
            orfs: orfs.iter().map(OrfDto::from).collect(),
        }
    }
}
