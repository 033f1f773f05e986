use std::collections::HashSet;

use crate::codon::{is_start_codon, is_stop_codon};

/// An open reading frame: a start codon through its first in-frame stop
/// codon, inclusive. `end - start` is always a positive multiple of 3.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Orf {
    pub start: usize,
    pub end: usize,
    pub sequence: String,
}

/// Find the ORF opened by the first start codon in the sequence.
///
/// The first ATG anywhere is the only candidate considered: if its frame
/// never reaches a stop codon the result is `None`, even when a later ATG
/// would have completed. Fail-closed, no retry.
pub fn find_first_orf(seq: &str) -> Option<Orf> {
    let bases: Vec<char> = seq.chars().collect();
    if bases.len() < 3 {
        return None;
    }

    let start = (0..=bases.len() - 3).find(|&i| {
        let codon: String = bases[i..i + 3].iter().collect();
        is_start_codon(&codon)
    })?;

    let mut i = start + 3;
    while i + 3 <= bases.len() {
        let codon: String = bases[i..i + 3].iter().collect();
        if is_stop_codon(&codon) {
            let end = i + 3;
            return Some(Orf {
                start,
                end,
                sequence: bases[start..end].iter().collect(),
            });
        }
        i += 3;
    }

    None
}

/// Find every distinct start-to-stop ORF in the sequence.
///
/// Starts are tried at every offset, so two ATGs one or two characters
/// apart each open their own reading frame. Each start runs to its first
/// in-frame stop codon only. Results keep discovery order; an ORF whose
/// text already appeared anywhere earlier in the scan is skipped.
pub fn find_all_orfs(seq: &str) -> Vec<Orf> {
    let bases: Vec<char> = seq.chars().collect();
    let mut orfs = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    if bases.len() < 3 {
        return orfs;
    }

    for i in 0..=bases.len() - 3 {
        let codon: String = bases[i..i + 3].iter().collect();
        if !is_start_codon(&codon) {
            continue;
        }

        let mut j = i + 3;
        while j + 3 <= bases.len() {
            let candidate: String = bases[j..j + 3].iter().collect();
            if is_stop_codon(&candidate) {
                let sequence: String = bases[i..j + 3].iter().collect();
                if seen.insert(sequence.clone()) {
                    orfs.push(Orf {
                        start: i,
                        end: j + 3,
                        sequence,
                    });
                }
                break;
            }
            j += 3;
        }
        // A start with no in-frame stop yields nothing; the scan moves on.
    }

    orfs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_orf_whole_sequence() {
        let orf = find_first_orf("ATGAAATAG").unwrap();
        assert_eq!(orf.sequence, "ATGAAATAG");
        assert_eq!(orf.start, 0);
        assert_eq!(orf.end, 9);
    }

    #[test]
    fn test_first_orf_no_stop() {
        assert!(find_first_orf("ATG").is_none());
        assert!(find_first_orf("ATGAAA").is_none());
    }

    #[test]
    fn test_first_orf_no_start() {
        assert!(find_first_orf("CCCTTTGGG").is_none());
        assert!(find_first_orf("").is_none());
        assert!(find_first_orf("AT").is_none());
    }

    #[test]
    fn test_first_orf_fail_closed() {
        // The first ATG (offset 0) never reaches an in-frame stop; the ATG
        // at offset 4 would, but it is not retried.
        let seq = "ATGGATGTAA";
        assert!(find_first_orf(seq).is_none());
        let all = find_all_orfs(seq);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].start, 4);
        assert_eq!(all[0].sequence, "ATGTAA");
    }

    #[test]
    fn test_first_orf_stop_only_in_frame() {
        // TAA at offset 5 is out of frame with the start and is walked
        // over; the in-frame TAA at offset 9 ends the frame.
        let orf = find_first_orf("ATGCCTAAATAA").unwrap();
        assert_eq!(orf.start, 0);
        assert_eq!(orf.end, 12);
        assert_eq!(orf.sequence, "ATGCCTAAATAA");
    }

    #[test]
    fn test_all_orfs_interior_start() {
        let orfs = find_all_orfs("GGGATGAAATAGCCC");
        assert_eq!(orfs.len(), 1);
        assert_eq!(orfs[0].start, 3);
        assert_eq!(orfs[0].sequence, "ATGAAATAG");
    }

    #[test]
    fn test_all_orfs_nested_frames_share_stop() {
        // ATG at 0 and at 3 sit in the same frame and run to the same TAA;
        // the substrings differ, so both are kept.
        let orfs = find_all_orfs("ATGATGTAA");
        assert_eq!(orfs.len(), 2);
        assert_eq!((orfs[0].start, orfs[0].sequence.as_str()), (0, "ATGATGTAA"));
        assert_eq!((orfs[1].start, orfs[1].sequence.as_str()), (3, "ATGTAA"));
    }

    #[test]
    fn test_all_orfs_dedup_identical_text() {
        // The same ORF text occurs at offsets 0 and 9; only the first
        // occurrence is reported.
        let orfs = find_all_orfs("ATGAAATAGATGAAATAG");
        assert_eq!(orfs.len(), 1);
        assert_eq!(orfs[0].start, 0);
        assert_eq!(orfs[0].sequence, "ATGAAATAG");
    }

    #[test]
    fn test_all_orfs_none() {
        assert!(find_all_orfs("CCCGGG").is_empty());
        assert!(find_all_orfs("ATGAAA").is_empty());
        assert!(find_all_orfs("").is_empty());
    }

    #[test]
    fn test_orf_shape_properties() {
        let seq = "TTATGCATGAAATGACCCATGTAGGATGA";
        let orfs = find_all_orfs(seq);
        assert_eq!(orfs.len(), 4);
        for orf in orfs {
            assert!(orf.sequence.starts_with("ATG"));
            assert_eq!((orf.end - orf.start) % 3, 0);
            let stop = &orf.sequence[orf.sequence.len() - 3..];
            assert!(matches!(stop, "TAA" | "TAG" | "TGA"));
            assert_eq!(&seq[orf.start..orf.end], orf.sequence);
        }
    }

    #[test]
    fn test_finders_idempotent() {
        let seq = "GGGATGAAATAGATGCCCTGACCC";
        assert_eq!(find_first_orf(seq), find_first_orf(seq));
        assert_eq!(find_all_orfs(seq), find_all_orfs(seq));
    }
}
