//! Extraction of microhomology and non-templated insertion sequence at a split contig junction
//!

use serde::{Deserialize, Serialize};

use crate::local_alignment::LocalAlignment;
use crate::seq_utils::rev_comp;

/// Result of a junction sequence search
///
/// 'Untested' and 'NotFound' are distinguished because downstream reporting treats an unchecked
/// junction differently from one that was checked and found empty.
///
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "status", content = "sequence", rename_all = "snake_case")]
pub enum JunctionEvidence {
    #[default]
    Untested,
    NotFound,
    Found(String),
}

impl JunctionEvidence {
    fn from_seq(seq: &[u8]) -> Self {
        if seq.is_empty() {
            JunctionEvidence::NotFound
        } else {
            JunctionEvidence::Found(String::from_utf8_lossy(seq).into_owned())
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, JunctionEvidence::Found(_))
    }

    pub fn found_seq(&self) -> Option<&str> {
        match self {
            JunctionEvidence::Found(x) => Some(x.as_str()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct JunctionSequences {
    pub non_template: JunctionEvidence,
    pub microhomology: JunctionEvidence,
}

/// Return the two alignments in contig order as (earlier, later)
fn order_by_query<'a>(
    a: &'a LocalAlignment,
    b: &'a LocalAlignment,
) -> (&'a LocalAlignment, &'a LocalAlignment) {
    if b.query_start < a.query_start {
        (b, a)
    } else {
        (a, b)
    }
}

/// Contig sequence covered by the alignment, or None if the alignment extends off the contig
fn get_segment_seq<'a>(contig: &'a [u8], alignment: &LocalAlignment) -> Option<&'a [u8]> {
    if alignment.query_start < 1 {
        return None;
    }
    contig.get((alignment.query_start - 1) as usize..alignment.query_end as usize)
}

/// Get the contig bases between two alignments which are not covered by either of them
///
/// * `reverse_complement` - if true the sequence is reported relative to the reverse complemented
///   contig
///
pub fn get_non_template_seq(
    contig: &[u8],
    a: &LocalAlignment,
    b: &LocalAlignment,
    reverse_complement: bool,
) -> JunctionEvidence {
    let (earlier, later) = order_by_query(a, b);
    if later.query_start - earlier.query_end <= 1 || earlier.query_end < 0 {
        return JunctionEvidence::NotFound;
    }
    let Some(gap_seq) = contig.get(earlier.query_end as usize..(later.query_start - 1) as usize)
    else {
        return JunctionEvidence::NotFound;
    };

    if reverse_complement {
        JunctionEvidence::from_seq(&rev_comp(gap_seq))
    } else {
        JunctionEvidence::from_seq(gap_seq)
    }
}

/// Find the longest suffix of `first` matching a prefix of `second`
///
/// The overlap is limited to `max_len` bases, and must be shorter than `second`.
///
pub fn find_junction_overlap<'a>(first: &[u8], second: &'a [u8], max_len: usize) -> &'a [u8] {
    let max_len = max_len
        .min(first.len())
        .min(second.len().saturating_sub(1));
    for overlap_len in (1..=max_len).rev() {
        let prefix = &second[..overlap_len];
        if first.ends_with(prefix) {
            return prefix;
        }
    }
    &second[..0]
}

/// Get the microhomology sequence shared by the two sides of the junction
///
/// Both segments are first put into the canonical contig orientation, after which the trailing
/// bases of the first segment are compared to the leading bases of the second.
///
pub fn get_microhomology_seq(
    contig: &[u8],
    a: &LocalAlignment,
    b: &LocalAlignment,
    reverse_complement: bool,
    max_len: usize,
) -> JunctionEvidence {
    let (earlier, later) = order_by_query(a, b);
    let (Some(earlier_seq), Some(later_seq)) =
        (get_segment_seq(contig, earlier), get_segment_seq(contig, later))
    else {
        return JunctionEvidence::NotFound;
    };

    if reverse_complement {
        let first = rev_comp(later_seq);
        let second = rev_comp(earlier_seq);
        JunctionEvidence::from_seq(find_junction_overlap(&first, &second, max_len))
    } else {
        JunctionEvidence::from_seq(find_junction_overlap(earlier_seq, later_seq, max_len))
    }
}

/// Resolve both junction sequence types for an alignment pair
///
/// Non-template sequence is always checked first. Microhomology is only checked if requested and no
/// non-template sequence is found; otherwise it is reported as not found when non-template sequence
/// is present, and untested when not requested.
///
pub fn resolve_junction_sequences(
    contig: &[u8],
    a: &LocalAlignment,
    b: &LocalAlignment,
    reverse_complement: bool,
    find_microhomology: bool,
    max_microhomology_len: usize,
) -> JunctionSequences {
    let non_template = get_non_template_seq(contig, a, b, reverse_complement);
    let microhomology = if non_template.is_found() {
        JunctionEvidence::NotFound
    } else if find_microhomology {
        get_microhomology_seq(contig, a, b, reverse_complement, max_microhomology_len)
    } else {
        JunctionEvidence::Untested
    };

    assert!(
        !(non_template.is_found() && microhomology.is_found()),
        "Junction has both microhomology and non-template sequence"
    );

    JunctionSequences {
        non_template,
        microhomology,
    }
}
