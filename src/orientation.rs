//! Orientation classification of a split contig alignment pair
//!

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use crate::alignment_record::Strand;
use crate::candidate_variant::OrientationCategory;
use crate::local_alignment::LocalAlignment;

/// Orientation category of a contig alignment pair, together with the breakpoint positions implied
/// by that category
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PairOrientation {
    pub category: OrientationCategory,
    pub left_breakpoint: i64,
    pub right_breakpoint: i64,
}

/// Summary rearrangement type implied by an orientation category
#[derive(AsRefStr, Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum MutationType {
    #[serde(rename = "DEL/ITX")]
    #[strum(serialize = "DEL/ITX")]
    Deletion,
    #[serde(rename = "DUP/INS/ITX")]
    #[strum(serialize = "DUP/INS/ITX")]
    Duplication,
    #[serde(rename = "INV/ITX")]
    #[strum(serialize = "INV/ITX")]
    Inversion,
    #[serde(rename = "CTX")]
    #[strum(serialize = "CTX")]
    Translocation,
}

impl MutationType {
    pub fn new(category: OrientationCategory, is_translocation: bool) -> Self {
        if is_translocation {
            return MutationType::Translocation;
        }
        match category {
            OrientationCategory::One => MutationType::Deletion,
            OrientationCategory::Two => MutationType::Duplication,
            OrientationCategory::Three | OrientationCategory::Four => MutationType::Inversion,
        }
    }
}

/// Put an alignment pair into canonical (left, right) order
///
/// Alignments to the same reference are ordered by target start. Alignments to different
/// references keep the given order, unless only the second alignment maps to `left_reference`.
///
pub fn reorder_alignment_pair<'a>(
    a: &'a LocalAlignment,
    b: &'a LocalAlignment,
    left_reference: &str,
) -> (&'a LocalAlignment, &'a LocalAlignment) {
    let swap = if a.reference == b.reference {
        a.target_start > b.target_start
    } else {
        a.reference != left_reference && b.reference == left_reference
    };
    if swap { (b, a) } else { (a, b) }
}

/// Classify a canonically ordered alignment pair into one of the four orientation categories
///
/// Returns None if the pair has no consistent orientation, which occurs when the two segments start
/// at the same contig position, or start at the same position on the same reference.
///
pub fn classify_orientation(
    left: &LocalAlignment,
    right: &LocalAlignment,
) -> Option<PairOrientation> {
    if left.query_start == right.query_start {
        return None;
    }
    if left.reference == right.reference && left.target_start == right.target_start {
        return None;
    }

    let left_is_query_first = left.query_start < right.query_start;
    let left_is_fwd = left.strand == Strand::Fwd;

    let (category, left_breakpoint, right_breakpoint) = if left.strand == right.strand {
        if left_is_query_first != left_is_fwd {
            (OrientationCategory::Two, left.target_start, right.target_end)
        } else {
            (OrientationCategory::One, left.target_end, right.target_start)
        }
    } else if left_is_query_first == left_is_fwd {
        (OrientationCategory::Three, left.target_end, right.target_end)
    } else {
        (OrientationCategory::Four, left.target_start, right.target_start)
    };

    Some(PairOrientation {
        category,
        left_breakpoint,
        right_breakpoint,
    })
}

/// True if the contig must be reverse complemented to present the junction in canonical
/// orientation
///
/// * `left_strand` - strand of the left alignment after canonical reordering
///
pub fn needs_reverse_complement(category: OrientationCategory, left_strand: Strand) -> bool {
    match left_strand {
        Strand::Rev => category != OrientationCategory::Four,
        Strand::Fwd => category == OrientationCategory::Four,
    }
}
