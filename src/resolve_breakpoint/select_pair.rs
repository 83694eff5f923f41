//! Candidate expansion and alignment pair selection
//!

use std::cmp::Reverse;

use itertools::Itertools;
use strum::IntoEnumIterator;

use super::ResolverSettings;
use crate::alignment_record::{AlignmentRecord, rank_alignment_records};
use crate::breakpoint_filters::{
    passes_block_size_filter, passes_breakpoint_filter, passes_pair_breakpoint_filter,
    passes_query_length_filter, passes_query_position_filter, passes_size_filter,
};
use crate::candidate_variant::{CandidateVariant, ConfidenceTier};
use crate::local_alignment::{LocalAlignment, split_alignment_record};
use crate::orientation::{classify_orientation, reorder_alignment_pair};

/// One local alignment tagged with the alignment record it was taken from
pub(super) struct CandidateSegment<'a> {
    pub record: &'a AlignmentRecord,

    /// Rank of the source record, with the best record at rank 0
    pub record_rank: usize,

    pub alignment: LocalAlignment,
}

/// Get all local alignments for a contig that could support the candidate variant
///
/// Records to other references are ignored. The remaining records are ranked best first, and only
/// the top `max_alignment_records` are expanded, if set.
///
pub(super) fn expand_alignment_records<'a>(
    settings: &ResolverSettings,
    sv: &CandidateVariant,
    records: &'a [AlignmentRecord],
) -> Vec<CandidateSegment<'a>> {
    let mut ranked_records = records
        .iter()
        .filter(|x| sv.is_candidate_reference(&x.target_name))
        .collect::<Vec<_>>();
    rank_alignment_records(&mut ranked_records);
    if let Some(max_alignment_records) = settings.max_alignment_records {
        ranked_records.truncate(max_alignment_records);
    }

    ranked_records
        .into_iter()
        .enumerate()
        .flat_map(|(record_rank, record)| {
            split_alignment_record(record)
                .into_iter()
                .map(move |alignment| CandidateSegment {
                    record,
                    record_rank,
                    alignment,
                })
        })
        .collect()
}

/// The alignment pair chosen to represent the two sides of the junction
pub(super) struct SelectedPair<'a, 'b> {
    pub a: &'b CandidateSegment<'a>,
    pub b: &'b CandidateSegment<'a>,

    /// Tightest confidence tier at which any pair passed breakpoint proximity filtering
    pub tier: ConfidenceTier,
}

impl SelectedPair<'_, '_> {
    pub fn is_single_record(&self) -> bool {
        self.a.record_rank == self.b.record_rank
    }
}

/// Ordering key for admissible pairs, higher is better
type PairRank = (bool, bool, i64, i64, Reverse<i64>);

/// Distance between two segments in contig coordinates, as either a gap or an overlap
fn get_query_junction_distance(a: &LocalAlignment, b: &LocalAlignment) -> i64 {
    let (earlier, later) = if a.query_start <= b.query_start {
        (a, b)
    } else {
        (b, a)
    };
    (later.query_start - earlier.query_end - 1).abs()
}

/// Test whether a segment pair can be considered as the two sides of the candidate junction at
/// the given breakpoint proximity tolerance
fn is_admissible_pair(
    settings: &ResolverSettings,
    sv: &CandidateVariant,
    contig_len: i64,
    tolerance: Option<i64>,
    a: &CandidateSegment,
    b: &CandidateSegment,
) -> bool {
    if a.record_rank == b.record_rank
        && !passes_block_size_filter(a.record, settings.min_block_size)
    {
        return false;
    }

    for segment in [a, b] {
        if !passes_size_filter(&segment.alignment, contig_len, settings.min_segment_len)
            || !passes_breakpoint_filter(&segment.alignment, sv, tolerance)
        {
            return false;
        }
    }

    if !passes_pair_breakpoint_filter(&a.alignment, &b.alignment, sv, tolerance) {
        return false;
    }

    // Unless the breakpoint estimate is one-sided, a translocation must be supported from both
    // references:
    let is_one_sided = sv.tier == ConfidenceTier::SingleClip;
    if sv.is_translocation() && !is_one_sided && a.alignment.reference == b.alignment.reference {
        return false;
    }

    true
}

fn get_pair_rank(
    settings: &ResolverSettings,
    sv: &CandidateVariant,
    contig_len: i64,
    a: &CandidateSegment,
    b: &CandidateSegment,
) -> PairRank {
    let (left, right) = reorder_alignment_pair(&a.alignment, &b.alignment, &sv.left_reference);

    let passes_pair_filters =
        passes_query_position_filter(left, right, settings.query_adjacency_buffer)
            && passes_query_length_filter(left, right, contig_len, settings.min_segment_len);

    let is_category_match = match classify_orientation(left, right) {
        Some(orientation) => sv.orientation.is_none_or(|x| x == orientation.category),
        None => false,
    };

    let (a_score, b_score) = (a.record.score(), b.record.score());
    (
        passes_pair_filters,
        is_category_match,
        a_score.max(b_score),
        a_score.min(b_score),
        Reverse(get_query_junction_distance(left, right)),
    )
}

/// Select the segment pair which best represents the candidate junction
///
/// Breakpoint proximity tolerance is widened one confidence tier at a time until at least one
/// admissible pair is found. Among the admissible pairs at that tier, preference is given to pairs
/// which pass all pairwise filters, then to pairs matching the expected orientation, then to pairs
/// from the highest scoring records. Remaining ties go to the first pair enumerated.
///
/// Returns None if no pair is admissible at any tier.
///
pub(super) fn select_alignment_pair<'a, 'b>(
    settings: &ResolverSettings,
    sv: &CandidateVariant,
    contig_len: i64,
    segments: &'b [CandidateSegment<'a>],
) -> Option<SelectedPair<'a, 'b>> {
    for tier in ConfidenceTier::iter() {
        let tolerance = settings.get_tier_tolerance(tier);

        let mut best: Option<(PairRank, &CandidateSegment, &CandidateSegment)> = None;
        for (a, b) in segments.iter().tuple_combinations() {
            if !is_admissible_pair(settings, sv, contig_len, tolerance, a, b) {
                continue;
            }
            let rank = get_pair_rank(settings, sv, contig_len, a, b);
            if best.as_ref().is_none_or(|(best_rank, _, _)| rank > *best_rank) {
                best = Some((rank, a, b));
            }
        }

        if let Some((_, a, b)) = best {
            return Some(SelectedPair { a, b, tier });
        }
    }
    None
}
