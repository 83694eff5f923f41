//! Breakpoint resolution for a single split contig
//!
//! Resolution moves through the following steps, any of which may end in rejection:
//!
//! 1. Expand all alignment records into local alignments
//! 2. Select the alignment pair representing the two sides of the junction
//! 3. Reorder the pair into canonical left/right order
//! 4. Filter the pair on contig position and length
//! 5. Classify the pair orientation
//! 6. Extract junction sequence evidence
//! 7. Finalize the resolved breakpoint and its support status
//!
//! Resolution is deterministic and has no side effects, so contigs can be resolved concurrently.
//!

mod select_pair;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumCount, EnumIter};

use self::select_pair::{expand_alignment_records, select_alignment_pair};
use crate::alignment_record::AlignmentRecord;
use crate::breakpoint_filters::{
    get_match, passes_query_length_filter, passes_query_position_filter,
};
use crate::candidate_variant::{CandidateVariant, ConfidenceTier, OrientationCategory};
use crate::junction_sequence::{JunctionSequences, resolve_junction_sequences};
use crate::local_alignment::LocalAlignment;
use crate::orientation::{
    MutationType, PairOrientation, classify_orientation, needs_reverse_complement,
    reorder_alignment_pair,
};

/// Tunable thresholds used throughout breakpoint resolution
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ResolverSettings {
    /// Breakpoint proximity tolerance for the high confidence tier
    pub high_tier_tolerance: i64,

    /// Breakpoint proximity tolerance for the medium confidence tier
    pub medium_tier_tolerance: i64,

    /// Minimum contig length covered by each side of the junction, also used as the minimum
    /// contig length left uncovered by each side
    pub min_segment_len: i64,

    /// Maximum gap or overlap between the two sides of the junction in contig coordinates
    ///
    /// The default of 50 admits overlaps of up to 50 bases, matching the established contig
    /// adjacency rule, so moderately overlapping segments still pass.
    pub query_adjacency_buffer: i64,

    /// Minimum block size for the blocks of one gapped record to be used as both sides of the
    /// junction
    pub min_block_size: i64,

    /// Breakpoint agreement required for split read support of a high confidence or soft-clipped
    /// candidate
    pub strict_support_tolerance: i64,

    /// Breakpoint agreement required for split read support of all other candidates
    pub relaxed_support_tolerance: i64,

    pub max_microhomology_len: usize,

    /// Only consider this many of the top scoring alignment records for each contig
    pub max_alignment_records: Option<usize>,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        use crate::cli::defaults::*;

        Self {
            high_tier_tolerance: HIGH_TIER_TOLERANCE,
            medium_tier_tolerance: MEDIUM_TIER_TOLERANCE,
            min_segment_len: MIN_SEGMENT_LEN,
            query_adjacency_buffer: QUERY_ADJACENCY_BUFFER,
            min_block_size: MIN_BLOCK_SIZE,
            strict_support_tolerance: STRICT_SUPPORT_TOLERANCE,
            relaxed_support_tolerance: RELAXED_SUPPORT_TOLERANCE,
            max_microhomology_len: MAX_MICROHOMOLOGY_LEN,
            max_alignment_records: None,
        }
    }
}

impl ResolverSettings {
    /// Breakpoint proximity tolerance for each confidence tier
    ///
    /// Single-clip breakpoints are not checked for proximity, so have no tolerance limit.
    ///
    pub fn get_tier_tolerance(&self, tier: ConfidenceTier) -> Option<i64> {
        match tier {
            ConfidenceTier::High => Some(self.high_tier_tolerance),
            ConfidenceTier::Medium => Some(self.medium_tier_tolerance),
            ConfidenceTier::SingleClip => None,
        }
    }
}

/// Reasons that a contig fails to resolve into a breakpoint
#[derive(
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Deserialize,
    EnumCount,
    EnumIter,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub enum RejectionReason {
    /// No alignment pair passed selection at any confidence tier
    NoSupportingAlignment,
    QueryPositionFilter,
    QueryLengthFilter,
    InconsistentOrientation,
    /// The observed orientation differs from the orientation of the candidate variant
    OrientationMismatch,
}

/// A split contig junction resolved to a pair of breakpoints
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ResolvedBreakpoint {
    pub name: String,
    pub left: LocalAlignment,
    pub right: LocalAlignment,
    pub orientation: OrientationCategory,
    pub mutation_type: MutationType,
    pub left_breakpoint: i64,
    pub right_breakpoint: i64,

    /// True if the contig is reverse complemented to present the junction in its canonical
    /// orientation
    pub reverse_complemented: bool,

    /// Confidence tier at which the alignment pair passed breakpoint proximity filtering
    pub tier_used: ConfidenceTier,

    #[serde(flatten)]
    pub junction: JunctionSequences,

    pub is_supported: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum BreakpointResolution {
    Resolved(ResolvedBreakpoint),
    Rejected(RejectionReason),
}

/// Display name of a resolved split contig
///
/// This name is used to label the contig in all downstream output, so the format must remain
/// stable.
///
pub fn get_split_contig_name(
    left_reference: &str,
    left_breakpoint: i64,
    right_reference: &str,
    right_breakpoint: i64,
    orientation: OrientationCategory,
    reverse_complemented: bool,
) -> String {
    format!(
        "splitcon_{left_reference}_{left_breakpoint}_{right_reference}_{right_breakpoint}_{orientation}_{reverse_complemented}"
    )
}

/// Check that the resolved breakpoints agree with the candidate variant, in either left/right order
///
/// Single-clip candidates only require that the references agree.
///
fn is_split_read_consistent(
    settings: &ResolverSettings,
    sv: &CandidateVariant,
    left_reference: &str,
    right_reference: &str,
    orientation: &PairOrientation,
) -> bool {
    let same_order =
        left_reference == sv.left_reference && right_reference == sv.right_reference;
    let swapped_order =
        left_reference == sv.right_reference && right_reference == sv.left_reference;

    if sv.tier == ConfidenceTier::SingleClip {
        return same_order || swapped_order;
    }

    let tolerance = if sv.tier == ConfidenceTier::High || sv.has_soft_clip_evidence {
        settings.strict_support_tolerance
    } else {
        settings.relaxed_support_tolerance
    };

    let is_match = |left_bp: i64, right_bp: i64| {
        get_match(orientation.left_breakpoint, left_bp, tolerance)
            && get_match(orientation.right_breakpoint, right_bp, tolerance)
    };
    (same_order && is_match(sv.left_breakpoint, sv.right_breakpoint))
        || (swapped_order && is_match(sv.right_breakpoint, sv.left_breakpoint))
}

/// Resolve the junction of a split contig into a refined breakpoint pair
///
/// # Arguments
///
/// * `contig` - the assembled contig sequence
/// * `sv` - the breakpoint hypothesis the contig was assembled for
/// * `records` - all alignments of the contig, in any order
///
pub fn resolve_breakpoint(
    settings: &ResolverSettings,
    contig: &[u8],
    sv: &CandidateVariant,
    records: &[AlignmentRecord],
) -> BreakpointResolution {
    use BreakpointResolution::Rejected;

    let contig_len = contig.len() as i64;

    let segments = expand_alignment_records(settings, sv, records);

    let Some(pair) = select_alignment_pair(settings, sv, contig_len, &segments) else {
        return Rejected(RejectionReason::NoSupportingAlignment);
    };

    let (left, right) =
        reorder_alignment_pair(&pair.a.alignment, &pair.b.alignment, &sv.left_reference);

    if !passes_query_position_filter(left, right, settings.query_adjacency_buffer) {
        return Rejected(RejectionReason::QueryPositionFilter);
    }
    if !passes_query_length_filter(left, right, contig_len, settings.min_segment_len) {
        return Rejected(RejectionReason::QueryLengthFilter);
    }

    let Some(orientation) = classify_orientation(left, right) else {
        return Rejected(RejectionReason::InconsistentOrientation);
    };
    if sv.orientation.is_some_and(|x| x != orientation.category) {
        return Rejected(RejectionReason::OrientationMismatch);
    }

    let reverse_complemented = needs_reverse_complement(orientation.category, left.strand);

    // The two blocks of a single gapped record have already been placed by the aligner, so
    // microhomology is only searched between separate records.
    let find_microhomology = !pair.is_single_record();
    let junction = resolve_junction_sequences(
        contig,
        left,
        right,
        reverse_complemented,
        find_microhomology,
        settings.max_microhomology_len,
    );

    let is_supported = pair.tier <= sv.tier
        && is_split_read_consistent(settings, sv, &left.reference, &right.reference, &orientation);

    let name = get_split_contig_name(
        &left.reference,
        orientation.left_breakpoint,
        &right.reference,
        orientation.right_breakpoint,
        orientation.category,
        reverse_complemented,
    );

    BreakpointResolution::Resolved(ResolvedBreakpoint {
        name,
        left: left.clone(),
        right: right.clone(),
        orientation: orientation.category,
        mutation_type: MutationType::new(orientation.category, left.reference != right.reference),
        left_breakpoint: orientation.left_breakpoint,
        right_breakpoint: orientation.right_breakpoint,
        reverse_complemented,
        tier_used: pair.tier,
        junction,
        is_supported,
    })
}
