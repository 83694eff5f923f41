//! Accept/reject predicates applied to contig alignments during breakpoint resolution
//!
//! All filters are pure functions of their arguments. Thresholds are supplied by the caller, see
//! `ResolverSettings` for the default values.
//!

use crate::alignment_record::AlignmentRecord;
use crate::candidate_variant::CandidateVariant;
use crate::local_alignment::LocalAlignment;

/// True if `pos` is within `tolerance` bases of `breakpoint`
///
pub fn get_match(pos: i64, breakpoint: i64, tolerance: i64) -> bool {
    (pos - breakpoint).abs() <= tolerance
}

/// True if either end of the alignment is within `tolerance` of `breakpoint`
fn is_near_breakpoint(alignment: &LocalAlignment, breakpoint: i64, tolerance: i64) -> bool {
    get_match(alignment.target_start, breakpoint, tolerance)
        || get_match(alignment.target_end, breakpoint, tolerance)
}

/// Single alignment form of the breakpoint proximity filter
///
/// The alignment passes if either of its ends is close to either candidate breakpoint.
///
/// * `tolerance` - maximum distance to a breakpoint, or None to accept any alignment
///
pub fn passes_breakpoint_filter(
    alignment: &LocalAlignment,
    sv: &CandidateVariant,
    tolerance: Option<i64>,
) -> bool {
    let Some(tolerance) = tolerance else {
        return true;
    };
    is_near_breakpoint(alignment, sv.left_breakpoint, tolerance)
        || is_near_breakpoint(alignment, sv.right_breakpoint, tolerance)
}

/// Pairwise form of the breakpoint proximity filter
///
/// The pair passes if one alignment is close to the left candidate breakpoint while the other is
/// close to the right candidate breakpoint, in either assignment.
///
/// * `tolerance` - maximum distance to a breakpoint, or None to accept any pair
///
pub fn passes_pair_breakpoint_filter(
    a: &LocalAlignment,
    b: &LocalAlignment,
    sv: &CandidateVariant,
    tolerance: Option<i64>,
) -> bool {
    let Some(tolerance) = tolerance else {
        return true;
    };
    let (lhs, rhs) = (sv.left_breakpoint, sv.right_breakpoint);
    (is_near_breakpoint(a, lhs, tolerance) && is_near_breakpoint(b, rhs, tolerance))
        || (is_near_breakpoint(a, rhs, tolerance) && is_near_breakpoint(b, lhs, tolerance))
}

/// True if `other` abuts the query interval [query_start, query_end] on either side, allowing a gap
/// or overlap of up to `buffer` bases at the junction
///
fn is_query_adjacent(
    query_start: i64,
    query_end: i64,
    other: &LocalAlignment,
    buffer: i64,
) -> bool {
    let other_precedes =
        query_end > other.query_start && (other.query_end - query_start).abs() <= buffer;
    let other_follows =
        query_start < other.query_end && (other.query_start - query_end).abs() <= buffer;
    other_precedes || other_follows
}

/// Query position filter for an alignment pair
///
/// Two segments of a split contig should be adjacent in the contig. The filter fails for pairs
/// separated by a large query gap and for pairs that substantially overlap, since these describe
/// the same contig region rather than the two sides of a junction.
///
pub fn passes_query_position_filter(a: &LocalAlignment, b: &LocalAlignment, buffer: i64) -> bool {
    is_query_adjacent(a.query_start, a.query_end, b, buffer)
        && is_query_adjacent(b.query_start, b.query_end, a, buffer)
}

/// True if the segment leaves room for a partner alignment of at least `min_segment_len` in a contig
/// of length `query_len`, and is itself at least that long
fn is_acceptable_segment_size(insert_size: i64, query_len: i64, min_segment_len: i64) -> bool {
    insert_size >= min_segment_len && insert_size <= query_len - min_segment_len
}

/// Query length filter for an alignment pair
///
/// Each alignment must pass the size limits of [`passes_size_filter`], and neither query interval
/// may be contained in the other.
///
pub fn passes_query_length_filter(
    a: &LocalAlignment,
    b: &LocalAlignment,
    query_len: i64,
    min_segment_len: i64,
) -> bool {
    if !passes_size_filter(a, query_len, min_segment_len)
        || !passes_size_filter(b, query_len, min_segment_len)
    {
        return false;
    }
    !(a.is_query_contained_in(b) || b.is_query_contained_in(a))
}

/// Size filter for a single alignment
///
/// Short alignments are non-specific, and alignments covering nearly the whole contig leave no room
/// for the other side of the junction.
///
pub fn passes_size_filter(
    alignment: &LocalAlignment,
    query_len: i64,
    min_segment_len: i64,
) -> bool {
    is_acceptable_segment_size(alignment.query_insert_size(), query_len, min_segment_len)
}

/// Fragmentation filter for a gapped alignment record
///
/// Determines whether the blocks of a single record can be used as the two sides of the junction.
/// At least two blocks must be longer than `min_block_size`, and for records with more than two
/// blocks, all non-terminal blocks must be longer than `min_block_size` as well.
///
pub fn passes_block_size_filter(record: &AlignmentRecord, min_block_size: i64) -> bool {
    let block_count = record.block_count();
    if block_count < 2 {
        return false;
    }

    let large_block_count = record
        .block_sizes
        .iter()
        .filter(|&&x| x > min_block_size)
        .count();
    if large_block_count < 2 {
        return false;
    }

    record.block_sizes[1..block_count - 1]
        .iter()
        .all(|&x| x > min_block_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment_record::{Strand, parse_psl_line};
    use crate::candidate_variant::{ConfidenceTier, OrientationCategory};

    const TOLERANCE: i64 = 50;
    const MIN_SEGMENT_LEN: i64 = 20;
    const QUERY_BUFFER: i64 = 50;

    fn get_test_sv(tier: ConfidenceTier) -> CandidateVariant {
        CandidateVariant::new(
            "chr10",
            "chr10",
            89700299,
            89712341,
            Some(OrientationCategory::One),
            tier,
        )
    }

    fn get_test_pair() -> (LocalAlignment, LocalAlignment) {
        (
            LocalAlignment::new("chr10", Strand::Fwd, 89700210, 89700299, 1, 90),
            LocalAlignment::new("chr10", Strand::Fwd, 89712341, 89712514, 109, 282),
        )
    }

    #[test]
    fn test_get_match() {
        assert!(get_match(100, 125, TOLERANCE));
        assert!(get_match(125, 100, TOLERANCE));
        assert!(get_match(100, 150, TOLERANCE));
        assert!(!get_match(100, 155, TOLERANCE));
    }

    #[test]
    fn test_passes_pair_breakpoint_filter() {
        let sv = get_test_sv(ConfidenceTier::High);
        let (left, right) = get_test_pair();
        assert!(passes_pair_breakpoint_filter(&left, &right, &sv, Some(TOLERANCE)));
        assert!(passes_pair_breakpoint_filter(&right, &left, &sv, Some(TOLERANCE)));

        // Same coordinates fail at a tight tolerance but pass when the tolerance is removed:
        let left = LocalAlignment::new("chr10", Strand::Fwd, 89700210, 89719299, 1, 90);
        let right = LocalAlignment::new("chr10", Strand::Rev, 89712341, 89712514, 109, 282);
        assert!(!passes_pair_breakpoint_filter(&left, &right, &sv, Some(TOLERANCE)));
        assert!(passes_pair_breakpoint_filter(&left, &right, &sv, None));
    }

    #[test]
    fn test_pair_breakpoint_filter_requires_both_breakpoints() {
        let sv = get_test_sv(ConfidenceTier::High);
        let (left, _) = get_test_pair();
        let other = LocalAlignment::new("chr10", Strand::Fwd, 89700100, 89700299, 91, 282);
        assert!(!passes_pair_breakpoint_filter(&left, &other, &sv, Some(TOLERANCE)));
    }

    #[test]
    fn test_passes_breakpoint_filter() {
        let sv = get_test_sv(ConfidenceTier::Medium);
        let (left, right) = get_test_pair();
        assert!(passes_breakpoint_filter(&left, &sv, Some(TOLERANCE)));
        assert!(passes_breakpoint_filter(&right, &sv, Some(TOLERANCE)));

        let distant = LocalAlignment::new("chr10", Strand::Fwd, 100, 200, 1, 200);
        assert!(!passes_breakpoint_filter(&distant, &sv, Some(TOLERANCE)));
        assert!(passes_breakpoint_filter(&distant, &sv, None));
    }

    #[test]
    fn test_passes_query_position_filter() {
        let (left, right) = get_test_pair();
        assert!(passes_query_position_filter(&right, &left, QUERY_BUFFER));

        let left = LocalAlignment::new("chr10", Strand::Fwd, 89700210, 89700299, 1, 200);
        let right = LocalAlignment::new("chr10", Strand::Fwd, 89712341, 89712514, 20, 232);
        assert!(!passes_query_position_filter(&left, &right, QUERY_BUFFER));

        let left = LocalAlignment::new("chr10", Strand::Fwd, 89700210, 89700299, 1, 120);
        let right = LocalAlignment::new("chr10", Strand::Fwd, 89712341, 89712514, 110, 232);
        assert!(passes_query_position_filter(&left, &right, QUERY_BUFFER));
        assert!(passes_query_position_filter(&right, &left, QUERY_BUFFER));
    }

    #[test]
    fn test_query_position_filter_rejects_distant_segments() {
        let left = LocalAlignment::new("chr10", Strand::Fwd, 89700210, 89700299, 1, 60);
        let right = LocalAlignment::new("chr10", Strand::Fwd, 89712341, 89712514, 150, 282);
        assert!(!passes_query_position_filter(&left, &right, QUERY_BUFFER));
    }

    #[test]
    fn test_passes_query_length_filter() {
        let (left, right) = get_test_pair();
        assert!(passes_query_length_filter(&right, &left, 282, MIN_SEGMENT_LEN));

        let short = LocalAlignment::new("chr10", Strand::Fwd, 89700210, 89700299, 1, 10);
        assert!(!passes_query_length_filter(&short, &right, 282, MIN_SEGMENT_LEN));

        let long = LocalAlignment::new("chr10", Strand::Fwd, 89700210, 89700299, 0, 290);
        assert!(!passes_query_length_filter(&long, &right, 282, MIN_SEGMENT_LEN));

        let container = LocalAlignment::new("chr10", Strand::Fwd, 89712341, 89712514, 1, 200);
        assert!(!passes_query_length_filter(&left, &container, 282, MIN_SEGMENT_LEN));
        assert!(!passes_query_length_filter(&container, &left, 282, MIN_SEGMENT_LEN));
    }

    #[test]
    fn test_passes_size_filter() {
        let a = LocalAlignment::new("chr10", Strand::Fwd, 2970200, 2970220, 1, 19);
        assert!(!passes_size_filter(&a, 282, MIN_SEGMENT_LEN));
        let a = LocalAlignment::new("chr10", Strand::Fwd, 2970200, 2970220, 1, 270);
        assert!(!passes_size_filter(&a, 282, MIN_SEGMENT_LEN));
        let a = LocalAlignment::new("chr10", Strand::Fwd, 2970200, 2970220, 1, 100);
        assert!(passes_size_filter(&a, 282, MIN_SEGMENT_LEN));
    }

    #[test]
    fn test_passes_block_size_filter() {
        let fragmented = parse_psl_line("187\t5\t0\t0\t2\t61\t1\t17709\t-\tcontig\t253\t0\t253\tchr22\t51304566\t25002854\t25020755\t3\t17,10,165,\t0,22,88,\t25002854,25002871,25020590,\t").unwrap();
        assert!(!passes_block_size_filter(&fragmented, 20));

        // Query size is large enough to hold both blocks, which parsing requires
        let gapped = parse_psl_line("187\t5\t0\t0\t2\t61\t1\t17709\t-\tcontig\t453\t0\t453\tchr22\t51304566\t25002854\t25020755\t2\t270,165,\t22,88,\t25002854,25020590,\t").unwrap();
        assert!(passes_block_size_filter(&gapped, 20));
    }

    #[test]
    fn test_block_size_filter_interior_blocks() {
        // Two large terminal blocks around a tiny interior block
        let record = parse_psl_line("225\t5\t0\t0\t0\t0\t2\t405222\t+\tcontig\t230\t0\t230\tchr15\t102531392\t23992556\t24398008\t3\t147,4,79,\t0,147,151,\t23992556,23993156,24397929,\t").unwrap();
        assert!(!passes_block_size_filter(&record, 20));

        let record = parse_psl_line("388\t8\t0\t0\t0\t0\t2\t405222\t+\tcontig\t400\t0\t400\tchr15\t102531392\t23992556\t24398008\t3\t78,171,147,\t0,78,249,\t23992556,23993156,24397929,\t").unwrap();
        assert!(passes_block_size_filter(&record, 20));

        let single = parse_psl_line("90\t0\t0\t0\t0\t0\t0\t0\t-\tcontig\t266\t0\t90\tchr3\t198022430\t24565105\t24565195\t1\t90,\t176,\t24565105,\t").unwrap();
        assert!(!passes_block_size_filter(&single, 20));
    }
}
