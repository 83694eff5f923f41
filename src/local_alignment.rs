use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alignment_record::{AlignmentRecord, Strand};

/// A single contiguous mapped segment of a contig
///
/// All coordinates are one-indexed and fully closed. Query coordinates are always given relative to
/// the forward strand of the contig, irrespective of the alignment strand.
///
#[derive(Clone, Eq, PartialEq, Deserialize, Serialize)]
pub struct LocalAlignment {
    pub reference: String,
    pub strand: Strand,
    pub target_start: i64,
    pub target_end: i64,
    pub query_start: i64,
    pub query_end: i64,
}

impl LocalAlignment {
    pub fn new(
        reference: &str,
        strand: Strand,
        target_start: i64,
        target_end: i64,
        query_start: i64,
        query_end: i64,
    ) -> Self {
        Self {
            reference: reference.to_string(),
            strand,
            target_start,
            target_end,
            query_start,
            query_end,
        }
    }

    /// Length of the contig segment covered by this alignment
    ///
    /// This follows the insert-size convention of the contig aligner output, so that an alignment
    /// over query positions 1-19 has a length of 18.
    ///
    pub fn query_insert_size(&self) -> i64 {
        self.query_end - self.query_start
    }

    /// True if the query interval of this alignment lies entirely within the query interval of
    /// `other`
    pub fn is_query_contained_in(&self, other: &LocalAlignment) -> bool {
        self.query_start >= other.query_start && self.query_end <= other.query_end
    }
}

impl fmt::Debug for LocalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}:{}-{} ({}) query:{}-{}",
            self.reference,
            self.target_start,
            self.target_end,
            self.strand,
            self.query_start,
            self.query_end
        )
    }
}

/// Convert one block of a multi-block record into a local alignment
///
/// Reverse strand block query starts are reported by the aligner relative to the reverse
/// complemented contig, so these are translated back to forward contig coordinates here.
///
fn get_block_local_alignment(record: &AlignmentRecord, block_index: usize) -> LocalAlignment {
    let block_size = record.block_sizes[block_index];
    let query_block_start = record.query_block_starts[block_index];
    let target_start = record.target_block_starts[block_index] + 1;

    let query_start = match record.strand {
        Strand::Fwd => query_block_start + 1,
        Strand::Rev => record.query_size - query_block_start - block_size + 1,
    };

    LocalAlignment::new(
        &record.target_name,
        record.strand,
        target_start,
        target_start + block_size - 1,
        query_start,
        query_start + block_size - 1,
    )
}

/// Split an alignment record into its constituent local alignments
///
/// A single block record translates directly to one local alignment using the record-level
/// coordinates. Multi-block records produce one local alignment per block, in the block order
/// given by the aligner.
///
pub fn split_alignment_record(record: &AlignmentRecord) -> Vec<LocalAlignment> {
    if record.block_count() == 1 {
        vec![LocalAlignment::new(
            &record.target_name,
            record.strand,
            record.target_start + 1,
            record.target_end,
            record.query_start + 1,
            record.query_end,
        )]
    } else {
        (0..record.block_count())
            .map(|block_index| get_block_local_alignment(record, block_index))
            .collect()
    }
}
