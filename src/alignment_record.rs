//! Parsing of contig alignment records produced by the external local aligner (PSL format)
//!

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use simple_error::{SimpleResult, bail};

/// Number of tab-delimited fields in one PSL alignment line
const PSL_FIELD_COUNT: usize = 21;

/// Alignment strand of the contig relative to the reference
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Strand {
    #[serde(rename = "-")]
    Rev,
    #[serde(rename = "+")]
    Fwd,
}

impl Strand {
    pub fn from_psl_field(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Strand::Fwd),
            "-" => Some(Strand::Rev),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Strand::Fwd => '+',
            Strand::Rev => '-',
        }
    }
}

impl fmt::Debug for Strand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Object to directly represent one line of PSL aligner output
///
/// All coordinates are kept exactly as written by the aligner: zero-indexed, half-closed, and for
/// the block query starts of a reverse strand alignment, relative to the reverse complemented
/// query.
///
#[derive(Clone, Debug, PartialEq)]
pub struct AlignmentRecord {
    pub match_count: u32,
    pub mismatch_count: u32,
    pub rep_match_count: u32,
    pub n_count: u32,
    pub query_gap_count: u32,
    pub query_gap_bases: u32,
    pub target_gap_count: u32,
    pub target_gap_bases: u32,
    pub strand: Strand,
    pub query_name: String,
    pub query_size: i64,
    pub query_start: i64,
    pub query_end: i64,
    pub target_name: String,
    pub target_size: i64,
    pub target_start: i64,
    pub target_end: i64,
    pub block_sizes: Vec<i64>,
    pub query_block_starts: Vec<i64>,
    pub target_block_starts: Vec<i64>,
}

impl AlignmentRecord {
    /// Alignment score used to rank the records of one contig
    ///
    /// Each gap open is penalized once, independent of the gap length.
    ///
    pub fn score(&self) -> i64 {
        self.match_count as i64
            - self.mismatch_count as i64
            - self.target_gap_count as i64
            - self.query_gap_count as i64
    }

    pub fn block_count(&self) -> usize {
        self.block_sizes.len()
    }
}

/// Standard record ordering, where the best scoring record for each contig is sorted last
///
/// Score ties are broken by strand (forward first), then by reverse lexicographic target name, and
/// finally by reverse match count.
///
pub fn compare_alignment_records(a: &AlignmentRecord, b: &AlignmentRecord) -> Ordering {
    a.query_name
        .cmp(&b.query_name)
        .then_with(|| a.score().cmp(&b.score()))
        .then_with(|| a.strand.cmp(&b.strand))
        .then_with(|| b.target_name.cmp(&a.target_name))
        .then_with(|| b.match_count.cmp(&a.match_count))
}

/// Sort alignment records so that the best record comes first
///
pub fn rank_alignment_records(records: &mut [&AlignmentRecord]) {
    records.sort_by(|a, b| compare_alignment_records(b, a));
}

fn parse_field<T: FromStr>(fields: &[&str], index: usize, label: &str) -> SimpleResult<T> {
    match fields[index].trim().parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => bail!("non-numeric {label} value '{}'", fields[index]),
    }
}

/// Parse a comma-terminated integer list such as "90,174,"
fn parse_list_field(fields: &[&str], index: usize, label: &str) -> SimpleResult<Vec<i64>> {
    let mut values = Vec::new();
    for val in fields[index].trim().split_terminator(',') {
        match val.trim().parse::<i64>() {
            Ok(x) => values.push(x),
            Err(_) => bail!("non-numeric {label} entry '{val}'"),
        }
    }
    Ok(values)
}

fn parse_psl_line_impl(line: &str) -> SimpleResult<AlignmentRecord> {
    let line = line.trim_end_matches(['\n', '\r']);
    let mut fields = line.split('\t').collect::<Vec<_>>();

    // The aligner terminates each line with a tab in some output modes:
    if fields.len() == PSL_FIELD_COUNT + 1 && fields[PSL_FIELD_COUNT].is_empty() {
        fields.pop();
    }
    if fields.len() != PSL_FIELD_COUNT {
        bail!(
            "expected {PSL_FIELD_COUNT} fields but found {}",
            fields.len()
        );
    }

    let strand = match Strand::from_psl_field(fields[8]) {
        Some(x) => x,
        None => bail!("unrecognized strand '{}'", fields[8]),
    };

    let record = AlignmentRecord {
        match_count: parse_field(&fields, 0, "match count")?,
        mismatch_count: parse_field(&fields, 1, "mismatch count")?,
        rep_match_count: parse_field(&fields, 2, "repeat match count")?,
        n_count: parse_field(&fields, 3, "N count")?,
        query_gap_count: parse_field(&fields, 4, "query gap count")?,
        query_gap_bases: parse_field(&fields, 5, "query gap bases")?,
        target_gap_count: parse_field(&fields, 6, "target gap count")?,
        target_gap_bases: parse_field(&fields, 7, "target gap bases")?,
        strand,
        query_name: fields[9].to_string(),
        query_size: parse_field(&fields, 10, "query size")?,
        query_start: parse_field(&fields, 11, "query start")?,
        query_end: parse_field(&fields, 12, "query end")?,
        target_name: fields[13].to_string(),
        target_size: parse_field(&fields, 14, "target size")?,
        target_start: parse_field(&fields, 15, "target start")?,
        target_end: parse_field(&fields, 16, "target end")?,
        block_sizes: parse_list_field(&fields, 18, "block size")?,
        query_block_starts: parse_list_field(&fields, 19, "query block start")?,
        target_block_starts: parse_list_field(&fields, 20, "target block start")?,
    };

    let block_count = parse_field::<usize>(&fields, 17, "block count")?;
    if block_count == 0 {
        bail!("block count is zero");
    }
    if record.block_sizes.len() != block_count
        || record.query_block_starts.len() != block_count
        || record.target_block_starts.len() != block_count
    {
        bail!(
            "block count {block_count} does not match block list lengths ({},{},{})",
            record.block_sizes.len(),
            record.query_block_starts.len(),
            record.target_block_starts.len()
        );
    }
    if record.block_sizes.iter().any(|&x| x <= 0) {
        bail!("non-positive block size");
    }
    if record.block_sizes.iter().any(|&x| x > record.query_size) {
        bail!("block size exceeds query size {}", record.query_size);
    }
    let total_block_size = record
        .block_sizes
        .iter()
        .try_fold(0i64, |sum, &x| sum.checked_add(x));
    if total_block_size.is_none_or(|x| x > record.query_size) {
        bail!("total block size exceeds query size {}", record.query_size);
    }

    // Block ends must be representable, and query blocks must lie within the query:
    for ((&block_size, &query_block_start), &target_block_start) in record
        .block_sizes
        .iter()
        .zip(record.query_block_starts.iter())
        .zip(record.target_block_starts.iter())
    {
        if query_block_start < 0 || target_block_start < 0 {
            bail!("negative block start");
        }
        if query_block_start + block_size > record.query_size {
            bail!("query block extends past query size {}", record.query_size);
        }
        if target_block_start.checked_add(block_size).is_none() {
            bail!("target block end out of range");
        }
    }

    if record.query_start < 0 || record.target_start < 0 {
        bail!("negative alignment start");
    }
    if record.query_start > record.query_end || record.target_start > record.target_end {
        bail!("alignment start exceeds alignment end");
    }
    if record.query_end > record.query_size || record.target_end > record.target_size {
        bail!("alignment end exceeds sequence size");
    }

    Ok(record)
}

/// Parse one line of PSL aligner output into an alignment record
///
/// Any malformed line returns an error rather than panicking, so that client code can skip the
/// record and continue with the remaining alignments of the same contig.
///
pub fn parse_psl_line(line: &str) -> SimpleResult<AlignmentRecord> {
    match parse_psl_line_impl(line) {
        Ok(x) => Ok(x),
        Err(e) => bail!("Malformed alignment record ({e}): '{}'", line.trim_end()),
    }
}
