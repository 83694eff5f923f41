//! Readers for split contig candidates and their aligner output
//!

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::str::FromStr;

use camino::Utf8Path;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use simple_error::{SimpleResult, bail, try_with};

use crate::alignment_record::{AlignmentRecord, parse_psl_line};
use crate::candidate_variant::{CandidateVariant, ConfidenceTier, OrientationCategory};
use crate::seq_utils::is_supported_dna_seq;

/// Number of tab-delimited columns in the split contig input file
const SPLIT_CONTIG_FIELD_COUNT: usize = 9;

/// An assembled contig together with the breakpoint hypothesis it was assembled for
pub struct SplitContig {
    pub name: String,
    pub seq: Vec<u8>,
    pub sv: CandidateVariant,
}

fn parse_breakpoint(s: &str, label: &str) -> SimpleResult<i64> {
    match s.parse::<i64>() {
        Ok(x) if x > 0 => Ok(x),
        _ => bail!("invalid {label} breakpoint '{s}'"),
    }
}

fn parse_orientation(s: &str) -> SimpleResult<Option<OrientationCategory>> {
    if s == "." {
        return Ok(None);
    }
    match s.parse::<u8>().ok().and_then(OrientationCategory::from_index) {
        Some(x) => Ok(Some(x)),
        None => bail!("invalid orientation category '{s}'"),
    }
}

fn parse_soft_clip_flag(s: &str) -> SimpleResult<bool> {
    match s {
        "0" | "false" => Ok(false),
        "1" | "true" => Ok(true),
        _ => bail!("invalid soft-clip evidence flag '{s}'"),
    }
}

/// Parse one line of the split contig input file
///
/// Expected columns are:
/// contig_name, left_ref, left_bp, right_ref, right_bp, orientation, tier, soft_clip, sequence
///
fn parse_split_contig_line(line: &str) -> SimpleResult<SplitContig> {
    let fields = line.split('\t').map(|x| x.trim()).collect::<Vec<_>>();
    if fields.len() != SPLIT_CONTIG_FIELD_COUNT {
        bail!(
            "expected {SPLIT_CONTIG_FIELD_COUNT} fields but found {}",
            fields.len()
        );
    }

    let tier = match ConfidenceTier::from_str(fields[6]) {
        Ok(x) => x,
        Err(_) => bail!("invalid confidence tier '{}'", fields[6]),
    };

    let seq = fields[8].as_bytes().to_vec();
    if seq.is_empty() || !is_supported_dna_seq(&seq) {
        bail!("invalid contig sequence");
    }

    let mut sv = CandidateVariant::new(
        fields[1],
        fields[3],
        parse_breakpoint(fields[2], "left")?,
        parse_breakpoint(fields[4], "right")?,
        parse_orientation(fields[5])?,
        tier,
    );
    sv.has_soft_clip_evidence = parse_soft_clip_flag(fields[7])?;

    Ok(SplitContig {
        name: fields[0].to_string(),
        seq,
        sv,
    })
}

fn is_skipped_line(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Read all split contigs from a tab-delimited input file
///
pub fn read_split_contigs(filename: &Utf8Path) -> SimpleResult<Vec<SplitContig>> {
    info!("Reading split contigs from file: '{filename}'");

    let file = try_with!(
        File::open(filename),
        "Unable to open split contig file: '{filename}'"
    );

    let mut contigs = Vec::new();
    let mut contig_names = HashMap::new();
    for (line_index, line) in BufReader::new(file).lines().enumerate() {
        let line = try_with!(line, "Unable to read split contig file: '{filename}'");
        if is_skipped_line(&line) {
            continue;
        }
        let line_number = line_index + 1;
        let contig = match parse_split_contig_line(&line) {
            Ok(x) => x,
            Err(e) => bail!("Invalid split contig at line {line_number} of '{filename}': {e}"),
        };
        if let Some(previous_line_number) = contig_names.insert(contig.name.clone(), line_number) {
            bail!(
                "Duplicate contig name '{}' at lines {previous_line_number} and {line_number} of '{filename}'",
                contig.name
            );
        }
        contigs.push(contig);
    }

    info!("Finished reading {} split contigs", contigs.len());
    Ok(contigs)
}

#[derive(Default, Deserialize, Serialize)]
pub struct AlignmentInputStats {
    pub record_count: usize,
    pub malformed_record_count: usize,
    pub contig_count: usize,
}

/// All aligner output records, grouped by contig name
#[derive(Default)]
pub struct ContigAlignments {
    pub records: HashMap<String, Vec<AlignmentRecord>>,
    pub stats: AlignmentInputStats,
}

impl ContigAlignments {
    pub fn get_contig_records(&self, contig_name: &str) -> &[AlignmentRecord] {
        match self.records.get(contig_name) {
            Some(x) => x.as_slice(),
            None => &[],
        }
    }

    fn add_psl_line(&mut self, line: &str, line_number: usize) {
        match parse_psl_line(line) {
            Ok(record) => {
                self.stats.record_count += 1;
                self.records
                    .entry(record.query_name.clone())
                    .or_default()
                    .push(record);
            }
            Err(e) => {
                warn!("Skipping alignment at line {line_number}: {e}");
                self.stats.malformed_record_count += 1;
            }
        }
    }
}

/// True if the line is part of the optional PSL header, or is otherwise not an alignment record
fn is_psl_header_line(line: &str) -> bool {
    !line.starts_with(|c: char| c.is_ascii_digit())
}

fn read_contig_alignments_from_reader<R: BufRead>(
    reader: R,
    label: &str,
) -> SimpleResult<ContigAlignments> {
    let mut alignments = ContigAlignments::default();
    for (line_index, line) in reader.lines().enumerate() {
        let line = try_with!(line, "Unable to read alignment file: '{label}'");
        if is_skipped_line(&line) || is_psl_header_line(&line) {
            continue;
        }
        alignments.add_psl_line(&line, line_index + 1);
    }
    alignments.stats.contig_count = alignments.records.len();
    Ok(alignments)
}

/// Read all contig alignments from a PSL file
///
/// Malformed alignment lines are logged and skipped.
///
pub fn read_contig_alignments(filename: &Utf8Path) -> SimpleResult<ContigAlignments> {
    info!("Reading contig alignments from file: '{filename}'");

    let file = try_with!(
        File::open(filename),
        "Unable to open alignment file: '{filename}'"
    );
    let alignments = read_contig_alignments_from_reader(BufReader::new(file), filename.as_str())?;

    info!(
        "Finished reading {} alignment records for {} contigs",
        alignments.stats.record_count, alignments.stats.contig_count
    );
    if alignments.stats.malformed_record_count > 0 {
        warn!(
            "Skipped {} malformed alignment records",
            alignments.stats.malformed_record_count
        );
    }
    Ok(alignments)
}
