use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use const_format::concatcp;
use serde::{Deserialize, Serialize};
use simple_error::{SimpleResult, bail};
use unwrap::unwrap;

use super::defaults::*;
use super::utils::check_required_filename;
use crate::resolve::SETTINGS_FILENAME;
use crate::resolve_breakpoint::ResolverSettings;

#[derive(Args, Default, Deserialize, Serialize)]
pub struct ResolveSettings {
    /// Directory for all resolve command output (must not already exist)
    #[arg(long, value_name = "DIR", default_value = concatcp!(env!("CARGO_PKG_NAME"), "_resolve_output"))]
    pub output_dir: Utf8PathBuf,

    /// Split contig alignments in PSL format
    ///
    /// The PSL header is optional. Each record's query name must match a contig name in the split
    /// contig file.
    ///
    #[arg(long = "psl", value_name = "FILE")]
    pub psl_filename: String,

    /// Split contigs with their candidate breakpoints, in tab-delimited format
    ///
    /// Each line has the following columns: contig name, left reference, left breakpoint, right
    /// reference, right breakpoint, orientation category (1-4 or '.'), confidence tier (HIGH,
    /// MEDIUM or SINGLE_CLIP), soft-clip evidence flag (0 or 1) and contig sequence.
    ///
    #[arg(long = "contigs", value_name = "FILE")]
    pub contigs_filename: String,

    /// Breakpoint proximity tolerance for the high confidence tier
    #[arg(hide = true, long, default_value_t = HIGH_TIER_TOLERANCE)]
    pub high_tier_tolerance: i64,

    /// Breakpoint proximity tolerance for the medium confidence tier
    #[arg(hide = true, long, default_value_t = MEDIUM_TIER_TOLERANCE)]
    pub medium_tier_tolerance: i64,

    /// Minimum contig length which must be covered, and left uncovered, by each side of the
    /// junction
    #[arg(hide = true, long, default_value_t = MIN_SEGMENT_LEN)]
    pub min_segment_len: i64,

    /// Maximum gap or overlap between the two sides of the junction, in contig coordinates
    #[arg(hide = true, long, default_value_t = QUERY_ADJACENCY_BUFFER)]
    pub query_adjacency_buffer: i64,

    /// Minimum block size for two blocks of one gapped alignment to be used as the junction
    #[arg(hide = true, long, default_value_t = MIN_BLOCK_SIZE)]
    pub min_block_size: i64,

    #[arg(hide = true, long, default_value_t = STRICT_SUPPORT_TOLERANCE)]
    pub strict_support_tolerance: i64,

    #[arg(hide = true, long, default_value_t = RELAXED_SUPPORT_TOLERANCE)]
    pub relaxed_support_tolerance: i64,

    #[arg(hide = true, long, default_value_t = MAX_MICROHOMOLOGY_LEN)]
    pub max_microhomology_len: usize,

    /// Only consider this many of the top scoring alignments for each contig
    ///
    /// By default all alignments are considered.
    ///
    #[arg(long, value_name = "COUNT")]
    pub max_alignment_records: Option<usize>,

    /// Write extra debug output for the given contig only.
    ///
    #[arg(hide = true, long, value_name = "CONTIG_NAME")]
    pub debug_contig: Option<String>,
}

impl ResolveSettings {
    pub fn get_resolver_settings(&self) -> ResolverSettings {
        ResolverSettings {
            high_tier_tolerance: self.high_tier_tolerance,
            medium_tier_tolerance: self.medium_tier_tolerance,
            min_segment_len: self.min_segment_len,
            query_adjacency_buffer: self.query_adjacency_buffer,
            min_block_size: self.min_block_size,
            strict_support_tolerance: self.strict_support_tolerance,
            relaxed_support_tolerance: self.relaxed_support_tolerance,
            max_microhomology_len: self.max_microhomology_len,
            max_alignment_records: self.max_alignment_records,
        }
    }
}

/// Validate settings and update to parameters that can't be processed automatically by clap.
///
/// Assumes that the logger is not setup
///
pub fn validate_and_fix_resolve_settings(
    settings: ResolveSettings,
) -> SimpleResult<ResolveSettings> {
    check_required_filename(&settings.psl_filename, "split contig alignment")?;
    check_required_filename(&settings.contigs_filename, "split contig")?;

    for (value, label) in [
        (settings.high_tier_tolerance, "high-tier-tolerance"),
        (settings.medium_tier_tolerance, "medium-tier-tolerance"),
        (settings.min_segment_len, "min-segment-len"),
        (settings.query_adjacency_buffer, "query-adjacency-buffer"),
        (settings.min_block_size, "min-block-size"),
        (settings.strict_support_tolerance, "strict-support-tolerance"),
        (settings.relaxed_support_tolerance, "relaxed-support-tolerance"),
    ] {
        if value < 0 {
            bail!("--{label} argument must not be negative");
        }
    }

    if settings.medium_tier_tolerance < settings.high_tier_tolerance {
        bail!(
            "--medium-tier-tolerance is set below the high tier tolerance of {}",
            settings.high_tier_tolerance
        );
    }

    if settings.max_alignment_records == Some(0) {
        bail!("--max-alignment-records argument must be greater than 0");
    }

    Ok(settings)
}

/// Write resolve settings out in json format
pub fn write_resolve_settings(output_dir: &Utf8Path, settings: &ResolveSettings) {
    use log::info;

    let filename = output_dir.join(SETTINGS_FILENAME);

    info!("Writing resolve settings to file: '{filename}'");

    let f = unwrap!(
        std::fs::File::create(&filename),
        "Unable to create resolve settings json file: '{filename}'"
    );

    serde_json::to_writer_pretty(&f, &settings).unwrap();
}
