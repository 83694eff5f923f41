mod resolve_all_contigs;
mod resolved_output;

use camino::Utf8Path;
use simple_error::SimpleResult;

use self::resolve_all_contigs::resolve_all_contigs;
use self::resolved_output::write_resolved_breakpoints;
use crate::cli::{ResolveSettings, SharedSettings, write_resolve_settings};
use crate::contig_input::{read_contig_alignments, read_split_contigs};
use crate::run_stats::{ResolveRunStats, write_resolve_run_stats};

pub const RESOLVED_BREAKPOINTS_FILENAME: &str = "resolved.breakpoints.json";
pub const RUN_STATS_FILENAME: &str = "run.stats.json";
pub const SETTINGS_FILENAME: &str = "resolve.settings.json";

pub fn run_resolve(
    shared_settings: &SharedSettings,
    settings: &ResolveSettings,
) -> SimpleResult<()> {
    write_resolve_settings(&settings.output_dir, settings);

    let contigs = read_split_contigs(Utf8Path::new(&settings.contigs_filename))?;
    let alignments = read_contig_alignments(Utf8Path::new(&settings.psl_filename))?;

    let resolver_settings = settings.get_resolver_settings();
    let (resolutions, resolve_stats) = resolve_all_contigs(
        shared_settings,
        &resolver_settings,
        &contigs,
        &alignments,
        settings.debug_contig.as_deref(),
    );

    write_resolved_breakpoints(&settings.output_dir, &resolutions);

    let run_stats = ResolveRunStats {
        alignment_input_stats: alignments.stats,
        resolve_stats,
    };
    write_resolve_run_stats(&settings.output_dir, &run_stats);

    Ok(())
}
