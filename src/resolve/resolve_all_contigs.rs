use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use log::info;
use serde::Serialize;

use crate::cli::SharedSettings;
use crate::contig_input::{ContigAlignments, SplitContig};
use crate::log_utils::debug_msg;
use crate::resolve_breakpoint::{BreakpointResolution, ResolverSettings, resolve_breakpoint};
use crate::run_stats::ResolveStats;

/// Breakpoint resolution result for one split contig
#[derive(Debug, Serialize)]
pub struct ContigResolution {
    pub contig_name: String,
    pub resolution: BreakpointResolution,
}

type ResolveWorkerReturnType = (Duration, usize, ContigResolution);

fn resolve_contig_wrapper(
    tx: std::sync::mpsc::Sender<ResolveWorkerReturnType>,
    resolver_settings: &ResolverSettings,
    alignments: &ContigAlignments,
    debug_contig: Option<&str>,
    contig_index: usize,
    contig: &SplitContig,
) {
    let contig_start_time = Instant::now();

    let debug = debug_contig == Some(contig.name.as_str());
    let records = alignments.get_contig_records(&contig.name);
    debug_msg!(
        debug,
        "Resolving contig '{}' with {} alignment records, candidate: {:?}",
        contig.name,
        records.len(),
        contig.sv
    );

    let resolution = resolve_breakpoint(resolver_settings, &contig.seq, &contig.sv, records);

    debug_msg!(
        debug,
        "Resolution for contig '{}': {:?}",
        contig.name,
        resolution
    );

    let result = ContigResolution {
        contig_name: contig.name.clone(),
        resolution,
    };
    let duration = contig_start_time.elapsed();
    tx.send((duration, contig_index, result)).unwrap();
}

/// Resolve breakpoints for all split contigs over multiple threads
///
/// Results are returned in contig input order.
///
pub(super) fn resolve_all_contigs(
    shared_settings: &SharedSettings,
    resolver_settings: &ResolverSettings,
    contigs: &[SplitContig],
    alignments: &ContigAlignments,
    debug_contig: Option<&str>,
) -> (Vec<ContigResolution>, ResolveStats) {
    let worker_pool = rayon::ThreadPoolBuilder::new()
        .num_threads(shared_settings.thread_count)
        .build()
        .unwrap();

    info!(
        "Starting breakpoint resolution for {} split contigs",
        contigs.len()
    );

    let (tx, rx) = channel();
    worker_pool.scope(move |scope| {
        for (contig_index, contig) in contigs.iter().enumerate() {
            let tx = tx.clone();
            scope.spawn(move |_| {
                resolve_contig_wrapper(
                    tx,
                    resolver_settings,
                    alignments,
                    debug_contig,
                    contig_index,
                    contig,
                );
            });
        }
    });

    let mut resolve_stats = ResolveStats::default();
    let mut indexed_resolutions = Vec::new();
    for (contig_duration, contig_index, contig_resolution) in rx {
        resolve_stats.total_resolution_time_secs += contig_duration.as_secs_f64();
        indexed_resolutions.push((contig_index, contig_resolution));
    }
    indexed_resolutions.sort_by_key(|(contig_index, _)| *contig_index);

    let resolutions = indexed_resolutions
        .into_iter()
        .map(|(_, x)| x)
        .collect::<Vec<_>>();

    for contig in contigs {
        if alignments.get_contig_records(&contig.name).is_empty() {
            resolve_stats.contigs_without_alignments += 1;
        }
    }
    for x in resolutions.iter() {
        resolve_stats.add_resolution(&x.resolution);
    }

    info!(
        "Finished breakpoint resolution. Resolved {} of {} split contigs, {} supported by the candidate breakpoints",
        resolve_stats.resolved_count, resolve_stats.contig_count, resolve_stats.supported_count
    );
    for (reason, count) in resolve_stats.rejected_count.iter() {
        info!("Rejected split contigs ({}): {count}", reason.as_ref());
    }

    (resolutions, resolve_stats)
}
