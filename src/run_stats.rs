//! Track stats for the whole resolve run
//!

use std::collections::BTreeMap;
use std::fs::File;

use camino::Utf8Path;
use log::info;
use serde::{Deserialize, Serialize};
use unwrap::unwrap;

use crate::contig_input::AlignmentInputStats;
use crate::resolve::RUN_STATS_FILENAME;
use crate::resolve_breakpoint::{BreakpointResolution, RejectionReason};

#[derive(Default, Deserialize, Serialize)]
pub struct ResolveStats {
    pub contig_count: usize,

    /// Contigs with no alignment records in the alignment input
    pub contigs_without_alignments: usize,

    pub resolved_count: usize,

    /// Resolved contigs which are consistent with their candidate variant
    pub supported_count: usize,

    pub rejected_count: BTreeMap<RejectionReason, usize>,

    pub total_resolution_time_secs: f64,
}

impl ResolveStats {
    pub fn add_resolution(&mut self, resolution: &BreakpointResolution) {
        self.contig_count += 1;
        match resolution {
            BreakpointResolution::Resolved(x) => {
                self.resolved_count += 1;
                if x.is_supported {
                    self.supported_count += 1;
                }
            }
            BreakpointResolution::Rejected(reason) => {
                *self.rejected_count.entry(*reason).or_default() += 1;
            }
        }
    }
}

#[derive(Deserialize, Serialize)]
pub struct ResolveRunStats {
    pub alignment_input_stats: AlignmentInputStats,
    pub resolve_stats: ResolveStats,
}

/// Write run_stats structure out in json format
pub fn write_resolve_run_stats(output_dir: &Utf8Path, run_stats: &ResolveRunStats) {
    let filename = output_dir.join(RUN_STATS_FILENAME);

    info!("Writing run statistics to file: '{filename}'");

    let f = unwrap!(
        File::create(&filename),
        "Unable to create run statistics json file: '{filename}'"
    );

    serde_json::to_writer_pretty(&f, &run_stats).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_resolution() {
        let mut stats = ResolveStats::default();
        stats.add_resolution(&BreakpointResolution::Rejected(
            RejectionReason::NoSupportingAlignment,
        ));
        stats.add_resolution(&BreakpointResolution::Rejected(
            RejectionReason::NoSupportingAlignment,
        ));
        stats.add_resolution(&BreakpointResolution::Rejected(
            RejectionReason::QueryLengthFilter,
        ));
        assert_eq!(stats.contig_count, 3);
        assert_eq!(stats.resolved_count, 0);
        assert_eq!(
            stats.rejected_count.get(&RejectionReason::NoSupportingAlignment),
            Some(&2)
        );

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"NoSupportingAlignment\":2"));
    }
}
