use std::fs::File;
use std::io::BufWriter;

use camino::Utf8Path;
use log::info;
use unwrap::unwrap;

use super::RESOLVED_BREAKPOINTS_FILENAME;
use super::resolve_all_contigs::ContigResolution;

/// Write all contig resolutions out in json format, in contig input order
pub(super) fn write_resolved_breakpoints(output_dir: &Utf8Path, resolutions: &[ContigResolution]) {
    let filename = output_dir.join(RESOLVED_BREAKPOINTS_FILENAME);

    info!("Writing resolved breakpoints to file: '{filename}'");

    let f = unwrap!(
        File::create(&filename),
        "Unable to create resolved breakpoints json file: '{filename}'"
    );

    serde_json::to_writer_pretty(BufWriter::new(f), &resolutions).unwrap();
}
