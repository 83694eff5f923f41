//! Split contig examples shared by unit tests across modules
//!

use crate::alignment_record::{AlignmentRecord, parse_psl_line};
use crate::candidate_variant::{CandidateVariant, ConfidenceTier, OrientationCategory};

pub const STANDARD_CONTIG: &str = "CAGATAGGCAACAGATCGAGACCTTGTTTCACAAAACGAACAGATCTGCAAAGATCAACCTGTCCTAAGTCATATAATCTCTTTGTGTAAGAGATTATACTTTGTGTAAGAGGTCCACCAGAGGAGTTCAGCAATTTGCTGCTCTTAGGGCAGGGATCAATTCCTTAATATCTTAGGAAGACTAGGTATTGACAGTAATGGTGACAAAGCAATGAAAAGGAAAGGAAGAAGTGATAAGACATGGCAGCAAGCTGAAGTATGATGAGTAAAGAATAGGAATCA";

/// A contig with its breakpoint hypothesis and aligner output
pub struct SplitContigFixture {
    pub contig: &'static str,
    pub sv: CandidateVariant,
    pub records: Vec<AlignmentRecord>,
}

fn get_fixture(
    contig: &'static str,
    sv: CandidateVariant,
    psl_lines: &[&str],
) -> SplitContigFixture {
    let records = psl_lines
        .iter()
        .map(|x| parse_psl_line(x).unwrap())
        .collect();
    SplitContigFixture {
        contig,
        sv,
        records,
    }
}

fn get_sv(
    left_reference: &str,
    right_reference: &str,
    left_breakpoint: i64,
    right_breakpoint: i64,
    orientation: u8,
) -> CandidateVariant {
    CandidateVariant::new(
        left_reference,
        right_reference,
        left_breakpoint,
        right_breakpoint,
        OrientationCategory::from_index(orientation),
        ConfidenceTier::High,
    )
}

/// Deletion-like contig aligned as a single gapped record
pub fn get_orientation_one_fixture() -> SplitContigFixture {
    get_fixture(
        STANDARD_CONTIG,
        get_sv("chr10", "chr10", 89700299, 89712341, 1),
        &["263\t1\t0\t0\t1\t18\t1\t12041\t+\tcontig\t282\t0\t282\tchr10\t135534747\t89700209\t89712514\t2\t90,174,\t0,108,\t89700209,89712340,\t"],
    )
}

pub fn get_orientation_two_fixture() -> SplitContigFixture {
    get_fixture(
        "ACTGGTCTGTTCAAATAGTGTGTAATTCAAAGCAATTGCTGCTCCCTAGGCAGGAATTTACAATTGCTACATGTGAAGGGAGGATAATGTGTCATTCCAAGGGTATTGCCTGAGGAAACCAAAGATAAAATAAAAACAACAATGATGTCTAACTCTTAGATAATGCTTGGTATTGACTAGGAATATTCTTTCCTTGTAGAATAATAGAGATATTCTAAGTATTTCTTTTCTTTCTTTTTTGAGACGCAATTTTGC",
        get_sv("chr7", "chr7", 104485067, 104612302, 2),
        &[
            "103\t0\t0\t0\t0\t0\t0\t0\t+\tcontig\t255\t0\t103\tchr7\t159138663\t104612199\t104612302\t1\t103,\t0,\t104612199,\t",
            "154\t0\t0\t0\t0\t0\t0\t0\t+\tcontig\t255\t101\t255\tchr7\t159138663\t104485066\t104485220\t1\t154,\t101,\t104485066,\t",
        ],
    )
}

/// Inversion-like contig with several repeat hits for one side of the junction
pub fn get_orientation_three_fixture() -> SplitContigFixture {
    get_fixture(
        "TTTTCCCCACATCCTTGCCAGTATTCATTATCGCCTGTCTATTTGAACACAAAGCCATTTTACCTGGGGTAAGATGATATTTCATTGTGATTTTGCTTTGCATTTCTTTCATGATTAGTGATGATGAACATTTTTAAATAACTGTTGCCACGAGAGTACACAGAGCAAAGGAGACAGGGTCATTTATACCCTGATGCGTCCACCCCACTGCTGTGTCCGGTTTCCATTGG",
        get_sv("chr15", "chr15", 23831661, 23992703, 3),
        &[
            "78\t8\t0\t0\t0\t0\t0\t0\t-\tcontig\t230\t144\t230\tchr15\t102531392\t24563867\t24563953\t1\t86,\t0,\t24563867,\t",
            "80\t6\t0\t0\t0\t0\t0\t0\t-\tcontig\t230\t144\t230\tchr15\t102531392\t24928398\t24928484\t1\t86,\t0,\t24928398,\t",
            "80\t6\t0\t0\t0\t0\t0\t0\t-\tcontig\t230\t144\t230\tchr15\t102531392\t24771250\t24771336\t1\t86,\t0,\t24771250,\t",
            "86\t0\t0\t0\t0\t0\t0\t0\t-\tcontig\t230\t144\t230\tchr15\t102531392\t23831575\t23831661\t1\t86,\t0,\t23831575,\t",
            "225\t5\t0\t0\t0\t0\t2\t405222\t+\tcontig\t230\t0\t230\tchr15\t102531392\t23992556\t24398008\t3\t147,4,79,\t0,147,151,\t23992556,23993156,24397929,\t",
        ],
    )
}

pub fn get_orientation_four_fixture() -> SplitContigFixture {
    get_fixture(
        "TTCATAACCAACAATATGTAGGAAGCCATTATCTGAAGTGTAAGCAACTGCATAGTGCTATTTTAATTATGCATTGCAGGGAAACTGTGAGCAGAGCTATATATTTAGGTAGACTGCTCTCAGGCAGAATGAAACACGATGGCACCTGCCACTCACGACCAGGAACCAAACAGGAAAGAATCCAAATTCTGTGTTTACAGGGCTTTCATGCTCAGTAAAATGCATAAGCACTTTTATTAGGGTTCTTAAAATTAGAAATCTATACT",
        get_sv("chr3", "chr3", 24565106, 24566179, 4),
        &[
            "90\t0\t0\t0\t0\t0\t0\t0\t-\tcontig\t266\t0\t90\tchr3\t198022430\t24565105\t24565195\t1\t90,\t176,\t24565105,\t",
            "178\t1\t0\t0\t0\t0\t0\t0\t+\tcontig\t266\t87\t266\tchr3\t198022430\t24566178\t24566357\t1\t179,\t87,\t24566178,\t",
        ],
    )
}

pub fn get_translocation_one_fixture() -> SplitContigFixture {
    get_fixture(
        "AGCTCAGCGCAAAGCGTGCGGATCTGCAGTCCACCTTCTCTGGAGGACGAATTCCAAAGAAGTTTGCCCGCAGAGGCACCAGCCTCAAAGAACGGCTGTGTTTTAGCAGCCTGAATGGGGGCTCTGTTCCTTCTGAGCTGGATGGGCTGGACTCCGAGAAGGACAAGATGCTGGTGGAGAAGCAGAAGGTGATCAATGAACTCA",
        get_sv("chr10", "chr17", 13231026, 12656098, 1),
        &[
            "100\t0\t0\t0\t0\t0\t0\t0\t+\tcontig\t204\t0\t100\tchr10\t135534747\t13230926\t13231026\t1\t100,\t0,\t13230926,\t",
            "100\t0\t0\t0\t0\t0\t0\t0\t+\tcontig\t204\t104\t204\tchr17\t81195210\t12656099\t12656199\t1\t100,\t104,\t12656099,\t",
        ],
    )
}

pub fn get_translocation_two_fixture() -> SplitContigFixture {
    get_fixture(
        "CACAGCCGTTCTTTGAGGCTGGTGCCTCTGCGGGCAAACTTCTTTGGAATTCGTCCTCCAGAGAAGGTGGACTGCAGATCCGCACGCTTTGCGCTGAGCTAAAATGAGTTCATTGATCACCTTCTGCTTCTCCACCAGCATCTTGTCCTTCTCGGAGTCCAGCCCATCCAGCTCAGAAGGAACAGAGCCCCCATTCAGGCTGCT",
        get_sv("chr10", "chr17", 13230926, 12656199, 2),
        &[
            "100\t0\t0\t0\t0\t0\t0\t0\t-\tcontig\t204\t0\t100\tchr10\t135534747\t13230926\t13231026\t1\t100,\t104,\t13230926,\t",
            "100\t0\t0\t0\t0\t0\t0\t0\t-\tcontig\t204\t104\t204\tchr17\t81195210\t12656099\t12656199\t1\t100,\t0,\t12656099,\t",
        ],
    )
}

pub fn get_translocation_three_fixture() -> SplitContigFixture {
    get_fixture(
        "AGCAGCCTGAATGGGGGCTCTGTTCCTTCTGAGCTGGATGGGCTGGACTCCGAGAAGGACAAGATGCTGGTGGAGAAGCAGAAGGTGATCAATGAACTCAAAAACACAGCCGTTCTTTGAGGCTGGTGCCTCTGCGGGCAAACTTCTTTGGAATTCGTCCTCCAGAGAAGGTGGACTGCAGATCCGCACGCTTTGCGCTGAGCT",
        get_sv("chr10", "chr17", 13231026, 12656200, 3),
        &[
            "100\t0\t0\t0\t0\t0\t0\t0\t+\tcontig\t204\t0\t100\tchr17\t81195210\t12656099\t12656199\t1\t100,\t0,\t12656099,\t",
            "100\t0\t0\t0\t0\t0\t0\t0\t-\tcontig\t204\t104\t204\tchr10\t135534747\t13230926\t13231026\t1\t100,\t0,\t13230926,\t",
        ],
    )
}

pub fn get_translocation_four_fixture() -> SplitContigFixture {
    get_fixture(
        "TGAGTTCATTGATCACCTTCTGCTTCTCCACCAGCATCTTGTCCTTCTCGGAGTCCAGCCCATCCAGCTCAGAAGGAACAGAGCCCCCATTCAGGCTGCTAAAAAGCTCAGCGCAAAGCGTGCGGATCTGCAGTCCACCTTCTCTGGAGGACGAATTCCAAAGAAGTTTGCCCGCAGAGGCACCAGCCTCAAAGAACGGCTGTG",
        get_sv("chr10", "chr17", 13230927, 12656100, 4),
        &[
            "100\t0\t0\t0\t0\t0\t0\t0\t-\tcontig\t204\t0\t100\tchr17\t81195210\t12656099\t12656199\t1\t100,\t104,\t12656099,\t",
            "101\t0\t0\t0\t0\t0\t0\t0\t+\tcontig\t204\t103\t204\tchr10\t135534747\t13230925\t13231026\t1\t101,\t103,\t13230925,\t",
        ],
    )
}
