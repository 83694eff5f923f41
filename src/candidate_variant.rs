use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumCount, EnumIter, EnumString};

/// Strength of the upstream breakpoint estimate
///
/// Tiers are ordered from the tightest to the widest breakpoint proximity tolerance.
///
#[derive(
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Deserialize,
    EnumCount,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ConfidenceTier {
    /// Breakpoint supported by both discordant pair clusters and soft-clip evidence
    High,
    Medium,
    /// Breakpoint estimated from clipped reads on one side only
    SingleClip,
}

/// Strand/order topology of the rearrangement junction
///
/// The same four categories are used for intra-chromosomal rearrangements and translocations.
///
#[derive(
    Clone, Copy, Debug, Deserialize, EnumCount, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum OrientationCategory {
    /// Same strand, query-earlier segment maps to the lower coordinate (deletion-like)
    One,
    /// Same strand, query-earlier segment maps to the higher coordinate (duplication-like)
    Two,
    /// Opposite strands, junction joins the two segment ends
    Three,
    /// Opposite strands, junction joins the two segment starts
    Four,
}

impl OrientationCategory {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(OrientationCategory::One),
            2 => Some(OrientationCategory::Two),
            3 => Some(OrientationCategory::Three),
            4 => Some(OrientationCategory::Four),
            _ => None,
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            OrientationCategory::One => 1,
            OrientationCategory::Two => 2,
            OrientationCategory::Three => 3,
            OrientationCategory::Four => 4,
        }
    }
}

impl fmt::Display for OrientationCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// The externally supplied breakpoint hypothesis for one contig
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CandidateVariant {
    pub left_reference: String,
    pub right_reference: String,

    /// One-indexed left breakpoint estimate
    pub left_breakpoint: i64,

    /// One-indexed right breakpoint estimate
    pub right_breakpoint: i64,

    /// Orientation category expected by the upstream clustering step, if known
    pub orientation: Option<OrientationCategory>,

    pub tier: ConfidenceTier,

    /// True if the breakpoint estimate is backed by soft-clipped reads
    pub has_soft_clip_evidence: bool,
}

impl CandidateVariant {
    pub fn new(
        left_reference: &str,
        right_reference: &str,
        left_breakpoint: i64,
        right_breakpoint: i64,
        orientation: Option<OrientationCategory>,
        tier: ConfidenceTier,
    ) -> Self {
        Self {
            left_reference: left_reference.to_string(),
            right_reference: right_reference.to_string(),
            left_breakpoint,
            right_breakpoint,
            orientation,
            tier,
            has_soft_clip_evidence: false,
        }
    }

    pub fn is_translocation(&self) -> bool {
        self.left_reference != self.right_reference
    }

    /// True if `reference` is either of the candidate's references
    pub fn is_candidate_reference(&self, reference: &str) -> bool {
        reference == self.left_reference || reference == self.right_reference
    }
}
