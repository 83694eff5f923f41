//! Default values for resolver settings which are shared between the command-line and library defaults
//!

pub const HIGH_TIER_TOLERANCE: i64 = 50;
pub const MEDIUM_TIER_TOLERANCE: i64 = 100;
pub const MIN_SEGMENT_LEN: i64 = 20;
pub const QUERY_ADJACENCY_BUFFER: i64 = 50;
pub const MIN_BLOCK_SIZE: i64 = 20;
pub const STRICT_SUPPORT_TOLERANCE: i64 = 20;
pub const RELAXED_SUPPORT_TOLERANCE: i64 = 100;
pub const MAX_MICROHOMOLOGY_LEN: usize = 10;
