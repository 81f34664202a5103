use crate::routing::types::{CompiledRoute, Segment};
use std::cmp::Ordering;

pub const BASE_SCORE: i32 = 1000;
pub const SEGMENT_BONUS: i32 = 10;
pub const DYNAMIC_PENALTY: i32 = 100;
pub const CATCH_ALL_PENALTY: i32 = 200;

/// Specificity score for a compiled (group-free) pattern; higher wins.
///
/// The constants are load-bearing: the resulting total order decides
/// which route wins on ambiguous overlap, so they must stay exact.
pub fn priority_score(segments: &[Segment]) -> i32 {
    segments.iter().fold(BASE_SCORE, |score, segment| match segment {
        Segment::Static(_) => score + SEGMENT_BONUS,
        Segment::Dynamic(_) => score + SEGMENT_BONUS - DYNAMIC_PENALTY,
        Segment::CatchAll(_) => score + SEGMENT_BONUS - CATCH_ALL_PENALTY,
        Segment::Group(_) => score,
    })
}

/// Total order for table sorting: descending priority, ties broken by
/// ascending canonical pattern so the sort is stable across runs.
pub fn compare_routes(a: &CompiledRoute, b: &CompiledRoute) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| a.canonical.cmp(&b.canonical))
}
