//! Match percentage and ranking.

use crate::shortlist::models::MatchRecord;

/// `floor(100 * matched / total)`, or 0 when there are no keywords.
pub fn compute_score(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((matched.min(total) * 100) / total) as u32
}

/// Orders records by score, highest first. Equal scores keep their input order.
pub fn rank(mut records: Vec<MatchRecord>) -> Vec<MatchRecord> {
    // sort_by is stable
    records.sort_by(|a, b| b.score.cmp(&a.score));
    records
}
