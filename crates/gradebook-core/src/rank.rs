//! Competition ranking ("1224") by total score
//!
//! Tied totals share a rank and the next distinct total takes its 1-based
//! position, so totals `[270, 270, 250, 240]` rank `[1, 1, 3, 4]`.

use std::time::Instant;

use crate::clock::Clock;
use crate::error::Result;
use crate::repository::{RankAssignment, Repository, SortField};
use crate::trace_time;

/// Ranks for totals already sorted in descending order
pub fn assign_ranks(sorted_totals: &[i64]) -> Vec<u32> {
    let mut ranks = Vec::with_capacity(sorted_totals.len());
    let mut current_rank = 0u32;
    let mut previous_total: Option<i64> = None;

    for (i, &total) in sorted_totals.iter().enumerate() {
        if previous_total != Some(total) {
            current_rank = i as u32 + 1;
        }
        ranks.push(current_rank);
        previous_total = Some(total);
    }

    ranks
}

/// Re-rank the whole collection and persist every rank in one pass.
///
/// Must run after each insert and delete. Returns the number of records
/// ranked. Running it twice on an unchanged collection assigns the same
/// ranks.
pub fn recompute_ranks<R, C>(repo: &mut R, clock: &C) -> Result<usize>
where
    R: Repository + ?Sized,
    C: Clock + ?Sized,
{
    let start = Instant::now();
    let records = repo.list_sorted_by(SortField::Total, true)?;
    let totals: Vec<i64> = records.iter().map(|r| r.total()).collect();

    let assignments: Vec<RankAssignment> = records
        .iter()
        .zip(assign_ranks(&totals))
        .map(|(record, rank)| RankAssignment {
            id: record.id().to_string(),
            rank,
        })
        .collect();

    repo.apply_ranks(&assignments, clock.now())?;

    tracing::info!(ranked = assignments.len(), "recompute_ranks");
    trace_time!(start, "rank_pass");
    Ok(assignments.len())
}
