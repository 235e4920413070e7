//! Ranking: finalize tallies and sort by the tie-break chain.
//!
//! Teams are ordered by points, then goal difference, then goals scored
//! (all descending), then by team name alphabetically. The name step makes
//! the order total, so equal inputs always produce the same sequence.
//! Position in the returned vector is the league rank (index 0 is first).

use std::cmp::Ordering;

use crate::data::aggregate::Tallies;
use crate::data::standing::TeamStanding;

use super::options::PointsRules;

/// Tie-break comparator: `Less` means `a` ranks above `b`.
///
/// The final name step is ascending (`A` before `B`) on purpose; do not
/// flip it to descending.
pub fn compare_standings(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.scored.cmp(&a.scored))
        .then_with(|| a.team.cmp(&b.team))
}

/// Finalize every tally under `rules` and return the ranked sequence.
pub fn rank(tallies: &Tallies, rules: &PointsRules) -> Vec<TeamStanding> {
    let mut standings: Vec<TeamStanding> = tallies
        .iter()
        .map(|(team, tally)| TeamStanding::from_records(team, tally.home, tally.away, rules))
        .collect();
    standings.sort_by(compare_standings);
    standings
}

/// Whether a sequence is in ranked order.
pub fn is_ranked(standings: &[TeamStanding]) -> bool {
    standings
        .windows(2)
        .all(|pair| compare_standings(&pair[0], &pair[1]) != Ordering::Greater)
}
