//! Team name resolution against a roster snapshot

use crate::models::Team;

/// Find the first team whose name contains `query`, ignoring case
///
/// Roster order is the tie-breaker: the first entry that matches wins, not the
/// closest one. An empty query matches the first entry, so callers validate the
/// query length before resolving.
pub fn find_team_in_list<'a>(teams: &'a [Team], query: &str) -> Option<&'a Team> {
    let needle = query.to_lowercase();
    teams
        .iter()
        .find(|team| team.name.to_lowercase().contains(&needle))
}
