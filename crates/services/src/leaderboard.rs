use rand::Rng;
use rand::rng;

use studyhub_core::catalog::DEMO_LEADERBOARD_NAMES;
use studyhub_core::model::Session;

/// Demo points are drawn uniformly from this range.
const DEMO_POINTS_LOW: u32 = 200;
const DEMO_POINTS_HIGH: u32 = 800;

/// One row of the demo leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub points: u32,
}

/// The demo leaderboard: fixed demo names with random points, plus the
/// session user with their real accumulated total, sorted by points
/// descending.
#[must_use]
pub fn standings(session: &Session) -> Vec<LeaderboardEntry> {
    standings_with_rng(session, &mut rng())
}

/// Like [`standings`] with a caller-supplied RNG for deterministic tests.
#[must_use]
pub fn standings_with_rng<R: Rng + ?Sized>(
    session: &Session,
    rng: &mut R,
) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = DEMO_LEADERBOARD_NAMES
        .iter()
        .map(|name| LeaderboardEntry {
            name: (*name).to_string(),
            points: rng.random_range(DEMO_POINTS_LOW..DEMO_POINTS_HIGH),
        })
        .collect();

    entries.push(LeaderboardEntry {
        name: session
            .username()
            .map_or_else(|| "You".to_string(), capitalize),
        points: session.total_points(),
    });

    entries.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.name.cmp(&b.name)));
    entries
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
