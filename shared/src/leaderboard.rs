use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum LeaderboardPeriod {
    #[default]
    #[strum(serialize = "This Week")]
    Weekly,
    #[strum(serialize = "This Month")]
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderEntry {
    pub id: u32,
    pub name: String,
    pub points: u32,
    pub rank: u32,
    pub achievement: String,
}

impl LeaderEntry {
    pub fn avatar(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }

    pub fn on_podium(&self) -> bool {
        (1..=3).contains(&self.rank)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub current_user: String,
    pub weekly: Vec<LeaderEntry>,
    pub monthly: Vec<LeaderEntry>,
}

impl Leaderboard {
    pub fn entries(&self, period: LeaderboardPeriod) -> &[LeaderEntry] {
        match period {
            LeaderboardPeriod::Weekly => &self.weekly,
            LeaderboardPeriod::Monthly => &self.monthly,
        }
    }

    pub fn is_current_user(&self, entry: &LeaderEntry) -> bool {
        entry.name == self.current_user
    }

    /// 1-based position of the current user in the period's listing.
    pub fn current_user_rank(&self, period: LeaderboardPeriod) -> Option<usize> {
        self.entries(period)
            .iter()
            .position(|e| self.is_current_user(e))
            .map(|i| i + 1)
    }
}

/// Formats points with comma thousands separators, e.g. `5840` as `5,840`.
pub fn format_points(points: u32) -> String {
    let digits = points.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
