use serde::{Deserialize, Serialize};

/// Display-only profile figures. Classification outcomes do not update them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub points: u32,
    pub level: u32,
    pub rank: u32,
    pub scans: u32,
    pub badges_earned: u32,
    pub progress_percent: u8,
}

impl UserStats {
    pub fn next_level(&self) -> u32 {
        self.level + 1
    }

    pub fn progress(&self) -> u8 {
        self.progress_percent.min(100)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: u32,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub earned: bool,
    pub progress: u8,
}

pub struct BadgeBoard<'a> {
    badges: &'a [Badge],
}

impl<'a> BadgeBoard<'a> {
    pub fn new(badges: &'a [Badge]) -> Self {
        Self { badges }
    }

    pub fn earned(&self) -> Vec<&'a Badge> {
        self.badges.iter().filter(|b| b.earned).collect()
    }

    /// Unearned badges in catalog order, at most `limit` of them.
    pub fn in_progress(&self, limit: usize) -> Vec<&'a Badge> {
        self.badges.iter().filter(|b| !b.earned).take(limit).collect()
    }
}
