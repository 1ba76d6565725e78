pub mod assistant;
pub mod handlers;
pub mod header;
pub mod leaderboard;
pub mod notices;
pub mod profile;
pub mod results;
pub mod rewards;
pub mod status_indicator;
pub mod theme_toggle;
pub mod tips;
pub mod upload_section;
pub mod utils;
