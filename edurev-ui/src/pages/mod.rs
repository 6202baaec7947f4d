//! Pages
//!
//! Top-level page components for each route.

pub mod add_achievement;
pub mod auth;
pub mod dashboard;
pub mod home;
pub mod info;
pub mod leaderboard;

pub use add_achievement::AddAchievement;
pub use auth::{Login, Signup};
pub use dashboard::Dashboard;
pub use home::Home;
pub use info::{EduRevInfo, Projects};
pub use leaderboard::Leaderboard;
