//! UI Components
//!
//! Reusable Leptos components for the portal.

pub mod achievement_card;
pub mod data_source;
pub mod file_picker;
pub mod loading;
pub mod nav;
pub mod stat_tile;
pub mod toast;

pub use achievement_card::AchievementCard;
pub use data_source::DataSourceSettings;
pub use file_picker::FilePicker;
pub use loading::{InlineLoading, ListSkeleton, Loading, TileSkeleton};
pub use nav::Nav;
pub use stat_tile::StatTile;
pub use toast::Toast;
