pub mod chapter;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod scroll_region;
pub mod ui;

pub use chapter::{Chapter, ChapterRegistry};
pub use config::AppConfig;
pub use error::{ConfigError, RegistryError, UiError};
pub use navigation::{
    EdgePolicy, NavigationConfig, NavigationController, NavigationState, RegionBounds,
    WheelIntent, WheelOutcome,
};
pub use scroll_region::{ContentRegion, ScrollRegion};
pub use ui::App;
