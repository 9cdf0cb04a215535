pub mod config;
pub mod content;
pub mod scroll;
pub mod state;
pub mod theme;
pub mod viewport;

pub use config::{SiteConfig, read_config, site_config};
pub use scroll::{
    RegionBounds, ScrollConfig, ScrollRequest, ScrollStateDeriver, ScrollUpdate, SectionId,
    Viewport,
};
pub use state::{PageState, ScrollState, UiFlags};
pub use theme::{Theme, toggle_dark_mode};
pub use viewport::StaticViewport;
