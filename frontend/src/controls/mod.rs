pub use self::chart::SeriesChart;
pub use self::selection::{SelectionControls, ThemeToggle};
pub use self::status::{ErrorBanner, LastUpdated, StatCards};

pub mod chart;
pub mod selection;
pub mod status;
