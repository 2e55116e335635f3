pub mod app;
pub mod format;
pub mod theme;

pub use app::run;
