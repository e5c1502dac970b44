mod app;
pub(crate) mod logging;
mod prompt;

pub use app::run_app;
