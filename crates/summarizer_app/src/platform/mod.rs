mod app;
mod effects;
mod settings;
mod ui;

pub use app::run_app;
