pub mod config;
pub mod lifetime;
pub mod logging;
pub mod model;
pub mod source;
pub mod ui;
