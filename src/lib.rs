pub mod bank;
pub mod cli;
pub mod error;
pub mod logging;
pub mod model;
pub mod scenery;
pub mod session;
pub mod shuffle;
pub mod state;
pub mod store;
pub mod tui;
pub mod ui;
