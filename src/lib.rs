//! Flight search results and tabbed navigation state.
//!
//! DESIGN
//! ======
//! Two independent parts share nothing:
//! - `flight` + `app`: enrich a loaded flight list with display times and
//!   filter it against merged search criteria held in a caller-owned context.
//! - `tabs`: a token-guarded panel transition state machine, with timed
//!   completion on the tokio runtime.
//!
//! `loader`, `render` and `config` are the edges around them.

pub mod app;
pub mod config;
pub mod error;
pub mod flight;
pub mod loader;
pub mod render;
pub mod tabs;

pub use app::FlightApp;
pub use error::{ConfigError, LoadError};
