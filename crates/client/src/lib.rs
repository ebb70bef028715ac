//! Text front-end for arena encounters.
//!
//! # Architecture
//!
//! ```text
//! main (composition root)
//!   ├─→ ClientConfig (environment)
//!   ├─→ logging (file-only tracing)
//!   └─→ App (menu loop)
//!         ├─→ ContentFactory (catalog + rules)
//!         └─→ Session (engine + save slot + RNG)
//! ```

mod app;
pub mod config;
pub mod dirs;
pub mod logging;

pub use app::App;
pub use config::ClientConfig;
