//! # AgroVision
//!
//! Native client for the AgroVision agriculture assistant: crop
//! recommendation, plant disease detection from a leaf photo, and a chatbot
//! that answers with the latest predictions as context.
//!
//! The view logic lives in `agrovision-core` and is shared with the browser
//! app under `ui/`. This crate adds the pieces that need the operating system:
//!
//! - [`api`] - HTTP client for the backend (`reqwest`)
//! - [`store`] - JSON-file cache for the last predictions
//! - [`session`] - [`Assistant`], which drives the views against an [`AgroApi`]
//! - [`utils::config`] - `agrovision.toml` + environment configuration
//! - [`cli`] - the `agrovision` command-line interface
//!
//! ## Example
//!
//! ```rust,no_run
//! use agrovision::{AgroConfig, Assistant, FileStore, HttpAgroApi};
//!
//! # async fn run() -> agrovision::Result<()> {
//! let config = AgroConfig::load("agrovision.toml")?;
//! let api = HttpAgroApi::from_config(&config.api)?;
//! let mut assistant = Assistant::new(api, FileStore::new(&config.cache.path));
//!
//! let prediction = assistant.recommend_crops().await?;
//! for rec in &prediction.recommendations {
//!     println!("{}", rec.display_line());
//! }
//!
//! let exchange = assistant.ask("When should I sow it?").await?;
//! println!("{}", exchange.reply.content);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod session;
pub mod store;
pub mod types;
pub mod utils;

pub use api::{AgroApi, HttpAgroApi};
pub use session::{Assistant, Exchange};
pub use store::FileStore;
pub use types::{AppError, Result};
pub use utils::config::{AgroConfig, ConfigError};
