//! Vellum — conversational SVG generation.
//!
//! Turns natural-language descriptions into SVG graphics through a hosted
//! model backend and keeps every generated graphic in an append-only,
//! linearly-indexed version history. Refinements never overwrite: each
//! submission produces a new version, and "undo" is just moving the cursor.
//!
//! # Quick Start
//!
//! ```no_run
//! use vellum::prelude::*;
//!
//! # async fn example() {
//! let config = VellumConfig::from_env();
//! let gateway = AnthropicGateway::from_config(&config);
//! let mut editor = EditorController::new(Box::new(gateway));
//!
//! editor.submit("a red circle on a white background").await;
//! if let Some(svg) = editor.current_artifact() {
//!     println!("{svg}");
//! }
//! # }
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod extract;
pub mod gateway;
pub mod history;
pub mod prelude;
pub mod sanitize;
pub mod transcript;
pub mod types;

#[cfg(feature = "relay")]
pub mod relay;

#[cfg(feature = "cli")]
pub mod cli;
