//! navmark Engine
//!
//! Turns a browser bookmark export into navigation data for a static page.
//!
//! # Pipeline
//! - decode the export permissively as UTF-8
//! - walk it with `navmark-html` into `(folder path, link)` entries
//! - group entries by folder path, keeping first-seen order
//! - write `data.json` and the `data.js` script wrapper
//!
//! # Example
//! ```rust,ignore
//! use navmark_engine::{Engine, Config};
//!
//! let engine = Engine::new(Config::default().with_output_dir("/srv/nav"));
//! let summary = engine.run("bookmarks.html")?;
//! println!("{} links", summary.links);
//! ```

mod config;
mod decode;
mod document;
mod engine;
pub mod export;
pub mod grouper;

pub use config::{executable_dir, Config};
pub use decode::decode_lossy;
pub use document::{Document, Group};
pub use engine::{Engine, ExportError, ExportSummary, Import};
pub use grouper::{group_entries, GroupOptions};

// Re-export the walker for callers that only need entries
pub use navmark_html as html;
pub use navmark_html::{Entry, Link};

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
