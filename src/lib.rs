//! PDF Fusion Library
//!
//! A batch library for merging a directory of PDFs into a single timestamped
//! output and regenerating a static HTML index of previous outputs.
//! This library provides functionality to:
//! - Resolve an ordered input list from an optional manifest file
//! - Merge multiple PDF files preserving page order
//! - Count pages in a PDF
//! - Render and write the `index.html` listing of merged outputs
//!
//! # Example
//!
//! ```no_run
//! use pdf_fusion::config::Config;
//! use pdf_fusion::pipeline;
//!
//! let config = Config::from_root(".");
//! let summary = pipeline::run(&config).expect("Run failed");
//! println!("Index at {}", summary.index.display());
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod manifest;
pub mod pdf;
pub mod pipeline;

// Re-export commonly used items
pub use config::Config;
pub use error::{Error, Result};
