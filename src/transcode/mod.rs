//! CSV to TSV row transcoder
//!
//! This module provides the dialect configuration, the per-field cleanup
//! and the single-pass transcode loop.

pub mod cleanup;
pub mod newline;
pub mod processor;
pub mod types;

pub use cleanup::{clean_record, cleanup_field, unmoney};
pub use processor::{transcode, transcode_path};
pub use types::{Dialect, Input, TranscodeError, TranscodeStats, EXCEL, EXCEL_TAB};
