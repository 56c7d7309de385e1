//! CLI operation handlers.
//!
//! - [`recent_report`]: collect recently updated repositories and write the
//!   report
//!
//! Output formatting utilities are in [`output`].

pub mod output;
pub mod recent_report;
