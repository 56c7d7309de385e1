//! Support modules for the recent repository report BDD tests.

pub(crate) mod domain;
pub(crate) mod harness;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use domain::{DayOffsets, PageNumber};
pub(crate) use harness::{ScriptedPage, generate_report, mount_pages, requests_for_page};
pub(crate) use state::{ReportState, ensure_runtime_and_server};
