//! Scenario state for the recent repository report BDD tests.

use std::rc::Rc;

use recent_repos::{Collection, ReportDestination, ReportError};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tempfile::TempDir;
use wiremock::MockServer;

use super::harness::ScriptedPage;
use super::runtime::{self, SharedRuntime};

#[derive(ScenarioState, Default)]
pub(crate) struct ReportState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<Rc<MockServer>>,
    pub(crate) org: Slot<String>,
    pub(crate) pages: Slot<Vec<ScriptedPage>>,
    pub(crate) failure_status: Slot<u16>,
    pub(crate) output_dir: Slot<Rc<TempDir>>,
    pub(crate) destination: Slot<ReportDestination>,
    pub(crate) collection: Slot<Collection>,
    pub(crate) error: Slot<ReportError>,
}

/// Ensures the runtime and server are initialised in `ReportState`.
pub(crate) fn ensure_runtime_and_server(report_state: &ReportState) -> SharedRuntime {
    runtime::ensure_runtime_and_server(&report_state.runtime, &report_state.server)
        .unwrap_or_else(|error| panic!("failed to initialise runtime and server: {error}"))
}
