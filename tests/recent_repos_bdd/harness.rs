//! Mock server wiring and report generation for the BDD tests.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use recent_repos::github::models::format_github_timestamp;
use recent_repos::{
    ClientConfig, Collection, GitHubClient, ReportDestination, ReportError, collect_recent,
    lookback_cutoff, write_report,
};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

use super::runtime::SharedRuntime;
use super::state::ReportState;

const PER_PAGE: u8 = 100;

/// One scripted page of the organization listing.
#[derive(Debug, Clone)]
pub(crate) struct ScriptedPage {
    pub(crate) page: u32,
    pub(crate) offsets: Vec<i64>,
    pub(crate) exhausted: bool,
}

/// Instant every scenario treats as "now".
pub(crate) fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("reference instant should be valid"))
}

fn org_repos_path(org: &str) -> String {
    format!("/orgs/{org}/repos")
}

fn repository_json(offset_days: i64) -> Value {
    let delta = TimeDelta::try_days(offset_days)
        .unwrap_or_else(|| panic!("offset {offset_days} out of range"));
    json!({
        "name": format!("repo-{offset_days}d"),
        "description": format!("Updated {offset_days} days ago"),
        "stargazers_count": offset_days,
        "updated_at": format_github_timestamp(reference_now() - delta),
    })
}

/// Mounts the scripted pages, or the failure response, on the mock server.
pub(crate) fn mount_pages(report_state: &ReportState, runtime: &SharedRuntime) {
    let org = report_state
        .org
        .get()
        .unwrap_or_else(|| panic!("organization not configured"));
    let server = report_state
        .server
        .get()
        .unwrap_or_else(|| panic!("mock server not initialised"));
    let repos_path = org_repos_path(&org);

    if let Some(status) = report_state.failure_status.get() {
        let mock = Mock::given(method("GET"))
            .and(path(repos_path.as_str()))
            .respond_with(
                ResponseTemplate::new(status).set_body_string("{\"message\":\"Not Found\"}"),
            );
        runtime.block_on(mock.mount(&server));
        return;
    }

    let pages = report_state.pages.get().unwrap_or_default();
    for scripted in &pages {
        let items: Vec<Value> = scripted.offsets.iter().copied().map(repository_json).collect();
        let remaining = if scripted.exhausted { "0" } else { "42" };
        let base_response = ResponseTemplate::new(200)
            .set_body_json(items)
            .insert_header("X-RateLimit-Limit", "60")
            .insert_header("X-RateLimit-Remaining", remaining);

        let has_next = pages.iter().any(|other| other.page == scripted.page + 1);
        let response = if has_next {
            let next = format!(
                "{}{repos_path}?per_page={PER_PAGE}&type=public&sort=updated&direction=desc&page={}",
                server.uri(),
                scripted.page + 1
            );
            base_response.insert_header("Link", format!("<{next}>; rel=\"next\""))
        } else {
            base_response
        };

        let base_mock = Mock::given(method("GET")).and(path(repos_path.as_str()));
        let page_mock = if scripted.page == 1 {
            base_mock.and(query_param_is_missing("page"))
        } else {
            base_mock.and(query_param("page", scripted.page.to_string()))
        };
        runtime.block_on(
            page_mock.and(query_param("per_page", PER_PAGE.to_string()))
                .respond_with(response)
                .mount(&server),
        );
    }
}

/// Runs the blocking report pipeline against the mock server.
pub(crate) fn generate_report(
    report_state: &ReportState,
    days: u32,
    destination: &ReportDestination,
) -> Result<Collection, ReportError> {
    let server_uri = report_state
        .server
        .with_ref(|server| server.uri())
        .ok_or_else(|| ReportError::Configuration {
            message: "mock server URL missing".to_owned(),
        })?;
    let org = report_state
        .org
        .get()
        .ok_or_else(|| ReportError::Configuration {
            message: "organization missing".to_owned(),
        })?;

    let config = ClientConfig::new(&server_uri, None)?;
    let start_url = config.org_repos_url(&org, PER_PAGE)?;
    let client = GitHubClient::new(config)?;

    let collection = collect_recent(
        &client,
        start_url.as_str(),
        lookback_cutoff(reference_now(), days),
    )?;
    write_report(destination, &collection.records)?;
    Ok(collection)
}

/// Counts requests the server received for the given page.
pub(crate) fn requests_for_page(
    report_state: &ReportState,
    runtime: &SharedRuntime,
    page: u32,
) -> usize {
    let server = report_state
        .server
        .get()
        .unwrap_or_else(|| panic!("mock server not initialised"));
    let requests = runtime
        .block_on(server.received_requests())
        .unwrap_or_default();
    let page_value = page.to_string();

    requests
        .iter()
        .filter(|request| {
            request
                .url
                .query_pairs()
                .find(|(key, _)| key == "page")
                .map_or(page == 1, |(_, value)| value == page_value.as_str())
        })
        .count()
}
