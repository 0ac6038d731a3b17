mod common;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use common::read_fixture;
use dartkit::server::{AppState, CompareResponse, ErrorBody, IndexResponse, RatiosResponse, app};
use dartkit::{
    DartError, DisclosureDocument, FinancialOperations, Ratios, ReportQuery, ServerConfig,
    StatementParser,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::ServiceExt;

/// How the fake upstream answers for one corp code.
#[derive(Clone)]
enum Reply {
    Fixture(&'static str),
    NoData,
    TransportError,
}

/// Serves fixtures keyed by corp code and records every query it receives.
#[derive(Default)]
struct FixtureSource {
    replies: HashMap<String, Reply>,
    queries: Mutex<Vec<ReportQuery>>,
}

impl FixtureSource {
    fn with(mut self, corp_code: &str, reply: Reply) -> Self {
        self.replies.insert(corp_code.to_string(), reply);
        self
    }

    fn queries(&self) -> Vec<ReportQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl FinancialOperations for FixtureSource {
    async fn financial_statement(
        &self,
        query: &ReportQuery,
    ) -> dartkit::Result<Option<DisclosureDocument>> {
        self.queries.lock().unwrap().push(query.clone());

        match self.replies.get(&query.corp_code) {
            Some(Reply::Fixture(path)) => self
                .financial_statement_from_string(&read_fixture(path))
                .map(Some),
            Some(Reply::TransportError) => {
                Err(DartError::InvalidResponse("connection reset".to_string()))
            }
            Some(Reply::NoData) | None => Ok(None),
        }
    }

    fn financial_statement_from_string(
        &self,
        content: &str,
    ) -> dartkit::Result<DisclosureDocument> {
        StatementParser::new().parse(content)
    }
}

fn router(source: Arc<FixtureSource>) -> Router {
    app(AppState::new(source), &ServerConfig::default())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

fn json<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn index_lists_endpoints() {
    let (status, body) = get(router(Arc::new(FixtureSource::default())), "/").await;

    assert_eq!(status, StatusCode::OK);
    let index: IndexResponse = json(&body);
    assert!(!index.status.is_empty());
    assert_eq!(index.endpoints, vec!["/ratios", "/compare"]);
}

#[tokio::test]
async fn ratios_without_params_is_bad_request() {
    let source = Arc::new(FixtureSource::default());
    let (status, body) = get(router(source.clone()), "/ratios").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorBody = json(&body);
    assert!(error.error.contains("corp_code"));
    assert!(source.queries().is_empty());
}

#[tokio::test]
async fn ratios_with_empty_year_is_bad_request() {
    let source = Arc::new(FixtureSource::default());
    let (status, _) = get(router(source), "/ratios?corp_code=00126380&bsns_year=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ratios_for_one_company() {
    let source = Arc::new(
        FixtureSource::default().with("00126380", Reply::Fixture("statements/key_accounts.xml")),
    );
    let (status, body) = get(
        router(source.clone()),
        "/ratios?corp_code=00126380&bsns_year=2024",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: RatiosResponse = json(&body);
    assert_eq!(response.corp_code, "00126380");
    assert_eq!(response.year, "2024");
    assert_eq!(response.financials.get("매출액"), Some(1_000_000.0));

    let Ratios::Computed(ratios) = response.ratios else {
        panic!("expected computed ratios");
    };
    assert_eq!(ratios.operating_margin, 15.0);
    assert_eq!(ratios.net_margin, 8.0);
    assert_eq!(ratios.debt_to_equity, 25.0);
    assert_eq!(ratios.return_on_equity, 5.0);

    let queries = source.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].reprt_code, "11013");
}

#[tokio::test]
async fn ratios_passes_report_code_through() {
    let source = Arc::new(
        FixtureSource::default().with("00126380", Reply::Fixture("statements/key_accounts.xml")),
    );
    let (status, _) = get(
        router(source.clone()),
        "/ratios?corp_code=00126380&bsns_year=2023&reprt_code=11011",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        source.queries(),
        vec![ReportQuery::new("00126380", "2023").with_report_code("11011")]
    );
}

#[tokio::test]
async fn ratios_upstream_failure_is_server_error() {
    let source = Arc::new(
        FixtureSource::default()
            .with("00000001", Reply::NoData)
            .with("00000002", Reply::TransportError),
    );

    for corp_code in ["00000001", "00000002"] {
        let uri = format!("/ratios?corp_code={}&bsns_year=2024", corp_code);
        let (status, body) = get(router(source.clone()), &uri).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error: ErrorBody = json(&body);
        assert!(!error.error.is_empty());
    }
}

#[tokio::test]
async fn ratios_failure_marker_stays_ok() {
    let source = Arc::new(
        FixtureSource::default().with("00999999", Reply::Fixture("statements/impaired_equity.xml")),
    );
    let (status, body) = get(router(source), "/ratios?corp_code=00999999&bsns_year=2024").await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = json(&body);
    assert_eq!(value["ratios"], serde_json::json!({ "error": "비율 계산 실패" }));
    assert_eq!(value["financials"]["자본총계"], serde_json::json!(0.0));
}

#[tokio::test]
async fn compare_two_companies_with_defaults() {
    let source = Arc::new(
        FixtureSource::default()
            .with("00126380", Reply::Fixture("statements/key_accounts.xml"))
            .with("00164779", Reply::Fixture("statements/net_loss.xml")),
    );
    let (status, body) = get(router(source.clone()), "/compare?corp1=00126380&corp2=00164779").await;

    assert_eq!(status, StatusCode::OK);
    let response: CompareResponse = json(&body);
    assert_eq!(response.year, "2024");
    assert_eq!(response.company_1.corp_code, "00126380");
    assert_eq!(response.company_2.corp_code, "00164779");
    assert_eq!(response.company_2.financials.get("당기순이익"), Some(0.0));

    let Ratios::Computed(second) = response.company_2.ratios else {
        panic!("expected computed ratios");
    };
    assert_eq!(second.debt_to_equity, 150.0);

    let queries = source.queries();
    assert_eq!(queries.len(), 2);
    assert!(queries.iter().all(|q| q.bsns_year == "2024" && q.reprt_code == "11014"));
    assert_eq!(queries[0].corp_code, "00126380");
}

#[tokio::test]
async fn compare_discards_partial_results() {
    let source = Arc::new(
        FixtureSource::default()
            .with("00126380", Reply::Fixture("statements/key_accounts.xml"))
            .with("00164779", Reply::NoData),
    );
    let (status, body) = get(
        router(source),
        "/compare?corp1=00126380&corp2=00164779&year=2023",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let value: Value = json(&body);
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("error"));
}

#[tokio::test]
async fn compare_stops_after_first_company_fails() {
    let source = Arc::new(
        FixtureSource::default()
            .with("00126380", Reply::TransportError)
            .with("00164779", Reply::Fixture("statements/key_accounts.xml")),
    );
    let (status, _) = get(
        router(source.clone()),
        "/compare?corp1=00126380&corp2=00164779",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let queries = source.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].corp_code, "00126380");
}

#[tokio::test]
async fn compare_requires_both_companies() {
    let source = Arc::new(FixtureSource::default());
    let (status, _) = get(router(source.clone()), "/compare?corp1=00126380").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(source.queries().is_empty());
}
