//! Metrics Export Integration Tests
//!
//! Installs the process-wide Prometheus recorder, so everything that reads
//! counters lives in one test to keep the values exact.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use quote_service::{
    AppState, InMemoryQuoteRepository, QuoteId, QuoteInput, QuoteRepository, create_router,
    get_metrics_handle, init_metrics,
};

fn sample(rendered: &str, series: &str) -> Option<f64> {
    rendered
        .lines()
        .find_map(|line| line.strip_prefix(series)?.strip_prefix(' '))
        .and_then(|value| value.trim().parse().ok())
}

fn operation(name: &str, outcome: &str) -> String {
    format!("quote_service_operations_total{{operation=\"{name}\",outcome=\"{outcome}\"}}")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn repository_activity_is_exported() {
    let handle = init_metrics().unwrap();
    assert!(get_metrics_handle().is_some());
    init_metrics().unwrap();

    let repo = Arc::new(InMemoryQuoteRepository::with_seed(11));
    repo.add(QuoteInput::new("Q1", "A1")).await.unwrap();
    repo.add(QuoteInput::new("Q2", "A2")).await.unwrap();
    repo.get_all().await.unwrap();
    repo.get_random().await.unwrap();
    repo.get_by_author("A1").await.unwrap();
    repo.get_by_author("nobody").await.unwrap_err();
    repo.delete_by_id(QuoteId::FIRST).await.unwrap();
    repo.delete_by_id(QuoteId::FIRST).await.unwrap_err();

    let rendered = handle.render();
    assert_eq!(sample(&rendered, &operation("add", "ok")), Some(2.0));
    assert_eq!(sample(&rendered, &operation("get_all", "ok")), Some(1.0));
    assert_eq!(sample(&rendered, &operation("get_random", "ok")), Some(1.0));
    assert_eq!(sample(&rendered, &operation("get_by_author", "ok")), Some(1.0));
    assert_eq!(sample(&rendered, &operation("get_by_author", "empty")), Some(1.0));
    assert_eq!(sample(&rendered, &operation("delete_by_id", "ok")), Some(1.0));
    assert_eq!(sample(&rendered, &operation("delete_by_id", "empty")), Some(1.0));
    assert_eq!(sample(&rendered, "quote_service_quotes_stored"), Some(1.0));

    // Interleaved adds and deletes must leave the gauge equal to the store size.
    let tasks: Vec<_> = (0..8_u64)
        .map(|task| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                for n in 0..50_u64 {
                    let added = repo
                        .add(QuoteInput::new(format!("q{task}-{n}"), "a"))
                        .await
                        .unwrap();
                    if n % 2 == 0 {
                        repo.delete_by_id(added.id).await.unwrap();
                    }
                }
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    let stored = repo.len();
    assert_eq!(stored, 1 + 8 * 25);
    #[allow(clippy::cast_precision_loss)]
    let expected = stored as f64;
    assert_eq!(
        sample(&handle.render(), "quote_service_quotes_stored"),
        Some(expected)
    );

    let app = create_router(AppState::new(Arc::clone(&repo), "test"));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("# TYPE quote_service_operations_total counter"));
    assert_eq!(sample(&text, &operation("add", "ok")), Some(402.0));
    assert_eq!(sample(&text, "quote_service_quotes_stored"), Some(expected));
}
