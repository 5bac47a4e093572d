//! End-to-end query flow: wire response → handler state → rendered view
//!
//! Drives a real `GeminiClient` against a mock server and checks what the
//! terminal would show for the success, degraded-success, and failure
//! paths.

use hesabyar_cli::output::OutputStyle;
use hesabyar_core::{view, QueryHandler, SubmitOutcome, View};
use hesabyar_providers::GeminiClient;

fn structured_body() -> String {
    let explanation = serde_json::json!({
        "accountName": "بانک",
        "accountType": "دارایی",
        "nature": "بدهکار",
        "explanation": "افزایش موجودی بانک در سمت بدهکار ثبت می‌شود.",
        "practicalTip": "واریزها را بدهکار و برداشت‌ها را بستانکار کنید."
    })
    .to_string();

    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": explanation }] }
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_successful_query_renders_table_and_tip() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/gemini-2.0-flash:generateContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(structured_body())
        .create_async()
        .await;

    let client = GeminiClient::with_base_url("test-key".to_string(), server.url()).unwrap();
    let mut handler = QueryHandler::new(client, "gemini-2.0-flash");

    let outcome = handler.submit("بانک").await;
    assert_eq!(outcome, SubmitOutcome::Dispatched);

    let rendered = OutputStyle::plain().render_view(&view(handler.state()));
    assert!(rendered.contains("حساب: بانک"));
    assert!(rendered.contains("نوع: دارایی"));
    assert!(rendered.contains("ماهیت: بدهکار"));
    assert!(rendered.contains("توضیح: افزایش موجودی بانک در سمت بدهکار ثبت می‌شود."));
    assert!(rendered.contains("نکته کاربردی: واریزها را بدهکار و برداشت‌ها را بستانکار کنید."));
}

#[tokio::test]
async fn test_unreachable_service_renders_warning_and_table_line() {
    // No mock server at this address
    let client = GeminiClient::with_base_url(
        "test-key".to_string(),
        "http://127.0.0.1:9".to_string(),
    )
    .unwrap();
    let mut handler = QueryHandler::new(client, "gemini-2.0-flash");

    handler.submit("بانک").await;

    let rendered = OutputStyle::plain().render_view(&view(handler.state()));
    assert!(rendered.contains("خطا در جستجو، از داده جدول استفاده شد."));
    assert!(rendered.contains("بانک (دارایی) - بدهکار"));
}

#[tokio::test]
async fn test_content_free_response_renders_fallback_without_warning() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/gemini-2.0-flash:generateContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates": []}"#)
        .create_async()
        .await;

    let client = GeminiClient::with_base_url("test-key".to_string(), server.url()).unwrap();
    let mut handler = QueryHandler::new(client, "gemini-2.0-flash");

    handler.submit("بانک").await;

    let state_view = view(handler.state());
    assert_eq!(
        state_view,
        View::Text {
            body: "بانک (دارایی) - بدهکار".to_string()
        }
    );

    let rendered = OutputStyle::plain().render_view(&state_view);
    assert!(!rendered.contains("خطا در جستجو"));
    assert!(rendered.contains("بانک (دارایی) - بدهکار"));
}

#[tokio::test]
async fn test_failed_query_with_no_table_match_shows_no_results() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/gemini-2.0-flash:generateContent")
        .with_status(500)
        .with_body("internal")
        .create_async()
        .await;

    let client = GeminiClient::with_base_url("test-key".to_string(), server.url()).unwrap();
    let mut handler = QueryHandler::new(client, "gemini-2.0-flash");

    handler.submit("ماشین").await;

    let rendered = OutputStyle::plain().render_view(&view(handler.state()));
    assert!(rendered.contains("نتیجه‌ای پیدا نشد."));
}
