//! End-to-end tests through the in-memory client.

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde_json::json;

use kairos_test::{TestClient, TestResponse};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const MAX_DELAY_SECS: i64 = 2;

fn client() -> TestClient {
    TestClient::new(kairos::app::build_dispatcher().expect("route table must build"))
}

fn datetime_from_html(response: &TestResponse) -> NaiveDateTime {
    let body = response.text();
    let start = body.find("<div>").expect("html body has a div") + "<div>".len();
    let end = body.find("</div>").expect("div is closed");
    NaiveDateTime::parse_from_str(body[start..end].trim(), DISPLAY_FORMAT)
        .expect("div contains a formatted datetime")
}

fn assert_close_to_now(rendered: NaiveDateTime, zone: Tz) {
    let now = Utc::now().with_timezone(&zone).naive_local();
    let diff = (now - rendered).num_seconds().abs();
    assert!(diff <= MAX_DELAY_SECS, "rendered time is {diff}s off");
}

#[tokio::test]
async fn root_renders_utc_now_as_html() {
    let response = client().get("/").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.content_type(), "text/html");
    assert!(response.text().contains("<title>Time Server</title>"));
    assert_close_to_now(datetime_from_html(&response), Tz::UTC);
}

#[tokio::test]
async fn single_segment_zone_renders() {
    let response = client().get("/UTC").await;
    assert_eq!(response.status_code(), 200);
    assert_close_to_now(datetime_from_html(&response), Tz::UTC);
}

#[tokio::test]
async fn unknown_single_segment_zone_is_400() {
    let response = client().get("/asd").await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(response.reason().as_deref(), Some("invalid timezone"));
}

#[tokio::test]
async fn continent_city_zone_renders() {
    let response = client().get("/Asia/Novosibirsk").await;
    assert_eq!(response.status_code(), 200);
    assert_close_to_now(datetime_from_html(&response), Tz::Asia__Novosibirsk);
}

#[tokio::test]
async fn unknown_continent_city_zone_is_400() {
    let response = client().get("/Europe/Europe").await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(response.reason().as_deref(), Some("invalid timezone"));
}

#[tokio::test]
async fn continent_country_city_zone_renders() {
    let response = client().get("/America/Argentina/Buenos_Aires").await;
    assert_eq!(response.status_code(), 200);
    assert_close_to_now(
        datetime_from_html(&response),
        Tz::America__Argentina__Buenos_Aires,
    );
}

#[tokio::test]
async fn unknown_three_segment_zone_is_400() {
    let response = client().get("/Europe/Europe/America").await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn numeric_segment_falls_through_to_404() {
    let response = client().get("/12345").await;
    assert_eq!(response.status_code(), 404);
    assert_eq!(response.text(), "not found");
}

#[tokio::test]
async fn unrouted_post_is_404() {
    let response = client().post("/api/v2/time", "").await;
    assert_eq!(response.status_code(), 404);
    assert_eq!(response.text(), "not found");
}

#[tokio::test]
async fn api_time_returns_zone_time() {
    let zone = Tz::America__Argentina__Buenos_Aires;
    let response = client()
        .post_json("/api/v1/time", &json!({"tz": zone.name()}))
        .await;
    assert_eq!(response.status_code(), 200);
    let message = response.message().expect("success body has a message");
    let rendered = NaiveDateTime::parse_from_str(&message, DISPLAY_FORMAT).unwrap();
    assert_close_to_now(rendered, zone);
}

#[tokio::test]
async fn api_time_defaults_to_utc_without_a_body() {
    // Body-less clients send the JSON string "", which binds as an empty
    // object
    let response = client().post("/api/v1/time", r#""""#).await;
    assert_eq!(response.status_code(), 200);
    let message = response.message().unwrap();
    let rendered = NaiveDateTime::parse_from_str(&message, DISPLAY_FORMAT).unwrap();
    assert_close_to_now(rendered, Tz::UTC);
}

#[tokio::test]
async fn api_time_agrees_with_html_rendering() {
    let c = client();
    let html = c.get("/UTC").await;
    let api = c.post("/api/v1/time", "").await;

    let html_dt = datetime_from_html(&html);
    let api_dt = NaiveDateTime::parse_from_str(&api.message().unwrap(), DISPLAY_FORMAT).unwrap();
    let diff = (html_dt - api_dt).num_seconds().abs();
    assert!(diff <= MAX_DELAY_SECS);
}

#[tokio::test]
async fn api_time_rejects_unknown_zone() {
    let response = client()
        .post_json("/api/v1/time", &json!({"tz": "merica/Argentina/Buenos_Aires"}))
        .await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(response.reason().as_deref(), Some("invalid timezone"));
}

#[tokio::test]
async fn api_time_rejects_unknown_param() {
    let response = client()
        .post_json("/api/v1/time", &json!({"timezone": "UTC"}))
        .await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.reason().as_deref(),
        Some("unexpected param provided: timezone")
    );
}

#[tokio::test]
async fn api_time_rejects_list_param() {
    let response = client()
        .post_json("/api/v1/time", &json!({"tz": ["UTC"]}))
        .await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.reason().as_deref(),
        Some("list in json is not supported: tz")
    );
}

#[tokio::test]
async fn api_date_returns_zone_date() {
    let zone = Tz::America__Argentina__Buenos_Aires;
    let response = client()
        .post_json("/api/v1/date", &json!({"tz": zone.name()}))
        .await;
    assert_eq!(response.status_code(), 200);
    let expected = Utc::now().with_timezone(&zone).date_naive().to_string();
    assert_eq!(response.message().as_deref(), Some(expected.as_str()));
}

#[tokio::test]
async fn api_date_defaults_to_utc() {
    let response = client().post("/api/v1/date", "").await;
    assert_eq!(response.status_code(), 200);
    let expected = Utc::now().date_naive().to_string();
    assert_eq!(response.message().as_deref(), Some(expected.as_str()));
}

#[tokio::test]
async fn api_datediff_between_zones() {
    let response = client()
        .post_json(
            "/api/v1/datediff",
            &json!({
                "start": {"date": "12.20.2024 00:19:00", "tz": "Europe/Moscow"},
                "end": {"date": "12:19am 2024-12-20", "tz": "Asia/Novosibirsk"},
            }),
        )
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.message().as_deref(), Some("4:00:00"));
}

#[tokio::test]
async fn api_datediff_with_default_start_zone() {
    let response = client()
        .post_json(
            "/api/v1/datediff",
            &json!({
                "start": {"date": "12.20.2024 00:19:00"},
                "end": {"date": "12:19am 2024-12-20", "tz": "Asia/Novosibirsk"},
            }),
        )
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.message().as_deref(), Some("7:00:00"));
}

#[tokio::test]
async fn api_datediff_accepts_repeated_local_time() {
    // 01:30 on the US fall-back day occurs twice in New York; the earlier
    // offset (EDT) wins, so it equals 05:30 UTC.
    let response = client()
        .post_json(
            "/api/v1/datediff",
            &json!({
                "start": {"date": "11.03.2024 01:30:00", "tz": "America/New_York"},
                "end": {"date": "11.03.2024 05:30:00"},
            }),
        )
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.message().as_deref(), Some("0:00:00"));
}

#[tokio::test]
async fn api_datediff_rejects_malformed_date() {
    let response = client()
        .post_json(
            "/api/v1/datediff",
            &json!({
                "start": {"date": "12.20.2024 00:19:00"},
                "end": {"date": "12:19a 2024-12-20", "tz": "Asia/Novosibirsk"},
            }),
        )
        .await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.reason().as_deref(),
        Some("invalid datetime format: 12:19a 2024-12-20")
    );
}

#[tokio::test]
async fn api_datediff_rejects_missing_end() {
    let response = client()
        .post_json(
            "/api/v1/datediff",
            &json!({"start": {"date": "12.20.2024 00:19:00"}}),
        )
        .await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.reason().as_deref(),
        Some("missing required param: end")
    );
}

#[tokio::test]
async fn garbage_body_binds_as_empty_object() {
    // Unparseable bodies degrade to an empty object, which for /api/v1/time
    // means UTC
    let response = client().post("/api/v1/time", "{not json at all").await;
    assert_eq!(response.status_code(), 200);
    let rendered =
        NaiveDateTime::parse_from_str(&response.message().unwrap(), DISPLAY_FORMAT).unwrap();
    assert_close_to_now(rendered, Tz::UTC);
}
