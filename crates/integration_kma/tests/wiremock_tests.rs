//! Integration tests for the KMA client using wiremock
//!
//! These tests run the client against a mock HTTP server that answers with
//! the KMA response envelope.

use domain::{BaseDateTime, Category, GridCoordinate, RegionCode};
use integration_kma::{KmaClient, KmaConfig, KmaError, KmaHttpClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn envelope(items: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "response": {
            "header": {"resultCode": "00", "resultMsg": "NORMAL_SERVICE"},
            "body": {
                "dataType": "JSON",
                "items": {"item": items},
                "pageNo": 1,
                "numOfRows": 1000,
                "totalCount": 3
            }
        }
    })
}

fn result_only(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "response": {"header": {"resultCode": code, "resultMsg": message}}
    })
}

fn sample_short_term() -> serde_json::Value {
    envelope(serde_json::json!([
        {"baseDate": "20261018", "baseTime": "0500", "category": "TMP",
         "fcstDate": "20261018", "fcstTime": "0600", "fcstValue": "11", "nx": 60, "ny": 127},
        {"baseDate": "20261018", "baseTime": "0500", "category": "SKY",
         "fcstDate": "20261018", "fcstTime": "0600", "fcstValue": "1", "nx": 60, "ny": 127},
        {"baseDate": "20261018", "baseTime": "0500", "category": "TMN",
         "fcstDate": "20261018", "fcstTime": "0600", "fcstValue": "9.0", "nx": 60, "ny": 127}
    ]))
}

fn create_test_client(mock_server: &MockServer) -> KmaHttpClient {
    let config = KmaConfig {
        service_key: "test-key".to_string(),
        short_term_base_url: format!("{}/short", mock_server.uri()),
        mid_term_base_url: format!("{}/mid", mock_server.uri()),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    KmaHttpClient::new(config).expect("Failed to create client")
}

fn seoul() -> GridCoordinate {
    GridCoordinate::new(60, 127)
}

fn base() -> BaseDateTime {
    BaseDateTime::new("20261018", "0500")
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_short_term_forecast_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/short/getVilageFcst"))
        .and(query_param("serviceKey", "test-key"))
        .and(query_param("base_date", "20261018"))
        .and(query_param("base_time", "0500"))
        .and(query_param("nx", "60"))
        .and(query_param("ny", "127"))
        .and(query_param("dataType", "JSON"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_short_term()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.short_term_forecast(seoul(), &base()).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    let items = result.unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].category, Category::Temperature);
    assert_eq!(items[0].fcst_value, "11");
    assert_eq!(items[2].category, Category::DailyMinimum);
}

#[tokio::test]
async fn test_ultra_short_term_status_success() {
    let mock_server = MockServer::start().await;

    let body = envelope(serde_json::json!([
        {"baseDate": "20261018", "baseTime": "0800", "category": "T1H",
         "obsrValue": "13.2", "nx": 60, "ny": 127},
        {"baseDate": "20261018", "baseTime": "0800", "category": "REH",
         "obsrValue": "64", "nx": 60, "ny": 127}
    ]));

    Mock::given(method("GET"))
        .and(path("/short/getUltraSrtNcst"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let items = client
        .ultra_short_term_status(seoul(), &BaseDateTime::new("20261018", "0800"))
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].category, Category::HourlyTemperature);
    assert_eq!(items[0].obsr_value, "13.2");
    assert_eq!(items[1].category, Category::Humidity);
}

#[tokio::test]
async fn test_ultra_short_term_forecast_success() {
    let mock_server = MockServer::start().await;

    let body = envelope(serde_json::json!([
        {"baseDate": "20261018", "baseTime": "0830", "category": "LGT",
         "fcstDate": "20261018", "fcstTime": "0900", "fcstValue": "0", "nx": 60, "ny": 127}
    ]));

    Mock::given(method("GET"))
        .and(path("/short/getUltraSrtFcst"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let items = client
        .ultra_short_term_forecast(seoul(), &BaseDateTime::new("20261018", "0830"))
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category, Category::Lightning);
}

#[tokio::test]
async fn test_mid_term_land_forecast_success() {
    let mock_server = MockServer::start().await;

    let body = envelope(serde_json::json!([{
        "regId": "11B00000",
        "rnSt4Am": 20, "rnSt4Pm": 60,
        "wf4Am": "맑음", "wf4Pm": "흐리고 비",
        "rnSt8": 30, "wf8": "구름많음"
    }]));

    Mock::given(method("GET"))
        .and(path("/mid/getMidLandFcst"))
        .and(query_param("regId", "11B00000"))
        .and(query_param("tmFc", "202610180600"))
        .and(query_param("numOfRows", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let land = client
        .mid_term_land_forecast(&RegionCode::new("11B00000"), "202610180600")
        .await
        .unwrap()
        .expect("record");

    assert_eq!(land.reg_id, "11B00000");
    let day4 = land.outlook(4);
    assert_eq!(day4.weather_pm, Some("흐리고 비"));
    assert_eq!(day4.rain_pm, Some(60));
    assert_eq!(land.outlook(8).weather_am, Some("구름많음"));
}

#[tokio::test]
async fn test_mid_term_temperature_forecast_success() {
    let mock_server = MockServer::start().await;

    let body = envelope(serde_json::json!([{
        "regId": "11B10101",
        "taMin4": 8, "taMax4": 19,
        "taMin10": -1, "taMax10": 7
    }]));

    Mock::given(method("GET"))
        .and(path("/mid/getMidTa"))
        .and(query_param("regId", "11B10101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let temperature = client
        .mid_term_temperature_forecast(&RegionCode::new("11B10101"), "202610180600")
        .await
        .unwrap()
        .expect("record");

    assert_eq!(temperature.range(4), (Some(8.0), Some(19.0)));
    assert_eq!(temperature.range(10), (Some(-1.0), Some(7.0)));
    assert_eq!(temperature.range(5), (None, None));
}

#[tokio::test]
async fn test_mid_term_without_record_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mid/getMidTa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(result_only("03", "NO_DATA")))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client
        .mid_term_temperature_forecast(&RegionCode::new("11B10101"), "202610180600")
        .await;

    assert!(matches!(result, Ok(None)), "Expected Ok(None), got: {result:?}");
}

#[tokio::test]
async fn test_empty_items_string_is_empty_list() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "response": {
            "header": {"resultCode": "00", "resultMsg": "NORMAL_SERVICE"},
            "body": {"dataType": "JSON", "items": "", "totalCount": 0}
        }
    });

    Mock::given(method("GET"))
        .and(path("/short/getVilageFcst"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let items = client.short_term_forecast(seoul(), &base()).await.unwrap();
    assert!(items.is_empty());
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/short/getVilageFcst"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.short_term_forecast(seoul(), &base()).await;

    assert!(
        matches!(result, Err(KmaError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_http_rate_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/short/getVilageFcst"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.short_term_forecast(seoul(), &base()).await;

    assert!(matches!(result, Err(KmaError::RateLimitExceeded)));
}

#[tokio::test]
async fn test_result_code_rate_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/short/getVilageFcst"))
        .respond_with(ResponseTemplate::new(200).set_body_json(result_only(
            "22",
            "LIMITED_NUMBER_OF_SERVICE_REQUESTS_EXCEEDS_ERROR",
        )))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.short_term_forecast(seoul(), &base()).await;

    assert!(matches!(result, Err(KmaError::RateLimitExceeded)));
}

#[tokio::test]
async fn test_result_code_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/short/getVilageFcst"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(result_only("10", "INVALID_REQUEST_PARAMETER_ERROR")),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.short_term_forecast(seoul(), &base()).await;

    match result {
        Err(KmaError::ApiError { code, message }) => {
            assert_eq!(code, "10");
            assert_eq!(message, "INVALID_REQUEST_PARAMETER_ERROR");
        },
        other => unreachable!("Expected ApiError, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_unregistered_key_xml() {
    let mock_server = MockServer::start().await;

    let xml = "<OpenAPI_ServiceResponse><cmmMsgHeader>\
        <errMsg>SERVICE ERROR</errMsg>\
        <returnAuthMsg>SERVICE_KEY_IS_NOT_REGISTERED_ERROR</returnAuthMsg>\
        <returnReasonCode>30</returnReasonCode>\
        </cmmMsgHeader></OpenAPI_ServiceResponse>";

    Mock::given(method("GET"))
        .and(path("/mid/getMidLandFcst"))
        .respond_with(ResponseTemplate::new(200).set_body_string(xml))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client
        .mid_term_land_forecast(&RegionCode::new("11B00000"), "202610180600")
        .await;

    assert!(
        matches!(result, Err(KmaError::ApiError { ref code, .. }) if code == "30"),
        "Expected ApiError 30, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_returns_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/short/getVilageFcst"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.short_term_forecast(seoul(), &base()).await;

    assert!(matches!(result, Err(KmaError::ParseError(_))));
}

#[tokio::test]
async fn test_not_found_returns_request_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/short/getVilageFcst"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.short_term_forecast(seoul(), &base()).await;

    assert!(matches!(result, Err(KmaError::RequestFailed(_))));
}
