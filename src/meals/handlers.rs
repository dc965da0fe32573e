use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{CreateMealRequest, RatingScale};
use super::model::{Meal, MealDraft};
use super::services::create_meal;
use crate::{error::ApiError, state::AppState};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/meals/rating-scale", get(rating_scale))
}

pub fn write_routes(max_body_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/meals", post(create))
        .layer(DefaultBodyLimit::max(max_body_bytes))
}

pub async fn rating_scale() -> Json<RatingScale> {
    Json(RatingScale::default())
}

/// POST /meals { name, photo?: [u8], rating }
#[instrument(skip_all)]
pub async fn create(
    Json(body): Json<CreateMealRequest>,
) -> Result<(StatusCode, Json<Meal>), ApiError> {
    let draft = MealDraft::try_from(body)?;
    let meal = create_meal(draft)?;
    info!(name = %meal.name(), "meal accepted");
    Ok((StatusCode::CREATED, Json(meal)))
}

#[cfg(test)]
mod handler_tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request},
    };
    use std::sync::{Arc, Mutex};

    use tower::ServiceExt;

    use crate::app::build_app;
    use crate::config::AppConfig;
    use crate::state::AppState;

    use super::*;

    async fn post_json(body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        post_raw(AppState::fake(), body.to_string()).await
    }

    async fn post_raw(state: AppState, body: String) -> (StatusCode, serde_json::Value) {
        let app = build_app(state);
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/meals")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn valid_meal_is_created() {
        let (status, json) =
            post_json(serde_json::json!({ "name": "Zero", "rating": 0 })).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["name"], "Zero");
        assert_eq!(json["rating"], 0);
        assert!(json["photo"].is_null());
    }

    #[tokio::test]
    async fn photo_bytes_are_echoed() {
        let (status, json) = post_json(serde_json::json!({
            "name": "Positive",
            "photo": [255, 216, 255],
            "rating": 5
        }))
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["photo"], serde_json::json!([255, 216, 255]));
    }

    #[tokio::test]
    async fn invalid_meals_are_unprocessable() {
        for body in [
            serde_json::json!({ "name": "Negative", "rating": -1 }),
            serde_json::json!({ "name": "", "rating": 0 }),
            serde_json::json!({ "name": "Large", "rating": 7 }),
        ] {
            let (status, json) = post_json(body).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(json["error"], "validation_failure");
        }
    }

    #[tokio::test]
    async fn rating_beyond_i64_is_unprocessable() {
        let (status, json) = post_raw(
            AppState::fake(),
            r#"{"name":"Big","rating":99999999999999999999}"#.to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"], "validation_failure");
    }

    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn rejected_meal_emits_no_warning() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&captured);
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || CaptureWriter(Arc::clone(&sink)))
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (status, _) = post_json(serde_json::json!({ "name": "Large", "rating": 7 })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let output = String::from_utf8(captured.lock().unwrap().clone()).unwrap();
        assert!(output.is_empty(), "unexpected log output: {output}");
    }

    #[tokio::test]
    async fn body_over_configured_limit_is_rejected() {
        let config = AppConfig {
            max_body_bytes: 16,
            ..AppConfig::default()
        };
        let state = AppState::from_parts(Arc::new(config));
        let body = serde_json::json!({ "name": "A rather long meal name", "rating": 3 });
        let (status, _) = post_raw(state, body.to_string()).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn rating_scale_is_zero_to_five() {
        let app = build_app(AppState::fake());
        let req = Request::builder()
            .uri("/api/v1/meals/rating-scale")
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "min": 0, "max": 5 }));
    }
}
