use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::locations::handlers;
use crate::features::locations::services::LocationService;

/// Create routes for the locations feature
pub fn routes(service: Arc<LocationService>) -> Router {
    Router::new()
        .route(
            "/locations",
            post(handlers::create_location).get(handlers::list_locations),
        )
        .route("/locations/geojson", get(handlers::export_geojson))
        .route(
            "/locations/{id}",
            get(handlers::get_location)
                .put(handlers::update_location)
                .delete(handlers::delete_location),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::locations::repositories::memory::InMemoryLocationRepository;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn test_server() -> TestServer {
        let repository = Arc::new(InMemoryLocationRepository::new());
        let service = Arc::new(LocationService::new(repository));
        TestServer::new(routes(service)).unwrap()
    }

    async fn create_city_park(server: &TestServer) -> Value {
        let response = server
            .post("/locations")
            .json(&json!({
                "name": "City Park",
                "category": 6,
                "latitude": -23.55,
                "longitude": -46.63
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        response.json::<Value>()
    }

    #[tokio::test]
    async fn create_returns_201_with_location_header_and_body() {
        let server = test_server();

        let response = server
            .post("/locations")
            .json(&json!({
                "name": "City Park",
                "category": 6,
                "latitude": -23.55,
                "longitude": -46.63
            }))
            .await;

        response.assert_status(StatusCode::CREATED);

        let body = response.json::<Value>();
        let id = body["id"].as_i64().unwrap();
        assert_eq!(body["name"], "City Park");
        assert_eq!(body["category"], "Park");
        assert_eq!(body["latitude"], -23.55);
        assert_eq!(body["longitude"], -46.63);

        let headers = response.headers();
        let location = headers.get("location").expect("Location header missing");
        assert_eq!(location.to_str().unwrap(), format!("/locations/{}", id));
    }

    #[tokio::test]
    async fn create_with_out_of_range_latitude_returns_400() {
        let server = test_server();

        let response = server
            .post("/locations")
            .json(&json!({
                "name": "Nowhere",
                "category": 0,
                "latitude": 91.0,
                "longitude": 0.0
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn create_with_unknown_category_returns_400() {
        let server = test_server();

        let response = server
            .post("/locations")
            .json(&json!({
                "name": "Nowhere",
                "category": 9,
                "latitude": 0.0,
                "longitude": 0.0
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_with_missing_fields_returns_400() {
        let server = test_server();

        let response = server
            .post("/locations")
            .json(&json!({ "name": "Incomplete" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_returns_bare_array() {
        let server = test_server();

        create_city_park(&server).await;
        let response = server.get("/locations").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        let locations = body.as_array().expect("expected a bare JSON array");
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0]["name"], "City Park");
    }

    #[tokio::test]
    async fn get_missing_id_returns_404() {
        let server = test_server();

        let response = server.get("/locations/999").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_replaces_fields() {
        let server = test_server();

        let created = create_city_park(&server).await;
        let id = created["id"].as_i64().unwrap();

        let response = server
            .put(&format!("/locations/{}", id))
            .json(&json!({
                "name": "Renamed Park",
                "category": 8,
                "latitude": 10.0,
                "longitude": 20.0
            }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["id"].as_i64().unwrap(), id);
        assert_eq!(body["name"], "Renamed Park");
        assert_eq!(body["category"], "Other");
    }

    #[tokio::test]
    async fn update_missing_id_returns_404() {
        let server = test_server();

        let response = server
            .put("/locations/999")
            .json(&json!({
                "name": "Ghost",
                "category": 0,
                "latitude": 0.0,
                "longitude": 0.0
            }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_missing_id_returns_404() {
        let server = test_server();

        let response = server.delete("/locations/999").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_get_delete_lifecycle() {
        let server = test_server();

        let created = create_city_park(&server).await;
        let id = created["id"].as_i64().unwrap();

        let response = server.get(&format!("/locations/{}", id)).await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["name"], "City Park");
        assert_eq!(body["category"], "Park");
        assert_eq!(body["latitude"], -23.55);
        assert_eq!(body["longitude"], -46.63);

        let response = server.delete(&format!("/locations/{}", id)).await;
        response.assert_status(StatusCode::NO_CONTENT);

        let response = server.get(&format!("/locations/{}", id)).await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn geojson_export_sets_content_type_and_wraps_features() {
        let server = test_server();

        create_city_park(&server).await;
        server
            .post("/locations")
            .json(&json!({
                "name": "Central Pharmacy",
                "category": 0,
                "latitude": 52.52,
                "longitude": 13.4
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.get("/locations/geojson").await;
        response.assert_status_ok();

        let headers = response.headers();
        let content_type = headers.get("content-type").expect("content-type missing");
        assert_eq!(content_type.to_str().unwrap(), "application/geo+json");

        let body: Value = serde_json::from_str(&response.text()).unwrap();
        assert_eq!(body["type"], "FeatureCollection");

        let features = body["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        for feature in features {
            assert_eq!(feature["type"], "Feature");
            assert_eq!(feature["geometry"]["type"], "Point");
            assert_eq!(feature["geometry"]["coordinates"].as_array().unwrap().len(), 2);
        }
        assert_eq!(features[0]["geometry"]["coordinates"][0], -46.63);
        assert_eq!(features[0]["geometry"]["coordinates"][1], -23.55);
        assert_eq!(features[1]["properties"]["category"], "Pharmacy");
    }
}
