//! HTTP-level integration tests for the equipment endpoints, including the
//! nested sensor collection.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Equipment CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_equipment_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/equipment",
        serde_json::json!({"name": "Turbine 7", "fuel_type": "wind", "capacity_mw": 3.5}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Turbine 7");
    assert_eq!(json["fuel_type"], "wind");
    assert_eq!(json["capacity_mw"], 3.5);
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_equipment_applies_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/equipment",
        serde_json::json!({"name": "Bare Unit"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["project_name"], "Unknown Project");
    assert_eq!(json["fuel_type"], "hydro");
    assert!(json["unit_number"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_equipment_rejects_unknown_fuel_type(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/equipment",
        serde_json::json!({"name": "Bad Fuel", "fuel_type": "plutonium"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("plutonium"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_equipment_rejects_nonpositive_unit_number(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/equipment",
        serde_json::json!({"name": "Unit Zero", "unit_number": 0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_equipment_returns_detail_with_sensors(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/equipment",
            serde_json::json!({"name": "Detail Unit"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Fresh equipment has no sensors.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/equipment/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Detail Unit");
    assert_eq!(json["sensors"].as_array().unwrap().len(), 0);

    // Mounting a sensor makes it show up in the detail view.
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/v1/equipment/{id}/sensors"),
        serde_json::json!({"sensor_type": "temperature", "unit": "C"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/equipment/{id}")).await).await;
    let sensors = json["sensors"].as_array().unwrap();
    assert_eq!(sensors.len(), 1);
    assert_eq!(sensors[0]["sensor_type"], "temperature");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_equipment_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/equipment/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].as_str().unwrap().contains("999999"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_equipment_preserves_omitted_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/equipment",
            serde_json::json!({
                "name": "Original",
                "project_name": "North Plant",
                "fuel_type": "thermal",
                "unit_number": 3
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/equipment/{id}"),
        serde_json::json!({"name": "Renamed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Renamed");
    assert_eq!(json["project_name"], "North Plant");
    assert_eq!(json["fuel_type"], "thermal");
    assert_eq!(json["unit_number"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_equipment_validates_fuel_type(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/equipment",
            serde_json::json!({"name": "Fuel Check"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/equipment/{id}"),
        serde_json::json!({"fuel_type": "antimatter"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_equipment_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/equipment/999999",
        serde_json::json!({"name": "Ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_equipment_returns_204(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/equipment",
            serde_json::json!({"name": "Delete Me"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/equipment/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/equipment/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_equipment_includes_sensor_counts(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let unit_a = body_json(
        post_json(
            app,
            "/api/v1/equipment",
            serde_json::json!({"name": "Alpha"}),
        )
        .await,
    )
    .await;
    let a_id = unit_a["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/equipment",
        serde_json::json!({"name": "Beta"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/v1/equipment/{a_id}/sensors"),
        serde_json::json!({"sensor_type": "vibration"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/equipment").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    // Ordered by name, so Alpha comes first with its one sensor.
    assert_eq!(arr[0]["name"], "Alpha");
    assert_eq!(arr[0]["sensor_count"], 1);
    assert_eq!(arr[1]["sensor_count"], 0);
}

// ---------------------------------------------------------------------------
// Sensors nested under equipment
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_sensor_under_equipment(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let equipment = body_json(
        post_json(
            app,
            "/api/v1/equipment",
            serde_json::json!({"name": "Sensor Host"}),
        )
        .await,
    )
    .await;
    let equipment_id = equipment["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/equipment/{equipment_id}/sensors"),
        serde_json::json!({
            "sensor_type": "pressure",
            "unit": "bar",
            "min_value": 0.5,
            "max_value": 12.0
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["sensor_type"], "pressure");
    // The owning equipment comes from the URL path.
    assert_eq!(json["equipment_id"], equipment_id);
    assert_eq!(json["min_value"], 0.5);
    assert_eq!(json["max_value"], 12.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_sensor_under_missing_equipment_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/equipment/999999/sensors",
        serde_json::json!({"sensor_type": "temperature"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_sensors_for_equipment(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let equipment = body_json(
        post_json(
            app,
            "/api/v1/equipment",
            serde_json::json!({"name": "Multi Sensor"}),
        )
        .await,
    )
    .await;
    let eid = equipment["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/v1/equipment/{eid}/sensors"),
        serde_json::json!({"sensor_type": "temperature"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/v1/equipment/{eid}/sensors"),
        serde_json::json!({"sensor_type": "vibration"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/equipment/{eid}/sensors")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}
