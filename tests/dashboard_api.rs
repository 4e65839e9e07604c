#[macro_use]
mod common;

use std::sync::Arc;

use actix_web::{http::StatusCode, test};
use serde_json::Value;

use common::{admin, head1, head2, seeded_storage, teacher0};
use rust_courseload::models::auth::Role;

fn course_ids(resp: &Value) -> Vec<i64> {
    let mut ids: Vec<i64> = resp["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["course_id"].as_i64().unwrap())
        .collect();
    ids.sort();
    ids
}

fn teacher_ids(resp: &Value) -> Vec<String> {
    resp["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn test_undergraduate_dashboard_is_scoped_by_role() {
    let storage = Arc::new(seeded_storage());
    let app = test_app!(storage.clone());

    let cases = [
        (admin(), vec![5, 6, 7]),
        (head1(), vec![5, 7]),
        (head2(), vec![6]),
        (teacher0(), vec![5]),
        (common::bearer(Role::Head, "HEAD9", None), vec![]),
        (common::bearer(Role::Teacher, "T2", Some(1)), vec![]),
    ];
    for (header, expected) in cases {
        let req = test::TestRequest::get()
            .uri("/api/dashboard/undergraduate")
            .insert_header(header)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let resp: Value = test::read_body_json(resp).await;
        assert_eq!(course_ids(&resp), expected);
    }
}

#[actix_web::test]
async fn test_dashboard_rows_carry_teacher_names() {
    let storage = Arc::new(seeded_storage());
    let app = test_app!(storage.clone());

    let req = test::TestRequest::get()
        .uri("/api/dashboard/undergraduate")
        .insert_header(teacher0())
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    let row = &resp["data"][0];
    assert_eq!(row["teacher_id"], "T0");
    assert_eq!(row["teacher_name"], "Original Teacher");
    assert_eq!(row["number_student"], 60);
    assert_eq!(row["quantity"], 30);
}

#[actix_web::test]
async fn test_dashboard_requires_token() {
    let storage = Arc::new(seeded_storage());
    let app = test_app!(storage.clone());

    let req = test::TestRequest::get()
        .uri("/api/dashboard/undergraduate")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_teacher_list_is_scoped_and_sorted() {
    let storage = Arc::new(seeded_storage());
    let app = test_app!(storage.clone());

    let req = test::TestRequest::get()
        .uri("/api/teachers")
        .insert_header(head1())
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(teacher_ids(&resp), vec!["HEAD1", "T0", "T1", "T2"]);

    let req = test::TestRequest::get()
        .uri("/api/teachers")
        .insert_header(admin())
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        teacher_ids(&resp),
        vec!["HEAD1", "HEAD2", "M1", "T0", "T1", "T2"]
    );

    let req = test::TestRequest::get()
        .uri("/api/teachers")
        .insert_header(common::bearer(Role::Head, "HEAD9", None))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert!(teacher_ids(&resp).is_empty());
}

#[actix_web::test]
async fn test_teacher_list_forbidden_for_teachers() {
    let storage = Arc::new(seeded_storage());
    let app = test_app!(storage.clone());

    let req = test::TestRequest::get()
        .uri("/api/teachers")
        .insert_header(teacher0())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let resp: Value = test::read_body_json(resp).await;
    assert_eq!(resp["code"], 1003);
}
