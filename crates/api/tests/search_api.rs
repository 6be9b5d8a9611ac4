//! HTTP-level integration tests for the project search endpoint: the
//! approval gate for public callers, admin visibility, and filter
//! combinations.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post, post_json, project_payload, seed_user};
use sqlx::PgPool;

const OWNER: &str = "owner";
const ADMIN: &str = "admin";

async fn create_project(pool: &PgPool, user: i64, title: &str, company: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/projects",
        project_payload(title, company),
        Some((user, OWNER)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn approve(pool: &PgPool, admin: i64, id: i64) {
    let app = build_test_app(pool.clone());
    let response = post(
        app,
        &format!("/api/v1/projects/{id}/approve"),
        Some((admin, ADMIN)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

async fn search_titles(pool: &PgPool, query: &str, identity: Option<common::Identity>) -> Vec<String> {
    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/projects{query}"), identity).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn public_search_hides_unapproved_until_approved(pool: PgPool) {
    let user = seed_user(&pool, "alice").await;
    let admin = seed_user(&pool, "root").await;
    let id = create_project(&pool, user, "Clean Water", "Aqua Org").await;

    assert!(search_titles(&pool, "", None).await.is_empty());

    approve(&pool, admin, id).await;

    let titles = search_titles(&pool, "", None).await;
    assert_eq!(titles, vec!["Clean Water"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_search_includes_pending_and_denied(pool: PgPool) {
    let user = seed_user(&pool, "alice").await;
    let admin = seed_user(&pool, "root").await;
    create_project(&pool, user, "Clean Water", "Aqua Org").await;
    let denied = create_project(&pool, user, "Food Bank", "Pantry Org").await;

    let app = build_test_app(pool.clone());
    let response = post(
        app,
        &format!("/api/v1/projects/{denied}/deny"),
        Some((admin, ADMIN)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let titles = search_titles(&pool, "", Some((admin, ADMIN))).await;
    assert_eq!(titles.len(), 2);

    // An authenticated non-admin still only sees approved rows.
    assert!(search_titles(&pool, "", Some((user, OWNER))).await.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn search_string_matches_title_or_company_case_insensitively(pool: PgPool) {
    let user = seed_user(&pool, "alice").await;
    let admin = seed_user(&pool, "root").await;
    let a = create_project(&pool, user, "Clean Water", "Aqua Org").await;
    let b = create_project(&pool, user, "Food Bank", "Waterfront Pantry").await;
    let c = create_project(&pool, user, "Tree Planting", "Forest Org").await;
    for id in [a, b, c] {
        approve(&pool, admin, id).await;
    }

    let titles = search_titles(&pool, "?search_string=WATER", None).await;
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"Clean Water".to_string()));
    assert!(titles.contains(&"Food Bank".to_string()));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn nonprofit_and_forprofit_flags_filter_results(pool: PgPool) {
    let user = seed_user(&pool, "alice").await;
    let admin = seed_user(&pool, "root").await;

    let nonprofit = create_project(&pool, user, "Clean Water", "Aqua Org").await;

    let app = build_test_app(pool.clone());
    let mut payload = project_payload("Widget Drive", "Widget Co");
    payload["nonprofit"] = serde_json::json!(false);
    let response = post_json(app, "/api/v1/projects", payload, Some((user, OWNER))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let forprofit = body_json(response).await["id"].as_i64().unwrap();

    approve(&pool, admin, nonprofit).await;
    approve(&pool, admin, forprofit).await;

    assert_eq!(
        search_titles(&pool, "?nonprofit=1", None).await,
        vec!["Clean Water"]
    );
    assert_eq!(
        search_titles(&pool, "?forprofit=1", None).await,
        vec!["Widget Drive"]
    );
    // Both flags together contradict each other and match nothing.
    assert!(search_titles(&pool, "?nonprofit=1&forprofit=1", None)
        .await
        .is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn finished_flag_restricts_to_finished_projects(pool: PgPool) {
    let user = seed_user(&pool, "alice").await;
    let admin = seed_user(&pool, "root").await;
    let done = create_project(&pool, user, "Clean Water", "Aqua Org").await;
    let open = create_project(&pool, user, "Food Bank", "Pantry Org").await;
    approve(&pool, admin, done).await;
    approve(&pool, admin, open).await;

    let app = build_test_app(pool.clone());
    let response = common::put_json(
        app,
        &format!("/api/v1/projects/{done}/admin"),
        serde_json::json!({"state": "finished"}),
        Some((admin, ADMIN)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        search_titles(&pool, "?state=finished", None).await,
        vec!["Clean Water"]
    );
    assert_eq!(search_titles(&pool, "", None).await.len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn limit_and_offset_page_through_results(pool: PgPool) {
    let user = seed_user(&pool, "alice").await;
    let admin = seed_user(&pool, "root").await;
    for n in 1..=3 {
        let id = create_project(
            &pool,
            user,
            &format!("Project {n}"),
            &format!("Org {n}"),
        )
        .await;
        approve(&pool, admin, id).await;
    }

    let page = search_titles(&pool, "?limit=2", None).await;
    assert_eq!(page.len(), 2);

    let rest = search_titles(&pool, "?limit=2&offset=2", None).await;
    assert_eq!(rest.len(), 1);
}
