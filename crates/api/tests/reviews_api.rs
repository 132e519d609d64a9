//! HTTP-level integration tests for `/api/reviews`.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener. Every test starts from the `games`
//! fixture: 13 reviews, 11 of them in "social deduction".

mod common;

use axum::http::{Method, StatusCode};
use common::{body_bytes, body_json, delete, get, patch_json, post_json, send_raw};
use gamehub_core::listing::ReviewSortColumn;
use serde_json::{json, Value};
use sqlx::PgPool;

fn review_ids(json: &serde_json::Value) -> Vec<i64> {
    json["reviews"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["review_id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn list_defaults_to_newest_first_page_of_ten(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let reviews = json["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 10);
    assert_eq!(json["total_count"], 13);

    // Newest review in the fixture.
    assert_eq!(reviews[0]["review_id"], 7);
    let dates: Vec<&str> = reviews
        .iter()
        .map(|r| r["created_at"].as_str().unwrap())
        .collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);

    for review in reviews {
        assert!(review["comment_count"].is_number());
        assert!(review.get("total_count").is_none());
    }
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn list_filters_by_category(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews?category=social+deduction").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total_count"], 11);
    for review in json["reviews"].as_array().unwrap() {
        assert_eq!(review["category"], "social deduction");
    }
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn total_count_ignores_limit(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews?category=social%20deduction&limit=5").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["reviews"].as_array().unwrap().len(), 5);
    assert_eq!(json["total_count"], 11);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn list_sorts_by_votes_ascending(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/reviews?sort_by=votes&order=asc&category=social+deduction",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let votes: Vec<i64> = json["reviews"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["votes"].as_i64().unwrap())
        .collect();
    assert_eq!(votes.len(), 10);
    let mut sorted = votes.clone();
    sorted.sort();
    assert_eq!(votes, sorted);
    assert_eq!(votes[0], 0);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn list_sorts_by_comment_count(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews?sort_by=comment_count").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let counts: Vec<i64> = json["reviews"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["comment_count"].as_i64().unwrap())
        .collect();
    assert_eq!(&counts[..3], &[3, 3, 0]);
}

/// Whether `a` sorts no later than `b`. Text and timestamps are compared by
/// Postgres so the check uses the same collation as `ORDER BY`.
async fn sorts_before(pool: &PgPool, column: ReviewSortColumn, a: &Value, b: &Value) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a <= b;
    }
    let sql = match column {
        ReviewSortColumn::CreatedAt => "SELECT $1::timestamptz <= $2::timestamptz",
        _ => "SELECT $1::text <= $2::text",
    };
    sqlx::query_scalar::<_, bool>(sql)
        .bind(a.as_str().unwrap())
        .bind(b.as_str().unwrap())
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn every_sort_column_orders_in_both_directions(pool: PgPool) {
    for column in ReviewSortColumn::ALL {
        for order in ["asc", "desc"] {
            let uri = format!(
                "/api/reviews?sort_by={}&order={order}&limit=13",
                column.name()
            );
            let app = common::build_test_app(pool.clone());
            let response = get(app, &uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");

            let json = body_json(response).await;
            let values: Vec<Value> = json["reviews"]
                .as_array()
                .unwrap()
                .iter()
                .map(|r| r[column.name()].clone())
                .collect();
            assert_eq!(values.len(), 13, "{uri}");

            for pair in values.windows(2) {
                let (first, second) = match order {
                    "asc" => (&pair[0], &pair[1]),
                    _ => (&pair[1], &pair[0]),
                };
                assert!(
                    sorts_before(&pool, column, first, second).await,
                    "{uri}: {} out of order with {}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn pages_are_disjoint_and_exhaustive(pool: PgPool) {
    let base = "/api/reviews?category=social+deduction&sort_by=review_id&order=asc";

    let app = common::build_test_app(pool.clone());
    let everything = review_ids(&body_json(get(app, &format!("{base}&limit=100")).await).await);
    assert_eq!(everything.len(), 11);

    let mut collected = Vec::new();
    for page in 1..=3 {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("{base}&limit=4&page={page}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        collected.extend(review_ids(&body_json(response).await));
    }
    assert_eq!(collected, everything);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("{base}&limit=4&page=4")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["msg"], "No content found on page 4");
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn legacy_p_parameter_selects_page(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews?p=2").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["reviews"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn existing_category_without_reviews_is_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews?category=children%27s%20games").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["reviews"], json!([]));
    assert_eq!(json["total_count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn unknown_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews?category=hidden+roles").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["msg"], "No such category");
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn invalid_listing_parameters_return_400(pool: PgPool) {
    let cases = [
        ("/api/reviews?sort_by=price", "Invalid column to sort by"),
        (
            "/api/reviews?sort_by=votes;DROP%20TABLE%20reviews",
            "Invalid column to sort by",
        ),
        ("/api/reviews?order=DESC", "Query order must be asc or desc"),
        ("/api/reviews?limit=0", "Query limit must be a positive integer"),
        ("/api/reviews?limit=ten", "Query limit must be a positive integer"),
        ("/api/reviews?page=-1", "Query page must be a positive integer"),
        (
            "/api/reviews?sort_by=price&category=hidden+roles",
            "Invalid column to sort by",
        ),
    ];

    for (uri, msg) in cases {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body_json(response).await["msg"], msg, "{uri}");
    }
}

// ---------------------------------------------------------------------------
// Single review
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn get_review_includes_comment_count(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews/2").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let review = &json["review"];
    assert_eq!(review["review_id"], 2);
    assert_eq!(review["title"], "Jenga");
    assert_eq!(review["owner"], "philippaclaire9");
    assert_eq!(review["comment_count"], 3);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn review_without_comments_has_zero_count(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/reviews/1").await).await;

    assert_eq!(json["review"]["comment_count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn repeated_reads_are_identical(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let first = body_bytes(get(app, "/api/reviews/3").await).await;
    let app = common::build_test_app(pool);
    let second = body_bytes(get(app, "/api/reviews/3").await).await;

    assert_eq!(first, second);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn get_nonexistent_review_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews/9999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["msg"],
        "No review with that ID (9999)"
    );
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn get_review_with_text_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews/banana").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["msg"],
        "Incorrect datatype for review_id"
    );
}

// ---------------------------------------------------------------------------
// Votes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn patch_increments_votes(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(app, "/api/reviews/1", json!({"inc_votes": 2})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["review"]["review_id"], 1);
    assert_eq!(json["review"]["votes"], 3);
    assert_eq!(json["review"]["comment_count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn patch_allows_votes_below_zero(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(app, "/api/reviews/1", json!({"inc_votes": -5})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["review"]["votes"], -4);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn patch_rejects_bad_bodies(pool: PgPool) {
    for body in [json!({"inc_votes": "cat"}), json!({}), json!({"votes": 1})] {
        let app = common::build_test_app(pool.clone());
        let response = patch_json(app, "/api/reviews/1", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(body_json(response).await["msg"], "Invalid request body");
    }

    let app = common::build_test_app(pool);
    let response = send_raw(app, Method::PATCH, "/api/reviews/1", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn patch_unknown_or_malformed_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = patch_json(app, "/api/reviews/9999", json!({"inc_votes": 1})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = patch_json(app, "/api/reviews/abc", json!({"inc_votes": 1})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["msg"],
        "Incorrect datatype for review_id"
    );
}

// ---------------------------------------------------------------------------
// Create / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn create_review_returns_201_with_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/reviews",
        json!({
            "owner": "dav3rid",
            "title": "Dominion",
            "review_body": "A classic deck builder",
            "designer": "Donald X. Vaccarino",
            "category": "euro game",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let review = &json["review"];
    assert_eq!(review["review_id"], 14);
    assert_eq!(review["title"], "Dominion");
    assert_eq!(review["votes"], 0);
    assert_eq!(review["comment_count"], 0);
    assert!(review["review_img_url"]
        .as_str()
        .unwrap()
        .starts_with("https://"));
    assert!(review["created_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn create_review_keeps_supplied_image(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/reviews",
        json!({
            "owner": "dav3rid",
            "title": "Dominion",
            "review_body": "A classic deck builder",
            "designer": "Donald X. Vaccarino",
            "category": "euro game",
            "review_img_url": "https://example.test/dominion.png",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await["review"]["review_img_url"],
        "https://example.test/dominion.png"
    );
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn create_review_missing_keys_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/reviews",
        json!({"owner": "dav3rid", "category": "euro game"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["msg"],
        "Invalid request body - missing necessary keys"
    );
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn create_review_unknown_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/reviews",
        json!({
            "owner": "dav3rid",
            "title": "Dominion",
            "review_body": "A classic deck builder",
            "designer": "Donald X. Vaccarino",
            "category": "deck building",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["msg"],
        "No content found for (category)=(deck building)"
    );
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn delete_review_removes_it_and_its_comments(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/reviews/2").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let app = common::build_test_app(pool.clone());
    assert_eq!(
        get(app, "/api/reviews/2").await.status(),
        StatusCode::NOT_FOUND
    );

    let remaining: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments WHERE review_id = 2")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining.0, 0);

    let app = common::build_test_app(pool);
    let response = delete(app, "/api/reviews/2").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("games"))]
async fn delete_review_with_text_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/reviews/two").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
