mod common;

use std::collections::HashSet;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use moviedb::{
    flash::{FLASH_COOKIE, Flash},
    models::NewActor,
};
use tower::ServiceExt;

use common::{body_string, insert_actor, multipart_body, multipart_content_type, spawn};

async fn post_actor(
    app: &common::TestApp,
    fields: &[(&str, &str)],
    file: Option<&[u8]>,
) -> axum::http::Response<Body> {
    app.router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/actor")
                .header(header::CONTENT_TYPE, multipart_content_type())
                .body(Body::from(multipart_body(fields, file)))
                .unwrap(),
        )
        .await
        .unwrap()
}

fn flash_from(resp: &axum::http::Response<Body>) -> Option<Flash> {
    resp.headers().get_all(header::SET_COOKIE).iter().find_map(|value| {
        let value = value.to_str().ok()?;
        let raw = value.strip_prefix(&format!("{FLASH_COOKIE}="))?;
        Flash::decode(raw.split(';').next()?)
    })
}

fn image_files(app: &common::TestApp) -> Vec<std::path::PathBuf> {
    let dir = app.static_dir.path().join("images/actors");
    match std::fs::read_dir(dir) {
        Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
        Err(_) => Vec::new(),
    }
}

#[tokio::test]
async fn valid_submission_takes_next_numeric_id() {
    let app = spawn().await;
    insert_actor(&app.catalog, "7", "张译").await;
    insert_actor(&app.catalog, "12", "吴京").await;
    insert_actor(&app.catalog, "3", "黄渤").await;

    let resp =
        post_actor(&app, &[("name", "沈腾"), ("gender", "男"), ("country", "中国")], None).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/actor");
    assert_eq!(flash_from(&resp), Some(Flash::success("Item created.")));

    let actor = app.catalog.actor("13").await.unwrap().expect("actor 13 stored");
    assert_eq!(actor.actor_name.as_deref(), Some("沈腾"));
    assert_eq!(app.catalog.actor_count().await.unwrap(), 4);
    assert!(image_files(&app).is_empty());
}

#[tokio::test]
async fn first_actor_gets_id_one() {
    let app = spawn().await;

    let actor = app.catalog.create_actor(NewActor::parse("周冬雨", "女", "中国").unwrap()).await.unwrap();
    assert_eq!(actor.actor_id, "1");
}

#[tokio::test]
async fn blank_field_changes_nothing() {
    let app = spawn().await;
    insert_actor(&app.catalog, "1", "吴京").await;

    for fields in [
        [("name", ""), ("gender", "男"), ("country", "中国")],
        [("name", "沈腾"), ("gender", "  "), ("country", "中国")],
        [("name", "沈腾"), ("gender", "男"), ("country", "")],
    ] {
        let resp = post_actor(&app, &fields, Some(b"\xff\xd8\xff fake jpeg".as_slice())).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(flash_from(&resp), Some(Flash::error("Invalid input.")));
    }

    assert_eq!(app.catalog.actor_count().await.unwrap(), 1);
    assert!(image_files(&app).is_empty());
}

#[tokio::test]
async fn missing_fields_are_rejected_like_blank_ones() {
    let app = spawn().await;

    let resp = post_actor(&app, &[("name", "沈腾")], None).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(flash_from(&resp), Some(Flash::error("Invalid input.")));
    assert_eq!(app.catalog.actor_count().await.unwrap(), 0);
}

#[tokio::test]
async fn uploaded_image_is_stored_under_the_new_id() {
    let app = spawn().await;
    insert_actor(&app.catalog, "41", "吴京").await;
    let photo = b"\xff\xd8\xff\xe0 not really a jpeg";

    let resp = post_actor(
        &app,
        &[("name", "沈腾"), ("gender", "男"), ("country", "中国")],
        Some(photo.as_slice()),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let stored = app.static_dir.path().join("images/actors/42.jpg");
    assert_eq!(std::fs::read(&stored).unwrap(), photo);
    assert_eq!(image_files(&app), vec![stored]);

    let resp = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/static/images/actors/42.jpg").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/actor_detail/42").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(body_string(resp).await.contains("/static/images/actors/42.jpg"));
}

#[tokio::test]
async fn empty_file_field_means_no_image() {
    let app = spawn().await;

    let resp =
        post_actor(&app, &[("name", "沈腾"), ("gender", "男"), ("country", "中国")], Some(b"".as_slice()))
            .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(app.catalog.actor_count().await.unwrap(), 1);
    assert!(image_files(&app).is_empty());
}

#[tokio::test]
async fn flash_renders_once_on_the_listing() {
    let app = spawn().await;
    let cookie = format!("{FLASH_COOKIE}={}", Flash::success("Item created.").encode());

    let resp = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/actor")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let cleared = resp
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .any(|v| v.to_str().unwrap().starts_with(&format!("{FLASH_COOKIE}=;")));
    assert!(cleared, "flash cookie should be expired after display");
    assert!(body_string(resp).await.contains("Item created."));
}

#[tokio::test]
async fn concurrent_creations_get_distinct_ids() {
    let app = spawn().await;
    insert_actor(&app.catalog, "100", "吴京").await;

    let creations = (0..8).map(|i| {
        let catalog = app.catalog.clone();
        async move {
            let actor = NewActor::parse(&format!("actor {i}"), "男", "中国").unwrap();
            catalog.create_actor(actor).await.unwrap().actor_id
        }
    });
    let ids: HashSet<String> = futures::future::join_all(creations).await.into_iter().collect();

    let expected: HashSet<String> = (101..=108).map(|n: u32| n.to_string()).collect();
    assert_eq!(ids, expected);
    assert_eq!(app.catalog.actor_count().await.unwrap(), 9);
}

#[tokio::test]
async fn ids_that_only_start_with_digits_are_ignored() {
    let app = spawn().await;
    insert_actor(&app.catalog, "3", "黄渤").await;
    insert_actor(&app.catalog, "12abc", "吴京").await;

    let scanned = moviedb::catalog::next_id_after(["3", "12abc"]);
    let actor =
        app.catalog.create_actor(NewActor::parse("沈腾", "男", "中国").unwrap()).await.unwrap();

    assert_eq!(scanned, "4");
    assert_eq!(actor.actor_id, scanned);
}

#[tokio::test]
async fn oversized_upload_is_rejected_with_413() {
    let app = spawn().await;
    let photo = vec![0xffu8; 2 * 1024 * 1024];

    let resp = post_actor(
        &app,
        &[("name", "沈腾"), ("gender", "男"), ("country", "中国")],
        Some(photo.as_slice()),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(app.catalog.actor_count().await.unwrap(), 0);
    assert!(image_files(&app).is_empty());
}
