#![allow(dead_code)]

use std::sync::Arc;

use axum::{Router, body::Body, http::Response};
use http_body_util::BodyExt;
use moviedb::{
    AppState,
    catalog::Catalog,
    config::Config,
    db,
    entities::{actor_info, movie_actor_relation, movie_info},
};
use sea_orm::{EntityTrait, Set};
use tempfile::TempDir;

pub const BOUNDARY: &str = "moviedb-test-boundary";

pub struct TestApp {
    pub router: Router,
    pub catalog: Catalog,
    pub static_dir: TempDir,
    _db_dir: TempDir,
}

/// Fresh app over an empty, migrated database file and an empty static dir.
pub async fn spawn() -> TestApp {
    let db_dir = tempfile::tempdir().unwrap();
    let static_dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", db_dir.path().join("test.db").display());

    let db = db::connect_and_migrate(&url).await.unwrap();
    let catalog = Catalog::new(db);
    let config = Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        database_url: url,
        static_dir: static_dir.path().to_path_buf(),
        owner_name: "Lilian".to_string(),
        max_upload_bytes: 1024 * 1024,
    };
    let state = Arc::new(AppState { config: Arc::new(config), catalog: catalog.clone() });

    TestApp { router: moviedb::app(state), catalog, static_dir, _db_dir: db_dir }
}

pub async fn insert_movie(catalog: &Catalog, id: &str, name: &str) {
    movie_info::Entity::insert(movie_info::ActiveModel {
        movie_id: Set(id.to_string()),
        movie_name: Set(Some(name.to_string())),
        release_date: Set(Some("2019-02-05".to_string())),
        country: Set(Some("中国".to_string())),
        movie_type: Set(Some("科幻".to_string())),
        year: Set(Some(2019)),
        box_office: Set(Some(46.86)),
    })
    .exec(catalog.db())
    .await
    .unwrap();
}

pub async fn insert_actor(catalog: &Catalog, id: &str, name: &str) {
    actor_info::Entity::insert(actor_info::ActiveModel {
        actor_id: Set(id.to_string()),
        actor_name: Set(Some(name.to_string())),
        gender: Set(Some("男".to_string())),
        country: Set(Some("中国".to_string())),
    })
    .exec(catalog.db())
    .await
    .unwrap();
}

pub async fn insert_relation(
    catalog: &Catalog,
    id: &str,
    movie_id: &str,
    actor_id: &str,
    relation_type: &str,
) {
    movie_actor_relation::Entity::insert(movie_actor_relation::ActiveModel {
        id: Set(id.to_string()),
        movie_id: Set(Some(movie_id.to_string())),
        actor_id: Set(Some(actor_id.to_string())),
        relation_type: Set(Some(relation_type.to_string())),
    })
    .exec(catalog.db())
    .await
    .unwrap();
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Encodes text fields plus an optional `file` part as multipart/form-data.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<&[u8]>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some(bytes) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"photo.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}
