use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;
use tracing::{info, warn};

use crate::{
    AppState,
    error::{AppError, AppResult},
    flash::{self, Flash},
    models::NewActor,
    templates, uploads,
};

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.catalog.movies().await?;
    let actors = state.catalog.actors().await?;
    let relations = state.catalog.relations().await?;

    Ok(Html(templates::index_page(&state.config.owner_name, &movies, &actors, &relations)))
}

pub async fn movies(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let listing = state.catalog.movie_listing().await?;
    Ok(Html(templates::movies_page(&state.config.owner_name, &listing)))
}

pub async fn actors(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let listing = state.catalog.actor_listing().await?;
    let (jar, flash) = flash::take(jar);

    Ok((jar, Html(templates::actors_page(&state.config.owner_name, &listing, flash.as_ref()))))
}

#[derive(Debug, Default)]
struct ActorSubmission {
    name: String,
    gender: String,
    country: String,
    image: Option<Bytes>,
}

async fn read_submission(mut multipart: Multipart) -> AppResult<ActorSubmission> {
    let mut submission = ActorSubmission::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        match name.as_str() {
            "name" => submission.name = field.text().await?,
            "gender" => submission.gender = field.text().await?,
            "country" => submission.country = field.text().await?,
            "file" => {
                let bytes = field.bytes().await?;
                submission.image = (!bytes.is_empty()).then_some(bytes);
            },
            _ => {},
        }
    }

    Ok(submission)
}

pub async fn create_actor(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    multipart: Multipart,
) -> AppResult<(CookieJar, Redirect)> {
    let submission = read_submission(multipart).await?;

    let new_actor =
        match NewActor::parse(&submission.name, &submission.gender, &submission.country) {
            Ok(actor) => actor,
            Err(err) => {
                return Ok((flash::push(jar, &Flash::error(err.to_string())), Redirect::to("/actor")));
            },
        };

    let actor = state.catalog.create_actor(new_actor).await?;
    info!(actor_id = %actor.actor_id, "actor created");

    // The row is already committed; a failed image write only loses the photo.
    if let Some(image) = submission.image {
        match uploads::store_actor_image(&state.config.static_dir, &actor.actor_id, &image).await {
            Ok(path) => info!(actor_id = %actor.actor_id, path = %path.display(), "stored actor image"),
            Err(err) => warn!(actor_id = %actor.actor_id, error = %err, "failed to store actor image"),
        }
    }

    Ok((flash::push(jar, &Flash::success("Item created.")), Redirect::to("/actor")))
}

pub async fn actor_detail(
    State(state): State<Arc<AppState>>,
    Path(actor_id): Path<String>,
) -> AppResult<Html<String>> {
    let Some(actor) = state.catalog.actor(&actor_id).await? else {
        return Err(AppError::NotFound(format!("actor {actor_id}")));
    };
    let works = state.catalog.actor_works(&actor_id).await?;

    let image_url = uploads::actor_image_exists(&state.config.static_dir, &actor_id)
        .await
        .then(|| uploads::actor_image_url(&actor_id));

    Ok(Html(templates::actor_detail_page(
        &state.config.owner_name,
        &actor,
        &works,
        image_url.as_deref(),
    )))
}

pub async fn movie_detail(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<String>,
) -> AppResult<Html<String>> {
    let Some(movie) = state.catalog.movie(&movie_id).await? else {
        return Err(AppError::NotFound(format!("movie {movie_id}")));
    };
    let credits = state.catalog.movie_credits(&movie_id).await?;

    Ok(Html(templates::movie_detail_page(&state.config.owner_name, &movie, &credits)))
}

pub async fn love() -> &'static str {
    "我爱你！"
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(templates::not_found_page()))
}
