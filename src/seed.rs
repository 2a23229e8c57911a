use anyhow::Context;
use jiff::civil::Date;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    DatabaseConnection, EntityTrait, Set, TransactionTrait, sea_query::OnConflict,
};
use serde::Deserialize;
use tracing::info;

use crate::entities::{actor_info, movie_actor_relation, movie_info};

const CATALOG_FIXTURES: &str = include_str!("../fixtures/catalog.json");

#[derive(Debug, Deserialize)]
pub struct Fixtures {
    pub movies: Vec<MovieFixture>,
    pub actors: Vec<ActorFixture>,
    pub relations: Vec<RelationFixture>,
}

#[derive(Debug, Deserialize)]
pub struct MovieFixture {
    pub movie_id: String,
    pub movie_name: String,
    pub release_date: Date,
    pub country: String,
    pub movie_type: String,
    pub year: i32,
    #[serde(rename = "box")]
    pub box_office: f64,
}

#[derive(Debug, Deserialize)]
pub struct ActorFixture {
    pub actor_id: String,
    pub actor_name: String,
    pub gender: String,
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub struct RelationFixture {
    pub id: String,
    pub movie_id: String,
    pub actor_id: String,
    pub relation_type: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ForgeSummary {
    pub movies: usize,
    pub actors: usize,
    pub relations: usize,
}

impl Fixtures {
    pub fn embedded() -> anyhow::Result<Self> {
        serde_json::from_str(CATALOG_FIXTURES).context("parsing fixtures/catalog.json")
    }
}

/// Brings the schema up (dropping it first when asked) and upserts the
/// fixture catalog in one transaction.
pub async fn forge(db: &DatabaseConnection, drop: bool) -> anyhow::Result<ForgeSummary> {
    if drop {
        Migrator::down(db, None).await.context("dropping schema")?;
        info!("dropped existing tables");
    }
    Migrator::up(db, None).await.context("creating schema")?;

    let fixtures = Fixtures::embedded()?;
    let summary = ForgeSummary {
        movies: fixtures.movies.len(),
        actors: fixtures.actors.len(),
        relations: fixtures.relations.len(),
    };

    let txn = db.begin().await?;

    let actors = fixtures.actors.into_iter().map(|a| actor_info::ActiveModel {
        actor_id: Set(a.actor_id),
        actor_name: Set(Some(a.actor_name)),
        gender: Set(Some(a.gender)),
        country: Set(Some(a.country)),
    });
    if summary.actors > 0 {
        actor_info::Entity::insert_many(actors)
            .on_conflict(
                OnConflict::column(actor_info::Column::ActorId)
                    .update_columns([
                        actor_info::Column::ActorName,
                        actor_info::Column::Gender,
                        actor_info::Column::Country,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
    }

    let movies = fixtures.movies.into_iter().map(|m| movie_info::ActiveModel {
        movie_id: Set(m.movie_id),
        movie_name: Set(Some(m.movie_name)),
        release_date: Set(Some(m.release_date.strftime("%Y-%m-%d").to_string())),
        country: Set(Some(m.country)),
        movie_type: Set(Some(m.movie_type)),
        year: Set(Some(m.year)),
        box_office: Set(Some(m.box_office)),
    });
    if summary.movies > 0 {
        movie_info::Entity::insert_many(movies)
            .on_conflict(
                OnConflict::column(movie_info::Column::MovieId)
                    .update_columns([
                        movie_info::Column::MovieName,
                        movie_info::Column::ReleaseDate,
                        movie_info::Column::Country,
                        movie_info::Column::MovieType,
                        movie_info::Column::Year,
                        movie_info::Column::BoxOffice,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
    }

    let relations = fixtures.relations.into_iter().map(|r| movie_actor_relation::ActiveModel {
        id: Set(r.id),
        movie_id: Set(Some(r.movie_id)),
        actor_id: Set(Some(r.actor_id)),
        relation_type: Set(Some(r.relation_type)),
    });
    if summary.relations > 0 {
        movie_actor_relation::Entity::insert_many(relations)
            .on_conflict(
                OnConflict::column(movie_actor_relation::Column::Id)
                    .update_columns([
                        movie_actor_relation::Column::MovieId,
                        movie_actor_relation::Column::ActorId,
                        movie_actor_relation::Column::RelationType,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
    }

    txn.commit().await?;

    info!(
        movies = summary.movies,
        actors = summary.actors,
        relations = summary.relations,
        "fixtures loaded"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LEAD_PERFORMER, Role};

    #[test]
    fn fixtures_parse_and_reference_known_rows() {
        let fixtures = Fixtures::embedded().unwrap();
        assert!(!fixtures.movies.is_empty());

        for rel in &fixtures.relations {
            assert!(fixtures.movies.iter().any(|m| m.movie_id == rel.movie_id), "{rel:?}");
            assert!(fixtures.actors.iter().any(|a| a.actor_id == rel.actor_id), "{rel:?}");
        }
        assert!(
            fixtures.relations.iter().any(|r| Role::of(Some(r.relation_type.as_str())) == Role::Lead)
        );
        assert!(fixtures.relations.iter().any(|r| r.relation_type != LEAD_PERFORMER));
    }

    #[test]
    fn actor_ids_are_numeric() {
        let fixtures = Fixtures::embedded().unwrap();
        assert!(fixtures.actors.iter().all(|a| a.actor_id.parse::<u64>().is_ok()));
    }
}
