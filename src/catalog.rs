use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Select, Statement, Value, sea_query::Expr,
};
use tracing::debug;

use crate::{
    entities::{actor_info, movie_actor_relation, movie_info},
    error::AppResult,
    models::{ActorSummary, ActorWorks, MovieCredits, MovieSummary, NewActor, Role},
};

/// Assigns the next numeric id inside the insert itself, so two concurrent
/// creations can never observe the same maximum. Only ids made entirely of
/// digits count towards the maximum, matching `next_id_after`.
const INSERT_ACTOR: &str = "INSERT INTO actor_info (actor_id, actor_name, gender, country) \
     SELECT CAST(COALESCE(( \
         SELECT MAX(CAST(actor_id AS INTEGER)) FROM actor_info \
         WHERE actor_id <> '' AND actor_id NOT GLOB '*[^0-9]*' \
     ), 0) + 1 AS TEXT), ?, ?, ? \
     RETURNING actor_id";

type CreditRow = (movie_actor_relation::Model, Option<actor_info::Model>);

#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn movies(&self) -> AppResult<Vec<movie_info::Model>> {
        Ok(movie_info::Entity::find().all(&self.db).await?)
    }

    pub async fn actors(&self) -> AppResult<Vec<actor_info::Model>> {
        Ok(actor_info::Entity::find().all(&self.db).await?)
    }

    pub async fn relations(&self) -> AppResult<Vec<movie_actor_relation::Model>> {
        Ok(natural_order(movie_actor_relation::Entity::find()).all(&self.db).await?)
    }

    pub async fn movie(&self, movie_id: &str) -> AppResult<Option<movie_info::Model>> {
        Ok(movie_info::Entity::find_by_id(movie_id.to_string()).one(&self.db).await?)
    }

    pub async fn actor(&self, actor_id: &str) -> AppResult<Option<actor_info::Model>> {
        Ok(actor_info::Entity::find_by_id(actor_id.to_string()).one(&self.db).await?)
    }

    pub async fn actor_count(&self) -> AppResult<u64> {
        Ok(actor_info::Entity::find().count(&self.db).await?)
    }

    /// Actors credited on a movie. An unknown movie yields empty buckets.
    pub async fn movie_credits(&self, movie_id: &str) -> AppResult<MovieCredits> {
        let rows = natural_order(movie_actor_relation::Entity::find())
            .filter(movie_actor_relation::Column::MovieId.eq(movie_id))
            .find_also_related(actor_info::Entity)
            .all(&self.db)
            .await?;

        let (actors, directors) = partition_by_role(rows);
        Ok(MovieCredits { actors, directors })
    }

    /// Movies an actor is credited on. An unknown actor yields empty buckets.
    pub async fn actor_works(&self, actor_id: &str) -> AppResult<ActorWorks> {
        let rows = natural_order(movie_actor_relation::Entity::find())
            .filter(movie_actor_relation::Column::ActorId.eq(actor_id))
            .find_also_related(movie_info::Entity)
            .all(&self.db)
            .await?;

        let (act_works, direct_works) = partition_by_role(rows);
        Ok(ActorWorks { act_works, direct_works })
    }

    pub async fn movie_listing(&self) -> AppResult<Vec<MovieSummary>> {
        let movies = self.movies().await?;
        let rows = natural_order(movie_actor_relation::Entity::find())
            .find_also_related(actor_info::Entity)
            .all(&self.db)
            .await?;

        let mut by_movie: HashMap<String, Vec<CreditRow>> = HashMap::new();
        for (relation, actor) in rows {
            if let Some(movie_id) = relation.movie_id.clone() {
                by_movie.entry(movie_id).or_default().push((relation, actor));
            }
        }

        Ok(movies
            .into_iter()
            .map(|movie| {
                let rows = by_movie.remove(&movie.movie_id).unwrap_or_default();
                let (actors, directors) = partition_by_role(rows);
                MovieSummary {
                    movie,
                    actor_names: actors.into_iter().filter_map(|a| a.actor_name).collect(),
                    director_names: directors.into_iter().filter_map(|a| a.actor_name).collect(),
                }
            })
            .collect())
    }

    pub async fn actor_listing(&self) -> AppResult<Vec<ActorSummary>> {
        let actors = self.actors().await?;
        let relations = self.relations().await?;

        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
        for relation in relations {
            let Some(actor_id) = relation.actor_id else {
                continue;
            };
            let entry = counts.entry(actor_id).or_default();
            match Role::of(relation.relation_type.as_deref()) {
                Role::Lead => entry.0 += 1,
                Role::Other => entry.1 += 1,
            }
        }

        Ok(actors
            .into_iter()
            .map(|actor| {
                let (acting_count, directing_count) =
                    counts.get(&actor.actor_id).copied().unwrap_or_default();
                ActorSummary { actor, acting_count, directing_count }
            })
            .collect())
    }

    /// Inserts a new actor under the next numeric id and returns the stored
    /// row.
    pub async fn create_actor(&self, actor: NewActor) -> AppResult<actor_info::Model> {
        let backend = self.db.get_database_backend();
        let rows = self
            .db
            .query_all(Statement::from_sql_and_values(
                backend,
                INSERT_ACTOR,
                [Value::from(actor.name), Value::from(actor.gender), Value::from(actor.country)],
            ))
            .await?;
        let row = rows.first().ok_or_else(|| anyhow::anyhow!("actor insert returned no id"))?;
        let actor_id: String = row.try_get("", "actor_id")?;

        debug!(actor_id = %actor_id, "created actor");

        self.actor(&actor_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("actor {actor_id} missing after insert").into())
    }
}

/// Relations in insertion order.
fn natural_order(
    select: Select<movie_actor_relation::Entity>,
) -> Select<movie_actor_relation::Entity> {
    select.order_by_asc(Expr::cust("movie_actor_relation.rowid"))
}

/// Splits `(relation, target)` rows into lead and other buckets, keeping row
/// order within each. Rows whose target no longer exists are skipped.
pub fn partition_by_role<T>(
    rows: impl IntoIterator<Item = (movie_actor_relation::Model, Option<T>)>,
) -> (Vec<T>, Vec<T>) {
    let mut lead = Vec::new();
    let mut other = Vec::new();

    for (relation, target) in rows {
        let Some(target) = target else {
            debug!(relation_id = %relation.id, "relation points at a missing record");
            continue;
        };
        match Role::of(relation.relation_type.as_deref()) {
            Role::Lead => lead.push(target),
            Role::Other => other.push(target),
        }
    }

    (lead, other)
}

/// Scan-then-increment id policy: one past the largest numeric id seen.
/// Two callers working from the same snapshot get the same answer;
/// `Catalog::create_actor` allocates inside the insert instead.
pub fn next_id_after<'a>(ids: impl IntoIterator<Item = &'a str>) -> String {
    let max = ids
        .into_iter()
        .filter(|id| is_numeric_id(id))
        .filter_map(|id| id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (u128::from(max) + 1).to_string()
}

/// Digits only: no sign, no whitespace, not empty.
fn is_numeric_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}
