use sea_orm::entity::prelude::*;

/// Links a movie to an actor. No foreign keys are declared in the schema, so
/// either side may dangle.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movie_actor_relation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub movie_id: Option<String>,
    pub actor_id: Option<String>,
    pub relation_type: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movie_info::Entity",
        from = "Column::MovieId",
        to = "super::movie_info::Column::MovieId"
    )]
    Movie,
    #[sea_orm(
        belongs_to = "super::actor_info::Entity",
        from = "Column::ActorId",
        to = "super::actor_info::Column::ActorId"
    )]
    Actor,
}

impl Related<super::movie_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl Related<super::actor_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Actor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
