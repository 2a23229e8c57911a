use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "actor_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub actor_id: String,
    pub actor_name: Option<String>,
    pub gender: Option<String>,
    pub country: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_actor_relation::Entity")]
    MovieActorRelation,
}

impl Related<super::movie_actor_relation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieActorRelation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
