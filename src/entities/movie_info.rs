use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movie_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub movie_id: String,
    pub movie_name: Option<String>,
    pub release_date: Option<String>,
    pub country: Option<String>,
    pub movie_type: Option<String>,
    pub year: Option<i32>,
    #[sea_orm(column_name = "box")]
    pub box_office: Option<f64>,
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
