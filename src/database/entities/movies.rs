use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub release_date: String,
    pub duration: i32,
    pub description: String,
    pub budget: f64,
    pub box_office_collection: f64,
    pub rating: f64,
    pub award_nomination: i32,
    pub award_win: i32,
    /// Every movie is owned by exactly one studio.
    pub studio_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::studios::Entity",
        from = "Column::StudioId",
        to = "super::studios::Column::Id"
    )]
    Studios,
    #[sea_orm(has_many = "super::movie_actors::Entity")]
    MovieActors,
}

impl Related<super::studios::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Studios.def()
    }
}

impl Related<super::actors::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_actors::Relation::Actors.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_actors::Relation::Movies.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
