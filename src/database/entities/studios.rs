use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "studios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub country: String,
    pub established_year: i32,
    pub ceo: String,
    pub headquarter: String,
    /// True once an image has been stored for this studio. Owned by the
    /// image replace operation; whole-row updates must leave it alone.
    pub has_pic: bool,
    /// Normalised (lowercase, leading dot) extension of the stored image,
    /// e.g. ".png". Images live at images/studios/{id}{pic_extension}.
    pub pic_extension: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movies::Entity")]
    Movies,
}

impl Related<super::movies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
