use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::database::entities::movies;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
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
    pub studio_id: i32,
    /// Denormalised from the owning studio on the read side.
    pub studio_name: String,
}

impl MovieDto {
    pub fn from_entity(movie: movies::Model, studio_name: impl Into<String>) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            release_date: movie.release_date,
            duration: movie.duration,
            description: movie.description,
            budget: movie.budget,
            box_office_collection: movie.box_office_collection,
            rating: movie.rating,
            award_nomination: movie.award_nomination,
            award_win: movie.award_win,
            studio_id: movie.studio_id,
            studio_name: studio_name.into(),
        }
    }

    /// Mapping for inserts: the store assigns the id, the studio foreign key
    /// comes straight from the DTO.
    pub fn insert_model(&self) -> movies::ActiveModel {
        movies::ActiveModel {
            id: ActiveValue::NotSet,
            title: Set(self.title.clone()),
            release_date: Set(self.release_date.clone()),
            duration: Set(self.duration),
            description: Set(self.description.clone()),
            budget: Set(self.budget),
            box_office_collection: Set(self.box_office_collection),
            rating: Set(self.rating),
            award_nomination: Set(self.award_nomination),
            award_win: Set(self.award_win),
            studio_id: Set(self.studio_id),
        }
    }

    /// Mapping for whole-row updates.
    pub fn replace_model(&self) -> movies::ActiveModel {
        movies::ActiveModel {
            id: Set(self.id),
            ..self.insert_model()
        }
    }
}
