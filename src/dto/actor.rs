use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::database::entities::actors;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorDto {
    pub id: i32,
    pub name: String,
    pub dob: String,
    pub birth_place: String,
    pub gender: String,
    pub nationality: String,
    pub role: String,
    pub award_won: i32,
    pub debut_year: i32,
    pub net_worth: i32,
}

impl From<actors::Model> for ActorDto {
    fn from(actor: actors::Model) -> Self {
        Self {
            id: actor.id,
            name: actor.name,
            dob: actor.dob,
            birth_place: actor.birth_place,
            gender: actor.gender,
            nationality: actor.nationality,
            role: actor.role,
            award_won: actor.award_won,
            debut_year: actor.debut_year,
            net_worth: actor.net_worth,
        }
    }
}

impl ActorDto {
    /// Mapping for inserts: the store assigns the id.
    pub fn insert_model(&self) -> actors::ActiveModel {
        actors::ActiveModel {
            id: ActiveValue::NotSet,
            name: Set(self.name.clone()),
            dob: Set(self.dob.clone()),
            birth_place: Set(self.birth_place.clone()),
            gender: Set(self.gender.clone()),
            nationality: Set(self.nationality.clone()),
            role: Set(self.role.clone()),
            award_won: Set(self.award_won),
            debut_year: Set(self.debut_year),
            net_worth: Set(self.net_worth),
        }
    }

    /// Mapping for whole-row updates: every scalar field is replaced.
    pub fn replace_model(&self) -> actors::ActiveModel {
        actors::ActiveModel {
            id: Set(self.id),
            ..self.insert_model()
        }
    }
}
