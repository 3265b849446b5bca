use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::{info, warn};

use crate::database::entities::{actors, movie_actors};
use crate::dto::{ActorDto, ServiceResponse};
use crate::errors::CatalogResult;

/// CRUD and movie-association queries for actors.
#[derive(Clone)]
pub struct ActorService {
    db: DatabaseConnection,
}

impl ActorService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> CatalogResult<Vec<ActorDto>> {
        let actors = actors::Entity::find().all(&self.db).await?;
        Ok(actors.into_iter().map(ActorDto::from).collect())
    }

    pub async fn find(&self, id: i32) -> CatalogResult<Option<ActorDto>> {
        let actor = actors::Entity::find_by_id(id).one(&self.db).await?;
        Ok(actor.map(ActorDto::from))
    }

    /// Actors linked to the given movie, in store order. An unknown movie id
    /// simply yields an empty list.
    pub async fn list_for_movie(&self, movie_id: i32) -> CatalogResult<Vec<ActorDto>> {
        let links = movie_actors::Entity::find()
            .filter(movie_actors::Column::MovieId.eq(movie_id))
            .all(&self.db)
            .await?;
        let actor_ids: Vec<i32> = links.iter().map(|link| link.actor_id).collect();

        let actors = actors::Entity::find()
            .filter(actors::Column::Id.is_in(actor_ids))
            .all(&self.db)
            .await?;
        Ok(actors.into_iter().map(ActorDto::from).collect())
    }

    pub async fn add(&self, dto: &ActorDto) -> ServiceResponse {
        match dto.insert_model().insert(&self.db).await {
            Ok(actor) => {
                info!(actor_id = actor.id, "actor created");
                ServiceResponse::created(actor.id)
            }
            Err(err) => {
                warn!(error = %err, "failed to add actor");
                ServiceResponse::error("There was an error adding the Actor.")
                    .with_message(err.to_string())
            }
        }
    }

    pub async fn update(&self, dto: &ActorDto) -> ServiceResponse {
        let existing = match actors::Entity::find_by_id(dto.id).one(&self.db).await {
            Ok(found) => found,
            Err(err) => {
                warn!(actor_id = dto.id, error = %err, "failed to load actor for update");
                return ServiceResponse::error("An error occurred updating the record");
            }
        };
        if existing.is_none() {
            return ServiceResponse::not_found("Actor could not be found");
        }

        match dto.replace_model().update(&self.db).await {
            Ok(_) => ServiceResponse::updated(),
            Err(err) => {
                warn!(actor_id = dto.id, error = %err, "failed to update actor");
                ServiceResponse::error("An error occurred updating the record")
            }
        }
    }

    /// Delete an actor; association rows cascade at the store level.
    pub async fn delete(&self, id: i32) -> ServiceResponse {
        let existing = match actors::Entity::find_by_id(id).one(&self.db).await {
            Ok(found) => found,
            Err(err) => {
                warn!(actor_id = id, error = %err, "failed to load actor for delete");
                return ServiceResponse::error("Error encountered while deleting the actor");
            }
        };
        if existing.is_none() {
            return ServiceResponse::not_found("Actor cannot be deleted because it does not exist.");
        }

        match actors::Entity::delete_by_id(id).exec(&self.db).await {
            Ok(_) => {
                info!(actor_id = id, "actor deleted");
                ServiceResponse::deleted()
            }
            Err(err) => {
                warn!(actor_id = id, error = %err, "failed to delete actor");
                ServiceResponse::error("Error encountered while deleting the actor")
            }
        }
    }
}
