use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::{info, warn};

use crate::database::entities::{actors, movie_actors, movies, studios};
use crate::dto::{MovieDto, ServiceResponse, ServiceStatus};
use crate::errors::CatalogResult;

/// CRUD for movies plus the studio- and actor-association queries and the
/// Movie <-> Actor link/unlink lifecycle.
#[derive(Clone)]
pub struct MovieService {
    db: DatabaseConnection,
}

impl MovieService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_dtos(rows: Vec<(movies::Model, Option<studios::Model>)>) -> Vec<MovieDto> {
        rows.into_iter()
            .map(|(movie, studio)| {
                let studio_name = studio.map(|s| s.name).unwrap_or_default();
                MovieDto::from_entity(movie, studio_name)
            })
            .collect()
    }

    pub async fn list(&self) -> CatalogResult<Vec<MovieDto>> {
        let rows = movies::Entity::find()
            .find_also_related(studios::Entity)
            .all(&self.db)
            .await?;
        Ok(Self::to_dtos(rows))
    }

    pub async fn find(&self, id: i32) -> CatalogResult<Option<MovieDto>> {
        let row = movies::Entity::find_by_id(id)
            .find_also_related(studios::Entity)
            .one(&self.db)
            .await?;
        Ok(row.map(|(movie, studio)| {
            let studio_name = studio.map(|s| s.name).unwrap_or_default();
            MovieDto::from_entity(movie, studio_name)
        }))
    }

    /// Movies the given actor is linked to, with the owning studio name
    /// denormalised in.
    pub async fn list_for_actor(&self, actor_id: i32) -> CatalogResult<Vec<MovieDto>> {
        let links = movie_actors::Entity::find()
            .filter(movie_actors::Column::ActorId.eq(actor_id))
            .all(&self.db)
            .await?;
        let movie_ids: Vec<i32> = links.iter().map(|link| link.movie_id).collect();

        let rows = movies::Entity::find()
            .filter(movies::Column::Id.is_in(movie_ids))
            .find_also_related(studios::Entity)
            .all(&self.db)
            .await?;
        Ok(Self::to_dtos(rows))
    }

    pub async fn list_for_studio(&self, studio_id: i32) -> CatalogResult<Vec<MovieDto>> {
        let rows = movies::Entity::find()
            .filter(movies::Column::StudioId.eq(studio_id))
            .find_also_related(studios::Entity)
            .all(&self.db)
            .await?;
        Ok(Self::to_dtos(rows))
    }

    /// A failing studio foreign key surfaces here as a generic error with
    /// the store's message text, not a distinguished outcome.
    pub async fn add(&self, dto: &MovieDto) -> ServiceResponse {
        match dto.insert_model().insert(&self.db).await {
            Ok(movie) => {
                info!(movie_id = movie.id, "movie created");
                ServiceResponse::created(movie.id)
            }
            Err(err) => {
                warn!(error = %err, "failed to add movie");
                ServiceResponse::error("There was an error adding the Movie.")
                    .with_message(err.to_string())
            }
        }
    }

    pub async fn update(&self, dto: &MovieDto) -> ServiceResponse {
        let existing = match movies::Entity::find_by_id(dto.id).one(&self.db).await {
            Ok(found) => found,
            Err(err) => {
                warn!(movie_id = dto.id, error = %err, "failed to load movie for update");
                return ServiceResponse::error("An error occurred updating the record");
            }
        };
        if existing.is_none() {
            return ServiceResponse::not_found("Movie could not be found");
        }

        match dto.replace_model().update(&self.db).await {
            Ok(_) => ServiceResponse::updated(),
            Err(err) => {
                warn!(movie_id = dto.id, error = %err, "failed to update movie");
                ServiceResponse::error("An error occurred updating the record")
            }
        }
    }

    /// Delete a movie; its association rows cascade at the store level.
    pub async fn delete(&self, id: i32) -> ServiceResponse {
        let existing = match movies::Entity::find_by_id(id).one(&self.db).await {
            Ok(found) => found,
            Err(err) => {
                warn!(movie_id = id, error = %err, "failed to load movie for delete");
                return ServiceResponse::error("Error encountered while deleting the movie");
            }
        };
        if existing.is_none() {
            return ServiceResponse::not_found("Movie cannot be deleted because it does not exist.");
        }

        match movies::Entity::delete_by_id(id).exec(&self.db).await {
            Ok(_) => {
                info!(movie_id = id, "movie deleted");
                ServiceResponse::deleted()
            }
            Err(err) => {
                warn!(movie_id = id, error = %err, "failed to delete movie");
                ServiceResponse::error("Error encountered while deleting the movie")
            }
        }
    }

    /// Load both sides of a link mutation. Any missing side produces the
    /// NotFound outcome with one message per absent entity.
    async fn load_link_sides(
        &self,
        movie_id: i32,
        actor_id: i32,
        actor_missing_message: &str,
        failure_message: &str,
    ) -> Result<(movies::Model, actors::Model), ServiceResponse> {
        let movie = movies::Entity::find_by_id(movie_id)
            .one(&self.db)
            .await
            .map_err(|err| Self::association_failure(failure_message, err))?;
        let actor = actors::Entity::find_by_id(actor_id)
            .one(&self.db)
            .await
            .map_err(|err| Self::association_failure(failure_message, err))?;

        match (movie, actor) {
            (Some(movie), Some(actor)) => Ok((movie, actor)),
            (movie, actor) => {
                let mut response = ServiceResponse::with_status(ServiceStatus::NotFound);
                if actor.is_none() {
                    response.messages.push(actor_missing_message.to_string());
                }
                if movie.is_none() {
                    response.messages.push("Movie was not found.".to_string());
                }
                Err(response)
            }
        }
    }

    fn association_failure(message: &str, err: sea_orm::DbErr) -> ServiceResponse {
        warn!(error = %err, "{}", message);
        ServiceResponse::error(message).with_message(err.to_string())
    }

    /// Insert an association row between an existing movie and actor.
    /// Duplicate links are rejected by the composite primary key.
    pub async fn link_to_actor(&self, movie_id: i32, actor_id: i32) -> ServiceResponse {
        let failure = "There was an issue linking the actor to the movie";
        let (movie, actor) = match self
            .load_link_sides(movie_id, actor_id, "Actor was not found. ", failure)
            .await
        {
            Ok(sides) => sides,
            Err(response) => return response,
        };

        let link = movie_actors::ActiveModel {
            actor_id: Set(actor.id),
            movie_id: Set(movie.id),
        };
        match movie_actors::Entity::insert(link)
            .exec_without_returning(&self.db)
            .await
        {
            Ok(_) => {
                info!(movie_id, actor_id, "actor linked to movie");
                ServiceResponse::with_status(ServiceStatus::Created)
            }
            Err(err) => Self::association_failure(failure, err),
        }
    }

    /// Remove the association row if present; removing a link that does not
    /// exist is a no-op and still reports Deleted.
    pub async fn unlink_from_actor(&self, movie_id: i32, actor_id: i32) -> ServiceResponse {
        let failure = "There was an issue unlinking the actor to the movie";
        let (movie, actor) = match self
            .load_link_sides(movie_id, actor_id, "Actor was not found.", failure)
            .await
        {
            Ok(sides) => sides,
            Err(response) => return response,
        };

        let result = movie_actors::Entity::delete_many()
            .filter(movie_actors::Column::MovieId.eq(movie.id))
            .filter(movie_actors::Column::ActorId.eq(actor.id))
            .exec(&self.db)
            .await;
        match result {
            Ok(_) => {
                info!(movie_id, actor_id, "actor unlinked from movie");
                ServiceResponse::deleted()
            }
            Err(err) => Self::association_failure(failure, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_utils::setup_test_db;

    async fn seed_studio(db: &DatabaseConnection, name: &str) -> i32 {
        studios::ActiveModel {
            name: Set(name.to_string()),
            country: Set("USA".to_string()),
            established_year: Set(1978),
            ceo: Set("E. Pleskow".to_string()),
            headquarter: Set("Los Angeles".to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
        .id
    }

    async fn seed_actor(db: &DatabaseConnection, name: &str) -> i32 {
        actors::ActiveModel {
            name: Set(name.to_string()),
            dob: Set("1958-10-16".to_string()),
            birth_place: Set("Amsterdam".to_string()),
            gender: Set("Male".to_string()),
            nationality: Set("Dutch".to_string()),
            role: Set("Lead".to_string()),
            award_won: Set(1),
            debut_year: Set(1980),
            net_worth: Set(1_000_000),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
        .id
    }

    fn sample_movie(title: &str, studio_id: i32) -> MovieDto {
        MovieDto {
            id: 0,
            title: title.to_string(),
            release_date: "1984-09-14".to_string(),
            duration: 103,
            description: "A test feature.".to_string(),
            budget: 6_000_000.0,
            box_office_collection: 40_000_000.0,
            rating: 7.8,
            award_nomination: 2,
            award_win: 1,
            studio_id,
            studio_name: String::new(),
        }
    }

    #[tokio::test]
    async fn add_then_find_denormalises_the_studio_name() {
        let db = setup_test_db().await;
        let service = MovieService::new(db.clone());
        let studio_id = seed_studio(&db, "Orion").await;

        let response = service.add(&sample_movie("X", studio_id)).await;
        assert_eq!(response.status, ServiceStatus::Created);
        let id = response.created_id.unwrap();

        let found = service.find(id).await.unwrap().unwrap();
        assert_eq!(found.title, "X");
        assert_eq!(found.studio_name, "Orion");
        assert_eq!(found.budget, 6_000_000.0);
    }

    #[tokio::test]
    async fn add_with_unknown_studio_reports_error() {
        let db = setup_test_db().await;
        let service = MovieService::new(db);

        let response = service.add(&sample_movie("Orphan", 42)).await;
        assert_eq!(response.status, ServiceStatus::Error);
        assert_eq!(response.messages[0], "There was an error adding the Movie.");
        assert_eq!(response.messages.len(), 2);
    }

    #[tokio::test]
    async fn update_requires_an_existing_movie() {
        let db = setup_test_db().await;
        let service = MovieService::new(db.clone());
        let studio_id = seed_studio(&db, "Orion").await;

        let mut dto = sample_movie("Ghost", studio_id);
        dto.id = 77;
        let response = service.update(&dto).await;
        assert_eq!(response.status, ServiceStatus::NotFound);
        assert_eq!(response.messages, vec!["Movie could not be found"]);
    }

    #[tokio::test]
    async fn delete_removes_the_movie_and_its_links() {
        let db = setup_test_db().await;
        let service = MovieService::new(db.clone());
        let studio_id = seed_studio(&db, "Orion").await;
        let actor_id = seed_actor(&db, "Rutger Hauer").await;

        let movie_id = service
            .add(&sample_movie("X", studio_id))
            .await
            .created_id
            .unwrap();
        service.link_to_actor(movie_id, actor_id).await;

        let response = service.delete(movie_id).await;
        assert_eq!(response.status, ServiceStatus::Deleted);
        assert!(service.find(movie_id).await.unwrap().is_none());

        let links = movie_actors::Entity::find().all(&db).await.unwrap();
        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn link_with_missing_actor_reports_not_found_without_mutation() {
        let db = setup_test_db().await;
        let service = MovieService::new(db.clone());
        let studio_id = seed_studio(&db, "Orion").await;
        let movie_id = service
            .add(&sample_movie("X", studio_id))
            .await
            .created_id
            .unwrap();

        let response = service.link_to_actor(movie_id, 404).await;
        assert_eq!(response.status, ServiceStatus::NotFound);
        assert_eq!(response.messages, vec!["Actor was not found. "]);

        let links = movie_actors::Entity::find().all(&db).await.unwrap();
        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn link_with_both_sides_missing_collects_both_messages() {
        let db = setup_test_db().await;
        let service = MovieService::new(db);

        let response = service.link_to_actor(404, 405).await;
        assert_eq!(response.status, ServiceStatus::NotFound);
        assert_eq!(
            response.messages,
            vec!["Actor was not found. ", "Movie was not found."]
        );
    }

    #[tokio::test]
    async fn link_then_unlink_round_trip() {
        let db = setup_test_db().await;
        let service = MovieService::new(db.clone());
        let studio_id = seed_studio(&db, "Orion").await;
        let actor_id = seed_actor(&db, "Rutger Hauer").await;
        let movie_id = service
            .add(&sample_movie("X", studio_id))
            .await
            .created_id
            .unwrap();

        let linked = service.link_to_actor(movie_id, actor_id).await;
        assert_eq!(linked.status, ServiceStatus::Created);
        assert_eq!(linked.created_id, None);

        let movies = service.list_for_actor(actor_id).await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, movie_id);
        assert_eq!(movies[0].studio_name, "Orion");

        let unlinked = service.unlink_from_actor(movie_id, actor_id).await;
        assert_eq!(unlinked.status, ServiceStatus::Deleted);
        assert!(service.list_for_actor(actor_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_link_surfaces_the_store_failure() {
        let db = setup_test_db().await;
        let service = MovieService::new(db.clone());
        let studio_id = seed_studio(&db, "Orion").await;
        let actor_id = seed_actor(&db, "Rutger Hauer").await;
        let movie_id = service
            .add(&sample_movie("X", studio_id))
            .await
            .created_id
            .unwrap();

        service.link_to_actor(movie_id, actor_id).await;
        let second = service.link_to_actor(movie_id, actor_id).await;
        assert_eq!(second.status, ServiceStatus::Error);
        assert_eq!(
            second.messages[0],
            "There was an issue linking the actor to the movie"
        );
    }

    #[tokio::test]
    async fn unlink_of_a_missing_link_is_a_no_op() {
        let db = setup_test_db().await;
        let service = MovieService::new(db.clone());
        let studio_id = seed_studio(&db, "Orion").await;
        let actor_id = seed_actor(&db, "Rutger Hauer").await;
        let movie_id = service
            .add(&sample_movie("X", studio_id))
            .await
            .created_id
            .unwrap();

        let response = service.unlink_from_actor(movie_id, actor_id).await;
        assert_eq!(response.status, ServiceStatus::Deleted);
    }

    #[tokio::test]
    async fn list_for_studio_filters_by_owner() {
        let db = setup_test_db().await;
        let service = MovieService::new(db.clone());
        let orion = seed_studio(&db, "Orion").await;
        let toho = seed_studio(&db, "Toho").await;

        service.add(&sample_movie("A", orion)).await;
        service.add(&sample_movie("B", toho)).await;

        let movies = service.list_for_studio(orion).await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "A");
        assert_eq!(movies[0].studio_name, "Orion");
    }
}
