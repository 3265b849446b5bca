use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tracing::{info, warn};

use crate::database::entities::{movies, studios};
use crate::dto::{ServiceResponse, StudioDto};
use crate::errors::CatalogResult;
use crate::services::image_store::{self, StudioImageStore};

/// CRUD for studios, the studio-for-movie lookup, and the studio image
/// replace orchestration against the file-backed image store.
#[derive(Clone)]
pub struct StudioService {
    db: DatabaseConnection,
    images: StudioImageStore,
}

impl StudioService {
    pub fn new(db: DatabaseConnection, images: StudioImageStore) -> Self {
        Self { db, images }
    }

    pub async fn list(&self) -> CatalogResult<Vec<StudioDto>> {
        let studios = studios::Entity::find().all(&self.db).await?;
        Ok(studios.into_iter().map(StudioDto::from).collect())
    }

    pub async fn find(&self, id: i32) -> CatalogResult<Option<StudioDto>> {
        let studio = studios::Entity::find_by_id(id).one(&self.db).await?;
        Ok(studio.map(StudioDto::from))
    }

    /// The owning studio of a movie, wrapped in a one-element list. An
    /// unknown movie id yields an empty list.
    pub async fn list_for_movie(&self, movie_id: i32) -> CatalogResult<Vec<StudioDto>> {
        let movie = match movies::Entity::find_by_id(movie_id).one(&self.db).await? {
            Some(movie) => movie,
            None => return Ok(Vec::new()),
        };

        let studio = studios::Entity::find_by_id(movie.studio_id)
            .one(&self.db)
            .await?;
        Ok(studio.into_iter().map(StudioDto::from).collect())
    }

    pub async fn add(&self, dto: &StudioDto) -> ServiceResponse {
        match dto.insert_model().insert(&self.db).await {
            Ok(studio) => {
                info!(studio_id = studio.id, "studio created");
                ServiceResponse::created(studio.id)
            }
            Err(err) => {
                warn!(error = %err, "failed to add studio");
                ServiceResponse::error("There was an error adding the Studio.")
                    .with_message(err.to_string())
            }
        }
    }

    /// Whole-row scalar update. Image state is owned by `replace_image` and
    /// is never touched here.
    pub async fn update(&self, dto: &StudioDto) -> ServiceResponse {
        let existing = match studios::Entity::find_by_id(dto.id).one(&self.db).await {
            Ok(found) => found,
            Err(err) => {
                warn!(studio_id = dto.id, error = %err, "failed to load studio for update");
                return ServiceResponse::error("An error occurred updating the record");
            }
        };
        if existing.is_none() {
            return ServiceResponse::not_found("Studio could not be found");
        }

        match dto.replace_model().update(&self.db).await {
            Ok(_) => ServiceResponse::updated(),
            Err(err) => {
                warn!(studio_id = dto.id, error = %err, "failed to update studio");
                ServiceResponse::error("An error occurred updating the record")
            }
        }
    }

    /// Delete a studio; its movies (and their association rows) cascade at
    /// the store level. A stored image file is left behind on disk.
    pub async fn delete(&self, id: i32) -> ServiceResponse {
        let existing = match studios::Entity::find_by_id(id).one(&self.db).await {
            Ok(found) => found,
            Err(err) => {
                warn!(studio_id = id, error = %err, "failed to load studio for delete");
                return ServiceResponse::error("Error encountered while deleting the studio");
            }
        };
        if existing.is_none() {
            return ServiceResponse::not_found(
                "Studio cannot be deleted because it does not exist.",
            );
        }

        match studios::Entity::delete_by_id(id).exec(&self.db).await {
            Ok(_) => {
                info!(studio_id = id, "studio deleted");
                ServiceResponse::deleted()
            }
            Err(err) => {
                warn!(studio_id = id, error = %err, "failed to delete studio");
                ServiceResponse::error("Error encountered while deleting the studio")
            }
        }
    }

    /// Replace (or set) the studio image. Validation runs before any file is
    /// touched; once the new file is written, a persistence failure leaves it
    /// on disk rather than rolling it back.
    pub async fn replace_image(&self, id: i32, content: &[u8], file_name: &str) -> ServiceResponse {
        let studio = match studios::Entity::find_by_id(id).one(&self.db).await {
            Ok(found) => found,
            Err(err) => {
                warn!(studio_id = id, error = %err, "failed to load studio for image replace");
                return ServiceResponse::error("An error occurred updating the record");
            }
        };
        let Some(studio) = studio else {
            return ServiceResponse::not_found(format!("Studio {} not found", id));
        };

        if content.is_empty() {
            return ServiceResponse::error("No File Content");
        }

        let extension = image_store::extension_of(file_name);
        if !image_store::is_allowed(&extension) {
            return ServiceResponse::error(format!(
                "{} is not a valid file extension",
                extension
            ));
        }

        // Remove the previous image so exactly one file remains per studio.
        // A missing old file is not an error.
        if studio.has_pic {
            if let Some(old_extension) = studio.pic_extension.as_deref() {
                if let Err(err) = self.images.delete(id, old_extension) {
                    warn!(studio_id = id, error = %err, "failed to remove previous studio image");
                }
            }
        }

        if let Err(err) = self.images.write(id, &extension, content) {
            warn!(studio_id = id, error = %err, "failed to store studio image");
            return ServiceResponse::error("There was an error storing the studio image")
                .with_message(err.to_string());
        }

        let update = studios::ActiveModel {
            id: Set(id),
            has_pic: Set(true),
            pic_extension: Set(Some(extension)),
            ..Default::default()
        };
        match update.update(&self.db).await {
            Ok(_) => {
                info!(studio_id = id, "studio image replaced");
                ServiceResponse::updated()
            }
            Err(err) => {
                // The new file stays on disk; the store row still points at
                // the old state.
                warn!(studio_id = id, error = %err, "failed to persist studio image state");
                ServiceResponse::error("An error occurred updating the record")
            }
        }
    }
}
