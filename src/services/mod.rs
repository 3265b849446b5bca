pub mod actor_service;
pub mod image_store;
pub mod movie_service;
pub mod studio_service;

pub use actor_service::ActorService;
pub use image_store::StudioImageStore;
pub use movie_service::MovieService;
pub use studio_service::StudioService;
