//! Flat transfer representations crossing the service boundary, plus the
//! uniform outcome type mutating operations return. Entities with
//! relationship navigation never leave the service layer; these shapes do.

pub mod actor;
pub mod movie;
pub mod response;
pub mod studio;

pub use actor::ActorDto;
pub use movie::MovieDto;
pub use response::{ServiceResponse, ServiceStatus};
pub use studio::StudioDto;
