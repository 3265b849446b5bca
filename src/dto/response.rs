use serde::{Deserialize, Serialize};

/// Outcome of a mutating catalog operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceStatus {
    Created,
    Updated,
    Deleted,
    NotFound,
    Error,
}

/// Uniform contract every mutating domain-service operation returns to its
/// caller. The boundary layer maps the status to a transport-level response;
/// `messages` keeps its insertion order so callers see validation issues in
/// the order they were detected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub status: ServiceStatus,
    pub messages: Vec<String>,
    /// Populated only when `status` is `Created`.
    pub created_id: Option<i32>,
}

impl ServiceResponse {
    pub fn with_status(status: ServiceStatus) -> Self {
        Self {
            status,
            messages: Vec::new(),
            created_id: None,
        }
    }

    pub fn created(id: i32) -> Self {
        Self {
            status: ServiceStatus::Created,
            messages: Vec::new(),
            created_id: Some(id),
        }
    }

    pub fn updated() -> Self {
        Self::with_status(ServiceStatus::Updated)
    }

    pub fn deleted() -> Self {
        Self::with_status(ServiceStatus::Deleted)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        let mut response = Self::with_status(ServiceStatus::NotFound);
        response.messages.push(message.into());
        response
    }

    pub fn error(message: impl Into<String>) -> Self {
        let mut response = Self::with_status(ServiceStatus::Error);
        response.messages.push(message.into());
        response
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }
}
