use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// One message per violated field rule, in evaluation order.
    #[error("Invalid fields: {}", .0.join("; "))]
    InvalidFields(Vec<String>),
}
