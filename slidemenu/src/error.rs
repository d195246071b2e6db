use thiserror::Error;

/// Errors surfaced by the host controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlideMenuError {
    #[error(
        "destination `{destination_id}` not found in container `{container_id}`"
    )]
    DestinationNotFound {
        container_id: String,
        destination_id: String,
    },
}

impl SlideMenuError {
    /// Build a [`SlideMenuError::DestinationNotFound`] from borrowed ids.
    pub fn destination_not_found(
        container_id: &str,
        destination_id: &str,
    ) -> Self {
        Self::DestinationNotFound {
            container_id: container_id.to_string(),
            destination_id: destination_id.to_string(),
        }
    }
}
