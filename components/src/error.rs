pub type Result<T> = std::result::Result<T, ComponentError>;

#[derive(thiserror::Error, Debug)]
pub enum ComponentError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Button has both a url and a custom_id")]
    LinkWithCustomId,

    #[error("Only buttons with the Link style may carry a url, and they must carry one")]
    LinkStyleMismatch,
}

impl<T> From<ComponentError> for Result<T> {
    fn from(e: ComponentError) -> Self {
        Err(e)
    }
}
