use epl_renderer::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EplError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("png encoding failed: {0}")]
    Png(String),
}
