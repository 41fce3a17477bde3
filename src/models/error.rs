#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("Unrecognized theme: {0}")]
    Unrecognized(String),
}
