/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building entities from loose data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An ability name did not match any of the six abilities.
    #[error("unknown ability: \"{0}\"")]
    UnknownAbility(String),

    /// A creature kind name did not match any known kind.
    #[error("unknown creature kind: \"{0}\"")]
    UnknownKind(String),
}
