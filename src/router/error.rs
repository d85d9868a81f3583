use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unrecognized command: {0:?}")]
    UnrecognizedCommand(String),

    #[error("Two screens share the target {0:?}")]
    DuplicateTarget(String),

    #[error("No content available, only home and not found are reachable")]
    MissingContent,
}
