use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("gazetteer parse error: {0}")]
    Parse(String),

    #[error("gazetteer is empty")]
    EmptyGazetteer,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
