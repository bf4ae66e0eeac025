use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathDataError {
    #[error("Unparseable path data. Leftover: '{remainder}'")]
    Unparseable { remainder: String },

    #[error("Incomplete subpath: {trailing} token(s) after the last close command")]
    IncompleteSubpath { trailing: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformParseError {
    #[error("Unexpected transform '{0}'")]
    Malformed(String),

    #[error("Matrix '{literal}' has {found} parameter(s), expected 6")]
    Arity { literal: String, found: usize },
}
