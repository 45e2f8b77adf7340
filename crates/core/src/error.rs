use thiserror::Error;

/// Failure while normalizing XML into a [`tilescope_api::RawNode`] tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum XmlError {
    #[error("XML syntax error at byte {position}: {message}")]
    Syntax { position: u64, message: String },
    #[error("Unexpected closing tag </{0}>")]
    UnexpectedClose(String),
    #[error("Unclosed element <{0}>")]
    Unclosed(String),
    #[error("Document has no root element")]
    NoRoot,
}

pub type Result<T> = std::result::Result<T, XmlError>;
