use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Language error: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
