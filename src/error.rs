use std::io;

use crate::ui::elements::ElementId;

/// 应用错误
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("required element `{0}` could not be resolved")]
    MissingElement(ElementId),

    #[error("elements `{first}` and `{second}` resolved to the same handle")]
    DuplicateHandle { first: ElementId, second: ElementId },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
