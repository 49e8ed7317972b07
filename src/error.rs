use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("No home directory")]
    NoHomeDir,

    #[error("Required tool not found on PATH: {0}")]
    ToolNotFound(String),

    #[error("Task `{task}` failed with exit code {code}")]
    TaskFailed { task: String, code: i32 },

    #[error("Task `{task}` terminated by signal")]
    TaskTerminated { task: String },
}

pub type Result<T> = std::result::Result<T, Error>;
