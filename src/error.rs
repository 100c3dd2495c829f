use crate::wizard::Step;
use thiserror::Error;

/// Blocked transition or rejected user input. Never changes session data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a keyword!")]
    MissingKeyword,

    #[error("Please select or add a Facebook Page first!")]
    MissingFacebookPage,

    #[error("Invalid Facebook Page: {0}")]
    InvalidFacebookPage(String),

    #[error("Cannot {action} from the {from} step")]
    InvalidTransition { from: Step, action: &'static str },

    #[error("Not a usable video file: {0}")]
    InvalidVideo(String),
}

/// Content generation failed as a whole; nothing partial is kept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Generation service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),
}

#[derive(Error, Debug)]
pub enum KushtiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("API key is not set. Run `kushti config --set-api-key YOUR_KEY` or export GEMINI_API_KEY")]
    MissingApiKey,

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] kushti_post_common::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, KushtiError>;
