use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while loading episode data
#[derive(Debug)]
pub enum ScenealignError {
    Script(ScriptError),
    Transcript(TranscriptError),
    Other(io::Error),
}

/// Episode script (scene list) parsing errors
#[derive(Debug)]
pub struct ScriptError {
    pub message: String,
}

impl ScriptError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Transcript (ASR segment list) parsing errors
#[derive(Debug)]
pub struct TranscriptError {
    pub message: String,
}

impl TranscriptError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ScenealignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenealignError::Script(err) => write!(f, "Script error: {}", err),
            ScenealignError::Transcript(err) => write!(f, "Transcript error: {}", err),
            ScenealignError::Other(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ScenealignError {}
impl Error for ScriptError {}
impl Error for TranscriptError {}

// Conversion implementations
impl From<io::Error> for ScenealignError {
    fn from(err: io::Error) -> Self {
        ScenealignError::Other(err)
    }
}

impl From<ScriptError> for ScenealignError {
    fn from(err: ScriptError) -> Self {
        ScenealignError::Script(err)
    }
}

impl From<TranscriptError> for ScenealignError {
    fn from(err: TranscriptError) -> Self {
        ScenealignError::Transcript(err)
    }
}

// Conversion to io::Error for callers that funnel everything through io
impl From<ScenealignError> for io::Error {
    fn from(err: ScenealignError) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with ScenealignError
pub type ScenealignResult<T> = Result<T, ScenealignError>;
