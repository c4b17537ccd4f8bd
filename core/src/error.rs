use thiserror::Error;

/// Kallerfeil mot motoren. Manglende landmarks og degenerert geometri er
/// IKKE feil – de håndteres lokalt i analysatorene.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown exercise id: {0:?}")]
    UnknownExercise(String),
    #[error("a session is already active; stop it before starting a new one")]
    SessionAlreadyActive,
}

/// Lagringsfeil. Minnetilstanden i motoren er fortsatt gjeldende når disse oppstår.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not access store at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid stored state at `{field}`: {message}")]
    Decode { field: String, message: String },
    #[error("could not encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Feil fra den eksterne coaching-tjenesten. Påvirker aldri score/reps.
#[derive(Debug, Error)]
pub enum CoachingError {
    #[error("coaching unavailable: API key not set (env {0})")]
    MissingApiKey(String),
    #[error("coaching service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("coaching service unreachable: {0}")]
    Transport(String),
    #[error("coaching service returned no text")]
    EmptyResponse,
    #[error("could not read coaching response: {0}")]
    Decode(String),
}
