use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required setting {0}")]
    MissingSetting(&'static str),
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed request envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    #[error("Malformed event payload in envelope body: {0}")]
    Payload(#[source] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Telegram request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Failed to read Telegram response: {0}")]
    Body(#[source] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Cannot read envelope from {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read envelope from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Empty input: no request envelope received")]
    Empty,
}

#[derive(Error, Debug)]
pub enum ForwardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
