// libftm/src/error.rs

use derive_more::Display;
use thiserror::Error;

/// Failure reported by the hardware link during connect or transceive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// The tag left the field in the middle of an exchange.
    #[error("tag lost")]
    TagLost,

    /// Any other link failure, carrying the platform's message.
    #[error("{0}")]
    Other(String),
}

/// Which half of a poll cycle failed.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStage {
    /// Reading MB_CTRL_Dyn to look for HOST_PUT_MSG.
    #[display(fmt = "polling mailbox status")]
    Status,
    /// Reading the message length and message bytes.
    #[display(fmt = "reading mailbox")]
    Mailbox,
}

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("payload too large: {actual} bytes exceeds the {max} byte length field")]
    PayloadTooLarge { actual: usize, max: usize },

    // The listener-facing texts below are fixed strings the UI layer matches on.
    #[error("Message too large to write to NFC tag")]
    FrameTooLargeForLink { frame_len: usize, max: usize },

    #[error("Tag connection lost")]
    TagLost,

    #[error("NFC tag is read-only")]
    ReadOnlyTag,

    #[error("{0}")]
    Link(String),

    #[error("NFC operation failed.")]
    NoTag,

    #[error("invalid response length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("could not start mailbox polling: {0}")]
    Scheduler(String),

    #[error("tag error: code={code:#04x}")]
    TagStatus { code: u8 },

    #[error("{stage} failed: {source}")]
    Poll {
        stage: PollStage,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap an error raised inside a poll tick with the stage that failed.
    pub fn in_poll(stage: PollStage, source: Error) -> Self {
        Error::Poll {
            stage,
            source: Box::new(source),
        }
    }

    /// True when the underlying cause is the tag leaving the field.
    pub fn is_tag_lost(&self) -> bool {
        match self {
            Error::TagLost => true,
            Error::Poll { source, .. } => source.is_tag_lost(),
            _ => false,
        }
    }
}

impl From<LinkError> for Error {
    fn from(err: LinkError) -> Self {
        match err {
            LinkError::TagLost => Error::TagLost,
            LinkError::Other(msg) => Error::Link(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
