use thiserror::Error;

/// Errors produced while parsing transport stream data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of input: needed {needed} more bytes, {available} available")]
    UnexpectedEnd { needed: usize, available: usize },

    #[error("invalid sync byte {0:#04x}")]
    InvalidSyncByte(u8),

    #[error("transport error indicator is set")]
    TransportErrorIndicator,

    #[error("invalid marker bits in {0}")]
    InvalidMarker(&'static str),

    #[error("forbidden pts_dts_flags value 0b01")]
    ForbiddenPtsDtsFlags,

    #[error("invalid packet length {0}, expected 188")]
    InvalidPacketLength(usize),
}
