//! MPEG transport stream (ISO/IEC 13818-1) parsing.
//!
//! The crate works on the 188-byte packet framing of a transport stream:
//! [`Packetizer`] re-aligns arbitrary byte chunks to packet boundaries,
//! [`Parser`] demuxes consecutive packets into programs and reassembled
//! elementary stream payloads, and the section/packet types ([`Pat`],
//! [`Program`], [`Pes`], [`TsPacket`]) expose the parsed fields.

pub mod adaptation_field;
mod error;
pub mod helper;
pub mod packetizer;
pub mod parser;
pub mod pat;
pub mod pes;
pub mod program;
pub mod reader;
pub mod stream_type;
pub mod ts_packet;

pub use adaptation_field::AdaptationField;
pub use error::ParseError;
pub use packetizer::Packetizer;
pub use parser::Parser;
pub use pat::Pat;
pub use pes::Pes;
pub use program::Program;
pub use reader::Reader;
pub use stream_type::StreamType;
pub use ts_packet::TsPacket;

/// Size of a transport stream packet in bytes.
pub const PACKET_SIZE: usize = 188;

/// First byte of every transport stream packet.
pub const SYNC_BYTE: u8 = 0x47;
