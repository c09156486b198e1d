use std::collections::BTreeMap;

use log::{debug, warn};

use crate::pat::Pat;
use crate::program::{Program, StreamEntry};
use crate::stream_type::StreamType;
use crate::ts_packet::TsPacket;
use crate::{ParseError, Reader, PACKET_SIZE};

/// Stateful transport stream demuxer.
///
/// Feed consecutive 188-byte packets through [`Parser::read`]. The parser
/// discovers programs from the PAT, parses each program map table once,
/// and reassembles the PES payloads of the listed elementary streams.
/// When a payload-unit-start packet closes a preceding payload, the
/// completed PES data is available from [`Parser::pes_data`] until the
/// next call to `read`.
#[derive(Debug, Default)]
pub struct Parser {
    // a discovered program PID maps to None until its PMT is parsed
    programs: BTreeMap<u16, Option<Program>>,
    stream_states: BTreeMap<u16, StreamState>,
    pes: Option<CompletedPes>,
    continuity_errors: u32,
}

#[derive(Debug)]
struct StreamState {
    data: Vec<u8>,
    last_continuity_counter: u8,
}

#[derive(Debug)]
struct CompletedPes {
    pid: u16,
    data: Vec<u8>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one 188-byte transport stream packet.
    pub fn read(&mut self, packet: &[u8]) -> Result<(), ParseError> {
        if packet.len() != PACKET_SIZE {
            return Err(ParseError::InvalidPacketLength(packet.len()));
        }

        // whatever was completed by the previous packet has been seen
        self.pes = None;

        let mut reader = Reader::new(packet);
        let ts_packet = TsPacket::parse(&mut reader)?;

        if !ts_packet.has_payload_field() {
            return Ok(());
        }

        let pid = ts_packet.pid();

        if self.has_stream(pid) {
            self.read_stream_payload(&ts_packet, &reader);
            return Ok(());
        }

        if ts_packet.payload_unit_start_indicator() {
            let pointer_field = reader.read_u8()?;
            if pointer_field != 0 {
                reader.skip(pointer_field as usize)?;
            }
        }

        if pid == 0 {
            let pat = Pat::parse_from(&mut reader)?;
            for entry in pat.program_entries() {
                if entry.is_network_pid() {
                    continue;
                }
                self.programs.entry(entry.pid()).or_insert(None);
            }
        } else if let Some(slot) = self.programs.get_mut(&pid) {
            if slot.is_none() {
                let program = Program::parse_from(&mut reader)?;
                debug!(
                    "program {} on pid {pid}: {} streams",
                    program.program_number(),
                    program.stream_entries().len()
                );
                *slot = Some(program);
            }
        }

        Ok(())
    }

    fn read_stream_payload(&mut self, ts_packet: &TsPacket, reader: &Reader<'_>) {
        let pid = ts_packet.pid();

        if let Some(state) = self.stream_states.get_mut(&pid) {
            let expected = (state.last_continuity_counter + 1) % 16;
            if ts_packet.continuity_counter() != expected {
                warn!(
                    "continuity error on pid {pid}: expected counter {expected}, got {}",
                    ts_packet.continuity_counter()
                );
                self.continuity_errors += 1;
                self.stream_states.remove(&pid);
                return;
            }
            state.last_continuity_counter = expected;
        }

        if ts_packet.payload_unit_start_indicator() {
            // the packet starting a new payload unit completes the previous one
            if let Some(state) = self.stream_states.remove(&pid) {
                self.pes = Some(CompletedPes {
                    pid,
                    data: state.data,
                });
            }
            self.stream_states.insert(
                pid,
                StreamState {
                    data: Vec::new(),
                    last_continuity_counter: ts_packet.continuity_counter(),
                },
            );
        }

        if let Some(state) = self.stream_states.get_mut(&pid) {
            state.data.extend_from_slice(reader.remaining_data());
        }
    }

    /// Drop all discovered programs and partially reassembled payloads.
    pub fn reset(&mut self) {
        self.programs.clear();
        self.stream_states.clear();
        self.pes = None;
    }

    pub fn has_pes(&self) -> bool {
        self.pes.is_some()
    }

    /// The reassembled PES data completed by the last `read`, if any.
    pub fn pes_data(&self) -> Option<&[u8]> {
        self.pes.as_ref().map(|pes| pes.data.as_slice())
    }

    /// PID of the stream the completed PES data belongs to.
    pub fn pes_pid(&self) -> Option<u16> {
        self.pes.as_ref().map(|pes| pes.pid)
    }

    /// Whether a program map table lists `pid` as an elementary stream.
    pub fn has_stream(&self, pid: u16) -> bool {
        self.find_stream(pid).is_some()
    }

    pub fn stream_type(&self, pid: u16) -> Option<StreamType> {
        self.find_stream(pid).map(StreamEntry::stream_type)
    }

    pub fn continuity_errors(&self) -> u32 {
        self.continuity_errors
    }

    /// The program map tables parsed so far.
    pub fn programs(&self) -> impl Iterator<Item = &Program> {
        self.programs.values().filter_map(Option::as_ref)
    }

    fn find_stream(&self, pid: u16) -> Option<&StreamEntry> {
        self.programs()
            .flat_map(Program::stream_entries)
            .find(|entry| entry.pid() == pid)
    }
}
