use crate::{ParseError, Reader};

/// Program association table (PID 0).
#[derive(Debug, Clone)]
pub struct Pat {
    table_id: u8,
    section_syntax_indicator: bool,
    transport_stream_id: u16,
    version_number: u8,
    current_next_indicator: bool,
    section_number: u8,
    last_section_number: u8,
    program_entries: Vec<ProgramEntry>,
    crc: u32,
}

/// One association between a program number and the PID carrying its
/// program map table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramEntry {
    program_number: u16,
    pid: u16,
}

impl ProgramEntry {
    pub fn program_number(&self) -> u16 {
        self.program_number
    }

    pub fn pid(&self) -> u16 {
        self.pid
    }

    /// Program number 0 maps to the network information table.
    pub fn is_network_pid(&self) -> bool {
        self.program_number == 0
    }
}

impl Pat {
    pub fn parse(data: &[u8]) -> Result<Self, ParseError> {
        let mut reader = Reader::new(data);
        Self::parse_from(&mut reader)
    }

    pub fn parse_from(reader: &mut Reader<'_>) -> Result<Self, ParseError> {
        let table_id = reader.read_u8()?;

        let word = reader.read_u16()?;
        let section_syntax_indicator = word & 0x8000 != 0;
        let section_length = word & 0x0fff;

        let mut section = reader.sub_reader(section_length as usize)?;

        let transport_stream_id = section.read_u16()?;
        let byte = section.read_u8()?;
        let version_number = (byte >> 1) & 0x1f;
        let current_next_indicator = byte & 0x01 != 0;
        let section_number = section.read_u8()?;
        let last_section_number = section.read_u8()?;

        // every entry is 4 bytes; the trailing 4 bytes are the CRC
        let mut program_entries = Vec::new();
        while section.remaining() > 4 {
            let mut entry = section.sub_reader(4)?;
            let program_number = entry.read_u16()?;
            let pid = entry.read_u16()? & 0x1fff;
            program_entries.push(ProgramEntry {
                program_number,
                pid,
            });
        }

        let crc = section.read_u32()?;

        Ok(Pat {
            table_id,
            section_syntax_indicator,
            transport_stream_id,
            version_number,
            current_next_indicator,
            section_number,
            last_section_number,
            program_entries,
            crc,
        })
    }

    pub fn table_id(&self) -> u8 {
        self.table_id
    }

    pub fn section_syntax_indicator(&self) -> bool {
        self.section_syntax_indicator
    }

    pub fn transport_stream_id(&self) -> u16 {
        self.transport_stream_id
    }

    pub fn version_number(&self) -> u8 {
        self.version_number
    }

    pub fn current_next_indicator(&self) -> bool {
        self.current_next_indicator
    }

    pub fn section_number(&self) -> u8 {
        self.section_number
    }

    pub fn last_section_number(&self) -> u8 {
        self.last_section_number
    }

    pub fn program_entries(&self) -> &[ProgramEntry] {
        &self.program_entries
    }

    pub fn crc(&self) -> u32 {
        self.crc
    }
}
