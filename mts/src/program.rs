use crate::stream_type::StreamType;
use crate::{ParseError, Reader};

/// Program map table section: the streams making up one program.
#[derive(Debug, Clone)]
pub struct Program {
    table_id: u8,
    section_syntax_indicator: bool,
    program_number: u16,
    version_number: u8,
    current_next_indicator: bool,
    section_number: u8,
    last_section_number: u8,
    pcr_pid: u16,
    program_info: Vec<u8>,
    stream_entries: Vec<StreamEntry>,
    crc: u32,
}

/// One elementary stream listed in a program map table.
#[derive(Debug, Clone)]
pub struct StreamEntry {
    type_id: u8,
    pid: u16,
    es_info_entries: Vec<EsInfoEntry>,
}

/// Descriptor attached to a stream entry: tag plus opaque payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EsInfoEntry {
    pub tag: u8,
    pub data: Vec<u8>,
}

impl StreamEntry {
    fn parse(reader: &mut Reader<'_>) -> Result<Self, ParseError> {
        let type_id = reader.read_u8()?;
        let pid = reader.read_u16()? & 0x1fff;

        let word = reader.read_u16()?;
        if (word >> 10) & 0x03 != 0 {
            return Err(ParseError::InvalidMarker("es_info_length"));
        }
        let es_info_length = word & 0x03ff;

        let mut es_info = reader.sub_reader(es_info_length as usize)?;
        let mut es_info_entries = Vec::new();
        while !es_info.is_empty() {
            let tag = es_info.read_u8()?;
            let length = es_info.read_u8()?;
            let data = es_info.sub_reader(length as usize)?;
            es_info_entries.push(EsInfoEntry {
                tag,
                data: data.remaining_data().to_vec(),
            });
        }

        Ok(StreamEntry {
            type_id,
            pid,
            es_info_entries,
        })
    }

    pub fn type_id(&self) -> u8 {
        self.type_id
    }

    pub fn stream_type(&self) -> StreamType {
        StreamType::from_id(self.type_id)
    }

    pub fn pid(&self) -> u16 {
        self.pid
    }

    pub fn es_info_entries(&self) -> &[EsInfoEntry] {
        &self.es_info_entries
    }
}

impl Program {
    pub fn parse(data: &[u8]) -> Result<Self, ParseError> {
        let mut reader = Reader::new(data);
        Self::parse_from(&mut reader)
    }

    pub fn parse_from(reader: &mut Reader<'_>) -> Result<Self, ParseError> {
        let table_id = reader.read_u8()?;

        let word = reader.read_u16()?;
        let section_syntax_indicator = word & 0x8000 != 0;
        if (word >> 10) & 0x03 != 0 {
            return Err(ParseError::InvalidMarker("section_length"));
        }
        let section_length = word & 0x03ff;

        let mut section = reader.sub_reader(section_length as usize)?;

        let program_number = section.read_u16()?;
        let byte = section.read_u8()?;
        let version_number = (byte >> 1) & 0x1f;
        let current_next_indicator = byte & 0x01 != 0;
        let section_number = section.read_u8()?;
        let last_section_number = section.read_u8()?;
        let pcr_pid = section.read_u16()? & 0x1fff;

        let word = section.read_u16()?;
        if (word >> 10) & 0x03 != 0 {
            return Err(ParseError::InvalidMarker("program_info_length"));
        }
        let program_info_length = word & 0x03ff;
        let program_info = section
            .sub_reader(program_info_length as usize)?
            .remaining_data()
            .to_vec();

        let mut stream_entries = Vec::new();
        while section.remaining() > 4 {
            stream_entries.push(StreamEntry::parse(&mut section)?);
        }

        let crc = section.read_u32()?;

        Ok(Program {
            table_id,
            section_syntax_indicator,
            program_number,
            version_number,
            current_next_indicator,
            section_number,
            last_section_number,
            pcr_pid,
            program_info,
            stream_entries,
            crc,
        })
    }

    pub fn table_id(&self) -> u8 {
        self.table_id
    }

    pub fn section_syntax_indicator(&self) -> bool {
        self.section_syntax_indicator
    }

    pub fn program_number(&self) -> u16 {
        self.program_number
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

    pub fn pcr_pid(&self) -> u16 {
        self.pcr_pid
    }

    pub fn program_info(&self) -> &[u8] {
        &self.program_info
    }

    pub fn stream_entries(&self) -> &[StreamEntry] {
        &self.stream_entries
    }

    pub fn crc(&self) -> u32 {
        self.crc
    }
}
