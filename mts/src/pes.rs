use crate::{helper, ParseError, Reader};

/// Packetized elementary stream packet.
///
/// The payload borrows from the input buffer; no elementary stream data
/// is copied.
#[derive(Debug, Clone)]
pub struct Pes<'a> {
    packet_start_code_prefix: u32,
    stream_id: u8,
    header: Option<PesHeader>,
    payload: &'a [u8],
}

/// Optional PES header, absent for the stream ids the standard exempts
/// (padding, program stream map, private stream 2, ECM/EMM, ...).
#[derive(Debug, Clone, Default)]
pub struct PesHeader {
    scrambling_control: u8,
    priority: bool,
    data_alignment_indicator: bool,
    copyright: bool,
    original_or_copy: bool,
    presentation_timestamp: Option<u64>,
    decoding_timestamp: Option<u64>,
    elementary_stream_clock_reference: Option<u64>,
    es_rate: Option<u32>,
    trick_mode: Option<TrickMode>,
    additional_copy_info: Option<u8>,
    previous_crc: Option<u16>,
    has_extension: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrickMode {
    pub control: u8,
    pub data: u8,
}

impl<'a> Pes<'a> {
    pub fn parse(data: &'a [u8]) -> Result<Self, ParseError> {
        let mut reader = Reader::new(data);

        let packet_start_code_prefix = reader.read_u24()?;
        let stream_id = reader.read_u8()?;

        // zero means the packet extends to the end of the data
        let packet_length = match reader.read_u16()? as usize {
            0 => reader.remaining(),
            length => length,
        };
        let mut packet = reader.sub_reader(packet_length)?;

        let header = if header_exempt(stream_id) {
            None
        } else {
            Some(PesHeader::parse(&mut packet)?)
        };

        Ok(Pes {
            packet_start_code_prefix,
            stream_id,
            header,
            payload: packet.remaining_data(),
        })
    }

    pub fn packet_start_code_prefix(&self) -> u32 {
        self.packet_start_code_prefix
    }

    pub fn stream_id(&self) -> u8 {
        self.stream_id
    }

    pub fn header(&self) -> Option<&PesHeader> {
        self.header.as_ref()
    }

    pub fn presentation_timestamp(&self) -> Option<u64> {
        self.header.as_ref()?.presentation_timestamp
    }

    pub fn decoding_timestamp(&self) -> Option<u64> {
        self.header.as_ref()?.decoding_timestamp
    }

    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }
}

impl PesHeader {
    fn parse(packet: &mut Reader<'_>) -> Result<Self, ParseError> {
        let mut header = PesHeader::default();

        let byte = packet.read_u8()?;
        if byte >> 6 != 0b10 {
            return Err(ParseError::InvalidMarker("pes header prefix"));
        }
        header.scrambling_control = (byte >> 4) & 0x03;
        header.priority = byte & 0x08 != 0;
        header.data_alignment_indicator = byte & 0x04 != 0;
        header.copyright = byte & 0x02 != 0;
        header.original_or_copy = byte & 0x01 != 0;

        let byte = packet.read_u8()?;
        let pts_dts_flags = byte >> 6;
        if pts_dts_flags == 0b01 {
            return Err(ParseError::ForbiddenPtsDtsFlags);
        }
        let escr_flag = byte & 0x20 != 0;
        let es_rate_flag = byte & 0x10 != 0;
        let dsm_trick_mode_flag = byte & 0x08 != 0;
        let additional_copy_info_flag = byte & 0x04 != 0;
        let crc_flag = byte & 0x02 != 0;
        header.has_extension = byte & 0x01 != 0;

        let header_data_length = packet.read_u8()?;
        let mut fields = packet.sub_reader(header_data_length as usize)?;

        if pts_dts_flags & 0b10 != 0 {
            header.presentation_timestamp = Some(read_split_timestamp(&mut fields)?);
        }
        if pts_dts_flags == 0b11 {
            header.decoding_timestamp = Some(read_split_timestamp(&mut fields)?);
        }
        if escr_flag {
            let raw = fields.read_u48()?;
            let ts_32_30 = ((raw >> 43) & 0x07) as u8;
            let ts_29_15 = ((raw >> 27) & 0x7fff) as u16;
            let ts_14_0 = ((raw >> 11) & 0x7fff) as u16;
            let extension = (raw >> 1) & 0x01ff;
            header.elementary_stream_clock_reference =
                Some(helper::read_timestamp(ts_32_30, ts_29_15, ts_14_0) * 300 + extension);
        }
        if es_rate_flag {
            let raw = fields.read_u24()?;
            header.es_rate = Some((raw >> 1) & 0x003f_ffff);
        }
        if dsm_trick_mode_flag {
            let raw = fields.read_u8()?;
            header.trick_mode = Some(TrickMode {
                control: raw >> 5,
                data: raw & 0x1f,
            });
        }
        if additional_copy_info_flag {
            header.additional_copy_info = Some(fields.read_u8()? & 0x7f);
        }
        if crc_flag {
            header.previous_crc = Some(fields.read_u16()?);
        }

        Ok(header)
    }

    pub fn scrambling_control(&self) -> u8 {
        self.scrambling_control
    }

    pub fn priority(&self) -> bool {
        self.priority
    }

    pub fn data_alignment_indicator(&self) -> bool {
        self.data_alignment_indicator
    }

    pub fn copyright(&self) -> bool {
        self.copyright
    }

    pub fn original_or_copy(&self) -> bool {
        self.original_or_copy
    }

    pub fn presentation_timestamp(&self) -> Option<u64> {
        self.presentation_timestamp
    }

    pub fn decoding_timestamp(&self) -> Option<u64> {
        self.decoding_timestamp
    }

    pub fn elementary_stream_clock_reference(&self) -> Option<u64> {
        self.elementary_stream_clock_reference
    }

    pub fn es_rate(&self) -> Option<u32> {
        self.es_rate
    }

    pub fn trick_mode(&self) -> Option<TrickMode> {
        self.trick_mode
    }

    pub fn additional_copy_info(&self) -> Option<u8> {
        self.additional_copy_info
    }

    pub fn previous_crc(&self) -> Option<u16> {
        self.previous_crc
    }

    pub fn has_extension(&self) -> bool {
        self.has_extension
    }
}

/// Stream ids whose packets carry no PES header after the length field.
fn header_exempt(stream_id: u8) -> bool {
    matches!(
        stream_id,
        0xbc | // program_stream_map
        0xbe | // padding_stream
        0xbf | // private_stream_2
        0xf0 | // ECM
        0xf1 | // EMM
        0xf2 | // DSMCC
        0xf8 | // H.222.1 type E
        0xff // program_stream_directory
    )
}

fn read_split_timestamp(reader: &mut Reader<'_>) -> Result<u64, ParseError> {
    let raw = reader.read_u40()?;
    let ts_32_30 = ((raw >> 33) & 0x07) as u8;
    let ts_29_15 = ((raw >> 17) & 0x7fff) as u16;
    let ts_14_0 = ((raw >> 1) & 0x7fff) as u16;
    Ok(helper::read_timestamp(ts_32_30, ts_29_15, ts_14_0))
}
