use crate::{ParseError, Reader};

/// Adaptation field of a transport stream packet.
///
/// A zero-length field is valid and carries no flags; all optional parts
/// are reported through `Option` accessors.
#[derive(Debug, Clone, Default)]
pub struct AdaptationField {
    length: u8,
    discontinuity_indicator: bool,
    random_access_indicator: bool,
    elementary_stream_priority_indicator: bool,
    program_clock_reference: Option<u64>,
    original_program_clock_reference: Option<u64>,
    splice_countdown: Option<u8>,
    transport_private_data: Option<Vec<u8>>,
    extension: Option<AdaptationFieldExtension>,
}

#[derive(Debug, Clone, Default)]
pub struct AdaptationFieldExtension {
    legal_time_window: Option<LegalTimeWindow>,
    piecewise_rate: Option<u32>,
    seamless_splice: Option<SeamlessSplice>,
}

#[derive(Debug, Clone, Copy)]
pub struct LegalTimeWindow {
    pub valid: bool,
    pub offset: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct SeamlessSplice {
    pub splice_type: u8,
    pub dts_next_au: u64,
}

impl AdaptationField {
    /// Parse the adaptation field, consuming `length` bytes past the
    /// length byte regardless of how much of the field is used.
    pub fn parse(reader: &mut Reader<'_>) -> Result<Self, ParseError> {
        let length = reader.read_u8()?;
        let mut field = AdaptationField {
            length,
            ..Default::default()
        };
        if length == 0 {
            return Ok(field);
        }

        let mut body = reader.sub_reader(length as usize)?;

        let flags = body.read_u8()?;
        field.discontinuity_indicator = flags & 0x80 != 0;
        field.random_access_indicator = flags & 0x40 != 0;
        field.elementary_stream_priority_indicator = flags & 0x20 != 0;
        let pcr_flag = flags & 0x10 != 0;
        let opcr_flag = flags & 0x08 != 0;
        let splicing_point_flag = flags & 0x04 != 0;
        let transport_private_data_flag = flags & 0x02 != 0;
        let extension_flag = flags & 0x01 != 0;

        if pcr_flag {
            field.program_clock_reference = Some(read_clock_reference(&mut body)?);
        }
        if opcr_flag {
            field.original_program_clock_reference = Some(read_clock_reference(&mut body)?);
        }
        if splicing_point_flag {
            field.splice_countdown = Some(body.read_u8()?);
        }
        if transport_private_data_flag {
            let len = body.read_u8()?;
            let data = body.sub_reader(len as usize)?;
            field.transport_private_data = Some(data.remaining_data().to_vec());
        }
        if extension_flag {
            let len = body.read_u8()?;
            let mut extension = body.sub_reader(len as usize)?;
            field.extension = Some(AdaptationFieldExtension::parse(&mut extension)?);
        }

        Ok(field)
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn discontinuity_indicator(&self) -> bool {
        self.discontinuity_indicator
    }

    pub fn random_access_indicator(&self) -> bool {
        self.random_access_indicator
    }

    pub fn elementary_stream_priority_indicator(&self) -> bool {
        self.elementary_stream_priority_indicator
    }

    /// Program clock reference in 27 MHz units (base * 300 + extension).
    pub fn program_clock_reference(&self) -> Option<u64> {
        self.program_clock_reference
    }

    pub fn original_program_clock_reference(&self) -> Option<u64> {
        self.original_program_clock_reference
    }

    pub fn splice_countdown(&self) -> Option<u8> {
        self.splice_countdown
    }

    pub fn transport_private_data(&self) -> Option<&[u8]> {
        self.transport_private_data.as_deref()
    }

    pub fn extension(&self) -> Option<&AdaptationFieldExtension> {
        self.extension.as_ref()
    }
}

impl AdaptationFieldExtension {
    fn parse(reader: &mut Reader<'_>) -> Result<Self, ParseError> {
        let mut extension = AdaptationFieldExtension::default();

        let flags = reader.read_u8()?;
        let ltw_flag = flags & 0x80 != 0;
        let piecewise_rate_flag = flags & 0x40 != 0;
        let seamless_splice_flag = flags & 0x20 != 0;

        if ltw_flag {
            let word = reader.read_u16()?;
            extension.legal_time_window = Some(LegalTimeWindow {
                valid: word & 0x8000 != 0,
                offset: word & 0x7fff,
            });
        }
        if piecewise_rate_flag {
            let word = reader.read_u24()?;
            extension.piecewise_rate = Some(word & 0x003f_ffff);
        }
        if seamless_splice_flag {
            let raw = reader.read_u40()?;
            let splice_type = (raw >> 36) as u8;
            let ts_32_30 = ((raw >> 33) & 0x07) as u8;
            let ts_29_15 = ((raw >> 17) & 0x7fff) as u16;
            let ts_14_0 = ((raw >> 1) & 0x7fff) as u16;
            extension.seamless_splice = Some(SeamlessSplice {
                splice_type,
                dts_next_au: crate::helper::read_timestamp(ts_32_30, ts_29_15, ts_14_0),
            });
        }

        Ok(extension)
    }

    pub fn legal_time_window(&self) -> Option<LegalTimeWindow> {
        self.legal_time_window
    }

    pub fn piecewise_rate(&self) -> Option<u32> {
        self.piecewise_rate
    }

    pub fn seamless_splice(&self) -> Option<SeamlessSplice> {
        self.seamless_splice
    }
}

fn read_clock_reference(reader: &mut Reader<'_>) -> Result<u64, ParseError> {
    let raw = reader.read_u48()?;
    let base = raw >> 15;
    let extension = raw & 0x01ff;
    Ok(base * 300 + extension)
}
