use crate::adaptation_field::AdaptationField;
use crate::{ParseError, Reader, SYNC_BYTE};

/// Header of a 188-byte transport stream packet.
///
/// Parsing rejects packets without the 0x47 sync byte and packets with
/// the transport error indicator set.
#[derive(Debug, Clone)]
pub struct TsPacket {
    payload_unit_start_indicator: bool,
    transport_priority: bool,
    pid: u16,
    transport_scrambling_control: u8,
    adaptation_field_control: u8,
    continuity_counter: u8,
    adaptation_field: Option<AdaptationField>,
}

impl TsPacket {
    pub fn parse(reader: &mut Reader<'_>) -> Result<Self, ParseError> {
        let sync = reader.read_u8()?;
        if sync != SYNC_BYTE {
            return Err(ParseError::InvalidSyncByte(sync));
        }

        let word = reader.read_u16()?;
        if word & 0x8000 != 0 {
            return Err(ParseError::TransportErrorIndicator);
        }
        let payload_unit_start_indicator = word & 0x4000 != 0;
        let transport_priority = word & 0x2000 != 0;
        let pid = word & 0x1fff;

        let byte = reader.read_u8()?;
        let transport_scrambling_control = byte >> 6;
        let adaptation_field_control = (byte >> 4) & 0x03;
        let continuity_counter = byte & 0x0f;

        let mut packet = TsPacket {
            payload_unit_start_indicator,
            transport_priority,
            pid,
            transport_scrambling_control,
            adaptation_field_control,
            continuity_counter,
            adaptation_field: None,
        };

        if packet.has_adaptation_field() {
            packet.adaptation_field = Some(AdaptationField::parse(reader)?);
        }

        Ok(packet)
    }

    pub fn is_null_packet(&self) -> bool {
        self.pid == 0x1fff
    }

    pub fn has_adaptation_field(&self) -> bool {
        self.adaptation_field_control == 2 || self.adaptation_field_control == 3
    }

    pub fn has_payload_field(&self) -> bool {
        self.adaptation_field_control == 1 || self.adaptation_field_control == 3
    }

    pub fn payload_unit_start_indicator(&self) -> bool {
        self.payload_unit_start_indicator
    }

    pub fn transport_priority(&self) -> bool {
        self.transport_priority
    }

    pub fn pid(&self) -> u16 {
        self.pid
    }

    pub fn transport_scrambling_control(&self) -> u8 {
        self.transport_scrambling_control
    }

    pub fn continuity_counter(&self) -> u8 {
        self.continuity_counter
    }

    pub fn adaptation_field(&self) -> Option<&AdaptationField> {
        self.adaptation_field.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_payload_packet() {
        let data = [0x47, 0x40, 0x11, 0x10, 0xaa, 0xbb];
        let mut reader = Reader::new(&data);

        let packet = TsPacket::parse(&mut reader).unwrap();
        assert!(!packet.is_null_packet());
        assert!(!packet.has_adaptation_field());
        assert!(packet.has_payload_field());
        assert!(packet.payload_unit_start_indicator());
        assert!(!packet.transport_priority());
        assert_eq!(packet.pid(), 17);
        assert_eq!(packet.transport_scrambling_control(), 0);
        assert_eq!(packet.continuity_counter(), 0);

        // the header parse stops at the payload
        assert_eq!(reader.remaining_data(), &[0xaa, 0xbb]);
    }

    #[test]
    fn null_packet_pid() {
        let data = [0x47, 0x1f, 0xff, 0x11];
        let mut reader = Reader::new(&data);
        let packet = TsPacket::parse(&mut reader).unwrap();
        assert!(packet.is_null_packet());
        assert_eq!(packet.continuity_counter(), 1);
    }

    #[test]
    fn adaptation_field_followed_by_payload() {
        // afc = 3: adaptation field then payload
        let data = [0x47, 0x00, 0x64, 0x35, 0x01, 0x40, 0xee];
        let mut reader = Reader::new(&data);

        let packet = TsPacket::parse(&mut reader).unwrap();
        assert_eq!(packet.pid(), 100);
        assert!(packet.has_adaptation_field());
        assert!(packet.has_payload_field());
        assert_eq!(packet.continuity_counter(), 5);

        let field = packet.adaptation_field().unwrap();
        assert_eq!(field.length(), 1);
        assert!(field.random_access_indicator());
        assert_eq!(reader.remaining_data(), &[0xee]);
    }

    #[test]
    fn rejects_bad_sync_byte() {
        let data = [0x48, 0x00, 0x00, 0x10];
        let mut reader = Reader::new(&data);
        assert_eq!(
            TsPacket::parse(&mut reader).unwrap_err(),
            ParseError::InvalidSyncByte(0x48)
        );
    }

    #[test]
    fn rejects_transport_error_indicator() {
        let data = [0x47, 0x80, 0x00, 0x10];
        let mut reader = Reader::new(&data);
        assert_eq!(
            TsPacket::parse(&mut reader).unwrap_err(),
            ParseError::TransportErrorIndicator
        );
    }
}
