use std::fmt;

/// Elementary stream types from ISO/IEC 13818-1 table 2-34.
///
/// The reserved and user-private value ranges are collapsed into single
/// variants; [`StreamType::from_id`] covers every possible id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamType {
    Reserved,
    Video11172_2,
    Video13818_2,
    Audio11172_3,
    Audio13818_3,
    PrivateSection13818_1,
    PrivateData13818_1,
    Mheg13522,
    AnnexADsmCc,
    H222_1,
    TypeA13818_6,
    TypeB13818_6,
    TypeC13818_6,
    TypeD13818_6,
    Auxiliary13818_1,
    AdtsTransport13818_7,
    Visual14496_2,
    LatmTransport14496_3,
    SlPacketizedPes,
    SlPacketizedSections,
    SynchronizedDownload,
    MetadataPes,
    MetadataSections,
    MetadataDataCarousel,
    MetadataObjectCarousel,
    MetadataSynchronizedDownload,
    Mpeg2Ipmp,
    AvcVideo,
    Audio14496_3,
    Text14496_17,
    AuxiliaryVideo23002_3,
    SvcVideoSubBitstream,
    MvcVideoSubBitstream,
    ProfiledVideo,
    StereoscopicVideo,
    ProfiledVideo14496_10,
    Reserved13818_1,
    Ipmp,
    UserPrivate,
}

impl StreamType {
    pub fn from_id(id: u8) -> Self {
        use StreamType::*;
        match id {
            0x00 => Reserved,
            0x01 => Video11172_2,
            0x02 => Video13818_2,
            0x03 => Audio11172_3,
            0x04 => Audio13818_3,
            0x05 => PrivateSection13818_1,
            0x06 => PrivateData13818_1,
            0x07 => Mheg13522,
            0x08 => AnnexADsmCc,
            0x09 => H222_1,
            0x0a => TypeA13818_6,
            0x0b => TypeB13818_6,
            0x0c => TypeC13818_6,
            0x0d => TypeD13818_6,
            0x0e => Auxiliary13818_1,
            0x0f => AdtsTransport13818_7,
            0x10 => Visual14496_2,
            0x11 => LatmTransport14496_3,
            0x12 => SlPacketizedPes,
            0x13 => SlPacketizedSections,
            0x14 => SynchronizedDownload,
            0x15 => MetadataPes,
            0x16 => MetadataSections,
            0x17 => MetadataDataCarousel,
            0x18 => MetadataObjectCarousel,
            0x19 => MetadataSynchronizedDownload,
            0x1a => Mpeg2Ipmp,
            0x1b => AvcVideo,
            0x1c => Audio14496_3,
            0x1d => Text14496_17,
            0x1e => AuxiliaryVideo23002_3,
            0x1f => SvcVideoSubBitstream,
            0x20 => MvcVideoSubBitstream,
            0x21 => ProfiledVideo,
            0x22 => StereoscopicVideo,
            0x23 => ProfiledVideo14496_10,
            0x24..=0x7e => Reserved13818_1,
            0x7f => Ipmp,
            0x80..=0xff => UserPrivate,
        }
    }

    /// Human readable description of the stream type.
    pub fn description(&self) -> &'static str {
        use StreamType::*;
        match self {
            Reserved => "Reserved",
            Video11172_2 => "ISO/IEC 11172-2 Video",
            Video13818_2 => "ISO/IEC 13818-2 Video",
            Audio11172_3 => "ISO/IEC 11172-3 Audio",
            Audio13818_3 => "ISO/IEC 13818-3 Audio",
            PrivateSection13818_1 => "ISO/IEC 13818-1 private_sections",
            PrivateData13818_1 => "ISO/IEC 13818-1 PES packets containing private data",
            Mheg13522 => "ISO/IEC 13522 MHEG",
            AnnexADsmCc => "ISO/IEC 13818-1 Annex A DSM-CC",
            H222_1 => "Rec. ITU-T H.222.1",
            TypeA13818_6 => "ISO/IEC 13818-6 type A",
            TypeB13818_6 => "ISO/IEC 13818-6 type B",
            TypeC13818_6 => "ISO/IEC 13818-6 type C",
            TypeD13818_6 => "ISO/IEC 13818-6 type D",
            Auxiliary13818_1 => "ISO/IEC 13818-1 auxiliary",
            AdtsTransport13818_7 => "ISO/IEC 13818-7 Audio with ADTS transport syntax",
            Visual14496_2 => "ISO/IEC 14496-2 Visual",
            LatmTransport14496_3 => "ISO/IEC 14496-3 Audio with the LATM transport syntax",
            SlPacketizedPes => "SL-packetized or FlexMux stream in PES packets",
            SlPacketizedSections => "SL-packetized or FlexMux stream in ISO/IEC 14496 sections",
            SynchronizedDownload => "ISO/IEC 13818-6 Synchronized Download Protocol",
            MetadataPes => "Metadata carried in PES packets",
            MetadataSections => "Metadata carried in metadata_sections",
            MetadataDataCarousel => "Metadata carried in ISO/IEC 13818-6 Data Carousel",
            MetadataObjectCarousel => "Metadata carried in ISO/IEC 13818-6 Object Carousel",
            MetadataSynchronizedDownload => {
                "Metadata carried in ISO/IEC 13818-6 Synchronized Download Protocol"
            }
            Mpeg2Ipmp => "MPEG-2 IPMP stream",
            AvcVideo => "AVC video stream",
            Audio14496_3 => {
                "ISO/IEC 14496-3 Audio, without using any additional transport syntax"
            }
            Text14496_17 => "ISO/IEC 14496-17 Text",
            AuxiliaryVideo23002_3 => "Auxiliary video stream as defined in ISO/IEC 23002-3",
            SvcVideoSubBitstream => "SVC video sub-bitstream of an AVC video stream",
            MvcVideoSubBitstream => "MVC video sub-bitstream of an AVC video stream",
            ProfiledVideo => "Video stream conforming to one or more profiles",
            StereoscopicVideo => "Video stream for service-compatible stereoscopic 3D services",
            ProfiledVideo14496_10 => {
                "ISO/IEC 14496-10 video stream conforming to one or more profiles"
            }
            Reserved13818_1 => "ISO/IEC 13818-1 Reserved",
            Ipmp => "IPMP stream",
            UserPrivate => "User Private",
        }
    }
}

impl fmt::Display for StreamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
