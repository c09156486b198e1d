//! Small field-assembly helpers shared by the packet and section parsers.

/// Assemble a 33-bit timestamp from the three split fields used by the
/// PTS/DTS and seamless-splice encodings.
pub fn read_timestamp(ts_32_30: u8, ts_29_15: u16, ts_14_0: u16) -> u64 {
    (u64::from(ts_32_30) << 30) | (u64::from(ts_29_15) << 15) | u64::from(ts_14_0)
}

/// Number of packets lost between two continuity counter values, taking
/// the mod-16 wrap into account.
pub fn continuity_loss(expected: u8, actual: u8) -> u8 {
    debug_assert!(expected < 16);
    debug_assert!(actual < 16);
    (actual + 16 - expected) % 16
}
