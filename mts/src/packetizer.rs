use crate::{PACKET_SIZE, SYNC_BYTE};

/// Re-frames arbitrary-size byte chunks into 188-byte transport stream
/// packets.
///
/// The packetizer scans for the 0x47 sync byte, delivers every aligned
/// complete packet through the callback, and carries an incomplete tail
/// across reads. If the bytes completing a carried tail do not line up
/// with a sync byte the tail is assumed corrupt, dropped, and the
/// packetizer re-synchronizes on the incoming data.
pub struct Packetizer<F: FnMut(&[u8])> {
    incomplete: Vec<u8>,
    on_data: F,
}

impl<F: FnMut(&[u8])> Packetizer<F> {
    pub fn new(on_data: F) -> Self {
        Self {
            incomplete: Vec::new(),
            on_data,
        }
    }

    /// Drop any carried incomplete packet.
    pub fn reset(&mut self) {
        self.incomplete.clear();
    }

    /// Number of bytes buffered for the incomplete packet, 0..188.
    pub fn buffered(&self) -> usize {
        self.incomplete.len()
    }

    pub fn read(&mut self, data: &[u8]) {
        let data = if self.incomplete.is_empty() {
            data
        } else {
            self.complete_tail(data)
        };

        let data = sync(data);
        if data.is_empty() {
            return;
        }

        let complete = data.len() / PACKET_SIZE;
        for packet in data.chunks_exact(PACKET_SIZE) {
            (self.on_data)(packet);
        }

        self.incomplete.extend_from_slice(&data[complete * PACKET_SIZE..]);
    }

    /// Try to complete the carried tail with the incoming data.
    ///
    /// Returns the part of `data` still to be processed; the result is
    /// either empty or in sync.
    fn complete_tail<'d>(&mut self, data: &'d [u8]) -> &'d [u8] {
        let missing = PACKET_SIZE - self.incomplete.len();

        if data.len() > missing {
            // after consuming the missing bytes a sync byte must follow,
            // otherwise the tail and the incoming data cannot be merged
            let rest = &data[missing..];
            if in_sync(rest) {
                self.incomplete.extend_from_slice(&data[..missing]);
                let packet = std::mem::take(&mut self.incomplete);
                (self.on_data)(&packet);
                rest
            } else {
                self.incomplete.clear();
                sync(data)
            }
        } else if data.len() == missing {
            self.incomplete.extend_from_slice(data);
            let packet = std::mem::take(&mut self.incomplete);
            (self.on_data)(&packet);
            &[]
        } else {
            self.incomplete.extend_from_slice(data);
            &[]
        }
    }
}

/// Whether every complete packet in `data` starts with a sync byte.
fn in_sync(data: &[u8]) -> bool {
    if data.is_empty() {
        return false;
    }
    if data.len() < PACKET_SIZE {
        return data[0] == SYNC_BYTE;
    }
    (0..data.len() / PACKET_SIZE).all(|index| data[index * PACKET_SIZE] == SYNC_BYTE)
}

/// Advance to the first offset from which `data` is in sync.
///
/// Returns an empty slice when no such offset exists.
fn sync(data: &[u8]) -> &[u8] {
    if in_sync(data) {
        return data;
    }
    if data.len() < PACKET_SIZE {
        return &[];
    }

    let max_offset = data.len() - PACKET_SIZE;
    for offset in 0..=max_offset {
        let candidate = &data[offset..];
        if in_sync(candidate) {
            return candidate;
        }
    }

    &[]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packet(fill: u8) -> Vec<u8> {
        let mut packet = vec![fill; PACKET_SIZE];
        packet[0] = SYNC_BYTE;
        packet
    }

    #[test]
    fn aligned_packets_are_delivered() {
        let mut delivered = Vec::new();
        let mut packetizer = Packetizer::new(|data: &[u8]| delivered.push(data.to_vec()));

        let mut stream = Vec::new();
        stream.extend_from_slice(&packet(0x01));
        stream.extend_from_slice(&packet(0x02));
        stream.extend_from_slice(&packet(0x03));
        packetizer.read(&stream);

        assert_eq!(packetizer.buffered(), 0);
        drop(packetizer);
        assert_eq!(delivered, vec![packet(0x01), packet(0x02), packet(0x03)]);
    }

    #[test]
    fn split_packet_is_reassembled() {
        let mut delivered = Vec::new();
        let mut packetizer = Packetizer::new(|data: &[u8]| delivered.push(data.to_vec()));

        let mut stream = Vec::new();
        stream.extend_from_slice(&packet(0x01));
        stream.extend_from_slice(&packet(0x02));

        packetizer.read(&stream[..100]);
        assert_eq!(packetizer.buffered(), 100);
        packetizer.read(&stream[100..250]);
        assert_eq!(packetizer.buffered(), 250 - PACKET_SIZE);
        packetizer.read(&stream[250..]);

        assert_eq!(packetizer.buffered(), 0);
        drop(packetizer);
        assert_eq!(delivered, vec![packet(0x01), packet(0x02)]);
    }

    #[test]
    fn garbage_prefix_is_skipped() {
        let mut delivered = Vec::new();
        let mut packetizer = Packetizer::new(|data: &[u8]| delivered.push(data.to_vec()));

        let mut stream = vec![0x00, 0x11, 0x22, 0x33, 0x44];
        stream.extend_from_slice(&packet(0x05));
        stream.extend_from_slice(&packet(0x06));
        packetizer.read(&stream);

        drop(packetizer);
        assert_eq!(delivered, vec![packet(0x05), packet(0x06)]);
    }

    #[test]
    fn corrupt_tail_is_dropped_on_resync() {
        let mut delivered = Vec::new();
        let mut packetizer = Packetizer::new(|data: &[u8]| delivered.push(data.to_vec()));

        // half a packet, then a stream that restarts at a packet boundary
        packetizer.read(&packet(0x01)[..90]);
        assert_eq!(packetizer.buffered(), 90);

        let mut stream = Vec::new();
        stream.extend_from_slice(&packet(0x02));
        stream.extend_from_slice(&packet(0x03));
        packetizer.read(&stream);

        assert_eq!(packetizer.buffered(), 0);
        drop(packetizer);
        // the carried tail cannot be completed and is discarded
        assert_eq!(delivered, vec![packet(0x02), packet(0x03)]);
    }

    #[test]
    fn short_reads_accumulate() {
        let mut count = 0;
        let mut packetizer = Packetizer::new(|data: &[u8]| {
            assert_eq!(data[0], SYNC_BYTE);
            assert_eq!(data.len(), PACKET_SIZE);
            count += 1;
        });

        let stream = packet(0xaa);
        for chunk in stream.chunks(10) {
            packetizer.read(chunk);
        }

        assert_eq!(packetizer.buffered(), 0);
        drop(packetizer);
        assert_eq!(count, 1);
    }

    #[test]
    fn random_chunk_sizes_deliver_every_packet() {
        use rand::Rng;

        let mut stream = Vec::new();
        for index in 0..50u8 {
            stream.extend_from_slice(&packet(index));
        }

        let mut delivered = Vec::new();
        let mut packetizer = Packetizer::new(|data: &[u8]| delivered.push(data.to_vec()));

        let mut rng = rand::thread_rng();
        let mut offset = 0;
        while offset < stream.len() {
            let size = rng.gen_range(1..=2 * PACKET_SIZE).min(stream.len() - offset);
            packetizer.read(&stream[offset..offset + size]);
            offset += size;
        }

        assert_eq!(packetizer.buffered(), 0);
        drop(packetizer);
        assert_eq!(delivered.len(), 50);
        for (index, data) in delivered.iter().enumerate() {
            assert_eq!(data, &packet(index as u8));
        }
    }

    #[test]
    fn reset_drops_the_tail() {
        let mut packetizer = Packetizer::new(|_: &[u8]| panic!("no packet expected"));
        packetizer.read(&packet(0x01)[..50]);
        assert_eq!(packetizer.buffered(), 50);
        packetizer.reset();
        assert_eq!(packetizer.buffered(), 0);
    }
}
