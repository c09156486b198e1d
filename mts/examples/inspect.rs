//! Print the programs and elementary streams found in a transport
//! stream file, plus a PES count per PID.

use std::collections::BTreeMap;
use std::{env, fs};

use mts::{Parser, PACKET_SIZE};

fn main() -> anyhow::Result<()> {
    let path = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: inspect <file.ts>"))?;
    let data = fs::read(&path)?;

    let mut packets = Vec::new();
    let mut packetizer = mts::Packetizer::new(|packet: &[u8]| {
        packets.extend_from_slice(packet);
    });
    packetizer.read(&data);
    drop(packetizer);

    let mut parser = Parser::new();
    let mut pes_counts: BTreeMap<u16, u64> = BTreeMap::new();

    for packet in packets.chunks_exact(PACKET_SIZE) {
        if let Err(err) = parser.read(packet) {
            eprintln!("skipping packet: {err}");
            continue;
        }
        if let Some(pid) = parser.pes_pid() {
            *pes_counts.entry(pid).or_default() += 1;
        }
    }

    for program in parser.programs() {
        println!("program {}", program.program_number());
        for stream in program.stream_entries() {
            println!(
                "  pid {:#06x}: {} ({} PES packets)",
                stream.pid(),
                stream.stream_type(),
                pes_counts.get(&stream.pid()).copied().unwrap_or(0)
            );
        }
    }
    println!("continuity errors: {}", parser.continuity_errors());

    Ok(())
}
