use mts::{Pat, Program, StreamType};

#[test]
fn parse_pat_section() {
    let buffer = [
        0x00, 0xb0, 0x15, 0x00, 0x02, 0xc1, 0x00, 0x00, //
        0x00, 0x00, 0xe0, 0x10, 0x00, 0x01, 0xe0, 0x64, //
        0x00, 0x02, 0xe0, 0xc8, 0x79, 0xd1, 0x50, 0xd6,
    ];

    let pat = Pat::parse(&buffer).unwrap();

    assert_eq!(pat.table_id(), 0);
    assert!(pat.section_syntax_indicator());
    assert_eq!(pat.transport_stream_id(), 2);
    assert_eq!(pat.version_number(), 0);
    assert!(pat.current_next_indicator());
    assert_eq!(pat.section_number(), 0);
    assert_eq!(pat.last_section_number(), 0);

    let entries = pat.program_entries();
    assert_eq!(entries.len(), 3);

    let expected_program_numbers = [0u16, 1, 2];
    let expected_pids = [0x0010u16, 0x0064, 0x00c8];
    for (index, entry) in entries.iter().enumerate() {
        assert_eq!(entry.program_number(), expected_program_numbers[index]);
        assert_eq!(entry.pid(), expected_pids[index]);
        assert_eq!(entry.is_network_pid(), index == 0);
    }

    assert_eq!(pat.crc(), 2_043_760_854);
}

#[test]
fn parse_truncated_pat_fails() {
    let buffer = [0x00, 0xb0, 0x15, 0x00, 0x02];
    assert!(Pat::parse(&buffer).is_err());
}

#[test]
fn parse_program_map_section() {
    let buffer = [
        0x02, 0xb0, 0x16, // table id, section syntax + length
        0x00, 0x01, // program number
        0xc1, 0x00, 0x00, // version/current-next, section numbers
        0xe1, 0x00, // pcr pid 0x100
        0xf0, 0x00, // program info length 0
        0x1b, 0xe1, 0x00, 0xf0, 0x04, // AVC stream on pid 0x100
        0x05, 0x02, 0x48, 0x44, // registration descriptor
        0x12, 0x34, 0x56, 0x78, // crc
    ];

    let program = Program::parse(&buffer).unwrap();

    assert_eq!(program.table_id(), 2);
    assert!(program.section_syntax_indicator());
    assert_eq!(program.program_number(), 1);
    assert_eq!(program.version_number(), 0);
    assert!(program.current_next_indicator());
    assert_eq!(program.section_number(), 0);
    assert_eq!(program.last_section_number(), 0);
    assert_eq!(program.pcr_pid(), 0x100);
    assert!(program.program_info().is_empty());

    let streams = program.stream_entries();
    assert_eq!(streams.len(), 1);
    assert_eq!(streams[0].type_id(), 0x1b);
    assert_eq!(streams[0].stream_type(), StreamType::AvcVideo);
    assert_eq!(streams[0].pid(), 0x100);

    let descriptors = streams[0].es_info_entries();
    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].tag, 0x05);
    assert_eq!(descriptors[0].data, vec![0x48, 0x44]);

    assert_eq!(program.crc(), 0x1234_5678);
}
