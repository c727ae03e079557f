use std::io::Write;

use liscopy::ListingWriter;

#[test]
fn header_names_the_source() {
    let mut writer = ListingWriter::new(Vec::new());
    writer.write_header("a.txt").unwrap();
    assert_eq!(
        writer.into_inner(),
        b"**********a.txt.lis**********\n".to_vec()
    );
}

#[test]
fn first_marker_precedes_first_byte() {
    let mut writer = ListingWriter::new(Vec::new());
    writer.write_all(b"x").unwrap();
    assert_eq!(writer.into_inner(), b"(1) x".to_vec());
}

#[test]
fn marker_after_every_newline_including_the_last() {
    let mut writer = ListingWriter::new(Vec::new());
    writer.write_all(b"a\nb\nc\n").unwrap();
    assert_eq!(writer.into_inner(), b"(1) a\n(2) b\n(3) c\n(4) ".to_vec());
}

#[test]
fn partial_last_line_gets_no_trailing_marker() {
    let mut writer = ListingWriter::new(Vec::new());
    writer.write_all(b"a\nb").unwrap();
    assert_eq!(writer.into_inner(), b"(1) a\n(2) b".to_vec());
}

#[test]
fn newline_split_across_writes() {
    let mut writer = ListingWriter::new(Vec::new());
    writer.write_all(b"a\n").unwrap();
    writer.write_all(b"b").unwrap();
    assert_eq!(writer.into_inner(), b"(1) a\n(2) b".to_vec());
}

#[test]
fn empty_writes_emit_nothing() {
    let mut writer = ListingWriter::new(Vec::new());
    writer.write_all(b"").unwrap();
    assert_eq!(writer.lines_numbered(), 0);
    assert!(writer.into_inner().is_empty());
}

#[test]
fn blank_lines_are_numbered_too() {
    let mut writer = ListingWriter::new(Vec::new());
    writer.write_all(b"\n\n").unwrap();
    assert_eq!(writer.into_inner(), b"(1) \n(2) \n(3) ".to_vec());
}

#[test]
fn counters_track_lines_and_payload() {
    let mut writer = ListingWriter::new(Vec::new());
    writer.write_header("in.txt").unwrap();
    writer.write_all(b"a\nb\nc\n").unwrap();
    assert_eq!(writer.lines_numbered(), 4);
    assert_eq!(writer.current_line(), 4);
    assert_eq!(writer.payload_bytes(), 6);
}

#[test]
fn get_ref_exposes_the_listing_mid_stream() {
    let mut writer = ListingWriter::new(Vec::new());
    writer.write_all(b"a\n").unwrap();
    assert_eq!(writer.get_ref().as_slice(), b"(1) a\n(2) ");
    writer.write_all(b"b").unwrap();
    assert_eq!(writer.into_inner(), b"(1) a\n(2) b".to_vec());
}

#[test]
fn markers_grow_past_single_digits() {
    let mut writer = ListingWriter::new(Vec::new());
    writer.write_all(b"\n".repeat(10).as_slice()).unwrap();
    let out = writer.into_inner();
    assert!(out.ends_with(b"(11) "));
}
