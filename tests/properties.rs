use std::io::Write;

use liscopy::{ListingWriter, render_listing};
use proptest::{
    arbitrary::any, collection::vec, prop_assert, prop_assert_eq, proptest, test_runner::Config,
};

/// Undo a listing: drop the header line, then one `(N) ` marker at each line
/// start. Markers are deterministic, so this never has to guess whether a
/// `(N) ` in the payload is a marker.
fn strip_listing(listing: &[u8]) -> Vec<u8> {
    let header_end = listing
        .iter()
        .position(|&b| b == b'\n')
        .expect("listing begins with a header line");
    let mut rest = &listing[header_end + 1..];
    let mut original = Vec::new();
    let mut line: u64 = 1;
    while !rest.is_empty() {
        let marker = format!("({line}) ");
        assert!(
            rest.starts_with(marker.as_bytes()),
            "expected marker {marker:?} at a line start"
        );
        rest = &rest[marker.len()..];
        match rest.iter().position(|&b| b == b'\n') {
            Some(i) => {
                original.extend_from_slice(&rest[..=i]);
                rest = &rest[i + 1..];
                line += 1;
            }
            None => {
                original.extend_from_slice(rest);
                rest = &[];
            }
        }
    }
    original
}

proptest! {
    #![proptest_config(Config::with_cases(2000))]

    #[test]
    fn stripping_header_and_markers_reconstructs_the_input(data in vec(any::<u8>(), 0..1024)) {
        let listing = render_listing(&data, "in.txt").expect("writing to a Vec cannot fail");
        prop_assert_eq!(strip_listing(&listing), data);
    }

    #[test]
    fn marker_count_is_newlines_plus_one_for_nonempty(data in vec(any::<u8>(), 0..1024)) {
        let mut writer = ListingWriter::new(Vec::new());
        writer.write_all(&data).expect("writing to a Vec cannot fail");
        let newlines = data.iter().filter(|&&b| b == b'\n').count() as u64;
        let expected = if data.is_empty() { 0 } else { newlines + 1 };
        prop_assert_eq!(writer.lines_numbered(), expected);
    }

    #[test]
    fn split_writes_match_one_write(data in vec(any::<u8>(), 0..512), split_byte in any::<u8>()) {
        let split = (split_byte as usize).min(data.len());
        let (a, b) = data.split_at(split);

        let mut split_writer = ListingWriter::new(Vec::new());
        split_writer.write_all(a).unwrap();
        split_writer.write_all(b).unwrap();

        let mut whole_writer = ListingWriter::new(Vec::new());
        whole_writer.write_all(&data).unwrap();

        prop_assert_eq!(split_writer.into_inner(), whole_writer.into_inner());
    }

    #[test]
    fn listing_starts_with_header_then_first_marker(data in vec(any::<u8>(), 1..256)) {
        let listing = render_listing(&data, "src.txt").unwrap();
        prop_assert!(listing.starts_with(b"**********src.txt.lis**********\n(1) "));
    }
}
