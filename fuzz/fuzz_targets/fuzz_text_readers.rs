#![no_main]

use libfuzzer_sys::fuzz_target;
use specpod::ascii::{LegacyReader, PeAsciiReader, TextEncoding, TextFile};

fuzz_target!(|data: &[u8]| {
    let file = TextFile::from_bytes(data, TextEncoding::Latin1);
    let _ = PeAsciiReader::new().read_file(&file);
    let _ = LegacyReader::new().read_file(&file);
});
