#![no_main]

use libfuzzer_sys::fuzz_target;
use specpod::sp::SpReader;
use specpod::writer::JcampWriter;

fuzz_target!(|data: &[u8]| {
    // Errors are fine, panics are not
    let reader = SpReader::new();
    let _ = reader.inspect(data);

    if let Ok(outcome) = reader.read_bytes(data) {
        let _ = JcampWriter::new().render(&outcome.value);
    }
});
