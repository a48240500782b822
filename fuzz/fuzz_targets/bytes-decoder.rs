#![no_main]

use libfuzzer_sys::fuzz_target;
use ply2bytes::io::bytes::Reader;

fuzz_target!(|data: &[u8]| {
    // We just pass the data to the decoder and ignore the result. We are
    // only interested in panics or other even worse crashes; it's fine if
    // the decoder says "this is not a valid bytes file".
    let _ = Reader::new(data).read();
});
