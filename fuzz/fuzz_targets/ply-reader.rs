#![no_main]

use libfuzzer_sys::fuzz_target;
use ply2bytes::io::ply;

fuzz_target!(|data: &[u8]| {
    // We just pass the data to the reader and ignore the result. We are
    // only interested in panics or other even worse crashes; it's fine if
    // the reader says "this is not a valid PLY file".
    let mut data = data;
    let _ = ply::read(&mut data);
});
