#![no_main]

use libfuzzer_sys::fuzz_target;
use testman::{Recorder, assert};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let (text, pattern) = s.split_at(s.char_indices().nth(s.chars().count() / 2).map_or(s.len(), |(i, _)| i));
        let t = Recorder::new();

        // Neither a failing check nor a malformed pattern may panic
        let found = assert::contains(&t, text, pattern);
        assert!(found == text.contains(pattern));
        let _ = assert::regex(&t, text, pattern);
        let _ = assert::equal(&t, text, pattern);
        let _ = assert::deep_equal(&t, text.as_bytes(), pattern.as_bytes());
    }
});
