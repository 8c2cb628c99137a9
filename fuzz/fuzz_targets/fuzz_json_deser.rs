#![no_main]

use audiodesc_spec::{ChannelLayout, StreamDescription, TimeStamp};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(asbd) = serde_json::from_str::<StreamDescription>(s) {
            let _ = asbd.description();
        }
        if let Ok(layout) = serde_json::from_str::<ChannelLayout>(s) {
            let _ = layout.description();
        }
        let _ = serde_json::from_str::<TimeStamp>(s);
    }
});
