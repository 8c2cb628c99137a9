#![no_main]

use audiodesc_spec::{
    ChannelDescription, ChannelLayout, Record, SmpteTime, StreamDescription, TimeStamp, ValueRange,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(asbd) = StreamDescription::read_from(data) {
        let _ = asbd.description();
        let _ = asbd.common_format();
        let _ = asbd.to_interleaved();
        let _ = asbd.to_non_interleaved();
        let _ = asbd.byte_size(u64::MAX);
        assert_eq!(asbd.to_bytes(), data[..StreamDescription::SIZE]);
    }
    if let Ok(ts) = TimeStamp::read_from(data) {
        let _ = ts.description();
        let _ = ts.less_than(&ts);
    }
    let _ = SmpteTime::read_from(data);
    if let Ok(range) = ValueRange::read_from(data) {
        let _ = range.to_string();
    }
    if let Ok(channel) = ChannelDescription::read_from(data) {
        let _ = channel.description();
    }
    if let Ok(layout) = ChannelLayout::read_from(data) {
        let _ = layout.description();
        let _ = layout.channel_count();
    }
});
