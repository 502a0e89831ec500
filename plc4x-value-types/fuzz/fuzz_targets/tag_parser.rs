#![no_main]
use libfuzzer_sys::fuzz_target;
use plc4x_value_types::tag::{decode_tag, parse_value_type, TagConfig, TagWidth};

fuzz_target!(|data: &[u8]| {
    let _ = parse_value_type(data);
    let _ = decode_tag(data, &TagConfig::default());
    let _ = decode_tag(data, &TagConfig { width: TagWidth::U16 });
});
