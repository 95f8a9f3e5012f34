#![no_main]
use jsonette::parse;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok((value, rest)) = parse(text) else {
        return;
    };
    assert!(text.ends_with(rest));
    let rendered = value.render();
    let reparsed = jsonette::from_str(&rendered).expect("Rendered value should parse");
    assert_eq!(reparsed, value);
    assert_eq!(reparsed.render(), rendered);
});
