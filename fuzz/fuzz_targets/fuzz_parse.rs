#![no_main]

use libfuzzer_sys::fuzz_target;
use monpoke::parse;

fuzz_target!(|data: &str| {
    // Parsing never panics, and a parsed command re-renders to a line that
    // parses back to the same command.
    if let Ok(command) = parse(data) {
        let rendered = command.to_string();
        match parse(&rendered) {
            Ok(again) => assert_eq!(again, command, "re-parse of {rendered:?} changed"),
            Err(e) => panic!("rendered command {rendered:?} failed to parse: {e}"),
        }
    }
});
