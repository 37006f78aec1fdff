//! Command parsing fuzzer.
//!
//! Feeds both raw strings and command-shaped strings through
//! `CommandText::parse` and checks every invariant of the outcome. Parsed
//! commands are also pushed through a JSON round-trip, which re-validates them.

use command_text::CommandText;
use command_text::testing::{FuzzCommand, test_parse_invariants};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|input: (FuzzCommand, String)| {
            let (FuzzCommand(shaped), raw) = input;
            for text in [shaped.as_str(), raw.as_str()] {
                test_parse_invariants(text);
                if let Ok(command) = CommandText::parse(text) {
                    let json = serde_json::to_string(&command).unwrap();
                    let back: CommandText = serde_json::from_str(&json).unwrap();
                    assert_eq!(back, command);
                }
            }
        });
    }
}
