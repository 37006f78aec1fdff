//! Command building fuzzer.
//!
//! Builds a command of an arbitrary kind from an arbitrary input and checks
//! that successful mutations parse back to themselves.

use command_text::OperationKind;
use command_text::testing::test_build_invariants;
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|input: (OperationKind, String)| {
            let (kind, text) = input;
            test_build_invariants(kind, &text);
        });
    }
}
