#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn run_wires_nothing_outside_the_browser() {
    run();
}
