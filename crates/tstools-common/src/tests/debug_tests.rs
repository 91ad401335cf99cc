use crate::debug;

#[test]
#[should_panic(expected = "Debug Failure. False expression: must hold")]
fn assert_panics_with_message() {
    debug::assert(false, || "must hold".to_string());
}

#[test]
fn assert_skips_the_message_when_it_holds() {
    debug::assert(true, || unreachable!("message built for a passing check"));
}

#[test]
#[should_panic(expected = "Debug Failure. unreachable branch")]
fn fail_prefixes_the_message() {
    debug::fail("unreachable branch");
}
