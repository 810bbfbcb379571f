//! Property-based tests for name extraction.

use enum_names::extract_name;
use enum_names::probe::{PROBE_CLOSE, PROBE_OPEN};
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,24}"
}

proptest! {
    /// Property: the identifier after the last `::` is recovered regardless of qualification depth.
    #[test]
    fn extracts_member_from_any_path(
        segments in prop::collection::vec(identifier(), 0..6),
        member in identifier(),
    ) {
        let mut path = segments.join("::");
        if !path.is_empty() {
            path.push_str("::");
        }
        let signature = format!("{PROBE_OPEN}{path}Type::{member}{PROBE_CLOSE}");
        prop_assert_eq!(extract_name(&signature), member.as_str());
    }

    /// Property: trailing text after the closing `>` never leaks into the name.
    #[test]
    fn ignores_trailing_text(member in identifier(), tail in "[ a-z0-9()]{0,16}") {
        let signature = format!("{PROBE_OPEN}demo::Type::{member}>{tail}");
        prop_assert_eq!(extract_name(&signature), member.as_str());
    }
}
