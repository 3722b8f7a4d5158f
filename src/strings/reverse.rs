/// Returns `s` with its characters in reverse order.
///
/// Works on `char`s, so multi-byte UTF-8 sequences stay intact. Combining
/// sequences (e.g. a base letter followed by an accent) are reversed scalar by
/// scalar like any other characters.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}
