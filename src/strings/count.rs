/// Counts non-overlapping occurrences of `pattern` in `s`.
///
/// Scanning goes left to right and resumes right after each match, so
/// `count("aaaa", "aa")` is 2, not 3.
///
/// An empty pattern matches at every insertion point: before each character
/// and once at the end, giving `s.chars().count() + 1`.
pub fn count(s: &str, pattern: &str) -> usize {
    if pattern.is_empty() {
        return s.chars().count() + 1;
    }
    s.matches(pattern).count()
}
