use crate::Character;

// binary search for the first suffix that is not smaller than the pattern,
// the pattern occurs iff that suffix starts with it
pub fn index_of<C: Character>(
    text: &[C],
    suffix_array: &[usize],
    pattern: &[C],
) -> Option<usize> {
    if pattern.is_empty() {
        return None;
    }

    let lower_bound = suffix_array.partition_point(|&position| &text[position..] < pattern);

    suffix_array
        .get(lower_bound)
        .copied()
        .filter(|&position| text[position..].starts_with(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    // sorted suffixes: akawow, awow, kawow, ow, w, wow, yakawow
    static YAKAWOW: &[u8] = b"yakawow";
    static YAKAWOW_SUFFIX_ARRAY: &[usize] = &[1, 3, 2, 5, 6, 4, 0];

    #[test]
    fn finds_first_of_multiple_occurrences_in_suffix_order() {
        assert_eq!(index_of(YAKAWOW, YAKAWOW_SUFFIX_ARRAY, b"a"), Some(1));
        assert_eq!(index_of(YAKAWOW, YAKAWOW_SUFFIX_ARRAY, b"aw"), Some(3));
        assert_eq!(index_of(YAKAWOW, YAKAWOW_SUFFIX_ARRAY, b"w"), Some(6));
    }

    #[test]
    fn finds_whole_text() {
        assert_eq!(index_of(YAKAWOW, YAKAWOW_SUFFIX_ARRAY, b"yakawow"), Some(0));
    }

    #[test]
    fn absent_patterns() {
        assert_eq!(index_of(YAKAWOW, YAKAWOW_SUFFIX_ARRAY, b"z"), None);
        assert_eq!(index_of(YAKAWOW, YAKAWOW_SUFFIX_ARRAY, b""), None);
        assert_eq!(index_of(YAKAWOW, YAKAWOW_SUFFIX_ARRAY, b"yakawowy"), None);
        assert_eq!(index_of(YAKAWOW, YAKAWOW_SUFFIX_ARRAY, b"ak_"), None);
        assert_eq!(index_of(b"", &[], b"a"), None);
    }
}
