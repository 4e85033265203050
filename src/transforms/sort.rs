use crate::types::lyric_line::LyricLine;

/// Stable sort by timestamp; lines sharing a timestamp keep their order.
pub fn transform(lyrics: &[LyricLine]) -> Vec<LyricLine> {
    let mut sorted = lyrics.to_vec();
    sorted.sort_by(|a, b| a.tag.cmp(&b.tag));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::assert_eq_lyrics;

    #[test]
    fn test_sort_by_time() {
        let input = r#"
[ti:Unsorted]
[00:03.000]three
[00:01.000][00:05.000]chorus
[00:02.000]two
[00:01.000]also one
"#;
        let expected = r#"
[ti:Unsorted]
[00:01.000]chorus
[00:01.000]also one
[00:02.000]two
[00:03.000]three
[00:05.000]chorus
"#;

        assert_eq_lyrics(input, transform, expected);
    }
}
