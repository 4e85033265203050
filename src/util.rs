use crate::Lrc;
use crate::types::lyric_line::LyricLine;

/// Parses `input` and `expected`, runs `transform` over the input's lyric
/// lines and compares the result with the expected document line by line.
/// Header tags are passed through untouched and must match as well.
pub fn assert_eq_lyrics(
    input: &str,
    transform: impl Fn(&[LyricLine]) -> Vec<LyricLine>,
    expected: &str,
) {
    let input_parsed = Lrc::loads(input).expect("Failed to parse input");
    let expected_parsed = Lrc::loads(expected).expect("Failed to parse expected");
    let transformed = transform(input_parsed.lyrics());

    assert_eq!(input_parsed.tags(), expected_parsed.tags(), "header tags differ");
    assert_eq!(
        transformed.len(),
        expected_parsed.len(),
        "length mismatch {} != {} , output={:?}",
        transformed.len(),
        expected_parsed.len(),
        Lrc::from_lyrics(transformed.clone())
            .to_string()
            .split('\n')
            .collect::<Vec<_>>(),
    );
    for (line, expected) in transformed.iter().zip(expected_parsed.iter()) {
        assert_eq!(line, expected, "{} != {}", line, expected);
    }
}
