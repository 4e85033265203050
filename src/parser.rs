use crate::error::Result;
use crate::file::Lrc;
use crate::line_parser::tokenize;
use crate::types::lyric_line::LyricLine;
use crate::types::tag::AnyTag;

pub struct LrcParser {}

pub fn parse_lrc(content: &str) -> Result<Lrc> {
    let mut parser = LrcParser::new();
    parser.parse(content)
}

impl Default for LrcParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LrcParser {
    pub fn new() -> Self {
        Self {}
    }

    /// Sorts tokenized lines into header tags and lyric lines.
    ///
    /// The first tag decides what a line is. A timestamp line yields one
    /// lyric line per tag, all sharing the text. A header line keeps only its
    /// first tag.
    pub fn parse(&mut self, content: &str) -> Result<Lrc> {
        let mut lrc = Lrc::default();

        for line in tokenize(content)? {
            match line.first_tag() {
                Some(AnyTag::Time(_)) => {
                    for tag in &line.tags {
                        if let AnyTag::Time(time) = tag {
                            lrc.lyrics_mut().push(LyricLine::new(*time, line.lyric.as_str()));
                        } else {
                            log::debug!(
                                "line {}: header tag {} among timestamps dropped",
                                line.line,
                                tag
                            );
                        }
                    }
                }
                Some(AnyTag::Header(tag)) => {
                    if line.tags.len() > 1 {
                        log::debug!(
                            "line {}: keeping {} and dropping {} other tag(s)",
                            line.line,
                            tag,
                            line.tags.len() - 1
                        );
                    }
                    lrc.tags_mut().push(tag.clone());
                }
                None => {}
            }
        }

        log::debug!(
            "parsed {} header tag(s) and {} lyric line(s)",
            lrc.tags().len(),
            lrc.len()
        );

        Ok(lrc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LrcError;
    use crate::types::tag::{Tag, TimeTag};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_multi_timestamp_expansion() {
        let lrc = parse_lrc("[00:01.000][00:02.000]Hello\n").unwrap();
        assert!(lrc.tags().is_empty());
        assert_eq!(
            lrc.lyrics(),
            &[
                LyricLine::new(TimeTag::new(0, 1.0), "Hello"),
                LyricLine::new(TimeTag::new(0, 2.0), "Hello"),
            ]
        );
        assert_eq!(lrc[0].tag.to_string(), "[00:01.000]");
        assert_eq!(lrc[1].tag.to_string(), "[00:02.000]");
    }

    #[test]
    fn test_header_and_timestamp_classification() {
        let lrc = parse_lrc("[ar:Tester]\n[00:01.000]Hi\n").unwrap();
        assert_eq!(lrc.tags(), &[Tag::new("ar", "Tester")]);
        assert_eq!(
            lrc.lyrics(),
            &[LyricLine::new(TimeTag::new(0, 1.0), "Hi")]
        );
    }

    #[test]
    fn test_header_line_keeps_only_first_tag() {
        let lrc = parse_lrc("[ar:First][ti:Second]\n[00:01.000]Hi\n").unwrap();
        assert_eq!(lrc.tags(), &[Tag::new("ar", "First")]);
    }

    #[test]
    fn test_header_tag_after_timestamp_dropped() {
        let lrc = parse_lrc("[00:01.000][ar:Someone]Hi\n").unwrap();
        assert!(lrc.tags().is_empty());
        assert_eq!(lrc.len(), 1);
    }

    #[test]
    fn test_order_preserved() {
        let lrc = parse_lrc(
            "[ti:Title]\n[00:05.000]second\n[ar:Artist]\n[00:01.000]first\n[00:03.000][00:07.000]both\n",
        )
        .unwrap();

        assert_eq!(
            lrc.tags(),
            &[Tag::new("ti", "Title"), Tag::new("ar", "Artist")]
        );
        let lyrics: Vec<(String, &str)> = lrc
            .iter()
            .map(|line| (line.tag.to_string(), line.lyric()))
            .collect();
        assert_eq!(
            lyrics,
            vec![
                ("[00:05.000]".to_string(), "second"),
                ("[00:01.000]".to_string(), "first"),
                ("[00:03.000]".to_string(), "both"),
                ("[00:07.000]".to_string(), "both"),
            ]
        );
    }

    #[test]
    fn test_malformed_input_rejected() {
        assert_eq!(parse_lrc("no tags here\n").unwrap_err(), LrcError::NoLines);
        assert_eq!(parse_lrc("[bad]text\n").unwrap_err(), LrcError::NoLines);
        assert!(matches!(
            parse_lrc("[00:01.000]ok\n[01:xx]bad\n"),
            Err(LrcError::InvalidTimestamp { line: 2, .. })
        ));
    }
}
