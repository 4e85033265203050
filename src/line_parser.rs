use crate::error::{LrcError, Result};
use crate::types::tag::AnyTag;
use once_cell::sync::Lazy;
use regex::Regex;

/// A run of tags at the start of a line followed by arbitrary text.
static LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^((?:\[.+?:.+?\])+)(.*)").expect("invalid LINE_REGEX"));

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.+?:.+?\]").expect("invalid TAG_REGEX"));

static TAG_INSIDE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(.+?):(.+?)\]").expect("invalid TAG_INSIDE_REGEX"));

/// One physical line that starts with at least one tag.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedLine {
    /// 1-based line number in the source text
    pub line: usize,
    pub tags: Vec<AnyTag>,
    /// Everything after the last tag, untrimmed
    pub lyric: String,
}

impl TaggedLine {
    pub fn first_tag(&self) -> Option<&AnyTag> {
        self.tags.first()
    }
}

/// Splits LRC text into tagged lines. Lines that do not start with a tag are
/// skipped, but at least one line has to match.
pub fn tokenize(content: &str) -> Result<Vec<TaggedLine>> {
    let mut lines = Vec::new();
    let mut line_num = 1;
    let mut scanned = 0;

    for caps in LINE_REGEX.captures_iter(content) {
        let Some(group) = caps.get(1) else {
            continue;
        };
        let lyric = caps.get(2).map_or("", |m| m.as_str());

        line_num += content[scanned..group.start()].matches('\n').count();
        scanned = group.start();

        let tags = split_tags(group.as_str(), line_num)?;
        log::trace!("line {}: {} tag(s), lyric {:?}", line_num, tags.len(), lyric);

        lines.push(TaggedLine {
            line: line_num,
            tags,
            lyric: lyric.to_string(),
        });
    }

    if lines.is_empty() {
        return Err(LrcError::NoLines);
    }

    Ok(lines)
}

/// Splits a run like `[00:01.00][00:02.00]` into its tags, in bracket order.
pub fn split_tags(group: &str, line: usize) -> Result<Vec<AnyTag>> {
    let tokens: Vec<&str> = TAG_REGEX.find_iter(group).map(|m| m.as_str()).collect();
    if tokens.is_empty() {
        return Err(LrcError::EmptyTagGroup {
            line,
            group: group.to_string(),
        });
    }

    // every token has to split before any of them is classified
    let fields = tokens
        .into_iter()
        .map(|token| parse_tag_token(token, line))
        .collect::<Result<Vec<_>>>()?;

    fields
        .into_iter()
        .map(|(name, val)| {
            AnyTag::classify(name, val).map_err(|_| LrcError::InvalidTimestamp {
                line,
                name: name.to_string(),
                value: val.to_string(),
            })
        })
        .collect()
}

/// Splits `[name:val]` on the first colon.
pub fn parse_tag_token(token: &str, line: usize) -> Result<(&str, &str)> {
    let caps = TAG_INSIDE_REGEX
        .captures(token)
        .ok_or_else(|| LrcError::MalformedTag {
            line,
            token: token.to_string(),
        })?;

    match (caps.get(1), caps.get(2)) {
        (Some(name), Some(val)) => Ok((name.as_str(), val.as_str())),
        _ => Err(LrcError::MalformedTag {
            line,
            token: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tag::{Tag, TimeTag};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_lines() {
        let lines = tokenize("[ti:Song]\n[00:01.500][00:02.250] Hello\nplain text\n[01:00.000]\n")
            .unwrap();

        assert_eq!(
            lines,
            vec![
                TaggedLine {
                    line: 1,
                    tags: vec![AnyTag::Header(Tag::new("ti", "Song"))],
                    lyric: String::new(),
                },
                TaggedLine {
                    line: 2,
                    tags: vec![
                        AnyTag::Time(TimeTag::new(0, 1.5)),
                        AnyTag::Time(TimeTag::new(0, 2.25)),
                    ],
                    lyric: " Hello".to_string(),
                },
                TaggedLine {
                    line: 4,
                    tags: vec![AnyTag::Time(TimeTag::new(1, 0.0))],
                    lyric: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_tags_must_start_the_line() {
        let lines = tokenize("text [ar:Nobody]\n [al:Indented]\n[ar:Somebody]\n").unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].line, 3);
        assert_eq!(lines[0].first_tag().unwrap().to_string(), "[ar:Somebody]");
    }

    #[test]
    fn test_split_on_first_colon() {
        let lines = tokenize("[ti:Part 1: Intro]\n").unwrap();
        assert_eq!(
            lines[0].tags,
            vec![AnyTag::Header(Tag::new("ti", "Part 1: Intro"))]
        );
    }

    #[test]
    fn test_mixed_tags_classified_per_tag() {
        let lines = tokenize("[00:05.000][ar:Someone]text\n").unwrap();
        assert!(lines[0].tags[0].is_time());
        assert!(!lines[0].tags[1].is_time());
    }

    #[test]
    fn test_no_lines() {
        assert_eq!(tokenize(""), Err(LrcError::NoLines));
        assert_eq!(tokenize("no tags here\n"), Err(LrcError::NoLines));
        assert_eq!(tokenize("[bad]text\n"), Err(LrcError::NoLines));
    }

    #[test]
    fn test_invalid_timestamp() {
        assert_eq!(
            tokenize("[ar:x]\n[00:abc]Hi\n"),
            Err(LrcError::InvalidTimestamp {
                line: 2,
                name: "00".to_string(),
                value: "abc".to_string(),
            })
        );
    }

    #[test]
    fn test_split_tags_errors() {
        assert_eq!(
            split_tags("nothing", 7),
            Err(LrcError::EmptyTagGroup {
                line: 7,
                group: "nothing".to_string(),
            })
        );
        assert_eq!(
            parse_tag_token("[bad]", 3),
            Err(LrcError::MalformedTag {
                line: 3,
                token: "[bad]".to_string(),
            })
        );
        assert_eq!(parse_tag_token("[a:b:c]", 1), Ok(("a", "b:c")));
    }
}
