use crate::types::tag::TimeTag;
use std::cmp::Ordering;
use std::fmt;

/// One timestamp paired with the lyric shown at that time.
#[derive(Debug, Clone, PartialEq)]
pub struct LyricLine {
    pub tag: TimeTag,
    pub lyric: String,
}

impl LyricLine {
    pub fn new(tag: TimeTag, lyric: impl Into<String>) -> Self {
        Self {
            tag,
            lyric: lyric.into(),
        }
    }

    pub fn tag(&self) -> &TimeTag {
        &self.tag
    }

    pub fn lyric(&self) -> &str {
        &self.lyric
    }
}

/// Compares timestamps only; the lyric text is ignored.
///
/// This is not consistent with `PartialEq`: two lines at the same time with
/// different text compare as `Some(Equal)` yet are `!=`. Do not rely on
/// ordering to group equal lines (e.g. sort followed by `dedup`).
impl PartialOrd for LyricLine {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.tag.cmp(&other.tag))
    }
}

impl fmt::Display for LyricLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tag, self.lyric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_lyric_whitespace() {
        let line = LyricLine::new(TimeTag::new(0, 1.5), " Hello ");
        assert_eq!(line.to_string(), "[00:01.500] Hello ");
    }

    #[test]
    fn test_equality() {
        let a = LyricLine::new(TimeTag::new(0, 1.0), "Hi");
        assert_eq!(a, LyricLine::new(TimeTag::new(0, 1.0004), "Hi"));
        assert_ne!(a, LyricLine::new(TimeTag::new(0, 1.0), "Ho"));
        assert_ne!(a, LyricLine::new(TimeTag::new(0, 2.0), "Hi"));
    }

    #[test]
    fn test_ordering_ignores_lyric() {
        let a = LyricLine::new(TimeTag::new(0, 1.0), "zzz");
        let b = LyricLine::new(TimeTag::new(0, 2.0), "aaa");
        assert!(a < b);

        let c = LyricLine::new(TimeTag::new(0, 1.0), "aaa");
        assert_eq!(a.partial_cmp(&c), Some(Ordering::Equal));
        assert_ne!(a, c);
    }
}
