use crate::error::{LrcError, Result};
use crate::parser::parse_lrc;
use crate::types::lyric_line::LyricLine;
use crate::types::tag::{Tag, TimeTag};
use std::fmt;
use std::ops::{Bound, Index, IndexMut, Range, RangeBounds};
use std::slice::SliceIndex;
use std::str::FromStr;

/// An LRC document: header tags followed by timestamped lyric lines.
///
/// Indexing (`lrc[i]`, `lrc[1..3]`) addresses the lyric lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lrc {
    lyrics: Vec<LyricLine>,
    tags: Vec<Tag>,
}

impl Lrc {
    pub fn new(lyrics: Vec<LyricLine>, tags: Vec<Tag>) -> Self {
        Self { lyrics, tags }
    }

    pub fn from_lyrics(lyrics: Vec<LyricLine>) -> Self {
        Self::new(lyrics, Vec::new())
    }

    /// Parses LRC text. Fails as a whole; nothing is kept from a bad input.
    pub fn loads(content: &str) -> Result<Self> {
        parse_lrc(content)
    }

    /// Header tags first, then lyric lines, each terminated by a newline.
    pub fn dumps(&self) -> String {
        self.to_string()
    }

    pub fn lyrics(&self) -> &[LyricLine] {
        &self.lyrics
    }

    pub fn lyrics_mut(&mut self) -> &mut Vec<LyricLine> {
        &mut self.lyrics
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut Vec<Tag> {
        &mut self.tags
    }

    /// Value of the first header tag called `name`
    pub fn get_tag_value(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.name == name)
            .map(|tag| tag.val.as_str())
    }

    /// Latest timestamp among the lyric lines
    pub fn duration(&self) -> Option<TimeTag> {
        self.lyrics.iter().map(|line| line.tag).max()
    }

    pub fn len(&self) -> usize {
        self.lyrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lyrics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LyricLine> {
        self.lyrics.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, LyricLine> {
        self.lyrics.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&LyricLine> {
        self.lyrics.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut LyricLine> {
        self.lyrics.get_mut(index)
    }

    /// Copies out a range of lyric lines. Out-of-range bounds are clamped.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Vec<LyricLine> {
        let range = self.clamp_range(range);
        self.lyrics[range].to_vec()
    }

    /// Replaces a range of lyric lines with `lines`, which may be shorter or
    /// longer than the range. Returns the removed lines.
    pub fn splice<R, I>(&mut self, range: R, lines: I) -> Vec<LyricLine>
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = LyricLine>,
    {
        let range = self.clamp_range(range);
        self.lyrics.splice(range, lines).collect()
    }

    /// Removes one lyric line, shifting the rest down.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> LyricLine {
        self.lyrics.remove(index)
    }

    /// Removes a range of lyric lines. Out-of-range bounds are clamped.
    pub fn delete_range<R: RangeBounds<usize>>(&mut self, range: R) -> Vec<LyricLine> {
        let range = self.clamp_range(range);
        self.lyrics.drain(range).collect()
    }

    fn clamp_range<R: RangeBounds<usize>>(&self, range: R) -> Range<usize> {
        let len = self.lyrics.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        }
        .clamp(start, len);
        start..end
    }
}

impl<I: SliceIndex<[LyricLine]>> Index<I> for Lrc {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.lyrics[index]
    }
}

impl<I: SliceIndex<[LyricLine]>> IndexMut<I> for Lrc {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.lyrics[index]
    }
}

impl<'a> IntoIterator for &'a Lrc {
    type Item = &'a LyricLine;
    type IntoIter = std::slice::Iter<'a, LyricLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lyrics.iter()
    }
}

impl IntoIterator for Lrc {
    type Item = LyricLine;
    type IntoIter = std::vec::IntoIter<LyricLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lyrics.into_iter()
    }
}

impl fmt::Display for Lrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.tags {
            writeln!(f, "{}", tag)?;
        }
        for line in &self.lyrics {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl FromStr for Lrc {
    type Err = LrcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::loads(s)
    }
}
