use crate::types::lyric_line::LyricLine;
use crate::types::tag::TimeTag;

/// Shifts every timestamp by `offset` seconds, in whole milliseconds. Lines
/// pushed before 0:00 by a negative offset are dropped.
pub fn transform(lyrics: &[LyricLine], offset: f64) -> Vec<LyricLine> {
    let offset_millis = (offset * 1000.0).round() as i64;
    if offset_millis == 0 {
        return lyrics.to_vec();
    }

    lyrics
        .iter()
        .filter_map(|line| {
            let shifted = line.tag.millis() + offset_millis;
            if shifted < 0 {
                return None;
            }
            let mut new_line = line.clone();
            new_line.tag = TimeTag::from_millis(shifted);
            Some(new_line)
        })
        .collect()
}
