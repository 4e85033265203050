pub mod offset;
pub mod sort;

use crate::types::lyric_line::LyricLine;

#[derive(Debug, Clone, Default)]
pub struct TransformDescriptor {
    pub sort_by_time: bool,
    pub offset_secs: f64,
}

pub fn apply_transforms(lyrics: &[LyricLine], transforms: &TransformDescriptor) -> Vec<LyricLine> {
    let mut current = lyrics.to_vec();

    // order is important here: shifted-out lines never reach the sort
    if transforms.offset_secs != 0.0 {
        current = offset::transform(&current, transforms.offset_secs);
    }

    if transforms.sort_by_time {
        current = sort::transform(&current);
    }

    current
}
