pub mod lyric_line;
pub mod tag;
