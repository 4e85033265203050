//! LRC - Lyric File Library
//!
//! Parses LRC lyric files into header tags and timestamped lyric lines, and
//! serializes them back to text.
//!
//! ```
//! use lrc::Lrc;
//!
//! let lrc = Lrc::loads("[ar:Tester]\n[00:01.000][00:02.000]Hello\n").unwrap();
//! assert_eq!(lrc.tags().len(), 1);
//! assert_eq!(lrc.len(), 2);
//! assert_eq!(lrc.dumps(), "[ar:Tester]\n[00:01.000]Hello\n[00:02.000]Hello\n");
//! ```

pub mod error;
pub mod file;
pub mod line_parser;
pub mod parser;
pub mod transforms;
pub mod types;

#[cfg(test)]
mod util;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use error::LrcError;
pub use error::Result;
pub use file::Lrc;
pub use parser::parse_lrc;
pub use types::lyric_line::LyricLine;
pub use types::tag::AnyTag;
pub use types::tag::LrcTag;
pub use types::tag::Tag;
pub use types::tag::TimeTag;
