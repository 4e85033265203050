use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::ParseFloatError;

/// Capabilities shared by header tags and timestamp tags.
///
/// `to_tuple` is deliberately asymmetric: a [`Tag`] projects to its textual
/// `(name, val)` pair while a [`TimeTag`] projects to `(minute, second)`.
pub trait LrcTag: fmt::Display + Eq + Hash {
    type Tuple;

    fn name(&self) -> Cow<'_, str>;
    fn val(&self) -> Cow<'_, str>;
    fn to_tuple(&self) -> Self::Tuple;
}

/// A `[name:val]` annotation. Neither field is validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    pub(crate) name: String,
    pub(crate) val: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, val: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            val: val.into(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_val(&mut self, val: impl Into<String>) {
        self.val = val.into();
    }
}

impl LrcTag for Tag {
    type Tuple = (String, String);

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn val(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.val)
    }

    fn to_tuple(&self) -> Self::Tuple {
        (self.name.clone(), self.val.clone())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.name, self.val)
    }
}

/// A timestamp tag. Only `minute` and `second` are stored; the textual
/// `name` and `val` are derived on every access.
///
/// Equality, ordering and hashing all go through [`TimeTag::millis`], so two
/// tags whose seconds truncate to the same millisecond are equal.
#[derive(Debug, Clone, Copy)]
pub struct TimeTag {
    minute: i64,
    second: f64,
}

impl TimeTag {
    /// No range checks: negative or >= 60 seconds are kept as given.
    pub fn new(minute: i64, second: f64) -> Self {
        Self { minute, second }
    }

    pub fn minute(&self) -> i64 {
        self.minute
    }

    pub fn second(&self) -> f64 {
        self.second
    }

    pub fn set_minute(&mut self, minute: i64) {
        self.minute = minute;
    }

    pub fn set_second(&mut self, second: f64) {
        self.second = second;
    }

    /// Milliseconds since 0:00, truncated toward zero.
    pub fn millis(&self) -> i64 {
        ((self.minute as f64 * 60.0 + self.second) * 1000.0) as i64
    }

    /// Builds a tag from whole milliseconds, splitting off whole minutes.
    pub fn from_millis(millis: i64) -> Self {
        Self::new(
            millis.div_euclid(60_000),
            millis.rem_euclid(60_000) as f64 / 1000.0,
        )
    }
}

impl LrcTag for TimeTag {
    type Tuple = (i64, f64);

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{:02}", self.minute))
    }

    fn val(&self) -> Cow<'_, str> {
        let int_part = self.second.trunc();
        // truncated, then left-justified: 62 ms renders as "620"
        let frac = ((self.second - int_part) * 1000.0) as i64;
        Cow::Owned(format!("{:02}.{:0<3}", int_part as i64, frac))
    }

    fn to_tuple(&self) -> Self::Tuple {
        (self.minute, self.second)
    }
}

impl fmt::Display for TimeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.name(), self.val())
    }
}

impl PartialEq for TimeTag {
    fn eq(&self, other: &Self) -> bool {
        self.millis() == other.millis()
    }
}

impl Eq for TimeTag {}

impl Hash for TimeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.millis().hash(state);
    }
}

impl PartialOrd for TimeTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeTag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.millis().cmp(&other.millis())
    }
}

/// A tag as found in the text, before it is sorted into the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyTag {
    Header(Tag),
    Time(TimeTag),
}

impl AnyTag {
    /// Picks the variant from the name: an integer name makes a timestamp,
    /// anything else stays a header tag.
    ///
    /// Fails only when the name is an integer but the value is not a number.
    pub fn classify(name: &str, val: &str) -> Result<Self, ParseFloatError> {
        match name.trim().parse::<i64>() {
            Ok(minute) => {
                let second: f64 = val.trim().parse()?;
                Ok(AnyTag::Time(TimeTag::new(minute, second)))
            }
            Err(_) => Ok(AnyTag::Header(Tag::new(name, val))),
        }
    }

    pub fn name(&self) -> Cow<'_, str> {
        match self {
            AnyTag::Header(tag) => tag.name(),
            AnyTag::Time(tag) => tag.name(),
        }
    }

    pub fn val(&self) -> Cow<'_, str> {
        match self {
            AnyTag::Header(tag) => tag.val(),
            AnyTag::Time(tag) => tag.val(),
        }
    }

    pub fn as_time(&self) -> Option<&TimeTag> {
        match self {
            AnyTag::Time(tag) => Some(tag),
            AnyTag::Header(_) => None,
        }
    }

    pub fn is_time(&self) -> bool {
        matches!(self, AnyTag::Time(_))
    }
}

impl From<Tag> for AnyTag {
    fn from(tag: Tag) -> Self {
        AnyTag::Header(tag)
    }
}

impl From<TimeTag> for AnyTag {
    fn from(tag: TimeTag) -> Self {
        AnyTag::Time(tag)
    }
}

impl fmt::Display for AnyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyTag::Header(tag) => fmt::Display::fmt(tag, f),
            AnyTag::Time(tag) => fmt::Display::fmt(tag, f),
        }
    }
}
