use std::fmt;

pub type TagCount = u64;

/// A tag together with the number of plugins carrying it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Tag {
    pub id: String,
    pub count: TagCount,
}

/// Display color of a tag, a step function of its count.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TagColor {
    Pink,
    Yellow,
    Orange,
    Green,
    Purple,
}

impl TagColor {
    pub const fn from_count(count: TagCount) -> Self {
        match count {
            0..=1 => Self::Pink,
            2..=3 => Self::Yellow,
            4..=10 => Self::Orange,
            11..=15 => Self::Green,
            _ => Self::Purple,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pink => "pink",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Purple => "purple",
        }
    }
}

impl Tag {
    pub const fn color(&self) -> TagColor {
        TagColor::from_count(self.count)
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
