use crate::entities::*;
use std::{borrow::Borrow, cmp::Ordering};

// Root collation order of the ASCII punctuation and symbols.
const PUNCTUATION: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Primary {
    Space,
    Punctuation(usize),
    Symbol(char),
    Digit(u32),
    Letter(char),
}

fn primary(c: char) -> Primary {
    if c.is_whitespace() {
        Primary::Space
    } else if let Some(idx) = PUNCTUATION.find(c) {
        Primary::Punctuation(idx)
    } else if let Some(d) = c.to_digit(10) {
        Primary::Digit(d)
    } else if c.is_alphabetic() {
        Primary::Letter(c.to_lowercase().next().unwrap_or(c))
    } else {
        Primary::Symbol(c)
    }
}

/// Compares strings the way a human reader expects them in a listing.
///
/// Whitespace sorts before punctuation, punctuation before digits and
/// digits before letters. Letters compare case-insensitively first;
/// strings that only differ in case put lower case first.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary)
        .cmp(b.chars().map(primary))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

pub trait ByUsernameAndRepo {
    fn sort_by_username_and_repo(&mut self);
}

impl ByUsernameAndRepo for [Resource] {
    fn sort_by_username_and_repo(&mut self) {
        // stable: duplicates keep their extraction order
        self.sort_by(|a, b| {
            locale_cmp(&a.username, &b.username).then_with(|| locale_cmp(&a.repo, &b.repo))
        });
    }
}

/// Sort orders of the plugin listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortMode {
    Stars,
    Created,
    Updated,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Stars, SortMode::Created, SortMode::Updated];

    /// Descending order of the selected attribute.
    pub fn compare(self, a: &Plugin, b: &Plugin) -> Ordering {
        match self {
            Self::Stars => b.stars.cmp(&a.stars),
            Self::Created => b.created_at.cmp(&a.created_at),
            Self::Updated => b.updated_at.cmp(&a.updated_at),
        }
    }
}

pub trait ByMode {
    fn sort_by_mode(&mut self, mode: SortMode);
}

impl<P> ByMode for [P]
where
    P: Borrow<Plugin>,
{
    fn sort_by_mode(&mut self, mode: SortMode) {
        // stable: ties keep the order of the plugin mapping
        self.sort_by(|a, b| mode.compare(a.borrow(), b.borrow()));
    }
}
