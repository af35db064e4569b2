// CharSeq: immutable character-sequence wrapper
// Implements: sub_seq, concat, prepend, case conversion, trim, reverse,
// split, scan, partition, replace, per-char/byte/codepoint iteration,
// and skip-search substring lookup

use std::cmp::Ordering;

use regex::Regex;
use smol_str::SmolStr;

use crate::error::{SeqError, SeqResult};
use crate::search;
use crate::seq::Seq;

/// An immutable sequence of character units.
///
/// Every transformation returns a new `CharSeq`; the wrapped text is
/// never mutated. Units are bytes of the UTF-8 encoding, so all
/// indices reported or accepted by this type are byte offsets, the
/// same convention `str` uses. Cloning is cheap (small strings are
/// stored inline, larger ones behind a shared pointer).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharSeq {
    str: SmolStr,
}

impl CharSeq {
    pub fn new(text: impl Into<SmolStr>) -> Self {
        Self { str: text.into() }
    }

    /// Build a CharSeq from a slice of chars.
    pub fn from_chars(chars: &[char]) -> Self {
        Self::new(chars.iter().collect::<String>())
    }

    pub fn as_str(&self) -> &str {
        self.str.as_str()
    }

    /// Length in units (bytes).
    pub fn len(&self) -> usize {
        self.str.len()
    }

    pub fn is_empty(&self) -> bool {
        self.str.is_empty()
    }

    /// The unit at byte offset `index`, O(1).
    pub fn byte_at(&self, index: usize) -> SeqResult<u8> {
        self.str
            .as_bytes()
            .get(index)
            .copied()
            .ok_or(SeqError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// The character starting at byte offset `index`.
    pub fn char_at(&self, index: usize) -> SeqResult<char> {
        if index >= self.len() {
            return Err(SeqError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        if !self.str.is_char_boundary(index) {
            return Err(SeqError::NotCharBoundary { index });
        }
        self.str[index..]
            .chars()
            .next()
            .ok_or(SeqError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// The sub-sequence in `[from, to)`.
    ///
    /// `CharSeq::from("hamburger").sub_seq(4, 8)` is `"urge"`,
    /// `CharSeq::from("smiles").sub_seq(1, 5)` is `"mile"`.
    pub fn sub_seq(&self, from: usize, to: usize) -> SeqResult<CharSeq> {
        if to > self.len() {
            return Err(SeqError::IndexOutOfRange {
                index: to,
                len: self.len(),
            });
        }
        if from > to {
            return Err(SeqError::IndexOutOfRange {
                index: from,
                len: to,
            });
        }
        if !self.str.is_char_boundary(from) {
            return Err(SeqError::NotCharBoundary { index: from });
        }
        if !self.str.is_char_boundary(to) {
            return Err(SeqError::NotCharBoundary { index: to });
        }
        Ok(Self::new(&self.str[from..to]))
    }

    /// The sub-sequence from `from` to the end.
    pub fn sub_seq_from(&self, from: usize) -> SeqResult<CharSeq> {
        self.sub_seq(from, self.len())
    }

    /// Append `other` to this sequence.
    pub fn concat(&self, other: impl AsRef<str>) -> CharSeq {
        let other = other.as_ref();
        let mut out = String::with_capacity(self.len() + other.len());
        out.push_str(self.as_str());
        out.push_str(other);
        Self::new(out)
    }

    /// Prepend `other` to this sequence.
    pub fn prepend(&self, other: impl AsRef<str>) -> CharSeq {
        let other = other.as_ref();
        let mut out = String::with_capacity(self.len() + other.len());
        out.push_str(other);
        out.push_str(self.as_str());
        Self::new(out)
    }

    pub fn to_uppercase(&self) -> CharSeq {
        Self::new(self.str.to_uppercase())
    }

    pub fn to_lowercase(&self) -> CharSeq {
        Self::new(self.str.to_lowercase())
    }

    /// First character uppercased, the rest lowercased.
    pub fn capitalize(&self) -> CharSeq {
        let mut chars = self.str.chars();
        match chars.next() {
            None => self.clone(),
            Some(first) => {
                let mut out = String::with_capacity(self.len());
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
                Self::new(out)
            }
        }
    }

    /// Toggle the case of every character.
    ///
    /// `CharSeq::from("sTrEsSed").swapcase()` is `"StReSsED"`.
    pub fn swapcase(&self) -> CharSeq {
        let mut out = String::with_capacity(self.len());
        for c in self.str.chars() {
            if c.is_uppercase() {
                out.extend(c.to_lowercase());
            } else if c.is_lowercase() {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
        }
        Self::new(out)
    }

    /// Characters in reverse order.
    pub fn reverse(&self) -> CharSeq {
        Self::new(self.str.chars().rev().collect::<String>())
    }

    /// Leading and trailing whitespace removed.
    pub fn trim(&self) -> CharSeq {
        Self::new(self.str.trim())
    }

    pub fn starts_with(&self, prefix: impl AsRef<str>) -> bool {
        self.str.starts_with(prefix.as_ref())
    }

    pub fn ends_with(&self, suffix: impl AsRef<str>) -> bool {
        self.str.ends_with(suffix.as_ref())
    }

    /// Lexicographic comparison by unit.
    pub fn compare_to(&self, other: &CharSeq) -> Ordering {
        self.str.cmp(&other.str)
    }

    /// Lexicographic comparison, ignoring case differences.
    pub fn compare_to_ignore_case(&self, other: &CharSeq) -> Ordering {
        let lhs = self.str.chars().flat_map(char::to_lowercase);
        let rhs = other.str.chars().flat_map(char::to_lowercase);
        lhs.cmp(rhs)
    }

    /// Whether the whole sequence matches the regex.
    pub fn matches(&self, pattern: &str) -> SeqResult<bool> {
        let re = Regex::new(&format!(r"\A(?:{})\z", pattern))?;
        Ok(re.is_match(self.as_str()))
    }

    /// Split around matches of the regex.
    pub fn split(&self, pattern: &str) -> SeqResult<Seq<CharSeq>> {
        let re = Regex::new(pattern)?;
        Ok(re.split(self.as_str()).map(CharSeq::from).collect())
    }

    /// All non-overlapping matches of the regex, in order.
    pub fn scan(&self, pattern: &str) -> SeqResult<Seq<CharSeq>> {
        let re = Regex::new(pattern)?;
        let mut found = Seq::new();
        for m in re.find_iter(self.as_str()) {
            found.push(CharSeq::from(m.as_str()));
        }
        Ok(found)
    }

    /// Replace the first match of the regex.
    ///
    /// The replacement may reference capture groups (`$1`, `${name}`)
    /// with the host engine's expansion rules.
    pub fn replace_first(&self, pattern: &str, replacement: impl AsRef<str>) -> SeqResult<CharSeq> {
        let re = Regex::new(pattern)?;
        Ok(Self::new(
            re.replacen(self.as_str(), 1, replacement.as_ref()).into_owned(),
        ))
    }

    /// Replace every match of the regex.
    pub fn replace_all(&self, pattern: &str, replacement: impl AsRef<str>) -> SeqResult<CharSeq> {
        let re = Regex::new(pattern)?;
        Ok(Self::new(
            re.replace_all(self.as_str(), replacement.as_ref()).into_owned(),
        ))
    }

    /// Three sequences: the part before the first regex match, the
    /// match itself, and the part after. Without a match: two empty
    /// sequences and the sequence itself.
    pub fn partition(&self, pattern: &str) -> SeqResult<Seq<CharSeq>> {
        let re = Regex::new(pattern)?;
        Ok(match re.find(self.as_str()) {
            Some(m) => Seq::from(vec![
                CharSeq::from(&self.as_str()[..m.start()]),
                CharSeq::from(m.as_str()),
                CharSeq::from(&self.as_str()[m.end()..]),
            ]),
            None => Seq::from(vec![CharSeq::new(""), CharSeq::new(""), self.clone()]),
        })
    }

    /// Like [`partition`](Self::partition) but around the LAST match.
    pub fn r_partition(&self, pattern: &str) -> SeqResult<Seq<CharSeq>> {
        let re = Regex::new(pattern)?;
        let mut last_match = None;
        for m in re.find_iter(self.as_str()) {
            last_match = Some((m.start(), m.end()));
        }
        Ok(match last_match {
            Some((start, end)) => Seq::from(vec![
                CharSeq::from(&self.as_str()[..start]),
                CharSeq::from(&self.as_str()[start..end]),
                CharSeq::from(&self.as_str()[end..]),
            ]),
            None => Seq::from(vec![CharSeq::new(""), CharSeq::new(""), self.clone()]),
        })
    }

    /// The lines of this sequence (split on `\n` or `\r\n`, final
    /// line ending not required).
    pub fn each_line(&self) -> Seq<CharSeq> {
        self.str.lines().map(CharSeq::from).collect()
    }

    pub fn each_char(&self) -> Seq<char> {
        self.str.chars().collect()
    }

    pub fn each_byte(&self) -> Seq<u8> {
        self.str.bytes().collect()
    }

    /// The Unicode scalar value of each character.
    pub fn each_code_point(&self) -> Seq<u32> {
        self.str.chars().map(|c| c as u32).collect()
    }

    /// First index of `pat` in this sequence, or `None`. An empty
    /// `pat` is found at index 0 of every sequence.
    pub fn index_of_sub_seq(&self, pat: impl AsRef<str>) -> Option<usize> {
        search::find_first(self.str.as_bytes(), pat.as_ref().as_bytes())
    }

    /// Last index of `pat` in this sequence, or `None`. Same empty-
    /// pattern policy as [`index_of_sub_seq`](Self::index_of_sub_seq).
    pub fn last_index_of_sub_seq(&self, pat: impl AsRef<str>) -> Option<usize> {
        search::find_last(self.str.as_bytes(), pat.as_ref().as_bytes())
    }

    pub fn contains_sub_seq(&self, pat: impl AsRef<str>) -> bool {
        self.index_of_sub_seq(pat).is_some()
    }
}

impl From<&str> for CharSeq {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for CharSeq {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<char> for CharSeq {
    fn from(c: char) -> Self {
        let mut buf = [0u8; 4];
        Self::new(&*c.encode_utf8(&mut buf))
    }
}

impl std::str::FromStr for CharSeq {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl AsRef<str> for CharSeq {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for CharSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for CharSeq {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for CharSeq {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
