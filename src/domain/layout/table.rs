//! Bidirectional character table between two keyboard layouts

use std::collections::HashMap;

use crate::domain::error::LayoutTableError;

/// English QWERTY to Russian ЙЦУКЕН, keyed by physical key.
///
/// Every value is Cyrillic and every key is ASCII, so the forward and reverse
/// key sets cannot intersect.
pub const EN_RU: &[(char, char)] = &[
    // top letter row
    ('q', 'й'),
    ('w', 'ц'),
    ('e', 'у'),
    ('r', 'к'),
    ('t', 'е'),
    ('y', 'н'),
    ('u', 'г'),
    ('i', 'ш'),
    ('o', 'щ'),
    ('p', 'з'),
    ('[', 'х'),
    (']', 'ъ'),
    // home row
    ('a', 'ф'),
    ('s', 'ы'),
    ('d', 'в'),
    ('f', 'а'),
    ('g', 'п'),
    ('h', 'р'),
    ('j', 'о'),
    ('k', 'л'),
    ('l', 'д'),
    (';', 'ж'),
    ('\'', 'э'),
    // bottom row
    ('z', 'я'),
    ('x', 'ч'),
    ('c', 'с'),
    ('v', 'м'),
    ('b', 'и'),
    ('n', 'т'),
    ('m', 'ь'),
    (',', 'б'),
    ('.', 'ю'),
    ('`', 'ё'),
    // shifted
    ('Q', 'Й'),
    ('W', 'Ц'),
    ('E', 'У'),
    ('R', 'К'),
    ('T', 'Е'),
    ('Y', 'Н'),
    ('U', 'Г'),
    ('I', 'Ш'),
    ('O', 'Щ'),
    ('P', 'З'),
    ('{', 'Х'),
    ('}', 'Ъ'),
    ('A', 'Ф'),
    ('S', 'Ы'),
    ('D', 'В'),
    ('F', 'А'),
    ('G', 'П'),
    ('H', 'Р'),
    ('J', 'О'),
    ('K', 'Л'),
    ('L', 'Д'),
    (':', 'Ж'),
    ('"', 'Э'),
    ('Z', 'Я'),
    ('X', 'Ч'),
    ('C', 'С'),
    ('V', 'М'),
    ('B', 'И'),
    ('N', 'Т'),
    ('M', 'Ь'),
    ('<', 'Б'),
    ('>', 'Ю'),
    ('~', 'Ё'),
];

/// Forward and reverse character maps held together.
///
/// Built once per run from a list of `(key, value)` pairs and validated so
/// that `reverse[forward[k]] == k` for every key.
#[derive(Debug, Clone)]
pub struct LayoutTable {
    forward: HashMap<char, char>,
    reverse: HashMap<char, char>,
}

impl LayoutTable {
    /// Build a table from `(key, value)` pairs.
    ///
    /// Rejects duplicate keys, duplicate values and any character that would
    /// be a key in both directions.
    pub fn from_pairs(pairs: &[(char, char)]) -> Result<Self, LayoutTableError> {
        let mut forward = HashMap::with_capacity(pairs.len());
        let mut reverse = HashMap::with_capacity(pairs.len());

        for &(key, value) in pairs {
            if forward.insert(key, value).is_some() {
                return Err(LayoutTableError::DuplicateKey(key));
            }
            if reverse.insert(value, key).is_some() {
                return Err(LayoutTableError::DuplicateValue(value));
            }
        }

        if let Some(&shared) = forward.keys().find(|k| reverse.contains_key(k)) {
            return Err(LayoutTableError::Overlap(shared));
        }

        Ok(Self { forward, reverse })
    }

    /// Same table with the directions swapped
    pub fn inverted(&self) -> Self {
        Self {
            forward: self.reverse.clone(),
            reverse: self.forward.clone(),
        }
    }

    /// Map one character. Forward lookup wins, then reverse, then identity.
    pub fn convert_char(&self, ch: char) -> char {
        self.forward
            .get(&ch)
            .or_else(|| self.reverse.get(&ch))
            .copied()
            .unwrap_or(ch)
    }

    /// Convert text character by character.
    ///
    /// There is no mode state: mixed input converts each character on its own.
    pub fn convert(&self, text: &str) -> String {
        text.chars().map(|ch| self.convert_char(ch)).collect()
    }

    /// Keys of the forward map
    pub fn forward_keys(&self) -> impl Iterator<Item = char> + '_ {
        self.forward.keys().copied()
    }

    /// Keys of the reverse map
    pub fn reverse_keys(&self) -> impl Iterator<Item = char> + '_ {
        self.reverse.keys().copied()
    }

    /// Number of mapped keys in one direction
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the table maps nothing
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
