//! Mood entries and their validated building blocks.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Validation errors for entry fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The emoji was empty or whitespace.
    #[error("emoji cannot be empty")]
    EmptyEmoji,

    /// The emoji spans more than one grapheme cluster.
    #[error("emoji must be a single grapheme, got {count} in {value:?}")]
    EmojiTooLong { value: String, count: usize },

    /// A colour string could not be parsed.
    #[error("invalid colour {value:?}: expected #RRGGBB or #AARRGGBB")]
    InvalidColor { value: String },
}

/// An 8-bit-per-channel colour.
///
/// Stored packed as ARGB (`0xAARRGGBB`) and written as `#RRGGBB` when opaque,
/// `#AARRGGBB` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);

    /// An opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Unpacks an ARGB word.
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self { r, g, b, a }
    }

    /// Packs into an ARGB word.
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    /// Builds an opaque colour from hue (degrees), saturation and lightness (0.0–1.0).
    ///
    /// Hue wraps around 360; saturation and lightness are clamped.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "channels are clamped to 0.0..=1.0 before scaling"
    )]
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0f32.mul_add(l, -1.0)).abs()) * s;
        let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match h {
            h if h < 1.0 => (chroma, x, 0.0),
            h if h < 2.0 => (x, chroma, 0.0),
            h if h < 3.0 => (0.0, chroma, x),
            h if h < 4.0 => (0.0, x, chroma),
            h if h < 5.0 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let channel = |v: f32| ((v + m).clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }

    /// Returns the same colour with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// WCAG relative luminance, ignoring alpha.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        fn linear(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.0722f64.mul_add(
            linear(self.b),
            0.2126f64.mul_add(linear(self.r), 0.7152 * linear(self.g)),
        )
    }

    /// WCAG contrast ratio between two colours (1.0 to 21.0).
    #[must_use]
    pub fn contrast_ratio(self, other: Self) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (light, dark) = if a >= b { (a, b) } else { (b, a) };
        (light + 0.05) / (dark + 0.05)
    }

    /// Hex representation, `#RRGGBB` for opaque colours.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.a == 0xFF {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

impl FromStr for Rgba {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidColor {
            value: s.to_string(),
        };
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            6 => Ok(Self::from_argb(0xFF00_0000 | value)),
            8 => Ok(Self::from_argb(value)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A validated emoji: exactly one extended grapheme cluster.
///
/// Multi-codepoint sequences such as `😮‍💨` or `☀️` count as one grapheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Emoji(String);

impl Emoji {
    /// Creates a new emoji after validation. Surrounding whitespace is trimmed.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyEmoji);
        }
        let count = trimmed.graphemes(true).count();
        if count > 1 {
            return Err(ValidationError::EmojiTooLong {
                value: trimmed.to_string(),
                count,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the emoji as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Emoji {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Emoji> for String {
    fn from(emoji: Emoji) -> Self {
        emoji.0
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Emoji {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One day's mood.
///
/// The date is the entry's identity and cannot change once built; editing
/// produces a new entry through [`MoodEntry::with_mood`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    date: NaiveDate,
    color: Rgba,
    emoji: Emoji,
    #[serde(default)]
    note: String,
    created_at: DateTime<Utc>,
}

impl MoodEntry {
    /// Creates an entry stamped with the current time and an empty note.
    #[must_use]
    pub fn new(date: NaiveDate, color: Rgba, emoji: Emoji) -> Self {
        Self {
            date,
            color,
            emoji,
            note: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Sets the note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Sets the creation timestamp (used when loading from storage).
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds the edited version of this entry, keeping its date and creation time.
    #[must_use]
    pub fn with_mood(&self, color: Rgba, emoji: Emoji, note: impl Into<String>) -> Self {
        Self {
            date: self.date,
            color,
            emoji,
            note: note.into(),
            created_at: self.created_at,
        }
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub const fn color(&self) -> Rgba {
        self.color
    }

    pub const fn emoji(&self) -> &Emoji {
        &self.emoji
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_roundtrip_keeps_channels() {
        let color = Rgba::from_argb(0xFF6B_CB77);
        assert_eq!(color, Rgba::rgb(0x6B, 0xCB, 0x77));
        assert_eq!(color.to_argb(), 0xFF6B_CB77);
    }

    #[test]
    fn test_parses_short_and_long_hex() {
        assert_eq!("#FFD93D".parse::<Rgba>().unwrap(), Rgba::rgb(0xFF, 0xD9, 0x3D));
        assert_eq!(
            "#80FFFFFF".parse::<Rgba>().unwrap(),
            Rgba::WHITE.with_alpha(0x80)
        );
        assert!("FFD93D".parse::<Rgba>().is_err());
        assert!("#FFD9".parse::<Rgba>().is_err());
        assert!("#GGGGGG".parse::<Rgba>().is_err());
        assert!("#+FFFFF".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_hex_display_omits_opaque_alpha() {
        assert_eq!(Rgba::rgb(0x1A, 0x1A, 0x1A).to_hex(), "#1A1A1A");
        assert_eq!(Rgba::BLACK.with_alpha(0x40).to_hex(), "#40000000");
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(Rgba::from_hsl(0.0, 1.0, 0.5), Rgba::rgb(255, 0, 0));
        assert_eq!(Rgba::from_hsl(120.0, 1.0, 0.5), Rgba::rgb(0, 255, 0));
        assert_eq!(Rgba::from_hsl(240.0, 1.0, 0.5), Rgba::rgb(0, 0, 255));
        assert_eq!(Rgba::from_hsl(360.0, 1.0, 0.5), Rgba::rgb(255, 0, 0));
        assert_eq!(Rgba::from_hsl(42.0, 0.0, 1.0), Rgba::WHITE);
        assert_eq!(Rgba::from_hsl(42.0, 0.7, 0.0), Rgba::BLACK);
    }

    #[test]
    fn test_contrast_of_black_on_white_is_maximal() {
        let ratio = Rgba::BLACK.contrast_ratio(Rgba::WHITE);
        assert!((ratio - 21.0).abs() < 1e-9);
        assert!((Rgba::WHITE.contrast_ratio(Rgba::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_emoji_accepts_single_graphemes() {
        for value in ["😊", "☀️", "😮‍💨", " 🥳 "] {
            assert!(Emoji::new(value).is_ok(), "{value} should be valid");
        }
        assert_eq!(Emoji::new(" 🥳 ").unwrap().as_str(), "🥳");
    }

    #[test]
    fn test_emoji_rejects_empty_and_multiple() {
        assert_eq!(Emoji::new("  "), Err(ValidationError::EmptyEmoji));
        assert!(matches!(
            Emoji::new("😊😢"),
            Err(ValidationError::EmojiTooLong { count: 2, .. })
        ));
    }

    #[test]
    fn test_editing_keeps_date_and_creation_time() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let original = MoodEntry::new(date, Rgba::WHITE, Emoji::new("😊").unwrap())
            .with_note("first");
        let edited = original.with_mood(Rgba::BLACK, Emoji::new("😢").unwrap(), "second");

        assert_eq!(edited.date(), original.date());
        assert_eq!(edited.created_at(), original.created_at());
        assert_eq!(edited.emoji().as_str(), "😢");
        assert_eq!(edited.note(), "second");
        assert_eq!(original.note(), "first");
    }

    #[test]
    fn test_entry_serialization_roundtrip() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let entry = MoodEntry::new(date, Rgba::rgb(0x4E, 0xCD, 0xC4), Emoji::new("😌").unwrap());

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"#4ECDC4\""));
        let parsed: MoodEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_entry_rejects_empty_emoji() {
        let json = r##"{
            "date": "2024-01-01",
            "color": "#FFFFFF",
            "emoji": "",
            "created_at": "2024-01-01T00:00:00Z"
        }"##;
        let result: Result<MoodEntry, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
