//! The fixed mood colour palette and emoji picker sets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entry::Rgba;

/// A named colour from the mood palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodColor {
    Joyful,
    Happy,
    Calm,
    Peaceful,
    Neutral,
    Tired,
    Anxious,
    Sad,
    Stressed,
    Angry,
    Grateful,
    Excited,
    Romantic,
    Creative,
    Focused,
}

impl MoodColor {
    /// Every palette colour in picker order.
    pub const ALL: [Self; 15] = [
        Self::Joyful,
        Self::Happy,
        Self::Calm,
        Self::Peaceful,
        Self::Neutral,
        Self::Tired,
        Self::Anxious,
        Self::Sad,
        Self::Stressed,
        Self::Angry,
        Self::Grateful,
        Self::Excited,
        Self::Romantic,
        Self::Creative,
        Self::Focused,
    ];

    #[must_use]
    pub const fn rgba(self) -> Rgba {
        match self {
            Self::Joyful => Rgba::rgb(0xFF, 0xD9, 0x3D),
            Self::Happy => Rgba::rgb(0xFF, 0x95, 0x00),
            Self::Calm => Rgba::rgb(0x6B, 0xCB, 0x77),
            Self::Peaceful => Rgba::rgb(0x4E, 0xCD, 0xC4),
            Self::Neutral => Rgba::rgb(0x95, 0xA5, 0xA6),
            Self::Tired => Rgba::rgb(0x74, 0xB9, 0xFF),
            Self::Anxious => Rgba::rgb(0xDD, 0xA0, 0xDD),
            Self::Sad => Rgba::rgb(0x5D, 0xAD, 0xE2),
            Self::Stressed => Rgba::rgb(0xE7, 0x4C, 0x3C),
            Self::Angry => Rgba::rgb(0xC0, 0x39, 0x2B),
            Self::Grateful => Rgba::rgb(0xFF, 0x6B, 0x6B),
            Self::Excited => Rgba::rgb(0xE0, 0x56, 0xFD),
            Self::Romantic => Rgba::rgb(0xFF, 0x85, 0xA2),
            Self::Creative => Rgba::rgb(0x00, 0xD2, 0xD3),
            Self::Focused => Rgba::rgb(0x09, 0x84, 0xE3),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Joyful => "Joyful",
            Self::Happy => "Happy",
            Self::Calm => "Calm",
            Self::Peaceful => "Peaceful",
            Self::Neutral => "Neutral",
            Self::Tired => "Tired",
            Self::Anxious => "Anxious",
            Self::Sad => "Sad",
            Self::Stressed => "Stressed",
            Self::Angry => "Angry",
            Self::Grateful => "Grateful",
            Self::Excited => "Excited",
            Self::Romantic => "Romantic",
            Self::Creative => "Creative",
            Self::Focused => "Focused",
        }
    }

    /// Looks up the palette name of a colour, if it is one.
    #[must_use]
    pub fn name_of(color: Rgba) -> Option<&'static str> {
        Self::ALL
            .into_iter()
            .find(|c| c.rgba() == color)
            .map(Self::name)
    }
}

impl fmt::Display for MoodColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoodColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown mood colour: {s}"))
    }
}

/// Emoji offered first when logging a mood.
pub const QUICK_EMOJIS: [&str; 16] = [
    "😊", "😢", "😡", "😴", "🥳", "😰", "🥰", "😤", "🤔", "😌", "🙏", "💪", "☀️", "🌧️", "❤️", "✨",
];

/// Emoji picker categories, in display order.
pub const EMOJI_CATEGORIES: [(&str, &[&str]); 6] = [
    (
        "Smileys",
        &[
            "😀", "😃", "😄", "😁", "😆", "😅", "🤣", "😂", "🙂", "😊", "😇", "🥰", "😍", "🤩",
            "😘", "😗", "😚", "😋", "😛", "😜", "🤪", "😝", "🤑", "🤗", "🤭", "🤫", "🤔", "🤐",
            "🤨", "😐", "😑", "😶",
        ],
    ),
    (
        "Emotions",
        &[
            "😏", "😒", "🙄", "😬", "😮‍💨", "🤥", "😌", "😔", "😪", "🤤", "😴", "😷", "🤒", "🤕",
            "🤢", "🤮", "🥴", "😵", "😵‍💫", "🤯", "🤠", "🥳", "🥸", "😎", "🤓", "🧐", "😕", "😟",
            "🙁", "😮", "😯", "😲",
        ],
    ),
    (
        "Feelings",
        &[
            "😳", "🥺", "😦", "😧", "😨", "😰", "😥", "😢", "😭", "😱", "😖", "😣", "😞", "😓",
            "😩", "😫", "🥱", "😤", "😡", "😠", "🤬", "😈", "👿", "💀", "☠️", "💩", "🤡", "👹",
            "👺", "👻", "👽", "🤖",
        ],
    ),
    (
        "Activities",
        &[
            "💪", "🙏", "👍", "👎", "👊", "✊", "🤝", "👏", "🎉", "🎊", "🎈", "🎁", "🎀", "🏆",
            "🥇", "🎯", "🧘", "🏃", "🚶", "💃", "🕺", "🎭", "🎨", "🎬", "🎤", "🎧", "🎵", "🎶",
            "📚", "✍️", "💼", "💻",
        ],
    ),
    (
        "Nature",
        &[
            "☀️", "🌙", "⭐", "🌈", "☁️", "⛅", "🌤️", "🌧️", "⛈️", "❄️", "🌸", "🌺", "🌻", "🌼",
            "🌷", "🌱", "🌲", "🌳", "🍀", "🍁", "🍂", "🍃", "🌿", "🌾", "🐶", "🐱", "🐰", "🦊",
            "🐻", "🐼", "🐨", "🦋",
        ],
    ),
    (
        "Food",
        &[
            "☕", "🍵", "🧃", "🍷", "🍺", "🍕", "🍔", "🍟", "🌮", "🍜", "🍣", "🍦", "🎂", "🍰",
            "🍪", "🍫", "🍬", "🍭", "🍿", "🧁", "🥤", "🍩", "🥐", "🥞",
        ],
    ),
];
