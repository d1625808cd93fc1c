use std::fmt;

use crate::script::Script;

/// The direction in which text flows on a line.
///
/// Horizontal scripts run left to right or right to left. The vertical
/// pair exists for layout code that sets lines in columns, e.g., for
/// traditional Mongolian or columnar CJK. The script direction table in
/// this crate only ever produces the horizontal pair.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Text flows from left to right, e.g., Latin.
    LeftToRight,
    /// Text flows from right to left, e.g., Arabic.
    RightToLeft,
    /// Text flows from top to bottom, e.g., traditional Mongolian.
    TopToBottom,
    /// Text flows from bottom to top, e.g., Ogham on standing stones.
    BottomToTop,
}

impl Direction {
    /// Returns true if and only if text in this direction flows along a
    /// horizontal line.
    pub fn is_horizontal(&self) -> bool {
        match *self {
            Direction::LeftToRight | Direction::RightToLeft => true,
            _ => false,
        }
    }

    /// Returns true if and only if text in this direction flows along a
    /// vertical line.
    pub fn is_vertical(&self) -> bool {
        match *self {
            Direction::TopToBottom | Direction::BottomToTop => true,
            _ => false,
        }
    }

    /// Returns true if and only if this direction runs in increasing
    /// coordinate order, i.e., left to right or top to bottom.
    pub fn is_forward(&self) -> bool {
        match *self {
            Direction::LeftToRight | Direction::TopToBottom => true,
            _ => false,
        }
    }

    /// Returns true if and only if this direction runs in decreasing
    /// coordinate order, i.e., right to left or bottom to top.
    pub fn is_backward(&self) -> bool {
        !self.is_forward()
    }

    /// Return the direction that runs along the same axis in the opposite
    /// order.
    pub fn reversed(&self) -> Direction {
        match *self {
            Direction::LeftToRight => Direction::RightToLeft,
            Direction::RightToLeft => Direction::LeftToRight,
            Direction::TopToBottom => Direction::BottomToTop,
            Direction::BottomToTop => Direction::TopToBottom,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::LeftToRight => "ltr",
            Direction::RightToLeft => "rtl",
            Direction::TopToBottom => "ttb",
            Direction::BottomToTop => "btt",
        };
        write!(f, "{}", s)
    }
}

// Shorthand for the table below.
const L: Direction = Direction::LeftToRight;
const R: Direction = Direction::RightToLeft;

// The default horizontal direction of each script, indexed by the script's
// numeric value. The table currently covers scripts through Unicode 5.1
// (Lydian). Scripts added after that resolve to left to right until an
// entry for them lands here, so entries may only be appended, never
// reordered.
static HORIZONTAL: [Direction; 78] = [
    // Unicode 3.2 and earlier.
    L, // Common
    L, // Inherited
    R, // Arabic
    L, // Armenian
    L, // Bengali
    L, // Bopomofo
    L, // Cherokee
    L, // Coptic
    L, // Cyrillic
    L, // Deseret
    L, // Devanagari
    L, // Ethiopic
    L, // Georgian
    L, // Gothic
    L, // Greek
    L, // Gujarati
    L, // Gurmukhi
    L, // Han
    L, // Hangul
    R, // Hebrew
    L, // Hiragana
    L, // Kannada
    L, // Katakana
    L, // Khmer
    L, // Lao
    L, // Latin
    L, // Malayalam
    L, // Mongolian
    L, // Myanmar
    L, // Ogham
    L, // OldItalic
    L, // Oriya
    L, // Runic
    L, // Sinhala
    R, // Syriac
    L, // Tamil
    L, // Telugu
    R, // Thaana
    L, // Thai
    L, // Tibetan
    L, // CanadianAboriginal
    L, // Yi
    L, // Tagalog
    L, // Hanunoo
    L, // Buhid
    L, // Tagbanwa
    // Unicode 4.0 additions.
    L, // Braille
    L, // Cypriot
    L, // Limbu
    L, // Osmanya
    L, // Shavian
    L, // LinearB
    L, // TaiLe
    L, // Ugaritic
    // Unicode 4.1 additions.
    L, // NewTaiLue
    L, // Buginese
    L, // Glagolitic
    L, // Tifinagh
    L, // SylotiNagri
    L, // OldPersian
    L, // Kharoshthi
    // Unicode 5.0 additions.
    L, // Unknown
    L, // Balinese
    L, // Cuneiform
    R, // Phoenician
    L, // PhagsPa
    R, // Nko
    // Unicode 5.1 additions.
    L, // KayahLi
    L, // Lepcha
    L, // Rejang
    L, // Sundanese
    L, // Saurashtra
    L, // Cham
    L, // OlChiki
    L, // Vai
    L, // Carian
    L, // Lycian
    L, // Lydian
];

/// Return the direction in which text of the given script flows when laid
/// out horizontally.
///
/// Scripts the direction table does not cover yet resolve to
/// `Direction::LeftToRight`. The table only ever contains the horizontal
/// pair, so this never returns a vertical direction.
pub fn horizontal_direction(script: Script) -> Direction {
    HORIZONTAL.get(script as usize).copied().unwrap_or(Direction::LeftToRight)
}
