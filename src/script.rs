use std::str::FromStr;

use crate::direction::{self, Direction};
use crate::error::ScriptNameError;

/// The value of the `Script` property for a single codepoint.
///
/// There is one variant for every script with assigned codepoints through
/// Unicode 5.2, plus `Common`, `Inherited` and `Unknown`. The numeric value
/// of a variant is its position in the canonical script table, which grows
/// strictly by appending: a value, once assigned, never changes across
/// Unicode releases. Code that stores scripts by number may rely on the
/// values being stable.
///
/// Each variant is documented with its ISO 15924 code, which can be fed
/// back to the `FromStr` implementation.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u16)]
pub enum Script {
    /// `Zyyy`
    Common = 0,
    /// `Zinh`
    Inherited,
    /// `Arab`
    Arabic,
    /// `Armn`
    Armenian,
    /// `Beng`
    Bengali,
    /// `Bopo`
    Bopomofo,
    /// `Cher`
    Cherokee,
    /// `Copt`
    Coptic,
    /// `Cyrl`
    Cyrillic,
    /// `Dsrt`
    Deseret,
    /// `Deva`
    Devanagari,
    /// `Ethi`
    Ethiopic,
    /// `Geor`
    Georgian,
    /// `Goth`
    Gothic,
    /// `Grek`
    Greek,
    /// `Gujr`
    Gujarati,
    /// `Guru`
    Gurmukhi,
    /// `Hani`
    Han,
    /// `Hang`
    Hangul,
    /// `Hebr`
    Hebrew,
    /// `Hira`
    Hiragana,
    /// `Knda`
    Kannada,
    /// `Kana`
    Katakana,
    /// `Khmr`
    Khmer,
    /// `Laoo`
    Lao,
    /// `Latn`
    Latin,
    /// `Mlym`
    Malayalam,
    /// `Mong`
    Mongolian,
    /// `Mymr`
    Myanmar,
    /// `Ogam`
    Ogham,
    /// `Ital`
    OldItalic,
    /// `Orya`
    Oriya,
    /// `Runr`
    Runic,
    /// `Sinh`
    Sinhala,
    /// `Syrc`
    Syriac,
    /// `Taml`
    Tamil,
    /// `Telu`
    Telugu,
    /// `Thaa`
    Thaana,
    /// `Thai`
    Thai,
    /// `Tibt`
    Tibetan,
    /// `Cans`
    CanadianAboriginal,
    /// `Yiii`
    Yi,
    /// `Tglg`
    Tagalog,
    /// `Hano`
    Hanunoo,
    /// `Buhd`
    Buhid,
    /// `Tagb`
    Tagbanwa,

    // Unicode 4.0 additions.
    /// `Brai`
    Braille = 46,
    /// `Cprt`
    Cypriot,
    /// `Limb`
    Limbu,
    /// `Osma`
    Osmanya,
    /// `Shaw`
    Shavian,
    /// `Linb`
    LinearB,
    /// `Tale`
    TaiLe,
    /// `Ugar`
    Ugaritic,

    // Unicode 4.1 additions.
    /// `Talu`
    NewTaiLue = 54,
    /// `Bugi`
    Buginese,
    /// `Glag`
    Glagolitic,
    /// `Tfng`
    Tifinagh,
    /// `Sylo`
    SylotiNagri,
    /// `Xpeo`
    OldPersian,
    /// `Khar`
    Kharoshthi,

    // Unicode 5.0 additions.
    /// `Zzzz`
    Unknown = 61,
    /// `Bali`
    Balinese,
    /// `Xsux`
    Cuneiform,
    /// `Phnx`
    Phoenician,
    /// `Phag`
    PhagsPa,
    /// `Nkoo`
    Nko,

    // Unicode 5.1 additions.
    /// `Kali`
    KayahLi = 67,
    /// `Lepc`
    Lepcha,
    /// `Rjng`
    Rejang,
    /// `Sund`
    Sundanese,
    /// `Saur`
    Saurashtra,
    /// `Cham`
    Cham,
    /// `Olck`
    OlChiki,
    /// `Vaii`
    Vai,
    /// `Cari`
    Carian,
    /// `Lyci`
    Lycian,
    /// `Lydi`
    Lydian,

    // Unicode 5.2 additions.
    /// `Avst`
    Avestan = 78,
    /// `Bamu`
    Bamum,
    /// `Egyp`
    EgyptianHieroglyphs,
    /// `Armi`
    ImperialAramaic,
    /// `Phli`
    InscriptionalPahlavi,
    /// `Prti`
    InscriptionalParthian,
    /// `Java`
    Javanese,
    /// `Kthi`
    Kaithi,
    /// `Lisu`
    Lisu,
    /// `Mtei`
    MeeteiMayek,
    /// `Sarb`
    OldSouthArabian,
    /// `Orkh`
    OldTurkic,
    /// `Samr`
    Samaritan,
    /// `Lana`
    TaiTham,
    /// `Tavt`
    TaiViet,
}

impl Script {
    /// Every script, in canonical table order.
    ///
    /// The position of a script in this slice is its numeric value.
    pub const ALL: &'static [Script] = &[
        Script::Common,
        Script::Inherited,
        Script::Arabic,
        Script::Armenian,
        Script::Bengali,
        Script::Bopomofo,
        Script::Cherokee,
        Script::Coptic,
        Script::Cyrillic,
        Script::Deseret,
        Script::Devanagari,
        Script::Ethiopic,
        Script::Georgian,
        Script::Gothic,
        Script::Greek,
        Script::Gujarati,
        Script::Gurmukhi,
        Script::Han,
        Script::Hangul,
        Script::Hebrew,
        Script::Hiragana,
        Script::Kannada,
        Script::Katakana,
        Script::Khmer,
        Script::Lao,
        Script::Latin,
        Script::Malayalam,
        Script::Mongolian,
        Script::Myanmar,
        Script::Ogham,
        Script::OldItalic,
        Script::Oriya,
        Script::Runic,
        Script::Sinhala,
        Script::Syriac,
        Script::Tamil,
        Script::Telugu,
        Script::Thaana,
        Script::Thai,
        Script::Tibetan,
        Script::CanadianAboriginal,
        Script::Yi,
        Script::Tagalog,
        Script::Hanunoo,
        Script::Buhid,
        Script::Tagbanwa,
        Script::Braille,
        Script::Cypriot,
        Script::Limbu,
        Script::Osmanya,
        Script::Shavian,
        Script::LinearB,
        Script::TaiLe,
        Script::Ugaritic,
        Script::NewTaiLue,
        Script::Buginese,
        Script::Glagolitic,
        Script::Tifinagh,
        Script::SylotiNagri,
        Script::OldPersian,
        Script::Kharoshthi,
        Script::Unknown,
        Script::Balinese,
        Script::Cuneiform,
        Script::Phoenician,
        Script::PhagsPa,
        Script::Nko,
        Script::KayahLi,
        Script::Lepcha,
        Script::Rejang,
        Script::Sundanese,
        Script::Saurashtra,
        Script::Cham,
        Script::OlChiki,
        Script::Vai,
        Script::Carian,
        Script::Lycian,
        Script::Lydian,
        Script::Avestan,
        Script::Bamum,
        Script::EgyptianHieroglyphs,
        Script::ImperialAramaic,
        Script::InscriptionalPahlavi,
        Script::InscriptionalParthian,
        Script::Javanese,
        Script::Kaithi,
        Script::Lisu,
        Script::MeeteiMayek,
        Script::OldSouthArabian,
        Script::OldTurkic,
        Script::Samaritan,
        Script::TaiTham,
        Script::TaiViet,
    ];

    /// Return the ISO 15924 code of this script, e.g., `Latn` for
    /// `Latin`.
    pub fn code(&self) -> &'static str {
        use self::Script::*;
        match *self {
            Common => "Zyyy",
            Inherited => "Zinh",
            Arabic => "Arab",
            Armenian => "Armn",
            Bengali => "Beng",
            Bopomofo => "Bopo",
            Cherokee => "Cher",
            Coptic => "Copt",
            Cyrillic => "Cyrl",
            Deseret => "Dsrt",
            Devanagari => "Deva",
            Ethiopic => "Ethi",
            Georgian => "Geor",
            Gothic => "Goth",
            Greek => "Grek",
            Gujarati => "Gujr",
            Gurmukhi => "Guru",
            Han => "Hani",
            Hangul => "Hang",
            Hebrew => "Hebr",
            Hiragana => "Hira",
            Kannada => "Knda",
            Katakana => "Kana",
            Khmer => "Khmr",
            Lao => "Laoo",
            Latin => "Latn",
            Malayalam => "Mlym",
            Mongolian => "Mong",
            Myanmar => "Mymr",
            Ogham => "Ogam",
            OldItalic => "Ital",
            Oriya => "Orya",
            Runic => "Runr",
            Sinhala => "Sinh",
            Syriac => "Syrc",
            Tamil => "Taml",
            Telugu => "Telu",
            Thaana => "Thaa",
            Thai => "Thai",
            Tibetan => "Tibt",
            CanadianAboriginal => "Cans",
            Yi => "Yiii",
            Tagalog => "Tglg",
            Hanunoo => "Hano",
            Buhid => "Buhd",
            Tagbanwa => "Tagb",
            Braille => "Brai",
            Cypriot => "Cprt",
            Limbu => "Limb",
            Osmanya => "Osma",
            Shavian => "Shaw",
            LinearB => "Linb",
            TaiLe => "Tale",
            Ugaritic => "Ugar",
            NewTaiLue => "Talu",
            Buginese => "Bugi",
            Glagolitic => "Glag",
            Tifinagh => "Tfng",
            SylotiNagri => "Sylo",
            OldPersian => "Xpeo",
            Kharoshthi => "Khar",
            Unknown => "Zzzz",
            Balinese => "Bali",
            Cuneiform => "Xsux",
            Phoenician => "Phnx",
            PhagsPa => "Phag",
            Nko => "Nkoo",
            KayahLi => "Kali",
            Lepcha => "Lepc",
            Rejang => "Rjng",
            Sundanese => "Sund",
            Saurashtra => "Saur",
            Cham => "Cham",
            OlChiki => "Olck",
            Vai => "Vaii",
            Carian => "Cari",
            Lycian => "Lyci",
            Lydian => "Lydi",
            Avestan => "Avst",
            Bamum => "Bamu",
            EgyptianHieroglyphs => "Egyp",
            ImperialAramaic => "Armi",
            InscriptionalPahlavi => "Phli",
            InscriptionalParthian => "Prti",
            Javanese => "Java",
            Kaithi => "Kthi",
            Lisu => "Lisu",
            MeeteiMayek => "Mtei",
            OldSouthArabian => "Sarb",
            OldTurkic => "Orkh",
            Samaritan => "Samr",
            TaiTham => "Lana",
            TaiViet => "Tavt",
        }
    }

    /// Return the direction in which text of this script flows when laid
    /// out horizontally.
    pub fn horizontal_direction(&self) -> Direction {
        direction::horizontal_direction(*self)
    }
}

impl FromStr for Script {
    type Err = ScriptNameError;

    /// Parse an ISO 15924 script code, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Script, ScriptNameError> {
        for &script in Script::ALL {
            if script.code().eq_ignore_ascii_case(s) {
                return Ok(script);
            }
        }
        Err(ScriptNameError { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::Script;

    #[test]
    fn values_are_table_positions() {
        for (i, &script) in Script::ALL.iter().enumerate() {
            assert_eq!(script as usize, i, "{:?}", script);
        }
    }

    #[test]
    fn release_anchors() {
        assert_eq!(Script::Common as u16, 0);
        assert_eq!(Script::Tagbanwa as u16, 45);
        assert_eq!(Script::Braille as u16, 46);
        assert_eq!(Script::NewTaiLue as u16, 54);
        assert_eq!(Script::Unknown as u16, 61);
        assert_eq!(Script::KayahLi as u16, 67);
        assert_eq!(Script::Lydian as u16, 77);
        assert_eq!(Script::Avestan as u16, 78);
        assert_eq!(Script::TaiViet as u16, 92);
    }

    #[test]
    fn codes_are_distinct() {
        let codes: BTreeSet<&str> =
            Script::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(codes.len(), Script::ALL.len());
    }

    #[test]
    fn codes_round_trip() {
        for &script in Script::ALL {
            let code = script.code();
            assert_eq!(code.len(), 4);
            assert_eq!(code.parse::<Script>().unwrap(), script);
            let lower = code.to_ascii_lowercase();
            assert_eq!(lower.parse::<Script>().unwrap(), script);
            let upper = code.to_ascii_uppercase();
            assert_eq!(upper.parse::<Script>().unwrap(), script);
        }
    }

    #[test]
    fn unrecognized_codes() {
        assert!("Qaaq".parse::<Script>().is_err());
        assert!("Latn ".parse::<Script>().is_err());
        assert!("".parse::<Script>().is_err());

        let err = "Wxyz".parse::<Script>().unwrap_err();
        assert_eq!(err.name(), "Wxyz");
    }
}
