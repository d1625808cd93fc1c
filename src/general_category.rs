/// The value of the `General_Category` property for a single codepoint.
///
/// There is one variant for each of the thirty general categories defined
/// by UAX #44. Variants are in alphabetical order of their canonical long
/// names. Groupings of categories, such as `Cased_Letter` or `Letter`, are
/// not represented here, although predicates are provided for the common
/// ones.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GeneralCategory {
    /// `Pe`
    ClosePunctuation,
    /// `Pc`
    ConnectorPunctuation,
    /// `Cc`
    Control,
    /// `Sc`
    CurrencySymbol,
    /// `Pd`
    DashPunctuation,
    /// `Nd`
    DecimalNumber,
    /// `Me`
    EnclosingMark,
    /// `Pf`
    FinalPunctuation,
    /// `Cf`
    Format,
    /// `Pi`
    InitialPunctuation,
    /// `Nl`
    LetterNumber,
    /// `Zl`
    LineSeparator,
    /// `Ll`
    LowercaseLetter,
    /// `Sm`
    MathSymbol,
    /// `Lm`
    ModifierLetter,
    /// `Sk`
    ModifierSymbol,
    /// `Mn`
    NonspacingMark,
    /// `Ps`
    OpenPunctuation,
    /// `Lo`
    OtherLetter,
    /// `No`
    OtherNumber,
    /// `Po`
    OtherPunctuation,
    /// `So`
    OtherSymbol,
    /// `Zp`
    ParagraphSeparator,
    /// `Co`
    PrivateUse,
    /// `Zs`
    SpaceSeparator,
    /// `Mc`
    SpacingMark,
    /// `Cs`
    Surrogate,
    /// `Lt`
    TitlecaseLetter,
    /// `Cn`
    Unassigned,
    /// `Lu`
    UppercaseLetter,
}

impl GeneralCategory {
    /// Return the abbreviated name of this category, e.g., `Lo` for
    /// `Other_Letter`.
    pub fn abbreviation(&self) -> &'static str {
        use self::GeneralCategory::*;
        match *self {
            ClosePunctuation => "Pe",
            ConnectorPunctuation => "Pc",
            Control => "Cc",
            CurrencySymbol => "Sc",
            DashPunctuation => "Pd",
            DecimalNumber => "Nd",
            EnclosingMark => "Me",
            FinalPunctuation => "Pf",
            Format => "Cf",
            InitialPunctuation => "Pi",
            LetterNumber => "Nl",
            LineSeparator => "Zl",
            LowercaseLetter => "Ll",
            MathSymbol => "Sm",
            ModifierLetter => "Lm",
            ModifierSymbol => "Sk",
            NonspacingMark => "Mn",
            OpenPunctuation => "Ps",
            OtherLetter => "Lo",
            OtherNumber => "No",
            OtherPunctuation => "Po",
            OtherSymbol => "So",
            ParagraphSeparator => "Zp",
            PrivateUse => "Co",
            SpaceSeparator => "Zs",
            SpacingMark => "Mc",
            Surrogate => "Cs",
            TitlecaseLetter => "Lt",
            Unassigned => "Cn",
            UppercaseLetter => "Lu",
        }
    }

    /// Returns true if and only if this category belongs to the `Letter`
    /// grouping, i.e., its abbreviation starts with `L`.
    pub fn is_letter(&self) -> bool {
        use self::GeneralCategory::*;
        match *self {
            LowercaseLetter | ModifierLetter | OtherLetter
            | TitlecaseLetter | UppercaseLetter => true,
            _ => false,
        }
    }

    /// Returns true if and only if this category belongs to the `Mark`
    /// grouping, i.e., its abbreviation starts with `M`.
    pub fn is_mark(&self) -> bool {
        use self::GeneralCategory::*;
        match *self {
            EnclosingMark | NonspacingMark | SpacingMark => true,
            _ => false,
        }
    }
}

impl Default for GeneralCategory {
    /// Returns `Other_Letter`, the category an unconfigured property
    /// function table assigns to every codepoint.
    fn default() -> GeneralCategory {
        GeneralCategory::OtherLetter
    }
}
