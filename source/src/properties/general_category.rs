use super::PropertiesError;

/// основная категория символа (General Category, GC)
/// берется из UCD: вторая колонка UnicodeData.txt
///
/// для построения таблицы замен нас интересуют только группы:
///     M (Mn, Mc, Me) - комбинирующие символы, удаляются при конвертации
///     Z (Zs, Zl, Zp) - разделители, заменяются пробелом
///     Cc - управляющие символы, влияют на признак "печатаемости"
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GeneralCategory
{
    /// Cn - не назначен
    Unassigned,

    /// Lu
    UppercaseLetter,
    /// Ll
    LowercaseLetter,
    /// Lt
    TitlecaseLetter,
    /// Lm
    ModifierLetter,
    /// Lo
    OtherLetter,

    /// Mn - неразрывный комбинирующий маркер (не занимающий пространства)
    NonspacingMark,
    /// Mc - комбинирующий маркер, занимающий пространство
    SpacingMark,
    /// Me - охватывающий комбинирующий маркер
    EnclosingMark,

    /// Nd
    DecimalNumber,
    /// Nl
    LetterNumber,
    /// No
    OtherNumber,

    /// Zs - разделитель-пробел
    SpaceSeparator,
    /// Zl - разделитель строки
    LineSeparator,
    /// Zp - разделитель параграфов
    ParagraphSeparator,

    /// Cc - управляющий символ C0 или C1
    Control,
    /// Cf - символ форматирования
    Format,
    /// Cs
    Surrogate,
    /// Co
    PrivateUse,

    /// Pc
    ConnectorPunctuation,
    /// Pd
    DashPunctuation,
    /// Ps
    OpenPunctuation,
    /// Pe
    ClosePunctuation,
    /// Pi
    InitialPunctuation,
    /// Pf
    FinalPunctuation,
    /// Po
    OtherPunctuation,

    /// Sm
    MathSymbol,
    /// Sc
    CurrencySymbol,
    /// Sk
    ModifierSymbol,
    /// So
    OtherSymbol,
}

/// сокращения категорий в том виде, в котором они записаны в UCD
const ABBREVIATIONS: [(&str, GeneralCategory); 30] = [
    ("Cn", GeneralCategory::Unassigned),
    ("Lu", GeneralCategory::UppercaseLetter),
    ("Ll", GeneralCategory::LowercaseLetter),
    ("Lt", GeneralCategory::TitlecaseLetter),
    ("Lm", GeneralCategory::ModifierLetter),
    ("Lo", GeneralCategory::OtherLetter),
    ("Mn", GeneralCategory::NonspacingMark),
    ("Mc", GeneralCategory::SpacingMark),
    ("Me", GeneralCategory::EnclosingMark),
    ("Nd", GeneralCategory::DecimalNumber),
    ("Nl", GeneralCategory::LetterNumber),
    ("No", GeneralCategory::OtherNumber),
    ("Zs", GeneralCategory::SpaceSeparator),
    ("Zl", GeneralCategory::LineSeparator),
    ("Zp", GeneralCategory::ParagraphSeparator),
    ("Cc", GeneralCategory::Control),
    ("Cf", GeneralCategory::Format),
    ("Cs", GeneralCategory::Surrogate),
    ("Co", GeneralCategory::PrivateUse),
    ("Pc", GeneralCategory::ConnectorPunctuation),
    ("Pd", GeneralCategory::DashPunctuation),
    ("Ps", GeneralCategory::OpenPunctuation),
    ("Pe", GeneralCategory::ClosePunctuation),
    ("Pi", GeneralCategory::InitialPunctuation),
    ("Pf", GeneralCategory::FinalPunctuation),
    ("Po", GeneralCategory::OtherPunctuation),
    ("Sm", GeneralCategory::MathSymbol),
    ("Sc", GeneralCategory::CurrencySymbol),
    ("Sk", GeneralCategory::ModifierSymbol),
    ("So", GeneralCategory::OtherSymbol),
];

impl GeneralCategory
{
    /// комбинирующий символ (M)
    #[inline]
    pub fn is_mark(&self) -> bool
    {
        matches!(
            self,
            Self::NonspacingMark | Self::SpacingMark | Self::EnclosingMark
        )
    }

    /// разделитель (Z)
    #[inline]
    pub fn is_separator(&self) -> bool
    {
        matches!(
            self,
            Self::SpaceSeparator | Self::LineSeparator | Self::ParagraphSeparator
        )
    }

    #[inline]
    pub fn is_uppercase(&self) -> bool
    {
        matches!(self, Self::UppercaseLetter | Self::TitlecaseLetter)
    }

    #[inline]
    pub fn is_lowercase(&self) -> bool
    {
        *self == Self::LowercaseLetter
    }

    /// управляющий символ C0 / C1 (только Cc, без Cf)
    #[inline]
    pub fn is_control(&self) -> bool
    {
        *self == Self::Control
    }

    /// сокращенное название, как в UCD
    pub fn abbr(&self) -> &'static str
    {
        ABBREVIATIONS
            .iter()
            .find(|(_, gc)| gc == self)
            .map(|(abbr, _)| *abbr)
            .unwrap_or("Cn")
    }
}

impl TryFrom<&str> for GeneralCategory
{
    type Error = PropertiesError;

    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        if abbr.is_empty() {
            return Ok(Self::Unassigned);
        }

        ABBREVIATIONS
            .iter()
            .find(|(value, _)| *value == abbr)
            .map(|(_, gc)| *gc)
            .ok_or_else(|| PropertiesError::UnknownPropertyValue(abbr.to_owned()))
    }
}
