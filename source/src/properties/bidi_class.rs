use super::PropertiesError;

/// класс направления текста (bidi class)
/// берется из UCD: пятая колонка UnicodeData.txt
///
/// конвертер его не использует, он нужен только для признака "печатаемости" символа:
/// невидимыми считаются BN и явные символы форматирования направления (LR*, RL*, PD*, FSI)
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BidiClass
{
    LeftToRight,
    RightToLeft,
    ArabicLetter,
    EuropeanNumber,
    EuropeanSeparator,
    EuropeanTerminator,
    ArabicNumber,
    CommonSeparator,
    NonspacingMark,
    BoundaryNeutral,
    ParagraphSeparator,
    SegmentSeparator,
    Whitespace,
    OtherNeutral,
    LeftToRightEmbedding,
    LeftToRightOverride,
    RightToLeftEmbedding,
    RightToLeftOverride,
    PopDirectionalFormat,
    LeftToRightIsolate,
    RightToLeftIsolate,
    FirstStrongIsolate,
    PopDirectionalIsolate,
}

/// префиксы сокращений классов, символы которых не отображаются
const NON_PRINTABLE_PREFIXES: [&str; 5] = ["BN", "LR", "RL", "PD", "FS"];

const ABBREVIATIONS: [(&str, BidiClass); 23] = [
    ("L", BidiClass::LeftToRight),
    ("R", BidiClass::RightToLeft),
    ("AL", BidiClass::ArabicLetter),
    ("EN", BidiClass::EuropeanNumber),
    ("ES", BidiClass::EuropeanSeparator),
    ("ET", BidiClass::EuropeanTerminator),
    ("AN", BidiClass::ArabicNumber),
    ("CS", BidiClass::CommonSeparator),
    ("NSM", BidiClass::NonspacingMark),
    ("BN", BidiClass::BoundaryNeutral),
    ("B", BidiClass::ParagraphSeparator),
    ("S", BidiClass::SegmentSeparator),
    ("WS", BidiClass::Whitespace),
    ("ON", BidiClass::OtherNeutral),
    ("LRE", BidiClass::LeftToRightEmbedding),
    ("LRO", BidiClass::LeftToRightOverride),
    ("RLE", BidiClass::RightToLeftEmbedding),
    ("RLO", BidiClass::RightToLeftOverride),
    ("PDF", BidiClass::PopDirectionalFormat),
    ("LRI", BidiClass::LeftToRightIsolate),
    ("RLI", BidiClass::RightToLeftIsolate),
    ("FSI", BidiClass::FirstStrongIsolate),
    ("PDI", BidiClass::PopDirectionalIsolate),
];

impl BidiClass
{
    /// сокращенное название, как в UCD
    pub fn abbr(&self) -> &'static str
    {
        ABBREVIATIONS
            .iter()
            .find(|(_, bc)| bc == self)
            .map(|(abbr, _)| *abbr)
            .unwrap_or("L")
    }

    /// символы этого класса не имеют собственного изображения
    #[inline]
    pub fn is_invisible(&self) -> bool
    {
        let abbr = self.abbr();

        NON_PRINTABLE_PREFIXES
            .iter()
            .any(|prefix| abbr.starts_with(prefix))
    }
}

impl TryFrom<&str> for BidiClass
{
    type Error = PropertiesError;

    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        ABBREVIATIONS
            .iter()
            .find(|(value, _)| *value == abbr)
            .map(|(_, bc)| *bc)
            .ok_or_else(|| PropertiesError::UnknownPropertyValue(abbr.to_owned()))
    }
}
