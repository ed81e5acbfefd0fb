use super::PropertiesError;

/// декомпозиция
/// берется из UCD: шестая колонка UnicodeData.txt, например "<compat> 0020 0308" или "0059 0301"
///
/// для построения таблицы замен каноническая декомпозиция и декомпозиция совместимости равноправны,
/// тег сохраняем только для статистики
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decomposition
{
    pub codes: Vec<u32>,
    pub tag: Option<DecompositionTag>,
}

impl TryFrom<&str> for Decomposition
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        let value = value.trim();

        let (tag, codes) = match value.starts_with('<') {
            true => match value.split_once(' ') {
                Some((tag, codes)) => (Some(DecompositionTag::try_from(tag)?), codes),
                None => return Err(PropertiesError::UnknownPropertyValue(value.to_owned())),
            },
            false => (None, value),
        };

        let codes = codes
            .split_whitespace()
            .map(|code| u32::from_str_radix(code, 16))
            .collect::<Result<Vec<u32>, _>>()?;

        Ok(Self { codes, tag })
    }
}

/// тег декомпозиции совместимости
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DecompositionTag
{
    Font,
    NoBreak,
    Initial,
    Medial,
    Final,
    Isolated,
    Circle,
    Super,
    Sub,
    Vertical,
    Wide,
    Narrow,
    Small,
    Square,
    Fraction,
    Compat,
}

const TAGS: [(&str, DecompositionTag); 16] = [
    ("<font>", DecompositionTag::Font),
    ("<noBreak>", DecompositionTag::NoBreak),
    ("<initial>", DecompositionTag::Initial),
    ("<medial>", DecompositionTag::Medial),
    ("<final>", DecompositionTag::Final),
    ("<isolated>", DecompositionTag::Isolated),
    ("<circle>", DecompositionTag::Circle),
    ("<super>", DecompositionTag::Super),
    ("<sub>", DecompositionTag::Sub),
    ("<vertical>", DecompositionTag::Vertical),
    ("<wide>", DecompositionTag::Wide),
    ("<narrow>", DecompositionTag::Narrow),
    ("<small>", DecompositionTag::Small),
    ("<square>", DecompositionTag::Square),
    ("<fraction>", DecompositionTag::Fraction),
    ("<compat>", DecompositionTag::Compat),
];

impl TryFrom<&str> for DecompositionTag
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        TAGS.iter()
            .find(|(tag, _)| *tag == value)
            .map(|(_, tag)| *tag)
            .ok_or_else(|| PropertiesError::UnknownPropertyValue(value.to_owned()))
    }
}

impl core::fmt::Display for DecompositionTag
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        let tag = TAGS
            .iter()
            .find(|(_, tag)| tag == self)
            .map(|(value, _)| *value)
            .unwrap_or_default();

        write!(f, "{}", tag)
    }
}
