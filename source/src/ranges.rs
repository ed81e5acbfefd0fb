use crate::error::{SourceError, SourceErrorKind};
use crate::properties::PropertiesError;

/// какое свойство описывает файл с диапазонами
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeProperty
{
    /// Scripts.txt
    Script,
    /// Blocks.txt
    Block,
    /// emoji-data.txt
    Emoji,
}

impl core::fmt::Display for RangeProperty
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        let name = match self {
            RangeProperty::Script => "Scripts.txt",
            RangeProperty::Block => "Blocks.txt",
            RangeProperty::Emoji => "emoji-data.txt",
        };

        write!(f, "{}", name)
    }
}

/// строка файла свойств UCD: "0041..005A    ; Latin # L&  [26] ..." или "00AA ; Latin # Lo ..."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEntry
{
    pub first: u32,
    pub last: u32,
    pub value: String,
}

/// разбор файла свойств с диапазонами
pub fn parse_ranges(data: &str) -> (Vec<RangeEntry>, Vec<SourceError>)
{
    let mut entries = vec![];
    let mut skipped = vec![];

    for (index, line) in data.lines().enumerate() {
        // комментарий после #
        let line = match line.split_once('#') {
            Some((line, _)) => line,
            None => line,
        };

        if line.trim().is_empty() {
            continue;
        }

        match parse_range_line(line) {
            Ok(entry) => entries.push(entry),
            Err(kind) => skipped.push(SourceError::new(index + 1, kind)),
        }
    }

    (entries, skipped)
}

fn parse_range_line(line: &str) -> Result<RangeEntry, SourceErrorKind>
{
    let (range, value) = match line.split_once(';') {
        Some(fields) => fields,
        None => {
            return Err(SourceErrorKind::FieldCount {
                expected: 2,
                found: 1,
            })
        }
    };

    let range = range.trim();

    let (first, last) = match range.split_once("..") {
        Some((first, last)) => (first, last),
        None => (range, range),
    };

    let first = u32::from_str_radix(first, 16).map_err(PropertiesError::from)?;
    let last = u32::from_str_radix(last, 16).map_err(PropertiesError::from)?;

    if first > last {
        return Err(SourceErrorKind::InvalidRange(range.to_owned()));
    }

    Ok(RangeEntry {
        first,
        last,
        value: value.trim().to_owned(),
    })
}

/// зарезервированные диапазоны: суррогаты, Private Use, несимволы
/// используются только в статистике "дыр" таблицы замен, конвертер о них ничего не знает
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialRange
{
    pub first: u32,
    pub last: u32,
    pub description: String,
}

impl SpecialRange
{
    fn new(first: u32, last: u32, description: impl Into<String>) -> Self
    {
        Self {
            first,
            last,
            description: description.into(),
        }
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        (self.first ..= self.last).contains(&code)
    }

    /// количество кодпоинтов в диапазоне
    #[inline]
    pub fn size(&self) -> u32
    {
        self.last - self.first + 1
    }
}

lazy_static! {
    /// зарезервированные диапазоны, отсортированы по первому кодпоинту
    pub static ref SPECIAL_RANGES: Vec<SpecialRange> = special_ranges();
}

/// в какой зарезервированный диапазон попадает кодпоинт
pub fn special_range(code: u32) -> Option<&'static SpecialRange>
{
    SPECIAL_RANGES.iter().find(|range| range.contains(code))
}

fn special_ranges() -> Vec<SpecialRange>
{
    let mut ranges = vec![
        SpecialRange::new(0xD800, 0xDB7F, "High Surrogates"),
        SpecialRange::new(0xDB80, 0xDBFF, "High Private Use Surrogates"),
        SpecialRange::new(0xDC00, 0xDFFF, "Low Surrogates"),
        SpecialRange::new(0xE000, 0xF8FF, "Private Use Area"),
        SpecialRange::new(0xFDD0, 0xFDEF, "Noncharacters"),
        SpecialRange::new(0xF0000, 0xFFFFD, "Supplementary Private Use Area-A"),
        SpecialRange::new(0x100000, 0x10FFFD, "Supplementary Private Use Area-B"),
    ];

    // два последних кодпоинта каждой плоскости - несимволы
    for plane in 0 ..= 0x10 {
        let last = (plane << 16) | 0xFFFF;
        ranges.push(SpecialRange::new(
            last - 1,
            last,
            format!("Noncharacters, plane {}", plane),
        ));
    }

    ranges.sort_by_key(|range| range.first);

    ranges
}
