use std::collections::{btree_map, BTreeMap};
use std::ops::RangeInclusive;

use log::debug;
use thiserror::Error;

use crate::confusables::ConfusableGroup;
use crate::properties::Codepoint;

mod confusables;
mod decomposition;

pub use decomposition::strip_to_ascii;

/// символы нулевой ширины и невидимые управляющие символы, удаляемые при конвертации
pub const ZERO_WIDTH: [RangeInclusive<u32>; 6] = [
    // soft hyphen
    0xAD ..= 0xAD,
    // combining grapheme joiner
    0x34F ..= 0x34F,
    // zero width space, ZWNJ, ZWJ, LRM, RLM
    0x200B ..= 0x200F,
    // LRE, RLE, PDF
    0x202A ..= 0x202C,
    // word joiner
    0x2060 ..= 0x2060,
    // byte order mark
    0xFEFF ..= 0xFEFF,
];

#[inline]
pub fn is_zero_width(code: u32) -> bool
{
    ZERO_WIDTH.iter().any(|range| range.contains(&code))
}

/// откуда взята ASCII-замена
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingSource
{
    /// группа визуально неразличимых символов (второй проход)
    Confusable,
    /// развернутая декомпозиция (третий проход)
    Decomposition,
}

/// признаки кодпоинта, которые нужны конвертеру помимо замены
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags
{
    /// комбинирующий символ (категория M)
    pub combining: bool,
    /// символ нулевой ширины
    pub zero_width: bool,
    /// пробельный символ: категория Z и NEL (U+0085)
    pub space: bool,
}

impl Flags
{
    pub fn of(codepoint: &Codepoint) -> Self
    {
        Self {
            combining: codepoint.gc.is_mark(),
            zero_width: is_zero_width(codepoint.code),
            space: codepoint.is_whitespace,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        !(self.combining || self.zero_width || self.space)
    }
}

/// запись итоговой таблицы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRecord
{
    pub ascii: Option<String>,
    pub source: Option<MappingSource>,
    pub flags: Flags,
}

/// итоговая таблица замен: только кодпоинты >= 0x80, у которых есть замена или признаки
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AsciiTable
{
    pub records: BTreeMap<u32, TableRecord>,
}

impl AsciiTable
{
    #[inline]
    pub fn get(&self, code: u32) -> Option<&TableRecord>
    {
        self.records.get(&code)
    }

    #[inline]
    pub fn ascii_for(&self, code: u32) -> Option<&str>
    {
        self.records.get(&code).and_then(|record| record.ascii.as_deref())
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.records.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, u32, TableRecord>
    {
        self.records.iter()
    }
}

/// ошибки построения таблицы; ни одна из них не прерывает построение
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError
{
    #[error("U+{0:04X}: цикл в декомпозиции")]
    DecompositionCycle(u32),
    #[error("U+{code:04X}: уже сопоставлен {existing:?}, замена {rejected:?} отброшена")]
    Conflict
    {
        code: u32,
        existing: String,
        rejected: String,
    },
    #[error("группа [{0}]: больше одного ASCII-символа, группа пропущена")]
    AmbiguousGroup(String),
}

/// итоги построения таблицы
#[derive(Debug, Clone, Default)]
pub struct BuildReport
{
    /// замены из групп confusables
    pub confusables: usize,
    /// замены из декомпозиций
    pub decompositions: usize,
    /// группы без ASCII-символа
    pub groups_without_ascii: usize,
    /// декомпозиции, от которых после удаления не-ASCII ничего осмысленного не осталось
    pub degenerate: usize,
    pub errors: Vec<BuildError>,
}

impl BuildReport
{
    pub fn ambiguous_groups(&self) -> usize
    {
        self.count(|e| matches!(e, BuildError::AmbiguousGroup(_)))
    }

    pub fn cycles(&self) -> usize
    {
        self.count(|e| matches!(e, BuildError::DecompositionCycle(_)))
    }

    pub fn conflicts(&self) -> usize
    {
        self.count(|e| matches!(e, BuildError::Conflict { .. }))
    }

    fn count(&self, filter: impl Fn(&BuildError) -> bool) -> usize
    {
        self.errors.iter().filter(|e| filter(e)).count()
    }
}

/// построить таблицу замен по импортированным данным UCD (первый проход) и группам confusables:
///     - второй проход: замены из групп визуально неразличимых символов
///     - третий проход: замены из развернутых декомпозиций, только для кодпоинтов без замены
///
/// функция чистая: входные данные не меняются, результат - новое значение
pub fn build(
    codepoints: &BTreeMap<u32, Codepoint>,
    groups: &[ConfusableGroup],
) -> (AsciiTable, BuildReport)
{
    let mut report = BuildReport::default();

    let confusables = confusables::resolve(groups, &mut report);
    let decompositions = decomposition::resolve(codepoints, &confusables, &mut report);

    let mut records = BTreeMap::new();

    let mapped = confusables
        .into_iter()
        .map(|(code, ascii)| (code, ascii, MappingSource::Confusable))
        .chain(
            decompositions
                .into_iter()
                .map(|(code, ascii)| (code, ascii, MappingSource::Decomposition)),
        );

    for (code, ascii, source) in mapped {
        let flags = codepoints.get(&code).map(Flags::of).unwrap_or_default();

        records.insert(
            code,
            TableRecord {
                ascii: Some(ascii),
                source: Some(source),
                flags,
            },
        );
    }

    // кодпоинты без замены, но с признаками
    for (code, codepoint) in codepoints.range(0x80 ..) {
        let flags = Flags::of(codepoint);

        if flags.is_empty() || records.contains_key(code) {
            continue;
        }

        records.insert(
            *code,
            TableRecord {
                ascii: None,
                source: None,
                flags,
            },
        );
    }

    debug!(
        "таблица замен: {} записей, confusables: {}, декомпозиции: {}, ошибок: {}",
        records.len(),
        report.confusables,
        report.decompositions,
        report.errors.len()
    );

    (AsciiTable { records }, report)
}
