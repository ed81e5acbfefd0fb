use std::collections::BTreeMap;

use log::{debug, warn};

use crate::error::{SourceError, SourceErrorKind};
use crate::properties::*;
use crate::ranges::{parse_ranges, RangeProperty};

/// количество колонок в строке UnicodeData.txt
const FIELDS: usize = 15;

/// таблица Unicode - результат импорта UCD (первый проход построения таблицы замен)
#[derive(Debug, Default)]
pub struct Ucd
{
    pub codepoints: BTreeMap<u32, Codepoint>,
    /// строки, которые не удалось разобрать
    pub skipped: Vec<SourceError>,
}

impl Ucd
{
    #[inline]
    pub fn get(&self, code: u32) -> Option<&Codepoint>
    {
        self.codepoints.get(&code)
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.codepoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.codepoints.is_empty()
    }

    /// дополнить кодпоинты данными из файла с диапазонами (Scripts.txt, Blocks.txt, emoji-data.txt)
    /// возвращает количество затронутых кодпоинтов
    pub fn annotate(&mut self, property: RangeProperty, data: &str) -> usize
    {
        let (ranges, skipped) = parse_ranges(data);
        let mut annotated = 0;

        for error in skipped.iter() {
            warn!("{}: {}", property, error);
        }
        self.skipped.extend(skipped);

        for range in ranges.iter() {
            for codepoint in self.codepoints.range_mut(range.first ..= range.last).map(|(_, c)| c) {
                match property {
                    RangeProperty::Script => codepoint.script = Some(range.value.clone()),
                    RangeProperty::Block => codepoint.block = Some(range.value.clone()),
                    RangeProperty::Emoji => match range.value == "Emoji_Presentation" {
                        true => codepoint.is_emoji = true,
                        false => continue,
                    },
                }

                annotated += 1;
            }
        }

        annotated
    }

    /// добавить в таблицу диапазон кодпоинтов с одинаковыми свойствами
    fn insert_range(&mut self, first: Codepoint, last: u32)
    {
        // "<CJK Ideograph, First>" -> "CJK Ideograph"
        let group_name = first
            .name
            .trim_start_matches('<')
            .trim_end_matches('>')
            .trim_end_matches(", First")
            .to_owned();

        // в данном случае, для нас не важны названия символов
        // при необходимости, их можно получить из UCD - extracted/DerivedName.txt

        for code in first.code ..= last {
            let mut codepoint = first.clone();

            codepoint.code = code;
            codepoint.name = format!("{} - {:X}", group_name, code);

            self.codepoints.insert(code, codepoint);
        }
    }
}

/// разбор UnicodeData.txt из UCD
/// строки с ошибками пропускаются и попадают в список skipped
pub fn parse_unicode_data(data: &str) -> Ucd
{
    let mut ucd = Ucd::default();

    // пригодится, когда встретим диапазоны
    let mut range_start: Option<Codepoint> = None;

    for (index, line) in data.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let codepoint = match parse_line(line) {
            Ok(codepoint) => codepoint,
            Err(kind) => {
                let error = SourceError::new(index + 1, kind);

                warn!("UnicodeData.txt: {}", error);
                ucd.skipped.push(error);

                continue;
            }
        };

        // различные блоки, записанные в виде диапазонов: CJK, хангыль, тангутский, и т.д.
        if codepoint.name.starts_with('<') && (codepoint.name != "<control>") {
            // сразу отсекаем Private Use и суррогатные пары
            if codepoint.name.contains("Private Use") || codepoint.name.contains("Surrogate") {
                continue;
            }

            if codepoint.name.ends_with("First>") {
                range_start = Some(codepoint);
                continue;
            }

            if codepoint.name.ends_with("Last>") {
                match range_start.take() {
                    Some(first) => ucd.insert_range(first, codepoint.code),
                    None => {
                        let error = SourceError::new(
                            index + 1,
                            SourceErrorKind::UnmatchedRange(codepoint.name),
                        );

                        warn!("UnicodeData.txt: {}", error);
                        ucd.skipped.push(error);
                    }
                }

                continue;
            }
        }

        ucd.codepoints.insert(codepoint.code, codepoint);
    }

    debug!(
        "UnicodeData.txt: {} кодпоинтов, пропущено строк: {}",
        ucd.codepoints.len(),
        ucd.skipped.len()
    );

    ucd
}

/// разбор одной строки UnicodeData.txt
fn parse_line(line: &str) -> Result<Codepoint, SourceErrorKind>
{
    let props: Vec<&str> = line.split(';').collect();

    if props.len() < FIELDS {
        return Err(SourceErrorKind::FieldCount {
            expected: FIELDS,
            found: props.len(),
        });
    }

    // код и название
    let code = u32::from_str_radix(props[0].trim(), 16).map_err(PropertiesError::from)?;
    let name = props[1].to_owned();

    // категория и CCC
    let gc = GeneralCategory::try_from(props[2])?;
    let ccc = props[3].parse::<u8>().map_err(PropertiesError::from)?;

    // Bidi класс
    let bc = BidiClass::try_from(props[4])?;

    // декомпозиция и тег декомпозиции
    let decomposition = Decomposition::try_from(props[5])?;

    // связанные символы в другом регистре (если есть)
    let simple_uppercase_mapping = case_mapping(props[12])?;
    let simple_lowercase_mapping = case_mapping(props[13])?;

    // колонки 6 - 11 (числовые значения, bidi mirrored, устаревшие названия) и 14 (titlecase)
    // для таблицы замен не нужны

    Ok(Codepoint {
        code,
        name,
        gc,
        ccc,
        bc,
        script: None,
        block: None,
        is_upper: gc.is_uppercase(),
        is_lower: gc.is_lowercase(),
        is_emoji: false,
        is_whitespace: gc.is_separator() || matches!(code, 0x09 ..= 0x0D | 0x85),
        is_printable: !(gc.is_control() || bc.is_invisible()),
        simple_uppercase_mapping,
        simple_lowercase_mapping,
        decomposition_tag: decomposition.tag,
        decomposition: decomposition.codes,
    })
}

/// Simple Uppercase/Lowercase Mapping: пустое поле или один кодпоинт
fn case_mapping(value: &str) -> Result<Option<u32>, PropertiesError>
{
    match value.trim().is_empty() {
        true => Ok(None),
        false => Ok(Some(u32::from_str_radix(value.trim(), 16)?)),
    }
}
