use std::collections::HashMap;

use log::{debug, warn};

use crate::error::{SourceError, SourceErrorKind};
use crate::properties::PropertiesError;

/// группа визуально неразличимых последовательностей кодпоинтов
/// первый элемент - цель из confusables.txt, далее - источники в порядке появления
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusableGroup
{
    pub members: Vec<Vec<u32>>,
}

impl ConfusableGroup
{
    fn new(target: Vec<u32>) -> Self
    {
        Self {
            members: vec![target],
        }
    }

    fn push(&mut self, member: Vec<u32>)
    {
        if !self.members.contains(&member) {
            self.members.push(member);
        }
    }

    /// ASCII-элементы группы: один печатаемый символ из диапазона 0x20 ..= 0x7E
    pub fn ascii_members(&self) -> Vec<u32>
    {
        self.members
            .iter()
            .filter_map(|member| match member.as_slice() {
                [code] if is_printable_ascii(*code) => Some(*code),
                _ => None,
            })
            .collect()
    }

    /// элементы группы, состоящие из одного не-ASCII кодпоинта
    pub fn single_codepoints(&self) -> impl Iterator<Item = u32> + '_
    {
        self.members.iter().filter_map(|member| match member.as_slice() {
            [code] if *code >= 0x80 => Some(*code),
            _ => None,
        })
    }

    /// группа в читаемом виде, для логов
    pub fn describe(&self) -> String
    {
        self.members
            .iter()
            .map(|member| {
                member
                    .iter()
                    .map(|code| format!("U+{:04X}", code))
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<String>>()
            .join(", ")
    }
}

#[inline]
pub fn is_printable_ascii(code: u32) -> bool
{
    (0x20 ..= 0x7E).contains(&code)
}

/// разбор confusables.txt
///
/// строка "источник ; цель ; тип # комментарий" добавляет источник в группу своей цели;
/// строка с пустым первым полем продолжает предыдущую группу - её цель становится ещё одним элементом группы
pub fn parse_confusables(data: &str) -> (Vec<ConfusableGroup>, Vec<SourceError>)
{
    let mut groups: Vec<ConfusableGroup> = vec![];
    let mut by_target: HashMap<Vec<u32>, usize> = HashMap::new();
    let mut skipped = vec![];

    // группа, к которой относится предыдущая строка
    let mut current: Option<usize> = None;

    for (index, line) in data.lines().enumerate() {
        let line = line.trim_start_matches('\u{FEFF}');

        let line = match line.split_once('#') {
            Some((line, _)) => line,
            None => line,
        };

        if line.trim().is_empty() {
            continue;
        }

        let (source, target) = match parse_line(line) {
            Ok(fields) => fields,
            Err(kind) => {
                let error = SourceError::new(index + 1, kind);

                warn!("confusables.txt: {}", error);
                skipped.push(error);

                continue;
            }
        };

        let group = match source {
            // продолжение предыдущей группы
            None => match current {
                Some(group) => {
                    groups[group].push(target);
                    continue;
                }
                None => {
                    let error = SourceError::new(index + 1, SourceErrorKind::OrphanContinuation);

                    warn!("confusables.txt: {}", error);
                    skipped.push(error);

                    continue;
                }
            },
            Some(source) => {
                let group = *by_target.entry(target.clone()).or_insert_with(|| {
                    groups.push(ConfusableGroup::new(target));
                    groups.len() - 1
                });

                groups[group].push(source);
                group
            }
        };

        current = Some(group);
    }

    debug!(
        "confusables.txt: {} групп, пропущено строк: {}",
        groups.len(),
        skipped.len()
    );

    (groups, skipped)
}

/// источник (None для строки-продолжения) и цель
fn parse_line(line: &str) -> Result<(Option<Vec<u32>>, Vec<u32>), SourceErrorKind>
{
    let fields: Vec<&str> = line.split(';').collect();

    if fields.len() < 2 {
        return Err(SourceErrorKind::FieldCount {
            expected: 2,
            found: fields.len(),
        });
    }

    let source = match fields[0].trim().is_empty() {
        true => None,
        false => Some(parse_codes(fields[0])?),
    };

    let target = parse_codes(fields[1])?;

    if target.is_empty() {
        return Err(SourceErrorKind::FieldCount {
            expected: 2,
            found: 1,
        });
    }

    Ok((source, target))
}

fn parse_codes(field: &str) -> Result<Vec<u32>, PropertiesError>
{
    field
        .split_whitespace()
        .map(|code| u32::from_str_radix(code, 16).map_err(PropertiesError::from))
        .collect()
}
