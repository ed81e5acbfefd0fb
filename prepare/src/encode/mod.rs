use std::collections::HashMap;

use unicode_ascii_source::{Flags, MappingSource, TableRecord};

use crate::output::format::format_hex_pairs;

/// группы записей для статистики: название группы -> количество
pub type RecordGroups = HashMap<String, usize>;

/// закодировать запись таблицы в строку вида "00C5;41;" или "0301;-;M"
pub fn encode_record(code: u32, record: &TableRecord, stats: &mut RecordGroups) -> String
{
    let ascii = match &record.ascii {
        Some(ascii) => format_hex_pairs(ascii),
        None => "-".to_owned(),
    };

    let group = match (record.source, &record.ascii) {
        (Some(MappingSource::Confusable), _) => "1. замены из confusables",
        (Some(MappingSource::Decomposition), Some(ascii)) if ascii.len() > 1 => {
            "3. замены из декомпозиций, несколько символов"
        }
        (Some(MappingSource::Decomposition), _) => "2. замены из декомпозиций, один символ",
        (None, _) => "4. только флаги",
    };

    *stats.entry(group.to_owned()).or_default() += 1;

    format!("{:04X};{};{}", code, ascii, encode_flags(&record.flags))
}

/// флаги: M - комбинирующий, Z - нулевой ширины, S - пробельный
pub fn encode_flags(flags: &Flags) -> String
{
    [(flags.combining, 'M'), (flags.zero_width, 'Z'), (flags.space, 'S')]
        .iter()
        .filter_map(|(set, flag)| set.then_some(*flag))
        .collect()
}
