use std::collections::BTreeMap;

use unicode_ascii::table::TableSizes;
use unicode_ascii_source::properties::Codepoint;
use unicode_ascii_source::{AsciiTable, BuildReport, SPECIAL_RANGES};

use crate::encode::RecordGroups;

/// покрытие не-ASCII кодпоинтов таблицей
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage
{
    /// кодпоинты UCD >= 0x80
    pub assigned: usize,
    /// имеют замену
    pub mapped: usize,
    /// имеют только флаги
    pub flags_only: usize,
    /// зарезервированные кодпоинты в пределах таблицы: название диапазона -> количество
    pub reserved: Vec<(String, u32)>,
}

/// сколько кодпоинтов покрыто таблицей, и сколько "дыр" в ней приходится на зарезервированные диапазоны
pub fn coverage(codepoints: &BTreeMap<u32, Codepoint>, table: &AsciiTable) -> Coverage
{
    let mut coverage = Coverage {
        assigned: codepoints.range(0x80 ..).count(),
        ..Default::default()
    };

    for (_, record) in table.iter() {
        match record.ascii.is_some() {
            true => coverage.mapped += 1,
            false => coverage.flags_only += 1,
        }
    }

    let last = match table.iter().next_back() {
        Some((code, _)) => *code,
        None => return coverage,
    };

    for range in SPECIAL_RANGES.iter().filter(|range| range.first <= last) {
        let size = range.last.min(last) - range.first + 1;
        coverage.reserved.push((range.description.clone(), size));
    }

    coverage
}

/// информация о таблице замен
pub fn print(
    filename: &str,
    report: &BuildReport,
    coverage: &Coverage,
    sizes: TableSizes,
    stats: RecordGroups,
)
{
    println!(
        "\n{}:\n  \
        размер индекса: {}\n  \
        размер блока данных: {}\n  \
        размер пула замен: {}\n  \
        общий размер: {}",
        filename,
        sizes.index,
        sizes.data,
        sizes.pool,
        sizes.index + sizes.data + sizes.pool,
    );

    println!(
        "\n  \
        кодпоинтов >= 0x80: {}\n  \
        с заменой: {}\n  \
        только флаги: {}\n  \
        без замены: {}",
        coverage.assigned,
        coverage.mapped,
        coverage.flags_only,
        coverage.assigned.saturating_sub(coverage.mapped + coverage.flags_only),
    );

    println!(
        "\n  \
        групп без ASCII: {}\n  \
        неоднозначных групп: {}\n  \
        конфликтов: {}\n  \
        циклов в декомпозициях: {}\n  \
        вырожденных декомпозиций: {}",
        report.groups_without_ascii,
        report.ambiguous_groups(),
        report.conflicts(),
        report.cycles(),
        report.degenerate,
    );

    println!();

    let mut keys: Vec<&String> = stats.keys().collect();
    keys.sort();

    for key in keys {
        println!("  {}: {}", key, stats[key]);
    }

    if !coverage.reserved.is_empty() {
        println!("\n  зарезервировано в пределах таблицы:");

        for (description, size) in coverage.reserved.iter() {
            println!("    {}: {}", description, size);
        }
    }

    println!();
}
