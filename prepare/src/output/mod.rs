use std::io::{self, Write};

use unicode_ascii_source::AsciiTable;

use crate::encode::{encode_record, RecordGroups};

pub mod format;
pub mod stats;

/// пишем таблицу замен
pub fn write(table: &AsciiTable, sources: &str, file: &mut impl Write) -> io::Result<RecordGroups>
{
    let mut stats = RecordGroups::new();

    writeln!(file, "# таблица замен Unicode -> ASCII")?;
    writeln!(
        file,
        "# формат: кодпоинт;замена (hex-байты через пробел, '-' - нет замены);\
        флаги (M - комбинирующий, Z - нулевой ширины, S - пробельный)"
    )?;
    writeln!(file, "# источник: {}", sources)?;
    writeln!(file)?;

    for (code, record) in table.iter() {
        writeln!(file, "{}", encode_record(*code, record, &mut stats))?;
    }

    Ok(stats)
}
