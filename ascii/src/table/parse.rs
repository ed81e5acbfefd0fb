use thiserror::Error;

use super::{FLAG_COMBINING, FLAG_SPACE, FLAG_ZERO_WIDTH};

/// запись файла с таблицей замен
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record
{
    pub code: u32,
    /// None - замены нет, только флаги
    pub ascii: Option<String>,
    pub flags: u32,
}

/// почему строка таблицы замен не разобрана
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed
{
    #[error("ожидалось 3 поля, получено {0}")]
    FieldCount(usize),
    #[error("некорректный кодпоинт {0:?}")]
    InvalidCode(String),
    #[error("U+{0:04X}: ASCII-символ не может иметь замену")]
    AsciiCode(u32),
    #[error("U+{0:04X}: повторная запись")]
    Duplicate(u32),
    #[error("некорректный байт {0:?}")]
    InvalidByte(String),
    #[error("байт 0x{0:02X} за пределами ASCII")]
    NonAscii(u8),
    #[error("неизвестный флаг {0:?}")]
    UnknownFlag(char),
    #[error("замена длиннее {0} байт")]
    TooLong(usize),
}

/// разобрать одну строку вида "00C5;41;" или "0301;-;M"
/// комментарии и пустые строки - Ok(None)
pub fn parse_line(line: &str) -> Result<Option<Record>, Malformed>
{
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(';').collect();

    if fields.len() != 3 {
        return Err(Malformed::FieldCount(fields.len()));
    }

    let code = u32::from_str_radix(fields[0].trim(), 16)
        .ok()
        .filter(|code| char::from_u32(*code).is_some())
        .ok_or_else(|| Malformed::InvalidCode(fields[0].to_owned()))?;

    if code < 0x80 {
        return Err(Malformed::AsciiCode(code));
    }

    let ascii = match fields[1].trim() {
        "-" => None,
        pairs => Some(parse_hex_pairs(pairs)?),
    };

    let mut flags = 0;

    for flag in fields[2].trim().chars() {
        flags |= match flag {
            'M' => FLAG_COMBINING,
            'Z' => FLAG_ZERO_WIDTH,
            'S' => FLAG_SPACE,
            _ => return Err(Malformed::UnknownFlag(flag)),
        };
    }

    Ok(Some(Record { code, ascii, flags }))
}

/// "66 66 69" -> "ffi"
fn parse_hex_pairs(pairs: &str) -> Result<String, Malformed>
{
    let mut result = String::new();

    for pair in pairs.split_whitespace() {
        if pair.len() != 2 {
            return Err(Malformed::InvalidByte(pair.to_owned()));
        }

        let byte =
            u8::from_str_radix(pair, 16).map_err(|_| Malformed::InvalidByte(pair.to_owned()))?;

        if !byte.is_ascii() {
            return Err(Malformed::NonAscii(byte));
        }

        result.push(char::from(byte));
    }

    Ok(result)
}
