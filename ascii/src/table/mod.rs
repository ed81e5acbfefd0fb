use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use log::debug;
use thiserror::Error;

pub use parse::Malformed;
pub use parse::Record;

mod parse;

/// количество бит, с помощью которых кодируется смещение внутри блока
pub const BLOCK_BITS: u32 = 7;
/// размер блока
const BLOCK_SIZE: usize = 1 << BLOCK_BITS;

/// комбинирующий символ
pub const FLAG_COMBINING: u32 = 0b_0001;
/// символ нулевой ширины
pub const FLAG_ZERO_WIDTH: u32 = 0b_0010;
/// пробельный символ
pub const FLAG_SPACE: u32 = 0b_0100;
/// у кодпоинта есть замена (возможно, пустая)
pub const FLAG_MAPPED: u32 = 0b_1000;

/// длина замены: биты 4 .. 12
const LENGTH_SHIFT: u32 = 4;
const LENGTH_MASK: u32 = 0xFF;
/// смещение замены в пуле: биты 12 .. 32
const OFFSET_SHIFT: u32 = 12;
const OFFSET_LIMIT: usize = 1 << (32 - OFFSET_SHIFT);

/// встроенная таблица замен
const BUILTIN_DATA: &str = include_str!("./../../../data/ascii.txt");

lazy_static! {
    static ref BUILTIN: Result<MappingTable, LoadError> = MappingTable::parse(BUILTIN_DATA);
}

/// индекс блока для кодпоинта
macro_rules! block_for {
    ($code: expr) => {
        ($code >> BLOCK_BITS) as usize
    };
}

/// ошибка загрузки таблицы замен - без таблицы конвертер работать не может
#[derive(Debug, Error)]
pub enum LoadError
{
    #[error("не удалось прочитать таблицу замен: {0}")]
    Io(#[from] std::io::Error),
    #[error("таблица замен, строка {line}: {reason}")]
    Malformed
    {
        line: usize,
        reason: Malformed,
    },
    #[error("пул замен превысил {0} байт")]
    PoolOverflow(usize),
}

/// размеры таблицы в байтах
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSizes
{
    pub index: usize,
    pub data: usize,
    pub pool: usize,
}

/// таблица замен: кодпоинт -> ASCII-строка и флаги
///
/// кодпоинты разбиты на блоки по 128. индекс хранит номер блока в data, все пустые блоки ссылаются
/// на общую заглушку из нулей в конце data, индекс обрезан по последнему непустому блоку.
///
/// значение в data:
///     биты 0 .. 4 - флаги, 4 .. 12 - длина замены, 12 .. 32 - смещение замены в пуле
#[derive(Debug, Clone)]
pub struct MappingTable
{
    index: Vec<u16>,
    data: Vec<u32>,
    /// пул ASCII-строк; первые 128 байт - все ASCII-символы по порядку, замены из одного символа ссылаются туда
    pool: String,
    /// количество записей
    records: usize,
}

/// значение таблицы для одного кодпоинта
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry(u32);

impl Entry
{
    #[inline]
    pub fn is_combining_mark(self) -> bool
    {
        self.0 & FLAG_COMBINING != 0
    }

    #[inline]
    pub fn is_zero_width(self) -> bool
    {
        self.0 & FLAG_ZERO_WIDTH != 0
    }

    #[inline]
    pub fn is_space(self) -> bool
    {
        self.0 & FLAG_SPACE != 0
    }

    #[inline]
    pub fn is_mapped(self) -> bool
    {
        self.0 & FLAG_MAPPED != 0
    }

    #[inline]
    fn range(self) -> (usize, usize)
    {
        let offset = (self.0 >> OFFSET_SHIFT) as usize;
        let length = ((self.0 >> LENGTH_SHIFT) & LENGTH_MASK) as usize;

        (offset, offset + length)
    }
}

impl MappingTable
{
    /// встроенная таблица (data/ascii.txt), разбирается один раз при первом обращении
    pub fn builtin() -> Result<&'static MappingTable, &'static LoadError>
    {
        BUILTIN.as_ref()
    }

    /// загрузить таблицу из файла
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError>
    {
        let data = fs::read_to_string(path)?;

        Self::parse(&data)
    }

    /// разобрать таблицу; любая ошибка в данных - ошибка загрузки всей таблицы
    pub fn parse(data: &str) -> Result<Self, LoadError>
    {
        let mut records = vec![];

        for (index, line) in data.lines().enumerate() {
            let record = parse::parse_line(line).map_err(|reason| LoadError::Malformed {
                line: index + 1,
                reason,
            })?;

            if let Some(record) = record {
                records.push((index + 1, record));
            }
        }

        let table = Self::from_records(records)?;

        debug!(
            "таблица замен: {} записей, индекс: {} блоков, пул: {} байт",
            table.records,
            table.index.len(),
            table.pool.len()
        );

        Ok(table)
    }

    /// собрать таблицу из записей; номер строки нужен только для сообщений об ошибках
    fn from_records(records: Vec<(usize, Record)>) -> Result<Self, LoadError>
    {
        let mut pool: String = (0 .. 0x80u8).map(char::from).collect();
        let mut offsets: HashMap<String, usize> = HashMap::new();
        let mut values: HashMap<u32, u32> = HashMap::new();

        let count = records.len();

        for (line, record) in records {
            let mut value = record.flags;

            if let Some(ascii) = record.ascii {
                if ascii.len() > LENGTH_MASK as usize {
                    return Err(LoadError::Malformed {
                        line,
                        reason: Malformed::TooLong(LENGTH_MASK as usize),
                    });
                }

                let offset = match ascii.as_bytes() {
                    [byte] => *byte as usize,
                    _ => match offsets.get(&ascii) {
                        Some(offset) => *offset,
                        None => {
                            let offset = pool.len();

                            pool.push_str(&ascii);
                            offsets.insert(ascii.clone(), offset);

                            offset
                        }
                    },
                };

                if offset + ascii.len() > OFFSET_LIMIT {
                    return Err(LoadError::PoolOverflow(OFFSET_LIMIT));
                }

                value |= FLAG_MAPPED
                    | ((ascii.len() as u32) << LENGTH_SHIFT)
                    | ((offset as u32) << OFFSET_SHIFT);
            }

            if values.insert(record.code, value).is_some() {
                return Err(LoadError::Malformed {
                    line,
                    reason: Malformed::Duplicate(record.code),
                });
            }
        }

        let (index, data) = bake_blocks(&values);

        Ok(Self {
            index,
            data,
            pool,
            records: count,
        })
    }

    /// значение таблицы для кодпоинта; для кодпоинтов за пределами индекса - пустое значение
    #[inline]
    pub fn entry(&self, code: u32) -> Entry
    {
        match self.index.get(block_for!(code)) {
            Some(block) => {
                Entry(self.data[((*block as usize) << BLOCK_BITS) | (code as usize & (BLOCK_SIZE - 1))])
            }
            None => Entry(0),
        }
    }

    /// замена для кодпоинта
    #[inline]
    pub fn ascii_for(&self, code: u32) -> Option<&str>
    {
        self.ascii_of(self.entry(code))
    }

    #[inline]
    pub fn ascii_of(&self, entry: Entry) -> Option<&str>
    {
        match entry.is_mapped() {
            true => {
                let (from, to) = entry.range();
                self.pool.get(from .. to)
            }
            false => None,
        }
    }

    #[inline]
    pub fn is_combining_mark(&self, code: u32) -> bool
    {
        self.entry(code).is_combining_mark()
    }

    #[inline]
    pub fn is_zero_width(&self, code: u32) -> bool
    {
        self.entry(code).is_zero_width()
    }

    #[inline]
    pub fn is_space(&self, code: u32) -> bool
    {
        self.entry(code).is_space()
    }

    /// количество записей (замены и флаги)
    pub fn len(&self) -> usize
    {
        self.records
    }

    pub fn is_empty(&self) -> bool
    {
        self.records == 0
    }

    pub fn sizes(&self) -> TableSizes
    {
        TableSizes {
            index: self.index.len() * 2,
            data: self.data.len() * 4,
            pool: self.pool.len(),
        }
    }
}

/// разложить значения по блокам
fn bake_blocks(values: &HashMap<u32, u32>) -> (Vec<u16>, Vec<u32>)
{
    let mut blocks: BTreeMap<usize, [u32; BLOCK_SIZE]> = BTreeMap::new();

    for (code, value) in values.iter() {
        let block = blocks.entry(block_for!(*code)).or_insert([0; BLOCK_SIZE]);
        block[*code as usize & (BLOCK_SIZE - 1)] = *value;
    }

    // индекс обрезан по последнему непустому блоку
    let last_block = match blocks.keys().next_back() {
        Some(block) => *block,
        None => return (vec![], vec![0; BLOCK_SIZE]),
    };

    // пустые блоки ссылаются на заглушку в конце данных
    let stub = blocks.len() as u16;

    let mut index = vec![stub; last_block + 1];
    let mut data = Vec::with_capacity((blocks.len() + 1) << BLOCK_BITS);

    for (block, block_data) in blocks.iter() {
        index[*block] = (data.len() >> BLOCK_BITS) as u16;
        data.extend_from_slice(block_data);
    }

    data.resize(data.len() + BLOCK_SIZE, 0);

    (index, data)
}
