use thiserror::Error;

mod bidi_class;
mod decomposition;
mod general_category;

pub use bidi_class::BidiClass;
pub use decomposition::Decomposition;
pub use decomposition::DecompositionTag;
pub use general_category::GeneralCategory;

/// кодпоинт Unicode
/// источник - UCD: UnicodeData.txt, дополнительно - Scripts.txt, Blocks.txt, emoji-data.txt
///
/// ASCII-замена здесь не хранится: её вычисляет сборщик таблицы (см. builder) в виде отдельного значения
#[derive(Debug, Clone)]
pub struct Codepoint
{
    /// код символа
    pub code: u32,
    /// название
    pub name: String,
    /// категория символа (general category)
    pub gc: GeneralCategory,
    /// класс канонического комбинирования (canonical combining class)
    pub ccc: u8,
    /// класс направления (bidi class)
    pub bc: BidiClass,
    /// письменность (Scripts.txt), если известна
    pub script: Option<String>,
    /// блок (Blocks.txt), если известен
    pub block: Option<String>,
    pub is_upper: bool,
    pub is_lower: bool,
    /// Emoji_Presentation (emoji-data.txt)
    pub is_emoji: bool,
    pub is_whitespace: bool,
    /// символ имеет собственное изображение
    pub is_printable: bool,
    /// соответствующая прописная буква
    pub simple_uppercase_mapping: Option<u32>,
    /// соответствующая строчная буква
    pub simple_lowercase_mapping: Option<u32>,
    /// тег декомпозиции
    pub decomposition_tag: Option<DecompositionTag>,
    /// декомпозиция (в UCD - в сжатом виде, элементы могут иметь свою декомпозицию)
    pub decomposition: Vec<u32>,
}

impl Codepoint
{
    #[inline]
    pub fn has_decomposition(&self) -> bool
    {
        !self.decomposition.is_empty()
    }

    #[inline]
    pub fn as_char(&self) -> Option<char>
    {
        char::from_u32(self.code)
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum PropertiesError
{
    #[error("неизвестное значение свойства: {0:?}")]
    UnknownPropertyValue(String),
    #[error("некорректный код: {0}")]
    InvalidCode(#[from] core::num::ParseIntError),
}
