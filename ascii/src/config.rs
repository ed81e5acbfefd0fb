use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// что делать с не-ASCII символом, для которого нет замены
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmappedPolicy
{
    /// оставить как есть
    #[default]
    PassThrough,
    /// удалить
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConverterConfig
{
    pub unmapped: UnmappedPolicy,
    /// режим текста письма: пробел, полученный из не-ASCII разделителя, не пишется после другого пробела
    pub collapse_spaces: bool,
}

impl Default for ConverterConfig
{
    fn default() -> Self
    {
        Self {
            unmapped: UnmappedPolicy::default(),
            collapse_spaces: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DetectorConfig
{
    /// сколько слов просматривать; None - без ограничений
    pub max_words: Option<usize>,
}

/// словарь отслеживаемых слов, в нижнем регистре
///
/// в конфигурации задаётся таблицей `слово = true`; слова со значением false не попадают в словарь
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "HashMap<String, bool>")]
pub struct Dictionary
{
    words: HashSet<String>,
}

impl Dictionary
{
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|word| word.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn insert(&mut self, word: &str) -> bool
    {
        self.words.insert(word.to_lowercase())
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool
    {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize
    {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.words.is_empty()
    }
}

impl From<HashMap<String, bool>> for Dictionary
{
    fn from(value: HashMap<String, bool>) -> Self
    {
        Self::from_words(value.into_iter().filter(|(_, enabled)| *enabled).map(|(word, _)| word))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Config
{
    pub converter: ConverterConfig,
    pub detector: DetectorConfig,
    pub dictionary: Dictionary,
}

#[derive(Debug, Error)]
pub enum ConfigError
{
    #[error("не удалось прочитать конфигурацию: {0}")]
    Io(#[from] std::io::Error),
    #[error("некорректная конфигурация: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Config
{
    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError>
    {
        Ok(toml::from_str(data)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError>
    {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }
}
