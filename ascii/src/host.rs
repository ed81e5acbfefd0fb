use log::debug;
use thiserror::Error;

use crate::config::Dictionary;
use crate::converter::Converter;
use crate::detector::count_obfuscated_hits;

/// источник текста письма
pub trait TextSource
{
    fn text_lines(&self) -> Vec<String>;
}

/// правила хоста: получают сконвертированные строки и сами считают совпадения
pub trait RuleMatcher
{
    fn match_lines(&mut self, lines: &[String]);
}

/// проверки, которые хост вызывает по имени
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check
{
    /// количество замаскированных слов из словаря
    ObfuscatedWords
    {
        max_words: Option<usize>
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError
{
    #[error("неизвестная проверка {0:?}")]
    Unknown(String),
    #[error("{check}: некорректный аргумент {argument:?}")]
    InvalidArgument
    {
        check: String,
        argument: String,
    },
}

/// что нужно проверкам для работы
#[derive(Clone, Copy)]
pub struct CheckContext<'a>
{
    pub converter: &'a Converter<'a>,
    pub dictionary: &'a Dictionary,
}

impl Check
{
    /// имя проверки и необязательный числовой аргумент, как они записаны в правилах хоста
    pub fn parse(name: &str, argument: Option<&str>) -> Result<Self, CheckError>
    {
        match name.trim() {
            "obfuscated_words" => {
                let max_words = match argument.map(str::trim) {
                    None | Some("") => None,
                    Some(argument) => match argument.parse::<usize>() {
                        Ok(max_words) => Some(max_words),
                        Err(_) => {
                            return Err(CheckError::InvalidArgument {
                                check: name.to_owned(),
                                argument: argument.to_owned(),
                            })
                        }
                    },
                };

                Ok(Check::ObfuscatedWords { max_words })
            }
            _ => Err(CheckError::Unknown(name.to_owned())),
        }
    }

    pub fn name(&self) -> &'static str
    {
        match self {
            Check::ObfuscatedWords { .. } => "obfuscated_words",
        }
    }

    pub fn evaluate(&self, context: &CheckContext, source: &impl TextSource) -> usize
    {
        let result = match self {
            Check::ObfuscatedWords { max_words } => count_obfuscated_hits(
                context.converter,
                &source.text_lines(),
                context.dictionary,
                *max_words,
            ),
        };

        debug!("{}: {}", self.name(), result);

        result
    }
}

/// сконвертировать строки письма и передать их правилам хоста
pub fn scan_message(converter: &Converter, source: &impl TextSource, matcher: &mut impl RuleMatcher)
{
    let lines: Vec<String> = source
        .text_lines()
        .iter()
        .map(|line| converter.convert(line))
        .collect();

    matcher.match_lines(&lines);
}
