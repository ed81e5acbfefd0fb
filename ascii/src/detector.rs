use std::collections::BTreeSet;

use icu_normalizer::ComposingNormalizer;
use log::debug;

use crate::config::Dictionary;
use crate::converter::Converter;
use crate::ligatures::fold_ligatures;

/// поиск отслеживаемых слов, записанных с подменой символов
///
/// слово считается замаскированным, если конвертация его изменила, а результат в нижнем регистре есть в словаре.
/// слово только из ASCII-символов не учитывается, даже если оно есть в словаре
pub struct ObfuscationDetector<'a>
{
    converter: &'a Converter<'a>,
    normalizer: ComposingNormalizer,
}

impl<'a> ObfuscationDetector<'a>
{
    pub fn new(converter: &'a Converter<'a>) -> Self
    {
        Self {
            converter,
            normalizer: ComposingNormalizer::new_nfc(),
        }
    }

    /// различные найденные слова (после конвертации, в нижнем регистре)
    ///
    /// max_words ограничивает количество просмотренных слов во всех строках
    pub fn obfuscated_hits<S>(
        &self,
        lines: &[S],
        dictionary: &Dictionary,
        max_words: Option<usize>,
    ) -> BTreeSet<String>
    where
        S: AsRef<str>,
    {
        let mut hits = BTreeSet::new();
        let mut scanned = 0;

        'lines: for line in lines {
            let composed = self.normalizer.normalize(line.as_ref());
            let folded = fold_ligatures(&composed);

            for token in folded.split_whitespace() {
                let token = trim_token(token);

                if token.is_empty() {
                    continue;
                }

                if max_words.is_some_and(|max_words| scanned >= max_words) {
                    break 'lines;
                }

                scanned += 1;

                if token.is_ascii() {
                    continue;
                }

                let converted = self.converter.convert_word(token);

                if converted == token {
                    continue;
                }

                let converted = converted.to_lowercase();

                if dictionary.contains(&converted) {
                    debug!("замаскированное слово: {:?} -> {:?}", token, converted);
                    hits.insert(converted);
                }
            }
        }

        hits
    }

    /// количество различных найденных слов
    pub fn count_hits<S>(&self, lines: &[S], dictionary: &Dictionary, max_words: Option<usize>) -> usize
    where
        S: AsRef<str>,
    {
        self.obfuscated_hits(lines, dictionary, max_words).len()
    }
}

/// количество различных отслеживаемых слов, записанных с подменой символов
pub fn count_obfuscated_hits<S>(
    converter: &Converter,
    lines: &[S],
    dictionary: &Dictionary,
    max_words: Option<usize>,
) -> usize
where
    S: AsRef<str>,
{
    ObfuscationDetector::new(converter).count_hits(lines, dictionary, max_words)
}

/// убрать по краям слова всё, кроме букв, цифр и '_': пунктуацию, комбинирующие символы, символы форматирования
fn trim_token(token: &str) -> &str
{
    token.trim_matches(|c: char| !(c.is_alphanumeric() || c == '_'))
}
