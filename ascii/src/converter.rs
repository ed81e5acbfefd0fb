use crate::config::{ConverterConfig, UnmappedPolicy};
use crate::ligatures::ligature;
use crate::table::MappingTable;

/// конвертер Unicode -> ASCII по визуальному сходству
///
/// для каждого не-ASCII символа, по порядку:
///     - лигатура раскрывается
///     - символ нулевой ширины и комбинирующий символ удаляются
///     - разделитель заменяется пробелом
///     - остальные символы заменяются по таблице, без замены - согласно UnmappedPolicy
///
/// в режиме текста письма серии пробелов, получившиеся на этих шагах, схлопываются в один пробел.
/// ASCII-текст не меняется, поэтому повторная конвертация ничего не меняет
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a>
{
    table: &'a MappingTable,
    config: ConverterConfig,
}

/// куда пишется результат: строка или байты (для входных данных с некорректным UTF-8)
trait Output
{
    fn push_str(&mut self, s: &str);
    fn push_char(&mut self, c: char);
    fn ends_with_space(&self) -> bool;
    /// оставить в конце не больше одного пробела
    fn collapse_trailing_spaces(&mut self);
}

impl Output for String
{
    #[inline]
    fn push_str(&mut self, s: &str)
    {
        String::push_str(self, s)
    }

    #[inline]
    fn push_char(&mut self, c: char)
    {
        self.push(c)
    }

    #[inline]
    fn ends_with_space(&self) -> bool
    {
        self.ends_with(' ')
    }

    fn collapse_trailing_spaces(&mut self)
    {
        let len = self.trim_end_matches(' ').len();

        if len < self.len() {
            self.truncate(len + 1);
        }
    }
}

impl Output for Vec<u8>
{
    #[inline]
    fn push_str(&mut self, s: &str)
    {
        self.extend_from_slice(s.as_bytes())
    }

    #[inline]
    fn push_char(&mut self, c: char)
    {
        let mut buffer = [0; 4];
        self.extend_from_slice(c.encode_utf8(&mut buffer).as_bytes())
    }

    #[inline]
    fn ends_with_space(&self) -> bool
    {
        self.last() == Some(&b' ')
    }

    fn collapse_trailing_spaces(&mut self)
    {
        let len = self.iter().rposition(|b| *b != b' ').map_or(0, |position| position + 1);

        if len < self.len() {
            self.truncate(len + 1);
        }
    }
}

/// состояние пробелов в конце результата (режим текста письма)
///
/// если не Plain - результат заканчивается пробелом
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpaceRun
{
    /// пробелы в конце (если есть) - из ASCII, не трогаем
    Plain,
    /// после пробела удалены символы: следующий пробел сливается с предыдущими
    Stripped,
    /// в конце один пробел, полученный схлопыванием; следующие пробелы пропускаются
    Collapsed,
}

impl<'a> Converter<'a>
{
    pub fn new(table: &'a MappingTable, config: ConverterConfig) -> Self
    {
        Self { table, config }
    }

    pub fn table(&self) -> &'a MappingTable
    {
        self.table
    }

    pub fn config(&self) -> &ConverterConfig
    {
        &self.config
    }

    /// конвертировать текст; пробелы схлопываются, если это задано в настройках
    pub fn convert(&self, input: &str) -> String
    {
        self.convert_str(input, self.config.collapse_spaces)
    }

    /// конвертировать отдельное слово - без схлопывания пробелов
    pub fn convert_word(&self, input: &str) -> String
    {
        self.convert_str(input, false)
    }

    /// конвертировать байты, которые могут не быть корректным UTF-8
    /// некорректные последовательности переносятся в результат без изменений
    pub fn convert_bytes(&self, input: &[u8]) -> Vec<u8>
    {
        let mut result = Vec::with_capacity(input.len());
        let mut run = SpaceRun::Plain;

        for chunk in input.utf8_chunks() {
            self.convert_into(chunk.valid(), self.config.collapse_spaces, &mut run, &mut result);

            if !chunk.invalid().is_empty() {
                result.extend_from_slice(chunk.invalid());
                run = SpaceRun::Plain;
            }
        }

        result
    }

    fn convert_str(&self, input: &str, collapse: bool) -> String
    {
        if input.is_ascii() {
            return input.to_owned();
        }

        let mut result = String::with_capacity(input.len());
        self.convert_into(input, collapse, &mut SpaceRun::Plain, &mut result);

        result
    }

    /// ASCII-участки копируются целиком, не-ASCII символы обрабатываются по одному
    ///
    /// в режиме collapse серия пробелов, в которой есть заменённый разделитель или удалённый символ,
    /// схлопывается в один пробел; серии только из ASCII-пробелов остаются как есть
    fn convert_into(&self, input: &str, collapse: bool, run: &mut SpaceRun, result: &mut impl Output)
    {
        let mut rest = input;

        while !rest.is_empty() {
            if collapse && (*run != SpaceRun::Plain) && rest.starts_with(' ') {
                result.collapse_trailing_spaces();
                rest = rest.trim_start_matches(' ');
                *run = SpaceRun::Collapsed;
            }

            let ascii_len = rest.bytes().position(|b| !b.is_ascii()).unwrap_or(rest.len());

            if ascii_len > 0 {
                result.push_str(&rest[.. ascii_len]);
                rest = &rest[ascii_len ..];
                *run = SpaceRun::Plain;
            }

            let mut chars = rest.chars();

            if let Some(c) = chars.next() {
                self.convert_char(c, collapse, run, result);
                rest = chars.as_str();
            }
        }
    }

    #[inline]
    fn convert_char(&self, c: char, collapse: bool, run: &mut SpaceRun, result: &mut impl Output)
    {
        if let Some(expansion) = ligature(c) {
            result.push_str(expansion);
            *run = SpaceRun::Plain;
            return;
        }

        let entry = self.table.entry(u32::from(c));

        if entry.is_zero_width() || entry.is_combining_mark() {
            return strip(run, &*result);
        }

        if entry.is_space() {
            match collapse && result.ends_with_space() {
                true => result.collapse_trailing_spaces(),
                false => result.push_char(' '),
            }
            *run = SpaceRun::Collapsed;
            return;
        }

        match self.table.ascii_of(entry) {
            Some("") => strip(run, &*result),
            Some(ascii) => {
                result.push_str(ascii);
                *run = SpaceRun::Plain;
            }
            None => match self.config.unmapped {
                UnmappedPolicy::PassThrough => {
                    result.push_char(c);
                    *run = SpaceRun::Plain;
                }
                UnmappedPolicy::Drop => strip(run, &*result),
            },
        }
    }
}

/// символ удалён: пробелы до и после него образуют одну серию
#[inline]
fn strip(run: &mut SpaceRun, result: &impl Output)
{
    if (*run == SpaceRun::Plain) && result.ends_with_space() {
        *run = SpaceRun::Stripped;
    }
}
