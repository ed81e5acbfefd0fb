use std::collections::{BTreeMap, HashMap, HashSet};

use log::warn;

use super::{BuildError, BuildReport};
use crate::properties::Codepoint;

/// третий проход: замены из декомпозиций
///
/// каждый элемент декомпозиции разворачивается в порядке приоритета: собственная декомпозиция (рекурсивно),
/// замена из второго прохода, сам символ. после удаления не-ASCII остатка результат становится заменой,
/// если он не вырожденный
pub fn resolve(
    codepoints: &BTreeMap<u32, Codepoint>,
    confusables: &BTreeMap<u32, String>,
    report: &mut BuildReport,
) -> BTreeMap<u32, String>
{
    let mut resolver = Resolver::new(codepoints, confusables);
    let mut mapping = BTreeMap::new();

    for (code, codepoint) in codepoints.range(0x80 ..) {
        if !codepoint.has_decomposition() || confusables.contains_key(code) {
            continue;
        }

        let expanded = match resolver.expand(*code) {
            Ok(expanded) => expanded,
            Err(error) => {
                warn!("{}", error);
                report.errors.push(error);

                continue;
            }
        };

        match strip_to_ascii(&expanded) {
            Some(ascii) => {
                mapping.insert(*code, ascii);
            }
            None => report.degenerate += 1,
        }
    }

    report.decompositions = mapping.len();

    mapping
}

/// развернутые декомпозиции с кешем: каждый кодпоинт разворачивается не больше одного раза
struct Resolver<'a>
{
    codepoints: &'a BTreeMap<u32, Codepoint>,
    confusables: &'a BTreeMap<u32, String>,
    memo: HashMap<u32, String>,
    /// кодпоинты, которые разворачиваются прямо сейчас - повторное появление означает цикл
    visiting: HashSet<u32>,
}

impl<'a> Resolver<'a>
{
    fn new(codepoints: &'a BTreeMap<u32, Codepoint>, confusables: &'a BTreeMap<u32, String>) -> Self
    {
        Self {
            codepoints,
            confusables,
            memo: HashMap::new(),
            visiting: HashSet::new(),
        }
    }

    fn expand(&mut self, code: u32) -> Result<String, BuildError>
    {
        if let Some(expanded) = self.memo.get(&code) {
            return Ok(expanded.clone());
        }

        if !self.visiting.insert(code) {
            return Err(BuildError::DecompositionCycle(code));
        }

        let expanded = self.expand_uncached(code);
        self.visiting.remove(&code);

        let expanded = expanded?;
        self.memo.insert(code, expanded.clone());

        Ok(expanded)
    }

    fn expand_uncached(&mut self, code: u32) -> Result<String, BuildError>
    {
        let codepoints = self.codepoints;

        if let Some(codepoint) = codepoints.get(&code) {
            if codepoint.has_decomposition() {
                let mut result = String::new();

                for element in codepoint.decomposition.iter() {
                    result.push_str(&self.expand(*element)?);
                }

                return Ok(result);
            }
        }

        if let Some(ascii) = self.confusables.get(&code) {
            return Ok(ascii.clone());
        }

        // некорректный код в декомпозиции не даёт ничего, остаток всё равно будет удалён
        Ok(char::from_u32(code).map(String::from).unwrap_or_default())
    }
}

/// оставить только ASCII-символы
///
/// None, если ничего не осталось, осталась пара пустых скобок, или были удалены не-ASCII символы
/// и остались одни пробелы
pub fn strip_to_ascii(expanded: &str) -> Option<String>
{
    let ascii: String = expanded.chars().filter(char::is_ascii).collect();
    let stripped = ascii.len() != expanded.len();

    match ascii.as_str() {
        "" | "()" => None,
        _ if stripped && ascii.trim().is_empty() => None,
        _ => Some(ascii),
    }
}
