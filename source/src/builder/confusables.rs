use std::collections::BTreeMap;

use log::warn;

use super::{BuildError, BuildReport};
use crate::confusables::ConfusableGroup;

/// второй проход: замены из групп визуально неразличимых символов
///
/// в группе ровно один ASCII-символ - все остальные одиночные кодпоинты группы заменяются на него,
/// ASCII-символов нет - группа пропускается, больше одного - группа неоднозначна и тоже пропускается
pub fn resolve(groups: &[ConfusableGroup], report: &mut BuildReport) -> BTreeMap<u32, String>
{
    let mut mapping: BTreeMap<u32, String> = BTreeMap::new();

    for group in groups.iter() {
        let ascii = match group.ascii_members().as_slice() {
            [] => {
                report.groups_without_ascii += 1;
                continue;
            }
            [ascii] => *ascii,
            _ => {
                let error = BuildError::AmbiguousGroup(group.describe());

                warn!("{}", error);
                report.errors.push(error);

                continue;
            }
        };

        // ascii_members гарантирует, что это печатаемый ASCII
        let value = match char::from_u32(ascii) {
            Some(c) => c.to_string(),
            None => continue,
        };

        for code in group.single_codepoints() {
            match mapping.get(&code) {
                None => {
                    mapping.insert(code, value.clone());
                }
                Some(existing) if *existing == value => (),
                Some(existing) => {
                    let error = BuildError::Conflict {
                        code,
                        existing: existing.clone(),
                        rejected: value.clone(),
                    };

                    warn!("{}", error);
                    report.errors.push(error);
                }
            }
        }
    }

    report.confusables = mapping.len();

    mapping
}
