use thiserror::Error;

use crate::properties::PropertiesError;

/// ошибка разбора одной строки исходных данных
/// строка пропускается, разбор продолжается
#[derive(Debug, PartialEq, Eq, Error)]
#[error("строка {line}: {kind}")]
pub struct SourceError
{
    /// номер строки, начиная с 1
    pub line: usize,
    pub kind: SourceErrorKind,
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum SourceErrorKind
{
    #[error("ожидалось не менее {expected} полей, получено {found}")]
    FieldCount
    {
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Property(#[from] PropertiesError),
    #[error("конец диапазона {0:?} без начала")]
    UnmatchedRange(String),
    #[error("продолжение группы без начала")]
    OrphanContinuation,
    #[error("некорректный диапазон {0:?}")]
    InvalidRange(String),
}

impl SourceError
{
    pub fn new(line: usize, kind: impl Into<SourceErrorKind>) -> Self
    {
        Self {
            line,
            kind: kind.into(),
        }
    }
}
