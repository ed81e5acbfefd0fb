#[macro_use]
extern crate lazy_static;

pub mod builder;
pub mod confusables;
pub mod error;
pub mod properties;
pub mod ranges;
pub mod unicode;

pub use builder::build;
pub use builder::AsciiTable;
pub use builder::BuildError;
pub use builder::BuildReport;
pub use builder::Flags;
pub use builder::MappingSource;
pub use builder::TableRecord;

pub use confusables::parse_confusables;
pub use confusables::ConfusableGroup;

pub use error::SourceError;
pub use error::SourceErrorKind;

pub use ranges::special_range;
pub use ranges::RangeProperty;
pub use ranges::SpecialRange;
pub use ranges::SPECIAL_RANGES;

pub use unicode::parse_unicode_data;
pub use unicode::Ucd;
