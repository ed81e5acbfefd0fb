#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod converter;
pub mod detector;
pub mod host;
pub mod ligatures;
pub mod table;

pub use config::Config;
pub use config::ConverterConfig;
pub use config::DetectorConfig;
pub use config::Dictionary;
pub use config::UnmappedPolicy;

pub use converter::Converter;

pub use detector::count_obfuscated_hits;
pub use detector::ObfuscationDetector;

pub use table::LoadError;
pub use table::MappingTable;

/// конвертировать строку встроенной таблицей с настройками по умолчанию
pub fn convert_to_ascii(input: &str) -> Result<String, &'static LoadError>
{
    let table = MappingTable::builtin()?;

    Ok(Converter::new(table, ConverterConfig::default()).convert(input))
}
