use icu_normalizer::DecomposingNormalizer;
use unicode_ascii::{convert_to_ascii, Converter, ConverterConfig, MappingTable, UnmappedPolicy};

/// сравниваем с заранее подготовленными результатами
#[test]
fn expected_conversions()
{
    let files = crate::data::files();
    let expected = crate::data::expected();

    assert_eq!(files.len(), expected.len());

    for ((name, text), (expected_name, expected)) in files.iter().zip(expected.iter()) {
        assert_eq!(name, expected_name);
        assert_eq!(&convert_to_ascii(text).unwrap(), expected, "{}", name);
    }
}

/// повторная конвертация ничего не меняет, результат не зависит от количества вызовов
#[test]
fn idempotent_and_deterministic()
{
    let table = MappingTable::builtin().unwrap();

    for config in [
        ConverterConfig::default(),
        ConverterConfig {
            unmapped: UnmappedPolicy::Drop,
            collapse_spaces: false,
        },
    ] {
        let converter = Converter::new(table, config);

        for (name, text) in crate::data::files() {
            let once = converter.convert(&text);

            assert_eq!(converter.convert(&once), once, "{}", name);
            assert_eq!(converter.convert(&text), once, "{}", name);

            if config.unmapped == UnmappedPolicy::Drop {
                assert!(once.is_ascii(), "{}", name);
            }
        }
    }
}

/// разложенные и составные формы конвертируются одинаково
#[test]
fn decomposed_input()
{
    let nfd = DecomposingNormalizer::new_nfd();
    let converter = Converter::new(MappingTable::builtin().unwrap(), ConverterConfig::default());

    for (name, text) in crate::data::files() {
        if name == "greek" || name == "russian" {
            // без замены остаются разложенные символы, а не составные
            continue;
        }

        assert_eq!(
            converter.convert(&nfd.normalize(&text)),
            converter.convert(&text),
            "{}",
            name
        );
    }
}

/// конвертация байтов совпадает с конвертацией строки для корректного UTF-8
#[test]
fn bytes_match_str()
{
    let converter = Converter::new(MappingTable::builtin().unwrap(), ConverterConfig::default());

    for (name, text) in crate::data::files() {
        assert_eq!(
            converter.convert_bytes(text.as_bytes()),
            converter.convert(&text).into_bytes(),
            "{}",
            name
        );
    }
}
