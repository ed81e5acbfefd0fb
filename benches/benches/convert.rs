use criterion::{criterion_group, criterion_main, Criterion};
use unicode_ascii::{count_obfuscated_hits, Converter, ConverterConfig, Dictionary, MappingTable};

mod group;

fn converter() -> Converter<'static>
{
    Converter::new(MappingTable::builtin().unwrap(), ConverterConfig::default())
}

group!(
    "./../test_data/texts",
    convert,
    "convert",
    "str",
    converter = converter(),
    |text: &str| converter.convert(text)
);

group!(
    "./../test_data/texts",
    convert_bytes,
    "bytes",
    "bytes",
    converter = converter(),
    |text: &str| converter.convert_bytes(text.as_bytes())
);

group!(
    "./../test_data/texts",
    detect,
    "detect",
    "dictionary",
    state = (
        converter(),
        Dictionary::from_words(["paypal", "password", "viagra", "money"])
    ),
    |text: &str| {
        let lines: Vec<&str> = text.lines().collect();

        count_obfuscated_hits(&state.0, &lines, &state.1, None)
    }
);

criterion_group!(benches, convert, convert_bytes, detect);
criterion_main!(benches);
