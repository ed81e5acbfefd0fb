use unicode_ascii::{Converter, ConverterConfig, MappingTable};
use unicode_ascii_prepare::output;
use unicode_ascii_source::{build, parse_confusables, parse_unicode_data, AsciiTable, MappingSource};

/// построить таблицу из выдержек UCD и записать её в формате data/ascii.txt
fn prepare() -> (AsciiTable, String)
{
    let (unicode_data, confusables) = crate::data::ucd();

    let ucd = parse_unicode_data(&unicode_data);
    let (groups, _) = parse_confusables(&confusables);
    let (table, _) = build(&ucd.codepoints, &groups);

    let mut buffer = vec![];
    output::write(&table, "test_data/ucd", &mut buffer).unwrap();

    (table, String::from_utf8(buffer).unwrap())
}

/// исходные данные -> сборка таблицы -> файл -> загрузка -> конвертация
#[test]
fn end_to_end()
{
    let (_, data) = prepare();
    let table = MappingTable::parse(&data).unwrap();
    let converter = Converter::new(&table, ConverterConfig::default());

    assert_eq!(converter.convert("Ýou hãve a nèw vòice-mãil"), "You have a new voice-mail");
    assert_eq!(converter.convert("ѡѡѡ.ЬіɡЬаɡ.ϲо.zа"), "www.bigbag.co.za");
    assert_eq!(converter.convert("α ß"), "A B");
    assert_eq!(converter.convert("A\u{301}\u{200B}\u{A0}\u{2000}Ǻ"), "A A");
    assert_eq!(converter.convert("あ"), "あ");
}

/// повторная сборка даёт тот же файл
#[test]
fn build_is_idempotent()
{
    let (first_table, first) = prepare();
    let (second_table, second) = prepare();

    assert_eq!(first_table, second_table);
    assert_eq!(first, second);
}

/// замена из confusables важнее замены из декомпозиции
#[test]
fn confusable_priority()
{
    let (table, data) = prepare();
    let loaded = MappingTable::parse(&data).unwrap();

    // ROMAN NUMERAL ONE: <compat> 0049, но в выдержке confusables он в группе "l"
    assert_eq!(table.get(0x2160).unwrap().source, Some(MappingSource::Confusable));
    assert_eq!(loaded.ascii_for(0x2160), Some("l"));

    // в полной таблице группа "l" неоднозначна, остаётся декомпозиция
    assert_eq!(MappingTable::builtin().unwrap().ascii_for(0x2160), Some("I"));
}

/// каждый кодпоинт встречается в файле не больше одного раза
#[test]
fn unique_records()
{
    for data in [prepare().1, include_str!("./../../data/ascii.txt").to_owned()] {
        let mut codes: Vec<&str> = data
            .lines()
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once(';').map(|(code, _)| code))
            .collect();

        let count = codes.len();

        codes.sort();
        codes.dedup();

        assert_eq!(codes.len(), count);
    }
}
