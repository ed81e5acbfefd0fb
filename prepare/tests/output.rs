use std::fs;

use unicode_ascii::MappingTable;
use unicode_ascii_prepare::encode::{encode_flags, encode_record, RecordGroups};
use unicode_ascii_prepare::output;
use unicode_ascii_prepare::output::format::format_hex_pairs;
use unicode_ascii_source::{build, parse_confusables, parse_unicode_data, Flags, MappingSource, TableRecord};

#[test]
fn hex_pairs()
{
    assert_eq!(format_hex_pairs("ffi"), "66 66 69");
    assert_eq!(format_hex_pairs("(1)"), "28 31 29");
    assert_eq!(format_hex_pairs(" "), "20");
    assert_eq!(format_hex_pairs(""), "");
}

#[test]
fn records()
{
    let mut stats = RecordGroups::new();

    let mapped = TableRecord {
        ascii: Some("IJ".to_owned()),
        source: Some(MappingSource::Decomposition),
        flags: Flags::default(),
    };

    let mark = TableRecord {
        ascii: None,
        source: None,
        flags: Flags {
            combining: true,
            ..Default::default()
        },
    };

    let space = TableRecord {
        ascii: Some(" ".to_owned()),
        source: Some(MappingSource::Decomposition),
        flags: Flags {
            space: true,
            ..Default::default()
        },
    };

    assert_eq!(encode_record(0x132, &mapped, &mut stats), "0132;49 4A;");
    assert_eq!(encode_record(0x301, &mark, &mut stats), "0301;-;M");
    assert_eq!(encode_record(0x3000, &space, &mut stats), "3000;20;S");
    assert_eq!(encode_record(0x1D400, &mapped, &mut stats), "1D400;49 4A;");

    assert_eq!(stats.values().sum::<usize>(), 4);
    assert_eq!(stats["4. только флаги"], 1);

    let all = Flags {
        combining: true,
        zero_width: true,
        space: true,
    };

    assert_eq!(encode_flags(&all), "MZS");
    assert_eq!(encode_flags(&Flags::default()), "");
}

#[test]
fn written_table_loads()
{
    let ucd = parse_unicode_data(&fs::read_to_string("./../test_data/ucd/UnicodeData.txt").unwrap());
    let (groups, _) =
        parse_confusables(&fs::read_to_string("./../test_data/ucd/confusables.txt").unwrap());
    let (table, _) = build(&ucd.codepoints, &groups);

    let mut buffer = vec![];
    let stats = output::write(&table, "test_data/ucd", &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert!(text.starts_with("# таблица замен Unicode -> ASCII\n"));
    assert!(text.contains("\n# источник: test_data/ucd\n"));
    assert!(text.contains("\nFB03;66 66 69;\n"));
    assert!(text.contains("\n00A0;20;S\n"));
    assert!(text.contains("\n200B;-;Z\n"));

    assert_eq!(stats.values().sum::<usize>(), table.len());

    let loaded = MappingTable::parse(&text).unwrap();

    assert_eq!(loaded.len(), table.len());

    for (code, record) in table.iter() {
        assert_eq!(loaded.ascii_for(*code), record.ascii.as_deref(), "U+{:04X}", code);
        assert_eq!(loaded.is_combining_mark(*code), record.flags.combining);
        assert_eq!(loaded.is_zero_width(*code), record.flags.zero_width);
        assert_eq!(loaded.is_space(*code), record.flags.space);
    }
}

#[test]
fn coverage()
{
    let ucd = parse_unicode_data(&fs::read_to_string("./../test_data/ucd/UnicodeData.txt").unwrap());
    let (groups, _) =
        parse_confusables(&fs::read_to_string("./../test_data/ucd/confusables.txt").unwrap());
    let (table, _) = build(&ucd.codepoints, &groups);

    let coverage = output::stats::coverage(&ucd.codepoints, &table);

    assert_eq!(coverage.mapped + coverage.flags_only, table.len());
    assert_eq!(coverage.assigned, ucd.codepoints.range(0x80 ..).count());

    // последний кодпоинт таблицы - U+1D400: суррогаты и Private Use целиком внутри
    assert!(coverage
        .reserved
        .contains(&("Private Use Area".to_owned(), 0xF8FF - 0xE000 + 1)));
    assert!(coverage
        .reserved
        .iter()
        .all(|(description, _)| !description.contains("Supplementary")));
}
