use unicode_ascii::{convert_to_ascii, Converter, ConverterConfig, MappingTable, UnmappedPolicy};

fn convert(input: &str) -> String
{
    convert_to_ascii(input).unwrap()
}

fn converter(config: ConverterConfig) -> Converter<'static>
{
    Converter::new(MappingTable::builtin().unwrap(), config)
}

#[test]
fn visual_examples()
{
    assert_eq!(convert("Ý"), "Y");
    assert_eq!(convert("α"), "A");
    assert_eq!(convert("ß"), "B");
    assert_eq!(convert("½"), "1/2");
    assert_eq!(convert("①②"), "12");
    assert_eq!(convert("ＰａｙＰａｌ"), "PayPal");
    assert_eq!(convert("𝐇𝐞𝐥𝐥𝐨"), "Hello");
    assert_eq!(convert("“quoted” ‘single’"), "\"quoted\" 'single'");
}

#[test]
fn end_to_end()
{
    assert_eq!(convert("Ýou hãve a nèw vòice-mãil"), "You have a new voice-mail");
    assert_eq!(convert("ѡѡѡ.ЬіɡЬаɡ.ϲо.zа"), "www.bigbag.co.za");
}

#[test]
fn ascii_unchanged()
{
    for input in [
        "",
        "plain text",
        "  two  spaces  ",
        "tabs\tand\nnewlines\r\n",
        "symbols: !@#$%^&*()_+-=[]{};':\",./<>?",
    ] {
        assert_eq!(convert(input), input);
    }
}

#[test]
fn combining_marks_removed()
{
    assert_eq!(convert("A\u{301}"), "A");
    assert_eq!(convert("E\u{301}\u{301}"), "E");
    assert_eq!(convert("w\u{308}o\u{323}rd"), "word");
}

#[test]
fn zero_width_removed()
{
    assert_eq!(convert("a\u{200B}b"), "ab");
    assert_eq!(convert("\u{FEFF}pay\u{AD}pal\u{2060}"), "paypal");
    assert_eq!(convert("a\u{200E}b\u{202A}c"), "abc");
}

#[test]
fn ligatures()
{
    assert_eq!(convert("ﬃ office Æon"), "ffi office AEon");
    assert_eq!(convert("Œuvre œil"), "OEuvre oeil");
    assert_eq!(convert("ĲsselĳK"), "IJsselijK");
    assert_eq!(convert("ﬀ ﬁ ﬂ ﬄ"), "ff fi fl ffl");
}

#[test]
fn spaces_folded()
{
    // в режиме текста письма серия пробелов с разделителем схлопывается, порядок не важен
    assert_eq!(convert("a\u{A0}\u{A0}b"), "a b");
    assert_eq!(convert("a \u{2003}b"), "a b");
    assert_eq!(convert("a \u{A0}b"), "a b");
    assert_eq!(convert("a\u{A0} b"), "a b");
    assert_eq!(convert("a  \u{A0}b"), "a b");
    assert_eq!(convert("a\u{A0}  b"), "a b");
    assert_eq!(convert("\u{3000}\u{3000}x"), " x");
    assert_eq!(convert("a\u{85}b"), "a b");

    // пробелы, оказавшиеся рядом после удаления символов
    assert_eq!(convert("a \u{200B} b"), "a b");
    assert_eq!(convert("a\u{A0}\u{301} b"), "a b");
    assert_eq!(convert("a \u{301}\u{200B}  b"), "a b");

    // серии только из ASCII-пробелов не трогаем
    assert_eq!(convert("a  \u{200B}b"), "a  b");
    assert_eq!(convert("é  b"), "e  b");

    let words = converter(ConverterConfig {
        collapse_spaces: false,
        ..Default::default()
    });

    assert_eq!(words.convert("a\u{A0}\u{A0}b"), "a  b");
    assert_eq!(words.convert("a\u{A0} b"), "a  b");
    assert_eq!(words.convert("a \u{200B} b"), "a  b");
    assert_eq!(words.convert("a\u{2028}b"), "a b");

    // отдельное слово - без схлопывания при любых настройках
    assert_eq!(converter(ConverterConfig::default()).convert_word("a\u{A0}\u{A0}b"), "a  b");
}

#[test]
fn unmapped_policy()
{
    let pass = converter(ConverterConfig::default());
    let drop = converter(ConverterConfig {
        unmapped: UnmappedPolicy::Drop,
        ..Default::default()
    });

    assert_eq!(pass.convert("あ"), "あ");
    assert_eq!(drop.convert("あ"), "");

    assert_eq!(pass.convert("Москва"), "Mocквa");
    assert_eq!(drop.convert("Москва"), "Moca");

    assert_eq!(pass.convert("© 2024"), "© 2024");
    assert_eq!(drop.convert("© 2024"), " 2024");

    // удалённый символ между пробелами
    assert_eq!(pass.convert("a あ b"), "a あ b");
    assert_eq!(drop.convert("a あ b"), "a b");
}

#[test]
fn idempotent()
{
    let drop = converter(ConverterConfig {
        unmapped: UnmappedPolicy::Drop,
        ..Default::default()
    });

    for input in [
        "Ýou hãve a nèw vòice-mãil",
        "ѡѡѡ.ЬіɡЬаɡ.ϲо.zа",
        "Ελλάδα και Москва",
        "a\u{A0}\u{A0}\u{200B}b ﬃ あ",
        "E\u{301}\u{301}\u{3000}\u{3000}Ⅻ",
        "a\u{A0}  b \u{200B} c あ d",
    ] {
        let once = convert(input);

        assert_eq!(convert(&once), once, "{:?}", input);
        assert_eq!(convert(input), once, "{:?}", input);

        let dropped = drop.convert(input);

        assert!(dropped.is_ascii());
        assert_eq!(drop.convert(&dropped), dropped);
    }
}

#[test]
fn invalid_utf8_passed_through()
{
    let converter = converter(ConverterConfig::default());

    let input = [b"caf".as_slice(), "é".as_bytes(), b"\xFF\xFE", "ß".as_bytes(), b"\xC3"].concat();

    assert_eq!(converter.convert_bytes(&input), b"cafe\xFF\xFEB\xC3".to_vec());
    assert_eq!(converter.convert_bytes(b"plain"), b"plain".to_vec());

    // некорректный байт разделяет пробелы, схлопывания нет
    let input = ["a\u{A0}".as_bytes(), b"\xFF", "\u{A0}b".as_bytes()].concat();

    assert_eq!(converter.convert_bytes(&input), b"a \xFF b".to_vec());
    assert_eq!(converter.convert_bytes(" \u{A0}".as_bytes()), b" ".to_vec());
    assert_eq!(converter.convert_bytes(&["a\u{A0} ".as_bytes(), b"\xFF"].concat()), b"a \xFF".to_vec());
}
