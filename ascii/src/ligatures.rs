use std::borrow::Cow;

/// лигатуры, которые раскрываются до основной таблицы замен
const LIGATURES: [(char, &str); 11] = [
    ('\u{C6}', "AE"),
    ('\u{E6}', "ae"),
    ('\u{152}', "OE"),
    ('\u{153}', "oe"),
    ('\u{132}', "IJ"),
    ('\u{133}', "ij"),
    ('\u{FB00}', "ff"),
    ('\u{FB01}', "fi"),
    ('\u{FB02}', "fl"),
    ('\u{FB03}', "ffi"),
    ('\u{FB04}', "ffl"),
];

#[inline]
pub fn ligature(c: char) -> Option<&'static str>
{
    // все лигатуры лежат выше U+00C5
    if c < '\u{C6}' {
        return None;
    }

    LIGATURES
        .iter()
        .find_map(|(ligature, expansion)| (*ligature == c).then_some(*expansion))
}

/// раскрыть лигатуры в строке
pub fn fold_ligatures(input: &str) -> Cow<'_, str>
{
    if !input.chars().any(|c| ligature(c).is_some()) {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len() + 4);

    for c in input.chars() {
        match ligature(c) {
            Some(expansion) => result.push_str(expansion),
            None => result.push(c),
        }
    }

    Cow::Owned(result)
}
