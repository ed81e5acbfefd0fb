use std::fs;
use std::io::Read;

/// тексты на разных языках для тестов
pub fn files() -> Vec<(String, String)>
{
    read_dir("./../test_data/texts")
}

/// ожидаемый результат конвертации текстов с настройками по умолчанию
pub fn expected() -> Vec<(String, String)>
{
    read_dir("./../test_data/expected")
}

/// выдержки из UCD: UnicodeData.txt и confusables.txt
pub fn ucd() -> (String, String)
{
    (
        read("./../test_data/ucd/UnicodeData.txt"),
        read("./../test_data/ucd/confusables.txt"),
    )
}

/// прочитать все файлы каталога, отсортировав по названию
fn read_dir(dir: &str) -> Vec<(String, String)>
{
    let dir = fs::read_dir(dir).unwrap();

    let mut data = vec![];

    for entry in dir {
        let entry = entry.unwrap();

        let path = entry.path();
        let path = path.to_str().unwrap();

        data.push((get_name(path).to_owned(), read(path)));
    }

    data.sort_by(|a, b| a.0.cmp(&b.0));

    data
}

/// прочитать файл
fn read(source: &str) -> String
{
    let mut file = fs::File::open(source).unwrap();
    let mut result = String::new();

    file.read_to_string(&mut result).unwrap();

    result
}

/// вырезать из полного пути к файлу его название, без формата
fn get_name(filename: &str) -> &str
{
    let (_, name) = filename.trim_end_matches(".txt").rsplit_once('/').unwrap();

    name
}
