use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// вывести результаты бенчмарка (вывод cargo bench) как CSV, по таблице на группу
#[derive(Debug, Parser)]
struct Args
{
    /// файл с выводом cargo bench
    file: PathBuf,
}

/// группа -> вариант -> текст -> время, мкс
type Results = BTreeMap<String, BTreeMap<String, BTreeMap<String, u32>>>;

fn main() -> Result<()>
{
    let args = Args::parse();

    let contents = fs::read_to_string(&args.file)
        .with_context(|| format!("не удалось прочитать {}", args.file.display()))?;

    for (group, variants) in parse_str(&contents) {
        println!("{}:\n{}\n", group.to_uppercase(), make_csv(&variants));
    }

    Ok(())
}

fn make_csv(variants: &BTreeMap<String, BTreeMap<String, u32>>) -> String
{
    let texts: BTreeSet<&String> = variants.values().flat_map(|texts| texts.keys()).collect();

    let mut result = String::new();

    for variant in variants.keys() {
        result.push_str(format!(";{}", variant).as_str());
    }
    result.push('\n');

    for text in texts {
        result.push_str(text);

        for times in variants.values() {
            result.push_str(format!(";{}", times.get(text).unwrap_or(&0)).as_str());
        }

        result.push('\n');
    }

    result
}

/// строки вида "convert/str/english  time:   [1.2345 µs 1.2400 µs 1.2456 µs]"
fn parse_str(source: &str) -> Results
{
    let mut result = Results::new();

    for line in source.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.len() < 6 || parts[1] != "time:" {
            continue;
        }

        let name: Vec<&str> = parts[0].split('/').collect();

        let (group, variant, text) = match name.as_slice() {
            [group, variant, text] => (group, variant, text),
            _ => continue,
        };

        let time = match parts[4].parse::<f64>() {
            Ok(time) => time,
            Err(_) => continue,
        };

        let time = match parts[5] {
            "ns" => time / 1000.0,
            "ms" => time * 1000.0,
            "s" => time * 1_000_000.0,
            _ => time,
        };

        result
            .entry(group.to_string())
            .or_default()
            .entry(variant.to_string())
            .or_default()
            .insert(text.to_string(), time.trunc() as u32);
    }

    result
}
