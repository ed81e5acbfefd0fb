use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use unicode_ascii::MappingTable;
use unicode_ascii_prepare::output;
use unicode_ascii_source::{build, parse_confusables, parse_unicode_data, RangeProperty};

/// подготовка таблицы замен Unicode -> ASCII
#[derive(Debug, Parser)]
struct Args
{
    /// UnicodeData.txt
    #[arg(long, default_value = "./../data/source/UnicodeData.txt")]
    ucd: PathBuf,
    /// confusables.txt
    #[arg(long, default_value = "./../data/source/confusables.txt")]
    confusables: PathBuf,
    /// Scripts.txt
    #[arg(long)]
    scripts: Option<PathBuf>,
    /// Blocks.txt
    #[arg(long)]
    blocks: Option<PathBuf>,
    /// emoji-data.txt
    #[arg(long)]
    emoji: Option<PathBuf>,
    /// куда записать таблицу
    #[arg(long, default_value = "./../data/ascii.txt")]
    output: PathBuf,
}

fn main() -> Result<()>
{
    env_logger::init();

    let args = Args::parse();

    let mut ucd = parse_unicode_data(&read(&args.ucd)?);

    for (property, path) in [
        (RangeProperty::Script, &args.scripts),
        (RangeProperty::Block, &args.blocks),
        (RangeProperty::Emoji, &args.emoji),
    ] {
        if let Some(path) = path {
            let annotated = ucd.annotate(property, &read(path)?);
            info!("{}: {} кодпоинтов", property, annotated);
        }
    }

    let (groups, skipped) = parse_confusables(&read(&args.confusables)?);
    let (table, report) = build(&ucd.codepoints, &groups);

    let sources = format!("{}, {}", args.ucd.display(), args.confusables.display());
    let file = File::create(&args.output)
        .with_context(|| format!("не удалось создать {}", args.output.display()))?;

    let mut writer = BufWriter::new(file);

    let stats = output::write(&table, &sources, &mut writer)
        .and_then(|stats| writer.flush().map(|_| stats))
        .with_context(|| format!("не удалось записать {}", args.output.display()))?;

    // записанная таблица должна читаться так же, как её прочитает конвертер
    let written = MappingTable::load(&args.output)
        .with_context(|| format!("записанная таблица {} не читается", args.output.display()))?;

    output::stats::print(
        &args.output.display().to_string(),
        &report,
        &output::stats::coverage(&ucd.codepoints, &table),
        written.sizes(),
        stats,
    );

    println!(
        "  пропущено строк: UCD - {}, confusables - {}\n",
        ucd.skipped.len(),
        skipped.len()
    );

    Ok(())
}

fn read(path: &Path) -> Result<String>
{
    fs::read_to_string(path).with_context(|| format!("не удалось прочитать {}", path.display()))
}
