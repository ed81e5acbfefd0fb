pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// сколько раз повторяется текст в одном замере
const REPEAT: usize = 10;

/// группа замеров: $run вызывается для каждого текста из $dir, $state создается один раз на группу
#[macro_export]
macro_rules! group {
    ($dir: expr, $fn: ident, $group: expr, $name: expr, $state: ident = $init: expr, $run: expr) => {
        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let $state = $init;

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for (text_name, text) in group::read_dir($dir) {
                group.bench_with_input(
                    criterion::BenchmarkId::new($name, &text_name),
                    text.as_str(),
                    |b, text| b.iter(|| $run(criterion::black_box(text))),
                );
            }

            group.finish();
        }
    };
}

/// тексты из папки: название файла без расширения и текст, повторенный REPEAT раз
pub fn read_dir(dir: &str) -> Vec<(String, String)>
{
    let mut texts: Vec<(String, String)> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|extension| extension == "txt"))
        .map(|path| {
            let name = path.file_stem().unwrap().to_string_lossy().into_owned();
            let text = std::fs::read_to_string(&path).unwrap().repeat(REPEAT);

            (name, text)
        })
        .collect();

    texts.sort();

    texts
}
