use criterion::{criterion_group, criterion_main, Criterion};
use swatchboard::naming::{Namer, NamingStrategy};
use swatchboard::palette::{build_palette, PaletteOptions, SortStrategy};
use swatchboard::NormalizedColor;

const LITERALS: &[&str] = &[
    "#FF6600",
    "#1E90FF",
    "rgb(250, 128, 114)",
    "hsl(165, 60%, 40%)",
    "#2F4F4F",
    "#FFD700",
    "#BA55D3",
    "rgb(46, 139, 87)",
    "#708090",
    "hsl(320, 80%, 70%)",
    "#112233",
    "#F5F5DC",
];

pub fn run_benchmarks(c: &mut Criterion) {
    let colors: Vec<NormalizedColor> = LITERALS
        .iter()
        .map(|literal| NormalizedColor::new(literal).expect("valid literal"))
        .collect();
    let namer = Namer::new();

    let mut group = c.benchmark_group("naming");

    group.bench_function("normalize", |b| {
        b.iter(|| {
            LITERALS
                .iter()
                .map(|literal| NormalizedColor::new(literal))
                .collect::<Result<Vec<_>, _>>()
        })
    });

    group.bench_function("name-all-auto", |b| {
        b.iter(|| namer.name_all(&colors, &NamingStrategy::Auto))
    });

    group.bench_function("build-palette-lch", |b| {
        let options = PaletteOptions {
            sort: SortStrategy::Lch,
            naming: NamingStrategy::Auto,
        };
        b.iter(|| build_palette(LITERALS.iter().copied(), &options))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
