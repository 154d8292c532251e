use babeltoday_core::{resolve_presets, SupportMatrix};
use babeltoday_schema::{Browser, BrowserId, Catalogs, PluginKey, PresetDecl};
use criterion::{criterion_group, criterion_main, Criterion};

fn synthetic_catalogs(browsers: usize, presets: usize, plugins_per_preset: usize) -> Catalogs {
    let browsers: Vec<Browser> = (0..browsers)
        .map(|i| Browser {
            id: BrowserId::new(format!("browser{i}")),
            name: format!("Browser {i}"),
            version: format!("{}", 40 + i),
            engine: None,
        })
        .collect();

    let mut plugin_map = babeltoday_schema::PluginMap::new();
    let preset_decls: Vec<PresetDecl> = (0..presets)
        .map(|p| {
            let keys: Vec<PluginKey> = (0..plugins_per_preset)
                .map(|i| PluginKey::new(format!("transform-feature-{p}-{i}")))
                .collect();
            for (i, key) in keys.iter().enumerate() {
                let versions = browsers
                    .iter()
                    .map(|browser| (browser.id.clone(), format!("{}", 38 + (i % 10))))
                    .collect();
                plugin_map.insert(key.clone(), versions);
            }
            PresetDecl {
                name: format!("preset-{p}").into(),
                plugins: keys,
            }
        })
        .collect();

    Catalogs {
        browsers,
        plugins: plugin_map,
        presets: preset_decls,
    }
}

fn bench_compute_small(c: &mut Criterion) {
    c.bench_function("matrix_compute_3x5x10", |b| {
        b.iter_with_setup(
            || synthetic_catalogs(5, 3, 10),
            |catalogs| {
                SupportMatrix::compute(&catalogs);
            },
        );
    });
}

fn bench_compute_large(c: &mut Criterion) {
    c.bench_function("matrix_compute_50x12x20", |b| {
        b.iter_with_setup(
            || synthetic_catalogs(12, 50, 20),
            |catalogs| {
                SupportMatrix::compute(&catalogs);
            },
        );
    });
}

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_presets_50x20", |b| {
        b.iter_with_setup(
            || {
                let catalogs = synthetic_catalogs(12, 50, 20);
                (catalogs.presets, catalogs.plugins)
            },
            |(presets, plugins)| {
                resolve_presets(&presets, &plugins);
            },
        );
    });
}

criterion_group!(benches, bench_compute_small, bench_compute_large, bench_resolve);
criterion_main!(benches);
