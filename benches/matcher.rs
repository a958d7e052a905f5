// benches/matcher.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use camp_watch::config::TargetSpec;
use camp_watch::core::html::HtmlCalendar;
use camp_watch::specs::{match_cells, match_document};

const PAGE: &str = include_str!("../tests/fixtures/calendar.html");

fn target() -> TargetSpec {
    TargetSpec::new(
        ["10/23", "10/24", "11/1"],
        ["キャンプ宿泊", "キャンプ日帰り", "毛無山登山"],
    )
}

fn bench_matcher(c: &mut Criterion) {
    let target = target();

    c.bench_function("match_document", |b| {
        b.iter(|| {
            let report = match_document(black_box(PAGE), black_box(&target));
            black_box(report.cells().len())
        })
    });

    let table = HtmlCalendar::parse(PAGE);
    c.bench_function("match_cells_parsed", |b| {
        b.iter(|| {
            let report = match_cells(black_box(&table), black_box(&target));
            black_box(report.any_available())
        })
    });
}

criterion_group!(benches, bench_matcher);
criterion_main!(benches);
