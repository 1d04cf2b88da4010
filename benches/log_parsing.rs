//! Benchmarks for log parsing.
//!
//! These benchmarks measure how the four log parsers scale with the number of
//! records in a log, using synthetic output shaped like each tool prints it.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use repo_utils::commit::{order_by_date, DateOrder};
use repo_utils::parser;

const SIZES: [usize; 3] = [10, 100, 1000];

fn git_log(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "commit {:040x}\nAuthor: Jane Doe <jane@example.com>\nDate:   Mon May 16 11:{:02}:03 2016 +0200\n\n    change number {}\n    second line\n\n",
                i,
                i % 60,
                i
            )
        })
        .collect()
}

fn hg_log(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "changeset:   {}:{:012x}\nuser:        Jane Doe <jane@example.com>\ndate:        Mon May 16 11:56:03 2016 +0200\nfiles:       src/lib.rs\ndescription:\nchange number {}\n\n\n",
                i, i, i
            )
        })
        .collect()
}

fn bzr_log(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "------------------------------------------------------------\nrevno: {}\ncommitter: Jane Doe <jane@example.com>\nbranch nick: trunk\ntimestamp: Mon 2016-05-16 11:56:03 +0200\nmessage:\n  change number {}\n",
                n - i,
                i
            )
        })
        .collect()
}

fn svn_log(n: usize) -> String {
    let mut log: String = (0..n)
        .map(|i| {
            format!(
                "------------------------------------------------------------------------\nr{} | jane | 2016-05-16 11:56:03 +0200 (Mon, 16 May 2016) | 1 line\n\nchange number {}\n",
                i + 1,
                i
            )
        })
        .collect();
    log.push_str("------------------------------------------------------------------------\n");
    log
}

fn bench_parsers(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_log");
    for size in SIZES {
        let git = git_log(size);
        let hg = hg_log(size);
        let bzr = bzr_log(size);
        let svn = svn_log(size);

        group.bench_with_input(BenchmarkId::new("git", size), &git, |b, log| {
            b.iter(|| parser::git::parse(black_box(log)))
        });
        group.bench_with_input(BenchmarkId::new("hg", size), &hg, |b, log| {
            b.iter(|| parser::mercurial::parse(black_box(log)))
        });
        group.bench_with_input(BenchmarkId::new("bzr", size), &bzr, |b, log| {
            b.iter(|| parser::bazaar::parse(black_box(log)))
        });
        group.bench_with_input(BenchmarkId::new("svn", size), &svn, |b, log| {
            b.iter(|| parser::subversion::parse(black_box(log)))
        });
    }
    group.finish();
}

fn bench_order_by_date(c: &mut Criterion) {
    let commits = parser::git::parse(&git_log(1000));
    c.bench_function("order_by_date_1000", |b| {
        b.iter(|| {
            let mut list = commits.clone();
            order_by_date(black_box(&mut list), DateOrder::Descending);
            list
        })
    });
}

criterion_group!(benches, bench_parsers, bench_order_by_date);
criterion_main!(benches);
