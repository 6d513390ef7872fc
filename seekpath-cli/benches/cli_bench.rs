use std::process::{Command, Stdio};

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::TempDir;

/// Build a search path of `count` directories with the target file in the
/// last one, so `find` has to probe every entry.
fn populate_search_paths(root: &TempDir, count: usize) -> String {
    let mut entries = Vec::with_capacity(count);
    for i in 0..count {
        let dir = root.path().join(format!("dir-{i}"));
        std::fs::create_dir_all(&dir).expect("failed to create bench directory");
        entries.push(dir.to_string_lossy().into_owned());
    }
    let last = root.path().join(format!("dir-{}", count - 1));
    std::fs::write(last.join("target.txt"), b"").expect("failed to create bench file");
    entries.join(";")
}

fn seekpath() -> Command {
    let mut cmd = Command::cargo_bin("seekpath").expect("failed to locate seekpath binary");
    cmd.env_remove("SEEKPATH_SEARCH_PATHS")
        .env_remove("SEEKPATH_CONFIG_DIR");
    cmd
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let output = seekpath()
                .arg("--version")
                .output()
                .expect("failed to run seekpath");
            black_box(output);
        });
    });
}

fn bench_cli_canonical(c: &mut Criterion) {
    c.bench_function("cli_canonical", |b| {
        b.iter(|| {
            let output = seekpath()
                .args(["canonical", "a/./b/../c//d/", "--platform", "posix"])
                .output()
                .expect("failed to run seekpath canonical");
            black_box(output);
        });
    });
}

fn bench_cli_find(c: &mut Criterion) {
    c.bench_function("cli_find_50_entries", |b| {
        b.iter_batched(
            || {
                let root = TempDir::new().expect("failed to create temp dir");
                let search_paths = populate_search_paths(&root, 50);
                (root, search_paths)
            },
            |(root, search_paths)| {
                let mut cmd = seekpath();
                cmd.stdout(Stdio::null()).stderr(Stdio::null());
                let status = cmd
                    .arg("--config-dir")
                    .arg(root.path())
                    .args(["--search-paths", &search_paths, "find", "target.txt"])
                    .status()
                    .expect("failed to execute seekpath find");

                black_box(status.success());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    cli_benches,
    bench_cli_startup,
    bench_cli_canonical,
    bench_cli_find
);
criterion_main!(cli_benches);
