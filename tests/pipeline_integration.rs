//! End-to-end integration tests over the public `run_pipeline` entry
//! point, exercising real tokenization (not synthetic token vectors)
//! so the tokenizer, preprocessor, and verifier all participate.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use clonescan::{DetectorConfigBuilder, Language};

fn run(
    dir: &std::path::Path,
    config: &clonescan::DetectorConfig,
) -> (clonescan::PipelineStats, Vec<String>) {
    let pair_file = dir.join("pairs.csv");
    let codeblocks_file = dir.join("codeblocks.csv");
    let stats = clonescan::run_pipeline(
        dir,
        config,
        &pair_file,
        &codeblocks_file,
        Arc::new(AtomicBool::new(false)),
    )
    .unwrap();
    let mut lines: Vec<String> = std::fs::read_to_string(&pair_file)
        .unwrap()
        .lines()
        .map(String::from)
        .collect();
    lines.sort_unstable();
    (stats, lines)
}

#[test]
fn test_single_function_corpus_emits_no_pair() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("only.py"),
        "def solo():\n    a = 1\n    b = 2\n    c = 3\n    return a + b + c\n",
    )
    .unwrap();

    let config = DetectorConfigBuilder::new()
        .language(Language::Python)
        .min_line(1)
        .min_token(1)
        .build()
        .unwrap();

    let (stats, pairs) = run(dir.path(), &config);
    assert_eq!(stats.total_sequences, 1);
    assert!(pairs.is_empty());
}

#[test]
fn test_identical_java_methods_across_files_are_recoverable_via_codeblocks() {
    let dir = tempfile::tempdir().unwrap();
    let body = concat!(
        "public class A {\n",
        "    public int sum(int a, int b) {\n",
        "        int c = a + b;\n",
        "        int d = c + 1;\n",
        "        int e = d + 1;\n",
        "        return e;\n",
        "    }\n",
        "}\n",
    );
    std::fs::write(dir.path().join("A.java"), body).unwrap();
    std::fs::write(
        dir.path().join("B.java"),
        body.replace("class A", "class B"),
    )
    .unwrap();

    let config = DetectorConfigBuilder::new()
        .language(Language::Java)
        .min_line(1)
        .min_token(1)
        .n(2)
        .build()
        .unwrap();

    let pair_file = dir.path().join("pairs.csv");
    let codeblocks_file = dir.path().join("codeblocks.csv");
    let stats = clonescan::run_pipeline(
        dir.path(),
        &config,
        &pair_file,
        &codeblocks_file,
        Arc::new(AtomicBool::new(false)),
    )
    .unwrap();

    assert_eq!(stats.total_sequences, 2);
    let pairs = std::fs::read_to_string(&pair_file).unwrap();
    assert_eq!(pairs.lines().count(), 1);

    let codeblocks = std::fs::read_to_string(&codeblocks_file).unwrap();
    assert_eq!(codeblocks.lines().count(), 2);
    assert!(codeblocks.contains("A.java"));
    assert!(codeblocks.contains("B.java"));
}

#[test]
fn test_threads_one_vs_eight_yield_same_pair_set() {
    let dir = tempfile::tempdir().unwrap();
    let body = "def f():\n    a = 1\n    b = 2\n    c = 3\n    d = 4\n    return a + b + c + d\n";
    for i in 0..6 {
        std::fs::write(dir.path().join(format!("f{i}.py")), body).unwrap();
    }

    let base = DetectorConfigBuilder::new()
        .language(Language::Python)
        .min_line(1)
        .min_token(1)
        .n(2);

    let (_, seq_threads_1) = run(dir.path(), &base.clone().threads(1).build().unwrap());
    let (_, seq_threads_8) = run(dir.path(), &base.threads(8).build().unwrap());

    assert_eq!(seq_threads_1, seq_threads_8);
    assert!(!seq_threads_1.is_empty());
}

#[test]
fn test_partition_count_exceeding_total_sequences_is_a_noop_extra_pass() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("a.py"),
        "def f():\n    a = 1\n    b = 2\n    c = 3\n    return a + b + c\n",
    )
    .unwrap();

    let config = DetectorConfigBuilder::new()
        .language(Language::Python)
        .min_line(1)
        .min_token(1)
        .partition_count(50)
        .build()
        .unwrap();

    let (stats, pairs) = run(dir.path(), &config);
    assert_eq!(stats.total_sequences, 1);
    assert!(pairs.is_empty());
}
