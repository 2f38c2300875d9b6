//! Hygiene: coding-standard budgets checked at test time.
//!
//! Scans production `.rs` files under `src/` (sibling `*_test.rs` files are
//! skipped) for patterns this crate does not allow. Budgets only go down.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Pattern, budget, and what to do instead.
const BUDGETS: &[(&str, usize, &str)] = &[
    // Panics crash the WASM instance and freeze the page.
    (".unwrap()", 0, "propagate or log the error"),
    (".expect(", 0, "propagate or log the error"),
    ("panic!(", 0, "return an error"),
    ("unreachable!(", 0, "model the case explicitly"),
    ("todo!(", 0, "implement or remove the stub"),
    ("unimplemented!(", 0, "implement or remove the stub"),
    // Silent loss.
    // Also catches `let _name = value;` bindings that only silence unused warnings.
    ("let _", 0, "log the discarded error or use cfg_attr(allow(unused_variables))"),
    (".ok()", 0, "match on the error and log it"),
    // Diagnostics go through `log` so they reach the browser console.
    ("println!(", 0, "use log::debug!/info!"),
    ("eprintln!(", 0, "use log::error!/warn!"),
    ("dbg!(", 0, "remove debugging output"),
    ("#[allow(dead_code)]", 0, "delete the unused item"),
];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

/// Production lines only: stops at an inline `#[cfg(test)] mod tests`.
fn production_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut lines = content.lines().peekable();
    std::iter::from_fn(move || {
        let line = lines.next()?;
        if line.trim() == "#[cfg(test)]" && lines.peek().is_some_and(|next| next.trim_start().starts_with("mod tests")) {
            return None;
        }
        Some(line)
    })
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = production_lines(&file.content)
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_not_empty() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "hygiene must run from the crate root");
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for &(pattern, budget, instead) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("`{pattern}`: found {count}, max {budget} ({instead})\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn production_lines_stop_at_inline_tests() {
    let src = "fn a() {}\n#[cfg(test)]\nmod tests {\n    fn b() { x.unwrap(); }\n}\n";
    let lines: Vec<&str> = production_lines(src).collect();
    assert_eq!(lines, vec!["fn a() {}"]);
}

#[test]
fn placeholder_bindings_count_against_discard_budget() {
    let src = "fn f(request: &R) {\n    let _request = request;\n}\n";
    let files = vec![SourceFile { path: "src/net/api.rs".into(), content: src.into() }];
    assert_eq!(hits(&files, "let _"), vec![("src/net/api.rs".to_owned(), 1)]);
}
