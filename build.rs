//! Build script to generate embedded word-set catalogs
//!
//! Reads word-set files (one pyramid per line, six words separated by
//! whitespace) and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_catalog(
        "data/daily_sets.txt",
        &Path::new(&out_dir).join("daily.rs"),
        "DAILY_SETS",
        "Daily puzzle word sets",
    );

    generate_catalog(
        "data/endless_nature.txt",
        &Path::new(&out_dir).join("nature.rs"),
        "NATURE_SETS",
        "Endless mode word sets: nature",
    );

    generate_catalog(
        "data/endless_daily_life.txt",
        &Path::new(&out_dir).join("daily_life.rs"),
        "DAILY_LIFE_SETS",
        "Endless mode word sets: daily life",
    );

    generate_catalog(
        "data/endless_objects.txt",
        &Path::new(&out_dir).join("objects.rs"),
        "OBJECT_SETS",
        "Endless mode word sets: objects",
    );

    println!("cargo:rerun-if-changed=data/daily_sets.txt");
    println!("cargo:rerun-if-changed=data/endless_nature.txt");
    println!("cargo:rerun-if-changed=data/endless_daily_life.txt");
    println!("cargo:rerun-if-changed=data/endless_objects.txt");
}

fn generate_catalog(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let sets: Vec<Vec<&str>> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split_whitespace().collect())
        .collect();

    for (i, set) in sets.iter().enumerate() {
        assert!(
            set.len() == 6,
            "{input_path}:{}: expected 6 words, found {}",
            i + 1,
            set.len()
        );
    }

    let count = sets.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word-set catalog").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[[&str; 6]] = &[").unwrap();

    for set in sets {
        let quoted: Vec<String> = set.iter().map(|w| format!("\"{w}\"")).collect();
        writeln!(output, "    [{}],", quoted.join(", ")).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of word sets in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
