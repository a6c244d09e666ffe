//! Build script to generate embedded word lists
//!
//! Reads the default word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/answers_tiny.txt",
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Default answer words",
    );

    generate_word_list(
        "data/guesses_tiny.txt",
        &Path::new(&out_dir).join("guesses.rs"),
        "GUESSES",
        "Default extra guess words",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/answers_tiny.txt");
    println!("cargo:rerun-if-changed=data/guesses_tiny.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content.split_whitespace().collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({input_path})").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
