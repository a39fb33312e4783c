//! Build script to generate embedded dice sets
//!
//! Reads dice files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_dice_set(
        "data/classic_dice.txt",
        &Path::new(&out_dir).join("classic_dice.rs"),
        "CLASSIC_DICE",
        "Classic 4x4 Boggle cubes (16 dice)",
    );

    // Rebuild if dice sets change
    println!("cargo:rerun-if-changed=data/classic_dice.txt");
}

fn generate_dice_set(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let dice: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    let count = dice.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dice set").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for faces in dice {
        writeln!(output, "    {:?},", faces.trim()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of dice in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
