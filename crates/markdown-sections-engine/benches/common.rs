// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_complex_markdown(sections: usize, depth: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {}\n\n", section));
        content.push_str(&generate_nested_content(depth, 2));
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
fn generate_nested_content(remaining_depth: usize, current_level: usize) -> String {
    if remaining_depth == 0 {
        return String::new();
    }

    let mut content = String::new();
    let header_prefix = "#".repeat(current_level);

    content.push_str(&format!(
        "{} Subsection Level {}\n\n",
        header_prefix, current_level
    ));
    content.push_str("Some paragraph content with multiple sentences.\nA second line that gets reflowed.\n\n");

    for i in 0..3 {
        content.push_str(&format!(
            "- [Item {}](https://tool{}.example/level{})\n",
            i, i, current_level
        ));
    }
    content.push('\n');

    if current_level % 3 == 0 {
        content.push_str("```rust\nfn benchmark_function() {\n    let value = 42;\n    println!(\"{}\", value);\n}\n```\n\n");
    }

    if remaining_depth > 1 && current_level < 6 {
        content.push_str(&generate_nested_content(
            remaining_depth - 1,
            current_level + 1,
        ));
    }

    content
}

#[allow(dead_code)]
pub fn generate_link_list(count: usize) -> String {
    (0..count)
        .map(|i| match i % 3 {
            0 => format!("- [Tool {i}](https://tool{i}.example/path)\n"),
            1 => format!("- [Doc {i}](docs/{i}.md)\n"),
            _ => format!("- [Mirror {i}](ftp://mirror{i}.example)\n"),
        })
        .collect()
}
