// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_chapter_content(size: usize) -> String {
    let base = "## Part\n\nShe opened the door. \"Who is there?\" she asked.\n\n**Nobody** answered, and the wind said \"nothing\" at all.\n---\nAn unbalanced ** marker and a stray \" quote.\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_dialogue_heavy(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("\"Line {i}\" he said, **then** \"again\" and \"again\"."))
        .collect::<Vec<_>>()
        .join("\n")
}
