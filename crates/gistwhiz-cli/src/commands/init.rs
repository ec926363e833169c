//! The `gistwhiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("gistwhiz.toml").exists() {
        println!("gistwhiz.toml already exists, skipping.");
    } else {
        std::fs::write("gistwhiz.toml", SAMPLE_CONFIG)?;
        println!("Created gistwhiz.toml");
    }

    std::fs::create_dir_all("answer-sets")?;
    let example_path = std::path::Path::new("answer-sets/example.toml");
    if example_path.exists() {
        println!("answer-sets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_ANSWER_SET)?;
        println!("Created answer-sets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: gistwhiz validate --answer-set answer-sets/example.toml");
    println!("  2. Run: gistwhiz grade --answer-set answer-sets/example.toml");
    println!("  3. Try: gistwhiz explain \"5000 mg\" \"5 g\"");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gistwhiz configuration
#
# The defaults below are the standard grading policy.

[tolerances]
token_mismatch_ratio = 0.2
min_fuzzy_len = 3
max_len_diff = 2
coverage_ratio = 0.95
quantity_epsilon = 0.000001
"#;

const EXAMPLE_ANSWER_SET: &str = r#"[answer_set]
id = "example"
name = "Example Answer Set"
description = "A few cases showing what the comparator accepts"

[[cases]]
id = "case-insensitive"
reference = "Heart"
answer = "heart"
tags = ["basics"]

[[cases]]
id = "parenthetical"
reference = "The heart (cardiac muscle)"
answer = "heart"
tags = ["basics", "synonyms"]

[[cases]]
id = "unit-symbol"
reference = "5 grams"
answer = "5 g"
tags = ["units"]

[[cases]]
id = "unit-prefix"
reference = "5000 mg"
answer = "5 g"
tags = ["units"]

[[cases]]
id = "word-number"
reference = "five apples"
answer = "5 apples"
tags = ["numbers"]

[[cases]]
id = "typo"
reference = "stomach"
answer = "stomoch"
tags = ["typos"]

[[cases]]
id = "short-word"
reference = "ear"
answer = "eat"
expected = false
tags = ["typos"]
"#;
