use pest::Parser;
use petalviz::data::csv::{CsvParser, Rule};

fn main() {
    let input = std::env::args()
        .nth(1)
        .map(|path| std::fs::read_to_string(&path).expect("Failed to read file"))
        .unwrap_or_else(|| {
            "Category,Solution ID,Solution\nFamily Solutions,F-1,\"Child tax credit, \"\"expanded\"\"\"\n"
                .to_string()
        });

    match CsvParser::parse(Rule::file, input.trim_start_matches('\u{feff}')) {
        Ok(pairs) => {
            println!(
                "{}",
                pest_ascii_tree::into_ascii_tree(pairs.clone()).unwrap()
            );
        }
        Err(e) => {
            eprintln!("Parse error: {}", e);
        }
    }
}
