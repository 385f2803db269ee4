use labelmark::markdown_to_styled;
use std::io::{self, Read};

fn main() {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .expect("Failed to read stdin");
    let styled = markdown_to_styled(&input);
    let output = serde_json::to_string_pretty(&styled).expect("Failed to serialize output");
    println!("{}", output);
}
