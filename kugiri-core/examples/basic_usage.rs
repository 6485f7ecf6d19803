//! Basic usage example for the tokenizer API

use kugiri_core::{tokenize, Config, Tokenizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Simplest usage with the convenience function
    println!("=== Method 1: Convenience Function ===");
    let text = "\"She said: don't stop!\" (Really?)";
    let output = tokenize(text)?;

    println!("Found {} tokens:", output.len());
    for token in &output.tokens {
        println!(
            "  {:>2}..{:<2} {:<6} {:?}",
            token.start,
            token.end,
            token.kind.to_string(),
            token.as_str(text)
        );
    }
    println!("Tokenization took {:?}\n", output.metadata.duration);

    // Method 2: Reusing one tokenizer across texts
    println!("=== Method 2: Reusable Tokenizer ===");
    let tokenizer = Tokenizer::new();

    for text in ["(hello)", "don't", "naïve", "東京", "plain"] {
        let output = tokenizer.tokenize_text(text)?;
        println!("  {:?} -> {:?}", text, output.token_texts(text));
    }

    // Method 3: Custom break tables
    println!("\n=== Method 3: Custom Break Tables ===");
    let config = Config::builder()
        .prefix_chars(['<'])
        .suffix_chars(['>'])
        .infix_chars(['='])
        .build();
    let tokenizer = Tokenizer::with_config(config);

    let text = "<key=value>";
    let output = tokenizer.tokenize_text(text)?;
    println!("  {:?} -> {:?}", text, output.token_texts(text));

    // Method 4: Statistics over a longer text
    println!("\n=== Method 4: Statistics ===");
    let text = "The (quick) brown-fox can't jump ~high. \
                Isn't that \"strange\" to see today?";
    let output = tokenize(text)?;
    let stats = &output.metadata.stats;

    println!("  spans:        {}", output.metadata.spans_processed);
    println!("  tokens:       {}", stats.token_count);
    println!("  break tokens: {}", stats.break_token_count);
    println!("  avg length:   {:.2} bytes", stats.avg_token_length);

    Ok(())
}
