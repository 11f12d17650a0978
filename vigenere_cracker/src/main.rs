use clap::Parser;
use vigenere_analysis::{break_cipher, cipher, FrequencyModel, LetterSequence};

/// Command-line arguments for the Vigenère cracker program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: String,
}

fn main() {
    let cli: Cli = Cli::parse();
    let input: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read input file");

    // Clean text: only alphabetic characters, uppercase
    let ciphertext = LetterSequence::from_text(&clean_text(&input))
        .expect("Normalized input is alphabetic");

    if ciphertext.len() < 50 {
        eprintln!("Warning: Text may be too short for reliable analysis");
    }

    // Run the full attack: key length search, then per-column key recovery
    let model = FrequencyModel::english();
    let recovered = break_cipher(&ciphertext, &model).unwrap_or_else(|err| {
        eprintln!("Analysis failed: {err}");
        std::process::exit(1);
    });

    println!("Found key length: {}", recovered.key.len());
    println!("Recovered key: {}", recovered.key);
    for (position, score) in recovered.column_scores.iter().enumerate() {
        println!("  column {position}: fit score {score:.6}");
    }

    // Decrypt with the recovered key
    let plaintext = cipher::decrypt(&ciphertext, &recovered.key)
        .expect("Recovered key is never empty");

    // Write decrypted text to file
    std::fs::write(&cli.output, plaintext.to_string())
        .expect("Failed to write output file");
}

/// Cleans text by keeping only alphabetic characters and converting to uppercase
fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
