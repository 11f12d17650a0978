use clap::{Parser, ValueEnum};
use vigenere_analysis::{cipher, LetterSequence};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher")]
    key: String,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Main entry point for the Vigenère cipher program.
fn main() {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Read input file content and normalize it for the engine
    let content: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read input file");
    let text = LetterSequence::from_text(&clean_text(&content))
        .expect("Normalized input is alphabetic");
    let key = LetterSequence::from_text(&clean_text(&cli.key))
        .expect("Normalized key is alphabetic");
    if key.is_empty() {
        exit_with("Key must contain at least one letter");
    }

    // Process based on selected mode
    let result = match cli.mode {
        OperationMode::Encrypt => {
            println!("Encrypting with key: {}", key);
            cipher::encrypt(&text, &key)
        }
        OperationMode::Decrypt => {
            println!("Decrypting with key: {}", key);
            cipher::decrypt(&text, &key)
        }
    }
    .unwrap_or_else(|err| exit_with(&err.to_string()));

    // Write result to output file
    std::fs::write(&cli.output, result.to_string())
        .expect("Failed to write output file");

    println!("Operation completed successfully! Output saved to: {}", cli.output);
}

/// Cleans text by keeping only alphabetic characters and converting to uppercase
fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn exit_with(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
