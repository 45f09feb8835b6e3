use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tabula::cipher::Cipher;
use tabula::cli::{run_decode, run_encode, run_hack, run_train, DecodeOptions, EncodeOptions};

/// Version info from build.rs
const VERSION: &str = env!("TABULA_VERSION");
const BUILD: &str = env!("TABULA_BUILD");
const PROFILE: &str = env!("TABULA_PROFILE");
const GIT_HASH: &str = env!("TABULA_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "tabula")]
#[command(author, about = "Classical cipher toolkit with frequency-analysis cryptanalysis", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text under a cipher
    #[command(alias = "e")]
    Encode {
        /// Cipher scheme: caesar, vigenere, or vernam
        #[arg(long, value_parser = parse_cipher)]
        cipher: Cipher,

        /// Integer shift for caesar, keyword for vigenere/vernam
        #[arg(long)]
        key: String,

        /// Input file (reads stdin when omitted)
        #[arg(long)]
        input_file: Option<PathBuf>,

        /// Output file (writes stdout when omitted)
        #[arg(long)]
        output_file: Option<PathBuf>,
    },

    /// Decode text under a cipher
    #[command(alias = "d")]
    Decode {
        /// Cipher scheme: caesar, vigenere, or vernam
        #[arg(long, value_parser = parse_cipher)]
        cipher: Cipher,

        /// The key the text was encoded with
        #[arg(long)]
        key: String,

        /// Input file (reads stdin when omitted)
        #[arg(long)]
        input_file: Option<PathBuf>,

        /// Output file (writes stdout when omitted)
        #[arg(long)]
        output_file: Option<PathBuf>,
    },

    /// Train a symbol-frequency model from sample text
    Train {
        /// Training sample file (reads stdin when omitted)
        #[arg(long)]
        text_file: Option<PathBuf>,

        /// Where to persist the trained model
        #[arg(long)]
        model_file: PathBuf,
    },

    /// Recover a caesar shift with a trained model and decode
    Hack {
        /// Input file (reads stdin when omitted)
        #[arg(long)]
        input_file: Option<PathBuf>,

        /// Output file (writes stdout when omitted)
        #[arg(long)]
        output_file: Option<PathBuf>,

        /// Trained model to score candidate shifts against
        #[arg(long)]
        model_file: PathBuf,
    },
}

fn parse_cipher(s: &str) -> Result<Cipher, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("tabula {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encode {
            cipher,
            key,
            input_file,
            output_file,
        } => {
            let options = EncodeOptions { cipher, key };
            run_encode(input_file.as_deref(), output_file.as_deref(), &options)
        }

        Commands::Decode {
            cipher,
            key,
            input_file,
            output_file,
        } => {
            let options = DecodeOptions { cipher, key };
            run_decode(input_file.as_deref(), output_file.as_deref(), &options)
        }

        Commands::Train {
            text_file,
            model_file,
        } => run_train(text_file.as_deref(), &model_file),

        Commands::Hack {
            input_file,
            output_file,
            model_file,
        } => run_hack(input_file.as_deref(), output_file.as_deref(), &model_file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
