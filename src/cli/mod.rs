//! Command-line interface.

pub mod add;
pub mod decrypt;
pub mod encrypt;
pub mod output;
pub mod run;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::config::Settings;
use crate::core::constants::KEY_ID_ENV;
use crate::error::Result;

/// kmsenv - KMS-encrypted values in plain key=value files.
#[derive(Parser)]
#[command(
    name = "kmsenv",
    about = "Keep secrets in key=value files as AWS KMS ciphertext",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub kms: KmsArgs,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Global AWS options. Each falls back to its environment variable.
#[derive(Args, Clone, Debug, Default)]
pub struct KmsArgs {
    /// AWS region, e.g. eu-west-1
    #[arg(short, long, global = true, env = "AWS_REGION")]
    pub region: Option<String>,

    /// AWS profile name
    #[arg(short, long, global = true, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// AWS KMS key id, ARN or alias (needed to encrypt)
    #[arg(short, long, global = true, env = KEY_ID_ENV)]
    pub key_id: Option<String>,

    /// AWS access key id
    #[arg(
        short = 'i',
        long,
        global = true,
        env = "AWS_ACCESS_KEY_ID",
        hide_env_values = true
    )]
    pub access_key_id: Option<String>,

    /// AWS secret access key
    #[arg(
        short,
        long,
        global = true,
        env = "AWS_SECRET_ACCESS_KEY",
        hide_env_values = true
    )]
    pub secret_access_key: Option<String>,

    /// AWS session token for temporary credentials
    #[arg(long, global = true, env = "AWS_SESSION_TOKEN", hide_env_values = true)]
    pub session_token: Option<String>,
}

impl From<KmsArgs> for Settings {
    fn from(args: KmsArgs) -> Self {
        Settings {
            region: args.region,
            profile: args.profile,
            key_id: args.key_id,
            access_key_id: args.access_key_id,
            secret_access_key: args.secret_access_key,
            session_token: args.session_token,
        }
        .normalized()
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Decrypt every secret: value in a file and print the result
    Decrypt {
        /// Path to the key=value file
        file: String,
    },

    /// Encrypt a value and append it to a file as KEY=secret:...
    Add {
        /// Path to the key=value file
        file: String,
        /// Entry to add, as KEY=value
        content: String,
    },

    /// Encrypt a value and print the raw base64 ciphertext
    Encrypt {
        /// Value to encrypt
        value: String,
    },

    /// Run a command with the decrypted file injected as env vars
    Run {
        /// Path to the key=value file
        file: String,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => Self::Bash,
            Shell::Zsh => Self::Zsh,
            Shell::Fish => Self::Fish,
            Shell::PowerShell => Self::PowerShell,
        }
    }
}

/// Execute a command.
pub fn execute(command: Command, settings: Settings) -> Result<()> {
    use Command::*;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    rt.block_on(async move {
        match command {
            Decrypt { file } => decrypt::execute(&file, &settings).await,
            Add { file, content } => add::execute(&file, &content, &settings).await,
            Encrypt { value } => encrypt::execute(&value, &settings).await,
            Run { file, command } => run::execute(&file, &command, &settings).await,
            Completions { shell } => {
                clap_complete::generate(
                    clap_complete::Shell::from(shell),
                    &mut Cli::command(),
                    "kmsenv",
                    &mut std::io::stdout(),
                );
                Ok(())
            }
        }
    })
}
