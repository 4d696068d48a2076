//! Command-line interface for `aes-modes`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes_modes::{
    cbc, ecb, encrypt_block, encrypted_len, expand_key, key_from_string, Block, Padding,
    RoundKeys, BLOCK_SIZE,
};
use anyhow::{bail, ensure, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, Level};

/// AES-ECB/CBC file encryption.
#[derive(Parser)]
#[command(name = "aesctl", version, author, about = "AES-ECB/CBC encryption tool")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file.
    Enc(CodecArgs),
    /// Decrypt a file.
    Dec(CodecArgs),
    /// Run the FIPS-197 known-answer tests.
    Selftest,
    /// Encrypt and decrypt random data with a random key and IV.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Message length in bytes.
        #[arg(long, default_value_t = 40)]
        len: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Ecb,
    Cbc,
}

#[derive(Args)]
struct CodecArgs {
    /// Chaining mode.
    #[arg(long, value_enum, default_value_t = Mode::Cbc)]
    mode: Mode,
    /// Key as 32, 48 or 64 hex characters.
    #[arg(
        long,
        value_name = "HEX",
        conflicts_with = "key_str",
        required_unless_present = "key_str"
    )]
    key_hex: Option<String>,
    /// Key as a raw 16, 24 or 32-byte string.
    #[arg(long, value_name = "TEXT")]
    key_str: Option<String>,
    /// CBC IV as 32 hex characters (defaults to all zeros).
    #[arg(long, value_name = "HEX")]
    iv_hex: Option<String>,
    /// Disable PKCS#7 padding; data must then be a multiple of 16 bytes.
    #[arg(long, default_value_t = false)]
    no_padding: bool,
    /// Input file.
    #[arg(long, value_name = "FILE")]
    input: PathBuf,
    /// Output file.
    #[arg(long, value_name = "FILE")]
    output: PathBuf,
}

/// Everything needed to run one mode call, parsed from the arguments.
struct Codec {
    mode: Mode,
    round_keys: RoundKeys,
    iv: Option<Block>,
    padding: Padding,
}

impl Codec {
    fn from_args(args: &CodecArgs) -> Result<Self> {
        let key = match (&args.key_hex, &args.key_str) {
            (Some(hex_key), _) => hex::decode(hex_key.trim()).context("decode key hex")?,
            (None, Some(text)) => key_from_string(text),
            (None, None) => bail!("either --key-hex or --key-str is required"),
        };
        let iv = args.iv_hex.as_deref().map(parse_iv_hex).transpose()?;
        if iv.is_some() && args.mode == Mode::Ecb {
            bail!("--iv-hex only applies to CBC mode");
        }
        Self::new(args.mode, &key, iv, Padding::from(!args.no_padding))
    }

    fn new(mode: Mode, key: &[u8], iv: Option<Block>, padding: Padding) -> Result<Self> {
        let round_keys = expand_key(key).context("expand key")?;
        Ok(Self {
            mode,
            round_keys,
            iv,
            padding,
        })
    }

    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = vec![0u8; encrypted_len(data.len(), self.padding)];
        let written = match self.mode {
            Mode::Ecb => ecb::encrypt(&self.round_keys, data, &mut out, self.padding),
            Mode::Cbc => cbc::encrypt(
                &self.round_keys,
                data,
                self.iv.as_ref(),
                &mut out,
                self.padding,
            ),
        }
        .context("encrypt")?;
        out.truncate(written);
        Ok(out)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = vec![0u8; data.len()];
        let plain_len = match self.mode {
            Mode::Ecb => ecb::decrypt(&self.round_keys, data, &mut out, self.padding),
            Mode::Cbc => cbc::decrypt(
                &self.round_keys,
                data,
                self.iv.as_ref(),
                &mut out,
                self.padding,
            ),
        }
        .context("decrypt")?;
        out.truncate(plain_len);
        Ok(out)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Enc(args) => cmd_codec(&args, true),
        Commands::Dec(args) => cmd_codec(&args, false),
        Commands::Selftest => cmd_selftest(),
        Commands::Demo { seed, len } => cmd_demo(seed, len),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_codec(args: &CodecArgs, encrypt: bool) -> Result<()> {
    let codec = Codec::from_args(args)?;
    let data = read_file(&args.input)?;
    let result = if encrypt {
        codec.encrypt(&data)?
    } else {
        codec.decrypt(&data)?
    };
    info!(
        input = data.len(),
        output = result.len(),
        mode = ?codec.mode,
        "processed file"
    );
    fs::write(&args.output, result)
        .with_context(|| format!("write {}", args.output.display()))?;
    Ok(())
}

/// FIPS-197 Appendix C: (key, ciphertext) for plaintext 00112233..ff.
const KNOWN_ANSWERS: [(&str, &str); 3] = [
    (
        "000102030405060708090a0b0c0d0e0f",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
    (
        "000102030405060708090a0b0c0d0e0f1011121314151617",
        "dda97ca4864cdfe06eaf70a0ec0d7191",
    ),
    (
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "8ea2b7ca516745bfeafc49904b496089",
    ),
];

const KNOWN_PLAINTEXT: &str = "00112233445566778899aabbccddeeff";

fn run_known_answers() -> Result<usize> {
    let plain = parse_block_hex(KNOWN_PLAINTEXT)?;
    for (key_hex, cipher_hex) in KNOWN_ANSWERS {
        let key = hex::decode(key_hex).context("decode key hex")?;
        let round_keys = expand_key(&key).context("expand key")?;
        let actual = hex::encode(encrypt_block(&plain, &round_keys));
        debug!(bits = key.len() * 8, "known-answer test");
        ensure!(
            actual == cipher_hex,
            "AES-{} known-answer mismatch: got {actual}, want {cipher_hex}",
            key.len() * 8
        );
    }
    Ok(KNOWN_ANSWERS.len())
}

fn cmd_selftest() -> Result<()> {
    let passed = run_known_answers()?;
    println!("selftest: {passed} known-answer vectors passed");
    Ok(())
}

fn cmd_demo(seed: Option<u64>, len: usize) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = [0u8; 32];
    let mut iv = [0u8; BLOCK_SIZE];
    let mut message = vec![0u8; len];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut iv);
    rng.fill_bytes(&mut message);

    let codec = Codec::new(Mode::Cbc, &key, Some(iv), Padding::Pkcs7)?;
    let ciphertext = codec.encrypt(&message)?;
    let decrypted = codec.decrypt(&ciphertext)?;

    println!("demo key: {}", hex::encode(key));
    println!("iv: {}", hex::encode(iv));
    println!("plaintext: {}", hex::encode(&message));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", hex::encode(&decrypted));
    if decrypted != message {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    if bytes.len() != BLOCK_SIZE {
        bail!("block must be 16 bytes (32 hex characters)");
    }
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(&bytes);
    Ok(block)
}

fn parse_iv_hex(hex_str: &str) -> Result<Block> {
    parse_block_hex(hex_str).context("parse IV")
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read {}", path.display()))
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
