//! Command-line interface for `mini-aes`.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info, LevelFilter};
use mini_aes::{
    decrypt8, decrypt_block, encrypt8, encrypt_block, expand_key, try_decrypt, try_encrypt,
    Aes128Key, RoundKeySchedule, BATCH_SIZE, BLOCK_SIZE,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-128 block cipher CLI.
#[derive(Parser)]
#[command(name = "miniaes", version, author, about = "Constant-time AES-128 block cipher")]
struct Cli {
    /// Raise log verbosity (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the 11 round keys derived from a key.
    Expand {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Encrypt one block (32 hex chars) or eight blocks (256 hex chars).
    Enc {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block or batch as hex.
        #[arg(long, value_name = "HEX")]
        data_hex: String,
    },
    /// Decrypt one block (32 hex chars) or eight blocks (256 hex chars).
    Dec {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block or batch as hex.
        #[arg(long, value_name = "HEX")]
        data_hex: String,
    },
    /// Verify known answers, round trips and batched equivalence.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 16)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: generate a key, encrypt a random batch, decrypt it back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Expand { key_hex } => cmd_expand(&key_hex),
        Commands::Enc { key_hex, data_hex } => cmd_transform(&key_hex, &data_hex, true),
        Commands::Dec { key_hex, data_hex } => cmd_transform(&key_hex, &data_hex, false),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        _ => {
            builder.filter_level(LevelFilter::Debug);
        }
    }
    // Only fails if a logger is already installed.
    let _ = builder.try_init();
}

fn cmd_expand(key_hex: &str) -> Result<()> {
    let round_keys = expand_key(&parse_key_hex(key_hex)?);
    for (round, key) in round_keys.round_keys().iter().enumerate() {
        println!("{round:>2}: {}", hex::encode(key));
    }
    Ok(())
}

fn cmd_transform(key_hex: &str, data_hex: &str, encrypt: bool) -> Result<()> {
    let round_keys = expand_key(&parse_key_hex(key_hex)?);
    let input = hex::decode(data_hex.trim()).context("decode data hex")?;
    let mut output = vec![0u8; input.len()];
    debug!(
        "{} {} bytes",
        if encrypt { "encrypting" } else { "decrypting" },
        input.len()
    );
    let result = if encrypt {
        try_encrypt(&round_keys, &input, &mut output)
    } else {
        try_decrypt(&round_keys, &input, &mut output)
    };
    result.context("data must be 16 or 128 bytes")?;
    println!("{}", hex::encode(output));
    Ok(())
}

/// FIPS-197 Appendix B and C.1 known answers.
const KNOWN_ANSWERS: [(&str, &str, &str); 2] = [
    (
        "2b7e151628aed2a6abf7158809cf4f3c",
        "3243f6a8885a308d313198a2e0370734",
        "3925841d02dc09fbdc118597196a0b32",
    ),
    (
        "000102030405060708090a0b0c0d0e0f",
        "00112233445566778899aabbccddeeff",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
];

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    for (key_hex, pt_hex, ct_hex) in KNOWN_ANSWERS {
        let round_keys = expand_key(&parse_key_hex(key_hex)?);
        let plaintext = parse_block_hex(pt_hex)?;
        let ciphertext = parse_block_hex(ct_hex)?;
        if encrypt_block(&plaintext, &round_keys) != ciphertext {
            bail!("known-answer encryption mismatch for key {key_hex}");
        }
        if decrypt_block(&ciphertext, &round_keys) != plaintext {
            bail!("known-answer decryption mismatch for key {key_hex}");
        }
        debug!("known answer ok for key {key_hex}");
    }

    let mut rng = seeded_rng(seed);
    for sample in 0..samples {
        let mut key_bytes = [0u8; 16];
        rng.fill_bytes(&mut key_bytes);
        let round_keys = expand_key(&Aes128Key::from(key_bytes));

        let mut batch = [0u8; BATCH_SIZE];
        rng.fill_bytes(&mut batch);
        check_batch(&batch, &round_keys)
            .with_context(|| format!("sample {sample}, key {}", hex::encode(key_bytes)))?;
    }

    info!("{} known answers and {samples} random samples passed", KNOWN_ANSWERS.len());
    println!("ok");
    Ok(())
}

fn check_batch(batch: &[u8; BATCH_SIZE], round_keys: &RoundKeySchedule) -> Result<()> {
    let ciphertext = encrypt8(batch, round_keys);
    if decrypt8(&ciphertext, round_keys) != *batch {
        bail!("batched round trip failed");
    }
    for (pt, ct) in batch
        .chunks_exact(BLOCK_SIZE)
        .zip(ciphertext.chunks_exact(BLOCK_SIZE))
    {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(pt);
        let single = encrypt_block(&block, round_keys);
        if single[..] != *ct {
            bail!("batched encryption differs from single-block encryption");
        }
        if decrypt_block(&single, round_keys) != block {
            bail!("single-block round trip failed");
        }
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let round_keys = expand_key(&Aes128Key::from(key_bytes));

    let mut batch = [0u8; BATCH_SIZE];
    rng.fill_bytes(&mut batch);
    let ciphertext = encrypt8(&batch, &round_keys);
    let decrypted = decrypt8(&ciphertext, &round_keys);

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(batch));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != batch {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes128Key::try_from(bytes.as_slice())
        .context("AES-128 key must be 16 bytes (32 hex characters)")
}

fn parse_block_hex(hex_str: &str) -> Result<[u8; BLOCK_SIZE]> {
    let bytes = hex::decode(hex_str).context("decode block hex")?;
    if bytes.len() != BLOCK_SIZE {
        bail!("block must be 16 bytes (32 hex characters)");
    }
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(&bytes);
    Ok(block)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => ChaCha20Rng::from_entropy(),
    }
}
