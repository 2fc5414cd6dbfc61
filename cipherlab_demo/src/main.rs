use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, LevelFilter};
use rand::rngs::OsRng;

use cipherlab_core::{
    analysis, mapping, numeric, BlumBlumShubCipher, CaesarCipher, Cipher, DiffieHellmanParty,
    OneTimePadCipher, RailFenceCipher, RsaCryptosystem, SimplifiedDesCipher, VigenereCipher,
};

#[derive(Parser)]
#[command(
    name = "cipherlab",
    author,
    version,
    about = "Classical and textbook cipher showcase (educational, not secure)"
)]
struct Cli {
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Caesar substitution cipher.
    Caesar {
        #[arg(long, default_value_t = 23)]
        shift: i64,
        #[arg(default_value = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG")]
        text: String,
    },
    /// Vigenere polyalphabetic cipher.
    Vigenere {
        #[arg(long, default_value = "LEMON")]
        key: String,
        #[arg(default_value = "ATTACK AT DAWN")]
        text: String,
    },
    /// Rail-fence transposition cipher.
    Railfence {
        #[arg(long, default_value_t = 3)]
        rails: usize,
        #[arg(default_value = "WEAREDISCOVEREDFLEEATONCE")]
        text: String,
    },
    /// One-time pad with a randomly generated uppercase pad.
    Otp {
        #[arg(default_value = "HELLO")]
        text: String,
    },
    /// Blum Blum Shub stream cipher over a bit string.
    Bbs {
        #[arg(long, default_value_t = 11)]
        p: i64,
        #[arg(long, default_value_t = 23)]
        q: i64,
        #[arg(long, default_value_t = 3)]
        seed: i64,
        #[arg(default_value = "10110010")]
        bits: String,
    },
    /// Simplified DES on a single 8-bit block.
    Sdes {
        #[arg(long, default_value = "1100110001")]
        key: String,
        #[arg(default_value = "11111111")]
        block: String,
    },
    /// Textbook RSA over lowercase text.
    Rsa {
        #[arg(long, default_value_t = 61)]
        p: i64,
        #[arg(long, default_value_t = 53)]
        q: i64,
        #[arg(long, short, default_value_t = 17)]
        exponent: i64,
        #[arg(default_value = "helloworld")]
        text: String,
    },
    /// Diffie-Hellman key exchange between two in-process parties.
    Dh {
        #[arg(long, default_value_t = 23)]
        modulus: i64,
        #[arg(long, default_value_t = 5)]
        base: i64,
        #[arg(long, default_value_t = 6)]
        alice: i64,
        #[arg(long, default_value_t = 15)]
        bob: i64,
    },
    /// Character-frequency table for manual cryptanalysis, as JSON.
    Freq { text: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    match cli.command {
        Commands::Caesar { shift, text } => {
            showcase(&mut CaesarCipher::new(shift), &text)
        }
        Commands::Vigenere { key, text } => {
            let mut cipher = VigenereCipher::new(&mapping::to_codepoints(&key))?;
            showcase(&mut cipher, &text)
        }
        Commands::Railfence { rails, text } => {
            let mut cipher = RailFenceCipher::new(rails)?;
            showcase(&mut cipher, &text)
        }
        Commands::Otp { text } => cmd_otp(&text),
        Commands::Bbs { p, q, seed, bits } => cmd_bbs(p, q, seed, &bits),
        Commands::Sdes { key, block } => cmd_sdes(&key, &block),
        Commands::Rsa { p, q, exponent, text } => cmd_rsa(p, q, exponent, &text),
        Commands::Dh { modulus, base, alice, bob } => cmd_dh(modulus, base, alice, bob),
        Commands::Freq { text } => cmd_freq(&text),
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default));
    builder.format_timestamp(None);
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

/// Runs a full encrypt/decrypt cycle and prints all three stages.
fn showcase(cipher: &mut dyn Cipher, text: &str) -> Result<()> {
    let plaintext = mapping::to_codepoints(text);
    let ciphertext = cipher.encrypt(&plaintext)?;
    let recovered = cipher.decrypt(&ciphertext)?;
    println!("Plaintext:  {text}");
    println!("Ciphertext: {}", mapping::to_text(&ciphertext));
    println!("Decrypted:  {}", mapping::to_text(&recovered));
    Ok(())
}

fn cmd_otp(text: &str) -> Result<()> {
    let plaintext = mapping::to_codepoints(text);
    // Pad drawn from uppercase letters, exactly as long as the message.
    let pad = numeric::random_in_range(&mut OsRng, plaintext.len(), 'A' as i64, 'Z' as i64 + 1);
    println!("Generated pad: {}", mapping::to_text(&pad));
    let mut cipher = OneTimePadCipher::new(&pad)?;
    showcase(&mut cipher, text)?;

    debug!("verifying the pad rejects a second encryption");
    match cipher.encrypt(&plaintext) {
        Err(err) => println!("Second encrypt refused as expected: {err}"),
        Ok(_) => bail!("one-time pad allowed reuse"),
    }
    Ok(())
}

fn cmd_bbs(p: i64, q: i64, seed: i64, bits: &str) -> Result<()> {
    let plaintext = parse_bits(bits)?;
    let mut cipher = BlumBlumShubCipher::new(p, q, seed);
    let ciphertext = cipher.encrypt(&plaintext)?;
    let recovered = cipher.decrypt(&ciphertext)?;
    println!("Plaintext:  {}", format_bits(&plaintext));
    println!("Keystream:  {}", format_bits(&cipher.keystream(plaintext.len())));
    println!("Ciphertext: {}", format_bits(&ciphertext));
    println!("Decrypted:  {}", format_bits(&recovered));
    Ok(())
}

fn cmd_sdes(key: &str, block: &str) -> Result<()> {
    let key = parse_bits(key)?;
    let block = parse_bits(block)?;
    let mut cipher = SimplifiedDesCipher::new(&key)?;
    let ciphertext = cipher.encrypt(&block)?;
    let recovered = cipher.decrypt(&ciphertext)?;
    println!("Plaintext:  {}", format_bits(&block));
    println!("Ciphertext: {}", format_bits(&ciphertext));
    println!("Decrypted:  {}", format_bits(&recovered));
    Ok(())
}

fn cmd_rsa(p: i64, q: i64, exponent: i64, text: &str) -> Result<()> {
    let rsa = RsaCryptosystem::new(p, q, exponent);
    println!("Modulus n = {}", rsa.modulus());
    let ciphertext = rsa.encrypt_text(text)?;
    println!("Plaintext:  {text}");
    println!("Ciphertext: {ciphertext}");
    println!("Decrypted:  {}", rsa.decrypt_text(&ciphertext));
    Ok(())
}

fn cmd_dh(modulus: i64, base: i64, alice_key: i64, bob_key: i64) -> Result<()> {
    let mut alice = DiffieHellmanParty::new(modulus, base);
    let mut bob = DiffieHellmanParty::new(modulus, base);
    alice.set_private_key(alice_key);
    bob.set_private_key(bob_key);

    alice.send_public_key(&mut bob)?;
    bob.send_public_key(&mut alice)?;

    println!("Alice's public key: {}", alice.public_key()?);
    println!("Bob's public key:   {}", bob.public_key()?);
    println!("Alice's shared secret: {:?}", alice.secret());
    println!("Bob's shared secret:   {:?}", bob.secret());
    if alice.secret() != bob.secret() {
        bail!("parties failed to converge on a shared secret");
    }
    Ok(())
}

fn cmd_freq(text: &str) -> Result<()> {
    let table = analysis::frequency_distribution(text);
    let mut entries: Vec<(char, f64)> = table.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    let json = serde_json::Map::from_iter(
        entries
            .into_iter()
            .map(|(letter, frequency)| (letter.to_string(), frequency.into())),
    );
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn parse_bits(text: &str) -> Result<Vec<i64>> {
    text.chars()
        .map(|c| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            other => bail!("expected a bit string of 0/1, got {other:?}"),
        })
        .collect()
}

fn format_bits(bits: &[i64]) -> String {
    bits.iter().map(|bit| bit.to_string()).collect()
}
