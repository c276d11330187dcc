//! Command-line interface for `sboxkit`.

#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gf256_core::{irreducible_polynomials, ReductionPolynomial, SBox};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sbox_gen::{derive, DeriveConfig, DeriveOutput, Generator};
use sbox_lincrypt::{analyze_sorted, write_greymap, write_text};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// S-box derivation and linear analysis CLI.
#[derive(Parser)]
#[command(
    name = "sboxkit",
    version,
    author,
    about = "Derive GF(2^8) S-boxes and measure their linear deviation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive an S-box from a degree-8 reduction polynomial.
    Derive {
        /// Reduction polynomial in hex (e.g. 11b). Prompted for when omitted.
        #[arg(long, value_name = "HEX")]
        poly: Option<String>,
        /// Print the table to stdout as a hex grid.
        #[arg(long, default_value_t = false)]
        print: bool,
        /// Write the table in the tab-separated format.
        #[arg(long, value_name = "FILE")]
        write: Option<PathBuf>,
        /// Output the raw multiplicative inverses instead of the S-box.
        #[arg(long, default_value_t = false)]
        inverse: bool,
    },
    /// List every irreducible degree-8 polynomial.
    List,
    /// Generate a random permutation S-box.
    Random {
        /// Optional RNG seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
        /// Output path.
        #[arg(long, value_name = "FILE", default_value = "randomsbox.txt")]
        out: PathBuf,
    },
    /// Run linear analysis on an S-box file and export the sorted deviations.
    Analyze {
        /// S-box in the tab-separated format.
        #[arg(value_name = "SBOX")]
        sbox: PathBuf,
        /// Output prefix; `.txt` and `.pgm` are appended.
        #[arg(value_name = "PREFIX")]
        prefix: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Derive {
            poly,
            print,
            write,
            inverse,
        } => cmd_derive(poly.as_deref(), print, write.as_deref(), inverse),
        Commands::List => cmd_list(),
        Commands::Random { seed, out } => cmd_random(seed, &out),
        Commands::Analyze { sbox, prefix } => cmd_analyze(&sbox, &prefix),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn cmd_derive(
    poly: Option<&str>,
    print: bool,
    write: Option<&Path>,
    inverse: bool,
) -> Result<()> {
    if !print && write.is_none() {
        bail!("specify --print and/or --write <FILE>");
    }
    let poly = match poly {
        Some(text) => parse_poly_hex(text)?,
        None => prompt_poly()?,
    };
    let config = DeriveConfig {
        output: if inverse {
            DeriveOutput::Inverse
        } else {
            DeriveOutput::SBox
        },
        ..DeriveConfig::default()
    };

    let derivation = derive(poly, &config);
    let missing = derivation.unresolved();
    if missing != 0 {
        warn!(
            poly = %poly,
            missing,
            "polynomial is reducible; the table is not a permutation"
        );
    }

    if print {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write!(handle, "{}", derivation.table.hex_grid()).context("print table")?;
    }
    if let Some(path) = write {
        let file = create(path)?;
        derivation
            .table
            .write_to(BufWriter::new(file))
            .with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), poly = %poly, "table written");
    }
    Ok(())
}

fn cmd_list() -> Result<()> {
    let polys = irreducible_polynomials();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (i, poly) in polys.iter().enumerate() {
        write!(out, "{poly}, ")?;
        if i % 4 == 3 {
            writeln!(out)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

fn cmd_random(seed: Option<u64>, out: &Path) -> Result<()> {
    let mut gen = Generator::new(seeded_rng(seed));
    let sbox = gen.random_sbox();
    let file = create(out)?;
    sbox.write_to(BufWriter::new(file))
        .with_context(|| format!("write {}", out.display()))?;
    info!(path = %out.display(), "random S-box written");
    Ok(())
}

fn cmd_analyze(sbox_path: &Path, prefix: &Path) -> Result<()> {
    let sbox = load_sbox(sbox_path)?;
    let sorted = analyze_sorted(&sbox);

    let txt_path = with_suffix(prefix, "txt");
    write_text(&sorted, BufWriter::new(create(&txt_path)?))
        .with_context(|| format!("write {}", txt_path.display()))?;
    let pgm_path = with_suffix(prefix, "pgm");
    write_greymap(&sorted, BufWriter::new(create(&pgm_path)?))
        .with_context(|| format!("write {}", pgm_path.display()))?;
    info!(
        text = %txt_path.display(),
        greymap = %pgm_path.display(),
        "deviation tables written"
    );

    println!("maximum deviation: {}", sorted.max_deviation());
    Ok(())
}

fn parse_poly_hex(text: &str) -> Result<ReductionPolynomial> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let bits = u16::from_str_radix(digits, 16)
        .with_context(|| format!("decode polynomial hex {trimmed:?}"))?;
    Ok(ReductionPolynomial::new(bits)?)
}

fn prompt_poly() -> Result<ReductionPolynomial> {
    print!("Enter hexadecimal representation of degree 8 polynomial: ");
    io::stdout().flush().context("flush prompt")?;
    let mut line = String::new();
    io::stdin().read_line(&mut line).context("read polynomial")?;
    parse_poly_hex(&line)
}

fn load_sbox(path: &Path) -> Result<SBox> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    SBox::read_from(BufReader::new(file)).with_context(|| format!("parse {}", path.display()))
}

fn create(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("create {}", path.display()))
}

fn with_suffix(prefix: &Path, ext: &str) -> PathBuf {
    let mut name = prefix.as_os_str().to_owned();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poly_hex_accepts_prefixes_and_whitespace() {
        assert_eq!(parse_poly_hex("11b").expect("parse"), ReductionPolynomial::AES);
        assert_eq!(parse_poly_hex(" 0x11B\n").expect("parse"), ReductionPolynomial::AES);
        assert_eq!(parse_poly_hex("0X1f5").expect("parse").bits(), 0x1f5);
    }

    #[test]
    fn poly_hex_rejects_bad_input() {
        assert!(parse_poly_hex("1b").is_err());
        assert!(parse_poly_hex("zz").is_err());
        assert!(parse_poly_hex("").is_err());
    }

    #[test]
    fn suffix_is_appended_not_replaced() {
        assert_eq!(with_suffix(Path::new("out/aes.v1"), "pgm"), PathBuf::from("out/aes.v1.pgm"));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = seeded_rng(Some(9));
        let mut b = seeded_rng(Some(9));
        assert_eq!(a.next_u64(), b.next_u64());
    }
}
