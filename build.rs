#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    println!("cargo:rustc-check-cfg=cfg(limb_bits_32)");
    select_limb_width();

    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_power_table_threshold(&outdir_path, "power_table_threshold.rs")?;
    Ok(())
}

/// Emit `limb_bits_32` cfg when the build asks for 32-bit limbs
fn select_limb_width()
{
    let limb_bits = env::var("RUST_MERSENNE_DIGITS_LIMB_BITS")
        .map(|s| s.parse::<u32>().expect("$RUST_MERSENNE_DIGITS_LIMB_BITS must be 32 or 64"))
        .unwrap_or(64);

    match limb_bits {
        32 => println!("cargo:rustc-cfg=limb_bits_32"),
        64 => {}
        other => panic!("$RUST_MERSENNE_DIGITS_LIMB_BITS must be 32 or 64, not {other}"),
    }

    println!("cargo:rerun-if-env-changed={}", "RUST_MERSENNE_DIGITS_LIMB_BITS");
}

/// Create power_table_threshold.rs, containg definition of constant POWER_TABLE_THRESHOLD
fn write_power_table_threshold(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{
    let threshold = env::var("RUST_MERSENNE_DIGITS_POWER_TABLE_THRESHOLD")
        .map(|s| s.parse::<std::num::NonZeroUsize>().expect("$RUST_MERSENNE_DIGITS_POWER_TABLE_THRESHOLD must be an integer > 0"))
        .map(|nz_num| nz_num.get())
        .unwrap_or(1000usize);

    let threshold_rs_path = outdir_path.join(filename);

    let power_table_threshold = format!("const POWER_TABLE_THRESHOLD: usize = {threshold};");

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&threshold_rs_path) {
        Ok(existing_contents) if existing_contents == power_table_threshold => {},
        _ => {
            let mut threshold_rs = File::create(&threshold_rs_path)
                .expect("Could not create power_table_threshold.rs");
            write!(threshold_rs, "{power_table_threshold}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", threshold_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_MERSENNE_DIGITS_POWER_TABLE_THRESHOLD");

    Ok(())
}
