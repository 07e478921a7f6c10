//! * Generate shell autocompletion files.

use clap::ValueEnum;
use clap_complete::{generate_to, Shell};
use std::env;
use std::io::Error;

mod cjdns_ui { include!("src/bin/cjdns-ui/cli.rs"); }

fn main() -> Result<(), Error> {
    println!("cargo::rerun-if-changed=src/bin/cjdns-ui/cli.rs");

    let out_dir = {
        let out_dir = env::var_os("OUT_DIR").expect("ENV[OUT_DIR] to have a value.");
        let mut out_dir = std::path::PathBuf::from(out_dir);
        out_dir.push("autocomplete");
        if !out_dir.as_path().exists() {
            std::fs::create_dir(&out_dir)?;
        }
        out_dir
    };

    let mut command = cjdns_ui::command();
    let bin_name = command.get_bin_name().expect("Expected command to have bin_name.").to_string();

    for &gen in Shell::value_variants() {
        let mut out_dir = out_dir.clone();
        out_dir.push(gen.to_string());
        if !out_dir.as_path().exists() {
            std::fs::create_dir(&out_dir)?;
        }
        let _ = generate_to(gen, &mut command, bin_name.clone(), &out_dir)?;
    }

    Ok(())
}
