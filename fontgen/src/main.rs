use anyhow::*;
use clap::Parser;
use fontgen::vendor::{vendor_fonts, VendorConfig};
use std::{path::PathBuf, result::Result::Ok, time::Instant};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Location of the blitstr source files
    #[arg(short, long, default_value = "../../../blitstr")]
    dir: PathBuf,
}

fn execute(cli: Cli) -> Result<()> {
    let config = VendorConfig::new(cli.dir.join("src/fonts"));
    let fonts = vendor_fonts(&config)?;
    println!("{fonts:?}");
    Ok(())
}
fn main() {
    env_logger::init();

    let start = Instant::now();
    let cli = Cli::parse();
    match execute(cli) {
        Ok(_) => println!("Run completed in {:?}", start.elapsed()),
        Err(e) => {
            eprintln!("Error encountered: {:?}", e);
            std::process::exit(1);
        }
    }
}
