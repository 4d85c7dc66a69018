use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use schem_litematic::LitematicReader;
use std::{fs::File, io::BufReader, path::PathBuf};

#[derive(Args)]
pub struct InfoArgs {
    /// An input .litematic file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

impl InfoArgs {
    pub fn handle(&self) -> Result<()> {
        let f = File::open(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", self.file.display()))?;
        let reader = LitematicReader::from_reader(BufReader::new(f))?;

        println!("name: {:?}", reader.name());
        println!("compression: {:?}", reader.compression());
        println!("metadata: {}", reader.has_metadata());
        println!("regions: {}", reader.region_names()?.join(", "));

        let region = reader.first_region()?;
        println!("first region: {}", region.name);
        println!(
            "  size: {}x{}x{}",
            region.width, region.height, region.length
        );
        println!("  palette: {} entries", region.palette.len());
        println!("  bits per block: {}", region.bits_per_block());
        println!("  volume: {} blocks", region.volume()?);

        Ok(())
    }
}
