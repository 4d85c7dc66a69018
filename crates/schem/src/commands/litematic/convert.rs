use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use schem_litematic::Schematic;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::info;

use super::{materials::print_materials, read_input, schematic_name};

#[derive(Args)]
pub struct ConvertArgs {
    /// An input .litematic file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// A target JSON file, defaults to <name>.json in the current directory
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,

    /// Write the JSON on a single line
    #[arg(long, default_value_t = false)]
    compact: bool,
}

impl ConvertArgs {
    pub fn handle(&self) -> Result<()> {
        let schematic = self.convert()?;
        print_materials(&schematic);
        Ok(())
    }

    fn output_path(&self, name: &str) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => PathBuf::from(format!("{name}.json")),
        }
    }

    fn convert(&self) -> Result<Schematic> {
        let name = schematic_name(&self.file)?;
        info!("reading {}", self.file.display());

        let data = read_input(&self.file)?;
        let schematic = schem_litematic::convert(&data, &name)
            .context(format!("converting {}", self.file.display()))?;

        let path = self.output_path(&name);
        let size = write_json(&path, &schematic, self.overwrite, !self.compact)?;

        println!("Conversion complete: {}", path.display());
        println!("File size: {:.2} KB", size as f64 / 1024.0);

        Ok(schematic)
    }
}

/// Serialize a schematic to `path` and return the number of bytes written
pub fn write_json(path: &Path, schematic: &Schematic, overwrite: bool, pretty: bool) -> Result<u64> {
    info!("writing {}", path.display());

    let out = if !overwrite {
        File::create_new(path)
            .into_diagnostic()
            .context(format!("creating {}", path.display()))?
    } else {
        File::create(path)
            .into_diagnostic()
            .context(format!("creating {}", path.display()))?
    };

    let mut writer = BufWriter::new(out);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, schematic).into_diagnostic()?;
    } else {
        serde_json::to_writer(&mut writer, schematic).into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;

    let out = writer.into_inner().into_diagnostic()?;
    Ok(out.metadata().into_diagnostic()?.len())
}
