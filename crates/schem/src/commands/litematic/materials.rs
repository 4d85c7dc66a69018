use clap::Args;
use miette::{Context, Result};
use owo_colors::{OwoColorize, Stream::Stdout};
use schem_litematic::{types::MaterialCount, Schematic};
use std::path::PathBuf;

use super::{read_input, schematic_name};

#[derive(Args)]
pub struct MaterialsArgs {
    /// An input .litematic file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

impl MaterialsArgs {
    pub fn handle(&self) -> Result<()> {
        let data = read_input(&self.file)?;
        let schematic = schem_litematic::convert(&data, schematic_name(&self.file)?)
            .context(format!("converting {}", self.file.display()))?;

        print_materials(&schematic);
        Ok(())
    }
}

fn format_material(material: &MaterialCount) -> String {
    format!(
        "  {}: {}",
        material.name,
        material.count.if_supports_color(Stdout, |c| c.bold())
    )
}

/// Print every non-air block with its count, most used first
pub fn print_materials(schematic: &Schematic) {
    println!("\n{}", "Materials required:".if_supports_color(Stdout, |t| t.green()));
    for material in schematic.materials() {
        println!("{}", format_material(&material));
    }
}
