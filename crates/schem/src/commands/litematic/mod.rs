use std::path::Path;

use miette::{miette, Context, IntoDiagnostic, Result};

pub mod convert;
pub mod info;
pub mod materials;

#[derive(clap::Subcommand)]
pub enum LitematicCommands {
    /// Convert a schematic into a JSON block grid
    Convert(convert::ConvertArgs),
    /// List the regions of a schematic
    Info(info::InfoArgs),
    /// Count the blocks needed to build a schematic
    Materials(materials::MaterialsArgs),
}

impl LitematicCommands {
    pub fn handle(&self) -> Result<()> {
        match self {
            LitematicCommands::Convert(convert) => convert.handle(),
            LitematicCommands::Info(info) => info.handle(),
            LitematicCommands::Materials(materials) => materials.handle(),
        }
    }
}

/// Name of a schematic, taken from its file name without the extension
pub fn schematic_name(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or(miette!("unable to get a file name from {}", path.display()))
}

pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path)
        .into_diagnostic()
        .context(format!("path: {}", path.display()))
}
