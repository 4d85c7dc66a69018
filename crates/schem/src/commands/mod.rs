pub mod litematic;
pub mod nbt;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle Litematica schematics
    Litematic {
        #[command(subcommand)]
        command: litematic::LitematicCommands,
    },
    /// Inspect raw NBT files
    Nbt {
        #[command(subcommand)]
        command: nbt::NbtCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Litematic { command } => command.handle(),
            Commands::Nbt { command } => command.handle(),
        }
    }
}
