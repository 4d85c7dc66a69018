pub mod dump;

#[derive(clap::Subcommand)]
pub enum NbtCommands {
    /// Print an NBT file as JSON
    Dump(dump::DumpArgs),
}

impl NbtCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            NbtCommands::Dump(dump) => dump.handle(),
        }
    }
}
