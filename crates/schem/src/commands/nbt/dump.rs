use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use schem_litematic::compression::decompress;
use schem_nbt::{Compound, NbtFile};
use serde::Serialize;
use std::{
    io::{BufWriter, Write},
    path::PathBuf,
};
use tracing::info;

#[derive(Args)]
pub struct DumpArgs {
    /// An input NBT file, gzip compressed or not
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Write the JSON on a single line
    #[arg(long, default_value_t = false)]
    compact: bool,
}

#[derive(Serialize)]
struct Dump<'a> {
    name: &'a str,
    value: &'a Compound,
}

impl DumpArgs {
    pub fn handle(&self) -> Result<()> {
        let data = std::fs::read(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", self.file.display()))?;

        let (raw, compression) = decompress(&data);
        info!("compression: {:?}", compression);

        let nbt = NbtFile::new(&raw).context(format!("decoding {}", self.file.display()))?;

        let stdout = std::io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        write_dump(&mut out, &nbt, !self.compact)?;
        writeln!(out).into_diagnostic()?;
        out.flush().into_diagnostic()
    }
}

fn write_dump<W: Write>(out: &mut W, nbt: &NbtFile, pretty: bool) -> Result<()> {
    let dump = Dump {
        name: nbt.name(),
        value: nbt.root(),
    };

    if pretty {
        serde_json::to_writer_pretty(out, &dump).into_diagnostic()
    } else {
        serde_json::to_writer(out, &dump).into_diagnostic()
    }
}
