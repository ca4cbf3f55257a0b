use clap::{Args, Subcommand};
use microcipher_core::key::format::encode_key;

use crate::cmd::args::KeyArgs;
use crate::io::key_file;

#[derive(Args)]
pub struct KeyCmdArgs {
    #[command(subcommand)]
    pub cmd: KeyCmd,
}

#[derive(Subcommand)]
pub enum KeyCmd {
    /// Settings -> key string
    Encode(EncodeArgs),
    /// Key string -> settings
    Decode(DecodeArgs),
}

#[derive(Args)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Write the key string to this file instead of stdout
    #[arg(long)]
    pub out: Option<String>,
}

#[derive(Args)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub key: KeyArgs,
}

pub fn run(args: KeyCmdArgs) -> anyhow::Result<()> {
    match args.cmd {
        KeyCmd::Encode(a) => {
            let k = a.key.resolve()?;
            match a.out.as_deref() {
                Some(p) => {
                    key_file::save_key(p, &k)?;
                    eprintln!("key ok: out={p}");
                }
                None => println!("{}", encode_key(&k)),
            }
            Ok(())
        }
        KeyCmd::Decode(a) => {
            let k = a.key.resolve()?;
            println!(
                "wheels={} fast={} medium={} slow={}",
                k.wheels, k.fast, k.medium, k.slow
            );
            Ok(())
        }
    }
}
