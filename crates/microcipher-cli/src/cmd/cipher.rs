use anyhow::Context;
use clap::Args;
use microcipher_core::Engine;
use tracing::info;

use crate::cmd::args::KeyArgs;
use crate::io::text;

#[derive(Args)]
pub struct CipherArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Text to cipher (uppercase letters and spaces)
    #[arg(long, conflicts_with = "in")]
    pub text: Option<String>,

    /// Input file; one message per line. Reads stdin when neither --text nor --in is given.
    #[arg(long)]
    pub r#in: Option<String>,

    /// Output file path; if omitted, prints to stdout.
    #[arg(long)]
    pub out: Option<String>,

    /// Rewind the rotors before every line instead of streaming across lines
    #[arg(long)]
    pub fresh: bool,
}

pub fn run(args: CipherArgs) -> anyhow::Result<()> {
    let key = args.key.resolve()?;
    let mut engine = Engine::from_key(&key)?;

    let lines = text::read_lines(args.text.as_deref(), args.r#in.as_deref())?;

    let mut out = Vec::with_capacity(lines.len());
    for (n, line) in lines.iter().enumerate() {
        if args.fresh {
            engine.rewind();
        }
        let c = engine
            .transform(line)
            .with_context(|| format!("line {}", n + 1))?;
        out.push(c);
    }

    info!(lines = out.len(), letters = engine.stats.letters, "cipher done");
    text::write_lines(args.out.as_deref(), &out)?;

    if let Some(p) = args.out.as_deref() {
        let [f, m, s] = engine.positions().offsets();
        eprintln!(
            "cipher ok: out={} wheels={} lines={} letters={} spaces={} end_offsets={},{},{}",
            p,
            key.wheels,
            out.len(),
            engine.stats.letters,
            engine.stats.spaces,
            f,
            m,
            s
        );
    }
    Ok(())
}
