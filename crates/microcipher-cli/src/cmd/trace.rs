use clap::Args;
use microcipher_core::Engine;

use crate::cmd::args::KeyArgs;

#[derive(Args)]
pub struct TraceArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Text to trace (uppercase letters and spaces)
    #[arg(long)]
    pub text: String,
}

pub fn run(args: TraceArgs) -> anyhow::Result<()> {
    let key = args.key.resolve()?;
    let mut engine = Engine::from_key(&key)?;
    let steps = engine.trace(&args.text)?;

    println!("pos in out fast medium slow");
    for (i, s) in steps.iter().enumerate() {
        let [f, m, sl] = s.offsets;
        println!(
            "{:>3} {:>2} {:>3} {:>4} {:>6} {:>4}",
            i, s.input, s.output, f, m, sl
        );
    }

    let [f, m, sl] = engine.positions().offsets();
    eprintln!("trace ok: chars={} end_offsets={f},{m},{sl}", steps.len());
    Ok(())
}
