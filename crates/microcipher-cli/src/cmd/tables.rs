use clap::Args;
use microcipher_core::{RotorTableSet, WheelSet};

#[derive(Args)]
pub struct TablesArgs {
    /// Wheel set: "plain" or "historical"
    #[arg(long, default_value = "plain")]
    pub wheels: WheelSet,
}

pub fn run(args: TablesArgs) -> anyhow::Result<()> {
    let set = RotorTableSet::for_wheels(args.wheels);
    for (role, table) in set.roles() {
        println!("{role:<9} {table}");
    }
    // what the reflector actually substitutes with
    println!("{:<9} {}", "reflect", set.reflector.reversed());
    Ok(())
}
