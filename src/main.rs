#[macro_use] extern crate log;

use std::env;
use std::process;
use nd_prover::{BoxedErrorTrait, Script};

const DEFAULT_SCRIPT_PATH: &'static str = "proof.toml";

fn run(path: &str) -> Result<bool, BoxedErrorTrait> {
    let script = Script::load(path)?;
    info!("replaying {} ({} logic, {} steps)", path, script.logic, script.steps.len());
    let resolver = script.run()?;
    print!("{}", resolver.tree());
    Ok(resolver.is_complete())
}

fn main() {
    pretty_env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_SCRIPT_PATH.to_string());
    match run(&path) {
        Ok(true) => println!("proof complete"),
        Ok(false) => println!("open goals remain"),
        Err(why) => {
            error!("could not replay {}: {}", path, why);
            eprintln!("{}", why);
            process::exit(1);
        }
    }
}
