use anyhow::{bail, Result};

mod coverage;

use coverage::{CoverageOptions, USAGE};

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(task) = args.next() else {
        bail!("Missing task\n\n{}", USAGE);
    };

    match task.as_str() {
        "coverage" => {
            let args: Vec<String> = args.collect();
            if args.iter().any(|a| a == "-h" || a == "--help") {
                println!("{}", USAGE);
                return Ok(());
            }
            let options = CoverageOptions::parse(args)?;
            coverage::run(&options)
        }
        other => bail!("Unknown task: {}\n\n{}", other, USAGE),
    }
}
