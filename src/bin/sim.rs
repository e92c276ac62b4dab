use broadside::{init_logging, simulate};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let report = simulate(seed).map_err(|e| anyhow::anyhow!(e))?;
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
