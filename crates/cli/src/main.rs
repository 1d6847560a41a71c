//! `salesdash` entry point.

fn main() -> anyhow::Result<()> {
    let cli = salesdash_cli::parse();
    salesdash_observability::init(cli.global.log_format);

    let output = salesdash_cli::run(&cli)?;
    println!("{output}");
    Ok(())
}
