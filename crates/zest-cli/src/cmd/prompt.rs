use zest_core::prompt;

pub fn run(command: &str, args: &[String]) -> anyhow::Result<()> {
    let text = prompt::generate(command, &args.join(" "))?;
    println!("{text}");
    Ok(())
}
