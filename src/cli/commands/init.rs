use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the output directory for rendered sheets
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing eldlogger…");

    Config::init_all(cli.test)?;

    let path = Config::config_file();
    println!("📄 Config file : {}", path.display());

    println!("🎉 eldlogger initialization completed!");
    Ok(())
}
