use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::render::RenderLogic;
use crate::errors::AppResult;
use crate::models::DailyLog;
use crate::utils::time::parse_optional_date;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        file,
        date,
        out,
        force,
    } = cmd
    {
        let filter = parse_optional_date(date.as_ref())?;
        let logs = DailyLog::load_filtered(Path::new(file), filter)?;
        RenderLogic::render(&logs, cfg, out, *force)?;
    }
    Ok(())
}
