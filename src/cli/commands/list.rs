use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::models::DailyLog;
use crate::utils::time::parse_optional_date;
use std::path::Path;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        file,
        date,
        segments,
    } = cmd
    {
        let filter = parse_optional_date(date.as_ref())?;
        let logs = DailyLog::load_filtered(Path::new(file), filter)?;
        ListLogic::print(&logs, *segments)?;
    }
    Ok(())
}
