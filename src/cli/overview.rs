//! Overview report command

use crate::error::TallyResult;
use crate::reports::OverviewReport;
use crate::services::BookService;

/// Print the full overview: totals, category breakdown, insights
pub fn handle_overview_command(service: &BookService) -> TallyResult<()> {
    let report = OverviewReport::generate(service.book());
    print!("{}", report.format_terminal());
    Ok(())
}
