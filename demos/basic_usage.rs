//! Fetches one filing and prints its account map and ratios.
//!
//! Reads `DART_API_KEY` (and optionally `DART_TIMEOUT_SECS`, `DART_BASE_URL`) from the
//! environment:
//!
//! ```text
//! DART_API_KEY=... cargo run --example basic_usage -- 00126380 2023 11011
//! ```

use dartkit::{Dart, DartConfig, Ratios, ReportQuery, analyze, report_code};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let corp_code = args.next().unwrap_or_else(|| "00126380".to_string());
    let year = args.next().unwrap_or_else(|| "2023".to_string());
    let reprt_code = args
        .next()
        .unwrap_or_else(|| report_code::ANNUAL.to_string());

    let dart = Dart::with_config(DartConfig::from_env()?)?;
    let query = ReportQuery::new(corp_code, year).with_report_code(reprt_code);

    let Some(analysis) = analyze(&dart, &query).await? else {
        println!("DART returned no data for {}", query.corp_code);
        return Ok(());
    };

    println!(
        "{} {} ({})",
        analysis.query.corp_code, analysis.query.bsns_year, analysis.query.reprt_code
    );
    for (account, amount) in analysis.financials.iter() {
        println!("  {:<20} {:>20}", account, amount);
    }
    if !analysis.zeroed.is_empty() {
        println!("  zeroed: {}", analysis.zeroed.join(", "));
    }

    match analysis.ratios {
        Ratios::Computed(set) => {
            println!("Operating margin: {:.2}%", set.operating_margin);
            println!("Net margin:       {:.2}%", set.net_margin);
            println!("Debt to equity:   {:.2}%", set.debt_to_equity);
            println!("Return on equity: {:.2}%", set.return_on_equity);
        }
        Ratios::Failed { error } => println!("Ratios unavailable: {}", error),
    }

    Ok(())
}
