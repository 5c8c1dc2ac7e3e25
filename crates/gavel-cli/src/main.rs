//! `gavel` — query the Korean court-auction portal for case details.
//!
//! Prints the `data` field of the portal's JSON response, pretty-printed
//! with Korean text intact. When the portal answers with something that is
//! not JSON (typically an HTML block page), the raw body goes to stderr and
//! `null` to stdout.

use clap::Parser;
use gavel_client::{AuctionClient, FetchError};
use gavel_core::{court_names, Tab};

#[derive(Parser, Debug)]
#[command(name = "gavel", version, about = "법원 경매 정보 요청 도구")]
struct Cli {
    /// Court name (법원명), e.g. 서울중앙지방법원
    #[arg(default_value = "서울중앙지방법원", value_parser = parse_court)]
    court: String,

    /// Case number (사건번호), e.g. 2022타경3944
    #[arg(default_value = "2022타경3944")]
    case_no: String,

    /// Report tab to fetch: 사건내역, 기일내역, or 문건/송달내역
    #[arg(short, long, default_value = "기일내역", value_parser = parse_tab)]
    tab: Tab,
}

fn parse_court(s: &str) -> Result<String, String> {
    if gavel_core::court_code(s).is_some() {
        Ok(s.to_string())
    } else {
        let known: Vec<_> = court_names().collect();
        Err(format!("unknown court {s:?}; known courts: {}", known.join(", ")))
    }
}

fn parse_tab(s: &str) -> Result<Tab, String> {
    Tab::from_label(s).ok_or_else(|| {
        let labels: Vec<_> = Tab::ALL.iter().map(|tab| tab.label()).collect();
        format!("unknown tab {s:?}; choose one of: {}", labels.join(", "))
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs to stderr so stdout stays pipeable JSON.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    tracing::debug!("gavel v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let client = AuctionClient::new();

    match client.fetch(&cli.court, &cli.case_no, cli.tab).await {
        Ok(data) => println!("{}", serde_json::to_string_pretty(&data)?),
        Err(FetchError::ResponseParse { body }) => {
            // Soft failure: diagnostics to stderr, null result to stdout.
            eprintln!("failed to parse portal response as JSON");
            eprintln!("raw response: {body}");
            println!("null");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_portal_sample() {
        let cli = Cli::parse_from(["gavel"]);
        assert_eq!(cli.court, "서울중앙지방법원");
        assert_eq!(cli.case_no, "2022타경3944");
        assert_eq!(cli.tab, Tab::ScheduleHistory);
    }

    #[test]
    fn tab_flag_parses() {
        let cli = Cli::parse_from(["gavel", "-t", "문건/송달내역"]);
        assert_eq!(cli.tab, Tab::DocumentDelivery);
    }

    #[test]
    fn unknown_court_rejected_at_parse() {
        let err = Cli::try_parse_from(["gavel", "화성지방법원"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn unknown_tab_rejected_at_parse() {
        let err = Cli::try_parse_from(["gavel", "-t", "배당내역"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
