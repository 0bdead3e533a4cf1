use tiny_regex::error_handling::Result;
use tiny_regex::self_test::SelfTestSuite;

use clap::{Arg, ArgAction, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let matches = Command::new("tiny-regex-self-test")
        .version(tiny_regex::version())
        .arg(
            Arg::new("suite")
                .help("Path to a YAML self-test suite; the built-in cases run when omitted")
                .value_name("SUITE_FILE"),
        )
        .arg(
            Arg::new("pattern")
                .long("pattern")
                .short('p')
                .help("Search a single pattern instead of running a suite")
                .requires("text")
                .conflicts_with("suite")
                .value_name("PATTERN"),
        )
        .arg(
            Arg::new("text")
                .long("text")
                .short('t')
                .help("Text searched by --pattern")
                .requires("pattern")
                .value_name("TEXT"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only print the summary line")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if let (Some(pattern), Some(text)) = (
        matches.get_one::<String>("pattern"),
        matches.get_one::<String>("text"),
    ) {
        println!("{}", tiny_regex::is_match(pattern, text));
        return Ok(());
    }

    let suite = match matches.get_one::<String>("suite") {
        Some(suite_path) => {
            info!(suite = %suite_path, "loading self-test suite");
            SelfTestSuite::parse_from_file(suite_path)?
        }
        None => {
            info!("running built-in self-test cases");
            SelfTestSuite::default()
        }
    };

    let report = suite.run();
    if matches.get_flag("quiet") {
        println!("{}/{} cases passed", report.passed(), report.total());
    } else {
        println!("{}", report);
    }

    if false == report.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}
