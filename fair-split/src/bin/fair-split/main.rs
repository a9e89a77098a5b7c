mod result;

use std::io::Write;

use clap::Parser;
use convert_case::Case;
use fair_split::asserts::FAIR_SPLIT_ASSERT_LEVEL_DEFINITION;
use fair_split::asserts::FAIR_SPLIT_ASSERT_MODERATE;
use fair_split::basic_types::BestAllocation;
use fair_split::basic_types::Valuations;
use fair_split::format_report;
use fair_split::optimisation::select_best;
use fair_split::optimisation::ObjectiveKind;
use fair_split::search::SearchOptions;
use fair_split::search::StateExplorer;
use fair_split::statistics::configure_statistic_logging;
use fair_split::statistics::log_statistic;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use result::FairSplitError;
use result::FairSplitResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The valuation of one player as a comma-separated list of non-negative item values, e.g.
    /// '4,5,6,7,8'. Must be provided exactly twice, once for each player, with equally many items.
    /// An empty string denotes a player valuing zero items.
    #[arg(
        short = 'p',
        long = "valuation",
        required = true,
        allow_hyphen_values = true,
        verbatim_doc_comment
    )]
    valuations: Vec<String>,

    /// The welfare objective used to select the allocation.
    #[arg(long, value_enum, default_value_t)]
    objective: ObjectiveKind,

    /// Disables the pruning of states in which a player can no longer obtain half of its total
    /// value.
    ///
    /// Possible values: bool
    #[arg(long = "no-optimistic-pruning", verbatim_doc_comment)]
    no_optimistic_pruning: bool,

    /// Disables the suppression of states which are equivalent to a state already waiting to be
    /// explored.
    ///
    /// Possible values: bool
    #[arg(long = "no-duplicate-suppression", verbatim_doc_comment)]
    no_duplicate_suppression: bool,

    /// Runs the search once for every combination of the pruning rules and reports the number of
    /// explored states and the time taken by each; the pruning flags are ignored.
    ///
    /// Possible values: bool
    #[arg(long = "compare-pruning-rules", verbatim_doc_comment)]
    compare_pruning_rules: bool,

    /// Enables log message output from the search.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the search.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,
}

fn configure_logging(verbose: bool, log_statistics: bool) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging("%%%stat:", Some("%%%stat-end"), Some(Case::Camel), None);
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "{}", record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> FairSplitResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics)?;

    if FAIR_SPLIT_ASSERT_LEVEL_DEFINITION >= FAIR_SPLIT_ASSERT_MODERATE {
        warn!(
            "Potential performance degradation: the assert level is set to {FAIR_SPLIT_ASSERT_LEVEL_DEFINITION}, meaning many debug asserts are active which may result in performance degradation."
        );
    }

    let rows = args
        .valuations
        .iter()
        .map(String::as_str)
        .map(parse_valuation)
        .collect::<FairSplitResult<Vec<_>>>()?;
    let valuations = Valuations::new(rows)?;
    info!(
        "Splitting {} items using the {} objective",
        valuations.num_items(),
        args.objective
    );

    if args.compare_pruning_rules {
        compare_pruning_rules(&valuations, args.objective);
        return Ok(());
    }

    let options = SearchOptions {
        optimistic_pruning: !args.no_optimistic_pruning,
        duplicate_suppression: !args.no_duplicate_suppression,
    };
    let mut explorer = StateExplorer::new(options);
    let allocations = explorer.explore(&valuations);
    let best = select_best(&allocations, &valuations, args.objective.objective());

    print!("{}", format_report(best.as_ref(), &valuations));

    if let Some(best) = best.as_ref() {
        log_statistic("objective", best.score());
    }
    explorer.log_statistics();

    Ok(())
}

/// Parses a comma-separated list of item values; an empty list denotes zero items.
fn parse_valuation(row: &str) -> FairSplitResult<Vec<f64>> {
    if row.trim().is_empty() {
        return Ok(vec![]);
    }

    row.split(',')
        .map(|value| {
            let value = value.trim();
            value
                .parse::<f64>()
                .map_err(|_| FairSplitError::invalid_number(value))
        })
        .collect()
}

/// Runs the search under every combination of the pruning rules and prints one line per
/// combination; the optimal welfare should only differ when the optimistic pruning removes an
/// allocation in which a player receives less than half of its total value.
fn compare_pruning_rules(valuations: &Valuations, objective: ObjectiveKind) {
    let mut best_scores = Vec::new();

    for options in SearchOptions::ALL_COMBINATIONS {
        let mut explorer = StateExplorer::new(options);
        let allocations = explorer.explore(valuations);
        let best = select_best(&allocations, valuations, objective.objective());
        let statistics = explorer.statistics();

        println!(
            "optimistic_pruning={} duplicate_suppression={} states={} allocations={} time_ms={} {objective}={}",
            options.optimistic_pruning,
            options.duplicate_suppression,
            statistics.num_states_explored,
            statistics.num_complete_allocations,
            statistics.time_spent_searching_ms,
            format_score(best.as_ref()),
        );
        best_scores.push(best.map(|best| best.score()));
    }

    if best_scores.windows(2).any(|pair| pair[0] != pair[1]) {
        warn!("The optimal {objective} welfare differs between the pruning rules");
    }
}

fn format_score(best: Option<&BestAllocation>) -> String {
    best.map_or_else(|| "none".to_owned(), |best| best.score().to_string())
}
