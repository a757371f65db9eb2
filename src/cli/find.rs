use clap::Args;

use crate::cli::{EngineArgs, OutputFormat};
use crate::core::request::{
    MatchRequest, DEFAULT_MAX_COMPLEXITY, DEFAULT_MIN_COMPLEXITY, DEFAULT_THRESHOLD,
};
use crate::core::result::MatchResult;
use crate::matching::{Algorithm, MatchingEngine};
use crate::utils::display::{
    format_exponent, format_fixed, prepare_for_display, DisplayPage, SortKey,
    DEFAULT_DISPLAY_LIMIT,
};
use crate::utils::validation::validate_request;

#[derive(Args)]
pub struct FindArgs {
    /// First quantity (A)
    #[arg(required = true)]
    pub a: f64,

    /// Second quantity (B)
    #[arg(required = true)]
    pub b: f64,

    /// Largest absolute difference |countA*A - countB*B| to report (exclusive).
    /// Ignored with --only-closest
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Only report best-yet matches (continued-fraction convergents)
    #[arg(long)]
    pub only_closest: bool,

    /// Skip ratios that are multiples of a simpler ratio.
    /// Ignored with --only-closest
    #[arg(long)]
    pub primitive_only: bool,

    /// Smallest countA + countB to report
    #[arg(long, default_value_t = DEFAULT_MIN_COMPLEXITY)]
    pub min_complexity: u64,

    /// Largest countA + countB to explore
    #[arg(long, default_value_t = DEFAULT_MAX_COMPLEXITY)]
    pub max_complexity: u64,

    /// Order of the displayed results
    #[arg(long, value_enum, default_value = "complexity")]
    pub sort_by: SortKey,

    /// Maximum number of results to display
    #[arg(
        long,
        default_value_t = DEFAULT_DISPLAY_LIMIT,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub display_limit: usize,

    #[command(flatten)]
    pub engine: EngineArgs,
}

impl FindArgs {
    #[must_use]
    pub fn to_request(&self) -> MatchRequest {
        MatchRequest::new(self.a, self.b)
            .with_threshold(self.threshold)
            .with_complexity(self.min_complexity, self.max_complexity)
            .only_closest(self.only_closest)
            .primitive_only(self.primitive_only)
    }
}

/// Execute find subcommand
///
/// # Errors
///
/// Returns an error if the request is invalid or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FindArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let request = args.to_request();
    validate_request(&request)?;

    let algorithm = Algorithm::for_request(&request);
    if verbose {
        eprintln!(
            "Searching A={} B={} with {algorithm}, complexity {}..={}, at most {} iterations",
            request.a, request.b, request.min_complexity, request.max_complexity,
            args.engine.max_iterations,
        );
    }

    let engine = MatchingEngine::with_config(args.engine.matching_config());
    let outcome = engine.find_matches(&request);
    let iteration_limit_reached = outcome.iteration_limit_reached;

    let page = prepare_for_display(outcome.results, args.sort_by, args.display_limit);

    if iteration_limit_reached {
        eprintln!(
            "Warning: Iteration limit of {} reached. Results may be incomplete.",
            args.engine.max_iterations
        );
    }
    if page.truncated {
        let sort_text = match args.sort_by {
            SortKey::Complexity => "simplest",
            SortKey::Quality => "best quality",
        };
        eprintln!(
            "Warning: Display limit reached! Showing the {} {sort_text} of {} results.",
            page.results.len(),
            page.total
        );
    }

    match format {
        OutputFormat::Text => print_text_results(&page, algorithm),
        OutputFormat::Json => {
            print_json_results(&request, &page, algorithm, iteration_limit_reached)?;
        }
        OutputFormat::Tsv => print_tsv_results(&page.results),
    }

    Ok(())
}

fn print_text_results(page: &DisplayPage, algorithm: Algorithm) {
    if page.total == 0 {
        println!("No matches found within the given threshold and complexity.");
        return;
    }

    println!("Found {} matches ({algorithm}).", page.total);
    println!();
    println!(
        "  {:>12} {:>12} {:>11} {:>18} {:>18} {:>12} {:>12}",
        "Count A", "Count B", "Complexity", "Sum A", "Sum B", "Difference", "Quality"
    );
    println!("  {}", "─".repeat(101));

    for result in &page.results {
        println!("{}", text_row(result));
    }

    if page.results.iter().any(|r| r.is_best_yet) {
        println!();
        println!("* best yet");
    }
}

fn text_row(result: &MatchResult) -> String {
    let marker = if result.is_best_yet { '*' } else { ' ' };
    format!(
        "{marker} {:>12} {:>12} {:>11} {:>18} {:>18} {:>12} {:>12}",
        result.count_a,
        result.count_b,
        result.complexity,
        format_fixed(result.sum_a),
        format_fixed(result.sum_b),
        format_exponent(result.difference),
        format_exponent(result.quality),
    )
}

fn print_json_results(
    request: &MatchRequest,
    page: &DisplayPage,
    algorithm: Algorithm,
    iteration_limit_reached: bool,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "request": request,
        "algorithm": algorithm,
        "results": page.results,
        "totalMatches": page.total,
        "displayLimitReached": page.truncated,
        "iterationLimitReached": iteration_limit_reached,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(results: &[MatchResult]) {
    println!("count_a\tcount_b\tcomplexity\tsum_a\tsum_b\tdifference\tquality\tis_best_yet");
    for r in results {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{:e}\t{:e}\t{}",
            r.count_a,
            r.count_b,
            r.complexity,
            r.sum_a,
            r.sum_b,
            r.difference,
            r.quality,
            r.is_best_yet,
        );
    }
}
