use anyhow::{bail, Context, Result};
use clap::Parser;

use gallop::{
    measure_by_name, unique_sorted_haystack, Binary, ExpensivePredicate, Galloping,
    InvocationReport, PartitionStrategy, RangePair, Sequential, SliceCursor, STRATEGY_NAMES,
};

mod cli;
use cli::display::{
    calls_colored, pad_left, pad_right, position_label, row, section_bot, section_top,
    strategy_label,
};
use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Count {
            size,
            seed,
            strategy,
            format,
        } => run_count(size, seed, &strategy, format),
        Commands::Search { values, key } => run_search(&values, key),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run_count(size: usize, seed: u64, strategy: &str, format: OutputFormat) -> Result<()> {
    let names: Vec<&str> = if strategy == "all" {
        STRATEGY_NAMES.to_vec()
    } else if STRATEGY_NAMES.contains(&strategy) {
        vec![strategy]
    } else {
        bail!(
            "unknown strategy '{}' (expected one of: {}, all)",
            strategy,
            STRATEGY_NAMES.join(", ")
        );
    };

    let haystack = unique_sorted_haystack(size, seed);
    let mut report = InvocationReport::new();
    for name in &names {
        let records = measure_by_name(name, &haystack)
            .with_context(|| format!("no measurement for strategy '{}'", name))?;
        report.extend(records);
    }

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("serializing report")?;
            println!("{}", json);
        }
        OutputFormat::Table => print_summary(&report, &names, size, seed),
    }
    Ok(())
}

fn print_summary(report: &InvocationReport, names: &[&str], size: usize, seed: u64) {
    let reference = report.summary(Binary::NAME).map(|(_, mean, _)| mean);

    section_top(&format!("COMPARATOR CALLS ({} elements, seed {})", size, seed));
    row(&format!(
        " {} {} {} {}",
        pad_right("strategy", 16),
        pad_left("min", 7),
        pad_left("mean", 7),
        pad_left("max", 7)
    ));
    for name in names {
        let Some((min, mean, max)) = report.summary(name) else {
            continue;
        };
        row(&format!(
            " {} {:>7} {} {:>7}",
            pad_right(&strategy_label(name), 16),
            min,
            calls_colored(mean, reference.unwrap_or(mean)),
            max
        ));
    }
    section_bot();
}

fn run_search(values: &[i64], key: i64) -> Result<()> {
    if let Some(i) = values.windows(2).position(|w| w[1] < w[0]) {
        bail!(
            "values must be sorted: {} at index {} is greater than {}",
            values[i],
            i,
            values[i + 1]
        );
    }

    section_top(&format!("SEARCH {} IN {} VALUES", key, values.len()));
    row(&format!(
        " {} {} {} {}",
        pad_right("strategy", 16),
        pad_right("cursor", 12),
        pad_left("lower", 6),
        pad_left("upper", 6)
    ));
    search_row::<Binary>(values, key);
    search_row::<Galloping>(values, key);
    search_row::<ExpensivePredicate>(values, key);
    section_bot();
    Ok(())
}

fn search_row<S: PartitionStrategy>(values: &[i64], key: i64) {
    let (first, last) = SliceCursor::bounds(values);
    let slice = S::equal_range(first, last, &key);
    let forward = S::equal_range(Sequential::new(first), Sequential::new(last), &key);

    print_bounds(S::NAME, "slice", &slice, values.len());
    let (lower, upper) = forward.into_parts();
    let forward = RangePair::new(lower.into_inner(), upper.into_inner());
    print_bounds(S::NAME, "forward-only", &forward, values.len());
}

fn print_bounds(name: &str, cursor: &str, range: &RangePair<SliceCursor<'_, i64>>, len: usize) {
    let indices = range.indices();
    row(&format!(
        " {} {} {} {}",
        pad_right(&strategy_label(name), 16),
        pad_right(cursor, 12),
        pad_left(&position_label(indices.start, len), 6),
        pad_left(&position_label(indices.end, len), 6)
    ));
}
