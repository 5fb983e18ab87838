use clap::Parser;
use log::info;
use took::Timer;

use crate::io::{load_batch, write_report, BatchReport, GraphReport};
use crate::solver::{kruskal, prim};
use crate::utils::logging::format_log_method_result;

mod cli;
mod graph;
mod io;
mod solver;
mod utils;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = cli::ProgramArguments::parse();
    info!("{:?}", &args);

    let load_timer = Timer::new();
    let batch = load_batch(&args.input)?;
    info!(
        "batch of {} graphs loaded after {}",
        batch.len(),
        load_timer.took()
    );

    let run_timer = Timer::new();
    let mut results = Vec::with_capacity(batch.len());
    for entry in &batch {
        let prim_result = if args.algorithm.includes_prim() {
            let res = prim::solve(&entry.graph);
            info!("{}", format_log_method_result("prim", entry.id, &res));
            Some(res)
        } else {
            None
        };
        let kruskal_result = if args.algorithm.includes_kruskal() {
            let res = kruskal::solve(&entry.graph);
            info!("{}", format_log_method_result("kruskal", entry.id, &res));
            Some(res)
        } else {
            None
        };
        results.push(GraphReport::new(
            entry.id,
            &entry.graph,
            prim_result.as_ref(),
            kruskal_result.as_ref(),
        ));
    }
    info!("batch finished after {}", run_timer.took());

    let report = BatchReport::new(results);
    write_report(&args.output, &report)?;
    println!("Results written to {}", args.output);

    if !args.quiet {
        io::print_summary(&report);
    }

    Ok(())
}
