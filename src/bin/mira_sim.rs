//! Mira 批作业调度仿真
//!
//! 回放作业 trace：FCFS 调度、按整 block 分配，逐 tick 推进直到所有作业结束。

use clap::Parser;
use mira_sim::cluster::{ClusterConfig, DEFAULT_BLOCKS, DEFAULT_NODES_PER_BLOCK};
use mira_sim::sim::{RunOutcome, SimContext, SimTime, Simulator};
use mira_sim::trace::load_trace;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "mira-sim", about = "Replay a job trace against a simulated Mira cluster (FCFS)")]
struct Args {
    /// 作业 trace（CSV）
    trace: PathBuf,

    /// block（midplane）数量
    #[arg(long, default_value_t = DEFAULT_BLOCKS)]
    blocks: usize,

    /// 每个 block 的节点数
    #[arg(long, default_value_t = DEFAULT_NODES_PER_BLOCK, value_parser = clap::value_parser!(u64).range(1..))]
    nodes_per_block: u64,

    /// 最多运行多少个 tick；不填则运行到所有作业结束（放不下的作业会导致永不结束）
    #[arg(long)]
    max_ticks: Option<u64>,

    /// 输出 JSON 事件文件；不填则不生成
    #[arg(long)]
    events_json: Option<PathBuf>,

    /// 输出文本事件日志（每行一条）
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// 结束时打印集群状态
    #[arg(long)]
    status: bool,

    /// 不打印日志（仅输出到文件）
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(if args.quiet {
            tracing_subscriber::EnvFilter::new("off")
        } else {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        })
        .with_target(false)
        .init();

    let mut feed = match load_trace(&args.trace) {
        Ok(feed) => feed,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let cfg = ClusterConfig::new(args.blocks, args.nodes_per_block);
    let mut ctx = SimContext::new(cfg);
    if args.events_json.is_some() || args.log_file.is_some() {
        ctx = ctx.with_event_log();
    }

    let mut sim = Simulator::default();
    let until = args.max_ticks.map(SimTime).unwrap_or(SimTime(u64::MAX));
    let summary = match sim.run_until(until, &mut feed, &mut ctx) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(log) = &ctx.events {
        if let Some(path) = &args.events_json {
            let json = match log.to_json() {
                Ok(json) => json,
                Err(err) => {
                    eprintln!("error: serialize events: {err}");
                    return ExitCode::FAILURE;
                }
            };
            if let Err(err) = fs::write(path, json) {
                eprintln!("error: write {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
            eprintln!("wrote events to {}", path.display());
        }
        if let Some(path) = &args.log_file {
            if let Err(err) = fs::write(path, log.to_text()) {
                eprintln!("error: write {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
            eprintln!("wrote event log to {}", path.display());
        }
    }

    if args.status {
        print!("{ctx}");
    }
    println!("{summary}");

    if summary.outcome == RunOutcome::Halted {
        eprintln!(
            "stopped at tick limit with {} queued, {} running",
            ctx.queue().len(),
            ctx.running().len()
        );
    }
    ExitCode::SUCCESS
}
