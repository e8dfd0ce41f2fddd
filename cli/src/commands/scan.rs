use std::time::{Duration, Instant};

use colored::*;
use pnet::ipnetwork::Ipv4Network;
use tracing::{info, warn};
use winhelper_common::config::{MacSource, ScanConfig};
use winhelper_common::network::range;
use winhelper_core::scanner::{self, NetworkScanner, ScanResult};

use crate::commands::ScanArgs;
use crate::terminal::{colors, format, print, spinner::Spinner};

pub async fn scan(args: ScanArgs) -> anyhow::Result<()> {
    let ranges: Vec<Ipv4Network> = if args.ranges.is_empty() {
        scanner::enumerate_local_ranges()
    } else {
        args.ranges
            .iter()
            .map(|r| range::parse_network(r))
            .collect::<Result<_, _>>()?
    };

    if ranges.is_empty() {
        warn!("No IPv4 network to scan");
        print::no_results();
        return Ok(());
    }

    if !is_root::is_root() {
        warn!("Running without elevated privileges, echo requests may be refused");
    }

    let cfg = ScanConfig {
        probe_timeout: Duration::from_millis(args.timeout_ms),
        max_concurrency: args.max_concurrency,
        mac_source: if args.neighbor {
            MacSource::NeighborTable
        } else {
            MacSource::LocalInterface
        },
    };

    for network in &ranges {
        print::print_status(format!("Scanning {}", network.to_string().color(colors::IPV4_ADDR)));
    }
    if cfg.mac_source == MacSource::LocalInterface {
        info!("MAC column shows the local interface facing each host, pass --neighbor for the host's own");
    }

    let scanner = NetworkScanner::new(&cfg);
    let start_time: Instant = Instant::now();

    let spinner = Spinner::start(format!("Sweeping {} network(s)", ranges.len()));
    let result: ScanResult = scanner.scan_network(&ranges).await;
    drop(spinner);

    scan_ends(&result, start_time.elapsed());
    Ok(())
}

fn scan_ends(result: &ScanResult, total_time: Duration) {
    if result.is_empty() {
        print::header("zero hosts answered");
        print::no_results();
        return;
    }

    let hosts = result.sorted();
    for (idx, (ip, mac)) in hosts.iter().enumerate() {
        print::tree_head(idx, &ip.to_string());
        print::as_tree_one_level(format::host_details(*ip, *mac));
    }

    print_summary(hosts.len(), total_time);
}

fn print_summary(hosts_len: usize, total_time: Duration) {
    let active_hosts: ColoredString = format!("{hosts_len} active hosts").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output = format!("Scan complete: {active_hosts} answered in {total_time}");

    print::fat_separator();
    print::centerln(&output);
}
