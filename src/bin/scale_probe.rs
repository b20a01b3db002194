use std::env;
use std::time::Instant;

use algo_drills::problems::{
    bishops::count_attacking_bishops,
    consecutive::{longest_consecutive, longest_consecutive_sorted},
    decode_ways::num_decodings,
    edit_distance::edit_distance,
    grid_paths::count_paths,
    n_queens::n_queens,
    sieve::{sieve, Primes},
};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Algorithm Drills Scaling Probe: Performance and Correctness Testing");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Every algorithm runs over growing inputs and is checked against an");
    eprintln!("independent baseline (full tables, brute force, trial division):");
    eprintln!("  • Linear/quadratic baselines run up to size {}", options.verify_limit);
    eprintln!("  • Sieve bounds and sort-based baselines run up to size {}", options.quadratic_limit());
    eprintln!();
    eprintln!("Metrics explained:");
    eprintln!("  • wall_s: Wall-clock time in seconds (lower is better)");
    eprintln!("  • rss_delta_kib: Memory delta in KiB");
    eprintln!("  • status: 'passed' = matches baseline, 'not_checked' = too large to verify");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    let scenarios: [(&str, fn(&Options, &mut System) -> Vec<Measurement>); 7] = [
        ("Grid Path Counting", run_grid_paths),
        ("Edit Distance", run_edit_distance),
        ("Decode Ways", run_decode_ways),
        ("N-Queens", run_n_queens),
        ("Sieve of Eratosthenes", run_sieve),
        ("Longest Consecutive Run", run_consecutive),
        ("Attacking Bishops", run_bishops),
    ];
    let total = scenarios.len();
    for (idx, (title, run)) in scenarios.iter().enumerate() {
        eprintln!("[{}/{}] Testing {}...", idx + 1, total, title);
        measurements.extend(run(&options, &mut sys));
        eprintln!();
    }

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 512usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    /// Budget for baselines that are cheap per element (sieve, sorting).
    fn quadratic_limit(&self) -> usize {
        self.verify_limit.saturating_mul(self.verify_limit)
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest grid side, string length or bishop count to verify
                                via baseline; sieve bounds and run inputs up to N² (default: 512)
  -h, --help                    Print this help message

Examples:
  cargo run --bin scale_probe
  cargo run --bin scale_probe -- --format table --verify-limit 256
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a positive integer".to_string())
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

type Verification = (VerificationStatus, Option<String>);

/// Compare `got` against a baseline computed only when `enabled`.
fn verify<T, F>(enabled: bool, got: &T, baseline: F) -> Verification
where
    T: PartialEq + std::fmt::Debug,
    F: FnOnce() -> T,
{
    if !enabled {
        return (VerificationStatus::NotChecked, None);
    }
    let expected = baseline();
    if expected == *got {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("expected {expected:?}, got {got:?}")),
        )
    }
}

/// Run `compute` for every size, printing one progress line per size.
///
/// `compute` returns a short result description plus its verification.
fn run_sizes<F>(
    scenario: &'static str,
    label: &str,
    sizes: &[usize],
    sys: &mut System,
    mut compute: F,
) -> Vec<Measurement>
where
    F: FnMut(usize) -> (String, Verification),
{
    let total = sizes.len();
    sizes
        .iter()
        .enumerate()
        .map(|(idx, &size)| {
            eprint!("      [{}/{}] Testing {label}={size}... ", idx + 1, total);
            let mut described = String::new();
            let m = measure(scenario, format!("{label}={size}"), sys, || {
                let (desc, verification) = compute(size);
                described = desc;
                verification
            });
            eprintln!(
                "{} {}, time={:.3}s, status={}",
                m.verification_status.icon(),
                described,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn run_grid_paths(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIDES: &[usize] = &[16, 64, 256, 512, 1024, 2048];
    run_sizes("grid_paths", "side", SIDES, sys, |side| {
        let grid = deterministic_grid(side);
        let paths = count_paths(&grid);
        let verification = verify(side <= options.verify_limit, &paths, || {
            full_grid_paths(&grid)
        });
        (format!("paths={paths}"), verification)
    })
}

fn run_edit_distance(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 512, 1024, 2048, 4096, 8192];
    run_sizes("edit_distance", "len", SIZES, sys, |len| {
        let a = deterministic_dna(len);
        let b = deterministic_dna_offset(len, 3);
        let distance = edit_distance(&a, &b);
        let verification = verify(len <= options.verify_limit, &distance, || {
            full_edit_distance(&a, &b)
        });
        (format!("distance={distance}"), verification)
    })
}

fn run_decode_ways(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[64, 256, 1024, 16_384, 262_144, 1_048_576];
    run_sizes("decode_ways", "len", SIZES, sys, |len| {
        let digits = deterministic_digits(len);
        let ways = num_decodings(&digits);
        let verification = verify(len <= options.verify_limit, &ways, || {
            suffix_decodings(digits.as_bytes())
        });
        (format!("ways={ways}"), verification)
    })
}

fn run_n_queens(_options: &Options, sys: &mut System) -> Vec<Measurement> {
    // OEIS A000170
    const KNOWN: &[u64] = &[0, 1, 0, 0, 2, 10, 4, 40, 92, 352, 724, 2680, 14200, 73712];
    const SIZES: &[usize] = &[4, 6, 8, 10, 11, 12, 13];
    run_sizes("n_queens", "n", SIZES, sys, |n| {
        let count = n_queens(n);
        let verification = verify(n < KNOWN.len(), &count, || KNOWN[n]);
        (format!("solutions={count}"), verification)
    })
}

fn run_sieve(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const BOUNDS: &[usize] = &[1_000, 10_000, 100_000, 1_000_000, 10_000_000];
    run_sizes("sieve", "n", BOUNDS, sys, |n| {
        let primes = sieve(n);
        let verification = verify(n <= options.quadratic_limit(), &primes, || {
            Primes::new()
                .take_while(|&p| p < n as u64)
                .map(|p| p as usize)
                .collect()
        });
        (format!("primes={}", primes.len()), verification)
    })
}

fn run_consecutive(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[1_000, 10_000, 100_000, 1_000_000];
    run_sizes("longest_consecutive", "len", SIZES, sys, |len| {
        let nums = deterministic_values(len, len as i64 * 2);
        let longest = longest_consecutive(&nums);
        let verification = verify(len <= options.quadratic_limit(), &longest, || {
            longest_consecutive_sorted(&nums)
        });
        (format!("longest={longest}"), verification)
    })
}

fn run_bishops(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const COUNTS: &[usize] = &[100, 1_000, 10_000, 100_000];
    run_sizes("attacking_bishops", "bishops", COUNTS, sys, |count| {
        let board = (count as f64).sqrt().ceil() as usize * 2;
        let bishops: Vec<(i64, i64)> = deterministic_values(count * 2, board as i64)
            .chunks_exact(2)
            .map(|c| (c[0], c[1]))
            .collect();
        let pairs = count_attacking_bishops(board, &bishops);
        let verification = verify(count <= options.verify_limit, &pairs, || {
            brute_force_bishops(&bishops)
        });
        (format!("board={board}, pairs={pairs}"), verification)
    })
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Test Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    let total = measurements.len().max(1);
    let pct = |n: usize| 100.0 * n as f64 / total as f64;
    eprintln!("Verification Results:");
    eprintln!("  Total tests: {}", measurements.len());
    eprintln!("  ✓ Passed: {} ({:.1}%)", passed, pct(passed));
    eprintln!("  ✗ Failed: {} ({:.1}%)", failed, pct(failed));
    eprintln!(
        "  ○ Not checked (beyond verify limit {}): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        pct(not_checked)
    );
    eprintln!();

    if failed > 0 {
        eprintln!("Failed Tests:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     Error: {}", detail);
                }
            }
        }
        eprintln!();
    }

    eprintln!("Performance Statistics by Scenario:");
    eprintln!();

    // measurements arrive grouped by scenario
    let mut start = 0;
    while start < measurements.len() {
        let scenario = measurements[start].scenario;
        let end = measurements[start..]
            .iter()
            .position(|m| m.scenario != scenario)
            .map_or(measurements.len(), |off| start + off);
        let ms = &measurements[start..end];
        start = end;

        let min_time = ms.iter().map(|m| m.wall_s).fold(f64::INFINITY, f64::min);
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let avg_time = ms.iter().map(|m| m.wall_s).sum::<f64>() / ms.len() as f64;
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        let avg_mem = ms.iter().map(|m| m.rss_delta_kib).sum::<u64>() as f64 / ms.len() as f64;

        eprintln!("  {}:", scenario);
        eprintln!("    Tests: {}", ms.len());
        eprintln!(
            "    Time: min={:.3}s, max={:.3}s, avg={:.3}s",
            min_time, max_time, avg_time
        );
        eprintln!(
            "    Memory: max_delta={} KiB, avg_delta={:.1} KiB",
            max_mem, avg_mem
        );
        if let (Some(first), Some(last)) = (ms.first(), ms.last()) {
            if ms.len() >= 2 && first.wall_s > 0.0 {
                eprintln!(
                    "    Scaling: {:.1}x slower from smallest to largest",
                    last.wall_s / first.wall_s
                );
            }
        }
        eprintln!();
    }

    eprintln!("{}", "=".repeat(80));
    if failed == 0 {
        eprintln!("✓ All verified tests passed.");
    } else {
        eprintln!("✗ {} test(s) failed. Please review the errors above.", failed);
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(scenario: &'static str, size_desc: String, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> Verification,
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .fold("scenario".len(), usize::max);
    let col2 = measurements
        .iter()
        .map(|m| m.size_desc.len())
        .fold("size".len(), usize::max);

    println!(
        "{:<col1$}  {:<col2$}  {:>12}  {:>14}  {:>12}  detail",
        "scenario", "size", "wall_s", "rss_delta_kib", "status",
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>12.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory()
    } else {
        0
    }
}

/// Square grid with a sparse, fixed wall pattern and open corners.
fn deterministic_grid(side: usize) -> Vec<Vec<u8>> {
    (0..side)
        .map(|i| {
            (0..side)
                .map(|j| {
                    let corner = (i == 0 && j == 0) || (i + 1 == side && j + 1 == side);
                    u8::from(!corner && (i * 7 + j * 13) % 11 == 0)
                })
                .collect()
        })
        .collect()
}

fn deterministic_dna(len: usize) -> Vec<u8> {
    deterministic_dna_offset(len, 0)
}

fn deterministic_dna_offset(len: usize, offset: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|i| ALPHABET[((i + offset) * (i / 5 + 1)) % ALPHABET.len()])
        .collect()
}

/// Digit string whose count roughly doubles every five digits; very long
/// inputs saturate at `u128::MAX`.
fn deterministic_digits(len: usize) -> String {
    const PATTERN: &[u8] = b"11106";
    (0..len)
        .map(|i| char::from(PATTERN[i % PATTERN.len()]))
        .collect()
}

/// Linear congruential values in `0..modulus`.
fn deterministic_values(len: usize, modulus: i64) -> Vec<i64> {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            ((state >> 33) % modulus.max(1) as u64) as i64
        })
        .collect()
}

fn full_grid_paths(grid: &[Vec<u8>]) -> u128 {
    let rows = grid.len();
    let cols = grid[0].len();
    let mut dp = vec![vec![0u128; cols]; rows];
    for i in 0..rows {
        for j in 0..cols {
            if grid[i][j] == 1 {
                continue;
            }
            dp[i][j] = if i == 0 && j == 0 {
                1
            } else {
                let up = if i > 0 { dp[i - 1][j] } else { 0 };
                let left = if j > 0 { dp[i][j - 1] } else { 0 };
                up.saturating_add(left)
            };
        }
    }
    dp[rows - 1][cols - 1]
}

fn full_edit_distance(a: &[u8], b: &[u8]) -> usize {
    let n = a.len();
    let m = b.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=m {
        dp[0][j] = j;
    }
    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }
    dp[n][m]
}

/// Bottom-up decode count over suffixes; `ways[i]` counts decodings of
/// `digits[i..]`.
fn suffix_decodings(digits: &[u8]) -> u128 {
    if digits.is_empty() {
        return 0;
    }
    let n = digits.len();
    let mut ways = vec![0u128; n + 1];
    ways[n] = 1;
    for i in (0..n).rev() {
        if digits[i] == b'0' {
            continue;
        }
        let mut total = ways[i + 1];
        if i + 1 < n {
            let pair = (digits[i] - b'0') * 10 + (digits[i + 1] - b'0');
            if pair <= 26 {
                total = total.saturating_add(ways[i + 2]);
            }
        }
        ways[i] = total;
    }
    ways[0]
}

fn brute_force_bishops(bishops: &[(i64, i64)]) -> u64 {
    let principal = |(r, c): (i64, i64)| i128::from(r) - i128::from(c);
    let anti = |(r, c): (i64, i64)| i128::from(r) + i128::from(c);
    let mut pairs = 0;
    for (i, &a) in bishops.iter().enumerate() {
        for &b in &bishops[i + 1..] {
            if principal(a) == principal(b) {
                pairs += 1;
            }
            if anti(a) == anti(b) {
                pairs += 1;
            }
        }
    }
    pairs
}
