//! seqbench: times copy, scan, and statistics workloads over `Vec`,
//! `VecDeque`, and `LinkedList`.
//!
//! Takes no arguments, reads no environment, writes a human-readable
//! transcript to standard output, and exits 0 on success.

use std::io;

use seqbench_core::BenchConfig;

fn main() -> io::Result<()> {
    let config = BenchConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    seqbench_cli::run(&config, &mut out)
}
