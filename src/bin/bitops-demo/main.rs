use simple_bitops::{
    bit_length, bits_diff, clear_bit, count_set_bits, full_adder, get_bit, is_power_of_two, multiply,
    multiply_unsigned, set_bit, update_bit,
};

use std::{env, process};

use getopts::Options;
use tracing_subscriber::EnvFilter;

mod utils;

//-----------------------------------------------------------------------------

// Prints a demonstration case and counts it as a failure if the result is unexpected.
macro_rules! check_case {
    ($failures:ident, $call:expr, $expected:expr) => {
        let actual = $call;
        let ok = actual == $expected;
        println!("{:<28} = {:<10} {}", stringify!($call), format!("{:?}", actual), if ok { "ok" } else { "MISMATCH" });
        if !ok {
            $failures += 1;
        }
    };
}

fn main() {
    let config = Config::new();
    init_tracing(config.verbose);

    let mut failures: usize = 0;
    if config.cases {
        failures += demonstration_cases();
        println!("");
    }
    if let Some(pairs) = config.random {
        failures += utils::cross_check(pairs);
        println!("");
    }

    if failures > 0 {
        eprintln!("{} mismatches", failures);
        process::exit(1);
    }
}

//-----------------------------------------------------------------------------

pub struct Config {
    pub cases: bool,
    pub random: Option<usize>,
    pub verbose: bool,
}

impl Config {
    const RANDOM_PAIRS: usize = 100_000;

    pub fn new() -> Config {
        let args: Vec<String> = env::args().collect();
        let program = args[0].clone();

        let mut opts = Options::new();
        opts.optflag("c", "cases", "print the demonstration cases (default if no other mode is given)");
        opts.optflagopt("r", "random", "cross-check INT random pairs against native arithmetic (default 100000)", "INT");
        opts.optflag("v", "verbose", "emit trace events (otherwise RUST_LOG is used)");
        opts.optflag("h", "help", "print this help");
        let matches = match opts.parse(&args[1..]) {
            Ok(m) => m,
            Err(f) => {
                eprintln!("{}", f.to_string());
                process::exit(1);
            }
        };

        let mut config = Config {
            cases: false,
            random: None,
            verbose: false,
        };
        if matches.opt_present("h") {
            let header = format!("Usage: {} [options]", program);
            print!("{}", opts.usage(&header));
            process::exit(0);
        }
        config.cases = matches.opt_present("c");
        if matches.opt_present("r") {
            let pairs = match matches.opt_str("r") {
                Some(s) => match s.parse::<usize>() {
                    Ok(n) => {
                        if n == 0 {
                            eprintln!("Invalid pair count: {}", n);
                            process::exit(1);
                        }
                        n
                    },
                    Err(f) => {
                        eprintln!("--random: {}", f.to_string());
                        process::exit(1);
                    },
                },
                None => Self::RANDOM_PAIRS,
            };
            config.random = Some(pairs);
        }
        if !config.cases && config.random.is_none() {
            config.cases = true;
        }
        config.verbose = matches.opt_present("v");

        config
    }
}

//-----------------------------------------------------------------------------

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("simple_bitops=trace")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("warn"),
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

//-----------------------------------------------------------------------------

fn demonstration_cases() -> usize {
    let mut failures: usize = 0;
    println!("Demonstration cases");

    check_case!(failures, get_bit(5, 0), Ok(1));
    check_case!(failures, get_bit(5, 1), Ok(0));
    check_case!(failures, get_bit(5, 2), Ok(1));
    check_case!(failures, get_bit(5, 3), Ok(0));

    check_case!(failures, set_bit(5, 1), Ok(7));
    check_case!(failures, set_bit(5, 2), Ok(5));

    check_case!(failures, clear_bit(5, 0), Ok(4));
    check_case!(failures, clear_bit(5, 1), Ok(5));
    check_case!(failures, clear_bit(5, 2), Ok(1));

    check_case!(failures, update_bit(5, 1, 1), Ok(7));

    check_case!(failures, multiply(2, 3), 6);
    check_case!(failures, multiply(2, -3), -6);

    check_case!(failures, multiply_unsigned(2, 3), Ok(6));

    check_case!(failures, count_set_bits(5), 2);
    check_case!(failures, count_set_bits(7), 3);
    check_case!(failures, count_set_bits(8), 1);

    check_case!(failures, bits_diff(5, 4), 1);
    check_case!(failures, bits_diff(4, 7), 2);

    check_case!(failures, bit_length(5), Ok(3));
    check_case!(failures, bit_length(3), Ok(2));

    check_case!(failures, is_power_of_two(5), false);
    check_case!(failures, is_power_of_two(8), true);

    check_case!(failures, full_adder(7, 3), 10);

    failures
}

//-----------------------------------------------------------------------------
