//! Run-seed selection: an explicit `--seed` beats generated entropy, so any
//! run can be reproduced from its printed seed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
    mix_seed((now_nanos as u64) ^ ((now_nanos >> 64) as u64) ^ pid.rotate_left(17) ^ counter)
}

/// Parses `--seed <n>` / `--seed=<n>` from the process arguments. Unrelated
/// arguments are ignored; a malformed seed is an error rather than a silent
/// random run.
pub fn resolve_seed_from_args(args: &[String], generated_seed: u64) -> Result<SeedChoice, String> {
    let mut arg_iter = args.iter().skip(1);
    while let Some(argument) = arg_iter.next() {
        let raw_value = if argument == "--seed" {
            match arg_iter.next() {
                Some(value) => value.as_str(),
                None => return Err("missing value for --seed".to_string()),
            }
        } else if let Some(value) = argument.strip_prefix("--seed=") {
            value
        } else {
            continue;
        };
        return raw_value
            .parse::<u64>()
            .map(SeedChoice::Cli)
            .map_err(|_| format!("seed value '{raw_value}' must be a number"));
    }
    Ok(SeedChoice::Generated(generated_seed))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
