use clap::Parser;

use crate::generator::{DEFAULT_NUM_CUSTOM, GenerateParams, RandomPortion};
use crate::output::{DEFAULT_ITERATIONS, EmitPlan, OutputFormat};

use super::parsers::{parse_bool_env, parse_custom_count, parse_iterations, parse_random_portion};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Synthetic HTTP/2 request generator - emits bulk header fixtures with a tunable mix of compressible and random custom headers."
)]
pub struct GeneratorArgs {
    /// Number of requests to emit
    #[arg(
        long,
        short = 'n',
        default_value_t = DEFAULT_ITERATIONS,
        value_parser = parse_iterations
    )]
    pub iterations: u64,

    /// Custom headers appended to every request (non-negative whole number)
    #[arg(
        long = "num-custom",
        default_value_t = DEFAULT_NUM_CUSTOM,
        value_parser = parse_custom_count,
        allow_hyphen_values = true
    )]
    pub num_custom: usize,

    /// Share of custom headers with random values, in [0, 1]; the count is truncated
    #[arg(
        long = "random-portion",
        default_value_t = RandomPortion::DEFAULT,
        value_parser = parse_random_portion,
        allow_hyphen_values = true
    )]
    pub random_portion: RandomPortion,

    /// Seed for the random source; output is reproducible for a given seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,

    /// Enable verbose logging (sets log level to debug unless overridden by FAKEHDRS_LOG/RUST_LOG)
    #[arg(long, short = 'v', alias = "debug")]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}

impl GeneratorArgs {
    #[must_use]
    pub const fn generate_params(&self) -> GenerateParams {
        GenerateParams::new(self.num_custom, self.random_portion)
    }

    #[must_use]
    pub const fn emit_plan(&self) -> EmitPlan {
        EmitPlan {
            iterations: self.iterations,
            params: self.generate_params(),
            format: self.format,
        }
    }
}
