use fakehdrs::args::GeneratorArgs;

use super::types::{RunPlan, SeedSource};

pub(crate) fn build_plan(args: &GeneratorArgs) -> RunPlan {
    let emit = args.emit_plan();
    let seed = args.seed.map_or(SeedSource::Entropy, SeedSource::Fixed);

    tracing::debug!(
        iterations = emit.iterations,
        num_custom = emit.params.num_custom,
        random_portion = emit.params.random_portion.get(),
        random_headers = emit.params.random_count(),
        fixed_headers = emit.params.fixed_count(),
        format = ?emit.format,
        seed = ?args.seed,
        "Built generation plan"
    );

    RunPlan { emit, seed }
}
