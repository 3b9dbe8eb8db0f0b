use std::io::BufWriter;

use rand::SeedableRng;
use rand::rngs::StdRng;

use fakehdrs::error::{AppError, AppResult};
use fakehdrs::generator::RequestGenerator;
use fakehdrs::output::emit_requests;

use super::types::{RunPlan, SeedSource};

pub(crate) fn execute_plan(plan: &RunPlan) -> AppResult<()> {
    let mut rng = match plan.seed {
        SeedSource::Fixed(seed) => StdRng::seed_from_u64(seed),
        SeedSource::Entropy => StdRng::from_entropy(),
    };
    let generator = RequestGenerator::default();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match emit_requests(&mut out, &generator, &mut rng, &plan.emit) {
        Ok(emitted) => {
            tracing::info!("Generated {} requests", emitted);
            Ok(())
        }
        Err(err) => {
            if err.is_broken_pipe() {
                tracing::warn!("Output closed by reader: {}", err);
            } else {
                tracing::error!("Failed to write requests: {}", err);
            }
            // Nothing more can be written; drop buffered bytes without retrying.
            drop(out.into_parts());
            Err(AppError::output(err))
        }
    }
}

