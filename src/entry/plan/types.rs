use fakehdrs::output::EmitPlan;

#[derive(Debug, Clone, Copy)]
pub(in crate::entry) enum SeedSource {
    Fixed(u64),
    Entropy,
}

pub(in crate::entry) struct RunPlan {
    pub(super) emit: EmitPlan,
    pub(super) seed: SeedSource,
}
