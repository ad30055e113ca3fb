use crate::types::Parameters;

/// Derive the shuffle seed from the parameter pair.
///
/// `floor(crossover_rate * 1000 + mutation_rate * 10000)` — the sole use of
/// the parameters. Isolated here so a genuine fitness-driven search could
/// later replace it without breaking the reproducibility contract.
pub fn derive_seed(params: &Parameters) -> u64 {
    (params.crossover_rate * 1000.0 + params.mutation_rate * 10_000.0).floor() as u64
}
