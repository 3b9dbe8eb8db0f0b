use std::io::Write;

use rand::Rng;

use crate::error::OutputError;
use crate::generator::{Request, RequestGenerator};

use super::{EmitPlan, OutputFormat};

/// Write a single request in the given format.
///
/// `index` is only used to label errors.
///
/// # Errors
///
/// Returns an error if the sink rejects the write or the request cannot be
/// serialized.
pub fn write_request<W>(
    out: &mut W,
    request: &Request,
    format: OutputFormat,
    index: u64,
) -> Result<(), OutputError>
where
    W: Write + ?Sized,
{
    let write_err = |source| OutputError::Write { index, source };
    match format {
        OutputFormat::Text => {
            for header in request.headers() {
                writeln!(out, "{}: {}", header.name, header.value).map_err(write_err)?;
            }
            out.write_all(b"\n").map_err(write_err)?;
        }
        OutputFormat::Jsonl => {
            let line = serde_json::to_string(request)
                .map_err(|source| OutputError::Serialize { index, source })?;
            writeln!(out, "{}", line).map_err(write_err)?;
        }
    }
    Ok(())
}

/// Generate `plan.iterations` requests and write each one to `out`.
///
/// Stops at the first failed write; whatever was written before stays
/// written. Returns the number of requests emitted.
///
/// # Errors
///
/// Returns an error if any write or the final flush fails.
pub fn emit_requests<W, R>(
    out: &mut W,
    generator: &RequestGenerator,
    rng: &mut R,
    plan: &EmitPlan,
) -> Result<u64, OutputError>
where
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    let mut emitted = 0_u64;
    for index in 0..plan.iterations {
        let request = generator.generate(rng, &plan.params);
        write_request(out, &request, plan.format, index)?;
        emitted = emitted.saturating_add(1);
    }
    out.flush().map_err(|source| OutputError::Flush { source })?;
    tracing::debug!("Emitted {} requests", emitted);
    Ok(emitted)
}
