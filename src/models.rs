/// How data-quality fallbacks are handled across the pipeline.
///
/// The lenient paths reproduce the historical statement-import behavior:
/// an oversold holding drops the unmatched remainder and a holding without
/// a snapshot price is excluded from totals, both with a warning. Strict
/// mode turns either condition into an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataPolicy {
    /// Oversells and unmatched prices abort with a typed error.
    Strict,
    /// Oversells drop the remainder; unpriced holdings are skipped.
    #[default]
    Lenient,
}
