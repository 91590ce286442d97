/// Compute effective limit with precedence: global flag -> config default.
#[must_use]
pub fn effective_limit(global: Option<u32>, fallback: u32) -> usize {
    usize::try_from(global.unwrap_or(fallback)).unwrap_or(usize::MAX)
}
