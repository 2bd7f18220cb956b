use crate::source::ValueSource;

/// Draw `count` values from the source, in order. Repeats are expected; the
/// sequence carries no identity beyond position.
pub fn generate_values(source: &mut impl ValueSource, count: usize) -> Vec<u32> {
    (0..count).map(|_| source.next_value()).collect()
}
