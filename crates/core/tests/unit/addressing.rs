//! Address decomposition properties.

use proptest::prelude::*;

use pipesim_core::config::CacheConfig;
use pipesim_core::core::cache::CacheSim;

fn cache_with(sets: usize, ways: usize, words_per_line: usize) -> CacheSim {
    CacheSim::new(&CacheConfig {
        sets,
        ways,
        words_per_line,
        ..CacheConfig::default()
    })
}

proptest! {
    /// `line_base` plus the word offset reconstructs the word-aligned
    /// address for every geometry.
    #[test]
    fn decompose_reconstructs_the_address(
        addr in any::<u32>(),
        set_bits in 0u32..8,
        way_bits in 0u32..3,
        word_bits in 0u32..4,
    ) {
        let cache = cache_with(1 << set_bits, 1 << way_bits, 1 << word_bits);
        let la = cache.decompose(addr);
        let base = cache.line_base(la.tag, la.set);
        prop_assert_eq!(base + la.word as u32 * 4, addr & !3);
    }

    /// A line base decomposes back to the same tag and set with a zero
    /// word index.
    #[test]
    fn line_base_is_the_inverse_of_decompose(
        addr in any::<u32>(),
        set_bits in 0u32..8,
        word_bits in 0u32..4,
    ) {
        let cache = cache_with(1 << set_bits, 4, 1 << word_bits);
        let la = cache.decompose(addr);
        let back = cache.decompose(cache.line_base(la.tag, la.set));
        prop_assert_eq!(back.tag, la.tag);
        prop_assert_eq!(back.set, la.set);
        prop_assert_eq!(back.word, 0);
    }

    /// Geometry values round up to powers of two, so a near-power request
    /// behaves exactly like the next power of two.
    #[test]
    fn geometry_rounds_up_to_powers_of_two(addr in any::<u32>()) {
        let rounded = cache_with(3, 3, 3);
        let exact = cache_with(4, 4, 4);
        prop_assert_eq!(rounded.decompose(addr), exact.decompose(addr));
    }
}

#[test]
fn default_geometry_field_boundaries() {
    // 4-word lines and 16 sets: word bits [2,4), set bits [4,8), tag above.
    let cache = cache_with(16, 4, 4);
    let la = cache.decompose(0x0001_2348);
    assert_eq!(la.word, 2);
    assert_eq!(la.set, 4);
    assert_eq!(la.tag, 0x123);
}
