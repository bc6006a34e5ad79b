/// Extract the inclusive bit range `[lo, hi]` of `word`.
///
/// Takes a 64-bit word so fetch addresses can go through the same helper as
/// instruction words.
pub fn bits_at(word: u64, lo: u32, hi: u32) -> u64 {
  debug_assert!(lo <= hi && hi < 64, "bad bit range [{}, {}]", lo, hi);
  let width = hi - lo + 1;
  let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
  (word >> lo) & mask
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bits_at_fields() {
    let word = 0x00a4_3020u64;
    assert_eq!(bits_at(word, 26, 31), 0x00);
    assert_eq!(bits_at(word, 21, 25), 5);
    assert_eq!(bits_at(word, 16, 20), 4);
    assert_eq!(bits_at(word, 11, 15), 6);
    assert_eq!(bits_at(word, 0, 5), 0x20);
  }

  #[test]
  fn test_bits_at_single_bit() {
    assert_eq!(bits_at(0b1000, 3, 3), 1);
    assert_eq!(bits_at(0b1000, 2, 2), 0);
  }

  #[test]
  fn test_bits_at_full_width() {
    assert_eq!(bits_at(u64::MAX, 0, 63), u64::MAX);
    assert_eq!(bits_at(0xdead_beef_0040_0000, 32, 63), 0xdead_beef);
  }
}
