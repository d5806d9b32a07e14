use crate::domain::model::{CheckDigit, Identifier};

/// ISBN-13 weighted sum: odd positions (1-indexed) weigh 1, even positions 3.
pub fn compute_check_digit(identifier: &Identifier) -> CheckDigit {
    let sum: u32 = identifier
        .digits()
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let multiplier = if i % 2 == 0 { 1 } else { 3 };
            u32::from(d) * multiplier
        })
        .sum();

    let remainder = (sum % 10) as u8;
    let digit = if remainder == 0 { 0 } else { 10 - remainder };
    CheckDigit::new(digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(digits: &str) -> u8 {
        compute_check_digit(&Identifier::from_digit_str(digits).unwrap()).value()
    }

    #[test]
    fn test_known_check_digits() {
        assert_eq!(check("978014300723"), 4);
        assert_eq!(check("748174308791"), 7);
        assert_eq!(check("978030640615"), 7);
    }

    #[test]
    fn test_sum_multiple_of_ten_gives_zero() {
        assert_eq!(check("000000000000"), 0);
        // 1*1 + 3*3 = 10
        assert_eq!(check("130000000000"), 0);
    }

    #[test]
    fn test_weights_alternate() {
        // 第一位權重 1，第二位權重 3
        assert_eq!(check("100000000000"), 9);
        assert_eq!(check("010000000000"), 7);
        assert_eq!(check("000000000001"), 7);
        assert_eq!(check("000000000010"), 9);
    }

    #[test]
    fn test_every_remainder_maps_to_single_digit() {
        // 最後一位權重 3，0..=9 涵蓋所有餘數
        for last in 0..10u8 {
            let digits = format!("00000000000{}", last);
            let expected = (10 - (u32::from(last) * 3) % 10) % 10;
            assert_eq!(u32::from(check(&digits)), expected);
        }
    }

    #[test]
    fn test_all_nines() {
        // 6*9 + 6*27 = 216
        assert_eq!(check("999999999999"), 4);
    }
}
