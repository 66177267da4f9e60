//! Client-side stand-ins for fields the literary feed does not provide.

use rand::seq::SliceRandom;
use rand::Rng;

pub const MIN_BOOK_PRICE: f64 = 5.0;
pub const MAX_BOOK_PRICE: f64 = 30.0;

pub const BOOK_DESCRIPTIONS: [&str; 5] = [
    "An epic tale of adventure and fantasy.",
    "A mysterious journey that defies logic.",
    "A gripping fantasy that will captivate your mind.",
    "A timeless story of love and loss.",
    "A magical world filled with creatures and surprises.",
];

/// Uniform price in `[5, 30)` rounded to cents. Rounding can land on `30.00`.
pub fn random_price<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let raw = rng.gen_range(MIN_BOOK_PRICE..MAX_BOOK_PRICE);
    (raw * 100.0).round() / 100.0
}

/// One of the five canned book blurbs.
pub fn random_description<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    BOOK_DESCRIPTIONS
        .choose(rng)
        .copied()
        .unwrap_or(BOOK_DESCRIPTIONS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_price_stays_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let price = random_price(&mut rng);
            assert!(
                (MIN_BOOK_PRICE..=MAX_BOOK_PRICE).contains(&price),
                "price {} out of range",
                price
            );
            let cents = price * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6, "{} has more than two decimals", price);
        }
    }

    #[test]
    fn test_random_description_from_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(BOOK_DESCRIPTIONS.contains(&random_description(&mut rng)));
        }
    }

    #[test]
    fn test_random_description_covers_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(random_description(&mut rng));
        }
        assert_eq!(seen.len(), BOOK_DESCRIPTIONS.len());
    }
}
