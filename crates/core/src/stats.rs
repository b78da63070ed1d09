//! Group-by aggregations for the dashboard charts.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::ShoeRecord;

/// One group of an aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Bucket<K, V> {
    /// Create a bucket.
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

/// Running sum and count for a mean.
///
/// The exact sum is used while it fits in a `Decimal`. Once it overflows the
/// mean falls back to an incremental estimate, which stays within the range
/// of the values pushed.
struct MeanAcc {
    sum: Option<Decimal>,
    running: Decimal,
    count: u32,
}

impl Default for MeanAcc {
    fn default() -> Self {
        Self {
            sum: Some(Decimal::ZERO),
            running: Decimal::ZERO,
            count: 0,
        }
    }
}

impl MeanAcc {
    fn push(&mut self, value: Decimal) {
        self.count += 1;
        self.sum = self.sum.and_then(|sum| sum.checked_add(value));

        // running * (n - 1) / n + value / n
        let n = Decimal::from(self.count);
        self.running = (self.running - self.running / n)
            .checked_add(value / n)
            .unwrap_or(if value.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            });
    }

    fn mean(&self) -> Decimal {
        if self.count == 0 {
            return Decimal::ZERO;
        }
        self.sum
            .map_or(self.running, |sum| sum / Decimal::from(self.count))
            .normalize()
    }
}

fn mean_by<K: Ord>(
    rows: &[ShoeRecord],
    key: impl Fn(&ShoeRecord) -> K,
) -> Vec<Bucket<K, Decimal>> {
    let mut groups: BTreeMap<K, MeanAcc> = BTreeMap::new();
    for row in rows {
        groups.entry(key(row)).or_default().push(row.price_idr);
    }
    groups
        .into_iter()
        .map(|(key, acc)| Bucket::new(key, acc.mean()))
        .collect()
}

/// Mean price per brand, brands in ascending order.
#[must_use]
pub fn mean_price_by_brand(rows: &[ShoeRecord]) -> Vec<Bucket<String, Decimal>> {
    mean_by(rows, |row| row.brand.clone())
}

/// Mean price per EU size, sizes in ascending order.
#[must_use]
pub fn mean_price_by_size(rows: &[ShoeRecord]) -> Vec<Bucket<u8, Decimal>> {
    mean_by(rows, |row| row.size_eu)
}

/// Number of rows per category, most frequent first.
///
/// Categories with equal counts keep the order in which they first appear.
#[must_use]
pub fn count_by_category(rows: &[ShoeRecord]) -> Vec<Bucket<String, usize>> {
    let mut buckets: Vec<Bucket<String, usize>> = Vec::new();
    for row in rows {
        let name = row.category.as_str();
        match buckets.iter_mut().find(|b| b.key == name) {
            Some(bucket) => bucket.value += 1,
            None => buckets.push(Bucket::new(name.to_string(), 1)),
        }
    }
    // Stable sort keeps first-seen order among ties.
    buckets.sort_by(|a, b| b.value.cmp(&a.value));
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use crate::types::shoe::fixtures::{priced, shoe};

    #[test]
    fn test_mean_price_by_brand() {
        let rows = vec![
            priced("1", "A", 40, 100),
            priced("2", "A", 41, 200),
            priced("3", "B", 42, 300),
        ];
        assert_eq!(
            mean_price_by_brand(&rows),
            vec![
                Bucket::new("A".to_string(), Decimal::from(150)),
                Bucket::new("B".to_string(), Decimal::from(300)),
            ]
        );
    }

    #[test]
    fn test_mean_price_by_size_sorted_ascending() {
        let rows = vec![
            priced("1", "A", 44, 400),
            priced("2", "B", 38, 100),
            priced("3", "C", 44, 200),
        ];
        let buckets = mean_price_by_size(&rows);
        let sizes: Vec<u8> = buckets.iter().map(|b| b.key).collect();
        assert_eq!(sizes, [38, 44]);
        assert_eq!(buckets[1].value, Decimal::from(300));
    }

    #[test]
    fn test_fractional_mean() {
        let rows = vec![priced("1", "A", 40, 1), priced("2", "A", 40, 2)];
        assert_eq!(
            mean_price_by_brand(&rows)[0].value,
            Decimal::new(15, 1)
        );
    }

    #[test]
    fn test_mean_of_prices_whose_sum_overflows() {
        let huge = Decimal::from_i128_with_scale(50_000_000_000_000_000_000_000_000_000, 0);
        let mut rows = vec![
            priced("1", "A", 40, 0),
            priced("2", "A", 40, 0),
            priced("3", "A", 40, 0),
        ];
        for row in &mut rows {
            row.price_idr = huge;
        }

        assert_eq!(mean_price_by_brand(&rows)[0].value, huge);
        assert_eq!(mean_price_by_size(&rows)[0].value, huge);
    }

    #[test]
    fn test_mean_at_decimal_bounds() {
        let mut rows = vec![priced("1", "A", 40, 0), priced("2", "A", 40, 0)];
        rows[0].price_idr = Decimal::MAX;
        rows[1].price_idr = Decimal::MAX;
        assert_eq!(mean_price_by_brand(&rows)[0].value, Decimal::MAX);

        rows[1].price_idr = Decimal::MIN;
        assert_eq!(mean_price_by_brand(&rows)[0].value, Decimal::ZERO);
    }

    #[test]
    fn test_count_by_category() {
        let rows = vec![
            shoe("1", Category::Running),
            shoe("2", Category::Football),
            shoe("3", Category::Football),
            shoe("4", Category::Casual),
        ];
        let counts = count_by_category(&rows);
        assert_eq!(
            counts,
            vec![
                Bucket::new("Football".to_string(), 2),
                Bucket::new("Running".to_string(), 1),
                Bucket::new("Casual".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(mean_price_by_brand(&[]).is_empty());
        assert!(mean_price_by_size(&[]).is_empty());
        assert!(count_by_category(&[]).is_empty());
    }
}
