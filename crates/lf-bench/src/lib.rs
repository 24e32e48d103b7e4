//! Benchmark framework comparing indexing strategies for price range queries.
//!
//! Two structures hold the same records:
//! - [`OrderedIndex`]: a `BTreeMap` keyed by (price, id), so a range query
//!   walks only the matching subrange;
//! - [`HashIndex`]: a `HashMap` keyed by id, so a range query scans every
//!   record.
//!
//! The harness times both over repeated queries, checks they agree, and
//! writes a JSON baseline.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

/// One priced catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: f64,
}

/// Errors from loading benchmark data.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("Failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV line {line}: {reason}")]
    MalformedCsv { line: usize, reason: String },
}

/// Total-ordered key for an `f64` price.
///
/// Maps the IEEE-754 bit pattern into a monotonically increasing `u64`
/// (flip the sign bit for non-negatives, flip everything for negatives),
/// which lets a `BTreeMap` order prices without an ordered-float wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PriceKey(u64);

impl PriceKey {
    pub fn new(price: f64) -> Self {
        let bits = price.to_bits();
        let ordered = if bits >> 63 == 0 {
            bits | (1 << 63)
        } else {
            !bits
        };
        Self(ordered)
    }
}

/// Records ordered by (price, id); range queries walk a subrange.
#[derive(Debug, Default)]
pub struct OrderedIndex {
    records: BTreeMap<(PriceKey, u64), PriceRecord>,
}

impl OrderedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: PriceRecord) {
        self.records
            .insert((PriceKey::new(record.price), record.id), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records with `min_price <= price <= max_price`, ascending by
    /// (price, id). Bounds are inclusive on both ends.
    pub fn range_query(&self, min_price: f64, max_price: f64) -> Vec<&PriceRecord> {
        let lo = (PriceKey::new(min_price), u64::MIN);
        let hi = (PriceKey::new(max_price), u64::MAX);
        self.records.range(lo..=hi).map(|(_, r)| r).collect()
    }
}

/// Records keyed by id; range queries scan everything.
#[derive(Debug, Default)]
pub struct HashIndex {
    records: HashMap<u64, PriceRecord>,
}

impl HashIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: PriceRecord) {
        self.records.insert(record.id, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records with `min_price <= price <= max_price`. A full scan;
    /// results are sorted by (price, id) so outputs compare across indexes.
    pub fn range_query(&self, min_price: f64, max_price: f64) -> Vec<&PriceRecord> {
        let mut results: Vec<&PriceRecord> = self
            .records
            .values()
            .filter(|r| min_price <= r.price && r.price <= max_price)
            .collect();
        results.sort_by_key(|r| (PriceKey::new(r.price), r.id));
        results
    }
}

/// Load records from a CSV file with an `id,name,category,price` header.
/// A missing file falls back to the synthetic catalog.
pub fn load_records(path: &Path) -> Result<Vec<PriceRecord>, BenchError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(synthetic_records(1000));
        }
        Err(err) => return Err(err.into()),
    };

    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 4 {
            return Err(BenchError::MalformedCsv {
                line: idx + 1,
                reason: format!("expected 4 fields, got {}", fields.len()),
            });
        }
        let id = fields[0]
            .trim()
            .parse::<u64>()
            .map_err(|e| BenchError::MalformedCsv {
                line: idx + 1,
                reason: format!("bad id: {}", e),
            })?;
        let price = fields[3]
            .trim()
            .parse::<f64>()
            .map_err(|e| BenchError::MalformedCsv {
                line: idx + 1,
                reason: format!("bad price: {}", e),
            })?;
        records.push(PriceRecord {
            id,
            name: fields[1].trim().to_string(),
            category: fields[2].trim().to_string(),
            price,
        });
    }
    Ok(records)
}

/// Synthetic catalog: `count` records cycling five categories, prices from
/// 10.0 up to 158.5 in 1.5 steps.
pub fn synthetic_records(count: u64) -> Vec<PriceRecord> {
    const CATEGORIES: [&str; 5] = ["Electronics", "Clothes", "Food", "Books", "Toys"];
    (1..=count)
        .map(|i| PriceRecord {
            id: i,
            name: format!("Item {}", i),
            category: CATEGORIES[(i % CATEGORIES.len() as u64) as usize].to_string(),
            price: 10.0 + (i % 100) as f64 * 1.5,
        })
        .collect()
}

/// The queried price window and repetition count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    pub min_price: f64,
    pub max_price: f64,
    pub repetitions: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            min_price: 50.0,
            max_price: 70.0,
            repetitions: 100,
        }
    }
}

/// Timing outcome for both indexes over the same query window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchResult {
    pub record_count: usize,
    pub config: BenchConfig,
    pub matches: usize,
    pub ordered_total_time_s: f64,
    pub hash_total_time_s: f64,
    /// hash time / ordered time; above 1.0 means the ordered index won.
    pub slowdown_ratio: f64,
}

/// Build both indexes, verify they agree, and time the repeated query.
///
/// Returns `None` when the indexes disagree on the query result, which
/// would invalidate any timing comparison.
pub fn run_benchmark(records: &[PriceRecord], config: &BenchConfig) -> Option<BenchResult> {
    let mut ordered = OrderedIndex::new();
    let mut hash = HashIndex::new();
    for record in records {
        ordered.insert(record.clone());
        hash.insert(record.clone());
    }

    let ordered_results = ordered.range_query(config.min_price, config.max_price);
    let hash_results = hash.range_query(config.min_price, config.max_price);
    if ordered_results != hash_results {
        return None;
    }
    let matches = ordered_results.len();

    let start = Instant::now();
    for _ in 0..config.repetitions {
        let results = ordered.range_query(config.min_price, config.max_price);
        std::hint::black_box(results);
    }
    let ordered_total_time_s = start.elapsed().as_secs_f64();

    let start = Instant::now();
    for _ in 0..config.repetitions {
        let results = hash.range_query(config.min_price, config.max_price);
        std::hint::black_box(results);
    }
    let hash_total_time_s = start.elapsed().as_secs_f64();

    let slowdown_ratio = if ordered_total_time_s > 0.0 {
        hash_total_time_s / ordered_total_time_s
    } else {
        f64::INFINITY
    };

    Some(BenchResult {
        record_count: records.len(),
        config: config.clone(),
        matches,
        ordered_total_time_s,
        hash_total_time_s,
        slowdown_ratio,
    })
}
