use crate::SortError;
use crate::observe::{NoopObserver, SortObserver};
use crate::table::BucketTable;

/// Sorts `data` in place, stably, by the non-negative integer key that
/// `key_of` derives from each element.
///
/// This is a distribution sort, not a comparison sort: elements with equal
/// keys are never distinguished further, they keep their relative input
/// order. The caller must consider equal-key elements interchangeable for
/// ordering purposes.
///
/// Memory scales with `max(key) + 1`, not with the number of distinct keys;
/// a sparse or huge key range is the caller's cost to bear.
///
/// Fails with [`SortError::InvalidKey`] if any element maps to a negative
/// key. The failure is detected before any element is moved, so `data` is
/// untouched on error. Sorting an empty vector is a no-op success.
///
/// # Panics
///
/// Panics if `key_of` is not deterministic, i.e. an element yields a key
/// during distribution that lies outside the bounds established by the
/// initial scan. That breaks the key-extraction contract and there is no
/// way to recover a meaningful order from it.
pub fn sort_by_key<T, F>(data: &mut Vec<T>, key_of: F) -> Result<(), SortError>
where
    F: Fn(&T) -> i64,
{
    sort_by_key_observed(data, key_of, &mut NoopObserver)
}

/// Like [`sort_by_key`], notifying `observer` once per bucket creation and
/// once per element move in each of the two moving passes.
pub fn sort_by_key_observed<T, F, O>(
    data: &mut Vec<T>,
    key_of: F,
    observer: &mut O,
) -> Result<(), SortError>
where
    F: Fn(&T) -> i64,
    O: SortObserver,
{
    let Some(max) = max_key(data, &key_of)? else {
        return Ok(());
    };

    let mut table = distribute(data, &key_of, max, observer);
    collect(&mut table, data, observer);
    Ok(())
}

/// Identity-key convenience: sorts integers by their own value. This is the
/// one key mapping that is a total order by construction; anything fancier
/// goes through [`sort_by_key`] with the caller vouching for the mapping.
pub fn sort_ints(data: &mut Vec<i64>) -> Result<(), SortError> {
    sort_by_key(data, |&value| value)
}

/// Single validating pass over the input: the largest key, or `None` for an
/// empty input. The first negative key aborts the whole sort, which is what
/// keeps the later passes free of partial-state rollback.
fn max_key<T, F>(data: &[T], key_of: &F) -> Result<Option<i64>, SortError>
where
    F: Fn(&T) -> i64,
{
    if data.is_empty() {
        return Ok(None);
    }

    let mut max = 0;
    for (index, element) in data.iter().enumerate() {
        let key = key_of(element);
        if key < 0 {
            return Err(SortError::InvalidKey { index, key });
        }
        if key > max {
            max = key;
        }
    }
    Ok(Some(max))
}

/// Drains the input in order into a fresh table, creating buckets lazily.
/// Elements are moved, never cloned.
fn distribute<T, F, O>(
    data: &mut Vec<T>,
    key_of: &F,
    max: i64,
    observer: &mut O,
) -> BucketTable<T>
where
    F: Fn(&T) -> i64,
    O: SortObserver,
{
    let mut table = BucketTable::new(max as usize);
    for element in data.drain(..) {
        let key = key_of(&element);
        if key < 0 || key > max {
            panic!(
                "key function is not deterministic: \
                 got key {key} after a scan that bounded keys to 0..={max}"
            );
        }
        if table.push(key as usize, element) {
            observer.bucket_created(key);
        }
        observer.element_binned(key);
    }
    table
}

/// Walks buckets in ascending key order and appends their elements back to
/// `data`. The drain in [`distribute`] kept the vector's allocation, so the
/// pushes here never reallocate.
fn collect<T, O>(table: &mut BucketTable<T>, data: &mut Vec<T>, observer: &mut O)
where
    O: SortObserver,
{
    for (key, bucket) in table.take_buckets() {
        for element in bucket {
            observer.element_placed(key, data.len());
            data.push(element);
        }
    }
}
