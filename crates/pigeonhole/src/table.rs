/// Dense key-indexed table of lazily created buckets.
///
/// The table always spans `0..=max_key`: its length is driven by the largest
/// key, not by how many distinct keys occur. A key that never shows up costs
/// one `None` slot. The table lives for exactly one sort call.
pub(crate) struct BucketTable<T> {
    slots: Vec<Option<Vec<T>>>,
}

impl<T> BucketTable<T> {
    pub(crate) fn new(max_key: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(max_key + 1, || None);
        Self { slots }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Appends `element` to the bucket for `key`, creating the bucket on
    /// first use. Returns `true` when this call created the bucket.
    pub(crate) fn push(&mut self, key: usize, element: T) -> bool {
        let slot = &mut self.slots[key];
        let created = slot.is_none();
        slot.get_or_insert_with(Vec::new).push(element);
        created
    }

    /// Takes the non-empty buckets in ascending key order.
    pub(crate) fn take_buckets(&mut self) -> impl Iterator<Item = (i64, Vec<T>)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(key, slot)| slot.take().map(|bucket| (key as i64, bucket)))
    }
}
