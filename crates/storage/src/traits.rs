/// Keyed storage for registry records.
///
/// A `RecordStore` maps a composite key to a whole record. Registries never
/// patch individual fields in place: a mutation reads the record, builds the
/// replacement, and writes it back with a single [`put`](RecordStore::put),
/// so a failed call leaves nothing half-written.
///
/// ## Absence
///
/// [`get`](RecordStore::get) never fails. A missing key is `None`, which is
/// distinct from any stored record, including one whose fields are all
/// falsy.
///
/// ## Ordering
///
/// [`entries`](RecordStore::entries) returns records in ascending key order.
/// Insertion order is not observable.
pub trait RecordStore<K, V> {
    /// Look up the record stored under `key`.
    fn get(&self, key: &K) -> Option<V>;

    /// Insert or overwrite the record under `key`, returning the previous one.
    fn put(&mut self, key: K, record: V) -> Option<V>;

    /// Delete the record under `key`, returning it if it existed.
    fn remove(&mut self, key: &K) -> Option<V>;

    fn contains(&self, key: &K) -> bool;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All stored records in ascending key order.
    fn entries(&self) -> Vec<(K, V)>;
}
