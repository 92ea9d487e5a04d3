use crate::item::Item;
use fnv::FnvHashMap;

/// Per-item support counts. Defines which items are eligible for the tree
/// and both orderings the algorithm depends on: transactions are sorted by
/// support descending (ties broken by item id descending), anchors are
/// mined by support ascending (ties broken by item id ascending).
///
/// Tie-breaks compare item ids directly; callers are expected to have
/// finalized the itemizer with `reorder_sorted` so that id order matches
/// token order.
#[derive(Clone, Debug, Default)]
pub struct HeaderTable {
    counts: FnvHashMap<Item, u32>,
}

impl HeaderTable {
    pub fn new() -> HeaderTable {
        HeaderTable {
            counts: FnvHashMap::default(),
        }
    }

    /// Build from a raw count map, keeping only items whose count reaches
    /// `min_count`.
    pub fn with_min_count(counts: &FnvHashMap<Item, u32>, min_count: u32) -> HeaderTable {
        let mut table = HeaderTable::new();
        for (&item, &count) in counts.iter() {
            if count >= min_count {
                table.insert(item, count);
            }
        }
        table
    }

    pub fn insert(&mut self, item: Item, count: u32) {
        self.counts.insert(item, count);
    }

    pub fn support(&self, item: &Item) -> u32 {
        self.counts.get(item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.counts.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn sort_descending(&self, v: &mut Vec<Item>) {
        v.sort_by(|a, b| {
            let count_a = self.support(a);
            let count_b = self.support(b);
            if count_a == count_b {
                return b.cmp(a);
            }
            count_b.cmp(&count_a)
        });
    }

    /// Items in mining order: ascending support, ties by ascending id.
    /// Sorted by id first, then stably by support, so the tie-break
    /// survives the second pass.
    pub fn ascending_items(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self.counts.keys().copied().collect();
        items.sort();
        items.sort_by_key(|item| self.support(item));
        items
    }
}
