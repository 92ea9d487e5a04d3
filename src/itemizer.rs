use crate::item::Item;
use fnv::FnvHashMap;

/// Interns item tokens to dense ids starting at 1; id 0 is reserved for
/// the tree root sentinel.
pub struct Itemizer {
    next_item_id: u32,
    item_str_to_id: FnvHashMap<String, Item>,
    item_id_to_str: Vec<String>,
}

impl Itemizer {
    pub fn new() -> Itemizer {
        Itemizer {
            next_item_id: 1,
            item_str_to_id: FnvHashMap::default(),
            item_id_to_str: vec![],
        }
    }
    pub fn id_of(&mut self, item: &str) -> Item {
        if let Some(id) = self.item_str_to_id.get(item) {
            return *id;
        }
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.item_str_to_id
            .insert(String::from(item), Item::with_id(id));
        self.item_id_to_str.push(String::from(item));
        Item::with_id(id)
    }
    pub fn str_of(&self, id: Item) -> &str {
        if id.is_root() {
            return "root";
        }
        &self.item_id_to_str[id.as_index() - 1]
    }
    /// Reassign ids so that id order equals lexical token order, remapping
    /// the given count map to the new ids. The tree and the miner break
    /// support ties by comparing ids, so this must run after the counting
    /// pass and before any transaction is inserted.
    pub fn reorder_sorted(&mut self, counts: &mut FnvHashMap<Item, u32>) {
        self.item_id_to_str.sort();
        let mut remapped: FnvHashMap<Item, u32> = FnvHashMap::default();
        for (index, item_str) in self.item_id_to_str.iter().enumerate() {
            let new_id = Item::with_id((index + 1) as u32);
            let old_id = self.item_str_to_id[item_str.as_str()];
            if let Some(&count) = counts.get(&old_id) {
                remapped.insert(new_id, count);
            }
            self.item_str_to_id.insert(item_str.clone(), new_id);
        }
        *counts = remapped;
    }
}

impl Default for Itemizer {
    fn default() -> Self {
        Itemizer::new()
    }
}
