use crate::itemizer::Itemizer;

/// An interned item token. Id 0 is the tree sentinel and renders as "root".
#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn root() -> Item {
        Item { id: 0 }
    }
    pub fn with_id(id: u32) -> Item {
        Item { id }
    }
    pub fn as_index(&self) -> usize {
        self.id as usize
    }
    pub fn is_root(&self) -> bool {
        self.id == 0
    }
    pub fn item_vec_to_string(items: &[Item], itemizer: &Itemizer) -> String {
        let mut a: Vec<&str> = items.iter().map(|&id| itemizer.str_of(id)).collect();
        ensure_sorted(&mut a);
        a.join(" ")
    }
}

// If all items in the itemset convert to an integer, order by that integer,
// otherwise order lexicographically.
fn ensure_sorted(a: &mut Vec<&str>) {
    let all_items_convert_to_ints = a.iter().all(|x| x.parse::<u32>().is_ok());
    if all_items_convert_to_ints {
        a.sort_by_key(|x| x.parse::<u32>().unwrap_or(0));
    } else {
        a.sort();
    }
}
