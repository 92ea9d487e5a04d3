// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::header::HeaderTable;
use crate::item::Item;
use crate::itemizer::Itemizer;
use itertools::Itertools;

const ROOT: usize = 0;

#[derive(Debug)]
pub(crate) struct FPNode {
    pub(crate) item: Item,
    pub(crate) count: u32,
    pub(crate) parent: usize,
    children: Vec<usize>,
}

/// Prefix-sharing tree over sorted transactions. Nodes live in an arena
/// addressed by index; the root is index 0 and is its own parent. Upward
/// links and the per-item node lists are plain indices, never owners.
pub struct FPTree {
    nodes: Vec<FPNode>,
    header: HeaderTable,
    min_sup: u32,
    // One entry per tree node carrying the item, in creation order.
    item_lists: Vec<Vec<usize>>,
}

impl FPTree {
    pub fn new(header: HeaderTable, min_sup: u32) -> FPTree {
        let root = FPNode {
            item: Item::root(),
            count: 1,
            parent: ROOT,
            children: Vec::new(),
        };
        FPTree {
            nodes: vec![root],
            header,
            min_sup,
            item_lists: Vec::new(),
        }
    }

    pub fn header(&self) -> &HeaderTable {
        &self.header
    }

    pub fn min_sup(&self) -> u32 {
        self.min_sup
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, id: usize) -> &FPNode {
        &self.nodes[id]
    }

    /// Every node currently carrying `item`, in creation order.
    pub(crate) fn item_list(&self, item: Item) -> &[usize] {
        self.item_lists
            .get(item.as_index())
            .map_or(&[], |list| list.as_slice())
    }

    fn add_node(&mut self, parent: usize, item: Item) -> usize {
        let id = self.nodes.len();
        self.nodes.push(FPNode {
            item,
            count: 1,
            parent,
            children: Vec::with_capacity(1),
        });
        self.nodes[parent].children.push(id);
        self.add_to_item_list(item, id);
        id
    }

    fn add_to_item_list(&mut self, item: Item, id: usize) {
        let index = item.as_index();
        if index >= self.item_lists.len() {
            self.item_lists.resize(index + 1, vec![]);
        }
        self.item_lists[index].push(id);
    }

    fn child_of(&self, id: usize, item: Item) -> Option<usize> {
        for &node_id in &self.nodes[id].children {
            if self.nodes[node_id].item == item {
                return Some(node_id);
            }
        }
        None
    }

    // A node never has two children with the same item: either an existing
    // child's count is bumped, or a new child with count 1 is linked in.
    fn insert(&mut self, id: usize, item: Item) -> usize {
        match self.child_of(id, item) {
            Some(child_id) => {
                self.nodes[child_id].count += 1;
                child_id
            }
            None => self.add_node(id, item),
        }
    }

    /// Drop items the header table doesn't know, then order by support
    /// descending with an id-descending tie-break, so transactions with the
    /// same item set always share a prefix.
    pub fn sort_transaction(&self, transaction: &[Item]) -> Vec<Item> {
        let mut filtered: Vec<Item> = transaction
            .iter()
            .copied()
            .filter(|item| self.header.contains(item))
            .collect();
        self.header.sort_descending(&mut filtered);
        filtered
    }

    /// Sort and insert one transaction, merging shared prefixes. Repeated
    /// calls accumulate into the same tree.
    pub fn insert_transaction(&mut self, transaction: &[Item]) {
        let mut id = ROOT;
        for item in self.sort_transaction(transaction) {
            id = self.insert(id, item);
        }
    }

    /// Preorder textual rendering, one `item:count -> children` line per
    /// node, root included. Inspection aid only.
    pub fn dump(&self, itemizer: &Itemizer) -> String {
        let mut lines = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            let children = node
                .children
                .iter()
                .map(|&child| itemizer.str_of(self.nodes[child].item))
                .join(",");
            lines.push(format!(
                "{}:{} -> {}",
                itemizer.str_of(node.item),
                node.count,
                children
            ));
            for &child in node.children.iter().rev() {
                stack.push(child);
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnv::FnvHashMap;

    fn fixture() -> (Itemizer, FPTree, Vec<Vec<Item>>) {
        let transactions = [
            vec!["r", "z", "h", "j", "p"],
            vec!["z", "y", "x", "w", "v", "u", "t", "s"],
            vec!["z"],
            vec!["r", "x", "n", "o", "s"],
            vec!["y", "r", "x", "z", "q", "t", "p"],
            vec!["y", "z", "x", "e", "q", "s", "t", "m"],
        ];
        let mut itemizer = Itemizer::new();
        for transaction in &transactions {
            for token in transaction {
                itemizer.id_of(token);
            }
        }
        let mut counts: FnvHashMap<Item, u32> = FnvHashMap::default();
        itemizer.reorder_sorted(&mut counts);

        let mut header = HeaderTable::new();
        for (token, support) in [("z", 5), ("r", 3), ("x", 4), ("y", 3), ("s", 3), ("t", 3)] {
            header.insert(itemizer.id_of(token), support);
        }
        let tree = FPTree::new(header, 3);
        let interned: Vec<Vec<Item>> = transactions
            .iter()
            .map(|t| t.iter().map(|token| itemizer.id_of(token)).collect())
            .collect();
        (itemizer, tree, interned)
    }

    #[test]
    fn test_sort_transaction() {
        let (mut itemizer, tree, _) = fixture();
        let transaction: Vec<Item> = ["z", "y", "x", "w", "v", "u", "t", "s"]
            .iter()
            .map(|token| itemizer.id_of(token))
            .collect();
        let sorted: Vec<String> = tree
            .sort_transaction(&transaction)
            .iter()
            .map(|&item| itemizer.str_of(item).to_owned())
            .collect();
        assert_eq!(sorted, ["z", "x", "y", "t", "s"]);
    }

    #[test]
    fn test_insert_merges_prefixes() {
        let (mut itemizer, mut tree, _) = fixture();
        let t1: Vec<Item> = ["z", "x"].iter().map(|s| itemizer.id_of(s)).collect();
        let t2: Vec<Item> = ["z", "y"].iter().map(|s| itemizer.id_of(s)).collect();
        tree.insert_transaction(&t1);
        tree.insert_transaction(&t2);
        // Root, shared z, and one node each for x and y.
        assert_eq!(tree.num_nodes(), 4);
        let z = itemizer.id_of("z");
        assert_eq!(tree.item_list(z).len(), 1);
        assert_eq!(tree.node(tree.item_list(z)[0]).count, 2);
    }

    #[test]
    fn test_fixture_tree_dump() {
        let (itemizer, mut tree, transactions) = fixture();
        for transaction in &transactions {
            tree.insert_transaction(transaction);
        }
        let expected = "root:1 -> z,x\n\
                        z:5 -> r,x\n\
                        r:1 -> \n\
                        x:3 -> y\n\
                        y:3 -> t\n\
                        t:3 -> s,r\n\
                        s:2 -> \n\
                        r:1 -> \n\
                        x:1 -> s\n\
                        s:1 -> r\n\
                        r:1 -> ";
        assert_eq!(tree.dump(&itemizer), expected);
    }

    #[test]
    fn test_pointer_map_matches_header_support() {
        // Summing node counts over an item's pointer-map entries must give
        // the header-declared support when the header was computed from the
        // same transactions.
        let (mut itemizer, mut tree, transactions) = fixture();
        for transaction in &transactions {
            tree.insert_transaction(transaction);
        }
        for token in ["z", "r", "x", "y", "s", "t"] {
            let item = itemizer.id_of(token);
            let total: u32 = tree
                .item_list(item)
                .iter()
                .map(|&id| tree.node(id).count)
                .sum();
            assert_eq!(total, tree.header().support(&item), "item {}", token);
        }
    }

    #[test]
    fn test_duplicate_items_pass_through() {
        // Duplicates within a transaction are not deduplicated: each
        // occurrence extends the path with its own node.
        let (mut itemizer, mut tree, _) = fixture();
        let t: Vec<Item> = ["z", "z", "x"].iter().map(|s| itemizer.id_of(s)).collect();
        tree.insert_transaction(&t);
        let z = itemizer.id_of("z");
        assert_eq!(tree.item_list(z).len(), 2);
    }
}
