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

use crate::fptree::FPTree;
use crate::item::Item;
use fnv::FnvHashMap;

// One map per occurrence of the anchor item: every item on the path from
// that occurrence up to the root, keyed to the count stored at that node.
// The anchor's own entry is the occurrence's leaf count.
type PrefixPaths = Vec<FnvHashMap<Item, u32>>;

// Verdicts keyed by the exact ordered candidate sequence. Permutations of
// one underlying itemset are distinct entries; each is support-tested
// independently, so the split costs time, not correctness.
type FreqCache = FnvHashMap<Vec<Item>, bool>;

/// Mine all itemsets of size >= 2 whose support reaches the tree's minimum,
/// anchors processed in ascending header order. The tree must be fully
/// built; mining only reads it.
pub fn frequent_itemsets(tree: &FPTree) -> Vec<Vec<Item>> {
    let mut freq_items: Vec<Vec<Item>> = vec![];
    let mut cache: FreqCache = FnvHashMap::default();
    for anchor in tree.header().ascending_items() {
        mine_anchor(tree, anchor, &mut cache, &mut freq_items);
    }
    freq_items
}

fn mine_anchor(tree: &FPTree, anchor: Item, cache: &mut FreqCache, freq_items: &mut Vec<Vec<Item>>) {
    let prefix_paths = build_prefix_paths(tree, anchor);

    // Each occurrence of the anchor is the suffix of its own conditional
    // tree; ancestors are folded in one at a time, and a prefix is only
    // extended further while it stays frequent.
    for &suffix in tree.item_list(anchor) {
        let mut queue: Vec<Vec<usize>> = vec![vec![suffix]];

        while let Some(prefix) = queue.pop() {
            let prefix_items: Vec<Item> = prefix.iter().map(|&id| tree.node(id).item).collect();
            let deepest = *prefix.last().unwrap_or(&suffix);
            let mut cur = tree.node(deepest).parent;

            while !tree.node(cur).item.is_root() {
                let mut candidate_items = prefix_items.clone();
                candidate_items.push(tree.node(cur).item);

                // A cached sequence was already tested and, if frequent,
                // already recorded and queued from wherever it was first
                // seen; nothing more to do with it here.
                if !cache.contains_key(&candidate_items) {
                    let support = itemset_support(&prefix_paths, &candidate_items, anchor);
                    let frequent = support >= tree.min_sup();
                    if frequent {
                        let mut extended = prefix.clone();
                        extended.push(cur);
                        freq_items.push(candidate_items.clone());
                        queue.push(extended);
                    }
                    cache.insert(candidate_items, frequent);
                }

                cur = tree.node(cur).parent;
            }
        }
    }
}

fn build_prefix_paths(tree: &FPTree, anchor: Item) -> PrefixPaths {
    let mut prefix_paths = PrefixPaths::new();
    for &node_id in tree.item_list(anchor) {
        let mut path: FnvHashMap<Item, u32> = FnvHashMap::default();
        let mut cur = node_id;
        while !tree.node(cur).item.is_root() {
            path.insert(tree.node(cur).item, tree.node(cur).count);
            cur = tree.node(cur).parent;
        }
        prefix_paths.push(path);
    }
    prefix_paths
}

// A path supports the candidate when it contains every candidate item; the
// contribution is the anchor's leaf count on that path.
fn itemset_support(prefix_paths: &PrefixPaths, candidate: &[Item], anchor: Item) -> u32 {
    prefix_paths
        .iter()
        .filter(|path| candidate.iter().all(|item| path.contains_key(item)))
        .map(|path| path[&anchor])
        .sum()
}
