use fim::command_line_args::{parse_args_or_exit, Arguments};
use fim::frequent_itemsets;
use fim::FPTree;
use fim::HeaderTable;
use fim::Item;
use fim::Itemizer;
use fim::Result;
use fim::TransactionReader;

use fnv::FnvHashMap;
use std::fs::File;
use std::io::Write;
use std::process;
use std::time::Instant;
use tracing::info;

fn count_item_frequencies(reader: TransactionReader) -> Result<FnvHashMap<Item, u32>> {
    let mut item_count: FnvHashMap<Item, u32> = FnvHashMap::default();
    for transaction in reader {
        for item in transaction? {
            let counter = item_count.entry(item).or_insert(0);
            *counter += 1;
        }
    }
    Ok(item_count)
}

fn mine_frequent_itemsets(args: &Arguments) -> Result<()> {
    info!("mining data set: {}", args.input_file_path);

    // One pass of the dataset to count item frequencies for the header
    // table, then reorder the itemizer so id order matches token order.
    let start = Instant::now();
    let timer = Instant::now();
    let mut itemizer: Itemizer = Itemizer::new();
    let mut item_count =
        count_item_frequencies(TransactionReader::new(&args.input_file_path, &mut itemizer)?)?;
    itemizer.reorder_sorted(&mut item_count);
    let header = HeaderTable::with_min_count(&item_count, args.min_support);
    info!(
        "first pass took {:?}, {} items above minimum support",
        timer.elapsed(),
        header.len()
    );

    // Re-read the data set, inserting each transaction into the tree
    // sorted by item frequency.
    let timer = Instant::now();
    let mut fptree = FPTree::new(header, args.min_support);
    for transaction in TransactionReader::new(&args.input_file_path, &mut itemizer)? {
        fptree.insert_transaction(&transaction?);
    }
    info!(
        "building initial FPTree took {:?}, {} nodes",
        timer.elapsed(),
        fptree.num_nodes()
    );

    let timer = Instant::now();
    let itemsets: Vec<Vec<Item>> = frequent_itemsets(&fptree);
    info!(
        "FPGrowth generated {} frequent itemsets in {:?}",
        itemsets.len(),
        timer.elapsed()
    );

    {
        let mut output = File::create(&args.output_itemsets_path)?;
        for itemset in &itemsets {
            writeln!(output, "{}", Item::item_vec_to_string(itemset, &itemizer))?;
        }
    }

    info!("total runtime: {:?}", start.elapsed());

    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();

    let arguments = parse_args_or_exit();

    if let Err(err) = mine_frequent_itemsets(&arguments) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
