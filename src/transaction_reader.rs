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

use crate::error::{Error, Result};
use crate::item::Item;
use crate::itemizer::Itemizer;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;

/// Iterates the transactions of a CSV input file, one comma-separated
/// transaction per line. Tokens are trimmed and interned; duplicates and
/// token order pass through unchanged. "root" is rejected as an item.
pub struct TransactionReader<'a> {
    reader: BufReader<File>,
    itemizer: &'a mut Itemizer,
    line_number: usize,
}

impl<'a> TransactionReader<'a> {
    pub fn new(path: &str, itemizer: &'a mut Itemizer) -> Result<TransactionReader<'a>> {
        let file = File::open(path)?;
        Ok(TransactionReader {
            reader: BufReader::new(file),
            itemizer,
            line_number: 0,
        })
    }
}

pub(crate) fn parse_transaction(
    line: &str,
    line_number: usize,
    itemizer: &mut Itemizer,
) -> Result<Vec<Item>> {
    let mut transaction = Vec::new();
    for token in line.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if token == "root" {
            return Err(Error::ReservedItem { line: line_number });
        }
        transaction.push(itemizer.id_of(token));
    }
    Ok(transaction)
}

impl<'a> Iterator for TransactionReader<'a> {
    type Item = Result<Vec<Item>>;
    fn next(&mut self) -> Option<Result<Vec<Item>>> {
        loop {
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => return Some(Err(err.into())),
            }
            self.line_number += 1;
            match parse_transaction(&line, self.line_number, self.itemizer) {
                Ok(transaction) if transaction.is_empty() => continue,
                result => return Some(result),
            }
        }
    }
}
