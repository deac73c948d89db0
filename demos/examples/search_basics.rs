// Copyright 2025 the Bookcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search and sort basics.
//!
//! Filter a small catalog with typo-tolerant queries and print the results in
//! each sort order.
//!
//! Run:
//! - `cargo run -p bookcase_demos --example search_basics`

use bookcase_catalog::{BookRecord, Catalog, SortKey};
use bookcase_search::SearchIndex;

fn main() {
    let catalog = Catalog::new([
        BookRecord::new("lotr", "The Lord of the Rings")
            .with_author("J.R.R. Tolkien")
            .with_published(1954),
        BookRecord::new("hobbit", "The Hobbit")
            .with_author("J.R.R. Tolkien")
            .with_published(1937),
        BookRecord::new("calikusu", "Çalıkuşu")
            .with_author("Reşat Nuri Güntekin")
            .with_published(1922),
        BookRecord::new("dune", "Dune")
            .with_author("Frank Herbert")
            .with_published(1965),
        BookRecord::new("hours", "A Book of Hours"),
    ]);
    let index = SearchIndex::new(&catalog);

    for query in ["tolk ring", "tolkein", "calikusu", "hrebert", "du"] {
        let hits = index.filter(query);
        let titles: Vec<_> = hits.iter().map(|r| r.title()).collect();
        println!("{query:>10}: {titles:?}");
    }

    for key in SortKey::ALL {
        let mut list = catalog.view_all();
        list.sort_by(key);
        let ids: Vec<_> = list.iter().map(|r| r.id().as_str()).collect();
        println!("{key:>10}: {ids:?}");
    }
}
