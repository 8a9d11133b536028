use std::sync::Arc;
use std::thread;

use booltable::{Decision, Row};

fn main() {
    let tiers = Arc::new(Decision::of(vec![
        Row::call(true, |n: u64| n * 3, 1_u64),
        Row::call(true, |n: u64| n * 3, 2_u64),
        Row::call(false, |n: u64| n * 3, 3_u64),
        Row::call(true, |n: u64| n * 3, 4_u64),
    ]));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let table = Arc::clone(&tiers);
            thread::spawn(move || {
                let result = table.take(i);
                println!("Thread {i}: {result:?}");
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
