// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use routecity::queue::{Order, PriorityQueue};

#[derive(Debug, Arbitrary)]
enum Op {
    Add(i16),
    Pop,
    RemoveAt(u8),
    SortAt(u8, i16),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut queue = PriorityQueue::new(Order::MinFirst);
    for op in ops {
        match op {
            Op::Add(v) => queue.add(v),
            Op::Pop => {
                let _ = queue.pop();
            }
            Op::RemoveAt(slot) => {
                let _ = queue.remove_at(usize::from(slot));
            }
            Op::SortAt(slot, v) => {
                if let Some(value) = queue.get_mut(usize::from(slot)) {
                    *value = v;
                    queue.sort_at(usize::from(slot)).unwrap();
                }
            }
        }
        for slot in 1..queue.count() {
            assert!(queue.get((slot - 1) / 2) <= queue.get(slot));
        }
    }
});
