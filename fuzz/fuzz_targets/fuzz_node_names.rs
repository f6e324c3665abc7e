// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use libfuzzer_sys::fuzz_target;
use routecity::network::validate_name;
use routecity::Network;

fuzz_target!(|names: Vec<String>| {
    let mut network = Network::new();
    for name in &names {
        let valid = validate_name(name).is_ok();
        let added = network.add_node(name).is_ok();
        // A valid name only fails when it duplicates an earlier one
        assert!(!added || valid);
        if valid && !added {
            assert!(network.contains(name));
        }
    }

    let names = network.node_names().into_iter().map(String::from).collect::<Vec<_>>();
    for pair in names.windows(2) {
        network.add_connection(&pair[0], &pair[1], 1.0).unwrap();
    }
    assert!(network.is_connected());
});
