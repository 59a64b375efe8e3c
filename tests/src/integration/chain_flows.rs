//! # Chain Mutation Flows
//!
//! Mutation sequences run against every shipped digest adapter:
//!
//! 1. **Prepend**: `add` leaves existing digests untouched
//! 2. **Positional edits**: `insert` / `remove` / `update` rehash only the prefix
//! 3. **Model check**: a seeded random workload tracks a plain `Vec`

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use secured_list::{
        Blake3Digest, ChainError, DigestFunction, Hash, IndexFault, ListConfigBuilder,
        OverflowPolicy, SecuredList, Sha256Digest, SipDigest,
    };

    use crate::init_test_logging;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const DIGESTS: [&str; 4] = ["blake3", "blake3-keyed", "sha256", "sip"];

    fn make(kind: &str) -> Box<dyn DigestFunction> {
        match kind {
            "blake3" => Box::new(Blake3Digest::new()),
            "blake3-keyed" => Box::new(Blake3Digest::keyed([0x42; 32])),
            "sha256" => Box::new(Sha256Digest),
            "sip" => Box::new(SipDigest),
            other => panic!("unknown digest {}", other),
        }
    }

    fn chain<D: DigestFunction>(digest: D, values: &[&str]) -> SecuredList<D> {
        let mut list = SecuredList::new(digest);
        for value in values.iter().rev() {
            list.add(*value);
        }
        list
    }

    fn values<D>(list: &SecuredList<D>) -> Vec<String> {
        list.values()
            .map(|v| String::from_utf8_lossy(v).into_owned())
            .collect()
    }

    fn digests<D>(list: &SecuredList<D>) -> Vec<Hash> {
        list.iter().map(|n| *n.digest()).collect()
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn test_add_preserves_existing_digests_for_all_digests() {
        init_test_logging();
        for name in DIGESTS {
            let mut list = chain(make(name), &["b", "c"]);
            let before = digests(&list);

            list.add("a");

            assert_eq!(&digests(&list)[1..], &before[..], "digest {}", name);
            assert!(list.is_valid_chain(), "digest {}", name);
        }
    }

    #[test]
    fn test_insert_changes_prefix_and_preserves_values() {
        for name in DIGESTS {
            let mut list = chain(make(name), &["a", "b", "c", "d", "e"]);
            let before = digests(&list);

            list.insert(3, "x").unwrap();
            let after = digests(&list);

            assert_eq!(values(&list), vec!["a", "b", "c", "x", "d", "e"], "digest {}", name);
            for i in 0..3 {
                assert_ne!(after[i], before[i], "digest {} position {}", name, i);
            }
            assert_eq!(&after[4..], &before[3..], "digest {}", name);
            assert!(list.is_valid_chain());
        }
    }

    #[test]
    fn test_remove_changes_prefix_and_preserves_values() {
        for name in DIGESTS {
            let mut list = chain(make(name), &["a", "b", "c", "d", "e"]);
            let before = digests(&list);

            assert_eq!(list.remove(3).unwrap(), b"d");
            let after = digests(&list);

            assert_eq!(values(&list), vec!["a", "b", "c", "e"], "digest {}", name);
            for i in 0..3 {
                assert_ne!(after[i], before[i], "digest {} position {}", name, i);
            }
            assert_eq!(after[3], before[4]);
            assert!(list.is_valid_chain());
        }
    }

    #[test]
    fn test_remove_head_of_abc() {
        for name in DIGESTS {
            let mut list = chain(make(name), &["a", "b", "c"]);
            let b_digest = *list.get(1).unwrap().digest();

            list.remove(0).unwrap();

            assert_eq!(values(&list), vec!["b", "c"], "digest {}", name);
            assert_eq!(list.head().map(|n| *n.digest()), Some(b_digest));
            assert!(list.is_valid_chain());
        }
    }

    #[test]
    fn test_insert_zero_equals_two_adds() {
        for name in DIGESTS {
            let mut via_insert = chain(make(name), &["b"]);
            via_insert.insert(0, "v").unwrap();

            let mut via_add = SecuredList::new(make(name));
            via_add.add("b");
            via_add.add("v");

            assert_eq!(values(&via_insert), values(&via_add), "digest {}", name);
            assert_eq!(digests(&via_insert), digests(&via_add), "digest {}", name);
        }
    }

    #[test]
    fn test_repeated_value_digests_distinct() {
        for name in DIGESTS {
            let list = chain(make(name), &["x", "x", "x"]);
            let d = digests(&list);

            assert_ne!(d[0], d[1], "digest {}", name);
            assert_ne!(d[1], d[2], "digest {}", name);
            assert_ne!(d[0], d[2], "digest {}", name);
        }
    }

    #[test]
    fn test_rejected_operations_leave_chain_unchanged() {
        let mut empty = SecuredList::new(Blake3Digest::new());
        assert_eq!(
            empty.remove(0),
            Err(ChainError::InvalidIndex {
                index: 0,
                reason: IndexFault::EmptyList
            })
        );
        assert!(empty.is_empty());

        let mut list = chain(Blake3Digest::new(), &["a", "b", "c"]);
        let before = digests(&list);

        assert!(list.insert(-1, "x").is_err());
        assert!(list.remove(-1).is_err());
        assert!(list.remove(3).is_err());
        assert!(list.insert(4, "x").is_err());
        assert!(list.update(-2, "x").is_err());

        assert_eq!(digests(&list), before);
        assert_eq!(values(&list), vec!["a", "b", "c"]);
        assert_eq!(list.metrics().snapshot().mutations_rejected, 5);
    }

    #[test]
    fn test_append_policy_builds_log_in_order() {
        let config = ListConfigBuilder::new()
            .insert_overflow(OverflowPolicy::Append)
            .build();
        let mut log = SecuredList::with_config(Sha256Digest, config);

        for entry in ["boot", "login", "sync", "logout"] {
            log.insert(isize::MAX, entry).unwrap();
        }

        assert_eq!(values(&log), vec!["boot", "login", "sync", "logout"]);
        assert!(log.is_valid_chain());
    }

    #[test]
    fn test_keyed_chains_differ_by_key() {
        let a = chain(Blake3Digest::keyed([1; 32]), &["a", "b"]);
        let b = chain(Blake3Digest::keyed([2; 32]), &["a", "b"]);

        assert_ne!(a.root_digest(), b.root_digest());
    }

    #[test]
    fn test_seeded_random_workload_matches_model() {
        let mut rng = StdRng::seed_from_u64(0x5EC0_4ED);
        let mut list = SecuredList::new(Blake3Digest::new());
        let mut model: Vec<String> = Vec::new();

        for step in 0..2_000 {
            let value = format!("v{}", step);
            match rng.gen_range(0..4) {
                0 => {
                    list.add(value.as_str());
                    model.insert(0, value);
                }
                1 => {
                    let i = rng.gen_range(0..=model.len());
                    list.insert(i as isize, value.as_str()).unwrap();
                    model.insert(i, value);
                }
                2 if !model.is_empty() => {
                    let i = rng.gen_range(0..model.len());
                    let removed = list.remove(i as isize).unwrap();
                    assert_eq!(removed, model.remove(i).into_bytes());
                }
                3 if !model.is_empty() => {
                    let i = rng.gen_range(0..model.len());
                    list.update(i as isize, value.as_str()).unwrap();
                    model[i] = value;
                }
                _ => {}
            }
        }

        assert_eq!(values(&list), model);
        assert!(list.is_valid_chain());
        assert_eq!(list.verify().total_nodes, model.len());
    }
}
