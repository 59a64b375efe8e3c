//! # Tamper Scenarios
//!
//! Out-of-band edits an attacker or a faulty component could make, and where
//! the scan reports them:
//!
//! | Edit | Reported at |
//! |------|-------------|
//! | Value overwrite at `k` | `k` |
//! | Relink without rehash after `k` | `k` |
//! | Cached digest overwrite at `k` | `k - 1` (and `k`) |
//! | Full upstream recompute | not detected |

#[cfg(test)]
mod tests {
    use secured_list::{
        Blake3Digest, DigestFunction, IntegrityReport, SecuredList, Sha256Digest, SipDigest,
    };

    use crate::init_test_logging;

    fn build<D: DigestFunction>(digest: D, values: &[&str]) -> SecuredList<D> {
        let mut list = SecuredList::new(digest);
        for value in values.iter().rev() {
            list.add(*value);
        }
        list
    }

    #[test]
    fn test_value_overwrite_reported_at_same_position() {
        init_test_logging();
        let values = ["genesis", "alpha", "beta", "gamma", "delta", "omega"];

        for k in 0..values.len() {
            let mut list = build(Sha256Digest, &values);
            *list.get_mut(k).unwrap().raw_value_mut() = b"rewritten".to_vec();

            assert!(!list.is_valid_chain());
            let tampered = list.find_first_tampered().unwrap();
            assert_eq!(tampered.index, k);
            assert_eq!(tampered.node.value(), b"rewritten");
        }
    }

    #[test]
    fn test_swapped_successors_reported_at_predecessor() {
        let mut list = build(Blake3Digest::new(), &["a", "b", "c", "d"]);

        // Reorder to a, c, b, d by moving links only
        let a = list.get_mut(0).unwrap();
        let mut b = a.raw_successor_mut().take().unwrap();
        let mut c = b.raw_successor_mut().take().unwrap();
        let d = c.raw_successor_mut().take();
        *b.raw_successor_mut() = d;
        *c.raw_successor_mut() = Some(b);
        *a.raw_successor_mut() = Some(c);

        let report = list.verify();
        assert_eq!(
            list.values().collect::<Vec<_>>(),
            vec![&b"a"[..], &b"c"[..], &b"b"[..], &b"d"[..]]
        );
        // a, c, b all bind to a successor they were not hashed against
        assert_eq!(report.tampered_positions, vec![0, 1, 2]);
        assert_eq!(report.first_tampered(), Some(0));
    }

    #[test]
    fn test_truncated_tail_reported_at_new_tail() {
        let mut list = build(SipDigest, &["a", "b", "c"]);

        *list.get_mut(1).unwrap().raw_successor_mut() = None;

        assert_eq!(list.len(), 2);
        assert_eq!(list.find_first_tampered().map(|t| t.index), Some(1));
    }

    #[test]
    fn test_digest_overwrite_reported_upstream() {
        let mut list = build(Blake3Digest::new(), &["a", "b", "c", "d"]);

        *list.get_mut(2).unwrap().raw_digest_mut() = [0u8; 32];

        assert_eq!(list.verify().tampered_positions, vec![1, 2]);
    }

    #[test]
    fn test_full_recompute_forgery_undetected_without_key() {
        let forger = Blake3Digest::new();
        let mut list = build(Blake3Digest::new(), &["pay alice 10", "pay bob 5"]);

        *list.get_mut(1).unwrap().raw_value_mut() = b"pay mallory 500".to_vec();
        for k in (0..2).rev() {
            list.get_mut(k).unwrap().recompute(&forger);
        }

        assert!(list.is_valid_chain());
    }

    #[test]
    fn test_full_recompute_forgery_detected_with_key() {
        let forger = Blake3Digest::new();
        let mut list = build(Blake3Digest::keyed([0x99; 32]), &["pay alice 10", "pay bob 5"]);

        *list.get_mut(1).unwrap().raw_value_mut() = b"pay mallory 500".to_vec();
        for k in (0..2).rev() {
            list.get_mut(k).unwrap().recompute(&forger);
        }

        assert!(!list.is_valid_chain());
        assert_eq!(list.find_first_tampered().map(|t| t.index), Some(0));
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let mut list = build(Blake3Digest::new(), &["a", "b"]);
        *list.get_mut(1).unwrap().raw_value_mut() = b"z".to_vec();

        let report = list.verify();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["chain_valid"], false);
        assert_eq!(json["tampered_positions"], serde_json::json!([1]));
        assert_eq!(
            json["root_digest"].as_str(),
            list.root_digest().map(hex::encode).as_deref()
        );

        let back: IntegrityReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }
}
