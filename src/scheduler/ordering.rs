//! Processing order for the greedy stages.
//!
//! Both stages walk their input once in a fixed order. Orders are returned as
//! indices into the input slice and are produced by a stable sort, so records
//! with equal keys keep their input order. Output determinism depends on it.

use crate::models::StudentRequest;

/// Indices of `items` sorted ascending by `key`, ties in input order.
pub fn stable_order_by_key<T, K, F>(items: &[T], mut key: F) -> Vec<usize>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut indices: Vec<usize> = (0..items.len()).collect();
    // `sort_by_key` is stable.
    indices.sort_by_key(|&i| key(&items[i]));
    indices
}

/// Most-constrained-first: fewest candidate blocks first.
pub fn most_constrained_first(candidate_counts: &[usize]) -> Vec<usize> {
    stable_order_by_key(candidate_counts, |&n| n)
}

/// Requests by priority rank (Required, Requested, Recommended).
pub fn priority_order(requests: &[StudentRequest]) -> Vec<usize> {
    stable_order_by_key(requests, |r| r.priority.rank())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_constrained_first_is_stable() {
        let order = most_constrained_first(&[3, 1, 2, 1, 3]);
        assert_eq!(order, vec![1, 3, 2, 0, 4]);
    }

    #[test]
    fn test_priority_order() {
        let requests = vec![
            StudentRequest::recommended("S1", "C1"),
            StudentRequest::new("S2", "C1"),
            StudentRequest::required("S3", "C1"),
            StudentRequest::new("S4", "C1"),
            StudentRequest::required("S5", "C1"),
        ];
        let order = priority_order(&requests);
        let ids: Vec<&str> = order
            .iter()
            .map(|&i| requests[i].student_id.as_str())
            .collect();
        assert_eq!(ids, ["S3", "S5", "S2", "S4", "S1"]);
    }

    #[test]
    fn test_empty() {
        assert!(most_constrained_first(&[]).is_empty());
        assert!(priority_order(&[]).is_empty());
    }
}
