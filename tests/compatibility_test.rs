use keyarray::core::Keyed;
use keyarray::prelude::*;

// Simulate a trie node type owned by another crate.
#[derive(Debug, Clone, PartialEq)]
struct MockNode {
    segment: &'static str,
    hash: u64,
}

impl MockNode {
    fn new(segment: &'static str) -> Self {
        // FNV-1a, standing in for the trie's path hashing.
        let hash = segment.bytes().fold(0xcbf2_9ce4_8422_2325u64, |h, b| {
            (h ^ b as u64).wrapping_mul(0x0100_0000_01b3)
        });
        Self { segment, hash }
    }
}

// Implement Keyed for the external struct.
// This proves the trait is implementable by "outside crates".
impl Keyed for MockNode {
    type Key = u64;

    fn key(&self) -> u64 {
        self.hash
    }
}

#[test]
fn test_external_struct_compatibility() {
    let mut nodes: Vec<MockNode> = ["users", "posts", "comments", "likes", "tags"]
        .into_iter()
        .map(MockNode::new)
        .collect();
    let len = nodes.len();
    sort(&mut nodes, 0, len);

    assert!(nodes.windows(2).all(|w| w[0].hash < w[1].hash));

    let target = MockNode::new("likes");
    let hit = search(&nodes, target.hash);
    assert!(hit.found);
    assert_eq!(nodes[hit.index], target);
}

#[test]
fn test_external_struct_as_value() {
    let children = ConcurrentSortedArray::new();
    for segment in ["a", "b", "c"] {
        let node = MockNode::new(segment);
        children.insert(node.hash, node);
    }

    let b = MockNode::new("b");
    assert_eq!(children.get(b.hash), Some(b.clone()));
    assert_eq!(children.get_any([1, 2, b.hash]), Some((b.hash, b)));
}
