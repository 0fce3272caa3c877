use crate::heap::MaxHeap;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Panics unless every parent compares `>=` each of its children.
pub fn check_heap<T: PartialOrd + std::fmt::Debug>(heap: &MaxHeap<T>) {
    let data = heap.as_slice();
    for i in 1..data.len() {
        let parent = (i - 1) / 2;
        assert!(
            data[parent] >= data[i],
            "heap order violated at {}: {:?}",
            i,
            data
        );
    }
}
