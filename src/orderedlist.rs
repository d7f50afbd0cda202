use std::fmt::Display;

/*
 * One node of the chain : a value and the slot index of its
 * successor, or None for the last node.
 */
struct Node<T> {
    value: T,
    next: Option<usize>,
}

/*
 * A singly linked, positionally addressable list.
 *
 * Nodes live in a slot arena owned by the list and link to each
 * other by index, so the list can keep a tail back-reference in
 * safe rust and append stays O(1). Slots vacated by removals are
 * recycled through a free-list.
 */
pub struct OrderedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    length: usize,
}

impl<T> OrderedList<T> {
    pub fn new() -> Self {
        OrderedList {
            slots: vec![],
            free: vec![],
            head: None,
            tail: None,
            length: 0,
        }
    }

    /*
     * Store a node in a recycled slot if one is available,
     * otherwise grow the arena. Returns the slot index.
     */
    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /*
     * Vacate a slot and hand it to the free-list.
     */
    fn release(&mut self, idx: usize) -> Option<Node<T>> {
        let node = self.slots[idx].take();
        self.free.push(idx);
        node
    }

    /*
     * Slot index of the node at <position>, walking next-links
     * from head. None if the chain is shorter than that.
     */
    fn index_at(&self, position: usize) -> Option<usize> {
        let mut curr = self.head;
        for _ in 0..position {
            curr = self.slots[curr?].as_ref()?.next;
        }
        curr
    }

    /*
     * Add <value> at the end of the list. Always succeeds, O(1).
     */
    pub fn append(&mut self, value: T) {
        let idx = self.alloc(Node { value, next: None });
        match self.tail {
            None => self.head = Some(idx),
            Some(old_tail) => {
                if let Some(node) = self.slots[old_tail].as_mut() {
                    node.next = Some(idx);
                }
            }
        }
        self.tail = Some(idx);
        self.length += 1;
    }

    /*
     * Insert <value> at <position>, shifting the node currently
     * there (and everything after it) one place towards the tail.
     *
     * Only positions strictly below the current length are valid :
     * inserting one past the end is rejected (that is what append
     * is for), and so is any insert into an empty list. Returns
     * false without touching the list for an invalid position.
     */
    pub fn insert_at(&mut self, value: T, position: usize) -> bool {
        if position >= self.length {
            return false;
        }
        if position == 0 {
            let idx = self.alloc(Node {
                value,
                next: self.head,
            });
            self.head = Some(idx);
        } else {
            let prev = match self.index_at(position - 1) {
                Some(idx) => idx,
                None => return false,
            };
            let next = self.slots[prev].as_ref().and_then(|node| node.next);
            let idx = self.alloc(Node { value, next });
            if let Some(node) = self.slots[prev].as_mut() {
                node.next = Some(idx);
            }
        }
        self.length += 1;
        true
    }

    /*
     * Remove the node at <position> and return its value, or None
     * without touching the list if the position is out of range.
     * Removing the tail moves the tail reference back to its
     * predecessor; removing the last remaining node resets the
     * list to empty.
     */
    pub fn remove_at(&mut self, position: usize) -> Option<T> {
        if position >= self.length {
            return None;
        }
        let target = if position == 0 {
            let target = self.head?;
            self.head = self.slots[target].as_ref()?.next;
            if self.head.is_none() {
                self.tail = None;
            }
            target
        } else {
            let prev = self.index_at(position - 1)?;
            let target = self.slots[prev].as_ref()?.next?;
            let next = self.slots[target].as_ref()?.next;
            if let Some(node) = self.slots[prev].as_mut() {
                node.next = next;
            }
            if self.tail == Some(target) {
                self.tail = Some(prev);
            }
            target
        };
        self.length -= 1;
        self.release(target).map(|node| node.value)
    }

    /*
     * Number of values in the list.
     */
    pub fn count(&self) -> usize {
        self.length
    }

    /*
     * Iterate over the values in head-to-tail order. Every call
     * starts a fresh traversal from head.
     */
    pub fn values(&self) -> Values<'_, T> {
        Values {
            list: self,
            cursor: self.head,
        }
    }
}

impl<T: Display> OrderedList<T> {
    /*
     * Print all values, one per line, in traversal order.
     */
    pub fn print(&self) {
        for value in self.values() {
            println!("{}", value);
        }
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/*
 * Borrowing iterator over the chain, following next-links from
 * wherever head pointed when it was created.
 */
pub struct Values<'a, T> {
    list: &'a OrderedList<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.slots[self.cursor?].as_ref()?;
        self.cursor = node.next;
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(list: &OrderedList<i64>) -> Vec<i64> {
        list.values().copied().collect()
    }

    #[test]
    fn append_keeps_call_order() {
        let mut list = OrderedList::new();
        list.append(10);
        list.append(5);
        list.append(-3);
        assert_eq!(list.count(), 3);
        assert_eq!(contents(&list), vec![10, 5, -3]);
    }

    #[test]
    fn remove_then_insert_in_the_middle() {
        let mut list = OrderedList::new();
        list.append(10);
        list.append(5);
        list.append(-3);

        assert_eq!(list.remove_at(1), Some(5));
        assert_eq!(list.count(), 2);
        assert_eq!(contents(&list), vec![10, -3]);

        assert!(list.insert_at(100, 1));
        assert_eq!(list.count(), 3);
        assert_eq!(contents(&list), vec![10, 100, -3]);
    }

    #[test]
    fn insert_at_head() {
        let mut list = OrderedList::new();
        list.append(2);
        list.append(3);
        assert!(list.insert_at(1, 0));
        assert_eq!(list.count(), 3);
        assert_eq!(contents(&list), vec![1, 2, 3]);
    }

    #[test]
    fn insert_past_the_end_is_rejected() {
        let mut list = OrderedList::new();
        list.append(1);
        list.append(2);
        // One past the end is not a valid insert position, that
        // is what append is for.
        assert!(!list.insert_at(99, 2));
        assert!(!list.insert_at(99, 10));
        assert_eq!(list.count(), 2);
        assert_eq!(contents(&list), vec![1, 2]);
    }

    #[test]
    fn insert_into_empty_list_is_rejected() {
        let mut list = OrderedList::new();
        assert!(!list.insert_at(7, 0));
        assert_eq!(list.count(), 0);
        assert_eq!(contents(&list), vec![]);
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let mut empty: OrderedList<i64> = OrderedList::new();
        assert_eq!(empty.remove_at(0), None);
        assert_eq!(empty.count(), 0);

        let mut list = OrderedList::new();
        list.append(1);
        list.append(2);
        assert_eq!(list.remove_at(2), None);
        assert_eq!(list.remove_at(100), None);
        assert_eq!(list.count(), 2);
        assert_eq!(contents(&list), vec![1, 2]);
    }

    #[test]
    fn draining_from_the_front_empties_the_list() {
        let mut list = OrderedList::new();
        for v in [4, 8, 15, 16, 23, 42] {
            list.append(v);
        }
        let mut drained = vec![];
        while let Some(v) = list.remove_at(0) {
            drained.push(v);
        }
        assert_eq!(drained, vec![4, 8, 15, 16, 23, 42]);
        assert_eq!(list.count(), 0);
        assert_eq!(contents(&list), vec![]);
    }

    #[test]
    fn append_after_removing_the_tail() {
        let mut list = OrderedList::new();
        list.append(1);
        list.append(2);
        list.append(3);
        assert_eq!(list.remove_at(2), Some(3));
        list.append(4);
        assert_eq!(contents(&list), vec![1, 2, 4]);
    }

    #[test]
    fn append_after_emptying_the_list() {
        let mut list = OrderedList::new();
        list.append(1);
        assert_eq!(list.remove_at(0), Some(1));
        assert_eq!(list.count(), 0);
        list.append(2);
        assert_eq!(list.count(), 1);
        assert_eq!(contents(&list), vec![2]);
    }

    #[test]
    fn insert_then_remove_round_trips() {
        let mut list = OrderedList::new();
        for v in [1, 2, 3, 4] {
            list.append(v);
        }
        for pos in 0..list.count() {
            assert!(list.insert_at(99, pos));
            assert_eq!(list.remove_at(pos), Some(99));
            assert_eq!(list.count(), 4);
            assert_eq!(contents(&list), vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn traversal_is_restartable() {
        let mut list = OrderedList::new();
        list.append(1);
        list.append(2);
        let first: Vec<i64> = list.values().copied().collect();
        let second: Vec<i64> = list.values().copied().collect();
        assert_eq!(first, second);
        assert_eq!(list.count(), 2);
    }

    #[test]
    fn removed_slots_are_recycled() {
        let mut list = OrderedList::new();
        for v in 0..4 {
            list.append(v);
        }
        for _ in 0..4 {
            list.remove_at(0);
        }
        for v in 0..4 {
            list.append(v);
        }
        // The arena never grew past the high-water mark.
        assert_eq!(list.slots.len(), 4);
        assert_eq!(contents(&list), vec![0, 1, 2, 3]);
    }
}
