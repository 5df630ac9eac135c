/// A slot in the [`LinkedList`](crate::LinkedList) arena.
///
/// Links are handles into the same arena. A vacant node holds neither an element nor links and
/// waits on the free list to be reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node<T> {
    element: Option<T>,
    prev: Option<usize>,
    next: Option<usize>,
}

impl<T> Node<T> {
    pub fn new(element: T, prev: Option<usize>, next: Option<usize>) -> Self {
        Self {
            element: Some(element),
            prev,
            next,
        }
    }

    /// Empties the node, returning the element it held.
    pub fn vacate(&mut self) -> Option<T> {
        self.prev = None;
        self.next = None;
        self.element.take()
    }

    #[inline]
    pub fn element(&self) -> Option<&T> {
        self.element.as_ref()
    }

    #[inline]
    pub fn element_mut(&mut self) -> Option<&mut T> {
        self.element.as_mut()
    }

    #[inline]
    pub fn element_slot(&mut self) -> &mut Option<T> {
        &mut self.element
    }

    #[inline]
    pub const fn prev(&self) -> Option<usize> {
        self.prev
    }

    #[inline]
    pub const fn next(&self) -> Option<usize> {
        self.next
    }

    #[inline]
    pub fn set_prev(&mut self, prev: Option<usize>) {
        self.prev = prev;
    }

    #[inline]
    pub fn set_next(&mut self, next: Option<usize>) {
        self.next = next;
    }

    #[inline]
    pub const fn is_vacant(&self) -> bool {
        self.element.is_none()
    }
}

#[cfg(test)]
mod tests {
    use crate::node::Node;

    #[test]
    fn node_new_holds_element_and_links() {
        let sut = Node::new(10, Some(1), Some(3));
        assert_eq!(sut.element(), Some(&10));
        assert_eq!(sut.prev(), Some(1));
        assert_eq!(sut.next(), Some(3));
        assert!(!sut.is_vacant());
    }

    #[test]
    fn node_vacate_clears_element_and_links() {
        let mut sut = Node::new(10, Some(1), Some(3));
        assert_eq!(sut.vacate(), Some(10));
        assert_eq!(sut.element(), None);
        assert_eq!(sut.prev(), None);
        assert_eq!(sut.next(), None);
        assert!(sut.is_vacant());

        assert_eq!(sut.vacate(), None);
    }

    #[test]
    fn node_links_can_be_rewired() {
        let mut sut = Node::new("a", None, None);
        sut.set_prev(Some(4));
        sut.set_next(Some(7));
        assert_eq!(sut.prev(), Some(4));
        assert_eq!(sut.next(), Some(7));

        if let Some(element) = sut.element_mut() {
            *element = "b";
        }
        assert_eq!(sut.element(), Some(&"b"));

        *sut.element_slot() = None;
        assert!(sut.is_vacant());
    }
}
