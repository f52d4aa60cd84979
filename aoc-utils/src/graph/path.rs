//! Search records forming an ancestor chain.

use std::rc::Rc;

/// One step of a traversal: the state reached, how far it is from the start, and the
/// step it was reached from.
///
/// Items are immutable once created and share their ancestors through `Rc`, so the
/// items emitted by a search form a tree rooted at the start states (`parent == None`).
#[derive(Debug)]
pub struct PathItem<T, D = u64> {
    pub distance: D,
    pub value: T,
    pub parent: Option<Rc<PathItem<T, D>>>,
}

impl<T, D> PathItem<T, D> {
    /// Creates a start item with no parent.
    pub fn root(value: T, distance: D) -> Rc<Self> {
        Rc::new(Self {
            distance,
            value,
            parent: None,
        })
    }

    /// Creates an item reached from `self`.
    pub fn child(self: &Rc<Self>, value: T, distance: D) -> Rc<Self> {
        Rc::new(Self {
            distance,
            value,
            parent: Some(Rc::clone(self)),
        })
    }

    /// Iterates from this item up to the start, this item first.
    pub fn ancestors(&self) -> Ancestors<'_, T, D> {
        Ancestors { next: Some(self) }
    }

    /// Values along the path from the start to this item.
    pub fn path(&self) -> Vec<&T> {
        let mut values: Vec<&T> = self.ancestors().map(|item| &item.value).collect();
        values.reverse();
        values
    }

    /// Number of steps taken from the start.
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }
}

// Long chains would otherwise be dropped recursively, one stack frame per ancestor.
impl<T, D> Drop for PathItem<T, D> {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(item) = parent {
            parent = match Rc::try_unwrap(item) {
                Ok(mut owned) => owned.parent.take(),
                Err(_) => None,
            };
        }
    }
}

/// Iterator over a [`PathItem`] and its ancestors.
#[derive(Debug)]
pub struct Ancestors<'a, T, D> {
    next: Option<&'a PathItem<T, D>>,
}

impl<'a, T, D> Iterator for Ancestors<'a, T, D> {
    type Item = &'a PathItem<T, D>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}
