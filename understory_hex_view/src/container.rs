// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;

use crate::content::{HexItem, ItemContent};

/// Ordered collection of placed items, indexed by their stable index.
///
/// Item `i` always lives at position `i`; the container is replaced
/// wholesale on every reload.
#[derive(Debug)]
pub struct ItemContainer<C> {
    items: Vec<HexItem<C>>,
}

impl<C> Default for ItemContainer<C> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<C: ItemContent> ItemContainer<C> {
    pub(crate) fn replace(&mut self, items: Vec<HexItem<C>>) {
        debug_assert!(
            items.iter().enumerate().all(|(i, item)| item.index() == i),
            "items must be stored in index order"
        );
        self.items = items;
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, or `None` if it is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HexItem<C>> {
        self.items.get(index)
    }

    /// Mutable item at `index`, or `None` if it is out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut HexItem<C>> {
        self.items.get_mut(index)
    }

    /// Items in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &HexItem<C>> + '_ {
        self.items.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl ExactSizeIterator<Item = &mut HexItem<C>> + '_ {
        self.items.iter_mut()
    }

    /// Content-layer centers in index order.
    pub fn centers(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.items.iter().map(HexItem::center)
    }
}
