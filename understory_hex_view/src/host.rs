// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host collaborator contract: where items come from and who hears about
//! selection and centering.

use alloc::boxed::Box;
use core::fmt;

use crate::content::ItemContent;

/// Supplies item count and content on reload.
pub trait DataSource {
    /// Content handle type produced for each item.
    type Content: ItemContent;

    /// Number of items. Queried once per reload.
    fn item_count(&self) -> usize;

    /// Content for the item at `index`. Queried once per item per reload.
    ///
    /// Returning `None` for `index < item_count()` breaks the contract and
    /// aborts the reload.
    fn content_for_index(&mut self, index: usize) -> Option<Self::Content>;
}

type IndexCallback = Box<dyn FnMut(usize)>;

/// Optional host notifications. Either slot may be left empty.
#[derive(Default)]
pub struct Callbacks {
    on_select: Option<IndexCallback>,
    on_will_center: Option<IndexCallback>,
}

impl Callbacks {
    /// Sets the callback fired when an item is tapped.
    pub fn set_on_select(&mut self, f: impl FnMut(usize) + 'static) {
        self.on_select = Some(Box::new(f));
    }

    /// Sets the callback fired just before the viewport settles on an item.
    pub fn set_on_will_center(&mut self, f: impl FnMut(usize) + 'static) {
        self.on_will_center = Some(Box::new(f));
    }

    /// Removes both callbacks.
    pub fn clear(&mut self) {
        self.on_select = None;
        self.on_will_center = None;
    }

    pub(crate) fn select(&mut self, index: usize) {
        if let Some(f) = self.on_select.as_mut() {
            f(index);
        }
    }

    pub(crate) fn will_center(&mut self, index: usize) {
        if let Some(f) = self.on_will_center.as_mut() {
            f(index);
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_select", &self.on_select.is_some())
            .field("on_will_center", &self.on_will_center.is_some())
            .finish()
    }
}
