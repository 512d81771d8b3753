//! Single dispatch on a runtime type tag.
//!
//! Values expose a chain of type tags: their own tag first, followed by the
//! tags of the types they derive from, in resolution order. A [`Dispatcher`]
//! looks up the exact tag first and only walks the ancestors on a miss.

use std::collections::HashMap;
use std::fmt;

use crate::error::{RasterError, Result};

/// A value that can be routed by a [`Dispatcher`]
pub trait Dispatch {
    /// Own tag first, then ancestor tags in resolution order
    fn type_chain(&self) -> &'static [&'static str];
}

type Handler<T, R> = Box<dyn Fn(&T) -> R + Send + Sync>;

/// Type-tag to handler table
pub struct Dispatcher<T: ?Sized, R> {
    lookup: HashMap<&'static str, Handler<T, R>>,
}

impl<T: Dispatch + ?Sized, R> Dispatcher<T, R> {
    pub fn new() -> Self {
        Self {
            lookup: HashMap::new(),
        }
    }

    /// Register `handler` for values tagged `tag`, replacing any previous one
    pub fn register<F>(&mut self, tag: &'static str, handler: F) -> &mut Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        self.lookup.insert(tag, Box::new(handler));
        self
    }

    /// Register the same handler under several tags
    pub fn register_all<F>(&mut self, tags: &[&'static str], handler: F) -> &mut Self
    where
        F: Fn(&T) -> R + Clone + Send + Sync + 'static,
    {
        for &tag in tags {
            self.register(tag, handler.clone());
        }
        self
    }

    /// Resolve the handler for `head` and call it
    pub fn dispatch(&self, head: &T) -> Result<R> {
        let chain = head.type_chain();
        chain
            .iter()
            .find_map(|tag| self.lookup.get(tag))
            .map(|handler| handler(head))
            .ok_or_else(|| RasterError::NoDispatch {
                type_name: chain.first().copied().unwrap_or("<untagged>").to_string(),
            })
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.lookup.contains_key(tag)
    }
}

impl<T: Dispatch + ?Sized, R> Default for Dispatcher<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, R> fmt::Debug for Dispatcher<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.lookup.keys().collect();
        tags.sort();
        f.debug_struct("Dispatcher").field("tags", &tags).finish()
    }
}
