//! Circular doubly-linked chain of segments
//!
//! Nodes live in an arena and refer to their neighbours by index, so splicing
//! during [`Chain::append`], [`Chain::remove`] and [`Chain::split`] only
//! reassigns indices. A node that belongs to no chain links to itself in
//! both directions. Walking the chain stops when the starting node comes
//! round again.

use crate::io::error::{Result, SubdivisionError};
use crate::io::image::Image;
use crate::path::segment::Segment;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Handle to a node of a [`Chain`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathId(usize);

impl PathId {
    /// Position of the node in its chain's arena
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
struct Node<S> {
    segment: S,
    next: PathId,
    previous: PathId,
}

/// Arena of segments threaded into circular chains
///
/// Nodes are never freed: a node removed from its circle, including the
/// parent of a split, stays in the arena as a detached self-loop.
#[derive(Clone, Debug)]
pub struct Chain<S> {
    nodes: Vec<Node<S>>,
}

impl<S> Default for Chain<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Chain<S> {
    /// Create an empty arena
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Build one closed loop visiting `segments` in order
    ///
    /// The first segment gets [`PathId`] index 0 and the last links back to it.
    pub fn from_segments<I: IntoIterator<Item = S>>(segments: I) -> Self {
        let segments: Vec<S> = segments.into_iter().collect();
        let count = segments.len();
        let nodes = segments
            .into_iter()
            .enumerate()
            .map(|(index, segment)| Node {
                segment,
                next: PathId((index + 1) % count),
                previous: PathId((index + count - 1) % count),
            })
            .collect();
        Self { nodes }
    }

    /// Add a detached node whose neighbours are itself
    pub fn insert(&mut self, segment: S) -> PathId {
        let id = PathId(self.nodes.len());
        self.nodes.push(Node {
            segment,
            next: id,
            previous: id,
        });
        id
    }

    /// Number of nodes ever inserted, attached or not
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been inserted
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Segment stored at `id`
    pub fn get(&self, id: PathId) -> Option<&S> {
        self.nodes.get(id.0).map(|node| &node.segment)
    }

    /// Successor of `id` in its circle
    pub fn next(&self, id: PathId) -> Option<PathId> {
        self.nodes.get(id.0).map(|node| node.next)
    }

    /// Predecessor of `id` in its circle
    pub fn previous(&self, id: PathId) -> Option<PathId> {
        self.nodes.get(id.0).map(|node| node.previous)
    }

    /// Whether `id` has neighbours other than itself
    pub fn is_attached(&self, id: PathId) -> bool {
        self.nodes
            .get(id.0)
            .is_some_and(|node| node.next != id || node.previous != id)
    }

    /// Insert `other` immediately after `this`
    ///
    /// Returns `other` so several appends can be chained.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is unknown, or if `other` is already
    /// attached to a chain. The chain is unchanged on error.
    pub fn append(&mut self, this: PathId, other: PathId) -> Result<PathId> {
        let after = self.node(this)?.next;
        self.node(other)?;
        if self.is_attached(other) {
            return Err(SubdivisionError::AlreadyAttached);
        }

        let node = self.node_mut(other)?;
        node.next = after;
        node.previous = this;
        self.node_mut(after)?.previous = other;
        self.node_mut(this)?.next = other;
        Ok(other)
    }

    /// Splice `id` out of its circle and leave it linked to itself
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is unknown
    pub fn remove(&mut self, id: PathId) -> Result<()> {
        let node = self.node(id)?;
        let (previous, next) = (node.previous, node.next);

        self.node_mut(previous)?.next = next;
        self.node_mut(next)?.previous = previous;
        let node = self.node_mut(id)?;
        node.next = id;
        node.previous = id;
        Ok(())
    }

    /// Visit every node of the circle containing `start`, once, beginning at `start`
    ///
    /// Yields nothing for an unknown id.
    pub fn iter_from(&self, start: PathId) -> Iter<'_, S> {
        Iter {
            chain: self,
            start,
            current: Some(start),
        }
    }

    /// Number of nodes in the circle containing `start`
    pub fn cycle_len(&self, start: PathId) -> usize {
        self.iter_from(start).count()
    }

    fn node(&self, id: PathId) -> Result<&Node<S>> {
        self.nodes
            .get(id.0)
            .ok_or(SubdivisionError::UnknownPath { index: id.0 })
    }

    fn node_mut(&mut self, id: PathId) -> Result<&mut Node<S>> {
        self.nodes
            .get_mut(id.0)
            .ok_or(SubdivisionError::UnknownPath { index: id.0 })
    }
}

impl<S: Segment> Chain<S> {
    /// Length of the segment at `id`
    pub fn length(&self, id: PathId) -> Option<f64> {
        self.get(id).map(Segment::length)
    }

    /// Sum of segment lengths around the circle containing `start`
    pub fn total_length(&self, start: PathId) -> f64 {
        self.iter_from(start)
            .map(|(_, segment)| segment.length())
            .sum()
    }

    /// Entry and exit coordinates of the segment at `id`
    pub fn coordinates(&self, id: PathId) -> Option<[f64; 4]> {
        self.get(id).map(Segment::coordinates)
    }

    /// Stroke width for the segment at `id` measured against `image`
    pub fn optimal_width<I: Image + ?Sized>(&self, id: PathId, image: &I) -> Option<f64> {
        self.get(id).map(|segment| segment.optimal_width(image))
    }

    /// Replace the segment at `id` with its children, in place
    ///
    /// The predecessor of `id` links to the first child, the children link to
    /// each other in order and the last child links to the successor of `id`.
    /// `id` itself is left detached.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is unknown or its segment cannot be split
    pub fn split<R: Rng + ?Sized>(&mut self, id: PathId, rng: &mut R) -> Result<Vec<PathId>> {
        let children = self.node(id)?.segment.split(rng)?;
        let mut anchor = self.node(id)?.previous;
        let mut ids = Vec::with_capacity(children.len());

        for child in children {
            let child_id = self.insert(child);
            anchor = self.append(anchor, child_id)?;
            ids.push(child_id);
        }

        self.remove(id)?;
        Ok(ids)
    }
}

/// Iterator over one circle of a [`Chain`], see [`Chain::iter_from`]
#[derive(Clone, Debug)]
pub struct Iter<'a, S> {
    chain: &'a Chain<S>,
    start: PathId,
    current: Option<PathId>,
}

impl<'a, S> Iterator for Iter<'a, S> {
    type Item = (PathId, &'a S);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.chain.nodes.get(id.0)?;
        self.current = (node.next != self.start).then_some(node.next);
        Some((id, &node.segment))
    }
}

/// A closed starting loop and the generator its splits draw from
#[derive(Clone, Debug)]
pub struct StartPath<S> {
    /// Arena holding the loop
    pub chain: Chain<S>,
    /// First segment of the loop
    pub head: PathId,
    /// Random source to pass into every split of this loop
    pub rng: StdRng,
}

impl<S> StartPath<S> {
    /// Close `segments` into a loop and seed its generator
    ///
    /// `head` is index 0, so with no segments it names no node and every
    /// chain lookup through it returns `None` or an empty walk.
    pub fn new<I: IntoIterator<Item = S>>(segments: I, seed: u64) -> Self {
        Self {
            chain: Chain::from_segments(segments),
            head: PathId(0),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}
