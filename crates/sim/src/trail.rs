use std::collections::VecDeque;

use glam::Vec2;

/// Bounded history of the second bob's rendered positions.
///
/// Points go in at the tail; once over capacity the oldest falls off the
/// head, so the buffer behaves as a sliding window in append order. Backed
/// by a deque: both ends stay O(1) even at the networked capacity of 10^5,
/// where this runs once per rendered frame.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, point: Vec2) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Points in append order, oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
