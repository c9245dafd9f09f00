use heapless::Deque;

use crate::animation::Animation;

/// Animations a queue holds before rejecting new ones.
pub const ANIMATION_QUEUE_CAPACITY: usize = 16;

/// Pending animations for one target, consumed in insertion order.
#[derive(Debug, Default)]
pub struct AnimationQueue {
    inner: Deque<Animation, ANIMATION_QUEUE_CAPACITY>,
}

impl AnimationQueue {
    pub const fn new() -> Self {
        Self {
            inner: Deque::new(),
        }
    }

    /// Append an animation.
    ///
    /// Returns the animation if the queue is full.
    pub fn push(&mut self, animation: Animation) -> Result<(), Animation> {
        self.inner.push_back(animation)
    }

    /// Take the oldest animation.
    pub fn pop(&mut self) -> Option<Animation> {
        self.inner.pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
