use std::collections::VecDeque;

use super::types::{Direction, Point};

/// The head is tracked on its own; `tail` holds previous head positions, newest first.
#[derive(Clone, Debug)]
pub struct Snake {
    pub head: Point,
    pub tail: VecDeque<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
    pub tail_capacity: usize,
}

impl Snake {
    pub fn new(start_pos: Point, direction: Direction, tail_capacity: usize) -> Self {
        Self {
            head: start_pos,
            tail: VecDeque::with_capacity(tail_capacity + 1),
            direction,
            pending_direction: None,
            tail_capacity,
        }
    }

    /// Last request wins. Reversals are checked against the applied direction.
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    pub fn step(&mut self, speed: i32) {
        if let Some(new_direction) = self.pending_direction.take() {
            self.direction = new_direction;
        }

        self.tail.push_front(self.head);
        self.head = self.head.moved(self.direction, speed);

        while self.tail.len() > self.tail_capacity {
            self.tail.pop_back();
        }
    }

    pub fn grow(&mut self, segments: usize) {
        self.tail_capacity += segments;
    }
}
