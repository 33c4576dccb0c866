//! Active resolution stack used for cycle detection
//!
//! Copyright (c) 2026 Oadoc Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::loader::Location;
use crate::resolver::reference::JsonPointer;
use std::fmt;

/// One `(location, pointer)` pair being resolved
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    pub location: Location,
    pub pointer: JsonPointer,
}

impl Frame {
    pub fn new(location: Location, pointer: JsonPointer) -> Self {
        Self { location, pointer }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Location::Inline => write!(f, "#{}", self.pointer),
            _ => write!(f, "{}#{}", self.location, self.pointer),
        }
    }
}

/// Stack of frames currently being resolved
#[derive(Debug, Clone)]
pub struct ResolutionStack {
    frames: Vec<Frame>,
    max_depth: usize,
}

impl Default for ResolutionStack {
    fn default() -> Self {
        Self::new(64)
    }
}

impl ResolutionStack {
    /// Create a stack bounded to `max_depth` nested references
    pub fn new(max_depth: usize) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, failing when it is already active or the chain is too long
    pub fn push(&mut self, frame: Frame) -> Result<()> {
        if self.frames.contains(&frame) {
            let mut chain = self.frames.clone();
            chain.push(frame);
            return Err(Error::circular_reference(&chain));
        }

        if self.frames.len() >= self.max_depth {
            return Err(Error::invalid_reference(
                frame.to_string(),
                format!("reference chain exceeds {} nested references", self.max_depth),
            ));
        }

        self.frames.push(frame);
        Ok(())
    }

    /// Pop the most recent frame
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
