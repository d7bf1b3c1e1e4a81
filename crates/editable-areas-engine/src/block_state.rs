//! # Block State
//!
//! The stack of currently open blocks during one render pass.
//!
//! Every nested editable region (an area, a repeatable block) pushes a
//! [`BlockFrame`] when it starts rendering and pops it when it is done. The
//! frames therefore always describe the exact ancestor chain of the region
//! that is rendering right now, outermost first. Naming strategies read this
//! chain to build identifiers for elements created inside a region.
//!
//! Push and pop are strictly nested. Callers should not pair them by hand;
//! [`crate::render::RenderContext::open_block`] hands out a scope that pops
//! on every exit path.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockStateError {
    #[error("no block is open")]
    NoOpenBlock,
    #[error("block '{0}' has no open index")]
    NoOpenIndex(String),
}

/// Name of an open block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BlockName {
    /// Full identifier of the block, as built by the naming strategy
    pub name: String,
    /// Logical name used in the template
    pub real_name: String,
}

impl BlockName {
    pub fn new(name: impl Into<String>, real_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            real_name: real_name.into(),
        }
    }
}

/// One open block and its current repetition index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFrame {
    pub name: BlockName,
    index: Option<u32>,
}

impl BlockFrame {
    fn new(name: BlockName) -> Self {
        Self { name, index: None }
    }

    /// Current repetition index, 0 while no index is open.
    pub fn index(&self) -> u32 {
        self.index.unwrap_or(0)
    }

    pub fn has_index(&self) -> bool {
        self.index.is_some()
    }
}

#[derive(Debug, Default, Clone)]
pub struct BlockState {
    frames: Vec<BlockFrame>,
}

impl BlockState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_block(&mut self, name: BlockName) {
        log::debug!("push block '{}' at depth {}", name.name, self.frames.len());
        self.frames.push(BlockFrame::new(name));
    }

    pub fn pop_block(&mut self) -> Result<BlockFrame, BlockStateError> {
        let frame = self.frames.pop().ok_or(BlockStateError::NoOpenBlock)?;
        log::debug!(
            "pop block '{}' at depth {}",
            frame.name.name,
            self.frames.len()
        );
        Ok(frame)
    }

    pub fn push_index(&mut self, index: u32) -> Result<(), BlockStateError> {
        let frame = self.frames.last_mut().ok_or(BlockStateError::NoOpenBlock)?;
        frame.index = Some(index);
        Ok(())
    }

    pub fn pop_index(&mut self) -> Result<u32, BlockStateError> {
        let frame = self.frames.last_mut().ok_or(BlockStateError::NoOpenBlock)?;
        frame
            .index
            .take()
            .ok_or_else(|| BlockStateError::NoOpenIndex(frame.name.name.clone()))
    }

    /// Names of all open blocks, outermost first.
    pub fn ancestor_names(&self) -> Vec<String> {
        self.frames.iter().map(|f| f.name.name.clone()).collect()
    }

    /// Repetition index of every open block, outermost first.
    pub fn indexes(&self) -> Vec<u32> {
        self.frames.iter().map(BlockFrame::index).collect()
    }

    pub fn current(&self) -> Option<&BlockFrame> {
        self.frames.last()
    }

    pub fn current_index(&self) -> Option<u32> {
        self.current().map(BlockFrame::index)
    }

    pub fn frames(&self) -> &[BlockFrame] {
        &self.frames
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn has_blocks(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Drop every frame above `depth`, returning how many were removed.
    pub(crate) fn truncate(&mut self, depth: usize) -> usize {
        let removed = self.frames.len().saturating_sub(depth);
        self.frames.truncate(depth);
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(name: &str) -> BlockName {
        BlockName::new(name, name)
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = BlockState::new();
        assert!(!state.has_blocks());
        assert_eq!(state.depth(), 0);
        assert_eq!(state.current_index(), None);
        assert!(state.ancestor_names().is_empty());
    }

    #[test]
    fn test_push_block_starts_without_index() {
        let mut state = BlockState::new();
        state.push_block(block("content"));

        let frame = state.current().unwrap();
        assert_eq!(frame.index(), 0);
        assert!(!frame.has_index());
    }

    #[test]
    fn test_ancestor_names_are_outermost_first() {
        let mut state = BlockState::new();
        state.push_block(block("page"));
        state.push_block(block("page.content:1#block"));
        state.push_block(block("gallery"));

        assert_eq!(
            state.ancestor_names(),
            vec!["page", "page.content:1#block", "gallery"]
        );
    }

    #[test]
    fn test_ancestor_names_is_a_snapshot() {
        let mut state = BlockState::new();
        state.push_block(block("outer"));
        let snapshot = state.ancestor_names();

        state.push_block(block("inner"));
        assert_eq!(snapshot, vec!["outer"]);
    }

    #[test]
    fn test_push_index_sets_top_frame_only() {
        let mut state = BlockState::new();
        state.push_block(block("outer"));
        state.push_index(2).unwrap();
        state.push_block(block("inner"));
        state.push_index(5).unwrap();

        assert_eq!(state.indexes(), vec![2, 5]);
        assert_eq!(state.current_index(), Some(5));
    }

    #[test]
    fn test_push_index_without_block_fails() {
        let mut state = BlockState::new();
        assert_eq!(state.push_index(1), Err(BlockStateError::NoOpenBlock));
    }

    #[test]
    fn test_pop_index_requires_open_index() {
        let mut state = BlockState::new();
        assert_eq!(state.pop_index(), Err(BlockStateError::NoOpenBlock));

        state.push_block(block("outer"));
        assert_eq!(
            state.pop_index(),
            Err(BlockStateError::NoOpenIndex("outer".to_string()))
        );

        state.push_index(3).unwrap();
        assert_eq!(state.pop_index(), Ok(3));
        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn test_pop_block_on_empty_state_fails() {
        let mut state = BlockState::new();
        assert_eq!(state.pop_block(), Err(BlockStateError::NoOpenBlock));
    }

    #[test]
    fn test_paired_push_pop_restores_state() {
        let mut state = BlockState::new();
        state.push_block(block("outer"));
        state.push_index(1).unwrap();
        state.pop_index().unwrap();
        let frame = state.pop_block().unwrap();

        assert_eq!(frame.name, block("outer"));
        assert!(!state.has_blocks());
    }

    #[test]
    fn test_truncate_reports_removed_frames() {
        let mut state = BlockState::new();
        state.push_block(block("a"));
        state.push_block(block("b"));
        state.push_block(block("c"));

        assert_eq!(state.truncate(1), 2);
        assert_eq!(state.ancestor_names(), vec!["a"]);
        assert_eq!(state.truncate(4), 0);
    }
}
