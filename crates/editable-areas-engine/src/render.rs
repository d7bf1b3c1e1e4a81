//! Per-render state: the block stack, the output buffer and the edit-mode flag.

use std::ops::{Deref, DerefMut};

use crate::block_state::{BlockName, BlockState, BlockStateError};

/// State of one document render.
///
/// Every render owns its own context. Nested regions receive it by `&mut`
/// as the render walks down the template, so the block stack is never shared
/// between renders.
#[derive(Debug, Default)]
pub struct RenderContext {
    block_state: BlockState,
    output: String,
    edit_mode: bool,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit_mode() -> Self {
        Self {
            edit_mode: true,
            ..Self::default()
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn block_state(&self) -> &BlockState {
        &self.block_state
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    pub fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Write only while rendering in edit mode.
    pub fn write_editmode(&mut self, text: &str) {
        if self.edit_mode {
            self.output.push_str(text);
        }
    }

    /// Open a block for the lifetime of the returned scope.
    pub fn open_block(&mut self, name: BlockName) -> BlockScope<'_> {
        let depth = self.block_state.depth();
        self.block_state.push_block(name);
        BlockScope {
            ctx: self,
            depth,
            index_open: false,
        }
    }
}

/// An open block. Dropping the scope closes the block again.
///
/// The drop pops the index (when one was pushed through the scope) and the
/// block, then cuts the stack back to where it was before the block opened.
/// Frames that nested code pushed and never popped are discarded with a
/// warning so one broken region cannot shift the ancestor chain of its
/// siblings. If nested code popped this scope's own frame, the drop leaves
/// the stack alone: the lost frames are not restored and every enclosing
/// scope logs the same warning as it closes.
pub struct BlockScope<'a> {
    ctx: &'a mut RenderContext,
    depth: usize,
    index_open: bool,
}

impl BlockScope<'_> {
    /// Open the repetition index of this scope's block.
    pub fn push_index(&mut self, index: u32) {
        // this scope's frame is on top while the scope is not reborrowed
        match self.ctx.block_state.push_index(index) {
            Ok(()) => self.index_open = true,
            Err(e) => log::warn!("failed to push block index {index}: {e}"),
        }
    }

    pub fn pop_index(&mut self) -> Result<u32, BlockStateError> {
        let index = self.ctx.block_state.pop_index()?;
        self.index_open = false;
        Ok(index)
    }
}

impl Deref for BlockScope<'_> {
    type Target = RenderContext;

    fn deref(&self) -> &RenderContext {
        self.ctx
    }
}

impl DerefMut for BlockScope<'_> {
    fn deref_mut(&mut self) -> &mut RenderContext {
        self.ctx
    }
}

impl Drop for BlockScope<'_> {
    fn drop(&mut self) {
        let state = &mut self.ctx.block_state;

        let leaked = state.truncate(self.depth + 1);
        if leaked > 0 {
            log::warn!("discarding {leaked} block(s) left open by nested rendering");
        }
        if state.depth() != self.depth + 1 {
            log::warn!("block at depth {} was already closed", self.depth);
            return;
        }

        if self.index_open
            && let Err(e) = state.pop_index()
        {
            log::warn!("failed to pop block index: {e}");
        }
        if let Err(e) = state.pop_block() {
            log::warn!("failed to pop block: {e}");
        }
    }
}
