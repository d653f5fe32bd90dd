use crate::document::Block;

/// Open blockquote containers, outermost first.
///
/// The first frame is the document itself and is never closed before
/// [`ContainerPath::finish`].
#[derive(Debug, Clone)]
pub struct ContainerPath(Vec<Vec<Block>>);

impl ContainerPath {
    /// Current blockquote nesting (0 at document level).
    pub fn depth(&self) -> usize {
        self.0.len() - 1
    }

    /// Appends a finished block to the innermost open container.
    pub fn push(&mut self, block: Block) {
        if let Some(frame) = self.0.last_mut() {
            frame.push(block);
        }
    }

    /// Opens or closes quotes until `depth` are open.
    pub fn set_blockquote_depth(&mut self, depth: usize) {
        while self.depth() > depth {
            self.close_innermost();
        }
        while self.depth() < depth {
            self.0.push(Vec::new());
        }
    }

    /// Closes every open quote and returns the document's blocks.
    pub fn finish(mut self) -> Vec<Block> {
        self.set_blockquote_depth(0);
        self.0.pop().unwrap_or_default()
    }

    fn close_innermost(&mut self) {
        if let Some(blocks) = self.0.pop() {
            self.push(Block::BlockQuote { blocks });
        }
    }
}

impl Default for ContainerPath {
    fn default() -> Self {
        Self(vec![Vec::new()])
    }
}
