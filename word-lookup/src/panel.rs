use crate::render::{render, Block, Format};

/// Where lookup results are shown.
///
/// `replace` drops whatever was shown before, `append` adds below it.
pub trait ResultsPanel {
    fn replace(&self, block: Block);
    fn append(&self, block: Block);
}

/// Prints blocks to stdout as they arrive.
pub struct TerminalPanel {
    format: Format,
}

impl TerminalPanel {
    pub fn new(format: Format) -> Self {
        Self { format }
    }
}

impl ResultsPanel for TerminalPanel {
    fn replace(&self, block: Block) {
        println!("----------------------------------------");
        print!("{}", render(&block, self.format));
    }

    fn append(&self, block: Block) {
        print!("{}", render(&block, self.format));
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Mutex, MutexGuard};

    use super::*;
    use crate::render::Notice;

    /// Keeps the current blocks in memory.
    #[derive(Default)]
    pub(crate) struct MemoryPanel {
        blocks: Mutex<Vec<Block>>,
    }

    impl MemoryPanel {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn blocks(&self) -> Vec<Block> {
            self.lock().clone()
        }

        pub fn render(&self, format: Format) -> String {
            self.lock()
                .iter()
                .map(|block| render(block, format))
                .collect()
        }

        fn lock(&self) -> MutexGuard<'_, Vec<Block>> {
            self.blocks
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
        }
    }

    impl ResultsPanel for MemoryPanel {
        fn replace(&self, block: Block) {
            let mut blocks = self.lock();
            blocks.clear();
            blocks.push(block);
        }

        fn append(&self, block: Block) {
            self.lock().push(block);
        }
    }

    #[test]
    fn replace_clears_and_append_keeps() {
        let panel = MemoryPanel::new();
        panel.append(Block::SynonymsUnavailable);
        panel.replace(Block::Notice(Notice::EmptyInput));
        panel.append(Block::SynonymsUnavailable);
        assert_eq!(
            panel.blocks(),
            vec![Block::Notice(Notice::EmptyInput), Block::SynonymsUnavailable]
        );
    }
}
