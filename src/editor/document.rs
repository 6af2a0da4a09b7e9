// ABOUTME: Rich-text document model: blocks of styled characters plus cursor positions
// ABOUTME: Runs are derived on demand by grouping neighbouring characters with equal style
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bitflags::bitflags;
use std::cmp::Ordering;

bitflags! {
    /// Inline formatting applied to a character
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Marks: u8 {
        /// `<strong>`
        const BOLD = 0b0000_0001;
        /// `<em>`
        const ITALIC = 0b0000_0010;
        /// `<u>`
        const UNDERLINE = 0b0000_0100;
        /// `<s>`
        const STRIKE = 0b0000_1000;
        /// `<code>`
        const CODE = 0b0001_0000;
    }
}

/// Marks plus an optional link target
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Inline marks
    pub marks: Marks,
    /// `href` when the character is part of a link
    pub link: Option<String>,
}

impl Style {
    /// Style with marks only
    #[must_use]
    pub const fn marked(marks: Marks) -> Self {
        Self { marks, link: None }
    }
}

/// One character and its style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledChar {
    /// The character
    pub ch: char,
    /// Its formatting
    pub style: Style,
}

/// Maximal run of equally styled text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Text of the run
    pub text: String,
    /// Shared style
    pub style: Style,
}

/// Kind of a top-level block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `<p>`
    Paragraph,
    /// `<h1>`..`<h6>`
    Heading(u8),
    /// `<li>` inside `<ul>`
    BulletItem,
    /// `<li>` inside `<ol>`
    OrderedItem,
}

impl BlockKind {
    /// True for either list item kind
    #[must_use]
    pub const fn is_list_item(self) -> bool {
        matches!(self, Self::BulletItem | Self::OrderedItem)
    }
}

/// A paragraph, heading, or list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// What the block renders as
    pub kind: BlockKind,
    /// Content
    pub chars: Vec<StyledChar>,
}

impl Block {
    /// Empty block of `kind`
    #[must_use]
    pub const fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            chars: Vec::new(),
        }
    }

    /// Empty paragraph
    #[must_use]
    pub const fn paragraph() -> Self {
        Self::new(BlockKind::Paragraph)
    }

    /// Block holding `text` in a single style
    #[must_use]
    pub fn with_text(kind: BlockKind, text: &str, style: &Style) -> Self {
        Self {
            kind,
            chars: text
                .chars()
                .map(|ch| StyledChar {
                    ch,
                    style: style.clone(),
                })
                .collect(),
        }
    }

    /// Number of characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True for a block with no characters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Plain text
    #[must_use]
    pub fn text(&self) -> String {
        self.chars.iter().map(|c| c.ch).collect()
    }

    /// Group characters into runs of identical style
    #[must_use]
    pub fn runs(&self) -> Vec<Run> {
        let mut runs: Vec<Run> = Vec::new();
        for styled in &self.chars {
            match runs.last_mut() {
                Some(run) if run.style == styled.style => run.text.push(styled.ch),
                _ => runs.push(Run {
                    text: styled.ch.to_string(),
                    style: styled.style.clone(),
                }),
            }
        }
        runs
    }
}

/// Position between characters: `offset` characters into `block`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Block index
    pub block: usize,
    /// Character offset inside the block
    pub offset: usize,
}

impl Position {
    /// Position at `offset` in `block`
    #[must_use]
    pub const fn new(block: usize, offset: usize) -> Self {
        Self { block, offset }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.block
            .cmp(&other.block)
            .then(self.offset.cmp(&other.offset))
    }
}

/// Anchor and head of the selection; collapsed when equal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started
    pub anchor: Position,
    /// Where the cursor is
    pub head: Position,
}

impl Selection {
    /// Collapsed selection at `position`
    #[must_use]
    pub const fn cursor(position: Position) -> Self {
        Self {
            anchor: position,
            head: position,
        }
    }

    /// Earlier end
    #[must_use]
    pub fn from(&self) -> Position {
        self.anchor.min(self.head)
    }

    /// Later end
    #[must_use]
    pub fn to(&self) -> Position {
        self.anchor.max(self.head)
    }

    /// True when nothing is selected
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.head
    }
}

/// Ordered list of blocks; never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            blocks: vec![Block::paragraph()],
        }
    }
}

impl Document {
    /// Document from blocks; an empty list becomes one empty paragraph
    #[must_use]
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        if blocks.is_empty() {
            Self::default()
        } else {
            Self { blocks }
        }
    }

    /// Blocks in order
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub(crate) fn blocks_mut(&mut self) -> &mut Vec<Block> {
        &mut self.blocks
    }

    /// True when the document is a single empty paragraph
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.len() == 1
            && self.blocks[0].kind == BlockKind::Paragraph
            && self.blocks[0].is_empty()
    }

    /// Plain text with blocks separated by newlines
    #[must_use]
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Position after the last character
    #[must_use]
    pub fn end(&self) -> Position {
        let last = self.blocks.len() - 1;
        Position::new(last, self.blocks[last].len())
    }

    /// Clamp `position` into the document
    #[must_use]
    pub fn clamp(&self, position: Position) -> Position {
        let block = position.block.min(self.blocks.len() - 1);
        Position::new(block, position.offset.min(self.blocks[block].len()))
    }

    /// Character just before `position` in the same block
    #[must_use]
    pub fn char_before(&self, position: Position) -> Option<&StyledChar> {
        let offset = position.offset.checked_sub(1)?;
        self.blocks.get(position.block)?.chars.get(offset)
    }

    /// Remove everything between `from` and `to`, merging the end blocks
    pub fn delete_range(&mut self, from: Position, to: Position) {
        let (from, to) = (self.clamp(from.min(to)), self.clamp(from.max(to)));
        if from == to {
            return;
        }
        if from.block == to.block {
            self.blocks[from.block].chars.drain(from.offset..to.offset);
            return;
        }
        let tail: Vec<StyledChar> = self.blocks[to.block].chars.split_off(to.offset);
        self.blocks.drain(from.block + 1..=to.block);
        let first = &mut self.blocks[from.block];
        first.chars.truncate(from.offset);
        first.chars.extend(tail);
    }

    /// Insert characters at `position`; returns the position after them
    pub fn insert_chars(&mut self, position: Position, chars: Vec<StyledChar>) -> Position {
        let position = self.clamp(position);
        let count = chars.len();
        let block = &mut self.blocks[position.block];
        block
            .chars
            .splice(position.offset..position.offset, chars);
        Position::new(position.block, position.offset + count)
    }

    /// Split the block at `position`; returns the start of the new block
    pub fn split_block(&mut self, position: Position) -> Position {
        let position = self.clamp(position);
        let current = &mut self.blocks[position.block];
        let at_end = position.offset == current.len();
        let tail = current.chars.split_off(position.offset);
        let kind = match current.kind {
            kind if kind.is_list_item() => kind,
            BlockKind::Heading(_) if at_end => BlockKind::Paragraph,
            kind => kind,
        };
        self.blocks.insert(
            position.block + 1,
            Block { kind, chars: tail },
        );
        Position::new(position.block + 1, 0)
    }

    /// Append block `index` to the one before it; returns the join point
    pub fn merge_with_previous(&mut self, index: usize) -> Option<Position> {
        if index == 0 || index >= self.blocks.len() {
            return None;
        }
        let removed = self.blocks.remove(index);
        let previous = &mut self.blocks[index - 1];
        let join = Position::new(index - 1, previous.len());
        previous.chars.extend(removed.chars);
        Some(join)
    }

    /// Visit every character between `from` and `to`
    pub fn for_each_in_range(
        &mut self,
        from: Position,
        to: Position,
        mut apply: impl FnMut(&mut StyledChar),
    ) {
        let (from, to) = (self.clamp(from), self.clamp(to));
        for index in from.block..=to.block {
            let block = &mut self.blocks[index];
            let start = if index == from.block { from.offset } else { 0 };
            let end = if index == to.block { to.offset } else { block.len() };
            for styled in &mut block.chars[start..end] {
                apply(styled);
            }
        }
    }

    /// Characters between `from` and `to`
    #[must_use]
    pub fn chars_in_range(&self, from: Position, to: Position) -> Vec<&StyledChar> {
        let (from, to) = (self.clamp(from), self.clamp(to));
        (from.block..=to.block)
            .flat_map(|index| {
                let block = &self.blocks[index];
                let start = if index == from.block { from.offset } else { 0 };
                let end = if index == to.block { to.offset } else { block.len() };
                block.chars[start..end].iter()
            })
            .collect()
    }

    /// Range of the link run around `position`, if the cursor touches a link
    #[must_use]
    pub fn link_range_at(&self, position: Position) -> Option<(Position, Position)> {
        let position = self.clamp(position);
        let chars = &self.blocks[position.block].chars;
        let touches = |i: usize| chars.get(i).and_then(|c| c.style.link.as_deref());
        let href = touches(position.offset)
            .or_else(|| position.offset.checked_sub(1).and_then(touches))?;

        let same_link = |c: &StyledChar| c.style.link.as_deref() == Some(href);
        let mut start = position.offset.min(chars.len());
        while start > 0 && same_link(&chars[start - 1]) {
            start -= 1;
        }
        let mut end = start;
        while end < chars.len() && same_link(&chars[end]) {
            end += 1;
        }
        Some((
            Position::new(position.block, start),
            Position::new(position.block, end),
        ))
    }
}
