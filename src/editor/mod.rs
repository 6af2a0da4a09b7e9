// ABOUTME: Externally controlled rich-text editor for recipe instructions
// ABOUTME: Formatting commands, key handling with the space rule, undo/redo, and HTML sync
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Rich-Text Editor
//!
//! The editor owns a [`Document`] and a [`Selection`]. Every edit that
//! changes the document is recorded for undo and reported to the change
//! callback as HTML. [`RichTextEditor::sync_content`] pushes an external
//! value back in without calling the callback.

/// Block/character document model
pub mod document;
/// Undo/redo stacks
pub mod history;
/// HTML serialization and parsing
pub mod html;
/// Key press rules
pub mod input_rules;
/// Toolbar description for front ends
pub mod toolbar;

pub use document::{Block, BlockKind, Document, Marks, Position, Selection, Style};
pub use toolbar::{ToolbarAction, ToolbarButton};

use crate::constants::defaults::EDITOR_HISTORY_DEPTH;
use document::StyledChar;
use history::{History, Snapshot};
use input_rules::space_insertion;

/// Callback receiving the editor's HTML after each user edit
pub type ChangeCallback = Box<dyn FnMut(&str) + Send>;

/// Formatting and history commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Toggle `<strong>`
    ToggleBold,
    /// Toggle `<em>`
    ToggleItalic,
    /// Toggle `<u>`
    ToggleUnderline,
    /// Toggle `<s>`
    ToggleStrike,
    /// Toggle `<code>`
    ToggleCode,
    /// Toggle bullet list on the selected blocks
    ToggleBulletList,
    /// Toggle ordered list on the selected blocks
    ToggleOrderedList,
    /// Turn the selected blocks into paragraphs
    SetParagraph,
    /// Toggle heading 1-6 on the selected blocks
    ToggleHeading(u8),
    /// Link the selection, or the link under the cursor, to a URL
    SetLink(String),
    /// Remove the link from the selection or the link under the cursor
    UnsetLink,
    /// Step back
    Undo,
    /// Step forward
    Redo,
}

/// Keys with editor-specific handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Space bar, subject to the non-breaking space rule
    Space,
    /// Split the block
    Enter,
    /// Delete backwards
    Backspace,
    /// Any other printable character
    Character(char),
}

/// Things that can be queried with [`RichTextEditor::is_active`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Bold mark
    Bold,
    /// Italic mark
    Italic,
    /// Underline mark
    Underline,
    /// Strike mark
    Strike,
    /// Code mark
    Code,
    /// Link mark
    Link,
    /// Paragraph block
    Paragraph,
    /// Heading block of a level
    Heading(u8),
    /// Bullet list item
    BulletList,
    /// Ordered list item
    OrderedList,
}

/// Rich-text editor bound to an external HTML value
pub struct RichTextEditor {
    document: Document,
    selection: Selection,
    stored_style: Option<Style>,
    history: History,
    on_change: ChangeCallback,
}

impl RichTextEditor {
    /// Editor showing `content` (HTML); `on_change` receives HTML after every edit
    pub fn new(content: &str, on_change: impl FnMut(&str) + Send + 'static) -> Self {
        Self {
            document: html::from_html(content),
            selection: Selection::default(),
            stored_style: None,
            history: History::new(EDITOR_HISTORY_DEPTH),
            on_change: Box::new(on_change),
        }
    }

    /// Current content as HTML
    #[must_use]
    pub fn html(&self) -> String {
        html::to_html(&self.document)
    }

    /// Current document
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Current selection
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Place the cursor
    pub fn set_cursor(&mut self, position: Position) {
        self.select(position, position);
    }

    /// Select from `anchor` to `head`
    pub fn select(&mut self, anchor: Position, head: Position) {
        self.selection = Selection {
            anchor: self.document.clamp(anchor),
            head: self.document.clamp(head),
        };
        self.stored_style = None;
    }

    /// Select the whole document
    pub fn select_all(&mut self) {
        self.select(Position::default(), self.document.end());
    }

    /// Cursor after the last character
    pub fn move_to_end(&mut self) {
        self.set_cursor(self.document.end());
    }

    /// Type text key by key: spaces go through the space rule, `\n` presses Enter
    pub fn type_text(&mut self, text: &str) {
        self.edit(|editor| {
            for ch in text.chars() {
                match ch {
                    ' ' => editor.space(),
                    '\n' => editor.enter(),
                    other => editor.insert_char(other),
                }
            }
        });
    }

    /// Insert text verbatim, as a paste would
    pub fn insert_text(&mut self, text: &str) {
        self.edit(|editor| {
            editor.delete_selection();
            let at = editor.selection.head;
            let style = editor.insertion_style(at);
            let chars = text
                .chars()
                .map(|ch| StyledChar {
                    ch,
                    style: style.clone(),
                })
                .collect();
            let end = editor.document.insert_chars(at, chars);
            editor.selection = Selection::cursor(end);
        });
    }

    /// Handle one key press
    pub fn press_key(&mut self, key: Key) {
        self.edit(|editor| match key {
            Key::Space => editor.space(),
            Key::Enter => editor.enter(),
            Key::Backspace => editor.backspace(),
            Key::Character(ch) => editor.insert_char(ch),
        });
    }

    /// Run a command; false when it does not apply (bad heading level, no link under cursor, empty history)
    pub fn execute(&mut self, command: Command) -> bool {
        match command {
            Command::ToggleBold => self.toggle_mark(Marks::BOLD),
            Command::ToggleItalic => self.toggle_mark(Marks::ITALIC),
            Command::ToggleUnderline => self.toggle_mark(Marks::UNDERLINE),
            Command::ToggleStrike => self.toggle_mark(Marks::STRIKE),
            Command::ToggleCode => self.toggle_mark(Marks::CODE),
            Command::ToggleBulletList => self.toggle_block(BlockKind::BulletItem),
            Command::ToggleOrderedList => self.toggle_block(BlockKind::OrderedItem),
            Command::SetParagraph => {
                self.set_blocks(BlockKind::Paragraph);
                true
            }
            Command::ToggleHeading(level) => {
                (1..=6).contains(&level) && self.toggle_block(BlockKind::Heading(level))
            }
            Command::SetLink(href) => self.set_link(Some(href)),
            Command::UnsetLink => self.set_link(None),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
        }
    }

    /// Whether `format` applies at the selection
    #[must_use]
    pub fn is_active(&self, format: Format) -> bool {
        let mark = match format {
            Format::Bold => Marks::BOLD,
            Format::Italic => Marks::ITALIC,
            Format::Underline => Marks::UNDERLINE,
            Format::Strike => Marks::STRIKE,
            Format::Code => Marks::CODE,
            Format::Link => return self.link_active(),
            Format::Paragraph => return self.head_kind() == BlockKind::Paragraph,
            Format::Heading(level) => return self.head_kind() == BlockKind::Heading(level),
            Format::BulletList => return self.head_kind() == BlockKind::BulletItem,
            Format::OrderedList => return self.head_kind() == BlockKind::OrderedItem,
        };
        if self.selection.is_collapsed() {
            return self
                .insertion_style(self.selection.head)
                .marks
                .contains(mark);
        }
        let chars = self
            .document
            .chars_in_range(self.selection.from(), self.selection.to());
        !chars.is_empty() && chars.iter().all(|c| c.style.marks.contains(mark))
    }

    /// Whether undo would do anything
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether redo would do anything
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replace the content with an external value without calling the change callback.
    ///
    /// Empty values and values equal to the current content are ignored.
    /// Returns true when the document was replaced.
    pub fn sync_content(&mut self, value: &str) -> bool {
        if value.is_empty() || value == self.html() {
            return false;
        }
        let incoming = html::from_html(value);
        if incoming == self.document {
            return false;
        }
        tracing::debug!("Editor content replaced from external value");
        self.document = incoming;
        self.selection = Selection::cursor(self.document.end());
        self.stored_style = None;
        self.history.clear();
        true
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            document: self.document.clone(),
            selection: self.selection,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.document = snapshot.document;
        self.selection = snapshot.selection;
        self.stored_style = None;
    }

    /// Apply an edit; record history and notify only if the document changed
    fn edit(&mut self, apply: impl FnOnce(&mut Self)) -> bool {
        let before = self.snapshot();
        apply(self);
        if self.document == before.document {
            return false;
        }
        self.history.record(before);
        self.emit_change();
        true
    }

    fn emit_change(&mut self) {
        let html = self.html();
        (self.on_change)(&html);
    }

    fn head_kind(&self) -> BlockKind {
        let head = self.document.clamp(self.selection.head);
        self.document.blocks()[head.block].kind
    }

    fn link_active(&self) -> bool {
        if self.selection.is_collapsed() {
            return self.document.link_range_at(self.selection.head).is_some();
        }
        self.document
            .chars_in_range(self.selection.from(), self.selection.to())
            .iter()
            .any(|c| c.style.link.is_some())
    }

    /// Style for a character typed at `at`: pending marks, else inherited from the left.
    /// Links continue only when the character on the right is part of the same link.
    fn insertion_style(&self, at: Position) -> Style {
        if let Some(style) = &self.stored_style {
            return style.clone();
        }
        let Some(before) = self.document.char_before(at) else {
            return Style::default();
        };
        let after = self.document.blocks()[at.block].chars.get(at.offset);
        let link = before
            .style
            .link
            .clone()
            .filter(|href| after.is_some_and(|c| c.style.link.as_ref() == Some(href)));
        Style {
            marks: before.style.marks,
            link,
        }
    }

    fn delete_selection(&mut self) {
        if self.selection.is_collapsed() {
            return;
        }
        let from = self.selection.from();
        self.document.delete_range(from, self.selection.to());
        self.selection = Selection::cursor(from);
    }

    fn insert_char(&mut self, ch: char) {
        self.delete_selection();
        let at = self.selection.head;
        let style = self.insertion_style(at);
        let end = self.document.insert_chars(at, vec![StyledChar { ch, style }]);
        self.selection = Selection::cursor(end);
        self.stored_style = None;
    }

    fn space(&mut self) {
        self.delete_selection();
        let preceding = self
            .document
            .char_before(self.selection.head)
            .map(|c| c.ch);
        self.insert_char(space_insertion(preceding));
    }

    fn enter(&mut self) {
        self.delete_selection();
        let head = self.selection.head;
        let block = &mut self.document.blocks_mut()[head.block];
        if block.kind.is_list_item() && block.is_empty() {
            block.kind = BlockKind::Paragraph;
            return;
        }
        let next = self.document.split_block(head);
        self.selection = Selection::cursor(next);
    }

    fn backspace(&mut self) {
        if !self.selection.is_collapsed() {
            self.delete_selection();
            return;
        }
        let head = self.selection.head;
        if head.offset > 0 {
            let from = Position::new(head.block, head.offset - 1);
            self.document.delete_range(from, head);
            self.selection = Selection::cursor(from);
            return;
        }
        let block = &mut self.document.blocks_mut()[head.block];
        if block.kind.is_list_item() {
            block.kind = BlockKind::Paragraph;
            return;
        }
        if let Some(join) = self.document.merge_with_previous(head.block) {
            self.selection = Selection::cursor(join);
        }
    }

    fn toggle_mark(&mut self, mark: Marks) -> bool {
        if self.selection.is_collapsed() {
            let mut style = self.insertion_style(self.selection.head);
            style.marks.toggle(mark);
            self.stored_style = Some(style);
            return true;
        }
        let (from, to) = (self.selection.from(), self.selection.to());
        let all_marked = self
            .document
            .chars_in_range(from, to)
            .iter()
            .all(|c| c.style.marks.contains(mark));
        self.edit(|editor| {
            editor.document.for_each_in_range(from, to, |c| {
                c.style.marks.set(mark, !all_marked);
            });
        });
        true
    }

    fn selected_blocks(&self) -> std::ops::RangeInclusive<usize> {
        let from = self.document.clamp(self.selection.from());
        let to = self.document.clamp(self.selection.to());
        from.block..=to.block
    }

    fn set_blocks(&mut self, kind: BlockKind) {
        let range = self.selected_blocks();
        self.edit(|editor| {
            for block in &mut editor.document.blocks_mut()[range] {
                block.kind = kind;
            }
        });
    }

    fn toggle_block(&mut self, kind: BlockKind) -> bool {
        let range = self.selected_blocks();
        let all_match = self.document.blocks()[range]
            .iter()
            .all(|block| block.kind == kind);
        self.set_blocks(if all_match {
            BlockKind::Paragraph
        } else {
            kind
        });
        true
    }

    fn set_link(&mut self, href: Option<String>) -> bool {
        let href = match href {
            Some(url) if url.trim().is_empty() => return false,
            Some(url) => Some(url.trim().to_owned()),
            None => None,
        };
        let range = if self.selection.is_collapsed() {
            self.document.link_range_at(self.selection.head)
        } else {
            Some((self.selection.from(), self.selection.to()))
        };
        let Some((from, to)) = range else {
            return false;
        };
        self.edit(|editor| {
            editor
                .document
                .for_each_in_range(from, to, |c| c.style.link.clone_from(&href));
        });
        true
    }

    fn undo(&mut self) -> bool {
        let current = self.snapshot();
        let Some(previous) = self.history.undo(current) else {
            return false;
        };
        self.restore(previous);
        self.emit_change();
        true
    }

    fn redo(&mut self) -> bool {
        let current = self.snapshot();
        let Some(next) = self.history.redo(current) else {
            return false;
        };
        self.restore(next);
        self.emit_change();
        true
    }
}

impl std::fmt::Debug for RichTextEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RichTextEditor")
            .field("document", &self.document)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
