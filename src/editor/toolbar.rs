// ABOUTME: Toolbar model for the instruction editor
// ABOUTME: Labels, titles, active and enabled state derived from the current editor state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Command, Format, RichTextEditor};

/// What pressing a toolbar button does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Run the command directly
    Run(Command),
    /// Ask for a URL, then run [`Command::SetLink`]
    PromptForLink,
}

/// One toolbar button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarButton {
    /// Short label shown on the button
    pub label: String,
    /// Tooltip
    pub title: String,
    /// Action on press
    pub action: ToolbarAction,
    /// Highlighted because the format applies at the selection
    pub active: bool,
    /// Pressable
    pub enabled: bool,
}

impl ToolbarButton {
    fn new(label: impl Into<String>, title: impl Into<String>, action: ToolbarAction) -> Self {
        Self {
            label: label.into(),
            title: title.into(),
            action,
            active: false,
            enabled: true,
        }
    }

    const fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl RichTextEditor {
    /// Toolbar buttons in display order
    #[must_use]
    pub fn toolbar(&self) -> Vec<ToolbarButton> {
        let run = ToolbarAction::Run;
        let mut buttons = vec![
            ToolbarButton::new("B", "Bold (Ctrl+B)", run(Command::ToggleBold))
                .active(self.is_active(Format::Bold)),
            ToolbarButton::new("I", "Italic (Ctrl+I)", run(Command::ToggleItalic))
                .active(self.is_active(Format::Italic)),
            ToolbarButton::new("U", "Underline (Ctrl+U)", run(Command::ToggleUnderline))
                .active(self.is_active(Format::Underline)),
            ToolbarButton::new("S", "Strike", run(Command::ToggleStrike))
                .active(self.is_active(Format::Strike)),
            ToolbarButton::new("</>", "Code", run(Command::ToggleCode))
                .active(self.is_active(Format::Code)),
            ToolbarButton::new("• List", "Bullet List", run(Command::ToggleBulletList))
                .active(self.is_active(Format::BulletList)),
            ToolbarButton::new("1. List", "Ordered List", run(Command::ToggleOrderedList))
                .active(self.is_active(Format::OrderedList)),
            ToolbarButton::new("¶", "Paragraph", run(Command::SetParagraph))
                .active(self.is_active(Format::Paragraph)),
        ];
        buttons.extend((1..=6).map(|level| {
            ToolbarButton::new(
                format!("H{level}"),
                format!("Heading {level}"),
                run(Command::ToggleHeading(level)),
            )
            .active(self.is_active(Format::Heading(level)))
        }));
        buttons.extend([
            ToolbarButton::new("🔗", "Add Link", ToolbarAction::PromptForLink)
                .active(self.is_active(Format::Link)),
            ToolbarButton::new("❌", "Remove Link", run(Command::UnsetLink))
                .enabled(self.is_active(Format::Link)),
            ToolbarButton::new("↺", "Undo", run(Command::Undo)).enabled(self.can_undo()),
            ToolbarButton::new("↻", "Redo", run(Command::Redo)).enabled(self.can_redo()),
        ]);
        buttons
    }

    /// Press a toolbar button; `link` answers the URL prompt
    pub fn press(&mut self, button: &ToolbarButton, link: Option<&str>) -> bool {
        if !button.enabled {
            return false;
        }
        match &button.action {
            ToolbarAction::Run(command) => self.execute(command.clone()),
            ToolbarAction::PromptForLink => {
                link.is_some_and(|url| self.execute(Command::SetLink(url.to_owned())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolbar_lists_every_button_in_order() {
        let editor = RichTextEditor::new("", |_| {});
        let labels: Vec<String> = editor.toolbar().into_iter().map(|b| b.label).collect();
        assert_eq!(
            labels,
            [
                "B", "I", "U", "S", "</>", "• List", "1. List", "¶", "H1", "H2", "H3", "H4",
                "H5", "H6", "🔗", "❌", "↺", "↻"
            ]
        );
    }

    #[test]
    fn test_undo_disabled_on_fresh_editor() {
        let editor = RichTextEditor::new("<p>Boil water</p>", |_| {});
        let undo = editor
            .toolbar()
            .into_iter()
            .find(|b| b.title == "Undo")
            .unwrap();
        assert!(!undo.enabled);
    }

    #[test]
    fn test_link_prompt_without_url_does_nothing() {
        let mut editor = RichTextEditor::new("<p>Boil water</p>", |_| {});
        editor.select_all();
        let link = editor
            .toolbar()
            .into_iter()
            .find(|b| b.action == ToolbarAction::PromptForLink)
            .unwrap();
        assert!(!editor.press(&link, None));
        assert!(editor.press(&link, Some("https://example.com")));
        assert!(editor.is_active(Format::Link));
    }
}
