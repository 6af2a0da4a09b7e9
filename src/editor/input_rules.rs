// ABOUTME: Pure input rules applied to key presses before they reach the document
// ABOUTME: A space typed after a space becomes a non-breaking space so runs of spaces survive HTML
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// U+00A0 NO-BREAK SPACE
pub const NON_BREAKING_SPACE: char = '\u{a0}';

/// Character to insert when space is pressed, given the character before the cursor.
///
/// `None` means the cursor sits at the start of a block.
///
/// ```rust
/// use cookbook_client::editor::input_rules::space_insertion;
///
/// assert_eq!(space_insertion(Some(' ')), '\u{a0}');
/// assert_eq!(space_insertion(Some('a')), ' ');
/// assert_eq!(space_insertion(None), ' ');
/// ```
#[must_use]
pub const fn space_insertion(preceding: Option<char>) -> char {
    match preceding {
        Some(' ') => NON_BREAKING_SPACE,
        _ => ' ',
    }
}
