//! Social caption composition.

use crate::utils::markup::appeal_to_plain_text;

/// Hard character limit for captions on the media platform.
pub const MAX_CAPTION_CHARS: usize = 2200;

const ELLIPSIS: &str = "...";

/// Caps a caption at [`MAX_CAPTION_CHARS`] characters.
///
/// Longer captions lose their tail to an ellipsis so the result is exactly
/// at the cap. Shorter captions are returned unchanged.
pub fn truncate_caption(caption: &str) -> String {
    if caption.chars().count() <= MAX_CAPTION_CHARS {
        return caption.to_string();
    }

    let keep = MAX_CAPTION_CHARS - ELLIPSIS.len();
    let mut truncated: String = caption.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Builds the daily post caption from company fields.
pub fn build_caption(name: &str, description: &str, appeal: &str, website: &str) -> String {
    let caption = format!(
        "Today's Fix \u{1F48A}\u{26A1}\n\n{name}\n\n{description}\n\nWhy we like it:\n{appeal}\n\nLearn more: {website}\n\n#startupdose #startups #tech #innovation",
        appeal = appeal_to_plain_text(appeal),
    );

    truncate_caption(&caption)
}
