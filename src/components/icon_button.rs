//! Icon Button Component
//!
//! Round glyph button used for the per-task edit, save and delete actions.

use leptos::prelude::*;

/// Glyphs shown on task action buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Edit,
    Save,
    Delete,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Edit => "✎",
            Icon::Save => "💾",
            Icon::Delete => "🗑",
        }
    }

    /// Tooltip and accessible name
    pub fn label(self) -> &'static str {
        match self {
            Icon::Edit => "Edit",
            Icon::Save => "Save",
            Icon::Delete => "Delete",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Icon::Edit => "icon-btn edit-btn",
            Icon::Save => "icon-btn save-btn",
            Icon::Delete => "icon-btn delete-btn",
        }
    }
}

/// Button showing a single icon
///
/// # Arguments
/// * `icon` - Which glyph to show
/// * `on_press` - Callback run on click
#[component]
pub fn IconButton(
    icon: Icon,
    #[prop(into)] on_press: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=icon.class()
            title=icon.label()
            aria-label=icon.label()
            on:click=move |ev| {
                ev.stop_propagation();
                on_press.run(());
            }
        >
            {icon.glyph()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_icon_has_distinct_glyph() {
        let icons = [Icon::Edit, Icon::Save, Icon::Delete];
        for (i, a) in icons.iter().enumerate() {
            for b in &icons[i + 1..] {
                assert_ne!(a.glyph(), b.glyph());
                assert_ne!(a.class(), b.class());
            }
        }
    }

    #[test]
    fn test_classes_share_base() {
        assert!(Icon::Save.class().starts_with("icon-btn "));
        assert_eq!(Icon::Delete.label(), "Delete");
    }
}
