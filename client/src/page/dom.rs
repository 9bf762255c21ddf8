//! DOM seam used by every page behavior.
//!
//! Elements are addressed by id. Operations on a missing element are
//! no-ops, which keeps one absent widget from breaking the others.

/// The slice of the document the page behaviors read and write.
pub trait PageDom {
    /// Whether `<body>` carries `class`.
    fn body_has_class(&self, class: &str) -> bool;

    /// Flip `class` on `<body>`. Returns whether it is present afterwards.
    fn toggle_body_class(&self, class: &str) -> bool;

    /// Add `class` to `<body>` if absent.
    fn add_body_class(&self, class: &str);

    /// Inline `display` style of element `id`, `None` if the element is missing.
    /// An element without an inline value reports the empty string.
    fn display(&self, id: &str) -> Option<String>;

    /// Set the inline `display` style of element `id`.
    fn set_display(&self, id: &str, value: &str);

    /// Replace the rendered text of element `id`.
    fn set_text(&self, id: &str, text: &str);

    /// Remove every child of element `id`.
    fn clear_children(&self, id: &str);

    /// Append an `<li>` with `text` to list `id`.
    fn append_list_item(&self, id: &str, text: &str);

    /// Append a `<div class="{class}">` holding `inner_html` as the last child of `id`.
    fn append_html(&self, id: &str, class: &str, inner_html: &str);
}
