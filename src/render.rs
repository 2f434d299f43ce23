use crate::tree::{NodeKind, TreeNode};

/// Visual state of the loading overlay. `Loading` is the base class the
/// page starts with; the other two add their modifier class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayState {
    Loading,
    Hidden,
    Error,
}

impl OverlayState {
    pub fn class_attr(&self) -> &'static str {
        match self {
            OverlayState::Loading => "overlay",
            OverlayState::Hidden => "overlay overlay--hidden",
            OverlayState::Error => "overlay overlay--error",
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Appends the tree grouping element to `out`, one entry per immediate
/// child of `root`. The listing is flat, so only depth 1 is drawn;
/// deeper nodes stay in the model but never reach the page.
pub fn render_tree(out: &mut String, root: &TreeNode) {
    out.push_str("<ul class=\"tree\">\n");
    for child in root.children() {
        render_entry(out, child);
    }
    out.push_str("</ul>\n");
}

/// Appends one list item for a file or directory node: a static closed
/// disclosure control, the icon image, the display name, and the verbatim
/// timestamp. Unknown kinds append nothing.
pub fn render_entry(out: &mut String, node: &TreeNode) {
    let icon_prefix = match node.kind {
        NodeKind::File => "file_type",
        NodeKind::Directory => "folder_type",
        NodeKind::Unknown => return,
    };
    out.push_str("  <li class=\"tree-entry\">\n");
    out.push_str(
        "    <div class=\"tree-entry__disclosure tree-entry__disclosure--closed\"></div>\n",
    );
    out.push_str(&format!(
        "    <img class=\"tree-entry__icon\" src=\"/icons/{}_{}.svg\">\n",
        icon_prefix,
        escape_html(&node.icon_category())
    ));
    out.push_str(&format!(
        "    <div class=\"tree-entry__name\">{}</div>\n",
        escape_html(&node.name)
    ));
    out.push_str(&format!(
        "    <div class=\"tree-entry__time\">{}</div>\n",
        escape_html(&node.last_modified)
    ));
    out.push_str("  </li>\n");
}

/// Builds the complete document: loading overlay in the given state, then
/// the tree section with the rendered tree attached.
pub fn render_page(root: &TreeNode, overlay: OverlayState) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str("<title>Directory Tree</title>\n");
    page.push_str("<link rel=\"stylesheet\" href=\"/styles/main.css\">\n");
    page.push_str("</head>\n<body>\n");
    page.push_str(&format!(
        "<div id=\"loading-overlay\" class=\"{}\"></div>\n",
        overlay.class_attr()
    ));
    page.push_str("<section id=\"tree-section\">\n");
    render_tree(&mut page, root);
    page.push_str("</section>\n</body>\n</html>\n");
    page
}
