use serde::Deserialize;

/// Classification of a listing entry. Anything the backend sends other
/// than `file` or `directory` lands on `Unknown` and is skipped by the
/// renderer.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
    #[serde(other)]
    Unknown,
}

/// One file-system entry plus its children. Children are owned by their
/// node and keep insertion order; insertion order is display order.
pub struct TreeNode {
    pub name: String,
    pub kind: NodeKind,
    pub last_modified: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(name: String, kind: NodeKind, last_modified: String) -> TreeNode {
        TreeNode {
            name,
            kind,
            last_modified,
            children: Vec::new(),
        }
    }

    /// The attachment point for fetched top-level entries. Carries
    /// sentinel values and is never rendered itself.
    pub fn root() -> TreeNode {
        TreeNode::new(String::new(), NodeKind::Unknown, String::new())
    }

    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Derives the string used to pick an icon asset: the directory's own
    /// name, or the lower-cased extension of a file name. A file name
    /// without a dot is its own category; a trailing dot yields an empty
    /// category.
    pub fn icon_category(&self) -> String {
        match self.kind {
            NodeKind::Directory => self.name.clone(),
            NodeKind::File => match self.name.rfind('.') {
                Some(dot_index) => self.name[dot_index + 1..].to_lowercase(),
                None => self.name.clone(),
            },
            NodeKind::Unknown => String::new(),
        }
    }
}
