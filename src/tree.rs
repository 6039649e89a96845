use crate::scanner::FileRecord;
use std::path::Component;

/// One node of the display tree. A directory node is synthesized for every
/// intermediate path segment; the root node has an empty name and is never
/// rendered itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Path segment this node represents.
    pub name: String,

    /// Whether the node is a directory.
    pub is_dir: bool,

    /// Child nodes, sorted lazily during rendering.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn new(name: String, is_dir: bool) -> Self {
        Self {
            name,
            is_dir,
            children: Vec::new(),
        }
    }
}

/// Builds a display tree from the flat file set. Each file's full path is
/// split into segments; intermediate segments become directory nodes,
/// matched by exact name, and the final segment becomes a file leaf.
#[must_use]
pub fn build_tree(files: &[FileRecord]) -> TreeNode {
    let mut root = TreeNode::new(String::new(), true);

    for file in files {
        let full_path = file.full_path();
        let parts: Vec<String> = full_path
            .components()
            .filter_map(|c| match c {
                Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        let Some((leaf, dirs)) = parts.split_last() else {
            continue;
        };

        let mut current = &mut root;
        for part in dirs {
            let position = current
                .children
                .iter()
                .position(|child| child.is_dir && child.name == *part);
            let index = match position {
                Some(index) => index,
                None => {
                    current.children.push(TreeNode::new(part.clone(), true));
                    current.children.len() - 1
                }
            };
            current = &mut current.children[index];
        }

        current.children.push(TreeNode::new(leaf.clone(), false));
    }

    root
}

/// Renders the tree as display lines with box-drawing connectors. Children
/// are re-sorted in place at each node, directories first, then
/// lexicographically by name.
pub fn render_tree(root: &mut TreeNode) -> Vec<String> {
    let mut lines = Vec::new();
    render_node(root, "", true, &mut lines);
    lines
}

fn render_node(node: &mut TreeNode, prefix: &str, is_last: bool, lines: &mut Vec<String>) {
    if !node.name.is_empty() {
        let connector = if is_last { "└── " } else { "├── " };
        let display_name = if node.is_dir {
            format!("{}/", node.name)
        } else {
            node.name.clone()
        };
        lines.push(format!("{prefix}{connector}{display_name}"));
    }

    node.children.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.cmp(&b.name))
    });

    let count = node.children.len();
    for index in 0..count {
        let child_is_last = index + 1 == count;
        let child_prefix = if node.name.is_empty() {
            String::new()
        } else if is_last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };
        render_node(&mut node.children[index], &child_prefix, child_is_last, lines);
    }
}
