use super::types::{GroupId, GroupToken, Mark, MarkId, MarkType, Node, SingleToken};

/// One step of a depth-first walk over a [`Document`].
#[derive(Debug, Clone, Copy)]
pub enum Visit<'a> {
    Enter(GroupId, &'a GroupToken),
    Token(&'a SingleToken),
    Exit(GroupId, &'a GroupToken),
}

/// The result of a successful parse.
///
/// Owns the group arena (root at [`GroupId::ROOT`]) and every mark, including
/// pre-scanned hyper marks, in creation order.
#[derive(Debug, Clone)]
pub struct Document {
    groups: Vec<GroupToken>,
    marks: Vec<Mark>,
}

impl Document {
    pub(crate) fn new(groups: Vec<GroupToken>, marks: Vec<Mark>) -> Self {
        Self { groups, marks }
    }

    pub fn root(&self) -> &GroupToken {
        &self.groups[GroupId::ROOT.0]
    }

    pub fn group(&self, id: GroupId) -> &GroupToken {
        &self.groups[id.0]
    }

    pub fn mark(&self, id: MarkId) -> &Mark {
        &self.marks[id.0]
    }

    /// Every group created by the parse, in creation order. Excludes the root.
    pub fn groups(&self) -> impl Iterator<Item = (GroupId, &GroupToken)> {
        self.groups
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, g)| (GroupId(i), g))
    }

    /// Every mark, indexed by [`MarkId`].
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn unterminated_groups(&self) -> impl Iterator<Item = (GroupId, &GroupToken)> {
        self.groups().filter(|(_, g)| !g.is_closed())
    }

    pub fn unterminated_marks(&self) -> impl Iterator<Item = (MarkId, &Mark)> {
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.is_closed())
            .map(|(i, m)| (MarkId(i), m))
    }

    /// Number of bracket marks enclosing `index`.
    pub fn bracket_depth_at(&self, index: usize) -> usize {
        self.marks
            .iter()
            .filter(|m| m.kind == MarkType::Brackets && m.encloses(index))
            .count()
    }

    /// Walks the tree depth-first in document order.
    ///
    /// Uses an explicit stack, so arbitrarily deep quote nesting is fine.
    pub fn walk<'a>(&'a self, mut f: impl FnMut(Visit<'a>)) {
        let mut stack = vec![(GroupId::ROOT, 0usize)];
        f(Visit::Enter(GroupId::ROOT, self.root()));

        while let Some(&(id, next)) = stack.last() {
            let group = &self.groups[id.0];
            let Some(node) = group.children.get(next) else {
                stack.pop();
                f(Visit::Exit(id, group));
                continue;
            };
            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }
            match node {
                Node::Token(t) => f(Visit::Token(t)),
                Node::Group(child) => {
                    f(Visit::Enter(*child, &self.groups[child.0]));
                    stack.push((*child, 0));
                }
            }
        }
    }

    /// Leaf tokens in document order.
    pub fn leaves(&self) -> Vec<&SingleToken> {
        let mut out = vec![];
        self.walk(|v| {
            if let Visit::Token(t) = v {
                out.push(t);
            }
        });
        out
    }

    /// Rebuilds the source text from group delimiters and leaf `raw` text.
    pub fn raw_text(&self) -> String {
        let mut out = String::new();
        self.walk(|v| match v {
            Visit::Enter(_, g) => out.push_str(&g.raw_start_content),
            Visit::Token(t) => out.push_str(&t.raw),
            Visit::Exit(_, g) => out.push_str(&g.raw_end_content),
        });
        out
    }
}
