use super::tokens::{Document, GroupId, GroupToken, Mark, MarkId, Node, SingleToken};

/// The mutable context of exactly one parse.
///
/// Built fresh for every call to the tokenizer and threaded through the
/// engines by `&mut`. The root group is installed here, before the first
/// character is read, so there is always a current group.
#[derive(Debug)]
pub struct ParseState {
    /// The unfinished leaf; not yet appended to any group.
    pub last_token: Option<SingleToken>,
    /// The innermost open group.
    pub last_group: GroupId,
    /// The innermost open mark.
    pub last_mark: Option<MarkId>,
    /// Enclosing groups of `last_group`, outermost first.
    pub group_stack: Vec<GroupId>,
    /// Enclosing marks of `last_mark`, outermost first.
    pub mark_stack: Vec<MarkId>,
    /// Every mark created during the parse.
    pub marks: Vec<Mark>,
    /// Every group created during the parse; slot 0 is the root.
    pub groups: Vec<GroupToken>,
}

impl ParseState {
    pub fn new() -> Self {
        Self {
            last_token: None,
            last_group: GroupId::ROOT,
            last_mark: None,
            group_stack: vec![],
            mark_stack: vec![],
            marks: vec![],
            groups: vec![GroupToken::root()],
        }
    }

    /// True when a group other than the root is open.
    pub fn has_open_group(&self) -> bool {
        !self.group_stack.is_empty()
    }

    pub fn current_group(&self) -> &GroupToken {
        &self.groups[self.last_group.0]
    }

    pub fn current_group_mut(&mut self) -> &mut GroupToken {
        &mut self.groups[self.last_group.0]
    }

    /// Appends a finished leaf to the current group.
    pub fn push_token(&mut self, token: SingleToken) {
        self.current_group_mut().children.push(Node::Token(token));
    }

    pub fn add_mark(&mut self, mark: Mark) -> MarkId {
        self.marks.push(mark);
        MarkId(self.marks.len() - 1)
    }

    pub fn add_group(&mut self, group: GroupToken) -> GroupId {
        self.groups.push(group);
        GroupId(self.groups.len() - 1)
    }

    /// Consumes the state. Any unfinished token must be finalized first.
    pub fn into_document(self) -> Document {
        debug_assert!(self.last_token.is_none(), "unfinished token at end of parse");
        Document::new(self.groups, self.marks)
    }
}

impl Default for ParseState {
    fn default() -> Self {
        Self::new()
    }
}
