use std::fmt::Write as _;

use crate::props::{ARIA_PRESSED, ON_CLICK, PropBundle, PropValue};
use crate::semantics::{Role, Semantics};
use crate::UsageError;

pub type ViewId = u64;

#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    /// Groups children without adding a node of its own.
    Fragment,
    Column,
    Text { text: String },
    Button { text: String },
    Switch { checked: bool },
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub props: PropBundle,
    pub children: Vec<View>,
    pub semantics: Option<Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            props: PropBundle::default(),
            children: vec![],
            semantics: None,
        }
    }

    /// An empty fragment; renders nothing.
    pub fn empty() -> Self {
        View::new(0, ViewKind::Fragment)
    }

    pub fn is_empty(&self) -> bool {
        self.kind == ViewKind::Fragment && self.children.iter().all(View::is_empty)
    }

    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    pub fn semantics(mut self, s: Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Spreads a prop bundle onto this view. Later bundles win on key clashes.
    /// `aria-pressed` is mirrored into the node's semantics.
    pub fn props(mut self, props: PropBundle) -> Self {
        if let Some(pressed) = props.bool(ARIA_PRESSED) {
            let role = match self.kind {
                ViewKind::Switch { .. } => Role::Switch,
                _ => Role::Button,
            };
            self.semantics
                .get_or_insert_with(|| Semantics::new(role))
                .pressed = Some(pressed);
        }
        self.props = std::mem::take(&mut self.props).merge(props);
        self
    }

    /// Fires this view's click handler, as a host would on a pointer press.
    pub fn click(&self) -> Result<(), UsageError> {
        self.props.fire(ON_CLICK)
    }

    /// Depth-first search, including `self`.
    pub fn find(&self, pred: &dyn Fn(&View) -> bool) -> Option<&View> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(pred))
    }

    /// First view whose text prop `key` equals `value`.
    pub fn find_by_prop(&self, key: &str, value: &str) -> Option<&View> {
        self.find(&|v| v.props.text(key) == Some(value))
    }

    /// Collects the text of every `Text` node, in tree order.
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.visit(&mut |v| {
            if let ViewKind::Text { text } = &v.kind {
                out.push(text.clone());
            }
        });
        out
    }

    pub fn visit(&self, f: &mut dyn FnMut(&View)) {
        f(self);
        for c in &self.children {
            c.visit(f);
        }
    }

    /// One line per node, indented by depth. Fragments are transparent.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(0, &mut out);
        out
    }

    fn write_outline(&self, depth: usize, out: &mut String) {
        let child_depth = match &self.kind {
            ViewKind::Fragment => depth,
            kind => {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(&"  ".repeat(depth));
                match kind {
                    ViewKind::Column => out.push_str("Column"),
                    ViewKind::Text { text } => {
                        let _ = write!(out, "Text {text:?}");
                    }
                    ViewKind::Button { text } => {
                        let _ = write!(out, "Button {text:?}");
                    }
                    ViewKind::Switch { checked } => {
                        out.push_str(if *checked { "Switch(on)" } else { "Switch(off)" });
                    }
                    ViewKind::Fragment => {}
                }
                for (key, value) in self.props.iter() {
                    match value {
                        PropValue::Handler(_) => {
                            let _ = write!(out, " {key}");
                        }
                        other => {
                            let _ = write!(out, " {key}={other:?}");
                        }
                    }
                }
                depth + 1
            }
        };
        for c in &self.children {
            c.write_outline(child_depth, out);
        }
    }
}
