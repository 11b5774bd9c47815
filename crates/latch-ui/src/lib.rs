#![allow(non_snake_case)]
//! Headless widgets. Each constructor returns a plain [`View`]; event
//! handlers and extra attributes arrive as a [`PropBundle`] spread onto it.

use latch_core::*;

pub fn Column(children: impl IntoChildren) -> View {
    View::new(0, ViewKind::Column).with_children(children.into_children())
}

/// Groups children without a wrapper node.
pub fn Fragment(children: impl IntoChildren) -> View {
    View::new(0, ViewKind::Fragment).with_children(children.into_children())
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(0, ViewKind::Text { text: text.into() }).semantics(Semantics::new(Role::Text))
}

pub fn Button(text: impl Into<String>, props: PropBundle) -> View {
    View::new(0, ViewKind::Button { text: text.into() })
        .semantics(Semantics::new(Role::Button))
        .props(props)
}

/// A two-state switch. `on` drives the rendered state; the bundle usually
/// comes from a toggle's prop getter and carries `aria-pressed` and `onClick`.
pub fn Switch(on: bool, props: PropBundle) -> View {
    View::new(0, ViewKind::Switch { checked: on })
        .semantics(Semantics {
            role: Role::Switch,
            label: None,
            pressed: Some(on),
            enabled: true,
        })
        .props(props)
}

pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(mut self, children: impl IntoChildren) -> Self {
        self.children.extend(children.into_children());
        self
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

// Tuple implementations
macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);

/// Finds a clickable node by its `id` prop and clicks it, as a host would
/// after hit-testing a press. Returns `false` when no such node exists.
pub fn click_by_id(root: &View, id: &str) -> Result<bool, UsageError> {
    match root.find_by_prop("id", id) {
        Some(v) => v.click().map(|()| true),
        None => {
            log::debug!("click_by_id: no view with id {id:?}");
            Ok(false)
        }
    }
}
