use std::fmt::{Display, Formatter, Result};

/// Application-level effect chosen for a payload's `type`. `Unhandled`
/// carries the unrecognized type, or `None` when the payload had no type
/// field at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    ViewComplaint(i64),
    ViewOrder(i64),
    Logout,
    Unhandled(Option<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Complaint,
    Order,
}

impl Display for ScreenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ScreenKind::Complaint => write!(f, "complaint"),
            ScreenKind::Order => write!(f, "order"),
        }
    }
}
