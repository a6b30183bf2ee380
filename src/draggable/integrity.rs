use std::hash::{Hash as _, Hasher as _};

use super::{Draggable, Mode, StyleProperty};
use crate::host::DragHost;

/// Human-readable violations of the docked/floating invariants, empty when consistent.
pub fn draggable_integrity_issues<H: DragHost>(
    draggable: &Draggable<H::Element>,
    host: &H,
) -> Vec<String> {
    let mut issues: Vec<String> = Vec::new();
    let element = draggable.element();

    if !host.is_connected(element) {
        issues.push(format!(
            "integrity: element {element:?} is not connected ({})",
            draggable.mode().kind().name()
        ));
    }

    let Mode::Floating { placeholder } = draggable.mode() else {
        return issues;
    };

    if !host.is_connected(placeholder) {
        issues.push(format!(
            "integrity: placeholder {placeholder:?} is not connected while floating"
        ));
    }
    if !host.is_root_child(element) {
        issues.push("integrity: floating element is not a child of the root".to_owned());
    }
    let position = host.style(element, StyleProperty::Position);
    if position.as_deref() != Some("fixed") {
        issues.push(format!(
            "integrity: floating element has position {position:?}, expected \"fixed\""
        ));
    }
    if host.style(placeholder, StyleProperty::Visibility).as_deref() != Some("hidden") {
        issues.push("integrity: placeholder is visible".to_owned());
    }

    issues
}

pub(super) fn hash_issues(lines: &[String]) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    for line in lines {
        line.hash(&mut hasher);
    }
    hasher.finish()
}
