use crate::node::{Link, Node};

/// Which child link a descent follows out of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// Everything strictly smaller than the node's value.
    Left,
    /// Everything greater than or equal to the node's value. Duplicates live here.
    Right,
}

impl Side {
    /// The side of `node` on which `item` is stored (or would be inserted).
    pub(crate) fn toward<T: Ord>(item: &T, node: &Node<T>) -> Self {
        if *item < node.data {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// Follows `steps` links down from `link`, picking a child at every node with `side`, and
/// returns the link reached. Stops early at an empty link.
///
/// This only hands out the final `&mut` link so removal can re-tie it in place, which makes the
/// root slot of a tree behave exactly like any child slot.
pub(crate) fn walk<'a, T>(
    mut link: &'a mut Link<T>,
    steps: usize,
    mut side: impl FnMut(&Node<T>) -> Side,
) -> &'a mut Link<T> {
    for _ in 0..steps {
        let Some(node) = link else {
            break;
        };
        link = match side(&**node) {
            Side::Left => &mut node.left,
            Side::Right => &mut node.right,
        };
    }

    link
}
