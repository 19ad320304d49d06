use crate::avl_tree::node::Node;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Restores the balance invariant at the root of `tree`. Both subtrees must already be balanced
// and their heights may differ by at most two.
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();
    let factor = node.balance();

    if factor > 1 {
        let child = match node.left.take() {
            Some(child) => child,
            None => unreachable!(),
        };
        if child.balance() < 0 {
            node.left = Some(rotate_left(child));
        } else {
            node.left = Some(child);
        }
        node = rotate_right(node);
    } else if factor < -1 {
        let child = match node.right.take() {
            Some(child) => child,
            None => unreachable!(),
        };
        if child.balance() > 0 {
            node.right = Some(rotate_right(child));
        } else {
            node.right = Some(child);
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if tree.as_ref().map_or(false, |node| node.left.is_some()) {
        let min = match tree {
            Some(ref mut node) => remove_min(&mut node.left),
            None => unreachable!(),
        };
        balance(tree);
        return min;
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.right.take();
            node
        },
        None => unreachable!(),
    }
}

fn combine_subtrees<T>(left_tree: Tree<T>, mut right_tree: Tree<T>) -> Tree<T> {
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    Some(new_root)
}

pub fn insert<T>(tree: &mut Tree<T>, new_node: Node<T>)
where
    T: Ord,
{
    match tree {
        Some(ref mut node) => match new_node.key.cmp(&node.key) {
            Ordering::Greater => insert(&mut node.right, new_node),
            // equal keys descend left so that duplicates sit left of their equals
            Ordering::Less | Ordering::Equal => insert(&mut node.left, new_node),
        },
        None => {
            *tree = Some(Box::new(new_node));
            return;
        },
    }

    balance(tree);
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let Node { key: removed, left, right, .. } = *node;
                match (left, right) {
                    (None, right) => *tree = right,
                    (left, None) => *tree = left,
                    (left, right) => *tree = combine_subtrees(left, right),
                }
                Some(removed)
            },
        },
        None => return None,
    };

    balance(tree);
    ret
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    match tree {
        Some(ref node) => match key.cmp(&node.key) {
            Ordering::Less => contains(&node.left, key),
            Ordering::Greater => contains(&node.right, key),
            Ordering::Equal => true,
        },
        None => false,
    }
}

pub fn ceil<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.key) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.key),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn floor<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.key) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.key),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}
