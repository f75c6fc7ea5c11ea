//! A roster of 8-digit ids and names kept in an AVL tree.
//!
//! [`Tree`] is the balanced search tree. [`Shell`] reads line-oriented
//! commands, validates ids and names and renders the outcome of each command.
//!
//! ```
//! use avl_roster::{Id, Tree};
//! let mut tree = Tree::new();
//! let id: Id = "45679999".parse().unwrap();
//! tree.insert(id, "Brandon").unwrap();
//! assert_eq!(tree.search(id), Ok("Brandon"));
//! assert_eq!(tree.remove(id), Ok(String::from("Brandon")));
//! assert!(tree.is_empty());
//! ```

pub mod command;
mod error;
mod id;
pub mod name;
pub mod shell;
mod tree;

pub use command::Command;
pub use error::{ParseError, ShellError, TreeError};
pub use id::Id;
pub use name::NamePolicy;
pub use shell::{Outcome, Shell};
pub use tree::{Node, Order, Traverse, Tree};
