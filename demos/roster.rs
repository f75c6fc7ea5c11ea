use avl_roster::{Id, Order, Tree};

fn main() {
    let mut tree = Tree::new();
    for (id, name) in [
        ("45679999", "Brandon"),
        ("35459999", "Brian"),
        ("87879999", "Briana"),
        ("95469999", "Bella"),
        ("35459999", "Duplicate"),
    ] {
        let id: Id = id.parse().expect("valid id");
        match tree.insert(id, name) {
            Ok(()) => println!("inserted {id} {name}"),
            Err(err) => println!("{err}"),
        }
    }

    println!("Level count: {}", tree.height());
    for order in [Order::Inorder, Order::Preorder, Order::Postorder] {
        let names: Vec<_> = tree.names(order).collect();
        println!("{order:?}: {}", names.join(", "));
    }

    if let Ok((id, name)) = tree.remove_at_rank(0) {
        println!("removed {id} {name}");
    }
    println!("{tree:?}");
}
