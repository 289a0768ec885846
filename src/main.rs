use multi_order::order::{Order, Walk};
use multi_order::{Container, Result};
use std::fmt::Display;

fn print_order<T: Display, W: Walk>(label: &str, order: &Order<T, W>) -> Result<()> {
    print!("{}: ", label);
    let (mut it, end) = (order.begin(), order.end());
    while it != end {
        print!("{} ", it.get()?);
        it.step_forward()?;
    }
    println!();
    Ok(())
}

fn main() -> Result<()> {
    let mut container = Container::new();
    for item in [7, 15, 6, 1, 2, 2, 2, 2].iter() {
        container.add(*item);
    }

    if let Err(err) = container.remove(&2) {
        eprintln!("Remove error: {}", err);
    }

    println!("Size of container: {}", container.size());
    println!("Container: {}", container);

    print_order("Ascending order", &container.ascending_order()?)?;
    print_order("Descending order", &container.descending_order()?)?;
    print_order("Side-cross order", &container.side_cross_order()?)?;
    print_order("Reverse order", &container.reverse_order()?)?;
    print_order("Regular order", &container.order()?)?;
    print_order("Middle-out order", &container.middle_out_order()?)?;
    Ok(())
}
