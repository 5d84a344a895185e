use arboretum::{KdTree, Result};

fn main() -> Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt::init();

    let points = [
        [3.0, 6.0],
        [17.0, 15.0],
        [13.0, 15.0],
        [6.0, 12.0],
        [9.0, 1.0],
        [2.0, 7.0],
        [10.0, 19.0],
    ];
    let tree: KdTree<f64> = KdTree::from_points(2, points)?;

    for query in [[10.0, 19.0], [12.0, 19.0]] {
        if tree.contains(query)? {
            println!("Found.");
        } else {
            println!("Not Found.");
        }
    }

    Ok(())
}
