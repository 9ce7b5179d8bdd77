use anyhow::{Context, Result};
use gridf64::{dot, make_reducer, AxisSelector, Elements, Grid, RandomFill, Vector};

fn main() -> Result<()> {
    env_logger::init();

    let mut m: Grid = Grid::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
    ])?;
    println!("m =\n{}", m);

    // Broadcast a scalar, then a vector across every row
    m.mul(2.0)?;
    let offsets = Vector::from_vec(vec![-1.0, 0.0, 1.0]);
    m.add(&offsets).context("adding row offsets")?;
    println!("2 * m + {} =\n{}", offsets, m);

    println!("sum = {}", m.sum());
    println!(
        "sum of last column = {}",
        m.sum_axis(AxisSelector::column(-1))?
    );
    println!(
        "average of first row = {}",
        m.average_axis(AxisSelector::row(0))?
    );
    println!("all positive? {}", m.all(|&x| x > 0.0));

    let max = make_reducer(f64::NEG_INFINITY, f64::max);
    println!("max = {}", max.reduce(&m));

    let fill: RandomFill = "0..10@7"
        .parse()
        .map_err(anyhow::Error::msg)
        .context("parsing random fill")?;
    let r = Grid::random(3, 2, &fill)?;
    println!("r =\n{}", r);

    let product = dot(&m, &r).context("m . r")?;
    println!("m . r =\n{}", product);
    println!("(m . r)^T =\n{}", product.t());

    Ok(())
}
