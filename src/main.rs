use anyhow::{Context, Result};
use math::Fraction;

fn report(name: &str, f: Fraction) {
    tracing::info!(name, f.num, f.den);
    println!("{name}: {}/{}", f.num, f.den);
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::try_init().map_err(anyhow::Error::msg)?;

    let half = math::create_half();
    report("half", half);
    report("half * half", math::mult(half, half));
    report("1 / half", math::invert(half));

    let quarter = math::checked_mult(half, half).context("Multiplying halves")?;
    report("checked half * half", quarter);

    let zero = Fraction::new(0, 5);
    report("1 / (0/5)", math::invert(zero));

    match math::checked_invert(zero) {
        Ok(f) => report("checked 1 / (0/5)", f),
        Err(error) => tracing::warn!(%error, "Checked inversion rejected"),
    }

    let big = Fraction::new(i32::MAX, 1);
    report("wrapping max * 2", math::mult(big, Fraction::new(2, 1)));

    if let Err(error) = math::checked_mult(big, Fraction::new(2, 1)) {
        tracing::warn!(%error, "Checked multiplication rejected");
    }

    Ok(())
}
