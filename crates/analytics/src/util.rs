use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to 2 decimal places, midpoint away from zero.
/// Applied only at award and presentation boundaries — intermediate sums stay
/// at full precision so rounding error never compounds.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Arithmetic mean of a sample slice. An empty slice averages to zero rather
/// than dividing by zero.
pub fn mean(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = values.iter().sum();
    sum / Decimal::from(values.len() as u64)
}
