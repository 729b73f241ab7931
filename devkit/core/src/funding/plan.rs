use alloy_primitives::{Address, U64, U256};

use super::FundingError;
use crate::rpc::TransactionRequest;

/// Accounts that should receive funds. The coinbase is dropped only when it
/// is the node's first account; an external coinbase leaves the list intact.
#[must_use]
pub fn select_recipients(coinbase: Address, accounts: &[Address]) -> Vec<Address> {
    match accounts.split_first() {
        Some((first, rest)) if *first == coinbase => rest.to_vec(),
        _ => accounts.to_vec(),
    }
}

/// Even share of `balance` across `recipients`, capped at `max_amount`.
/// Returns zero when there is nobody to fund.
#[must_use]
pub fn per_account_amount(balance: U256, recipients: usize, max_amount: U256) -> U256 {
    if recipients == 0 {
        return U256::ZERO;
    }
    let share = balance / U256::from(recipients);
    share.min(max_amount)
}

/// Value actually transferred once the reservation is held back. Amounts
/// that would leave nothing to send are rejected rather than wrapped.
pub fn transfer_value(amount: U256, reservation: U256) -> Result<U256, FundingError> {
    match amount.checked_sub(reservation) {
        Some(value) if !value.is_zero() => Ok(value),
        _ => Err(FundingError::AmountBelowReservation {
            amount,
            reservation,
        }),
    }
}

/// One transfer per recipient, nonces assigned by offset from the coinbase's
/// current nonce.
#[must_use]
pub fn plan_transfers(
    coinbase: Address,
    recipients: &[Address],
    value: U256,
    first_nonce: u64,
) -> Vec<TransactionRequest> {
    (first_nonce..)
        .zip(recipients)
        .map(|(nonce, to)| TransactionRequest {
            from: coinbase,
            to: *to,
            value,
            nonce: U64::from(nonce),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use devkit_config::constants::{MAX_FUNDING_AMOUNT, TRANSFER_RESERVATION, WEI_PER_TOKEN};

    use super::*;

    fn tokens(n: u64) -> U256 {
        U256::from(n) * U256::from(WEI_PER_TOKEN)
    }

    fn addr(byte: u8) -> Address {
        Address::repeat_byte(byte)
    }

    #[test]
    fn coinbase_first_account_is_excluded() {
        let accounts = [addr(1), addr(2), addr(3)];
        assert_eq!(select_recipients(addr(1), &accounts), vec![addr(2), addr(3)]);
    }

    #[test]
    fn external_coinbase_funds_every_account() {
        let accounts = [addr(1), addr(2), addr(3)];
        assert_eq!(select_recipients(addr(9), &accounts), accounts.to_vec());
    }

    #[test]
    fn coinbase_elsewhere_in_list_stays_a_recipient() {
        let accounts = [addr(1), addr(2), addr(3)];
        assert_eq!(select_recipients(addr(2), &accounts).len(), 3);
    }

    #[test]
    fn amount_is_even_split_below_the_cap() {
        assert_eq!(
            per_account_amount(tokens(12), 4, MAX_FUNDING_AMOUNT),
            tokens(3)
        );
        assert_eq!(
            per_account_amount(U256::from(10), 3, MAX_FUNDING_AMOUNT),
            U256::from(3)
        );
    }

    #[test]
    fn amount_is_capped() {
        assert_eq!(
            per_account_amount(tokens(100), 4, MAX_FUNDING_AMOUNT),
            tokens(10)
        );
        assert_eq!(
            per_account_amount(U256::MAX, 1, MAX_FUNDING_AMOUNT),
            MAX_FUNDING_AMOUNT
        );
    }

    #[test]
    fn amount_for_no_recipients_is_zero() {
        assert_eq!(per_account_amount(tokens(5), 0, MAX_FUNDING_AMOUNT), U256::ZERO);
    }

    #[test]
    fn reservation_is_subtracted() {
        assert_eq!(
            transfer_value(tokens(10), TRANSFER_RESERVATION).unwrap(),
            tokens(10) - U256::from(21_000)
        );
    }

    #[test]
    fn amount_not_above_reservation_is_rejected() {
        for amount in [0_u64, 20_999, 21_000] {
            let err = transfer_value(U256::from(amount), TRANSFER_RESERVATION).unwrap_err();
            assert!(matches!(err, FundingError::AmountBelowReservation { .. }));
        }
    }

    #[test]
    fn nonces_follow_recipient_order_without_gaps() {
        let recipients = [addr(4), addr(5), addr(6)];
        let plan = plan_transfers(addr(1), &recipients, U256::from(1), 41);

        let nonces: Vec<u64> = plan.iter().map(|tx| tx.nonce.to::<u64>()).collect();
        assert_eq!(nonces, vec![41, 42, 43]);
        let targets: Vec<Address> = plan.iter().map(|tx| tx.to).collect();
        assert_eq!(targets, recipients.to_vec());
        assert!(plan.iter().all(|tx| tx.from == addr(1)));
    }
}
