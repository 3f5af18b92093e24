use balance_gate::{types::Chain, Gate};
use std::io::{self, Write};

/// Startup banner. A node that does not answer is reported, not fatal.
pub async fn check<W: Write>(gate: &Gate, output: &mut W) -> io::Result<bool> {
    let ethereum = match gate.chain_head(Chain::Ethereum).await {
        Ok(block_number) => {
            writeln!(output, "Connected to blockchain!")?;
            writeln!(output, "Latest block number: {block_number}")?;
            true
        }
        Err(e) => {
            log::warn!("{e}");
            writeln!(
                output,
                "Connection failed. Check provider URL or network status."
            )?;
            false
        }
    };

    if gate.is_connected(Chain::Solana).await {
        log::info!("Connected to Solana");
    } else {
        log::warn!("Solana node is not reachable");
    }

    Ok(ethereum)
}

/// Connectivity smoke test of the Ethereum node.
pub async fn ping<W: Write>(gate: &Gate, output: &mut W) -> io::Result<bool> {
    match gate.chain_head(Chain::Ethereum).await {
        Ok(block_number) => {
            writeln!(output, "Connected to blockchain!")?;
            writeln!(output, "Latest block: {block_number}")?;
            Ok(true)
        }
        Err(e) => {
            log::error!("{e}");
            writeln!(output, "Connection failed.")?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod test {
    use super::{check, ping};
    use balance_gate::{
        mock::{MockEvm, MockSolana, MOCK_HEAD},
        Gate, U256,
    };

    #[tokio::test]
    async fn reachable() {
        let gate = Gate::new(
            Box::new(MockEvm::with_balance(U256::zero())),
            Box::new(MockSolana::unreachable()),
        );

        let mut banner = vec![];
        assert!(check(&gate, &mut banner).await.unwrap());
        assert_eq!(
            String::from_utf8(banner).unwrap(),
            format!("Connected to blockchain!\nLatest block number: {MOCK_HEAD}\n")
        );

        let mut output = vec![];
        assert!(ping(&gate, &mut output).await.unwrap());
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("Connected to blockchain!\nLatest block: {MOCK_HEAD}\n")
        );
    }

    #[tokio::test]
    async fn unreachable() {
        let gate = Gate::new(
            Box::new(MockEvm::unreachable()),
            Box::new(MockSolana::with_balance(0)),
        );

        let mut banner = vec![];
        assert!(!check(&gate, &mut banner).await.unwrap());
        assert_eq!(
            String::from_utf8(banner).unwrap(),
            "Connection failed. Check provider URL or network status.\n"
        );

        let mut output = vec![];
        assert!(!ping(&gate, &mut output).await.unwrap());
        assert_eq!(String::from_utf8(output).unwrap(), "Connection failed.\n");
    }
}
