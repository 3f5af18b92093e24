//! Interactive single lookup, the console face of [`Gate::balance`].

use balance_gate::{
    errors::ChainError,
    types::{BalanceResult, Chain},
    Gate,
};
use std::io::{self, BufRead, Write};

const CHOOSE_CHAIN: &str = "Check balance on (1) Ethereum or (2) Solana? Enter 1 or 2: ";
const INVALID_CHOICE: &str = "Invalid choice. Please enter 1 or 2.";

pub async fn run<R: BufRead, W: Write>(gate: &Gate, input: &mut R, output: &mut W) -> io::Result<()> {
    let chain = match prompt(input, output, CHOOSE_CHAIN)?.trim() {
        "1" => Chain::Ethereum,
        "2" => Chain::Solana,
        _ => return writeln!(output, "{INVALID_CHOICE}"),
    };

    let question = match chain {
        Chain::Ethereum => "Enter an Ethereum address to check balance: ",
        Chain::Solana => "Enter a Solana wallet address to check balance: ",
    };
    let address = prompt(input, output, question)?;

    let res = gate.balance(chain, &address).await;

    writeln!(output, "{}", render(chain, &address, res))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn render(chain: Chain, raw: &str, res: Result<BalanceResult, ChainError>) -> String {
    match (chain, res) {
        (_, Ok(balance)) => format!(
            "{ticker} balance of {}: {} {ticker}",
            balance.address,
            balance.amount,
            ticker = balance.chain.ticker()
        ),
        (Chain::Ethereum, Err(ChainError::InvalidAddress(msg))) => {
            format!("Invalid address: {raw} ({msg})")
        }
        (Chain::Ethereum, Err(ChainError::RpcFailure(msg))) => {
            format!("Error fetching balance: {msg}")
        }
        (Chain::Solana, Err(e)) => format!("Invalid Solana address or request failed: {e}"),
    }
}
